use cosmwasm_std::{Deps, Uint128};
use dtoken_dispatcher::DispatcherContract;
use dtoken_std::custodian::total_held;

use crate::{
    contract::ContractResult,
    state::{CONFIG, DISPATCHER},
};

/// Underlying held across the handlers of the attached dispatcher, zero without one
pub(crate) fn total_underlying(deps: Deps) -> ContractResult<Uint128> {
    let Some(dispatcher) = DISPATCHER.may_load(deps.storage)? else {
        return Ok(Uint128::zero());
    };
    let token = CONFIG.load(deps.storage)?.token;
    let handlers = DispatcherContract(dispatcher).custodians(&deps.querier)?;
    Ok(total_held(&handlers, &deps.querier, &token)?)
}
