use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Response};
use dtoken_dispatcher::DispatcherContract;

use crate::{
    contract::ContractResult,
    error::ContractError,
    msg::InstantiateMsg,
    state::{Config, TokenInfo, CONFIG, DISPATCHER, LEDGER, ROLES, TOKEN_INFO},
};

pub fn instantiate_handler(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult {
    ensure!(
        !msg.name.is_empty() && !msg.symbol.is_empty(),
        ContractError::InvalidTokenInfo("name and symbol are required".to_owned())
    );
    ensure!(
        msg.decimals <= 18,
        ContractError::InvalidTokenInfo("decimals must not exceed 18".to_owned())
    );
    let token = deps.api.addr_validate(&msg.token)?;

    if let Some(dispatcher) = msg.dispatcher {
        let dispatcher = DispatcherContract(deps.api.addr_validate(&dispatcher)?);
        // Must answer as a dispatcher before it is trusted with routing
        dispatcher.handlers(&deps.querier)?;
        DISPATCHER.save(deps.storage, &dispatcher.addr())?;
    }

    CONFIG.save(deps.storage, &Config { token: token.clone() })?;
    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
        },
    )?;
    LEDGER.initialize(deps.storage)?;
    ROLES.initialize(deps.branch(), &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate_dtoken")
        .add_attribute("owner", info.sender)
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("token", token))
}
