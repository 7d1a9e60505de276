use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Uint128};

use crate::{
    contract::ContractResult,
    msg::{HandlersResponse, QueryMsg, StrategyResponse},
    state::{HANDLERS, ROLES},
};

pub fn query_handler(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::Handlers {} => to_json_binary(&query_handlers(deps)?),
        QueryMsg::DepositStrategy { amount } => {
            to_json_binary(&query_deposit_strategy(deps, amount)?)
        }
        QueryMsg::WithdrawStrategy { token, amount } => {
            to_json_binary(&query_withdraw_strategy(deps, token, amount)?)
        }
        QueryMsg::IsManager { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&ROLES.is_manager(deps, &address)?)
        }
        QueryMsg::Roles {} => to_json_binary(&ROLES.query(deps)?),
    }
    .map_err(Into::into)
}

fn query_handlers(deps: Deps) -> ContractResult<HandlersResponse> {
    let registry = HANDLERS.load(deps.storage)?;
    let (handlers, proportions) = registry
        .0
        .into_iter()
        .map(|e| (e.handler, e.proportion))
        .unzip();
    Ok(HandlersResponse {
        handlers,
        proportions,
    })
}

fn query_deposit_strategy(deps: Deps, amount: Uint128) -> ContractResult<StrategyResponse> {
    let registry = HANDLERS.load(deps.storage)?;
    Ok(StrategyResponse {
        allocations: registry.deposit_strategy(amount)?,
    })
}

fn query_withdraw_strategy(
    deps: Deps,
    token: String,
    amount: Uint128,
) -> ContractResult<StrategyResponse> {
    let token = deps.api.addr_validate(&token)?;
    let registry = HANDLERS.load(deps.storage)?;
    Ok(StrategyResponse {
        allocations: registry.withdraw_strategy(&deps.querier, &token, amount)?,
    })
}
