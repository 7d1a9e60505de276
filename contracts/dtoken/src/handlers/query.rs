use cosmwasm_std::{to_json_binary, Addr, Binary, Decimal, Deps, Env, Uint128};
use dtoken_dispatcher::DispatcherContract;
use dtoken_std::{
    ledger::{AllowanceResponse, BalanceResponse, TokenInfoResponse},
    math::{exchange_rate, to_underlying},
};

use crate::{
    contract::ContractResult,
    helpers::total_underlying,
    msg::QueryMsg,
    state::{DISPATCHER, LEDGER, ROLES, TOKEN_INFO},
};

pub fn query_handler(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::ExchangeRate {} => to_json_binary(&query_exchange_rate(deps)?),
        QueryMsg::Handlers {} => to_json_binary(&query_handlers(deps)?),
        QueryMsg::Dispatcher {} => to_json_binary(&DISPATCHER.may_load(deps.storage)?),
        QueryMsg::TotalUnderlying {} => to_json_binary(&total_underlying(deps)?),
        QueryMsg::UnderlyingBalance { address } => {
            to_json_binary(&query_underlying_balance(deps, address)?)
        }
        QueryMsg::IsManager { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&ROLES.is_manager(deps, &address)?)
        }
        QueryMsg::Roles {} => to_json_binary(&ROLES.query(deps)?),
    }
    .map_err(Into::into)
}

fn query_balance(deps: Deps, address: String) -> ContractResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(BalanceResponse {
        balance: LEDGER.balance(deps.storage, &address)?,
    })
}

fn query_allowance(deps: Deps, owner: String, spender: String) -> ContractResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    Ok(LEDGER.allowance(deps.storage, &owner, &spender)?.into())
}

fn query_token_info(deps: Deps) -> ContractResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: LEDGER.total_supply(deps.storage)?,
    })
}

fn query_exchange_rate(deps: Deps) -> ContractResult<Decimal> {
    let supply = LEDGER.total_supply(deps.storage)?;
    Ok(exchange_rate(total_underlying(deps)?, supply)?)
}

fn query_handlers(deps: Deps) -> ContractResult<Vec<Addr>> {
    match DISPATCHER.may_load(deps.storage)? {
        Some(dispatcher) => Ok(DispatcherContract(dispatcher)
            .handlers(&deps.querier)?
            .handlers),
        None => Ok(vec![]),
    }
}

fn query_underlying_balance(deps: Deps, address: String) -> ContractResult<Uint128> {
    let address = deps.api.addr_validate(&address)?;
    let balance = LEDGER.balance(deps.storage, &address)?;
    let supply = LEDGER.total_supply(deps.storage)?;
    if balance.is_zero() || supply.is_zero() {
        return Ok(Uint128::zero());
    }
    Ok(to_underlying(balance, total_underlying(deps)?, supply)?)
}
