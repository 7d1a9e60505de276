use cosmwasm_std::{to_json_binary, Binary, Deps, Env};
use dtoken_std::ledger::{AllowanceResponse, BalanceResponse, TokenInfoResponse};

use crate::{
    contract::ContractResult,
    msg::QueryMsg,
    state::{LEDGER, TOKEN_INFO},
};

pub fn query_handler(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
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
