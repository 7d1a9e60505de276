use cosmwasm_std::{to_json_binary, Binary, Deps, Env};
use stable_token::helpers::StableTokenContract;

use crate::{
    contract::ContractResult,
    msg::{HandlerBalanceResponse, QueryMsg},
    state::{Config, CONFIG, PRINCIPAL, ROLES},
};

pub fn query_handler(deps: Deps, env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Balance { token } => to_json_binary(&query_balance(deps, env, token)?),
        QueryMsg::IsManager { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&ROLES.is_manager(deps, &address)?)
        }
        QueryMsg::Roles {} => to_json_binary(&ROLES.query(deps)?),
    }
    .map_err(Into::into)
}

fn query_config(deps: Deps) -> ContractResult<Config> {
    Ok(CONFIG.load(deps.storage)?)
}

fn query_balance(deps: Deps, env: Env, token: String) -> ContractResult<HandlerBalanceResponse> {
    let token = deps.api.addr_validate(&token)?;
    let balance =
        StableTokenContract(token.clone()).balance(&deps.querier, &env.contract.address)?;
    let principal = PRINCIPAL.may_load(deps.storage, &token)?.unwrap_or_default();
    Ok(HandlerBalanceResponse {
        token,
        balance,
        principal,
    })
}
