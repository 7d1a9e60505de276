use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Response};

use crate::{
    contract::ContractResult,
    error::ContractError,
    msg::InstantiateMsg,
    state::{TokenInfo, LEDGER, TOKEN_INFO},
};

pub fn instantiate_handler(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
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

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
        },
    )?;
    LEDGER.initialize(deps.storage)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate_stable_token")
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol))
}
