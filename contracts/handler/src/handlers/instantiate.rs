use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::{
    contract::ContractResult,
    msg::InstantiateMsg,
    state::{Config, CONFIG, ROLES},
};

pub fn instantiate_handler(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult {
    let config = Config {
        market: deps.api.addr_validate(&msg.market)?,
        dtoken: deps.api.addr_validate(&msg.dtoken)?,
    };
    CONFIG.save(deps.storage, &config)?;
    ROLES.initialize(deps.branch(), &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate_handler")
        .add_attribute("owner", info.sender)
        .add_attribute("market", config.market)
        .add_attribute("dtoken", config.dtoken))
}
