use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Response, StdResult};

use crate::{
    contract::ContractResult,
    msg::InstantiateMsg,
    state::{HandlerRegistry, HANDLERS, ROLES},
};

pub fn instantiate_handler(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult {
    let handlers = msg
        .handlers
        .iter()
        .map(|h| deps.api.addr_validate(h))
        .collect::<StdResult<Vec<Addr>>>()?;
    let registry = HandlerRegistry::new(handlers, msg.proportions)?;

    HANDLERS.save(deps.storage, &registry)?;
    ROLES.initialize(deps.branch(), &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate_dispatcher")
        .add_attribute("owner", info.sender)
        .add_attribute("handlers", registry.0.len().to_string()))
}
