use cosmwasm_std::{Addr, Api, DepsMut, Env, MessageInfo, Response, StdResult};

use crate::{
    contract::ContractResult,
    msg::ExecuteMsg,
    state::{HANDLERS, ROLES},
};

pub fn execute_handler(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult {
    cw_utils::nonpayable(&info)?;
    match msg {
        ExecuteMsg::AddHandler { handlers } => add_handler(deps, info, handlers),
        ExecuteMsg::UpdateProportion {
            handlers,
            proportions,
        } => update_proportion(deps, info, handlers, proportions),
        ExecuteMsg::SetManager { manager } => set_manager(deps, info, manager),
        ExecuteMsg::TransferOwnership { owner } => transfer_ownership(deps, info, owner),
    }
}

fn validate_all(api: &dyn Api, addresses: &[String]) -> StdResult<Vec<Addr>> {
    addresses.iter().map(|a| api.addr_validate(a)).collect()
}

fn add_handler(deps: DepsMut, info: MessageInfo, handlers: Vec<String>) -> ContractResult {
    ROLES.assert_manager(deps.as_ref(), &info.sender)?;
    let handlers = validate_all(deps.api, &handlers)?;

    let mut registry = HANDLERS.load(deps.storage)?;
    registry.add(handlers.clone())?;
    HANDLERS.save(deps.storage, &registry)?;

    let added = handlers
        .iter()
        .map(Addr::as_str)
        .collect::<Vec<_>>()
        .join(",");
    Ok(Response::new()
        .add_attribute("action", "add_handler")
        .add_attribute("handlers", added))
}

fn update_proportion(
    deps: DepsMut,
    info: MessageInfo,
    handlers: Vec<String>,
    proportions: Vec<u64>,
) -> ContractResult {
    ROLES.assert_manager(deps.as_ref(), &info.sender)?;
    let handlers = validate_all(deps.api, &handlers)?;

    let mut registry = HANDLERS.load(deps.storage)?;
    registry.update_proportions(handlers, proportions)?;
    HANDLERS.save(deps.storage, &registry)?;

    let weights = registry
        .proportions()
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    Ok(Response::new()
        .add_attribute("action", "update_proportion")
        .add_attribute("proportions", weights))
}

fn set_manager(deps: DepsMut, info: MessageInfo, manager: String) -> ContractResult {
    let manager = deps.api.addr_validate(&manager)?;
    ROLES.set_manager(deps, &info.sender, manager.clone())?;
    Ok(Response::new()
        .add_attribute("action", "set_manager")
        .add_attribute("manager", manager))
}

fn transfer_ownership(deps: DepsMut, info: MessageInfo, owner: String) -> ContractResult {
    let owner = deps.api.addr_validate(&owner)?;
    ROLES.transfer_ownership(deps, &info.sender, owner.clone())?;
    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("owner", owner))
}
