use cosmwasm_std::{ensure, ensure_eq, DepsMut, Env, MessageInfo, Response, Uint128};
use dtoken_std::Allowance;
use stable_token::helpers::StableTokenContract;

use crate::{
    contract::ContractResult,
    error::ContractError,
    msg::ExecuteMsg,
    state::{Config, CONFIG, PRINCIPAL, ROLES},
};

pub fn execute_handler(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult {
    cw_utils::nonpayable(&info)?;
    match msg {
        ExecuteMsg::Approve { token } => approve(deps, info, token),
        ExecuteMsg::Deposit { token, amount } => deposit(deps, info, token, amount),
        ExecuteMsg::Withdraw { token, amount } => withdraw(deps, env, info, token, amount),
        ExecuteMsg::SetManager { manager } => set_manager(deps, info, manager),
        ExecuteMsg::TransferOwnership { owner } => transfer_ownership(deps, info, owner),
    }
}

fn assert_dtoken(config: &Config, info: &MessageInfo) -> ContractResult<()> {
    ensure_eq!(info.sender, config.dtoken, ContractError::Unauthorized {});
    Ok(())
}

fn approve(deps: DepsMut, info: MessageInfo, token: String) -> ContractResult {
    ROLES.assert_manager(deps.as_ref(), &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    let token = StableTokenContract(deps.api.addr_validate(&token)?);

    let approve_msg = token.approve_msg(&config.dtoken, Allowance::Unlimited)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("token", token.addr())
        .add_attribute("spender", config.dtoken)
        .add_message(approve_msg))
}

fn deposit(deps: DepsMut, info: MessageInfo, token: String, amount: Uint128) -> ContractResult {
    let config = CONFIG.load(deps.storage)?;
    assert_dtoken(&config, &info)?;
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});
    let token = deps.api.addr_validate(&token)?;

    let principal = PRINCIPAL
        .may_load(deps.storage, &token)?
        .unwrap_or_default()
        .checked_add(amount)?;
    PRINCIPAL.save(deps.storage, &token, &principal)?;

    Ok(Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("market", config.market)
        .add_attribute("token", token)
        .add_attribute("amount", amount)
        .add_attribute("principal", principal))
}

fn withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> ContractResult {
    let config = CONFIG.load(deps.storage)?;
    assert_dtoken(&config, &info)?;
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});
    let token = deps.api.addr_validate(&token)?;

    let available =
        StableTokenContract(token.clone()).balance(&deps.querier, &env.contract.address)?;
    ensure!(
        available >= amount,
        ContractError::InsufficientLiquidity {
            requested: amount,
            available,
        }
    );

    let principal = PRINCIPAL.may_load(deps.storage, &token)?.unwrap_or_default();
    let principal = released_principal(principal, available, amount);
    PRINCIPAL.save(deps.storage, &token, &principal)?;

    Ok(Response::new()
        .add_attribute("action", "withdraw")
        .add_attribute("market", config.market)
        .add_attribute("token", token)
        .add_attribute("amount", amount)
        .add_attribute("principal", principal))
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

/// Principal left after releasing `amount` out of `available`. Accrued yield
/// (whatever sits above the principal) is paid out first.
pub(crate) fn released_principal(principal: Uint128, available: Uint128, amount: Uint128) -> Uint128 {
    let interest = available.saturating_sub(principal);
    principal.saturating_sub(amount.saturating_sub(interest))
}
