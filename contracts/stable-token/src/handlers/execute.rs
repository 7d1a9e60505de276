use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Response, Uint128};
use dtoken_std::Allowance;

use crate::{contract::ContractResult, error::ContractError, msg::ExecuteMsg, state::LEDGER};

pub fn execute_handler(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult {
    cw_utils::nonpayable(&info)?;
    match msg {
        ExecuteMsg::AllocateTo { recipient, amount } => allocate_to(deps, info, recipient, amount),
        ExecuteMsg::Transfer { recipient, amount } => transfer(deps, info, recipient, amount),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => transfer_from(deps, info, owner, recipient, amount),
        ExecuteMsg::Approve { spender, amount } => approve(deps, info, spender, amount),
    }
}

/// Faucet mint. Open to anyone, this token only exists to fund test accounts
fn allocate_to(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> ContractResult {
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});
    let recipient = deps.api.addr_validate(&recipient)?;

    LEDGER.mint(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "allocate_to")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

fn transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> ContractResult {
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});
    let recipient = deps.api.addr_validate(&recipient)?;

    LEDGER.transfer(deps.storage, &info.sender, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

fn transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> ContractResult {
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    LEDGER.transfer_from(deps.storage, &info.sender, &owner, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("spender", info.sender)
        .add_attribute("from", owner)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

fn approve(deps: DepsMut, info: MessageInfo, spender: String, amount: Uint128) -> ContractResult {
    let spender = deps.api.addr_validate(&spender)?;
    let allowance = Allowance::from_amount(amount);

    LEDGER.approve(deps.storage, &info.sender, &spender, allowance)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount)
        .add_attribute("unlimited", allowance.is_unlimited().to_string()))
}
