use cosmwasm_std::{
    ensure, Addr, CosmosMsg, Deps, DepsMut, Env, MessageInfo, QuerierWrapper, Response, Uint128,
};
use dtoken_dispatcher::DispatcherContract;
use dtoken_handler::HandlerContract;
use dtoken_std::{
    custodian::total_held,
    math::{multiply_ratio_ceil, to_shares, to_underlying},
    Allocation, Allowance, Custodian, LedgerError,
};
use stable_token::helpers::StableTokenContract;

use crate::{
    contract::ContractResult,
    error::ContractError,
    msg::ExecuteMsg,
    state::{CONFIG, DISPATCHER, LEDGER, ROLES},
};

pub fn execute_handler(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult {
    cw_utils::nonpayable(&info)?;
    match msg {
        ExecuteMsg::Mint { recipient, amount } => mint(deps, env, info, recipient, amount),
        ExecuteMsg::Burn { owner, amount } => burn(deps, info, owner, amount),
        ExecuteMsg::Redeem { owner, amount } => redeem(deps, info, owner, amount),
        ExecuteMsg::Transfer { recipient, amount } => transfer(deps, info, recipient, amount),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => transfer_from(deps, info, owner, recipient, amount),
        ExecuteMsg::Approve { spender, amount } => approve(deps, info, spender, amount),
        ExecuteMsg::UpdateDispatcher { dispatcher } => update_dispatcher(deps, info, dispatcher),
        ExecuteMsg::SetManager { manager } => set_manager(deps, info, manager),
        ExecuteMsg::TransferOwnership { owner } => transfer_ownership(deps, info, owner),
    }
}

/// Underlying side of the vault, read once at the start of a mint or a burn
struct Vault {
    token: StableTokenContract,
    dispatcher: DispatcherContract,
    underlying: Uint128,
    supply: Uint128,
}

impl Vault {
    fn load(deps: Deps) -> ContractResult<Self> {
        let dispatcher = DISPATCHER
            .may_load(deps.storage)?
            .map(DispatcherContract)
            .ok_or(ContractError::NoDispatcher {})?;
        let token = StableTokenContract(CONFIG.load(deps.storage)?.token);
        let handlers = dispatcher.custodians(&deps.querier)?;
        let underlying = total_held(&handlers, &deps.querier, &token.addr())?;
        Ok(Self {
            token,
            dispatcher,
            underlying,
            supply: LEDGER.total_supply(deps.storage)?,
        })
    }

    /// Pulls `amount` from `depositor` straight into the handlers
    fn deposit(
        &self,
        querier: &QuerierWrapper,
        depositor: &Addr,
        amount: Uint128,
    ) -> ContractResult<Vec<CosmosMsg>> {
        let allocations = self.dispatcher.deposit_strategy(querier, amount)?;
        let mut messages = Vec::with_capacity(allocations.len() * 2);
        for Allocation { handler, amount } in allocations {
            messages.push(self.token.transfer_from_msg(depositor, &handler, amount)?);
            messages.push(HandlerContract(handler).accept_msg(&self.token.addr(), amount)?);
        }
        Ok(messages)
    }

    /// Frees `amount` on the handlers and collects it for `recipient`. Relies on the
    /// allowance every handler grants the dToken with its `Approve` call.
    fn release(
        &self,
        querier: &QuerierWrapper,
        recipient: &Addr,
        amount: Uint128,
    ) -> ContractResult<Vec<CosmosMsg>> {
        let allocations = self
            .dispatcher
            .withdraw_strategy(querier, &self.token.addr(), amount)?;
        let mut messages = Vec::with_capacity(allocations.len() * 2);
        for Allocation { handler, amount } in allocations {
            messages.push(HandlerContract(handler.clone()).release_msg(&self.token.addr(), amount)?);
            messages.push(self.token.transfer_from_msg(&handler, recipient, amount)?);
        }
        Ok(messages)
    }
}

fn mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> ContractResult {
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});
    let recipient = deps.api.addr_validate(&recipient)?;

    let token = StableTokenContract(CONFIG.load(deps.storage)?.token);
    let approved = token.allowance(&deps.querier, &info.sender, &env.contract.address)?;
    ensure!(approved.covers(amount), LedgerError::InsufficientApproval {});

    let vault = Vault::load(deps.as_ref())?;

    let shares = to_shares(amount, vault.underlying, vault.supply)?;
    ensure!(!shares.is_zero(), ContractError::MintTooSmall {});
    let messages = vault.deposit(&deps.querier, &info.sender, amount)?;

    LEDGER.mint(deps.storage, &recipient, shares)?;
    deps.api.debug(&format!(
        "dtoken: minted {shares} for {amount} underlying, {} transfers",
        messages.len() / 2
    ));

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "mint")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("shares", shares))
}

fn burn(deps: DepsMut, info: MessageInfo, owner: String, amount: Uint128) -> ContractResult {
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});
    let owner = deps.api.addr_validate(&owner)?;
    let vault = Vault::load(deps.as_ref())?;
    ensure!(
        LEDGER.balance(deps.storage, &owner)? >= amount,
        LedgerError::InsufficientBalance {}
    );

    let payout = to_underlying(amount, vault.underlying, vault.supply)?;
    ensure!(!payout.is_zero(), ContractError::NothingToRedeem {});
    let messages = vault.release(&deps.querier, &owner, payout)?;

    LEDGER.spend_allowance(deps.storage, &owner, &info.sender, amount)?;
    LEDGER.burn(deps.storage, &owner, amount)?;
    deps.api.debug(&format!(
        "dtoken: burned {amount} of {owner} for {payout} underlying"
    ));

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "burn")
        .add_attribute("sender", info.sender)
        .add_attribute("owner", owner)
        .add_attribute("amount", amount)
        .add_attribute("payout", payout))
}

fn redeem(deps: DepsMut, info: MessageInfo, owner: String, amount: Uint128) -> ContractResult {
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});
    let owner = deps.api.addr_validate(&owner)?;
    let vault = Vault::load(deps.as_ref())?;
    ensure!(!vault.supply.is_zero(), ContractError::NothingToRedeem {});

    // Rounded up so the vault never pays out more than the burned dToken is worth
    let shares = multiply_ratio_ceil(amount, vault.supply, vault.underlying)?;
    ensure!(
        LEDGER.balance(deps.storage, &owner)? >= shares,
        LedgerError::InsufficientBalance {}
    );
    let messages = vault.release(&deps.querier, &owner, amount)?;

    LEDGER.spend_allowance(deps.storage, &owner, &info.sender, shares)?;
    LEDGER.burn(deps.storage, &owner, shares)?;
    deps.api.debug(&format!(
        "dtoken: redeemed {amount} underlying of {owner} for {shares}"
    ));

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "redeem")
        .add_attribute("sender", info.sender)
        .add_attribute("owner", owner)
        .add_attribute("amount", amount)
        .add_attribute("shares", shares))
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
        .add_attribute("amount", amount))
}

/// Switches routing to another dispatcher. Handlers dropped by the switch must be empty.
fn update_dispatcher(deps: DepsMut, info: MessageInfo, dispatcher: String) -> ContractResult {
    ROLES.assert_manager(deps.as_ref(), &info.sender)?;
    let next = DispatcherContract(deps.api.addr_validate(&dispatcher)?);
    let next_handlers = next.handlers(&deps.querier)?.handlers;

    let previous = DISPATCHER.may_load(deps.storage)?;
    if let Some(previous) = &previous {
        let token = CONFIG.load(deps.storage)?.token;
        for handler in DispatcherContract(previous.clone()).custodians(&deps.querier)? {
            if next_handlers.contains(handler.addr()) {
                continue;
            }
            ensure!(
                handler.balance(&deps.querier, &token)?.is_zero(),
                ContractError::StrandedFunds(handler.addr().to_string())
            );
        }
    }
    DISPATCHER.save(deps.storage, &next.addr())?;

    let mut response = Response::new().add_attribute("action", "update_dispatcher");
    if let Some(previous) = previous {
        response = response.add_attribute("previous", previous);
    }
    Ok(response.add_attribute("dispatcher", next.addr()))
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
