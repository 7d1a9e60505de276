use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, OverflowError, StdError, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};
use thiserror::Error;

use crate::allowance::Allowance;

/// Failure identifiers of the ledger. The `ds-token-*` strings are kept verbatim,
/// integrations match on them.
#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("ds-token-insufficient-balance")]
    InsufficientBalance {},

    #[error("ds-token-insufficient-approval")]
    InsufficientApproval {},
}

/// Balances, allowances and total supply of a fungible token.
///
/// Sum of all balances always equals the total supply: every mutation here
/// updates both sides or fails before writing anything.
pub struct TokenLedger<'a> {
    balances: Map<'a, &'a Addr, Uint128>,
    allowances: Map<'a, (&'a Addr, &'a Addr), Allowance>,
    total_supply: Item<'a, Uint128>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct AllowanceResponse {
    /// `Uint128::MAX` when unlimited
    pub allowance: Uint128,
    pub unlimited: bool,
}

impl From<Allowance> for AllowanceResponse {
    fn from(value: Allowance) -> Self {
        Self {
            allowance: value.amount(),
            unlimited: value.is_unlimited(),
        }
    }
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}

impl<'a> TokenLedger<'a> {
    pub const fn new(
        balances_namespace: &'a str,
        allowances_namespace: &'a str,
        supply_namespace: &'a str,
    ) -> Self {
        Self {
            balances: Map::new(balances_namespace),
            allowances: Map::new(allowances_namespace),
            total_supply: Item::new(supply_namespace),
        }
    }

    pub fn initialize(&self, storage: &mut dyn Storage) -> StdResult<()> {
        self.total_supply.save(storage, &Uint128::zero())
    }

    pub fn balance(&self, storage: &dyn Storage, owner: &Addr) -> StdResult<Uint128> {
        Ok(self.balances.may_load(storage, owner)?.unwrap_or_default())
    }

    pub fn total_supply(&self, storage: &dyn Storage) -> StdResult<Uint128> {
        Ok(self.total_supply.may_load(storage)?.unwrap_or_default())
    }

    pub fn allowance(
        &self,
        storage: &dyn Storage,
        owner: &Addr,
        spender: &Addr,
    ) -> StdResult<Allowance> {
        Ok(self
            .allowances
            .may_load(storage, (owner, spender))?
            .unwrap_or_default())
    }

    /// Overwrites the allowance, approve semantics
    pub fn approve(
        &self,
        storage: &mut dyn Storage,
        owner: &Addr,
        spender: &Addr,
        allowance: Allowance,
    ) -> StdResult<()> {
        if allowance.is_zero() {
            self.allowances.remove(storage, (owner, spender));
            Ok(())
        } else {
            self.allowances.save(storage, (owner, spender), &allowance)
        }
    }

    /// Draws `amount` from the allowance `owner` granted to `spender`.
    /// Moving your own funds needs no allowance and unlimited allowances stay untouched.
    pub fn spend_allowance(
        &self,
        storage: &mut dyn Storage,
        owner: &Addr,
        spender: &Addr,
        amount: Uint128,
    ) -> Result<(), LedgerError> {
        if owner == spender {
            return Ok(());
        }
        let current = self.allowance(storage, owner, spender)?;
        if current.is_unlimited() {
            return Ok(());
        }
        let remaining = current
            .spend(amount)
            .ok_or(LedgerError::InsufficientApproval {})?;
        self.approve(storage, owner, spender, remaining)?;
        Ok(())
    }

    pub fn mint(
        &self,
        storage: &mut dyn Storage,
        recipient: &Addr,
        amount: Uint128,
    ) -> Result<(), LedgerError> {
        let supply = self.total_supply(storage)?.checked_add(amount)?;
        let balance = self.balance(storage, recipient)?.checked_add(amount)?;
        self.total_supply.save(storage, &supply)?;
        self.balances.save(storage, recipient, &balance)?;
        Ok(())
    }

    pub fn burn(
        &self,
        storage: &mut dyn Storage,
        owner: &Addr,
        amount: Uint128,
    ) -> Result<(), LedgerError> {
        let balance = self
            .balance(storage, owner)?
            .checked_sub(amount)
            .map_err(|_| LedgerError::InsufficientBalance {})?;
        let supply = self.total_supply(storage)?.checked_sub(amount)?;
        self.total_supply.save(storage, &supply)?;
        self.balances.save(storage, owner, &balance)?;
        Ok(())
    }

    pub fn transfer(
        &self,
        storage: &mut dyn Storage,
        from: &Addr,
        to: &Addr,
        amount: Uint128,
    ) -> Result<(), LedgerError> {
        let from_balance = self
            .balance(storage, from)?
            .checked_sub(amount)
            .map_err(|_| LedgerError::InsufficientBalance {})?;
        self.balances.save(storage, from, &from_balance)?;
        let to_balance = self.balance(storage, to)?.checked_add(amount)?;
        self.balances.save(storage, to, &to_balance)?;
        Ok(())
    }

    /// `spender` moves `amount` of `owner`'s funds to `recipient`
    pub fn transfer_from(
        &self,
        storage: &mut dyn Storage,
        spender: &Addr,
        owner: &Addr,
        recipient: &Addr,
        amount: Uint128,
    ) -> Result<(), LedgerError> {
        self.spend_allowance(storage, owner, spender, amount)?;
        self.transfer(storage, owner, recipient, amount)
    }
}
