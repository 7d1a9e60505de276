use cosmwasm_std::{ensure, Addr, QuerierWrapper, Uint128};
use dtoken_std::{Allocation, Custodian};

use crate::{contract::ContractResult, error::ContractError, state::HandlerRegistry};

/// Splits `amount` by weight. Rounding dust goes to the first handler with a
/// non-zero weight so the parts always add up to `amount`.
pub fn split_by_weight(amount: Uint128, weights: &[u64]) -> ContractResult<Vec<Uint128>> {
    let total: u128 = weights.iter().map(|w| u128::from(*w)).sum();
    ensure!(total > 0, ContractError::ZeroTotalProportion {});

    let mut parts: Vec<Uint128> = weights
        .iter()
        .map(|w| amount.multiply_ratio(*w, total))
        .collect();
    let distributed = parts
        .iter()
        .try_fold(Uint128::zero(), |acc, p| acc.checked_add(*p))?;
    let dust = amount.checked_sub(distributed)?;
    if let Some(first) = weights.iter().position(|w| *w > 0) {
        parts[first] = parts[first].checked_add(dust)?;
    }
    Ok(parts)
}

/// Decides how much each handler releases for a withdrawal of `amount`.
///
/// Each handler first gives its weighted share, capped at what it holds. Any
/// shortfall is then taken from the remaining liquidity in registry order.
pub fn plan_withdraw(
    amount: Uint128,
    weights: &[u64],
    balances: &[Uint128],
) -> ContractResult<Vec<Uint128>> {
    let available = balances
        .iter()
        .try_fold(Uint128::zero(), |acc, b| acc.checked_add(*b))?;
    ensure!(
        available >= amount,
        ContractError::InsufficientLiquidity {
            requested: amount,
            available,
        }
    );

    let mut parts: Vec<Uint128> = split_by_weight(amount, weights)?
        .into_iter()
        .zip(balances)
        .map(|(target, balance)| target.min(*balance))
        .collect();

    let mut shortfall = amount.checked_sub(
        parts
            .iter()
            .try_fold(Uint128::zero(), |acc, p| acc.checked_add(*p))?,
    )?;
    for (part, balance) in parts.iter_mut().zip(balances) {
        if shortfall.is_zero() {
            break;
        }
        let extra = balance.checked_sub(*part)?.min(shortfall);
        *part += extra;
        shortfall -= extra;
    }
    Ok(parts)
}

fn allocations(handlers: Vec<Addr>, amounts: Vec<Uint128>) -> Vec<Allocation> {
    handlers
        .into_iter()
        .zip(amounts)
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(handler, amount)| Allocation { handler, amount })
        .collect()
}

impl HandlerRegistry {
    pub fn deposit_strategy(&self, amount: Uint128) -> ContractResult<Vec<Allocation>> {
        let parts = split_by_weight(amount, &self.proportions())?;
        Ok(allocations(self.addresses(), parts))
    }

    pub fn withdraw_strategy(
        &self,
        querier: &QuerierWrapper,
        token: &Addr,
        amount: Uint128,
    ) -> ContractResult<Vec<Allocation>> {
        let balances = self
            .handlers()
            .iter()
            .map(|handler| handler.balance(querier, token))
            .collect::<Result<Vec<_>, _>>()?;
        let parts = plan_withdraw(amount, &self.proportions(), &balances)?;
        Ok(allocations(self.addresses(), parts))
    }

    fn addresses(&self) -> Vec<Addr> {
        self.0.iter().map(|e| e.handler.clone()).collect()
    }
}
