use std::collections::HashSet;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{ensure, Addr};
use cw_storage_plus::Item;
use dtoken_handler::HandlerContract;
use dtoken_std::AccessControl;

use crate::{contract::ContractResult, error::ContractError};

pub const HANDLERS: Item<HandlerRegistry> = Item::new("handlers");
pub const ROLES: AccessControl = AccessControl::new("owner", "manager");

#[cw_serde]
pub struct HandlerEntry {
    pub handler: Addr,
    /// Relative weight, only meaningful against the sum of all weights
    pub proportion: u64,
}

/// Active handlers, in registry order
#[cw_serde]
pub struct HandlerRegistry(pub Vec<HandlerEntry>);

impl HandlerRegistry {
    pub fn new(handlers: Vec<Addr>, proportions: Vec<u64>) -> ContractResult<Self> {
        ensure_same_len(&handlers, &proportions)?;
        let registry = Self(
            handlers
                .into_iter()
                .zip(proportions)
                .map(|(handler, proportion)| HandlerEntry {
                    handler,
                    proportion,
                })
                .collect(),
        );
        registry.check()?;
        Ok(registry)
    }

    /// A usable registry is non-empty, has no duplicate and a non-zero total weight
    pub fn check(&self) -> ContractResult<()> {
        ensure!(!self.0.is_empty(), ContractError::EmptyHandlerList {});
        let mut seen = HashSet::new();
        for entry in &self.0 {
            ensure!(
                seen.insert(&entry.handler),
                ContractError::DuplicateHandler(entry.handler.to_string())
            );
        }
        ensure!(
            self.total_proportion() > 0,
            ContractError::ZeroTotalProportion {}
        );
        Ok(())
    }

    pub fn total_proportion(&self) -> u128 {
        self.0.iter().map(|e| u128::from(e.proportion)).sum()
    }

    pub fn contains(&self, handler: &Addr) -> bool {
        self.0.iter().any(|e| &e.handler == handler)
    }

    /// New handlers join with a zero weight, they receive nothing until reweighted
    pub fn add(&mut self, handlers: Vec<Addr>) -> ContractResult<()> {
        ensure!(!handlers.is_empty(), ContractError::EmptyHandlerList {});
        for handler in handlers {
            ensure!(
                !self.contains(&handler),
                ContractError::DuplicateHandler(handler.to_string())
            );
            self.0.push(HandlerEntry {
                handler,
                proportion: 0,
            });
        }
        Ok(())
    }

    pub fn update_proportions(
        &mut self,
        handlers: Vec<Addr>,
        proportions: Vec<u64>,
    ) -> ContractResult<()> {
        ensure_same_len(&handlers, &proportions)?;
        ensure!(!handlers.is_empty(), ContractError::EmptyHandlerList {});
        let mut seen = HashSet::new();
        for (handler, proportion) in handlers.into_iter().zip(proportions) {
            ensure!(
                seen.insert(handler.clone()),
                ContractError::DuplicateHandler(handler.to_string())
            );
            let entry = self
                .0
                .iter_mut()
                .find(|e| e.handler == handler)
                .ok_or_else(|| ContractError::HandlerNotFound(handler.to_string()))?;
            entry.proportion = proportion;
        }
        self.check()
    }

    pub fn handlers(&self) -> Vec<HandlerContract> {
        self.0
            .iter()
            .map(|e| HandlerContract(e.handler.clone()))
            .collect()
    }

    pub fn proportions(&self) -> Vec<u64> {
        self.0.iter().map(|e| e.proportion).collect()
    }
}

fn ensure_same_len<T, U>(handlers: &[T], proportions: &[U]) -> ContractResult<()> {
    ensure!(
        handlers.len() == proportions.len(),
        ContractError::ProportionLengthMismatch {
            handlers: handlers.len(),
            proportions: proportions.len(),
        }
    );
    Ok(())
}
