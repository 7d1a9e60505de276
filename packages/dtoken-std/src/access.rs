use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Deps, DepsMut, StdResult};
use cw_controllers::{Admin, AdminError};

/// Owner / manager role pair carried in contract state.
///
/// The owner is the instantiator. The manager is assigned later and is allowed
/// to run the operational calls of a contract (handler registry, dispatcher
/// switch, ...). The owner keeps every manager right.
pub struct AccessControl<'a> {
    owner: Admin<'a>,
    manager: Admin<'a>,
}

#[cw_serde]
pub struct RolesResponse {
    pub owner: Option<Addr>,
    pub manager: Option<Addr>,
}

impl<'a> AccessControl<'a> {
    pub const fn new(owner_namespace: &'a str, manager_namespace: &'a str) -> Self {
        Self {
            owner: Admin::new(owner_namespace),
            manager: Admin::new(manager_namespace),
        }
    }

    pub fn initialize(&self, mut deps: DepsMut, owner: &Addr) -> StdResult<()> {
        self.owner.set(deps.branch(), Some(owner.clone()))?;
        self.manager.set(deps, None)
    }

    pub fn is_owner(&self, deps: Deps, address: &Addr) -> StdResult<bool> {
        self.owner.is_admin(deps, address)
    }

    pub fn is_manager(&self, deps: Deps, address: &Addr) -> StdResult<bool> {
        self.manager.is_admin(deps, address)
    }

    pub fn assert_owner(&self, deps: Deps, sender: &Addr) -> Result<(), AdminError> {
        self.owner.assert_admin(deps, sender)
    }

    /// Passes for the current manager and for the owner
    pub fn assert_manager(&self, deps: Deps, sender: &Addr) -> Result<(), AdminError> {
        if self.is_manager(deps, sender)? || self.is_owner(deps, sender)? {
            Ok(())
        } else {
            Err(AdminError::NotAdmin {})
        }
    }

    /// Only the owner can appoint the first manager. Once a manager exists it
    /// may also hand the role over.
    pub fn set_manager(
        &self,
        deps: DepsMut,
        sender: &Addr,
        new_manager: Addr,
    ) -> Result<(), AdminError> {
        self.assert_manager(deps.as_ref(), sender)?;
        self.manager.set(deps, Some(new_manager))?;
        Ok(())
    }

    pub fn transfer_ownership(
        &self,
        deps: DepsMut,
        sender: &Addr,
        new_owner: Addr,
    ) -> Result<(), AdminError> {
        self.assert_owner(deps.as_ref(), sender)?;
        self.owner.set(deps, Some(new_owner))?;
        Ok(())
    }

    pub fn query(&self, deps: Deps) -> StdResult<RolesResponse> {
        Ok(RolesResponse {
            owner: self.owner.get(deps)?,
            manager: self.manager.get(deps)?,
        })
    }
}
