use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use dtoken_std::AccessControl;

pub const CONFIG: Item<Config> = Item::new("config");
pub const ROLES: AccessControl = AccessControl::new("owner", "manager");
/// Amount of each token the dToken placed here, yield excluded
pub const PRINCIPAL: Map<&Addr, Uint128> = Map::new("principal");

#[cw_serde]
pub struct Config {
    /// Yield venue this handler supplies to
    pub market: Addr,
    /// The only address allowed to deposit and withdraw, and the spender of handler funds
    pub dtoken: Addr,
}
