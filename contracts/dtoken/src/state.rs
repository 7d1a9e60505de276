use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use dtoken_std::{AccessControl, TokenLedger};

pub const CONFIG: Item<Config> = Item::new("config");
pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");
/// Unset until the manager attaches one
pub const DISPATCHER: Item<Addr> = Item::new("dispatcher");
pub const LEDGER: TokenLedger = TokenLedger::new("balance", "allowance", "total_supply");
pub const ROLES: AccessControl = AccessControl::new("owner", "manager");

#[cw_serde]
pub struct Config {
    /// Underlying stable token
    pub token: Addr,
}

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}
