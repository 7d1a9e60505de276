use cosmwasm_schema::cw_serde;
use cw_storage_plus::Item;
use dtoken_std::TokenLedger;

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");
pub const LEDGER: TokenLedger = TokenLedger::new("balance", "allowance", "total_supply");

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}
