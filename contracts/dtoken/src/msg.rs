use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Decimal, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Underlying stable token
    pub token: String,
    /// Can be attached later with `UpdateDispatcher`
    pub dispatcher: Option<String>,
}

#[cw_serde]
#[cfg_attr(feature = "interface", derive(cw_orch::ExecuteFns))]
pub enum ExecuteMsg {
    /// Deposits `amount` of underlying from the caller and credits dToken to `recipient`.
    /// The caller must have approved the dToken on the underlying token.
    Mint { recipient: String, amount: Uint128 },
    /// Burns `amount` dToken of `owner` and pays the underlying back to `owner`
    Burn { owner: String, amount: Uint128 },
    /// Pays `amount` of underlying to `owner`, burning the dToken it is worth
    Redeem { owner: String, amount: Uint128 },
    Transfer { recipient: String, amount: Uint128 },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// `Uint128::MAX` grants an unlimited allowance
    Approve { spender: String, amount: Uint128 },
    UpdateDispatcher { dispatcher: String },
    SetManager { manager: String },
    TransferOwnership { owner: String },
}

#[cw_serde]
#[cfg_attr(feature = "interface", derive(cw_orch::QueryFns))]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(dtoken_std::ledger::BalanceResponse)]
    Balance { address: String },
    #[returns(dtoken_std::ledger::AllowanceResponse)]
    Allowance { owner: String, spender: String },
    #[returns(dtoken_std::ledger::TokenInfoResponse)]
    TokenInfo {},
    /// Underlying per dToken
    #[returns(Decimal)]
    ExchangeRate {},
    /// Handlers of the attached dispatcher, empty without one
    #[returns(Vec<Addr>)]
    Handlers {},
    #[returns(Option<Addr>)]
    Dispatcher {},
    /// Underlying held across all handlers
    #[returns(Uint128)]
    TotalUnderlying {},
    /// Underlying the dToken balance of `address` is worth
    #[returns(Uint128)]
    UnderlyingBalance { address: String },
    #[returns(bool)]
    IsManager { address: String },
    #[returns(dtoken_std::RolesResponse)]
    Roles {},
}
