use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

/// Token instantiate message. The supply starts at zero, funds come from the faucet.
#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[cw_serde]
#[cfg_attr(feature = "interface", derive(cw_orch::ExecuteFns))]
pub enum ExecuteMsg {
    /// Faucet: mints `amount` to `recipient`
    AllocateTo { recipient: String, amount: Uint128 },
    Transfer { recipient: String, amount: Uint128 },
    /// Moves `owner`'s funds using the caller's allowance
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Sets the caller's allowance for `spender`.
    /// `Uint128::MAX` grants an unlimited allowance
    Approve { spender: String, amount: Uint128 },
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
}
