use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub market: String,
    pub dtoken: String,
}

#[cw_serde]
#[cfg_attr(feature = "interface", derive(cw_orch::ExecuteFns))]
pub enum ExecuteMsg {
    /// Grants the dToken an unlimited allowance over this handler's `token` holdings
    Approve { token: String },
    /// Called by the dToken right after transferring `amount` of `token` here
    Deposit { token: String, amount: Uint128 },
    /// Called by the dToken before it collects `amount` of `token` from here
    Withdraw { token: String, amount: Uint128 },
    SetManager { manager: String },
    TransferOwnership { owner: String },
}

#[cw_serde]
#[cfg_attr(feature = "interface", derive(cw_orch::QueryFns))]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},
    #[returns(HandlerBalanceResponse)]
    Balance { token: String },
    #[returns(bool)]
    IsManager { address: String },
    #[returns(dtoken_std::RolesResponse)]
    Roles {},
}

#[cw_serde]
pub struct HandlerBalanceResponse {
    pub token: Addr,
    /// Everything the handler holds, accrued yield included
    pub balance: Uint128,
    pub principal: Uint128,
}
