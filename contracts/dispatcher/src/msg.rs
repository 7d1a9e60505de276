use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use dtoken_std::Allocation;

/// Dispatcher instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    pub handlers: Vec<String>,
    /// Weight of each handler, same order as `handlers`
    pub proportions: Vec<u64>,
}

#[cw_serde]
#[cfg_attr(feature = "interface", derive(cw_orch::ExecuteFns))]
pub enum ExecuteMsg {
    /// Registers new handlers with a zero weight
    AddHandler { handlers: Vec<String> },
    /// Sets the weight of each listed handler. Unlisted handlers keep their weight
    UpdateProportion {
        handlers: Vec<String>,
        proportions: Vec<u64>,
    },
    SetManager { manager: String },
    TransferOwnership { owner: String },
}

#[cw_serde]
#[cfg_attr(feature = "interface", derive(cw_orch::QueryFns))]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Handlers and their weights as parallel lists
    #[returns(HandlersResponse)]
    Handlers {},
    /// How a deposit of `amount` is split across handlers
    #[returns(StrategyResponse)]
    DepositStrategy { amount: Uint128 },
    /// Which handlers release `amount` of `token`
    #[returns(StrategyResponse)]
    WithdrawStrategy { token: String, amount: Uint128 },
    #[returns(bool)]
    IsManager { address: String },
    #[returns(dtoken_std::RolesResponse)]
    Roles {},
}

#[cw_serde]
pub struct HandlersResponse {
    pub handlers: Vec<Addr>,
    pub proportions: Vec<u64>,
}

#[cw_serde]
pub struct StrategyResponse {
    /// Only handlers with a non-zero amount are listed
    pub allocations: Vec<Allocation>,
}
