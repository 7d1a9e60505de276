use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Uint128};
use dtoken_handler::HandlerContract;
use dtoken_std::Allocation;

use crate::msg::{HandlersResponse, QueryMsg, StrategyResponse};

/// Typed handle on a deployed dispatcher
#[cw_serde]
pub struct DispatcherContract(pub Addr);

impl DispatcherContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn handlers(&self, querier: &QuerierWrapper) -> StdResult<HandlersResponse> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Handlers {})
    }

    /// Handler handles, in registry order
    pub fn custodians(&self, querier: &QuerierWrapper) -> StdResult<Vec<HandlerContract>> {
        Ok(self
            .handlers(querier)?
            .handlers
            .into_iter()
            .map(HandlerContract)
            .collect())
    }

    pub fn deposit_strategy(
        &self,
        querier: &QuerierWrapper,
        amount: Uint128,
    ) -> StdResult<Vec<Allocation>> {
        let response: StrategyResponse =
            querier.query_wasm_smart(self.addr(), &QueryMsg::DepositStrategy { amount })?;
        Ok(response.allocations)
    }

    pub fn withdraw_strategy(
        &self,
        querier: &QuerierWrapper,
        token: &Addr,
        amount: Uint128,
    ) -> StdResult<Vec<Allocation>> {
        let response: StrategyResponse = querier.query_wasm_smart(
            self.addr(),
            &QueryMsg::WithdrawStrategy {
                token: token.to_string(),
                amount,
            },
        )?;
        Ok(response.allocations)
    }
}
