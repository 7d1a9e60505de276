use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg};
use dtoken_std::Custodian;

use crate::msg::{ExecuteMsg, HandlerBalanceResponse, QueryMsg};

/// Typed handle on a deployed handler
#[cw_serde]
pub struct HandlerContract(pub Addr);

impl HandlerContract {
    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_json_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg,
            funds: vec![],
        }
        .into())
    }
}

impl Custodian for HandlerContract {
    fn addr(&self) -> &Addr {
        &self.0
    }

    fn accept_msg(&self, token: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::Deposit {
            token: token.to_string(),
            amount,
        })
    }

    fn release_msg(&self, token: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::Withdraw {
            token: token.to_string(),
            amount,
        })
    }

    fn balance(&self, querier: &QuerierWrapper, token: &Addr) -> StdResult<Uint128> {
        let response: HandlerBalanceResponse = querier.query_wasm_smart(
            self.0.to_string(),
            &QueryMsg::Balance {
                token: token.to_string(),
            },
        )?;
        Ok(response.balance)
    }
}
