use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use dtoken_std::{ledger::AllowanceResponse, ledger::BalanceResponse, Allowance};

use crate::msg::{ExecuteMsg, QueryMsg};

/// Typed handle on a deployed stable token, for contracts that hold or move it
#[cw_serde]
pub struct StableTokenContract(pub Addr);

impl StableTokenContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_json_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }

    pub fn transfer_from_msg(
        &self,
        owner: &Addr,
        recipient: &Addr,
        amount: Uint128,
    ) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        })
    }

    pub fn approve_msg(&self, spender: &Addr, allowance: Allowance) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::Approve {
            spender: spender.to_string(),
            amount: allowance.amount(),
        })
    }

    pub fn balance(&self, querier: &QuerierWrapper, address: &Addr) -> StdResult<Uint128> {
        let response: BalanceResponse = querier.query_wasm_smart(
            self.addr(),
            &QueryMsg::Balance {
                address: address.to_string(),
            },
        )?;
        Ok(response.balance)
    }

    pub fn allowance(
        &self,
        querier: &QuerierWrapper,
        owner: &Addr,
        spender: &Addr,
    ) -> StdResult<Allowance> {
        let response: AllowanceResponse = querier.query_wasm_smart(
            self.addr(),
            &QueryMsg::Allowance {
                owner: owner.to_string(),
                spender: spender.to_string(),
            },
        )?;
        Ok(if response.unlimited {
            Allowance::Unlimited
        } else {
            Allowance::Limited(response.allowance)
        })
    }
}
