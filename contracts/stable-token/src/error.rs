use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use dtoken_std::LedgerError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Ledger(#[from] LedgerError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Amount must be greater than zero")]
    ZeroAmount {},

    #[error("Invalid token metadata: {0}")]
    InvalidTokenInfo(String),
}
