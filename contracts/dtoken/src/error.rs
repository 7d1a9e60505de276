use cosmwasm_std::{
    CheckedFromRatioError, CheckedMultiplyRatioError, OverflowError, StdError,
};
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use dtoken_std::LedgerError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// Carries the `ds-token-*` identifiers unchanged
    #[error("{0}")]
    Ledger(#[from] LedgerError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    CheckedFromRatio(#[from] CheckedFromRatioError),

    #[error("{0}")]
    CheckedMultiplyRatio(#[from] CheckedMultiplyRatioError),

    #[error("No dispatcher is attached to this dToken")]
    NoDispatcher {},

    #[error("Amount must be greater than zero")]
    ZeroAmount {},

    #[error("Deposit too small to mint any dToken")]
    MintTooSmall {},

    #[error("Nothing to redeem")]
    NothingToRedeem {},

    #[error("Handler {0} still holds funds and is not part of the new dispatcher")]
    StrandedFunds(String),

    #[error("Invalid token metadata: {0}")]
    InvalidTokenInfo(String),
}
