use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Got {handlers} handlers but {proportions} proportions")]
    ProportionLengthMismatch { handlers: usize, proportions: usize },

    #[error("Handler {0} is already registered")]
    DuplicateHandler(String),

    #[error("Handler {0} is not registered")]
    HandlerNotFound(String),

    #[error("No handler given")]
    EmptyHandlerList {},

    #[error("Total proportion of the handlers must be greater than zero")]
    ZeroTotalProportion {},

    #[error("Insufficient liquidity: requested {requested}, handlers hold {available}")]
    InsufficientLiquidity {
        requested: Uint128,
        available: Uint128,
    },
}
