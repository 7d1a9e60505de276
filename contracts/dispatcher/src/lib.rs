pub mod contract;
pub mod error;
mod handlers;
pub mod helpers;
pub mod msg;
pub mod state;
pub mod strategy;

pub use helpers::DispatcherContract;

#[cfg(feature = "interface")]
pub use contract::interface::DispatcherInterface;
#[cfg(feature = "interface")]
pub use msg::{ExecuteMsgFns, QueryMsgFns};
