pub mod contract;
pub mod error;
mod handlers;
pub mod helpers;
pub mod msg;
pub mod state;

#[cfg(feature = "interface")]
pub use contract::interface::StableTokenInterface;
#[cfg(feature = "interface")]
pub use msg::{ExecuteMsgFns, QueryMsgFns};
