pub mod contract;
pub mod error;
mod handlers;
pub mod helpers;
pub mod msg;
pub mod state;

pub use helpers::HandlerContract;

#[cfg(feature = "interface")]
pub use contract::interface::HandlerInterface;
#[cfg(feature = "interface")]
pub use msg::{ExecuteMsgFns, QueryMsgFns};
