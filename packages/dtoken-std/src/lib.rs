pub mod access;
pub mod allowance;
pub mod custodian;
pub mod ledger;
pub mod math;

pub use access::{AccessControl, RolesResponse};
pub use allowance::Allowance;
pub use custodian::{Allocation, Custodian};
pub use ledger::{LedgerError, TokenLedger};
