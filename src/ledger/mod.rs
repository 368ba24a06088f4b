//! Ledger domain models, the ordered transaction log, and aggregation.

pub mod category;
pub mod log;
pub mod summary;
pub mod transaction;

pub use category::Category;
pub use log::TransactionLog;
pub use summary::{expense_breakdown, Summary};
pub use transaction::{NewTransaction, Transaction, TransactionId, TransactionKind};
