pub mod json_backend;

use crate::errors::ExpenseError;
use crate::ledger::Transaction;

pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Abstraction over persistence backends holding the transaction collection.
///
/// `load` is fail-soft by contract: absent or corrupt data yields an empty
/// collection rather than an error, so a damaged file can never prevent the
/// tracker from starting.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Vec<Transaction>;
    fn save(&self, entries: &[Transaction]) -> Result<()>;
}

pub use json_backend::JsonStorage;
