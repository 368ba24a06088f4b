//! Canonical transaction collection with persistence on every mutation.

use crate::errors::ExpenseError;
use crate::form::TransactionDraft;
use crate::ledger::{
    expense_breakdown, Category, Summary, Transaction, TransactionId, TransactionLog,
};
use crate::storage::StorageBackend;

/// Owns the ordered transaction collection. All mutations go through
/// [`add`](Self::add) and [`remove`](Self::remove), each of which rewrites
/// the full collection to the backend on the same turn; readers only ever
/// see snapshots.
pub struct TransactionStore {
    log: TransactionLog,
    backend: Box<dyn StorageBackend>,
}

impl TransactionStore {
    /// Loads the persisted collection through the backend. Absent or corrupt
    /// data comes back as an empty collection per the backend contract.
    pub fn open(backend: Box<dyn StorageBackend>) -> Self {
        let log = TransactionLog::from_entries(backend.load());
        Self { log, backend }
    }

    /// Validates the draft, appends the transaction at the tail, and
    /// persists. Returns the assigned id.
    ///
    /// A failed write does not roll back the in-memory append; the error
    /// surfaces to the caller as a non-fatal condition.
    pub fn add(&mut self, draft: &TransactionDraft) -> Result<TransactionId, ExpenseError> {
        let new = draft.validate()?;
        let id = self.log.push(new);
        tracing::debug!(id, "transaction added");
        self.persist()?;
        Ok(id)
    }

    /// Removes the entry matching `id` and persists. Unknown ids are a
    /// no-op: `Ok(false)`, nothing rewritten.
    pub fn remove(&mut self, id: TransactionId) -> Result<bool, ExpenseError> {
        if !self.log.remove(id) {
            return Ok(false);
        }
        tracing::debug!(id, "transaction removed");
        self.persist()?;
        Ok(true)
    }

    /// Ordered snapshot for the presentation layer.
    pub fn transactions(&self) -> &[Transaction] {
        self.log.entries()
    }

    pub fn summary(&self) -> Summary {
        Summary::of(self.log.entries())
    }

    pub fn breakdown(&self) -> Vec<(Category, f64)> {
        expense_breakdown(self.log.entries())
    }

    fn persist(&self) -> Result<(), ExpenseError> {
        self.backend.save(self.log.entries())
    }
}
