use super::transaction::{NewTransaction, Transaction, TransactionId};

/// Insertion-ordered transaction collection that owns identifier assignment.
///
/// The persisted form is the bare entry array, so the id counter is not
/// stored: it is reseeded to one past the highest existing id on load and
/// only ever moves forward, which keeps ids unique for the lifetime of the
/// collection even after removals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
    next_id: TransactionId,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds the log from a loaded entry array, seeding the id counter.
    pub fn from_entries(entries: Vec<Transaction>) -> Self {
        let next_id = entries
            .iter()
            .map(|txn| txn.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self { entries, next_id }
    }

    /// Appends at the tail, preserving insertion order for display.
    pub fn push(&mut self, new: NewTransaction) -> TransactionId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.entries.push(new.with_id(id));
        id
    }

    /// Filters out the entry matching `id`; returns whether anything changed.
    pub fn remove(&mut self, id: TransactionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|txn| txn.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, TransactionKind};
    use chrono::NaiveDate;

    fn draft(amount: &str) -> NewTransaction {
        NewTransaction {
            kind: TransactionKind::Expense,
            amount: amount.into(),
            category: Category::Food,
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let mut log = TransactionLog::new();
        let first = log.push(draft("10"));
        let second = log.push(draft("20"));
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn remove_unknown_id_leaves_order_intact() {
        let mut log = TransactionLog::new();
        log.push(draft("10"));
        log.push(draft("20"));
        let before = log.entries().to_vec();
        assert!(!log.remove(99));
        assert_eq!(log.entries(), before.as_slice());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut log = TransactionLog::new();
        let id = log.push(draft("10"));
        assert!(log.remove(id));
        let next = log.push(draft("20"));
        assert!(next > id, "fresh id must not reuse a removed one");
    }

    #[test]
    fn from_entries_tolerates_the_maximum_id() {
        let entry = NewTransaction {
            kind: TransactionKind::Expense,
            amount: "10".into(),
            category: Category::Food,
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
        .with_id(u64::MAX);
        let mut log = TransactionLog::from_entries(vec![entry]);
        // A hand-edited file may carry any id; seeding must not overflow.
        assert_eq!(log.push(draft("20")), u64::MAX);
    }

    #[test]
    fn from_entries_seeds_counter_past_highest_id() {
        let mut log = TransactionLog::new();
        log.push(draft("10"));
        log.push(draft("20"));
        let mut reloaded = TransactionLog::from_entries(log.entries().to_vec());
        assert_eq!(reloaded.push(draft("30")), 3);
    }
}
