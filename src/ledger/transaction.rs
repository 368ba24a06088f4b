use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Identifier assigned by the log at creation time, unique for the lifetime
/// of the collection and never reused after removal.
pub type TransactionId = u64;

/// One recorded income or expense event.
///
/// The serialized shape matches the persisted interchange format exactly:
/// `amount` stays the raw text the user entered, `kind` appears under the
/// `type` key in lowercase, and `date` renders as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    /// Numeric value of the textual amount.
    ///
    /// Entries written by this crate always parse; text that predates entry
    /// validation coerces to zero so aggregation stays total.
    pub fn amount_value(&self) -> f64 {
        self.amount.trim().parse::<f64>().unwrap_or(0.0)
    }
}

/// A validated transaction awaiting an identifier, produced by draft
/// validation and consumed by the log on append.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: String,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub(crate) fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
        }
    }
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}
