//! In-progress transaction entry, prior to submission.

use chrono::NaiveDate;

use crate::errors::{ExpenseError, ValidationError};
use crate::ledger::{NewTransaction, TransactionId, TransactionKind};
use crate::store::TransactionStore;

/// Draft fields addressable through partial updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Kind,
    Amount,
    Category,
    Description,
    Date,
}

/// The not-yet-submitted transaction form state.
///
/// All fields are raw text while editing; nothing is parsed until
/// [`TransactionDraft::validate`] runs at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl Default for TransactionDraft {
    /// The fixed post-submission default: income selected, everything else
    /// empty.
    fn default() -> Self {
        Self {
            kind: TransactionKind::Income,
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            date: String::new(),
        }
    }
}

impl TransactionDraft {
    /// Sets a single field, leaving the others unchanged.
    ///
    /// An unrecognized kind value leaves the current kind selection in place;
    /// everything else is stored verbatim and judged at validation time.
    pub fn set(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Kind => {
                self.kind = match value {
                    "income" => TransactionKind::Income,
                    "expense" => TransactionKind::Expense,
                    _ => self.kind,
                };
            }
            DraftField::Amount => self.amount = value.to_string(),
            DraftField::Category => self.category = value.to_string(),
            DraftField::Description => self.description = value.to_string(),
            DraftField::Date => self.date = value.to_string(),
        }
    }

    /// Returns the draft to the fixed default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks required fields and parses the raw text into a transaction
    /// ready for the log. The draft itself is left untouched.
    pub fn validate(&self) -> Result<NewTransaction, ValidationError> {
        if self.amount.trim().is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        if self.date.trim().is_empty() {
            return Err(ValidationError::MissingDate);
        }

        let value = self
            .amount
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidAmount(self.amount.clone()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidAmount(self.amount.clone()));
        }

        let category = self.category.trim().parse()?;
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(self.date.clone()))?;

        Ok(NewTransaction {
            kind: self.kind,
            amount: self.amount.trim().to_string(),
            category,
            description: self.description.clone(),
            date,
        })
    }

    /// Submits the draft to the store. On success the draft resets to the
    /// default; on failure it keeps the current input so nothing the user
    /// typed is lost.
    pub fn submit(&mut self, store: &mut TransactionStore) -> Result<TransactionId, ExpenseError> {
        let id = store.add(self)?;
        self.reset();
        Ok(id)
    }
}
