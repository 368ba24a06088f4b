use thiserror::Error;

/// Error type that captures common tracker failures.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Rejection reasons for a submitted transaction draft.
///
/// `amount`, `category`, and `date` are required at submission time; the
/// amount and date are additionally parsed rather than accepted verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount is required")]
    MissingAmount,
    #[error("category is required")]
    MissingCategory,
    #[error("date is required")]
    MissingDate,
    #[error("`{0}` is not a valid amount")]
    InvalidAmount(String),
    #[error("`{0}` is not a known category")]
    UnknownCategory(String),
    #[error("`{0}` is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
