use super::category::Category;
use super::transaction::{Transaction, TransactionKind};

/// Aggregate totals derived from a transaction snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

impl Summary {
    /// Sums income and expense amounts over the snapshot.
    ///
    /// Balance is derived from the two sums, so
    /// `total_income - total_expense == balance` holds exactly.
    pub fn of(transactions: &[Transaction]) -> Self {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => total_income += txn.amount_value(),
                TransactionKind::Expense => total_expense += txn.amount_value(),
            }
        }
        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }
}

/// Per-category expense totals in canonical category order, zero-sum
/// categories excluded. Drives chart segments and legends directly.
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<(Category, f64)> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let total: f64 = transactions
                .iter()
                .filter(|txn| {
                    txn.kind == TransactionKind::Expense && txn.category == category
                })
                .map(Transaction::amount_value)
                .sum();
            (category, total)
        })
        .filter(|(_, total)| *total > 0.0)
        .collect()
}
