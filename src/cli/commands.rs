//! Command handlers bridging user intents into the transaction store.

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use thiserror::Error;

use crate::cli::output;
use crate::errors::ExpenseError;
use crate::form::{DraftField, TransactionDraft};
use crate::ledger::{Category, TransactionId, TransactionKind};
use crate::store::TransactionStore;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Interactive entry form. Each prompt answers one draft field; submission
/// validates, appends, and persists in the same turn.
pub fn add(store: &mut TransactionStore) -> Result<(), CommandError> {
    let theme = ColorfulTheme::default();
    let mut draft = TransactionDraft::default();

    let kinds = [TransactionKind::Income, TransactionKind::Expense];
    let kind_index = Select::with_theme(&theme)
        .with_prompt("Type")
        .items(&[kinds[0].as_str(), kinds[1].as_str()])
        .default(0)
        .interact()?;
    draft.set(DraftField::Kind, kinds[kind_index].as_str());

    let amount: String = Input::with_theme(&theme)
        .with_prompt("Amount")
        .interact_text()?;
    draft.set(DraftField::Amount, &amount);

    let labels: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    let category_index = Select::with_theme(&theme)
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;
    draft.set(DraftField::Category, labels[category_index]);

    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;
    draft.set(DraftField::Description, &description);

    let today = chrono::Local::now().date_naive().to_string();
    let date: String = Input::with_theme(&theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(today)
        .interact_text()?;
    draft.set(DraftField::Date, &date);

    let id = draft.submit(store)?;
    output::success(format!("Recorded transaction #{id}"));
    Ok(())
}

/// Ordered transaction listing, insertion order preserved.
pub fn list(store: &TransactionStore) {
    let transactions = store.transactions();
    if transactions.is_empty() {
        output::info("No transactions recorded yet.");
        return;
    }
    output::section("Transactions");
    println!(
        "{:>4}  {:<10}  {:<7}  {:<13}  {:>10}  {}",
        "id", "date", "type", "category", "amount", "description"
    );
    for txn in transactions {
        let amount = format!("{:.2}", txn.amount_value());
        let amount = match txn.kind {
            TransactionKind::Income => amount.bright_green(),
            TransactionKind::Expense => amount.bright_red(),
        };
        println!(
            "{:>4}  {:<10}  {:<7}  {:<13}  {:>10}  {}",
            txn.id,
            txn.date,
            txn.kind.as_str(),
            txn.category.as_str(),
            amount,
            txn.description
        );
    }
}

pub fn remove(store: &mut TransactionStore, id: TransactionId) -> Result<(), CommandError> {
    if store.remove(id)? {
        output::success(format!("Removed transaction #{id}"));
    } else {
        output::warning(format!("No transaction with id {id}"));
    }
    Ok(())
}

/// Totals plus the expense breakdown rendered as labeled percentage bars.
pub fn summary(store: &TransactionStore) {
    let summary = store.summary();
    output::section("Summary");
    println!("Income:  {}", format!("{:.2}", summary.total_income).bright_green());
    println!("Expense: {}", format!("{:.2}", summary.total_expense).bright_red());
    println!("Balance: {}", format!("{:.2}", summary.balance).bright_cyan());

    let breakdown = store.breakdown();
    if breakdown.is_empty() {
        return;
    }
    output::section("Spending breakdown");
    for (category, total) in &breakdown {
        let share = total / summary.total_expense * 100.0;
        let bar = "#".repeat((share / 2.0).round() as usize);
        println!(
            "{:<13}  {:>10}  {:>5.1}%  {}",
            category.as_str(),
            format!("{total:.2}"),
            share,
            bar.bold()
        );
    }
}
