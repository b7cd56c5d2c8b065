use serde::{Deserialize, Serialize};

use super::{Amount, ExpenseEntry};

/// Fixed denominator for the average-per-day figure.
/// Not derived from entry dates; every summary divides by this.
pub const AVERAGE_PERIOD_DAYS: u32 = 30;

/// How many of the largest expenses a summary reports.
pub const TOP_EXPENSES: usize = 3;

/// Figures derived from a ledger snapshot. Recomputed on demand, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: Amount,
    pub average: Amount,
    pub top: Vec<ExpenseEntry>,
    pub count: usize,
}

/// Compute total, average per day and the top expenses.
/// Empty input yields all zeros and an empty `top`.
pub fn summarize(entries: &[ExpenseEntry]) -> Summary {
    let total = total_amount(entries);

    Summary {
        total,
        average: total / Amount::from(AVERAGE_PERIOD_DAYS),
        top: top_n(entries, TOP_EXPENSES),
        count: entries.len(),
    }
}

/// Sum of all amounts, accumulated in entry order.
pub fn total_amount(entries: &[ExpenseEntry]) -> Amount {
    entries.iter().fold(0.0, |sum, entry| sum + entry.amount)
}

/// The `n` largest entries by amount, descending.
/// The sort is stable, so ties keep their insertion order.
pub fn top_n(entries: &[ExpenseEntry], n: usize) -> Vec<ExpenseEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    sorted.truncate(n);
    sorted
}
