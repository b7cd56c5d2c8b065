use anyhow::Result;
use std::io::Write;

use crate::domain::{Amount, ExpenseEntry, Summary, TOP_EXPENSES, format_amount};

/// Presentation settings shared by every renderer.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub currency: String,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
        }
    }
}

impl Presentation {
    /// Example: 1250.0 -> "$1,250.00", -5.0 -> "-$5.00"
    pub fn money(&self, amount: Amount) -> String {
        let formatted = format_amount(amount);
        match formatted.strip_prefix('-') {
            Some(digits) => format!("-{}{}", self.currency, digits),
            None => format!("{}{}", self.currency, formatted),
        }
    }
}

pub fn render_entries<W: Write>(
    out: &mut W,
    presentation: &Presentation,
    entries: &[ExpenseEntry],
) -> Result<()> {
    if entries.is_empty() {
        writeln!(out, "No expenses recorded.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:>4}  {:<6} {:<24} {:>14}",
        "#", "ID", "CATEGORY", "AMOUNT"
    )?;
    writeln!(out, "{}", "-".repeat(51))?;

    for (position, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{:>4}  {:<6} {:<24} {:>14}",
            position + 1,
            format!("#{}", entry.id),
            truncate(&entry.category, 24),
            presentation.money(entry.amount)
        )?;
    }

    Ok(())
}

pub fn render_summary_table<W: Write>(
    out: &mut W,
    presentation: &Presentation,
    summary: &Summary,
) -> Result<()> {
    writeln!(out, "Results")?;
    writeln!(
        out,
        "Total amount of expenses: {:>14}",
        presentation.money(summary.total)
    )?;
    writeln!(
        out,
        "Average daily expense:    {:>14}",
        presentation.money(summary.average)
    )?;
    writeln!(out, "Top {} expenses:", TOP_EXPENSES)?;
    for (rank, entry) in summary.top.iter().enumerate() {
        writeln!(
            out,
            "  {}. {:<24} {:>14}",
            rank + 1,
            truncate(&entry.category, 24),
            presentation.money(entry.amount)
        )?;
    }

    Ok(())
}

pub fn render_summary_json<W: Write>(out: &mut W, summary: &Summary) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?;
    Ok(())
}

/// Shorten to at most `max_len` characters, marking the cut with "...".
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
