// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use outlay::application::ExpenseService;
use outlay::cli::{Presentation, run_session};
use outlay::domain::{Amount, ExpenseEntry};

/// Helper to create a service pre-filled with `(category, amount)` pairs
pub fn service_with(expenses: &[(&str, &str)]) -> Result<ExpenseService> {
    let mut service = ExpenseService::new();
    for (category, amount) in expenses {
        service.add_expense(category, amount)?;
    }
    Ok(service)
}

/// Helper to build a bare entry without going through a ledger
pub fn entry(id: u64, category: &str, amount: Amount) -> ExpenseEntry {
    ExpenseEntry::new(id, category, amount)
}

/// Categories in ledger order
pub fn categories(entries: &[ExpenseEntry]) -> Vec<String> {
    entries.iter().map(|e| e.category.clone()).collect()
}

/// Run a session script and capture everything it printed
pub fn run_script(service: &mut ExpenseService, script: &str) -> Result<String> {
    let mut out = Vec::new();
    run_session(service, script.as_bytes(), &mut out, &Presentation::default(), false)?;
    Ok(String::from_utf8(out)?)
}

/// Test fixture: the household budget used across suites
pub struct Household;

impl Household {
    pub const EXPENSES: [(&'static str, &'static str); 5] = [
        ("rent", "900"),
        ("groceries", "310.40"),
        ("utilities", "120"),
        ("coffee", "4.50"),
        ("car", "250"),
    ];

    pub fn service() -> Result<ExpenseService> {
        service_with(&Self::EXPENSES)
    }
}
