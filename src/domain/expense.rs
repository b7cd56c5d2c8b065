use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Amount, ParseAmountError, parse_amount};

/// Session-local entry identifier. Assigned by the ledger, never reused.
pub type EntryId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: EntryId,
    pub category: String,
    pub amount: Amount,
    pub recorded_at: DateTime<Utc>,
}

impl ExpenseEntry {
    pub fn new(id: EntryId, category: impl Into<String>, amount: Amount) -> Self {
        Self {
            id,
            category: category.into(),
            amount,
            recorded_at: Utc::now(),
        }
    }
}

/// A category and amount that passed well-formedness checks but have not
/// been assigned an id yet. Only `parse` can build one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    category: String,
    amount: Amount,
}

impl NewExpense {
    /// Validate raw user input.
    /// The category must not be empty and is kept exactly as typed; the amount must parse.
    pub fn parse(category: &str, raw_amount: &str) -> Result<Self, EntryError> {
        if category.is_empty() {
            return Err(EntryError::MissingCategory);
        }

        let amount = parse_amount(raw_amount).map_err(EntryError::Amount)?;

        Ok(Self {
            category: category.to_string(),
            amount,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub(crate) fn into_parts(self) -> (String, Amount) {
        (self.category, self.amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    MissingCategory,
    Amount(ParseAmountError),
    TotalOverflow,
}

impl std::fmt::Display for EntryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryError::MissingCategory => write!(f, "category is required"),
            EntryError::Amount(err) => write!(f, "{}", err),
            EntryError::TotalOverflow => write!(f, "amount would push the total out of range"),
        }
    }
}

impl std::error::Error for EntryError {}
