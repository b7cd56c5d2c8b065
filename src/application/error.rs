use thiserror::Error;

use crate::domain::{EntryError, EntryId};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid expense: {0}")]
    Validation(EntryError),

    #[error("No expense at position {position} (ledger has {len})")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Expense not found: #{0}")]
    EntryNotFound(EntryId),

    #[error("No expenses recorded yet")]
    EmptyLedger,
}
