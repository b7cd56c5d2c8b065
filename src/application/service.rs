use tracing::{debug, info, warn};

use crate::domain::{EntryId, ExpenseEntry, Ledger, Summary, summarize};

use super::AppError;

/// Application service holding one session's expenses.
/// This is the primary interface for any client (CLI, TUI, tests).
#[derive(Debug, Default)]
pub struct ExpenseService {
    ledger: Ledger,
}

impl ExpenseService {
    /// Start a new, empty session.
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
        }
    }

    // ========================
    // Ledger operations
    // ========================

    /// Record a new expense from raw user input.
    /// Rejected input leaves the ledger unchanged.
    pub fn add_expense(
        &mut self,
        category: &str,
        amount: &str,
    ) -> Result<ExpenseEntry, AppError> {
        match self.ledger.try_add(category, amount) {
            Ok(entry) => {
                debug!(
                    id = entry.id,
                    category = %entry.category,
                    amount = entry.amount,
                    "expense added"
                );
                Ok(entry.clone())
            }
            Err(err) => {
                warn!(category, amount, error = %err, "expense rejected");
                Err(AppError::Validation(err))
            }
        }
    }

    /// Delete the expense at zero-based `position`.
    pub fn delete_expense(&mut self, position: usize) -> Result<ExpenseEntry, AppError> {
        let len = self.ledger.len();
        match self.ledger.remove_at(position) {
            Some(entry) => {
                debug!(position, id = entry.id, "expense deleted");
                Ok(entry)
            }
            None => {
                warn!(position, len, "delete ignored: position out of range");
                Err(AppError::PositionOutOfRange { position, len })
            }
        }
    }

    /// Delete the expense with the given id.
    pub fn delete_expense_by_id(&mut self, id: EntryId) -> Result<ExpenseEntry, AppError> {
        match self.ledger.remove(id) {
            Some(entry) => {
                debug!(id, "expense deleted");
                Ok(entry)
            }
            None => {
                warn!(id, "delete ignored: unknown id");
                Err(AppError::EntryNotFound(id))
            }
        }
    }

    /// Forget every expense recorded in this session.
    pub fn clear(&mut self) -> usize {
        let removed = self.ledger.len();
        self.ledger.clear();
        debug!(removed, "ledger cleared");
        removed
    }

    pub fn entries(&self) -> &[ExpenseEntry] {
        self.ledger.entries()
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    // ========================
    // Summary operations
    // ========================

    /// Summarize an arbitrary snapshot of entries.
    pub fn compute_summary(entries: &[ExpenseEntry]) -> Summary {
        let summary = summarize(entries);
        info!(
            count = summary.count,
            total = summary.total,
            average = summary.average,
            "summary computed"
        );
        summary
    }

    /// Summarize the current ledger. Refuses when nothing has been recorded.
    pub fn summary(&self) -> Result<Summary, AppError> {
        if self.ledger.is_empty() {
            return Err(AppError::EmptyLedger);
        }
        Ok(Self::compute_summary(self.ledger.entries()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryError, ParseAmountError};

    #[test]
    fn test_add_expense_returns_entry() {
        let mut service = ExpenseService::new();
        let entry = service.add_expense("rent", "900").unwrap();

        assert_eq!(entry.category, "rent");
        assert_eq!(entry.amount, 900.0);
        assert_eq!(service.entries(), &[entry]);
    }

    #[test]
    fn test_add_expense_surfaces_validation_error() {
        let mut service = ExpenseService::new();

        let err = service.add_expense("food", "abc").unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(EntryError::Amount(ParseAmountError::InvalidFormat))
        ));
        assert!(service.is_empty());
    }

    #[test]
    fn test_delete_out_of_range_is_not_fatal() {
        let mut service = ExpenseService::new();
        service.add_expense("rent", "900").unwrap();

        let err = service.delete_expense(5).unwrap_err();
        assert!(matches!(
            err,
            AppError::PositionOutOfRange { position: 5, len: 1 }
        ));
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_delete_by_unknown_id() {
        let mut service = ExpenseService::new();
        assert!(matches!(
            service.delete_expense_by_id(42),
            Err(AppError::EntryNotFound(42))
        ));
    }

    #[test]
    fn test_summary_requires_entries() {
        let service = ExpenseService::new();
        assert!(matches!(service.summary(), Err(AppError::EmptyLedger)));
    }

    #[test]
    fn test_compute_summary_on_empty_snapshot() {
        let summary = ExpenseService::compute_summary(&[]);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.average, 0.0);
        assert!(summary.top.is_empty());
    }

    #[test]
    fn test_clear_reports_removed_count() {
        let mut service = ExpenseService::new();
        service.add_expense("a", "1").unwrap();
        service.add_expense("b", "2").unwrap();

        assert_eq!(service.clear(), 2);
        assert!(service.is_empty());
    }
}
