use super::{EntryError, EntryId, ExpenseEntry, NewExpense, total_amount};

/// Ordered, in-memory collection of the session's expenses.
///
/// Insertion order is preserved and duplicates are allowed. Entries can be
/// addressed either by their zero-based position or by their id.
#[derive(Debug, Clone)]
pub struct Ledger {
    entries: Vec<ExpenseEntry>,
    next_id: EntryId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Append an expense built from raw user input.
    /// Invalid input is silently ignored and `None` is returned.
    pub fn add(&mut self, category: &str, raw_amount: &str) -> Option<&ExpenseEntry> {
        self.try_add(category, raw_amount).ok()
    }

    /// Append an expense built from raw user input, reporting why it was rejected.
    /// An amount that would make the running total non-finite is refused too.
    pub fn try_add(
        &mut self,
        category: &str,
        raw_amount: &str,
    ) -> Result<&ExpenseEntry, EntryError> {
        let expense = NewExpense::parse(category, raw_amount)?;
        if !(total_amount(&self.entries) + expense.amount()).is_finite() {
            return Err(EntryError::TotalOverflow);
        }
        Ok(self.push(expense))
    }

    fn push(&mut self, expense: NewExpense) -> &ExpenseEntry {
        let id = self.next_id;
        self.next_id += 1;

        let (category, amount) = expense.into_parts();
        let index = self.entries.len();
        self.entries.push(ExpenseEntry::new(id, category, amount));
        &self.entries[index]
    }

    /// Remove the entry at `position`, shifting later entries down by one.
    /// Out-of-range positions leave the ledger untouched.
    pub fn remove_at(&mut self, position: usize) -> Option<ExpenseEntry> {
        if position < self.entries.len() {
            Some(self.entries.remove(position))
        } else {
            None
        }
    }

    /// Remove the entry with the given id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: EntryId) -> Option<ExpenseEntry> {
        let position = self.position_of(id)?;
        self.remove_at(position)
    }

    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn get(&self, position: usize) -> Option<&ExpenseEntry> {
        self.entries.get(position)
    }

    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. Ids keep counting up so old ids never come back.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
