//! The root `Ledger` value produced by parsing a `.bursa` document.

use serde::{Deserialize, Serialize};

use crate::entry::{BudgetEntry, LedgerEntry};
use crate::meta::Meta;

/// The full structured output of parsing one `.bursa` source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Commodities, aliases, and untracked patterns from the META section.
    pub meta: Meta,
    /// Budget allocations, in source order.
    pub budget: Vec<BudgetEntry>,
    /// Ledger entries, in source order.
    pub ledger: Vec<LedgerEntry>,
}

impl Ledger {
    /// An empty ledger, as produced by parsing zero-length input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
