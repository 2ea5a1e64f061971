//! Ledger and budget entries.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::refs::{AccountRef, CategoryRef, TagRef};
use crate::span::Span;
use crate::target::Target;

/// One entry from the LEDGER section: either a transaction or a balance
/// assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum LedgerEntry {
    /// A dated movement of money, with a target describing where it went.
    Transaction {
        /// `YYYY-MM-DD`, validated for shape only.
        date: String,
        /// The `@Account` header this entry was parsed under.
        account: AccountRef,
        /// Whether the line was prefixed with `?`.
        unverified: bool,
        /// The primary amount.
        amount: Amount,
        /// Where the money went.
        target: Target,
        /// Tags, in source order, duplicates preserved.
        tags: Vec<TagRef>,
        /// Trailing comment text, if any.
        comment: Option<String>,
        /// Span of the whole entry.
        span: Span,
    },
    /// A `==` balance check, recorded verbatim without evaluation.
    Assertion {
        /// `YYYY-MM-DD`, validated for shape only.
        date: String,
        /// The `@Account` header this entry was parsed under.
        account: AccountRef,
        /// Whether the line was prefixed with `?`.
        unverified: bool,
        /// The asserted balance.
        amount: Amount,
        /// Trailing comment text, if any.
        comment: Option<String>,
        /// Span of the whole entry.
        span: Span,
    },
}

impl LedgerEntry {
    /// The span covering this entry.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Transaction { span, .. } | Self::Assertion { span, .. } => *span,
        }
    }

    /// The account this entry was recorded under.
    #[must_use]
    pub const fn account(&self) -> &AccountRef {
        match self {
            Self::Transaction { account, .. } | Self::Assertion { account, .. } => account,
        }
    }
}

/// One entry from the BUDGET section: an allocation of `amount` to
/// `category` for `period`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// `YYYY-MM`.
    pub period: String,
    /// The budget category this allocation applies to.
    pub category: CategoryRef,
    /// The allocated amount.
    pub amount: Amount,
    /// Span of the whole entry.
    pub span: Span,
}
