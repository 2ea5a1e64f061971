//! The right-hand side of a transaction.

use serde::{Deserialize, Serialize};

use crate::refs::{AccountRef, CategoryRef};
use crate::amount::Amount;

/// The target of a transaction: where the money goes, as written after
/// the amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Target {
    /// A flow into a budget category.
    Category {
        /// The category being credited or debited.
        category_ref: CategoryRef,
    },
    /// A transfer to another account, optionally draining a budget
    /// envelope when the destination account is untracked.
    Account {
        /// The destination account.
        account_ref: AccountRef,
        /// The category this transfer drains, if the destination is an
        /// untracked account.
        category: Option<CategoryRef>,
    },
    /// A second amount on the same line: a commodity swap within the
    /// current account.
    Swap {
        /// The amount received (or given) in the swap.
        amount: Amount,
    },
}
