//! Core data model for Bursa, a plain-text personal-finance ledger
//! language.
//!
//! This crate defines the structures a `bursa-parser::parse` call
//! produces: [`Span`]-tagged [`Amount`]s, [`AccountRef`]/[`CategoryRef`]/
//! [`TagRef`] reference nodes, [`Target`] and [`LedgerEntry`] tagged
//! unions, and the root [`Ledger`]. It contains no parsing logic.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod amount;
pub mod entry;
pub mod ledger;
pub mod meta;
pub mod refs;
pub mod span;
pub mod target;

pub use amount::{Amount, Sign};
pub use entry::{BudgetEntry, LedgerEntry};
pub use ledger::Ledger;
pub use meta::Meta;
pub use refs::{AccountRef, CategoryRef, TagRef};
pub use span::{Position, Span, Spanned};
pub use target::Target;

pub use rust_decimal::Decimal;
