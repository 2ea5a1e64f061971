//! Reference nodes: accounts, categories, and tags.
//!
//! Three parallel shapes rather than one generic struct, so call sites
//! can't mix up an account reference for a category reference at the
//! type level.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A reference to an `@Account` block, e.g. `@Checking` or `@Assets:Bank`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    /// Hierarchical segments, e.g. `["Assets", "Bank"]`.
    pub path: Vec<String>,
    /// The literal source text, including the `@` sigil.
    pub raw: String,
    /// Source span.
    pub span: Span,
}

/// A reference to a `&Category` budget envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Hierarchical segments.
    pub path: Vec<String>,
    /// The literal source text, including the `&` sigil.
    pub raw: String,
    /// Source span.
    pub span: Span,
}

/// A reference to a `#Tag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    /// Hierarchical segments.
    pub path: Vec<String>,
    /// The literal source text, including the `#` sigil.
    pub raw: String,
    /// Source span.
    pub span: Span,
}

macro_rules! ref_impl {
    ($ty:ident, $sigil:literal) => {
        impl $ty {
            /// Build a reference from its hierarchical segments and span.
            /// `raw` is reconstructed from the segments and the sigil.
            #[must_use]
            pub fn new(path: Vec<String>, span: Span) -> Self {
                debug_assert!(!path.is_empty(), "reference path must not be empty");
                let raw = format!("{}{}", $sigil, path.join(":"));
                Self { path, raw, span }
            }
        }
    };
}

ref_impl!(AccountRef, "@");
ref_impl!(CategoryRef, "&");
ref_impl!(TagRef, "#");
