//! META-section state: declared commodities, alias map, untracked patterns.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Declared commodities, the alias symbol-to-commodity map, and the
/// ordered list of untracked-account patterns from the META section.
///
/// `commodities`/`aliases` use ordered collections (not `HashMap`) so
/// that serialized output and iteration order are stable across runs —
/// this crate has no string interner to otherwise guarantee determinism.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Every commodity declared via `commodity:` or as an alias target.
    pub commodities: BTreeSet<String>,
    /// Alias symbol/identifier → canonical commodity code.
    pub aliases: BTreeMap<String, String>,
    /// Raw `untracked:` patterns, including the `@` sigil and optional
    /// trailing `:*`.
    pub untracked: Vec<String>,
}

impl Meta {
    /// Create an empty meta block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a symbol or identifier through the alias map as of the
    /// current call. Returns `s` unchanged if no alias applies.
    ///
    /// Aliases declared later in the file do not retroactively rewrite
    /// earlier lookups, since this simply reads whatever the map
    /// contains at the moment it's called.
    #[must_use]
    pub fn resolve_alias<'a>(&'a self, s: &'a str) -> &'a str {
        self.aliases.get(s).map_or(s, String::as_str)
    }

    /// Declare an alias, registering its target as a known commodity too.
    pub fn declare_alias(&mut self, symbol: impl Into<String>, commodity: impl Into<String>) {
        let commodity = commodity.into();
        self.commodities.insert(commodity.clone());
        self.aliases.insert(symbol.into(), commodity);
    }

    /// Declare a commodity directly.
    pub fn declare_commodity(&mut self, commodity: impl Into<String>) {
        self.commodities.insert(commodity.into());
    }
}
