//! Section marker parsing: `>>> META`, `>>> BUDGET`, `>>> LEDGER`.

use crate::cursor::Cursor;
use crate::error::Diagnostic;
use crate::primitives::identifier;

/// Which section is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Commodity declarations, aliases, and untracked-account patterns.
    Meta,
    /// Budget allocations per period.
    Budget,
    /// Transactions and balance assertions.
    Ledger,
}

impl Section {
    fn from_identifier(s: &str) -> Option<Self> {
        match s {
            "META" => Some(Self::Meta),
            "BUDGET" => Some(Self::Budget),
            "LEDGER" => Some(Self::Ledger),
            _ => None,
        }
    }
}

/// Outcome of parsing one `>>>` line: either a recognized section
/// switch, or a diagnostic for a malformed marker or unknown name. In
/// both diagnostic cases the line is still fully consumed by the
/// caller, so no residual state needs to be communicated back.
pub enum SectionMarkerResult {
    /// The line named a recognized section.
    Switched(Section),
    /// The line matched `>>>` but named an unrecognized section; the
    /// active section (if any) is unchanged.
    UnknownSection(Diagnostic),
    /// The line did not start with the literal `>>>`.
    NotAMarker(Diagnostic),
}

/// Parse a section marker line. The cursor must be positioned at the
/// first non-whitespace character of the line.
pub fn section_marker(cursor: &mut Cursor) -> SectionMarkerResult {
    let start = cursor.mark_start();
    for expected in ">>>".chars() {
        if cursor.peek() != expected {
            return SectionMarkerResult::NotAMarker(Diagnostic::invalid_token(
                cursor.span_from(start),
                "expected '>>>'",
            ));
        }
        cursor.advance();
    }
    cursor.skip_horizontal_whitespace();
    let name = identifier(cursor).unwrap_or_default();
    match Section::from_identifier(&name) {
        Some(section) => SectionMarkerResult::Switched(section),
        None => SectionMarkerResult::UnknownSection(Diagnostic::invalid_token(
            cursor.span_from(start),
            format!("unknown section '{name}'"),
        )),
    }
}
