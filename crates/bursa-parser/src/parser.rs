//! Parser state and the top-level line dispatcher.

use bursa_core::{AccountRef, BudgetEntry, Ledger, LedgerEntry, Meta};

use crate::cursor::Cursor;
use crate::error::Diagnostic;
use crate::section::{self, Section, SectionMarkerResult};
use crate::{budget_section, ledger_section, meta_section};

/// Mutable state threaded through every line parser: the active
/// section, the account and budget period currently in scope, and the
/// ledger being built up.
#[derive(Debug, Default)]
pub struct ParserState {
    pub(crate) section: Option<Section>,
    pub(crate) current_account: Option<AccountRef>,
    pub(crate) current_period: Option<String>,
    pub(crate) meta: Meta,
    pub(crate) budget: Vec<BudgetEntry>,
    pub(crate) ledger: Vec<LedgerEntry>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl ParserState {
    fn new() -> Self {
        Self::default()
    }

    fn into_ledger(self) -> (Ledger, Vec<Diagnostic>) {
        let ledger = Ledger {
            meta: self.meta,
            budget: self.budget,
            ledger: self.ledger,
        };
        (ledger, self.diagnostics)
    }
}

/// Run the line dispatcher over the full source text, driving every
/// section parser to completion and collecting diagnostics along the
/// way. Never aborts early: a malformed line is dropped and parsing
/// resumes at the next one.
#[must_use]
pub fn run(source: &str) -> (Ledger, Vec<Diagnostic>) {
    let mut cursor = Cursor::new(source);
    let mut state = ParserState::new();

    loop {
        cursor.skip_blank_lines();
        if cursor.is_eof() {
            break;
        }

        match cursor.peek() {
            ';' => {
                cursor.skip_line();
            }
            '>' => dispatch_section_marker(&mut cursor, &mut state),
            _ => match state.section {
                Some(Section::Meta) => meta_section::parse_line(&mut cursor, &mut state),
                Some(Section::Budget) => budget_section::parse_line(&mut cursor, &mut state),
                Some(Section::Ledger) => ledger_section::parse_line(&mut cursor, &mut state),
                None => {
                    let start = cursor.mark_start();
                    cursor.skip_line();
                    state
                        .diagnostics
                        .push(Diagnostic::content_before_section(cursor.span_from(start)));
                }
            },
        }
    }

    state.into_ledger()
}

fn dispatch_section_marker(cursor: &mut Cursor, state: &mut ParserState) {
    match section::section_marker(cursor) {
        SectionMarkerResult::Switched(section) => {
            state.section = Some(section);
            state.current_period = None;
            state.current_account = None;
        }
        SectionMarkerResult::UnknownSection(diag) | SectionMarkerResult::NotAMarker(diag) => {
            state.diagnostics.push(diag);
        }
    }
    cursor.skip_line();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_ledger_and_no_diagnostics() {
        let (ledger, diagnostics) = run("");
        assert!(ledger.meta.commodities.is_empty());
        assert!(ledger.budget.is_empty());
        assert!(ledger.ledger.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn content_before_any_section_marker_is_flagged() {
        let (_, diagnostics) = run("stray line\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code.code(), "E011");
    }

    #[test]
    fn unknown_section_name_leaves_prior_section_active() {
        let source = ">>> META\ncommodity: USD\n>>> BOGUS\ncommodity: EUR\n";
        let (ledger, diagnostics) = run(source);
        assert_eq!(diagnostics.len(), 1);
        assert!(ledger.meta.commodities.contains("USD"));
        assert!(ledger.meta.commodities.contains("EUR"));
    }
}
