//! BUDGET section line parser: period headers and category allocations.

use bursa_core::BudgetEntry;

use crate::cursor::Cursor;
use crate::error::Diagnostic;
use crate::parser::ParserState;
use crate::primitives::{amount, category_ref, period};

/// Parse one BUDGET-section line. Always consumes the rest of the line.
pub fn parse_line(cursor: &mut Cursor, state: &mut ParserState) {
    let start = cursor.mark_start();
    match cursor.peek() {
        c if c.is_ascii_digit() => {
            match period(cursor) {
                Ok(p) => state.current_period = Some(p),
                Err(diag) => state.diagnostics.push(diag),
            }
            cursor.skip_line();
        }
        '&' => {
            if state.current_period.is_none() {
                state
                    .diagnostics
                    .push(Diagnostic::invalid_token(cursor.span_from(start), "no active period"));
                cursor.skip_line();
                return;
            }
            let category = match category_ref(cursor) {
                Ok(c) => c,
                Err(diag) => {
                    state.diagnostics.push(diag);
                    cursor.skip_line();
                    return;
                }
            };
            cursor.skip_horizontal_whitespace();
            let amount = match amount(cursor, &state.meta) {
                Ok(a) => a,
                Err(diag) => {
                    state.diagnostics.push(diag);
                    cursor.skip_line();
                    return;
                }
            };
            let period = state
                .current_period
                .clone()
                .expect("current_period checked above");
            let span = cursor.span_from(start);
            cursor.skip_line();
            state.budget.push(BudgetEntry {
                period,
                category,
                amount,
                span,
            });
        }
        _ => {
            state
                .diagnostics
                .push(Diagnostic::invalid_token(cursor.span_from(start), "invalid token"));
            cursor.skip_line();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::run;

    #[test]
    fn period_header_sets_current_period() {
        let (ledger, diags) = run(">>> BUDGET\n2024-01\n&Groceries 400 USD\n");
        assert!(diags.is_empty());
        assert_eq!(ledger.budget.len(), 1);
        assert_eq!(ledger.budget[0].period, "2024-01");
        assert_eq!(ledger.budget[0].category.raw, "&Groceries");
    }

    #[test]
    fn allocation_before_period_is_flagged() {
        let (ledger, diags) = run(">>> BUDGET\n&Groceries 400 USD\n");
        assert_eq!(diags.len(), 1);
        assert!(ledger.budget.is_empty());
    }

    #[test]
    fn malformed_amount_is_flagged_and_entry_dropped() {
        let (ledger, diags) = run(">>> BUDGET\n2024-01\n&Groceries 400\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code.code(), "E002");
        assert!(ledger.budget.is_empty());
    }

    #[test]
    fn malformed_period_is_flagged() {
        let (_, diags) = run(">>> BUDGET\n2024-1\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code.code(), "E001");
    }
}
