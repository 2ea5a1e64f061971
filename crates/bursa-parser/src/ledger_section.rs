//! LEDGER section line parser: account headers, transactions, and
//! balance assertions.

use bursa_core::LedgerEntry;

use crate::cursor::Cursor;
use crate::error::Diagnostic;
use crate::parser::ParserState;
use crate::primitives::{account_ref, amount, comment, date, tag_ref};
use crate::target::target;

/// Parse one LEDGER-section line. Always consumes the rest of the line.
pub fn parse_line(cursor: &mut Cursor, state: &mut ParserState) {
    let start = cursor.mark_start();
    match cursor.peek() {
        '@' => {
            match account_ref(cursor) {
                Ok(account) => state.current_account = Some(account),
                Err(diag) => state.diagnostics.push(diag),
            }
            cursor.skip_line();
        }
        c if c == '?' || c.is_ascii_digit() => parse_entry(cursor, state, start),
        _ => {
            state
                .diagnostics
                .push(Diagnostic::invalid_token(cursor.span_from(start), "invalid token"));
            cursor.skip_line();
        }
    }
}

fn parse_entry(cursor: &mut Cursor, state: &mut ParserState, start: bursa_core::Position) {
    let Some(account) = state.current_account.clone() else {
        state
            .diagnostics
            .push(Diagnostic::invalid_token(cursor.span_from(start), "no active account"));
        cursor.skip_line();
        return;
    };

    let unverified = if cursor.peek() == '?' {
        cursor.advance();
        cursor.skip_horizontal_whitespace();
        true
    } else {
        false
    };

    let parsed_date = match date(cursor) {
        Ok(d) => d,
        Err(diag) => {
            state.diagnostics.push(diag);
            cursor.skip_line();
            return;
        }
    };
    cursor.skip_horizontal_whitespace();

    if cursor.peek() == '=' && cursor.peek_at(1) == '=' {
        cursor.advance();
        cursor.advance();
        cursor.skip_horizontal_whitespace();
        let amount = match amount(cursor, &state.meta) {
            Ok(a) => a,
            Err(diag) => {
                state.diagnostics.push(diag);
                cursor.skip_line();
                return;
            }
        };
        let trailing_comment = comment_after_whitespace(cursor);
        let span = cursor.span_from(start);
        cursor.skip_line();
        state.ledger.push(LedgerEntry::Assertion {
            date: parsed_date,
            account,
            unverified,
            amount,
            comment: trailing_comment,
            span,
        });
        return;
    }

    let amount = match amount(cursor, &state.meta) {
        Ok(a) => a,
        Err(diag) => {
            state.diagnostics.push(diag);
            cursor.skip_line();
            return;
        }
    };
    cursor.skip_horizontal_whitespace();

    let target = match target(cursor, &state.meta) {
        Ok(t) => t,
        Err(diag) => {
            state.diagnostics.push(diag);
            cursor.skip_line();
            return;
        }
    };

    let mut tags = Vec::new();
    loop {
        cursor.skip_horizontal_whitespace();
        if cursor.peek() == '#' {
            match tag_ref(cursor) {
                Ok(tag) => tags.push(tag),
                Err(diag) => {
                    state.diagnostics.push(diag);
                    cursor.skip_line();
                    return;
                }
            }
        } else {
            break;
        }
    }

    let trailing_comment = comment_after_whitespace(cursor);
    let span = cursor.span_from(start);
    cursor.skip_line();
    state.ledger.push(LedgerEntry::Transaction {
        date: parsed_date,
        account,
        unverified,
        amount,
        target,
        tags,
        comment: trailing_comment,
        span,
    });
}

fn comment_after_whitespace(cursor: &mut Cursor) -> Option<String> {
    cursor.skip_horizontal_whitespace();
    comment(cursor)
}

#[cfg(test)]
mod tests {
    use crate::parser::run;
    use bursa_core::{LedgerEntry, Target};

    #[test]
    fn account_header_sets_current_account() {
        let source = ">>> LEDGER\n@Assets:Checking\n?2024-01-15 50 USD &Groceries\n";
        let (ledger, diags) = run(source);
        assert!(diags.is_empty());
        assert_eq!(ledger.ledger.len(), 1);
        match &ledger.ledger[0] {
            LedgerEntry::Transaction { account, unverified, target, .. } => {
                assert_eq!(account.raw, "@Assets:Checking");
                assert!(*unverified);
                assert!(matches!(target, Target::Category { .. }));
            }
            other => panic!("expected Transaction, got {other:?}"),
        }
    }

    #[test]
    fn entry_without_active_account_is_flagged() {
        let (_, diags) = run(">>> LEDGER\n2024-01-15 50 USD &Groceries\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code.code(), "E001");
    }

    #[test]
    fn assertion_is_recorded() {
        let source = ">>> LEDGER\n@Assets:Checking\n2024-01-15 == 500 USD\n";
        let (ledger, diags) = run(source);
        assert!(diags.is_empty());
        assert_eq!(ledger.ledger.len(), 1);
        assert!(matches!(ledger.ledger[0], LedgerEntry::Assertion { .. }));
    }

    #[test]
    fn transaction_collects_tags_and_comment() {
        let source = ">>> LEDGER\n@Assets:Checking\n2024-01-15 50 USD &Groceries #food #weekly ; snacks\n";
        let (ledger, diags) = run(source);
        assert!(diags.is_empty());
        match &ledger.ledger[0] {
            LedgerEntry::Transaction { tags, comment, .. } => {
                assert_eq!(tags.len(), 2);
                assert_eq!(tags[0].raw, "#food");
                assert_eq!(comment.as_deref(), Some("snacks"));
            }
            other => panic!("expected Transaction, got {other:?}"),
        }
    }

    #[test]
    fn malformed_date_aborts_line_but_not_parsing() {
        let source = ">>> LEDGER\n@Assets:Checking\n2024-1-15 50 USD &Groceries\n2024-01-16 10 USD &Food\n";
        let (ledger, diags) = run(source);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code.code(), "E003");
        assert_eq!(ledger.ledger.len(), 1);
    }

    #[test]
    fn swap_target_transaction() {
        let source = ">>> LEDGER\n@Assets:Checking\n2024-01-15 100 USD 90 EUR\n";
        let (ledger, diags) = run(source);
        assert!(diags.is_empty());
        match &ledger.ledger[0] {
            LedgerEntry::Transaction { target: Target::Swap { amount }, .. } => {
                assert_eq!(amount.commodity, "EUR");
            }
            other => panic!("expected Swap transaction, got {other:?}"),
        }
    }
}
