//! Universal invariants and boundary behaviors that aren't tied to one
//! specific seed scenario.

use bursa_core::LedgerEntry;
use bursa_parser::parse;

#[test]
fn every_entry_span_is_non_decreasing() {
    let source = "\
>>> LEDGER
@A
  2026-01-01 +5 USD &Op
  2026-01-02 -3 USD &Op
";
    let output = parse(source);
    assert!(output.errors.is_empty());
    for entry in &output.data.ledger {
        let span = entry.span();
        assert!(
            span.start.line < span.end.line
                || (span.start.line == span.end.line && span.start.col <= span.end.col)
        );
    }
}

#[test]
fn every_transaction_account_matches_a_preceding_header() {
    let source = "\
>>> LEDGER
@A
  2026-01-01 +5 USD &Op
@B
  2026-01-02 -5 USD &Op
";
    let output = parse(source);
    assert!(output.errors.is_empty());
    let accounts: Vec<_> = output.data.ledger.iter().map(LedgerEntry::account).collect();
    assert_eq!(accounts[0].raw, "@A");
    assert_eq!(accounts[1].raw, "@B");
}

#[test]
fn commodities_contain_every_alias_target() {
    let source = "\
>>> META
alias: $ = USD
alias: RM = MYR
";
    let output = parse(source);
    assert!(output.errors.is_empty());
    for target in output.data.meta.aliases.values() {
        assert!(output.data.meta.commodities.contains(target));
    }
}

#[test]
fn empty_input_yields_empty_ledger_and_no_diagnostics() {
    let output = parse("");
    assert!(output.data.ledger.is_empty());
    assert!(output.data.budget.is_empty());
    assert!(output.errors.is_empty());
    assert!(output.warnings.is_empty());
}

#[test]
fn appending_a_valid_line_only_adds_one_entry() {
    let base = "\
>>> LEDGER
@A
  2026-01-01 +5 USD &Op
";
    let extended = "\
>>> LEDGER
@A
  2026-01-01 +5 USD &Op
  2026-01-02 -5 USD &Op
";
    let before = parse(base);
    let after = parse(extended);
    assert!(before.errors.is_empty());
    assert!(after.errors.is_empty());
    assert_eq!(after.data.ledger.len(), before.data.ledger.len() + 1);
    assert_eq!(after.data.ledger[0], before.data.ledger[0]);
}

#[test]
fn comment_only_line_produces_no_entry_and_no_diagnostic() {
    let source = "\
>>> LEDGER
@A
  ; just a note
  2026-01-01 +5 USD &Op
";
    let output = parse(source);
    assert!(output.errors.is_empty());
    assert_eq!(output.data.ledger.len(), 1);
}

#[test]
fn question_mark_outside_ledger_entry_position_is_invalid_token() {
    // '?' is only meaningful immediately before a date; here it appears
    // where a target is expected and is rejected as an invalid token.
    let source = "\
>>> LEDGER
@A
  2026-01-01 5 USD ?X
";
    let output = parse(source);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code.code(), "E001");
    assert!(output.data.ledger.is_empty());
}

#[test]
fn double_equals_only_recognized_immediately_after_date() {
    let source = "\
>>> LEDGER
@A
  2026-01-01 == 5 USD
";
    let output = parse(source);
    assert!(output.errors.is_empty());
    assert_eq!(output.data.ledger.len(), 1);
    assert!(matches!(output.data.ledger[0], LedgerEntry::Assertion { .. }));
}

#[test]
fn amount_immediately_after_date_denotes_transaction_not_assertion() {
    let source = "\
>>> LEDGER
@A
  2026-01-01 5 USD &Op
";
    let output = parse(source);
    assert!(output.errors.is_empty());
    assert!(matches!(output.data.ledger[0], LedgerEntry::Transaction { .. }));
}
