//! META section line parser: `commodity:`, `alias:`, `untracked:`.

use crate::cursor::Cursor;
use crate::error::Diagnostic;
use crate::parser::ParserState;
use crate::primitives::{hierarchical_name, identifier, symbol_or_identifier};

/// Parse one META-section line, mutating `state.meta` and appending
/// any diagnostic. Always consumes the rest of the line.
pub fn parse_line(cursor: &mut Cursor, state: &mut ParserState) {
    let start = cursor.mark_start();
    let Some(keyword) = identifier(cursor) else {
        cursor.skip_line();
        state
            .diagnostics
            .push(Diagnostic::invalid_token(cursor.span_from(start), "expected a keyword"));
        return;
    };

    if cursor.peek() != ':' {
        cursor.skip_line();
        state
            .diagnostics
            .push(Diagnostic::invalid_token(cursor.span_from(start), "expected ':'"));
        return;
    }
    cursor.advance();
    cursor.skip_horizontal_whitespace();

    match keyword.as_str() {
        "commodity" => parse_commodity(cursor, state, start),
        "alias" => parse_alias(cursor, state, start),
        "untracked" => parse_untracked(cursor, state, start),
        _ => {
            state.diagnostics.push(Diagnostic::invalid_token(
                cursor.span_from(start),
                format!("unknown directive '{keyword}'"),
            ));
        }
    }
    cursor.skip_line();
}

fn parse_commodity(cursor: &mut Cursor, state: &mut ParserState, start: bursa_core::Position) {
    match identifier(cursor) {
        Some(name) => state.meta.declare_commodity(name),
        None => state.diagnostics.push(Diagnostic::invalid_token(
            cursor.span_from(start),
            "expected commodity name",
        )),
    }
}

fn parse_alias(cursor: &mut Cursor, state: &mut ParserState, start: bursa_core::Position) {
    let Some(symbol) = symbol_or_identifier(cursor) else {
        state
            .diagnostics
            .push(Diagnostic::invalid_token(cursor.span_from(start), "expected an alias symbol"));
        return;
    };
    cursor.skip_horizontal_whitespace();
    if cursor.peek() != '=' {
        state
            .diagnostics
            .push(Diagnostic::invalid_token(cursor.span_from(start), "expected '='"));
        return;
    }
    cursor.advance();
    cursor.skip_horizontal_whitespace();
    match identifier(cursor) {
        Some(commodity) => state.meta.declare_alias(symbol, commodity),
        None => state.diagnostics.push(Diagnostic::invalid_token(
            cursor.span_from(start),
            "expected a commodity name",
        )),
    }
}

fn parse_untracked(cursor: &mut Cursor, state: &mut ParserState, start: bursa_core::Position) {
    if cursor.peek() != '@' {
        state
            .diagnostics
            .push(Diagnostic::invalid_token(cursor.span_from(start), "expected '@'"));
        return;
    }
    let sigil_start = cursor.mark_start();
    cursor.advance();

    if cursor.peek() == '*' {
        cursor.advance();
        state.meta.untracked.push("@*".to_string());
        return;
    }

    let Some(path) = hierarchical_name(cursor) else {
        state.diagnostics.push(Diagnostic::invalid_token(
            cursor.span_from(sigil_start),
            "expected a name or '*' after '@'",
        ));
        return;
    };
    let mut pattern = format!("@{}", path.join(":"));
    if cursor.peek() == ':' && cursor.peek_at(1) == '*' {
        cursor.advance();
        cursor.advance();
        pattern.push_str(":*");
    }
    state.meta.untracked.push(pattern);
}
