//! Shared grammar primitives used by every section parser: identifiers,
//! hierarchical names, amounts, sigil-prefixed references, dates,
//! periods, and comments.

use std::str::FromStr;

use bursa_core::{AccountRef, Amount, CategoryRef, Meta, Sign, TagRef};
use rust_decimal::Decimal;

use crate::cursor::Cursor;
use crate::error::Diagnostic;

/// The fixed set of recognized currency symbols.
pub const CURRENCY_SYMBOLS: [char; 9] = ['$', '€', '£', '¥', '₹', '₽', '₩', '₪', '฿'];

/// Whether `c` is one of the fixed currency symbols.
#[must_use]
pub fn is_currency_symbol(c: char) -> bool {
    CURRENCY_SYMBOLS.contains(&c)
}

/// Whether `c` may appear in an identifier.
#[must_use]
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Consume a maximal run of identifier characters. Fails (consuming
/// nothing) if the run is empty.
pub fn identifier(cursor: &mut Cursor) -> Option<String> {
    let mut s = String::new();
    while is_identifier_char(cursor.peek()) {
        s.push(cursor.advance());
    }
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// One identifier, then zero or more `:`-separated identifiers. A
/// trailing `:` not followed by an identifier character is left
/// unconsumed.
pub fn hierarchical_name(cursor: &mut Cursor) -> Option<Vec<String>> {
    let first = identifier(cursor)?;
    let mut segments = vec![first];
    loop {
        if cursor.peek() == ':' && is_identifier_char(cursor.peek_at(1)) {
            cursor.advance(); // ':'
            segments.push(identifier(cursor).expect("peeked identifier char"));
        } else {
            break;
        }
    }
    Some(segments)
}

/// A symbol-or-identifier: one currency symbol if present, else an
/// identifier.
pub fn symbol_or_identifier(cursor: &mut Cursor) -> Option<String> {
    if is_currency_symbol(cursor.peek()) {
        Some(cursor.advance().to_string())
    } else {
        identifier(cursor)
    }
}

/// Parse a sigil-prefixed hierarchical reference (`@Account`,
/// `&Category`, `#tag`). `build` constructs the typed reference from
/// its path segments and span; the sigil itself is checked by the
/// caller via `sigil`.
pub fn sigil_ref<T>(
    cursor: &mut Cursor,
    sigil: char,
    build: impl FnOnce(Vec<String>, bursa_core::Span) -> T,
) -> Result<T, Diagnostic> {
    let start = cursor.mark_start();
    if cursor.peek() != sigil {
        return Err(Diagnostic::invalid_token(
            cursor.span_from(start),
            format!("expected '{sigil}'"),
        ));
    }
    cursor.advance();
    let Some(path) = hierarchical_name(cursor) else {
        return Err(Diagnostic::invalid_token(
            cursor.span_from(start),
            format!("expected a name after '{sigil}'"),
        ));
    };
    let span = cursor.span_from(start);
    Ok(build(path, span))
}

/// Parse an `@Account` reference.
pub fn account_ref(cursor: &mut Cursor) -> Result<AccountRef, Diagnostic> {
    sigil_ref(cursor, '@', AccountRef::new)
}

/// Parse a `&Category` reference.
pub fn category_ref(cursor: &mut Cursor) -> Result<CategoryRef, Diagnostic> {
    sigil_ref(cursor, '&', CategoryRef::new)
}

/// Parse a `#tag` reference.
pub fn tag_ref(cursor: &mut Cursor) -> Result<TagRef, Diagnostic> {
    sigil_ref(cursor, '#', TagRef::new)
}

/// Parse a trailing comment starting at `;`. Returns `None` for an
/// empty comment body.
pub fn comment(cursor: &mut Cursor) -> Option<String> {
    if cursor.peek() != ';' {
        return None;
    }
    cursor.advance();
    cursor.skip_horizontal_whitespace();
    let mut text = String::new();
    while !cursor.is_eof() && cursor.peek() != '\n' {
        text.push(cursor.advance());
    }
    let trimmed = text.trim_end();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a `YYYY-MM-DD` date. Any deviation from the fixed shape fails
/// and aborts the enclosing line, so no backtracking is needed on
/// failure.
pub fn date(cursor: &mut Cursor) -> Result<String, Diagnostic> {
    let start = cursor.mark_start();
    match fixed_digit_groups(cursor, &[4, 2, 2]) {
        Some(s) => Ok(s),
        None => Err(Diagnostic::invalid_date(
            cursor.span_from(start),
            "expected a date in YYYY-MM-DD format",
        )),
    }
}

/// Parse a `YYYY-MM` period. Any deviation fails with `E001`.
pub fn period(cursor: &mut Cursor) -> Result<String, Diagnostic> {
    let start = cursor.mark_start();
    match fixed_digit_groups(cursor, &[4, 2]) {
        Some(s) => Ok(s),
        None => Err(Diagnostic::invalid_token(
            cursor.span_from(start),
            "expected a period in YYYY-MM format",
        )),
    }
}

/// Consume `groups.len()` runs of ASCII digits of the given widths,
/// separated by `-`.
fn fixed_digit_groups(cursor: &mut Cursor, groups: &[usize]) -> Option<String> {
    let mut text = String::new();
    for (i, &width) in groups.iter().enumerate() {
        if i > 0 {
            if cursor.peek() != '-' {
                return None;
            }
            text.push(cursor.advance());
        }
        for _ in 0..width {
            if !cursor.peek().is_ascii_digit() {
                return None;
            }
            text.push(cursor.advance());
        }
    }
    Some(text)
}

/// Parse an amount: optional sign, commodity before or after the
/// number, resolved through `meta`'s alias map as of this call.
pub fn amount(cursor: &mut Cursor, meta: &Meta) -> Result<Amount, Diagnostic> {
    let start = cursor.mark_start();

    let sign = match cursor.peek() {
        '+' => {
            cursor.advance();
            Sign::Plus
        }
        '-' => {
            cursor.advance();
            Sign::Minus
        }
        _ => Sign::Unspecified,
    };

    let leading_commodity = if is_currency_symbol(cursor.peek()) {
        Some(cursor.advance().to_string())
    } else {
        None
    };

    let mut digits = String::new();
    let mut seen_dot = false;
    while cursor.peek().is_ascii_digit() || (cursor.peek() == '.' && !seen_dot) {
        if cursor.peek() == '.' {
            seen_dot = true;
        }
        digits.push(cursor.advance());
    }
    if digits.is_empty() || digits == "." {
        return Err(Diagnostic::malformed_amount(
            cursor.span_from(start),
            "expected a number",
        ));
    }

    let commodity = if let Some(c) = leading_commodity {
        c
    } else {
        cursor.skip_horizontal_whitespace();
        if is_currency_symbol(cursor.peek()) {
            cursor.advance().to_string()
        } else if let Some(ident) = identifier(cursor) {
            ident
        } else {
            return Err(Diagnostic::malformed_amount(
                cursor.span_from(start),
                "expected a commodity",
            ));
        }
    };

    let value = Decimal::from_str(&digits).map_err(|_| {
        Diagnostic::malformed_amount(cursor.span_from(start), format!("invalid number '{digits}'"))
    })?;

    let resolved = meta.resolve_alias(&commodity).to_string();
    Ok(Amount::new(sign, value, resolved, cursor.span_from(start)))
}
