//! Target parser: the single-character-lookahead grammar deciding
//! whether a transaction's counterpart is a budget category, an
//! account (optionally with an untracked-transfer category), or a
//! currency swap.

use bursa_core::{Meta, Target};

use crate::cursor::Cursor;
use crate::error::Diagnostic;
use crate::primitives::{account_ref, amount, category_ref, is_currency_symbol};

/// Parse a `Target` starting at the cursor's current position.
pub fn target(cursor: &mut Cursor, meta: &Meta) -> Result<Target, Diagnostic> {
    match cursor.peek() {
        '&' => {
            let category_ref = category_ref(cursor)?;
            Ok(Target::Category { category_ref })
        }
        '@' => {
            let account_ref = account_ref(cursor)?;
            cursor.skip_horizontal_whitespace();
            let category = if cursor.peek() == '&' {
                Some(category_ref(cursor)?)
            } else {
                None
            };
            Ok(Target::Account { account_ref, category })
        }
        c if c == '+' || c == '-' || c.is_ascii_digit() || is_currency_symbol(c) => {
            let amount = amount(cursor, meta)?;
            Ok(Target::Swap { amount })
        }
        _ => {
            let start = cursor.mark_start();
            Err(Diagnostic::invalid_token(cursor.span_from(start), "invalid target"))
        }
    }
}
