//! Amount type: a signed decimal quantity with a commodity code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::span::Span;

/// The sign written on an amount, or its absence where the grammar permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    /// A leading `+`.
    Plus,
    /// A leading `-`.
    Minus,
    /// No sign was written (only valid in contexts that allow it, e.g.
    /// budget allocations).
    Unspecified,
}

/// A parsed amount: sign, non-negative magnitude, commodity, and source span.
///
/// `value` is always non-negative; the sign is carried separately in
/// `sign` rather than folded into `value`, so that `Sign::Unspecified`
/// amounts (budget allocations without an explicit sign) don't need a
/// fabricated sign to represent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// The sign as written, or `Unspecified` if omitted.
    pub sign: Sign,
    /// Non-negative magnitude.
    pub value: Decimal,
    /// Canonical commodity code, after alias resolution.
    pub commodity: String,
    /// Source span of the full amount lexeme.
    pub span: Span,
}

impl Amount {
    /// Create a new amount.
    #[must_use]
    pub const fn new(sign: Sign, value: Decimal, commodity: String, span: Span) -> Self {
        Self {
            sign,
            value,
            commodity,
            span,
        }
    }

    /// The signed value, folding `sign` into `value` (`Unspecified` is
    /// treated as positive).
    #[must_use]
    pub fn signed_value(&self) -> Decimal {
        match self.sign {
            Sign::Minus => -self.value,
            Sign::Plus | Sign::Unspecified => self.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;
    use rust_decimal_macros::dec;

    fn span() -> Span {
        Span::new(Position::new(1, 1), Position::new(1, 1))
    }

    #[test]
    fn signed_value_applies_minus() {
        let amt = Amount::new(Sign::Minus, dec!(5), "USD".into(), span());
        assert_eq!(amt.signed_value(), dec!(-5));
    }

    #[test]
    fn signed_value_unspecified_is_positive() {
        let amt = Amount::new(Sign::Unspecified, dec!(5), "USD".into(), span());
        assert_eq!(amt.signed_value(), dec!(5));
    }
}
