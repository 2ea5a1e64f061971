//! Parser diagnostics.
//!
//! Follows the same shape as the semantic validator this parser hands
//! its output to, so both producers share one wire format: a code, a
//! message, a severity, and a span.

use bursa_core::Span;

/// A fixed diagnostic code.
///
/// Codes `E001`-`E011` are the parser's own. `Other` carries any code
/// string a different producer (the semantic validator) wants to
/// attach to a [`Diagnostic`] built with this same type; the parser
/// itself never constructs `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticCode {
    /// E001: invalid token, unexpected character, unknown directive,
    /// unknown section, or a missing section-marker prerequisite. The
    /// parser reuses this one code for several unrelated conditions;
    /// distinguish them by `message` substring, not by code alone.
    InvalidToken,
    /// E002: malformed amount (bad number, or no commodity found).
    MalformedAmount,
    /// E003: invalid date format.
    InvalidDate,
    /// E009: invalid component order. Reserved for future enforcement;
    /// not constructed by this crate today.
    InvalidComponentOrder,
    /// E011: content appeared before any `>>>` section marker.
    ContentBeforeSection,
    /// Any other fixed code, owned by a different diagnostic producer
    /// (e.g. the semantic validator's `E005`/`E007`/`E008`/`E010`/`W001`-`W003`).
    Other(&'static str),
}

impl DiagnosticCode {
    /// The code string, e.g. `"E001"`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "E001",
            Self::MalformedAmount => "E002",
            Self::InvalidDate => "E003",
            Self::InvalidComponentOrder => "E009",
            Self::ContentBeforeSection => "E011",
            Self::Other(code) => code,
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The ledger could not be fully parsed as written.
    Error,
    /// Non-fatal, informational.
    Warning,
}

/// A diagnostic tied to a source span.
///
/// All codes the parser itself emits are [`Severity::Error`]: a
/// malformed line is dropped, never partially accepted, so there is no
/// parser-level warning severity today. The field still exists because
/// the semantic validator populates the same struct with warnings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct Diagnostic {
    /// The diagnostic code.
    pub code: DiagnosticCode,
    /// Human-readable message.
    pub message: String,
    /// Severity.
    pub severity: Severity,
    /// Source span the diagnostic is anchored to.
    pub span: Span,
}

impl Diagnostic {
    /// Build a diagnostic directly.
    #[must_use]
    pub const fn new(code: DiagnosticCode, message: String, severity: Severity, span: Span) -> Self {
        Self {
            code,
            message,
            severity,
            span,
        }
    }

    /// `E001` at `span` with the given message.
    #[must_use]
    pub fn invalid_token(span: Span, message: impl Into<String>) -> Self {
        Self::new(DiagnosticCode::InvalidToken, message.into(), Severity::Error, span)
    }

    /// `E002` at `span` with the given message.
    #[must_use]
    pub fn malformed_amount(span: Span, message: impl Into<String>) -> Self {
        Self::new(
            DiagnosticCode::MalformedAmount,
            message.into(),
            Severity::Error,
            span,
        )
    }

    /// `E003` at `span` with the given message.
    #[must_use]
    pub fn invalid_date(span: Span, message: impl Into<String>) -> Self {
        Self::new(DiagnosticCode::InvalidDate, message.into(), Severity::Error, span)
    }

    /// `E011` at `span`.
    #[must_use]
    pub fn content_before_section(span: Span) -> Self {
        Self::new(
            DiagnosticCode::ContentBeforeSection,
            "content before section marker".to_string(),
            Severity::Error,
            span,
        )
    }
}
