//! Structured record of one translation.
//!
//! # Properties
//!
//! - Borrows the rendered text with an explicit lifetime
//! - CANNOT outlive the buffer the text was written into
//! - NO heap allocations in accessors or in [`TranslationRecord::write_to`]
//!
//! The crate itself never logs. Callers that want a trace of a translation
//! take the record and hand it to their own logger, either field by field or
//! through `write_to`.

use crate::{Domain, Resolution};
use std::fmt;

/// Maximum length for any individual field in formatted output
const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated fields
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Outcome of one lookup or buffer translation.
///
/// # Example
///
/// ```rust
/// use curl_strerror::{Domain, Resolution, resolve};
///
/// let record = resolve(Domain::Multi, 1);
/// assert_eq!(record.domain(), Domain::Multi);
/// assert_eq!(record.resolution(), Resolution::Exact);
///
/// let mut line = String::new();
/// record.write_to(&mut line).unwrap();
/// assert!(line.starts_with("[multi:1] exact"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationRecord<'a> {
    domain: Domain,
    code: i32,
    resolution: Resolution,
    text: Option<&'a str>,
}

impl<'a> TranslationRecord<'a> {
    /// Assemble a record. `text` is `None` only for unavailable results.
    #[inline]
    pub const fn new(
        domain: Domain,
        code: i32,
        resolution: Resolution,
        text: Option<&'a str>,
    ) -> Self {
        Self {
            domain,
            code,
            resolution,
            text,
        }
    }

    /// Domain the code was looked up in.
    #[inline]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Numeric code as given by the caller.
    #[inline]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// How the text was obtained.
    #[inline]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Rendered text, if any was produced.
    #[inline]
    pub const fn text(&self) -> Option<&'a str> {
        self.text
    }

    /// Whether a text was produced.
    #[inline]
    pub const fn is_available(&self) -> bool {
        self.text.is_some()
    }

    /// Write the record as one line without allocating.
    ///
    /// Format: `[<domain>:<code>] <resolution> text='<text>'`. Domains that
    /// prefer hexadecimal show the code as `0xXXXXXXXX`. The text field is
    /// bounded; longer texts end with a visible truncation indicator.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        if self.domain.prefers_hex() {
            write!(f, "[{}:0x{:08X}] {}", self.domain, self.code as u32, self.resolution)?;
        } else {
            write!(f, "[{}:{}] {}", self.domain, self.code, self.resolution)?;
        }

        if let Some(text) = self.text {
            f.write_str(" text='")?;
            write_bounded(f, text)?;
            f.write_char('\'')?;
        }

        Ok(())
    }
}

impl fmt::Display for TranslationRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Split `s` at the last char boundary that leaves room for the indicator.
///
/// Returns `None` when `s` fits as is.
fn truncation_point(s: &str) -> Option<usize> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return None;
    }

    let mut idx = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    Some(idx)
}

fn write_bounded(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    match truncation_point(s) {
        None => f.write_str(s),
        Some(idx) => {
            f.write_str(&s[..idx])?;
            f.write_str(TRUNCATION_INDICATOR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(record: &TranslationRecord<'_>) -> String {
        let mut out = String::new();
        record.write_to(&mut out).unwrap();
        out
    }

    fn bounded(s: &str) -> String {
        let mut out = String::new();
        write_bounded(&mut out, s).unwrap();
        out
    }

    #[test]
    fn record_line_format() {
        let record = TranslationRecord::new(Domain::Easy, 28, Resolution::Exact, Some("Timeout was reached"));
        assert_eq!(render(&record), "[easy:28] exact text='Timeout was reached'");
        assert_eq!(record.to_string(), render(&record));
    }

    #[test]
    fn unavailable_record_has_no_text_field() {
        let record = TranslationRecord::new(Domain::System, 2, Resolution::Unavailable, None);
        assert_eq!(render(&record), "[system:2] unavailable");
        assert!(!record.is_available());
    }

    #[test]
    fn negative_codes_render_signed() {
        let record = TranslationRecord::new(Domain::Multi, -1, Resolution::Exact, Some("x"));
        assert!(render(&record).starts_with("[multi:-1] exact"));
    }

    #[cfg(feature = "security_table")]
    #[test]
    fn security_codes_render_hex() {
        let record = TranslationRecord::new(
            Domain::Security,
            0x8009_0322_u32 as i32,
            Resolution::Exact,
            Some("SEC_E_WRONG_PRINCIPAL"),
        );
        assert!(render(&record).starts_with("[security:0x80090322] exact"));
    }

    #[test]
    fn truncate_ascii() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN + 10);
        let out = bounded(&s);
        assert!(out.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(out.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn no_truncate_when_under_limit() {
        assert_eq!(truncation_point("short string"), None);
        assert_eq!(bounded("short string"), "short string");
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN);
        assert_eq!(truncation_point(&s), None);
        assert_eq!(bounded(&s).len(), MAX_FIELD_OUTPUT_LEN);
    }

    #[test]
    fn truncate_utf8_boundary() {
        // two bytes per char
        let s = "й".repeat(MAX_FIELD_OUTPUT_LEN);
        let out = bounded(&s);
        assert!(out.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(out.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn truncate_emoji() {
        let s = "🔥".repeat(MAX_FIELD_OUTPUT_LEN);
        let out = bounded(&s);
        assert!(std::str::from_utf8(out.as_bytes()).is_ok());
        assert!(out.ends_with(TRUNCATION_INDICATOR));
    }
}
