//! Code domains and the uniform lookup contract.
//!
//! Every numeric code is only meaningful together with the domain that
//! produced it. Domains never share a numbering space, so a bare `28` is
//! "Timeout was reached" for an operation result, "Bad path" for the URL
//! parser, and a plain errno for the system translator.
//!
//! # Domains
//!
//! - **Easy**: single-transfer operation results ([`CurlCode`])
//! - **Multi**: multi-handle manager results ([`MultiCode`])
//! - **Share**: shared-resource handle results ([`ShareCode`])
//! - **Url**: URL parser results ([`UrlCode`])
//! - **Socket**: network-stack error numbers (Winsock numbering)
//! - **Security**: security-provider status codes (SSPI numbering)
//! - **System**: raw platform error numbers, rendered into a caller buffer
//!
//! # Outcomes
//!
//! A lookup never fails. It resolves to one of three [`Resolution`]s:
//! an exact table entry, the domain's generic "unknown" text, or (for
//! buffer-based translators only) nothing at all when the caller supplied
//! no space.
//!
//! # Zero-Allocation Guarantee
//!
//! Table lookups return `&'static str` and never touch the heap.
//!
//! ```rust
//! use curl_strerror::{Domain, lookup};
//!
//! assert_eq!(lookup(Domain::Easy, 28), Some("Timeout was reached"));
//! assert_eq!(lookup(Domain::Url, 25), Some("Bad path"));
//! assert_eq!(lookup(Domain::System, 28), None);
//! ```

use crate::definitions::{CurlCode, MultiCode, ShareCode, UrlCode};
use crate::locale::tr;
use crate::logging::TranslationRecord;
use std::fmt;

/// Build-time switch for the full per-code tables.
///
/// When `false`, every domain collapses to "No error" / "Error". Read once
/// per call, never per table entry.
pub const VERBOSE_STRINGS: bool = cfg!(feature = "verbose_strings");

/// Text every domain uses for its success code.
pub const NO_ERROR: &str = "No error";

/// Text used for any failure code when verbose strings are disabled.
pub const BRIEF_ERROR: &str = "Error";

/// Generic fallback shared by the domains without a dedicated one.
pub const UNKNOWN_ERROR: &str = "Unknown error";

// ============================================================================
// Domain Tag
// ============================================================================

/// The subsystem a numeric code belongs to.
///
/// Variants depend on enabled features, so matches outside this crate need
/// a wildcard arm.
///
/// ```compile_fail
/// use curl_strerror::Domain;
///
/// fn tag(domain: Domain) -> u8 {
///     match domain {
///         Domain::Easy => 0,
///         Domain::Multi => 1,
///         Domain::Share => 2,
///         Domain::Url => 3,
///         Domain::Socket => 4,
///         Domain::Security => 5,
///         Domain::System => 6,
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Domain {
    /// Single-transfer operation results.
    Easy,
    /// Multi-handle manager results.
    Multi,
    /// Shared-resource handle results.
    Share,
    /// URL parser results.
    Url,
    /// Network-stack error numbers (Winsock numbering).
    #[cfg(feature = "socket_table")]
    Socket,
    /// Security-provider status codes (SSPI numbering).
    #[cfg(feature = "security_table")]
    Security,
    /// Raw platform error numbers.
    System,
}

impl Domain {
    /// Short lowercase tag used in structured records.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Multi => "multi",
            Self::Share => "share",
            Self::Url => "url",
            #[cfg(feature = "socket_table")]
            Self::Socket => "socket",
            #[cfg(feature = "security_table")]
            Self::Security => "security",
            Self::System => "system",
        }
    }

    /// Whether codes of this domain are conventionally shown in hexadecimal.
    #[inline]
    pub const fn prefers_hex(self) -> bool {
        #[cfg(feature = "security_table")]
        {
            matches!(self, Self::Security)
        }
        #[cfg(not(feature = "security_table"))]
        {
            false
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Resolution Outcome
// ============================================================================

/// How a translator arrived at its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The code has a dedicated entry.
    Exact,
    /// The code belongs to the domain's numeric type but has no entry
    /// (a newer code, an obsolete one, or a terminal sentinel).
    Unknown,
    /// The caller supplied no buffer space; nothing was written.
    Unavailable,
}

impl Resolution {
    /// Lowercase label for structured records.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Unknown => "unknown",
            Self::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Static Code Tables
// ============================================================================

/// A closed enumeration of codes with one static description each.
///
/// Implemented by [`define_code_table!`](crate::define_code_table); not meant
/// to be implemented by hand.
pub trait CodeTable: Copy + Sized + 'static {
    /// Domain tag of this table.
    const DOMAIN: Domain;
    /// The code meaning "no error".
    const OK_CODE: i32;
    /// Text returned for any code without an entry.
    const UNKNOWN_TEXT: &'static str;
    /// Terminal count sentinel. Never has an entry of its own.
    const LAST: i32;
    /// Every defined code, in declaration order.
    const ALL: &'static [Self];

    /// Numeric value of this code.
    fn code(self) -> i32;

    /// Map a raw value back to a defined code.
    fn from_code(code: i32) -> Option<Self>;

    /// Full description, before localization.
    fn verbose_text(self) -> &'static str;
}

/// Describe a raw code of table `T`.
///
/// Total: every integer maps to a non-empty text.
#[inline]
pub fn describe_code<T: CodeTable>(code: i32) -> &'static str {
    resolve_code::<T>(code).0
}

/// Describe a raw code of table `T` and report how it was resolved.
pub fn resolve_code<T: CodeTable>(code: i32) -> (&'static str, Resolution) {
    if !VERBOSE_STRINGS {
        return if code == T::OK_CODE {
            (tr(NO_ERROR), Resolution::Exact)
        } else {
            (tr(BRIEF_ERROR), Resolution::Unknown)
        };
    }

    match T::from_code(code) {
        Some(known) => (tr(known.verbose_text()), Resolution::Exact),
        None => (tr(T::UNKNOWN_TEXT), Resolution::Unknown),
    }
}

// ============================================================================
// Uniform Lookup
// ============================================================================

/// Look up the static text for `code` in `domain`.
///
/// Returns `None` only for [`Domain::System`], whose numbers have no static
/// table and must be rendered with [`strerror`](crate::system::strerror).
pub fn lookup(domain: Domain, code: i32) -> Option<&'static str> {
    resolve_static(domain, code).map(|(text, _)| text)
}

/// Look up `code` in `domain` and return a structured record of the result.
///
/// For [`Domain::System`] the record is [`Resolution::Unavailable`].
pub fn resolve(domain: Domain, code: i32) -> TranslationRecord<'static> {
    match resolve_static(domain, code) {
        Some((text, resolution)) => TranslationRecord::new(domain, code, resolution, Some(text)),
        None => TranslationRecord::new(domain, code, Resolution::Unavailable, None),
    }
}

fn resolve_static(domain: Domain, code: i32) -> Option<(&'static str, Resolution)> {
    match domain {
        Domain::Easy => Some(resolve_code::<CurlCode>(code)),
        Domain::Multi => Some(resolve_code::<MultiCode>(code)),
        Domain::Share => Some(resolve_code::<ShareCode>(code)),
        Domain::Url => Some(resolve_code::<UrlCode>(code)),
        #[cfg(feature = "socket_table")]
        Domain::Socket => Some(match crate::socket::describe(code) {
            Some(text) => (text, Resolution::Exact),
            None if VERBOSE_STRINGS => (tr(UNKNOWN_ERROR), Resolution::Unknown),
            None => (tr(BRIEF_ERROR), Resolution::Unknown),
        }),
        #[cfg(feature = "security_table")]
        Domain::Security => Some(crate::security::resolve_symbol(code)),
        Domain::System => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
