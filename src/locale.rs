//! Localization hook for every literal placed into a message.
//!
//! Translation is an external concern: this crate only decides *where* the
//! hook is applied. With the `localize` feature disabled, [`tr`] is the
//! identity and compiles away entirely.
//!
//! With `localize` enabled, a process may install exactly one [`Localizer`]
//! at startup. It is read-only afterwards, so lookups stay lock-free and
//! reentrant.
//!
//! Messages with numbers in them are localized as whole templates, so a
//! translator sees the sentence rather than its fragments. Templates use
//! `{}` for the next argument and `{N}` for argument `N`; a translation may
//! reorder them freely.
//!
//! ```rust
//! use curl_strerror::locale::{tr, write_template};
//!
//! // Identity unless a localizer was installed.
//! assert_eq!(tr("No error"), "No error");
//!
//! let mut out = String::new();
//! write_template(&mut out, "Fehler {1} (Code {0})", &[&7, &"x"]).unwrap();
//! assert_eq!(out, "Fehler x (Code 7)");
//! ```

use std::fmt;

#[cfg(feature = "localize")]
use std::sync::OnceLock;

/// Maps an English literal to its locale-specific text.
///
/// Must return the input unchanged for literals it does not know.
pub type Localizer = fn(&'static str) -> &'static str;

#[cfg(feature = "localize")]
static LOCALIZER: OnceLock<Localizer> = OnceLock::new();

/// Apply the installed localizer to a literal.
#[inline]
pub fn tr(literal: &'static str) -> &'static str {
    #[cfg(feature = "localize")]
    {
        if let Some(localize) = LOCALIZER.get() {
            return localize(literal);
        }
    }
    literal
}

/// Write `template` into `out`, substituting placeholders from `args`.
///
/// `{}` takes the next argument in order, `{N}` takes argument `N`. A
/// placeholder without a matching argument, or an unclosed `{`, is copied
/// through literally.
pub fn write_template<W: fmt::Write>(
    out: &mut W,
    template: &str,
    args: &[&dyn fmt::Display],
) -> fmt::Result {
    let mut rest = template;
    let mut next = 0;

    while let Some(open) = rest.find('{') {
        out.write_str(&rest[..open])?;
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            return out.write_str(&rest[open..]);
        };

        let index = match &after[..close] {
            "" => {
                next += 1;
                Some(next - 1)
            }
            digits => digits.parse::<usize>().ok(),
        };
        match index.and_then(|i| args.get(i)) {
            Some(arg) => write!(out, "{arg}")?,
            None => out.write_str(&rest[open..open + close + 2])?,
        }
        rest = &after[close + 1..];
    }
    out.write_str(rest)
}

/// Install the process-wide localizer.
///
/// # Errors
///
/// Returns [`LocalizerAlreadySet`] if a localizer was installed before. The
/// first installation wins; it is never replaced.
#[cfg(feature = "localize")]
pub fn install_localizer(localizer: Localizer) -> Result<(), LocalizerAlreadySet> {
    LOCALIZER.set(localizer).map_err(|_| LocalizerAlreadySet)
}

/// Whether a localizer is currently installed.
#[inline]
pub fn localizer_installed() -> bool {
    #[cfg(feature = "localize")]
    {
        LOCALIZER.get().is_some()
    }
    #[cfg(not(feature = "localize"))]
    {
        false
    }
}

/// Error returned when a second localizer is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizerAlreadySet;

impl fmt::Display for LocalizerAlreadySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a localizer is already installed for this process")
    }
}

impl std::error::Error for LocalizerAlreadySet {}
