//! System error translator.
//!
//! Renders a raw platform error number into a caller buffer. The chain of
//! sources depends on the platform's [`NumberingStyle`]:
//!
//! **Windows-style** (first success wins)
//! 1. C-runtime table, when the code is inside it
//! 2. network-stack table (`socket_table` feature)
//! 3. generic API translation
//! 4. [`UNKNOWN_WINDOWS_TEMPLATE`]
//!
//! **POSIX-style**
//! 1. the native reentrant translation, called exactly once
//! 2. [`UNKNOWN_POSIX_TEMPLATE`] when it fails or yields nothing
//!
//! Afterwards one trailing `"\n"` and then one trailing `"\r"` are removed,
//! subject to [`MessageBuf::strip_line_ending`]'s short-input guard.
//!
//! # Ambient State
//!
//! `errno` (and the last API error on Windows) is captured before the first
//! step and restored, if changed, on every exit path.
//!
//! ```rust
//! use curl_strerror::{ambient, strerror};
//!
//! ambient::set_errno(5);
//! let mut buf = [0u8; 128];
//! let text = strerror(2, &mut buf).unwrap();
//! assert!(!text.is_empty());
//! # #[cfg(any(unix, windows))]
//! assert_eq!(ambient::errno(), 5);
//! ```

use crate::ambient::AmbientGuard;
use crate::locale::{tr, write_template};
use crate::logging::TranslationRecord;
use crate::platform::{NativeErrors, NumberingStyle, SystemErrors};
use crate::{Domain, Message, MessageBuf, Resolution};
use std::fmt;

/// Windows-style fallback. Arguments: the code, then its `%#x` hex form.
pub const UNKNOWN_WINDOWS_TEMPLATE: &str = "Unknown error {} ({})";

/// POSIX-style fallback. Argument: the code.
pub const UNKNOWN_POSIX_TEMPLATE: &str = "Unknown error {}";

/// `%#x` formatting: bare `0` for zero, `0x`-prefixed lowercase otherwise.
struct AltHex(u32);

impl fmt::Display for AltHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            f.write_str("0")
        } else {
            write!(f, "{:#x}", self.0)
        }
    }
}

/// Translate `code` with an explicit platform collaborator.
///
/// On POSIX-style platforms `code` must be non-negative; this is checked in
/// debug builds only.
pub fn translate_system<'b, N>(native: &N, code: i32, buf: &'b mut [u8]) -> TranslationRecord<'b>
where
    N: NativeErrors + ?Sized,
{
    let _ambient = AmbientGuard::new();

    let Some(mut out) = MessageBuf::new(buf) else {
        return TranslationRecord::new(Domain::System, code, Resolution::Unavailable, None);
    };

    let resolution = match native.style() {
        NumberingStyle::Windows => windows_chain(native, code, &mut out),
        NumberingStyle::Posix => posix_chain(native, code, &mut out),
    };

    out.strip_line_ending();
    TranslationRecord::new(Domain::System, code, resolution, Some(out.into_str()))
}

fn windows_chain<N>(native: &N, code: i32, out: &mut MessageBuf<'_>) -> Resolution
where
    N: NativeErrors + ?Sized,
{
    if native.runtime_message(code, out) {
        return Resolution::Exact;
    }
    out.reset();

    #[cfg(feature = "socket_table")]
    {
        if crate::socket::copy_into(code, out) {
            return Resolution::Exact;
        }
        out.reset();
    }

    if native.api_message(code as u32, out) && !out.is_empty() {
        return Resolution::Exact;
    }
    out.reset();

    let _ = write_template(out, tr(UNKNOWN_WINDOWS_TEMPLATE), &[&code, &AltHex(code as u32)]);
    Resolution::Unknown
}

fn posix_chain<N>(native: &N, code: i32, out: &mut MessageBuf<'_>) -> Resolution
where
    N: NativeErrors + ?Sized,
{
    debug_assert!(code >= 0, "negative system error number {code}");

    if native.errno_message(code, out) && !out.is_empty() {
        return Resolution::Exact;
    }
    out.reset();

    let _ = write_template(out, tr(UNKNOWN_POSIX_TEMPLATE), &[&code]);
    Resolution::Unknown
}

/// Translate `code` into `buf` with an explicit platform collaborator.
///
/// Returns `None` only when `buf` is empty.
#[inline]
pub fn strerror_with<'b, N>(native: &N, code: i32, buf: &'b mut [u8]) -> Option<&'b str>
where
    N: NativeErrors + ?Sized,
{
    translate_system(native, code, buf).text()
}

/// Translate `code` into `buf` using the real platform.
///
/// Returns `None` only when `buf` is empty; nothing is written then.
#[inline]
pub fn strerror(code: i32, buf: &mut [u8]) -> Option<&str> {
    strerror_with(&SystemErrors, code, buf)
}

/// Translate `code` into an owned inline [`Message`].
pub fn system_message(code: i32) -> Message {
    let mut message = Message::new();
    let _ = strerror(code, message.as_mut_bytes());
    message
}

// ============================================================================
// Tests
// ============================================================================
