//! Narrow interface to the platform's own error texts.
//!
//! The translators never call the operating system directly. They go through
//! [`NativeErrors`], so tests can substitute a fake and the real
//! implementation, [`SystemErrors`], stays in one place.
//!
//! | Method | POSIX-style | Windows-style |
//! |---|---|---|
//! | `runtime_message` | unused | CRT `strerror` for `0 <= code < sys_nerr` |
//! | `errno_message` | `strerror_r` (XSI) | unused |
//! | `api_message` | unused | `FormatMessageW` |

use crate::MessageBuf;

/// How raw system error numbers are assigned on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberingStyle {
    /// One `errno` space, translated by a single native call.
    Posix,
    /// Overlapping CRT, socket and API spaces, tried in that order.
    Windows,
}

impl NumberingStyle {
    /// The style of the platform this crate was built for.
    pub const NATIVE: Self = if cfg!(windows) {
        Self::Windows
    } else {
        Self::Posix
    };
}

/// Platform collaborator consulted by the buffer translators.
///
/// Every method writes into `out` and reports whether it produced a message.
/// The defaults produce nothing, so an implementation only overrides what its
/// platform provides.
pub trait NativeErrors {
    /// Numbering style that selects the translation chain.
    fn style(&self) -> NumberingStyle {
        NumberingStyle::NATIVE
    }

    /// Dense C-runtime table. Must return `false` when `code` is outside it.
    fn runtime_message(&self, _code: i32, _out: &mut MessageBuf<'_>) -> bool {
        false
    }

    /// Reentrant errno translation. Returns `false` when the native call
    /// reports failure.
    fn errno_message(&self, _code: i32, _out: &mut MessageBuf<'_>) -> bool {
        false
    }

    /// Generic platform API translation of a 32-bit error value.
    fn api_message(&self, _code: u32, _out: &mut MessageBuf<'_>) -> bool {
        false
    }
}

impl<T: NativeErrors + ?Sized> NativeErrors for &T {
    fn style(&self) -> NumberingStyle {
        (**self).style()
    }

    fn runtime_message(&self, code: i32, out: &mut MessageBuf<'_>) -> bool {
        (**self).runtime_message(code, out)
    }

    fn errno_message(&self, code: i32, out: &mut MessageBuf<'_>) -> bool {
        (**self).errno_message(code, out)
    }

    fn api_message(&self, code: u32, out: &mut MessageBuf<'_>) -> bool {
        (**self).api_message(code, out)
    }
}

/// The real platform collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemErrors;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        use std::ffi::CStr;

        /// Scratch size for `strerror_r`; longer native messages are cut.
        const NATIVE_SCRATCH_LEN: usize = 256;

        impl NativeErrors for SystemErrors {
            fn errno_message(&self, code: i32, out: &mut MessageBuf<'_>) -> bool {
                let mut scratch = [0u8; NATIVE_SCRATCH_LEN];
                // SAFETY: scratch is writable for its full length.
                let rc = unsafe {
                    libc::strerror_r(code, scratch.as_mut_ptr().cast(), scratch.len())
                };
                if rc != 0 {
                    return false;
                }

                let text = CStr::from_bytes_until_nul(&scratch)
                    .map(CStr::to_bytes)
                    .unwrap_or(&scratch);
                out.push_bytes_lossy(text);
                true
            }
        }
    } else if #[cfg(windows)] {
        use std::ffi::CStr;
        use winapi::shared::minwindef::DWORD;
        use winapi::um::winbase::{
            FormatMessageW, FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS,
        };

        /// UTF-16 scratch size for `FormatMessageW`.
        const WIDE_SCRATCH_LEN: usize = 512;

        unsafe extern "C" {
            fn __sys_nerr() -> *mut libc::c_int;
        }

        fn sys_nerr() -> i32 {
            // SAFETY: the CRT returns a pointer to a process-wide constant.
            unsafe { *__sys_nerr() }
        }

        impl NativeErrors for SystemErrors {
            fn runtime_message(&self, code: i32, out: &mut MessageBuf<'_>) -> bool {
                if code < 0 || code >= sys_nerr() {
                    return false;
                }

                // SAFETY: code is within the CRT table.
                let text = unsafe { libc::strerror(code) };
                if !text.is_null() {
                    // SAFETY: the CRT table holds NUL-terminated static strings.
                    out.push_bytes_lossy(unsafe { CStr::from_ptr(text) }.to_bytes());
                }
                true
            }

            fn api_message(&self, code: u32, out: &mut MessageBuf<'_>) -> bool {
                let mut wide = [0u16; WIDE_SCRATCH_LEN];
                // SAFETY: wide is writable for the length passed.
                let written = unsafe {
                    FormatMessageW(
                        FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
                        std::ptr::null(),
                        code as DWORD,
                        0,
                        wide.as_mut_ptr(),
                        wide.len() as DWORD,
                        std::ptr::null_mut(),
                    )
                } as usize;
                if written == 0 {
                    return false;
                }

                let mut end = written.min(wide.len());
                while end > 0 && matches!(wide[end - 1], 0x0A | 0x0D | 0x20) {
                    end -= 1;
                }
                if end == 0 {
                    return false;
                }

                let mut utf8 = [0u8; 4];
                for c in char::decode_utf16(wide[..end].iter().copied()) {
                    let c = c.unwrap_or(char::REPLACEMENT_CHARACTER);
                    out.push_str(c.encode_utf8(&mut utf8));
                }
                true
            }
        }
    } else {
        impl NativeErrors for SystemErrors {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;
    impl NativeErrors for Silent {}

    #[test]
    fn defaults_produce_nothing() {
        let mut storage = [0u8; 16];
        let mut out = MessageBuf::new(&mut storage).unwrap();
        assert!(!Silent.runtime_message(1, &mut out));
        assert!(!Silent.errno_message(1, &mut out));
        assert!(!Silent.api_message(1, &mut out));
        assert!(out.is_empty());
        assert_eq!(Silent.style(), NumberingStyle::NATIVE);
    }

    #[test]
    fn references_forward() {
        let native: &dyn NativeErrors = &Silent;
        assert_eq!((&native).style(), NumberingStyle::NATIVE);
    }

    #[cfg(unix)]
    #[test]
    fn native_style_is_posix_on_unix() {
        assert_eq!(NumberingStyle::NATIVE, NumberingStyle::Posix);
    }

    #[cfg(unix)]
    #[test]
    fn strerror_r_describes_enoent() {
        let mut storage = [0u8; 128];
        let mut out = MessageBuf::new(&mut storage).unwrap();
        assert!(SystemErrors.errno_message(libc::ENOENT, &mut out));
        assert!(!out.is_empty());
        assert!(!out.as_str().contains('\0'));
    }

    #[cfg(windows)]
    #[test]
    fn crt_table_is_bounded() {
        let mut storage = [0u8; 128];
        let mut out = MessageBuf::new(&mut storage).unwrap();
        assert!(!SystemErrors.runtime_message(-1, &mut out));
        assert!(!SystemErrors.runtime_message(i32::MAX, &mut out));
        assert!(SystemErrors.runtime_message(2, &mut out));
    }
}
