//! Ambient error state: `errno` and, on Windows, the last API error.
//!
//! Neither value belongs to this crate, but the native calls a translation
//! makes may overwrite them. [`AmbientGuard`] snapshots both on creation and
//! writes back whatever changed when it drops, on every exit path.
//!
//! ```rust
//! use curl_strerror::ambient::{self, AmbientGuard};
//!
//! ambient::set_errno(7);
//! {
//!     let _guard = AmbientGuard::new();
//!     ambient::set_errno(99);
//! }
//! # #[cfg(any(unix, windows))]
//! assert_eq!(ambient::errno(), 7);
//! ```

use libc::c_int;

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "emscripten", target_os = "fuchsia"))] {
        #[inline]
        fn errno_location() -> Option<*mut c_int> {
            // SAFETY: returns the calling thread's errno slot.
            Some(unsafe { libc::__errno_location() })
        }
    } else if #[cfg(any(target_os = "android", target_os = "netbsd", target_os = "openbsd"))] {
        #[inline]
        fn errno_location() -> Option<*mut c_int> {
            // SAFETY: returns the calling thread's errno slot.
            Some(unsafe { libc::__errno() })
        }
    } else if #[cfg(any(target_vendor = "apple", target_os = "freebsd"))] {
        #[inline]
        fn errno_location() -> Option<*mut c_int> {
            // SAFETY: returns the calling thread's errno slot.
            Some(unsafe { libc::__error() })
        }
    } else if #[cfg(any(target_os = "solaris", target_os = "illumos"))] {
        #[inline]
        fn errno_location() -> Option<*mut c_int> {
            // SAFETY: returns the calling thread's errno slot.
            Some(unsafe { libc::___errno() })
        }
    } else if #[cfg(windows)] {
        unsafe extern "C" {
            fn _errno() -> *mut c_int;
        }

        #[inline]
        fn errno_location() -> Option<*mut c_int> {
            // SAFETY: the CRT returns the calling thread's errno slot.
            Some(unsafe { _errno() })
        }
    } else {
        #[inline]
        fn errno_location() -> Option<*mut c_int> {
            None
        }
    }
}

/// Current thread's `errno`, or 0 where the platform exposes none.
#[inline]
pub fn errno() -> i32 {
    match errno_location() {
        // SAFETY: the slot is valid for the lifetime of the thread.
        Some(slot) => unsafe { *slot },
        None => 0,
    }
}

/// Overwrite the current thread's `errno`.
#[inline]
pub fn set_errno(value: i32) {
    if let Some(slot) = errno_location() {
        // SAFETY: the slot is valid for the lifetime of the thread.
        unsafe { *slot = value }
    }
}

/// Current thread's last Windows API error.
#[cfg(windows)]
#[inline]
pub fn last_error() -> u32 {
    // SAFETY: no preconditions.
    unsafe { winapi::um::errhandlingapi::GetLastError() }
}

/// Overwrite the current thread's last Windows API error.
#[cfg(windows)]
#[inline]
pub fn set_last_error(value: u32) {
    // SAFETY: no preconditions.
    unsafe { winapi::um::errhandlingapi::SetLastError(value) }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Point-in-time copy of the ambient error values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbientState {
    errno: i32,
    #[cfg(windows)]
    last_error: u32,
}

impl AmbientState {
    /// Read the current values.
    #[inline]
    pub fn capture() -> Self {
        Self {
            errno: errno(),
            #[cfg(windows)]
            last_error: last_error(),
        }
    }

    /// Write back every value that differs from the snapshot.
    #[inline]
    pub fn restore(&self) {
        if errno() != self.errno {
            set_errno(self.errno);
        }

        #[cfg(windows)]
        {
            if last_error() != self.last_error {
                set_last_error(self.last_error);
            }
        }
    }

    /// Captured `errno`.
    #[inline]
    pub const fn errno(&self) -> i32 {
        self.errno
    }

    /// Captured last API error, where the platform has one.
    #[inline]
    pub const fn last_error(&self) -> Option<u32> {
        #[cfg(windows)]
        {
            Some(self.last_error)
        }
        #[cfg(not(windows))]
        {
            None
        }
    }
}

/// Restores the captured [`AmbientState`] when dropped.
#[derive(Debug)]
#[must_use = "the state is restored when the guard drops"]
pub struct AmbientGuard {
    saved: AmbientState,
}

impl AmbientGuard {
    /// Capture the current state.
    #[inline]
    pub fn new() -> Self {
        Self {
            saved: AmbientState::capture(),
        }
    }

    /// The snapshot that will be restored.
    #[inline]
    pub const fn saved(&self) -> &AmbientState {
        &self.saved
    }
}

impl Default for AmbientGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AmbientGuard {
    fn drop(&mut self) {
        self.saved.restore();
    }
}

// ============================================================================
// Tests
// ============================================================================
