//! # curl_strerror
//!
//! Bounded, side-effect-free text for libcurl-style status codes and raw
//! platform error numbers.
//!
//! ## Design Philosophy
//!
//! 1. **A code means nothing without its domain**: every lookup names one
//! 2. **Lookups never fail**: unknown codes resolve to a fallback text
//! 3. **Static tables are zero-allocation**: they return `&'static str`
//! 4. **Buffers are caller-owned**: never overrun, always NUL-terminated
//! 5. **Ambient state is untouched**: `errno` and the last API error are
//!    restored before any translator returns
//!
//! ## Domains
//!
//! | Domain | Entry point | Storage |
//! |---|---|---|
//! | operation result | [`easy_strerror`], [`CurlCode::describe`] | static |
//! | multi manager | [`multi_strerror`], [`MultiCode::describe`] | static |
//! | shared resource | [`share_strerror`], [`ShareCode::describe`] | static |
//! | URL parser | [`url_strerror`], [`UrlCode::describe`] | static |
//! | network stack | `socket_strerror` | caller buffer |
//! | security provider | `security_strerror` | caller buffer |
//! | system | [`strerror`], [`system_message`] | caller buffer / inline |
//!
//! ## Quick Start
//!
//! ```rust
//! use curl_strerror::{CurlCode, Domain, lookup, strerror};
//!
//! assert_eq!(CurlCode::CouldntConnect.describe(), "Could not connect to server");
//! assert_eq!(lookup(Domain::Share, 2), Some("Share currently in use"));
//!
//! let mut buf = [0u8; 256];
//! let text = strerror(2, &mut buf).unwrap();
//! assert!(!text.is_empty());
//! ```
//!
//! ## Logging a Translation
//!
//! The crate never logs by itself. Every lookup can be turned into a
//! [`TranslationRecord`] for the caller's logger:
//!
//! ```rust
//! use curl_strerror::{Domain, resolve};
//!
//! let record = resolve(Domain::Url, 32);
//! let mut line = String::new();
//! record.write_to(&mut line).unwrap();
//! assert_eq!(line, "[url:32] unknown text='CURLUcode unknown'");
//! ```
//!
//! ## Features
//!
//! - `verbose_strings` (default): full per-code texts; without it every
//!   domain collapses to "No error" / "Error"
//! - `socket_table` (default): network-stack table and its use as a system
//!   translator fallback
//! - `security_table` (default): security-provider status translator
//! - `localize`: process-wide localization hook, see `locale::install_localizer`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ambient;
pub mod buffer;
pub mod codes;
pub mod convenience;
pub mod definitions;
pub mod locale;
pub mod logging;
pub mod platform;
#[cfg(feature = "security_table")]
pub mod security;
#[cfg(feature = "socket_table")]
pub mod socket;
pub mod system;

pub use buffer::*;
pub use codes::*;
pub use definitions::*;
pub use locale::*;
pub use logging::*;
pub use platform::*;
pub use system::*;

#[cfg(feature = "security_table")]
pub use security::{security_strerror, security_strerror_with, translate_security};
#[cfg(feature = "socket_table")]
pub use socket::socket_strerror;
