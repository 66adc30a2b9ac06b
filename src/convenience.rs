//! Declaration macro for static code tables.
//!
//! A domain table is pure data: a closed set of `(code, text)` pairs, one
//! success code, one fallback text and a terminal count sentinel. The
//! [`define_code_table!`](crate::define_code_table) macro turns that data
//! into a `#[repr(i32)]` enum plus its [`CodeTable`](crate::CodeTable) impl,
//! so the text for a code lives on the same line as its number.
//!
//! # Rules
//!
//! 1. **Codes and texts MUST be literals** - the table is fixed at compile time
//! 2. **Exactly one entry per code** - duplicate discriminants fail to compile
//! 3. **The sentinel has no entry** - it resolves to the fallback text
//!
//! # Usage
//!
//! ```rust
//! use curl_strerror::{define_code_table, describe_code, CodeTable, Domain};
//!
//! define_code_table! {
//!     /// Results of a toy subsystem.
//!     pub enum ToyCode: Domain::Easy, ok = 0, last = 3, unknown = "Unknown toy error" {
//!         /// Success.
//!         Ok = 0 => "No error",
//!         /// Broken.
//!         Broken = 1 => "Toy is broken",
//!         /// Lost.
//!         Lost = 2 => "Toy was lost",
//!     }
//! }
//!
//! assert_eq!(ToyCode::Broken.describe(), "Toy is broken");
//! assert_eq!(describe_code::<ToyCode>(ToyCode::LAST), "Unknown toy error");
//! assert_eq!(ToyCode::ALL.len(), 3);
//! ```

/// Declare a domain enum with one static text per code.
///
/// Generates:
/// - a `#[repr(i32)]` enum with the given discriminants
/// - inherent `code`, `from_code`, `describe`, `LAST` and `ALL`
/// - `CodeTable`, `TryFrom<i32>`, `From<Enum> for i32` and `Display`
#[macro_export]
macro_rules! define_code_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $domain:expr,
            ok = $ok:literal, last = $last:literal, unknown = $unknown:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Terminal count sentinel; resolves to the fallback text.
            pub const LAST: i32 = $last;

            /// Every defined code, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Numeric value of this code.
            #[inline]
            pub const fn code(self) -> i32 {
                self as i32
            }

            /// Map a raw value back to a defined code.
            #[inline]
            pub const fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Human-readable description of this code.
            #[inline]
            pub fn describe(self) -> &'static str {
                $crate::describe_code::<Self>(self.code())
            }

            #[inline]
            const fn table_text(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl $crate::CodeTable for $name {
            const DOMAIN: $crate::Domain = $domain;
            const OK_CODE: i32 = $ok;
            const UNKNOWN_TEXT: &'static str = $unknown;
            const LAST: i32 = $last;
            const ALL: &'static [Self] = $name::ALL;

            #[inline]
            fn code(self) -> i32 {
                $name::code(self)
            }

            #[inline]
            fn from_code(code: i32) -> Option<Self> {
                $name::from_code(code)
            }

            #[inline]
            fn verbose_text(self) -> &'static str {
                self.table_text()
            }
        }

        impl ::core::convert::TryFrom<i32> for $name {
            type Error = i32;

            #[inline]
            fn try_from(code: i32) -> Result<Self, i32> {
                Self::from_code(code).ok_or(code)
            }
        }

        impl From<$name> for i32 {
            #[inline]
            fn from(code: $name) -> i32 {
                code.code()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.describe())
            }
        }
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::{CodeTable, Domain, Resolution, resolve_code};

    define_code_table! {
        enum Probe: Domain::Multi, ok = 0, last = 3, unknown = "Probe unknown" {
            Pending = -1 => "Still pending",
            Ok = 0 => "No error",
            Failed = 1 => "Probe failed",
            Gone = 2 => "Probe gone",
        }
    }

    #[test]
    fn negative_discriminants_round_trip() {
        assert_eq!(Probe::from_code(-1), Some(Probe::Pending));
        assert_eq!(Probe::Pending.code(), -1);
        assert_eq!(i32::from(Probe::Gone), 2);
    }

    #[test]
    fn sentinel_and_gaps_resolve_to_fallback() {
        assert_eq!(Probe::from_code(Probe::LAST), None);
        assert_eq!(Probe::try_from(99), Err(99));
        let (text, resolution) = resolve_code::<Probe>(Probe::LAST);
        assert_eq!(resolution, Resolution::Unknown);
        #[cfg(feature = "verbose_strings")]
        assert_eq!(text, "Probe unknown");
        #[cfg(not(feature = "verbose_strings"))]
        assert_eq!(text, "Error");
    }

    #[test]
    fn table_metadata_is_exposed() {
        assert_eq!(<Probe as CodeTable>::DOMAIN, Domain::Multi);
        assert_eq!(<Probe as CodeTable>::ALL.len(), 4);
        assert_eq!(<Probe as CodeTable>::OK_CODE, 0);
    }

    #[cfg(feature = "verbose_strings")]
    #[test]
    fn display_uses_description() {
        assert_eq!(Probe::Failed.to_string(), "Probe failed");
    }
}
