//! Security-provider status translator (SSPI numbering).
//!
//! Status codes are rendered by their symbolic name rather than by prose,
//! followed by the code in hexadecimal and, where the platform has one, its
//! own message for the same value:
//!
//! ```text
//! SEC_E_CERT_EXPIRED (0x80090328)
//! SEC_E_CERT_EXPIRED (0x80090328) - The received certificate has expired.
//! ```
//!
//! `SEC_E_ILLEGAL_MESSAGE` is the one exception: it always carries a fixed
//! explanation, since it usually means a fatal TLS alert.

use crate::ambient::AmbientGuard;
use crate::codes::{BRIEF_ERROR, NO_ERROR, UNKNOWN_ERROR, VERBOSE_STRINGS};
use crate::locale::{tr, write_template};
use crate::logging::TranslationRecord;
use crate::platform::{NativeErrors, SystemErrors};
use crate::{Domain, Message, MessageBuf, Resolution};
use std::fmt::{self, Write};

/// Rendering of `SEC_E_ILLEGAL_MESSAGE`. Argument: the code as `0x%08X`.
pub const ILLEGAL_MESSAGE_TEMPLATE: &str = "SEC_E_ILLEGAL_MESSAGE ({}) - This error usually \
     occurs when a fatal SSL/TLS alert is received (e.g. handshake failed). More detail may be \
     available in the Windows System event log.";

/// `0x%08X` formatting.
struct Hex32(u32);

impl fmt::Display for Hex32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

macro_rules! security_statuses {
    ($($name:ident = $value:literal),+ $(,)?) => {
        /// Status constants as `i32` bit patterns.
        #[allow(missing_docs)]
        pub mod status {
            pub const SEC_E_OK: i32 = 0;
            $(pub const $name: i32 = $value as i32;)+
        }

        /// Every status with a symbolic name, `SEC_E_OK` excluded.
        pub const ALL: &[i32] = &[$(status::$name),+];

        fn table_symbol(code: i32) -> Option<&'static str> {
            match code {
                $(status::$name => Some(stringify!($name)),)+
                _ => None,
            }
        }
    };
}

security_statuses! {
    CRYPT_E_REVOKED = 0x8009_2010_u32,
    CRYPT_E_NO_REVOCATION_DLL = 0x8009_2011_u32,
    CRYPT_E_NO_REVOCATION_CHECK = 0x8009_2012_u32,
    CRYPT_E_REVOCATION_OFFLINE = 0x8009_2013_u32,
    CRYPT_E_NOT_IN_REVOCATION_DATABASE = 0x8009_2014_u32,
    SEC_E_ALGORITHM_MISMATCH = 0x8009_0331_u32,
    SEC_E_BAD_BINDINGS = 0x8009_0346_u32,
    SEC_E_BAD_PKGID = 0x8009_0316_u32,
    SEC_E_BUFFER_TOO_SMALL = 0x8009_0321_u32,
    SEC_E_CANNOT_INSTALL = 0x8009_0307_u32,
    SEC_E_CANNOT_PACK = 0x8009_0309_u32,
    SEC_E_CERT_EXPIRED = 0x8009_0328_u32,
    SEC_E_CERT_UNKNOWN = 0x8009_0327_u32,
    SEC_E_CERT_WRONG_USAGE = 0x8009_0349_u32,
    SEC_E_CONTEXT_EXPIRED = 0x8009_0317_u32,
    SEC_E_CROSSREALM_DELEGATION_FAILURE = 0x8009_0357_u32,
    SEC_E_CRYPTO_SYSTEM_INVALID = 0x8009_0337_u32,
    SEC_E_DECRYPT_FAILURE = 0x8009_0330_u32,
    SEC_E_DELEGATION_POLICY = 0x8009_035E_u32,
    SEC_E_DELEGATION_REQUIRED = 0x8009_0345_u32,
    SEC_E_DOWNGRADE_DETECTED = 0x8009_0350_u32,
    SEC_E_ENCRYPT_FAILURE = 0x8009_0329_u32,
    SEC_E_ILLEGAL_MESSAGE = 0x8009_0326_u32,
    SEC_E_INCOMPLETE_CREDENTIALS = 0x8009_0320_u32,
    SEC_E_INCOMPLETE_MESSAGE = 0x8009_0318_u32,
    SEC_E_INSUFFICIENT_MEMORY = 0x8009_0300_u32,
    SEC_E_INTERNAL_ERROR = 0x8009_0304_u32,
    SEC_E_INVALID_HANDLE = 0x8009_0301_u32,
    SEC_E_INVALID_PARAMETER = 0x8009_035D_u32,
    SEC_E_INVALID_TOKEN = 0x8009_0308_u32,
    SEC_E_ISSUING_CA_UNTRUSTED = 0x8009_0352_u32,
    SEC_E_ISSUING_CA_UNTRUSTED_KDC = 0x8009_0359_u32,
    SEC_E_KDC_CERT_EXPIRED = 0x8009_035A_u32,
    SEC_E_KDC_CERT_REVOKED = 0x8009_035B_u32,
    SEC_E_KDC_INVALID_REQUEST = 0x8009_0340_u32,
    SEC_E_KDC_UNABLE_TO_REFER = 0x8009_0341_u32,
    SEC_E_KDC_UNKNOWN_ETYPE = 0x8009_0342_u32,
    SEC_E_LOGON_DENIED = 0x8009_030C_u32,
    SEC_E_MAX_REFERRALS_EXCEEDED = 0x8009_0338_u32,
    SEC_E_MESSAGE_ALTERED = 0x8009_030F_u32,
    SEC_E_MULTIPLE_ACCOUNTS = 0x8009_0347_u32,
    SEC_E_MUST_BE_KDC = 0x8009_0339_u32,
    SEC_E_NOT_OWNER = 0x8009_0306_u32,
    SEC_E_NO_AUTHENTICATING_AUTHORITY = 0x8009_0311_u32,
    SEC_E_NO_CREDENTIALS = 0x8009_030E_u32,
    SEC_E_NO_IMPERSONATION = 0x8009_030B_u32,
    SEC_E_NO_IP_ADDRESSES = 0x8009_0335_u32,
    SEC_E_NO_KERB_KEY = 0x8009_0348_u32,
    SEC_E_NO_PA_DATA = 0x8009_033C_u32,
    SEC_E_NO_S4U_PROT_SUPPORT = 0x8009_0356_u32,
    SEC_E_NO_TGT_REPLY = 0x8009_0334_u32,
    SEC_E_OUT_OF_SEQUENCE = 0x8009_0310_u32,
    SEC_E_PKINIT_CLIENT_FAILURE = 0x8009_0354_u32,
    SEC_E_PKINIT_NAME_MISMATCH = 0x8009_033D_u32,
    SEC_E_POLICY_NLTM_ONLY = 0x8009_035F_u32,
    SEC_E_QOP_NOT_SUPPORTED = 0x8009_030A_u32,
    SEC_E_REVOCATION_OFFLINE_C = 0x8009_0353_u32,
    SEC_E_REVOCATION_OFFLINE_KDC = 0x8009_0358_u32,
    SEC_E_SECPKG_NOT_FOUND = 0x8009_0305_u32,
    SEC_E_SECURITY_QOS_FAILED = 0x8009_0332_u32,
    SEC_E_SHUTDOWN_IN_PROGRESS = 0x8009_033F_u32,
    SEC_E_SMARTCARD_CERT_EXPIRED = 0x8009_0355_u32,
    SEC_E_SMARTCARD_CERT_REVOKED = 0x8009_0351_u32,
    SEC_E_SMARTCARD_LOGON_REQUIRED = 0x8009_033E_u32,
    SEC_E_STRONG_CRYPTO_NOT_SUPPORTED = 0x8009_033A_u32,
    SEC_E_TARGET_UNKNOWN = 0x8009_0303_u32,
    SEC_E_TIME_SKEW = 0x8009_0324_u32,
    SEC_E_TOO_MANY_PRINCIPALS = 0x8009_033B_u32,
    SEC_E_UNFINISHED_CONTEXT_DELETED = 0x8009_0333_u32,
    SEC_E_UNKNOWN_CREDENTIALS = 0x8009_030D_u32,
    SEC_E_UNSUPPORTED_FUNCTION = 0x8009_0302_u32,
    SEC_E_UNSUPPORTED_PREAUTH = 0x8009_0343_u32,
    SEC_E_UNTRUSTED_ROOT = 0x8009_0325_u32,
    SEC_E_WRONG_CREDENTIAL_HANDLE = 0x8009_0336_u32,
    SEC_E_WRONG_PRINCIPAL = 0x8009_0322_u32,
    SEC_I_COMPLETE_AND_CONTINUE = 0x0009_0314_u32,
    SEC_I_COMPLETE_NEEDED = 0x0009_0313_u32,
    SEC_I_CONTEXT_EXPIRED = 0x0009_0317_u32,
    SEC_I_CONTINUE_NEEDED = 0x0009_0312_u32,
    SEC_I_INCOMPLETE_CREDENTIALS = 0x0009_0320_u32,
    SEC_I_LOCAL_LOGON = 0x0009_0315_u32,
    SEC_I_NO_LSA_CONTEXT = 0x0009_0323_u32,
    SEC_I_RENEGOTIATE = 0x0009_0321_u32,
    SEC_I_SIGNATURE_NEEDED = 0x0009_035C_u32,
}

// ============================================================================
// Symbol Lookup
// ============================================================================

/// Symbolic name of a status, or "No error" for `SEC_E_OK`.
///
/// Independent of the `verbose_strings` feature.
pub fn symbol(code: i32) -> Option<&'static str> {
    if code == status::SEC_E_OK {
        return Some(tr(NO_ERROR));
    }
    table_symbol(code)
}

/// Static part of a status rendering and how it was resolved.
pub fn resolve_symbol(code: i32) -> (&'static str, Resolution) {
    if !VERBOSE_STRINGS {
        return if code == status::SEC_E_OK {
            (tr(NO_ERROR), Resolution::Exact)
        } else {
            (tr(BRIEF_ERROR), Resolution::Unknown)
        };
    }

    match symbol(code) {
        Some(name) => (name, Resolution::Exact),
        None => (tr(UNKNOWN_ERROR), Resolution::Unknown),
    }
}

// ============================================================================
// Buffer Translator
// ============================================================================

/// Render a security status into `buf` with an explicit platform collaborator.
///
/// Ambient error state is restored before returning.
pub fn translate_security<'b, N>(native: &N, code: i32, buf: &'b mut [u8]) -> TranslationRecord<'b>
where
    N: NativeErrors + ?Sized,
{
    let _ambient = AmbientGuard::new();

    let Some(mut out) = MessageBuf::new(buf) else {
        return TranslationRecord::new(Domain::Security, code, Resolution::Unavailable, None);
    };

    let (symbol, resolution) = resolve_symbol(code);
    let hex = code as u32;

    if !VERBOSE_STRINGS {
        out.try_copy(symbol);
    } else if code == status::SEC_E_ILLEGAL_MESSAGE {
        let _ = write_template(&mut out, tr(ILLEGAL_MESSAGE_TEMPLATE), &[&Hex32(hex)]);
    } else {
        let mut scratch = Message::new();
        match enrichment(native, hex, &mut scratch) {
            Some(detail) => {
                let _ = write!(out, "{symbol} (0x{hex:08X}) - {detail}");
            }
            None => {
                let _ = write!(out, "{symbol} (0x{hex:08X})");
            }
        }
    }

    TranslationRecord::new(Domain::Security, code, resolution, Some(out.into_str()))
}

fn enrichment<'s, N>(native: &N, code: u32, scratch: &'s mut Message) -> Option<&'s str>
where
    N: NativeErrors + ?Sized,
{
    let mut out = MessageBuf::new(scratch.as_mut_bytes())?;
    if native.api_message(code, &mut out) && !out.is_empty() {
        Some(out.into_str())
    } else {
        None
    }
}

/// Render a security status into `buf` with an explicit platform collaborator.
///
/// Returns `None` only when `buf` is empty.
#[inline]
pub fn security_strerror_with<'b, N>(native: &N, code: i32, buf: &'b mut [u8]) -> Option<&'b str>
where
    N: NativeErrors + ?Sized,
{
    translate_security(native, code, buf).text()
}

/// Render a security status into `buf` using the real platform.
///
/// ```rust
/// use curl_strerror::security::{security_strerror, status};
///
/// let mut buf = [0u8; 256];
/// let text = security_strerror(status::SEC_E_CERT_EXPIRED, &mut buf).unwrap();
/// assert!(text.starts_with("SEC_E_CERT_EXPIRED (0x80090328)"));
///
/// assert_eq!(security_strerror(status::SEC_E_CERT_EXPIRED, &mut []), None);
/// ```
#[inline]
pub fn security_strerror(code: i32, buf: &mut [u8]) -> Option<&str> {
    security_strerror_with(&SystemErrors, code, buf)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient;

    /// Platform without API messages.
    struct Bare;
    impl NativeErrors for Bare {}

    /// Platform whose API messages also clobber errno.
    struct Chatty(&'static str);
    impl NativeErrors for Chatty {
        fn api_message(&self, _code: u32, out: &mut MessageBuf<'_>) -> bool {
            ambient::set_errno(9999);
            out.push_str(self.0);
            true
        }
    }

    fn render<N: NativeErrors>(native: &N, code: i32) -> String {
        let mut buf = [0u8; 512];
        security_strerror_with(native, code, &mut buf).unwrap().to_owned()
    }

    #[test]
    fn table_has_eighty_four_symbols() {
        assert_eq!(ALL.len(), 84);
        for (i, a) in ALL.iter().enumerate() {
            assert!(ALL[i + 1..].iter().all(|b| a != b), "duplicate status {a:#x}");
            assert!(symbol(*a).is_some());
        }
    }

    #[test]
    fn symbols_are_their_own_names() {
        assert_eq!(symbol(status::SEC_E_WRONG_PRINCIPAL), Some("SEC_E_WRONG_PRINCIPAL"));
        assert_eq!(symbol(status::SEC_I_CONTINUE_NEEDED), Some("SEC_I_CONTINUE_NEEDED"));
        assert_eq!(symbol(status::CRYPT_E_REVOKED), Some("CRYPT_E_REVOKED"));
        assert_eq!(symbol(status::SEC_E_OK), Some("No error"));
        assert_eq!(symbol(1), None);
    }

    #[test]
    fn error_and_info_variants_differ() {
        assert_ne!(status::SEC_E_CONTEXT_EXPIRED, status::SEC_I_CONTEXT_EXPIRED);
        assert!(status::SEC_E_CONTEXT_EXPIRED < 0);
        assert!(status::SEC_I_CONTEXT_EXPIRED > 0);
    }

    #[test]
    fn zero_capacity_is_unavailable() {
        let mut empty: [u8; 0] = [];
        let record = translate_security(&Bare, status::SEC_E_CERT_EXPIRED, &mut empty);
        assert_eq!(record.resolution(), Resolution::Unavailable);
        assert_eq!(record.text(), None);
    }

    #[cfg(feature = "verbose_strings")]
    #[test]
    fn plain_rendering_without_enrichment() {
        assert_eq!(render(&Bare, status::SEC_E_CERT_EXPIRED), "SEC_E_CERT_EXPIRED (0x80090328)");
        assert_eq!(render(&Bare, status::SEC_I_RENEGOTIATE), "SEC_I_RENEGOTIATE (0x00090321)");
        assert_eq!(render(&Bare, status::SEC_E_OK), "No error (0x00000000)");
        assert_eq!(render(&Bare, 0x1234), "Unknown error (0x00001234)");
    }

    #[cfg(feature = "verbose_strings")]
    #[test]
    fn enrichment_is_appended() {
        let native = Chatty("The received certificate has expired.");
        assert_eq!(
            render(&native, status::SEC_E_CERT_EXPIRED),
            "SEC_E_CERT_EXPIRED (0x80090328) - The received certificate has expired."
        );
    }

    #[cfg(feature = "verbose_strings")]
    #[test]
    fn empty_enrichment_is_ignored() {
        assert_eq!(render(&Chatty(""), status::SEC_E_TIME_SKEW), "SEC_E_TIME_SKEW (0x80090324)");
    }

    #[cfg(feature = "verbose_strings")]
    #[test]
    fn illegal_message_has_fixed_explanation() {
        let text = render(&Chatty("ignored"), status::SEC_E_ILLEGAL_MESSAGE);
        assert!(text.starts_with("SEC_E_ILLEGAL_MESSAGE (0x80090326) - This error usually occurs"));
        assert!(text.ends_with("available in the Windows System event log."));
        assert!(!text.contains("ignored"));
    }

    #[cfg(feature = "verbose_strings")]
    #[test]
    fn small_buffers_truncate() {
        let mut buf = [0u8; 11];
        let text = security_strerror_with(&Bare, status::SEC_E_CERT_EXPIRED, &mut buf).unwrap();
        assert_eq!(text, "SEC_E_CERT");
    }

    #[cfg(not(feature = "verbose_strings"))]
    #[test]
    fn brief_mode_copies_only_if_it_fits() {
        assert_eq!(render(&Bare, status::SEC_E_OK), "No error");
        assert_eq!(render(&Bare, status::SEC_E_CERT_EXPIRED), "Error");

        let mut tiny = [0u8; 5];
        assert_eq!(security_strerror_with(&Bare, status::SEC_E_CERT_EXPIRED, &mut tiny), Some(""));
    }

    #[cfg(any(unix, windows))]
    #[test]
    fn ambient_state_survives_enrichment() {
        ambient::set_errno(42);
        let _ = render(&Chatty("detail"), status::SEC_E_CERT_EXPIRED);
        assert_eq!(ambient::errno(), 42);
    }
}
