//! Network-stack error table (Winsock numbering).
//!
//! Consulted by the system translator between the C-runtime table and the
//! generic API translation. Unlike the system translator, this table never
//! truncates: a text that does not fit the caller's buffer counts as
//! not found, so the caller's next fallback runs instead.

use crate::codes::VERBOSE_STRINGS;
use crate::locale::tr;
use crate::MessageBuf;

/// Base of the Winsock error range.
pub const WSABASEERR: i32 = 10000;

macro_rules! socket_errors {
    ($($(#[$meta:meta])* $name:ident = $value:literal),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub const $name: i32 = $value;
        )+

        /// Every code with an entry, in numeric order.
        pub const ALL: &[i32] = &[$($name),+];
    };
}

socket_errors! {
    /// Interrupted call.
    WSAEINTR = 10004,
    /// Bad file handle.
    WSAEBADF = 10009,
    /// Permission denied.
    WSAEACCES = 10013,
    /// Bad address.
    WSAEFAULT = 10014,
    /// Invalid argument.
    WSAEINVAL = 10022,
    /// Too many open sockets.
    WSAEMFILE = 10024,
    /// Operation would block.
    WSAEWOULDBLOCK = 10035,
    /// Blocking operation in progress.
    WSAEINPROGRESS = 10036,
    /// Operation already in progress.
    WSAEALREADY = 10037,
    /// Not a socket.
    WSAENOTSOCK = 10038,
    /// Destination address required.
    WSAEDESTADDRREQ = 10039,
    /// Message too long.
    WSAEMSGSIZE = 10040,
    /// Wrong protocol type.
    WSAEPROTOTYPE = 10041,
    /// Bad protocol option.
    WSAENOPROTOOPT = 10042,
    /// Protocol not supported.
    WSAEPROTONOSUPPORT = 10043,
    /// Socket type not supported.
    WSAESOCKTNOSUPPORT = 10044,
    /// Operation not supported.
    WSAEOPNOTSUPP = 10045,
    /// Protocol family not supported.
    WSAEPFNOSUPPORT = 10046,
    /// Address family not supported.
    WSAEAFNOSUPPORT = 10047,
    /// Address in use.
    WSAEADDRINUSE = 10048,
    /// Address not available.
    WSAEADDRNOTAVAIL = 10049,
    /// Network down.
    WSAENETDOWN = 10050,
    /// Network unreachable.
    WSAENETUNREACH = 10051,
    /// Network reset.
    WSAENETRESET = 10052,
    /// Connection aborted.
    WSAECONNABORTED = 10053,
    /// Connection reset.
    WSAECONNRESET = 10054,
    /// No buffer space.
    WSAENOBUFS = 10055,
    /// Already connected.
    WSAEISCONN = 10056,
    /// Not connected.
    WSAENOTCONN = 10057,
    /// Shut down.
    WSAESHUTDOWN = 10058,
    /// Too many references.
    WSAETOOMANYREFS = 10059,
    /// Timed out.
    WSAETIMEDOUT = 10060,
    /// Connection refused.
    WSAECONNREFUSED = 10061,
    /// Name translation loop.
    WSAELOOP = 10062,
    /// Name too long.
    WSAENAMETOOLONG = 10063,
    /// Host down.
    WSAEHOSTDOWN = 10064,
    /// Host unreachable.
    WSAEHOSTUNREACH = 10065,
    /// Directory not empty.
    WSAENOTEMPTY = 10066,
    /// Too many processes.
    WSAEPROCLIM = 10067,
    /// User quota exceeded.
    WSAEUSERS = 10068,
    /// Disk quota exceeded.
    WSAEDQUOT = 10069,
    /// Stale handle.
    WSAESTALE = 10070,
    /// Item is remote.
    WSAEREMOTE = 10071,
    /// Network subsystem unavailable.
    WSASYSNOTREADY = 10091,
    /// Requested version unsupported.
    WSAVERNOTSUPPORTED = 10092,
    /// Library not initialised.
    WSANOTINITIALISED = 10093,
    /// Graceful shutdown in progress.
    WSAEDISCON = 10101,
    /// Authoritative: host not found.
    WSAHOST_NOT_FOUND = 11001,
    /// Non-authoritative: host not found, or server failure.
    WSATRY_AGAIN = 11002,
    /// Non-recoverable name server error.
    WSANO_RECOVERY = 11003,
    /// Valid name, no record of the requested type.
    WSANO_DATA = 11004,
}

fn table_text(code: i32) -> Option<&'static str> {
    let text = match code {
        WSAEINTR => "Call interrupted",
        WSAEBADF => "Bad file",
        WSAEACCES => "Bad access",
        WSAEFAULT => "Bad argument",
        WSAEINVAL => "Invalid arguments",
        WSAEMFILE => "Out of file descriptors",
        WSAEWOULDBLOCK => "Call would block",
        WSAEINPROGRESS | WSAEALREADY => "Blocking call in progress",
        WSAENOTSOCK => "Descriptor is not a socket",
        WSAEDESTADDRREQ => "Need destination address",
        WSAEMSGSIZE => "Bad message size",
        WSAEPROTOTYPE => "Bad protocol",
        WSAENOPROTOOPT => "Protocol option is unsupported",
        WSAEPROTONOSUPPORT => "Protocol is unsupported",
        WSAESOCKTNOSUPPORT => "Socket is unsupported",
        WSAEOPNOTSUPP => "Operation not supported",
        WSAEAFNOSUPPORT => "Address family not supported",
        WSAEPFNOSUPPORT => "Protocol family not supported",
        WSAEADDRINUSE => "Address already in use",
        WSAEADDRNOTAVAIL => "Address not available",
        WSAENETDOWN => "Network down",
        WSAENETUNREACH => "Network unreachable",
        WSAENETRESET => "Network has been reset",
        WSAECONNABORTED => "Connection was aborted",
        WSAECONNRESET => "Connection was reset",
        WSAENOBUFS => "No buffer space",
        WSAEISCONN => "Socket is already connected",
        WSAENOTCONN => "Socket is not connected",
        WSAESHUTDOWN => "Socket has been shut down",
        WSAETOOMANYREFS => "Too many references",
        WSAETIMEDOUT => "Timed out",
        WSAECONNREFUSED => "Connection refused",
        WSAELOOP => "Loop??",
        WSAENAMETOOLONG => "Name too long",
        WSAEHOSTDOWN => "Host down",
        WSAEHOSTUNREACH => "Host unreachable",
        WSAENOTEMPTY => "Not empty",
        WSAEPROCLIM => "Process limit reached",
        WSAEUSERS => "Too many users",
        WSAEDQUOT => "Bad quota",
        WSAESTALE => "Something is stale",
        WSAEREMOTE => "Remote error",
        WSAEDISCON => "Disconnected",
        WSASYSNOTREADY => "Winsock library is not ready",
        WSANOTINITIALISED => "Winsock library not initialised",
        WSAVERNOTSUPPORTED => "Winsock version not supported",
        WSAHOST_NOT_FOUND => "Host not found",
        WSATRY_AGAIN => "Host not found, try again",
        WSANO_RECOVERY => "Unrecoverable error in call to nameserver",
        WSANO_DATA => "No data record of requested type",
        _ => return None,
    };
    Some(text)
}

/// Static text for a network-stack code.
///
/// `None` for codes without an entry, and for every code when verbose
/// strings are disabled.
pub fn describe(code: i32) -> Option<&'static str> {
    if !VERBOSE_STRINGS {
        return None;
    }
    table_text(code).map(tr)
}

/// Copy the text for `code` into `out` if it fits whole.
pub(crate) fn copy_into(code: i32, out: &mut MessageBuf<'_>) -> bool {
    match describe(code) {
        Some(text) => out.try_copy(text),
        None => false,
    }
}

/// Render a network-stack code into `buf`.
///
/// Returns `None` when `buf` is empty, the code has no entry, or the text
/// does not fit. Never truncates.
///
/// ```rust
/// use curl_strerror::socket::{socket_strerror, WSAECONNREFUSED};
///
/// let mut buf = [0u8; 64];
/// assert_eq!(socket_strerror(WSAECONNREFUSED, &mut buf), Some("Connection refused"));
///
/// let mut tiny = [0u8; 4];
/// assert_eq!(socket_strerror(WSAECONNREFUSED, &mut tiny), None);
/// ```
pub fn socket_strerror(code: i32, buf: &mut [u8]) -> Option<&str> {
    let mut out = MessageBuf::new(buf)?;
    if copy_into(code, &mut out) {
        Some(out.into_str())
    } else {
        None
    }
}
