//! The four public code domains and their texts.
//!
//! # Taxonomy
//!
//! - [`CurlCode`]: result of a single transfer operation
//! - [`MultiCode`]: result of a multi-handle manager call
//! - [`ShareCode`]: result of a shared-resource handle call
//! - [`UrlCode`]: result of a URL parser call
//!
//! Each domain maps its success code to the literal "No error". Any value
//! without an entry (obsolete codes, codes added after this table was
//! written, the `LAST` sentinel) falls through to the domain's fallback.
//!
//! # Governance
//!
//! The numbering is frozen by the public interface these codes come from.
//! Retired operation-result values (20, 24, 29, 32, 34, 40, 41, 44, 46, 50,
//! 51, 57, 62, 75, 76) are intentionally absent. Golden data for every entry
//! lives in `tests/golden_tables.rs`.

use crate::{define_code_table, describe_code, Domain};

// -----------------------------------------------------------------------------
// Operation results (0-101)
// -----------------------------------------------------------------------------
define_code_table! {
    /// Result of a single transfer operation.
    pub enum CurlCode: Domain::Easy, ok = 0, last = 102, unknown = "Unknown error" {
        /// Success.
        Ok = 0 => "No error",
        /// Scheme not supported.
        UnsupportedProtocol = 1 => "Unsupported protocol",
        /// Initialization failed.
        FailedInit = 2 => "Failed initialization",
        /// URL malformed.
        UrlMalformat = 3 => "URL using bad/illegal format or missing URL",
        /// Feature disabled at build time.
        NotBuiltIn = 4 => "A requested feature, protocol or option was not found built-in in this libcurl due to a build-time decision.",
        /// Proxy name did not resolve.
        CouldntResolveProxy = 5 => "Could not resolve proxy name",
        /// Host name did not resolve.
        CouldntResolveHost = 6 => "Could not resolve hostname",
        /// Connection failed.
        CouldntConnect = 7 => "Could not connect to server",
        /// Server reply not understood.
        WeirdServerReply = 8 => "Weird server reply",
        /// Remote resource denied access.
        RemoteAccessDenied = 9 => "Access denied to remote resource",
        /// FTP data port connect-back failed.
        FtpAcceptFailed = 10 => "FTP: The server failed to connect to data port",
        /// FTP PASS reply not understood.
        FtpWeirdPassReply = 11 => "FTP: unknown PASS reply",
        /// FTP connect-back timed out.
        FtpAcceptTimeout = 12 => "FTP: Accepting server connect has timed out",
        /// FTP PASV reply not understood.
        FtpWeirdPasvReply = 13 => "FTP: unknown PASV reply",
        /// FTP 227 response not understood.
        FtpWeird227Format = 14 => "FTP: unknown 227 response format",
        /// FTP PASV host unusable.
        FtpCantGetHost = 15 => "FTP: cannot figure out the host in the PASV response",
        /// HTTP/2 framing error.
        Http2 = 16 => "Error in the HTTP2 framing layer",
        /// FTP TYPE failed.
        FtpCouldntSetType = 17 => "FTP: could not set file type",
        /// Transfer ended early.
        PartialFile = 18 => "Transferred a partial file",
        /// FTP RETR failed.
        FtpCouldntRetrFile = 19 => "FTP: could not retrieve (RETR failed) the specified file",
        /// Quote command failed.
        QuoteError = 21 => "Quote command returned error",
        /// HTTP status >= 400 with fail-on-error.
        HttpReturnedError = 22 => "HTTP response code said error",
        /// Write callback failed.
        WriteError = 23 => "Failed writing received data to disk/application",
        /// Upload could not start.
        UploadFailed = 25 => "Upload failed (at start/before it took off)",
        /// Read callback failed.
        ReadError = 26 => "Failed to open/read local data from file/application",
        /// Allocation failed.
        OutOfMemory = 27 => "Out of memory",
        /// Timeout.
        OperationTimedout = 28 => "Timeout was reached",
        /// FTP PORT failed.
        FtpPortFailed = 30 => "FTP: command PORT failed",
        /// FTP REST failed.
        FtpCouldntUseRest = 31 => "FTP: command REST failed",
        /// Range request not honoured.
        RangeError = 33 => "Requested range was not delivered by the server",
        /// TLS handshake failed.
        SslConnectError = 35 => "SSL connect error",
        /// Resume offset rejected.
        BadDownloadResume = 36 => "Could not resume download",
        /// Local file unreadable.
        FileCouldntReadFile = 37 => "Could not read a file:// file",
        /// LDAP bind failed.
        LdapCannotBind = 38 => "LDAP: cannot bind",
        /// LDAP search failed.
        LdapSearchFailed = 39 => "LDAP: search failed",
        /// A callback aborted the operation.
        AbortedByCallback = 42 => "Operation was aborted by an application callback",
        /// Bad argument to an API function.
        BadFunctionArgument = 43 => "A libcurl function was given a bad argument",
        /// Local interface bind failed.
        InterfaceFailed = 45 => "Failed binding local connection end",
        /// Redirect limit hit.
        TooManyRedirects = 47 => "Number of redirects hit maximum amount",
        /// Unknown option.
        UnknownOption = 48 => "An unknown option was passed in to libcurl",
        /// Option string malformed.
        SetoptOptionSyntax = 49 => "Malformed option provided in a setopt",
        /// Empty reply.
        GotNothing = 52 => "Server returned nothing (no headers, no data)",
        /// Crypto engine missing.
        SslEngineNotfound = 53 => "SSL crypto engine not found",
        /// Crypto engine could not be made default.
        SslEngineSetfailed = 54 => "Can not set SSL crypto engine as default",
        /// Send failed.
        SendError = 55 => "Failed sending data to the peer",
        /// Receive failed.
        RecvError = 56 => "Failure when receiving data from the peer",
        /// Local certificate problem.
        SslCertproblem = 58 => "Problem with the local SSL certificate",
        /// Cipher unusable.
        SslCipher = 59 => "Could not use specified SSL cipher",
        /// Peer verification failed.
        PeerFailedVerification = 60 => "SSL peer certificate or SSH remote key was not OK",
        /// Content encoding not understood.
        BadContentEncoding = 61 => "Unrecognized or bad HTTP Content or Transfer-Encoding",
        /// Size limit exceeded.
        FilesizeExceeded = 63 => "Maximum file size exceeded",
        /// Required TLS level unavailable.
        UseSslFailed = 64 => "Requested SSL level failed",
        /// Rewind for resend failed.
        SendFailRewind = 65 => "Send failed since rewinding of the data stream failed",
        /// Crypto engine init failed.
        SslEngineInitfailed = 66 => "Failed to initialise SSL crypto engine",
        /// Login rejected.
        LoginDenied = 67 => "Login denied",
        /// TFTP file missing.
        TftpNotfound = 68 => "TFTP: File Not Found",
        /// TFTP permission problem.
        TftpPerm = 69 => "TFTP: Access Violation",
        /// Remote disk full.
        RemoteDiskFull = 70 => "Disk full or allocation exceeded",
        /// TFTP illegal operation.
        TftpIllegal = 71 => "TFTP: Illegal operation",
        /// TFTP unknown transfer id.
        TftpUnknownid = 72 => "TFTP: Unknown transfer ID",
        /// Remote file exists.
        RemoteFileExists = 73 => "Remote file already exists",
        /// TFTP no such user.
        TftpNosuchuser = 74 => "TFTP: No such user",
        /// CA bundle problem.
        SslCacertBadfile = 77 => "Problem with the SSL CA cert (path? access rights?)",
        /// Remote file missing.
        RemoteFileNotFound = 78 => "Remote file not found",
        /// SSH layer error.
        Ssh = 79 => "Error in the SSH layer",
        /// TLS shutdown failed.
        SslShutdownFailed = 80 => "Failed to shut down the SSL connection",
        /// Socket not ready; retry.
        Again = 81 => "Socket not ready for send/recv",
        /// CRL file problem.
        SslCrlBadfile = 82 => "Failed to load CRL file (path? access rights?, format?)",
        /// Issuer check failed.
        SslIssuerError = 83 => "Issuer check against peer certificate failed",
        /// FTP PRET rejected.
        FtpPretFailed = 84 => "FTP: The server did not accept the PRET command.",
        /// RTSP CSeq mismatch.
        RtspCseqError = 85 => "RTSP CSeq mismatch or invalid CSeq",
        /// RTSP session mismatch.
        RtspSessionError = 86 => "RTSP session error",
        /// FTP listing unparsable.
        FtpBadFileList = 87 => "Unable to parse FTP file list",
        /// Chunk callback failed.
        ChunkFailed = 88 => "Chunk callback failed",
        /// Connection limit reached.
        NoConnectionAvailable = 89 => "The max connection limit is reached",
        /// Pinned key mismatch.
        SslPinnedpubkeynotmatch = 90 => "SSL public key does not match pinned public key",
        /// Certificate status check failed.
        SslInvalidcertstatus = 91 => "SSL server certificate status verification FAILED",
        /// HTTP/2 stream error.
        Http2Stream = 92 => "Stream error in the HTTP/2 framing layer",
        /// API called from within a callback.
        RecursiveApiCall = 93 => "API function called from within callback",
        /// Authentication function failed.
        AuthError = 94 => "An authentication function returned an error",
        /// HTTP/3 error.
        Http3 = 95 => "HTTP/3 error",
        /// QUIC connect failed.
        QuicConnectError = 96 => "QUIC connection error",
        /// Proxy handshake failed.
        Proxy = 97 => "proxy handshake error",
        /// Client certificate required.
        SslClientcert = 98 => "SSL Client Certificate required",
        /// Poll failed irrecoverably.
        UnrecoverablePoll = 99 => "Unrecoverable error in select/poll",
        /// Value too large.
        TooLarge = 100 => "A value or data field grew larger than allowed",
        /// ECH failed.
        EchRequired = 101 => "ECH attempted but failed",
    }
}

// -----------------------------------------------------------------------------
// Multi-handle manager (-1..12)
// -----------------------------------------------------------------------------
define_code_table! {
    /// Result of a multi-handle manager call.
    pub enum MultiCode: Domain::Multi, ok = 0, last = 13, unknown = "Unknown error" {
        /// Call perform again soon.
        CallMultiPerform = -1 => "Please call curl_multi_perform() soon",
        /// Success.
        Ok = 0 => "No error",
        /// Not a multi handle.
        BadHandle = 1 => "Invalid multi handle",
        /// Not an easy handle.
        BadEasyHandle = 2 => "Invalid easy handle",
        /// Allocation failed.
        OutOfMemory = 3 => "Out of memory",
        /// Internal bug.
        InternalError = 4 => "Internal error",
        /// Unknown socket.
        BadSocket = 5 => "Invalid socket argument",
        /// Unknown option.
        UnknownOption = 6 => "Unknown option",
        /// Easy handle already attached.
        AddedAlready = 7 => "The easy handle is already added to a multi handle",
        /// API called from within a callback.
        RecursiveApiCall = 8 => "API function called from within callback",
        /// Wakeup failed.
        WakeupFailure = 9 => "Wakeup is unavailable or failed",
        /// Bad argument.
        BadFunctionArgument = 10 => "A libcurl function was given a bad argument",
        /// A callback aborted the operation.
        AbortedByCallback = 11 => "Operation was aborted by an application callback",
        /// Poll failed irrecoverably.
        UnrecoverablePoll = 12 => "Unrecoverable error in select/poll",
    }
}

// -----------------------------------------------------------------------------
// Shared-resource handles (0-5)
// -----------------------------------------------------------------------------
define_code_table! {
    /// Result of a shared-resource handle call.
    pub enum ShareCode: Domain::Share, ok = 0, last = 6, unknown = "CURLSHcode unknown" {
        /// Success.
        Ok = 0 => "No error",
        /// Unknown option.
        BadOption = 1 => "Unknown share option",
        /// Handle still attached.
        InUse = 2 => "Share currently in use",
        /// Not a share handle.
        Invalid = 3 => "Invalid share handle",
        /// Allocation failed.
        Nomem = 4 => "Out of memory",
        /// Feature disabled at build time.
        NotBuiltIn = 5 => "Feature not enabled in this library",
    }
}

// -----------------------------------------------------------------------------
// URL parser (0-31)
// -----------------------------------------------------------------------------
define_code_table! {
    /// Result of a URL parser call.
    pub enum UrlCode: Domain::Url, ok = 0, last = 32, unknown = "CURLUcode unknown" {
        /// Success.
        Ok = 0 => "No error",
        /// Bad handle.
        BadHandle = 1 => "An invalid CURLU pointer was passed as argument",
        /// Bad part pointer.
        BadPartpointer = 2 => "An invalid 'part' argument was passed as argument",
        /// Input not parsable.
        MalformedInput = 3 => "Malformed input to a URL function",
        /// Port out of range.
        BadPortNumber = 4 => "Port number was not a decimal number between 0 and 65535",
        /// Scheme not supported.
        UnsupportedScheme = 5 => "Unsupported URL scheme",
        /// Percent-decoding failed.
        Urldecode = 6 => "URL decode error, most likely because of rubbish in the input",
        /// Allocation failed.
        OutOfMemory = 7 => "A memory function failed",
        /// Credentials not allowed.
        UserNotAllowed = 8 => "Credentials was passed in the URL when prohibited",
        /// Unknown part id.
        UnknownPart = 9 => "An unknown part ID was passed to a URL API function",
        /// Scheme missing.
        NoScheme = 10 => "No scheme part in the URL",
        /// User missing.
        NoUser = 11 => "No user part in the URL",
        /// Password missing.
        NoPassword = 12 => "No password part in the URL",
        /// Options missing.
        NoOptions = 13 => "No options part in the URL",
        /// Host missing.
        NoHost = 14 => "No host part in the URL",
        /// Port missing.
        NoPort = 15 => "No port part in the URL",
        /// Query missing.
        NoQuery = 16 => "No query part in the URL",
        /// Fragment missing.
        NoFragment = 17 => "No fragment part in the URL",
        /// Zone id missing.
        NoZoneid = 18 => "No zoneid part in the URL",
        /// Bad file URL.
        BadFileUrl = 19 => "Bad file:// URL",
        /// Bad fragment.
        BadFragment = 20 => "Bad fragment",
        /// Bad host name.
        BadHostname = 21 => "Bad hostname",
        /// Bad IPv6 literal.
        BadIpv6 = 22 => "Bad IPv6 address",
        /// Bad login part.
        BadLogin = 23 => "Bad login part",
        /// Bad password.
        BadPassword = 24 => "Bad password",
        /// Bad path.
        BadPath = 25 => "Bad path",
        /// Bad query.
        BadQuery = 26 => "Bad query",
        /// Bad scheme.
        BadScheme = 27 => "Bad scheme",
        /// Wrong number of slashes.
        BadSlashes = 28 => "Unsupported number of slashes following scheme",
        /// Bad user.
        BadUser = 29 => "Bad user",
        /// IDN support missing.
        LacksIdn = 30 => "libcurl lacks IDN support",
        /// Value too large.
        TooLarge = 31 => "A value or data field is larger than allowed",
    }
}

// ============================================================================
// Raw-integer entry points
// ============================================================================

/// Describe an operation result given as a raw integer.
#[inline]
pub fn easy_strerror(code: i32) -> &'static str {
    describe_code::<CurlCode>(code)
}

/// Describe a multi-handle result given as a raw integer.
#[inline]
pub fn multi_strerror(code: i32) -> &'static str {
    describe_code::<MultiCode>(code)
}

/// Describe a shared-resource result given as a raw integer.
#[inline]
pub fn share_strerror(code: i32) -> &'static str {
    describe_code::<ShareCode>(code)
}

/// Describe a URL parser result given as a raw integer.
#[inline]
pub fn url_strerror(code: i32) -> &'static str {
    describe_code::<UrlCode>(code)
}

// ============================================================================
// Tests
// ============================================================================
