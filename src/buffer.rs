//! Bounded output buffers.
//!
//! [`MessageBuf`] wraps a caller-supplied byte slice and behaves like a
//! bounded `snprintf` target:
//!
//! - one byte is always reserved for the terminating NUL
//! - `buf[len]` is NUL after every write
//! - writes past capacity are cut at a UTF-8 boundary, never overrun
//! - once cut, further writes are ignored
//!
//! [`Message`] is an owned 256-byte inline buffer for callers that do not
//! want to manage storage.
//!
//! ```rust
//! use curl_strerror::MessageBuf;
//! use std::fmt::Write;
//!
//! let mut storage = [0u8; 8];
//! let mut out = MessageBuf::new(&mut storage).unwrap();
//! write!(out, "{}", "overflowing").unwrap();
//! assert_eq!(out.as_str(), "overflo");
//! assert!(out.is_truncated());
//! ```

use smallvec::SmallVec;
use std::fmt;
use zeroize::Zeroize;

/// Capacity of an owned [`Message`], terminator included.
pub const MESSAGE_CAPACITY: usize = 256;

// ============================================================================
// Borrowed Buffer
// ============================================================================

/// Bounded, NUL-terminated view over a caller buffer.
#[derive(Debug)]
pub struct MessageBuf<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl<'a> MessageBuf<'a> {
    /// Wrap `buf`, writing the terminator at position 0.
    ///
    /// Returns `None` for a zero-length buffer; nothing is written then.
    pub fn new(buf: &'a mut [u8]) -> Option<Self> {
        let first = buf.first_mut()?;
        *first = 0;
        Some(Self {
            buf,
            len: 0,
            truncated: false,
        })
    }

    /// Number of text bytes this buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len() - 1
    }

    /// Number of text bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a write was cut short.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Current contents.
    #[inline]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    /// Give up the wrapper and keep the text borrowed for the buffer's lifetime.
    pub fn into_str(self) -> &'a str {
        let Self { buf, len, .. } = self;
        let bytes: &'a [u8] = buf;
        std::str::from_utf8(&bytes[..len]).unwrap_or_default()
    }

    /// Append `s`, truncating at a char boundary when it does not fit.
    pub fn push_str(&mut self, s: &str) {
        if self.truncated {
            return;
        }

        let room = self.capacity() - self.len;
        let take = if s.len() <= room {
            s.len()
        } else {
            self.truncated = true;
            let mut idx = room;
            while idx > 0 && !s.is_char_boundary(idx) {
                idx -= 1;
            }
            idx
        };

        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        self.buf[self.len] = 0;
    }

    /// Append native bytes, replacing invalid UTF-8 with U+FFFD.
    pub fn push_bytes_lossy(&mut self, bytes: &[u8]) {
        for chunk in bytes.utf8_chunks() {
            self.push_str(chunk.valid());
            if !chunk.invalid().is_empty() {
                self.push_str(char::REPLACEMENT_CHARACTER.encode_utf8(&mut [0; 4]));
            }
        }
    }

    /// Replace the contents with `s` only if it fits whole.
    ///
    /// Returns `false` and leaves the buffer empty otherwise.
    pub fn try_copy(&mut self, s: &str) -> bool {
        self.reset();
        if s.len() < self.buf.len() {
            self.push_str(s);
            true
        } else {
            false
        }
    }

    /// Wipe everything written so far and start over.
    pub fn reset(&mut self) {
        self.buf[..self.len].zeroize();
        self.buf[0] = 0;
        self.len = 0;
        self.truncated = false;
    }

    /// Drop one trailing `"\n"` and then one trailing `"\r"`.
    ///
    /// A `"\n"` is only removed at index 2 or later and a `"\r"` only at
    /// index 1 or later, so `"\n"`, `"\r"` and `"x\n"` stay as they are.
    pub fn strip_line_ending(&mut self) {
        if self.len >= 3 && self.buf[self.len - 1] == b'\n' {
            self.len -= 1;
            self.buf[self.len] = 0;
        }
        if self.len >= 2 && self.buf[self.len - 1] == b'\r' {
            self.len -= 1;
            self.buf[self.len] = 0;
        }
    }
}

impl fmt::Write for MessageBuf<'_> {
    /// Never fails; overflow is recorded in [`MessageBuf::is_truncated`].
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

// ============================================================================
// Owned Buffer
// ============================================================================

/// Owned rendered message stored inline.
///
/// Produced by [`system_message`](crate::system_message) and used as
/// scratch space for native enrichment text.
#[derive(Clone)]
pub struct Message {
    bytes: SmallVec<[u8; MESSAGE_CAPACITY]>,
}

impl Message {
    /// An empty message.
    pub fn new() -> Self {
        Self {
            bytes: SmallVec::from_buf([0; MESSAGE_CAPACITY]),
        }
    }

    /// Raw storage, suitable for any buffer-taking translator.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Text up to the first NUL.
    pub fn as_str(&self) -> &str {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.bytes.len());
        std::str::from_utf8(&self.bytes[..end]).unwrap_or_default()
    }

    /// Length of the text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Whether the message holds no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.first().is_none_or(|&b| b == 0)
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Message").field(&self.as_str()).finish()
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Message {}

impl PartialEq<&str> for Message {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    #[test]
    fn zero_length_buffer_is_unavailable() {
        let mut storage: [u8; 0] = [];
        assert!(MessageBuf::new(&mut storage).is_none());
    }

    #[test]
    fn one_byte_buffer_holds_only_terminator() {
        let mut storage = [0xAAu8; 1];
        let mut out = MessageBuf::new(&mut storage).unwrap();
        out.push_str("abc");
        assert_eq!(out.as_str(), "");
        assert!(out.is_truncated());
        drop(out);
        assert_eq!(storage, [0]);
    }

    #[test]
    fn terminator_follows_text() {
        let mut storage = [0xAAu8; 16];
        let mut out = MessageBuf::new(&mut storage).unwrap();
        write!(out, "err {}", 42).unwrap();
        assert_eq!(out.len(), 6);
        drop(out);
        assert_eq!(&storage[..7], b"err 42\0");
        assert_eq!(storage[7], 0xAA);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let mut storage = [0u8; 5];
        let mut out = MessageBuf::new(&mut storage).unwrap();
        out.push_str("aéé");
        // 'a' + 'é' = 3 bytes, the next 'é' would need 5
        assert_eq!(out.as_str(), "aé");
        assert!(out.is_truncated());
        out.push_str("b");
        assert_eq!(out.as_str(), "aé");
    }

    #[test]
    fn lossy_bytes_are_replaced() {
        let mut storage = [0u8; 32];
        let mut out = MessageBuf::new(&mut storage).unwrap();
        out.push_bytes_lossy(b"ok\xFFdone");
        assert_eq!(out.as_str(), "ok\u{FFFD}done");
    }

    #[test]
    fn try_copy_refuses_to_truncate() {
        let mut storage = [0u8; 5];
        let mut out = MessageBuf::new(&mut storage).unwrap();
        assert!(out.try_copy("four"));
        assert_eq!(out.as_str(), "four");
        assert!(!out.try_copy("fives"));
        assert_eq!(out.as_str(), "");
    }

    #[test]
    fn reset_wipes_previous_bytes() {
        let mut storage = [0u8; 8];
        let mut out = MessageBuf::new(&mut storage).unwrap();
        out.push_str("secret");
        out.reset();
        assert!(out.is_empty());
        drop(out);
        assert_eq!(storage, [0u8; 8]);
    }

    fn stripped(s: &str) -> String {
        let mut storage = [0u8; 64];
        let mut out = MessageBuf::new(&mut storage).unwrap();
        out.push_str(s);
        out.strip_line_ending();
        out.as_str().to_owned()
    }

    #[test]
    fn strips_crlf_and_lf() {
        assert_eq!(stripped("text\r\n"), "text");
        assert_eq!(stripped("text\n"), "text");
        assert_eq!(stripped("text\r"), "text");
        assert_eq!(stripped("text"), "text");
    }

    #[test]
    fn strip_guard_keeps_short_inputs() {
        assert_eq!(stripped("\n"), "\n");
        assert_eq!(stripped("\r"), "\r");
        assert_eq!(stripped("x\n"), "x\n");
        assert_eq!(stripped("\r\n"), "\r\n");
        assert_eq!(stripped("xy\n"), "xy");
        assert_eq!(stripped("x\r"), "x");
    }

    #[test]
    fn only_one_of_each_is_stripped() {
        assert_eq!(stripped("text\n\n"), "text\n");
        assert_eq!(stripped("text\r\r\n"), "text\r");
    }

    #[test]
    fn owned_message_reads_up_to_terminator() {
        let mut msg = Message::new();
        assert!(msg.is_empty());
        {
            let mut out = MessageBuf::new(msg.as_mut_bytes()).unwrap();
            out.push_str("Connection refused");
        }
        assert_eq!(msg, "Connection refused");
        assert_eq!(msg.len(), 18);
        assert_eq!(msg.to_string(), "Connection refused");
    }

    #[test]
    fn owned_message_capacity() {
        let mut msg = Message::new();
        let long = "x".repeat(MESSAGE_CAPACITY * 2);
        {
            let mut out = MessageBuf::new(msg.as_mut_bytes()).unwrap();
            out.push_str(&long);
            assert_eq!(out.capacity(), MESSAGE_CAPACITY - 1);
        }
        assert_eq!(msg.len(), MESSAGE_CAPACITY - 1);
    }
}
