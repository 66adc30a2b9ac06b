#![no_main]

use curl_strerror::{MessageBuf, NativeErrors, NumberingStyle, strerror_with};
use libfuzzer_sys::fuzz_target;

/// Replays fuzzer bytes as the native message.
struct Replay<'a> {
    style: NumberingStyle,
    bytes: &'a [u8],
}

impl NativeErrors for Replay<'_> {
    fn style(&self) -> NumberingStyle {
        self.style
    }

    fn errno_message(&self, _code: i32, out: &mut MessageBuf<'_>) -> bool {
        out.push_bytes_lossy(self.bytes);
        true
    }

    fn api_message(&self, _code: u32, out: &mut MessageBuf<'_>) -> bool {
        out.push_bytes_lossy(self.bytes);
        true
    }
}

fuzz_target!(|input: (u16, u8, bool, &[u8])| {
    let (code, capacity, windows, bytes) = input;
    let style = if windows { NumberingStyle::Windows } else { NumberingStyle::Posix };
    let native = Replay { style, bytes };

    let len = capacity as usize;
    let mut buf = vec![0u8; len];
    match strerror_with(&native, i32::from(code), &mut buf) {
        Some(text) => assert!(text.len() < len),
        None => assert!(capacity == 0),
    }
});
