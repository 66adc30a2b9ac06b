#![no_main]

use curl_strerror::{Domain, lookup, resolve};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|code: i32| {
    for domain in [Domain::Easy, Domain::Multi, Domain::Share, Domain::Url] {
        let text = lookup(domain, code).unwrap_or_default();
        assert!(!text.is_empty());

        let mut line = String::new();
        let _ = resolve(domain, code).write_to(&mut line);
    }
});
