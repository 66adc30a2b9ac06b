//! Localization hook, run as its own test binary so the process-wide
//! localizer does not leak into other suites.

#![cfg(feature = "localize")]

use curl_strerror::locale::{install_localizer, localizer_installed, tr, LocalizerAlreadySet};
use curl_strerror::{easy_strerror, strerror_with, MessageBuf, NativeErrors, NumberingStyle};

fn german(literal: &'static str) -> &'static str {
    match literal {
        "No error" => "Kein Fehler",
        "Error" => "Fehler",
        "Unknown error" => "Unbekannter Fehler",
        "Unknown error {}" => "Unbekannter Fehler {}",
        "Unknown error {} ({})" => "Fehler {1} ist unbekannt (Nummer {0})",
        "Timeout was reached" => "Zeitüberschreitung",
        other => other,
    }
}

fn klingon(literal: &'static str) -> &'static str {
    literal
}

struct Quiet(NumberingStyle);

impl NativeErrors for Quiet {
    fn style(&self) -> NumberingStyle {
        self.0
    }

    fn errno_message(&self, _code: i32, _out: &mut MessageBuf<'_>) -> bool {
        false
    }
}

// One test: the localizer is process-wide and set once.
#[test]
fn localizer_applies_to_every_literal() {
    assert!(!localizer_installed());
    assert_eq!(tr("No error"), "No error");

    install_localizer(german).unwrap();
    assert!(localizer_installed());
    assert_eq!(install_localizer(klingon), Err(LocalizerAlreadySet));

    assert_eq!(easy_strerror(0), "Kein Fehler");
    assert_eq!(tr("Bad path"), "Bad path");

    #[cfg(feature = "verbose_strings")]
    {
        assert_eq!(easy_strerror(28), "Zeitüberschreitung");
        assert_eq!(easy_strerror(34), "Unbekannter Fehler");
    }
    #[cfg(not(feature = "verbose_strings"))]
    assert_eq!(easy_strerror(28), "Fehler");

    let mut buf = [0u8; 64];
    assert_eq!(
        strerror_with(&Quiet(NumberingStyle::Posix), 7, &mut buf),
        Some("Unbekannter Fehler 7")
    );
    assert_eq!(
        strerror_with(&Quiet(NumberingStyle::Windows), 99_999, &mut buf),
        Some("Fehler 0x1869f ist unbekannt (Nummer 99999)")
    );
}
