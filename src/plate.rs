//! Registration plate format: four digits followed by three consonants.

use std::sync::OnceLock;

use regex::Regex;

/// Shown whenever a plate is rejected.
pub const PLATE_HINT: &str = "4 digits followed by 3 consonants, vowels are not allowed";

fn plate_regex() -> &'static Regex {
    static PLATE: OnceLock<Regex> = OnceLock::new();
    PLATE.get_or_init(|| {
        Regex::new(r"^\d{4}[B-DF-HJ-NP-TV-Zb-df-hj-np-tv-z]{3}$")
            .expect("plate pattern is valid")
    })
}

/// Whether `plate` matches the registration format. Case-insensitive.
pub fn is_valid_plate(plate: &str) -> bool {
    // `\d` is Unicode-aware in the regex crate; plates only take ASCII digits.
    plate.is_ascii() && plate_regex().is_match(plate)
}

/// Trim and uppercase raw input, returning it only when it is a valid plate.
/// Non-ASCII input is rejected before case folding, since Unicode
/// uppercasing can turn one character into several ASCII letters.
pub fn normalize_plate(raw: &str) -> Option<String> {
    let plate = raw.trim();
    if !plate.is_ascii() {
        return None;
    }
    let plate = plate.to_ascii_uppercase();
    is_valid_plate(&plate).then_some(plate)
}
