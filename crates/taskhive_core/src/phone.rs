//! crates/taskhive_core/src/phone.rs
//!
//! Region rules for phone-number validation and the signup transform:
//! deriving the numeric calling code from the selected country and
//! reducing the typed number to its national significant digits.

/// Dialing rules for one country offered by the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// ISO 3166-1 alpha-2 country code, upper case.
    pub iso: &'static str,
    /// Numeric country calling code, without a leading `+`.
    pub calling_code: &'static str,
    /// Inclusive bounds on the national significant number's digit count.
    pub min_digits: usize,
    pub max_digits: usize,
}

/// The countries the signup form offers, with their national-number
/// digit-count bounds.
const REGIONS: &[Region] = &[
    Region { iso: "US", calling_code: "1", min_digits: 10, max_digits: 10 },
    Region { iso: "CA", calling_code: "1", min_digits: 10, max_digits: 10 },
    Region { iso: "GB", calling_code: "44", min_digits: 9, max_digits: 10 },
    Region { iso: "IE", calling_code: "353", min_digits: 7, max_digits: 10 },
    Region { iso: "FR", calling_code: "33", min_digits: 9, max_digits: 9 },
    Region { iso: "DE", calling_code: "49", min_digits: 6, max_digits: 11 },
    Region { iso: "ES", calling_code: "34", min_digits: 9, max_digits: 9 },
    Region { iso: "IT", calling_code: "39", min_digits: 8, max_digits: 11 },
    Region { iso: "NL", calling_code: "31", min_digits: 9, max_digits: 9 },
    Region { iso: "SE", calling_code: "46", min_digits: 7, max_digits: 10 },
    Region { iso: "NO", calling_code: "47", min_digits: 8, max_digits: 8 },
    Region { iso: "DK", calling_code: "45", min_digits: 8, max_digits: 8 },
    Region { iso: "CH", calling_code: "41", min_digits: 9, max_digits: 9 },
    Region { iso: "PL", calling_code: "48", min_digits: 9, max_digits: 9 },
    Region { iso: "PT", calling_code: "351", min_digits: 9, max_digits: 9 },
    Region { iso: "TR", calling_code: "90", min_digits: 10, max_digits: 10 },
    Region { iso: "IN", calling_code: "91", min_digits: 10, max_digits: 10 },
    Region { iso: "CN", calling_code: "86", min_digits: 11, max_digits: 11 },
    Region { iso: "JP", calling_code: "81", min_digits: 9, max_digits: 10 },
    Region { iso: "KR", calling_code: "82", min_digits: 8, max_digits: 11 },
    Region { iso: "SG", calling_code: "65", min_digits: 8, max_digits: 8 },
    Region { iso: "AU", calling_code: "61", min_digits: 9, max_digits: 9 },
    Region { iso: "NZ", calling_code: "64", min_digits: 8, max_digits: 10 },
    Region { iso: "AE", calling_code: "971", min_digits: 8, max_digits: 9 },
    Region { iso: "ZA", calling_code: "27", min_digits: 9, max_digits: 9 },
    Region { iso: "NG", calling_code: "234", min_digits: 7, max_digits: 10 },
    Region { iso: "KE", calling_code: "254", min_digits: 9, max_digits: 9 },
    Region { iso: "EG", calling_code: "20", min_digits: 8, max_digits: 10 },
    Region { iso: "BR", calling_code: "55", min_digits: 10, max_digits: 11 },
    Region { iso: "MX", calling_code: "52", min_digits: 10, max_digits: 10 },
];

/// Looks up the dialing rules for an ISO country code (case-insensitive).
#[must_use]
pub fn region(iso: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.iso.eq_ignore_ascii_case(iso))
}

/// The numeric calling code for a country, e.g. `"44"` for `"GB"`.
#[must_use]
pub fn calling_code(iso: &str) -> Option<&'static str> {
    region(iso).map(|r| r.calling_code)
}

/// Reduces a typed phone number to its national significant digits,
/// stripping the separators the form's phone input produces. Returns
/// `None` if anything other than digits and separators is present.
#[must_use]
pub fn national_digits(number: &str) -> Option<String> {
    let mut digits = String::with_capacity(number.len());
    for c in number.chars() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return None,
        }
    }
    if digits.is_empty() {
        return None;
    }
    Some(digits)
}

/// Whether `number` is a plausible national number for the given country.
#[must_use]
pub fn is_valid_national(iso: &str, number: &str) -> bool {
    let Some(region) = region(iso) else {
        return false;
    };
    match national_digits(number) {
        Some(digits) => (region.min_digits..=region.max_digits).contains(&digits.len()),
        None => false,
    }
}
