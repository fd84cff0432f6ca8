//! Phone normalization to Brazilian national format.

/// Toll-free prefix; numbers carrying it are never usable contact phones.
const TOLL_FREE_PREFIX: &str = "0800";
/// Brazil's international country code.
const COUNTRY_CODE: &str = "55";

/// Canonicalizes a raw phone string into `(DD) DDDDD-DDDD` (mobile) or
/// `(DD) DDDD-DDDD` (landline). Returns the empty string when the input
/// is not a usable national number.
///
/// Total over arbitrary input and idempotent on its own output: an
/// already-formatted number re-normalizes to itself.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.starts_with(TOLL_FREE_PREFIX) {
        return String::new();
    }

    // Drop an explicit +55 country code, but only when enough digits
    // remain for a national number — "55 3322-1100" is a valid landline
    // in area code 55, not an international prefix.
    if digits.starts_with(COUNTRY_CODE) && digits.len() > 11 {
        digits.drain(..COUNTRY_CODE.len());
    }

    // Trunk zero before the area code.
    if digits.len() == 11 && digits.starts_with('0') {
        digits.remove(0);
    }

    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "phone_test.rs"]
mod tests;
