use super::*;

#[test]
fn normalizes_mobile_with_country_code() {
    assert_eq!(normalize_phone("+55 11 98888-7777"), "(11) 98888-7777");
}

#[test]
fn normalizes_bare_mobile() {
    assert_eq!(normalize_phone("11988887777"), "(11) 98888-7777");
}

#[test]
fn normalizes_landline() {
    assert_eq!(normalize_phone("(21) 3322-1100"), "(21) 3322-1100");
}

#[test]
fn rejects_toll_free() {
    assert_eq!(normalize_phone("0800 123 4567"), "");
}

#[test]
fn rejects_empty() {
    assert_eq!(normalize_phone(""), "");
}

#[test]
fn rejects_non_numeric() {
    assert_eq!(normalize_phone("call me maybe"), "");
}

#[test]
fn rejects_too_short() {
    assert_eq!(normalize_phone("3322-1100"), "");
}

#[test]
fn rejects_international_non_brazilian() {
    // 15 digits, no 55 prefix: nothing to strip, wrong length.
    assert_eq!(normalize_phone("+44 20 7946 0958 123"), "");
}

#[test]
fn drops_trunk_zero() {
    assert_eq!(normalize_phone("021 3322-1100"), "(21) 3322-1100");
}

#[test]
fn area_code_55_is_not_treated_as_country_code() {
    // Santa Maria (RS) landline: area code 55, exactly 10 digits.
    assert_eq!(normalize_phone("55 3322-1100"), "(55) 3322-1100");
}

#[test]
fn idempotent_on_formatted_output() {
    for raw in ["+55 11 98888-7777", "11988887777", "(21) 3322-1100"] {
        let once = normalize_phone(raw);
        assert_eq!(normalize_phone(&once), once, "not idempotent for {raw}");
    }
}

#[test]
fn total_over_garbage_input() {
    for raw in ["++++", "abc123", "5", "\u{1f4de}", "  ", "12345678901234567890"] {
        let out = normalize_phone(raw);
        // Either rejected outright or in national format.
        assert!(out.is_empty() || out.contains(") "), "unexpected: {out}");
    }
}
