//! Local qualification rules: role-title membership and employee-count
//! range membership. No I/O; these run before any enrichment.

use std::sync::OnceLock;

use regex::Regex;

fn integer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("static regex"))
}

/// Is the lead's role in the ICP's comma-separated allow-list?
///
/// An empty allow-list accepts every role. A missing or blank lead role
/// with a non-empty allow-list always rejects. Membership is case-folded
/// exact match against the comma-split entries.
#[must_use]
pub fn role_matches(role: Option<&str>, allowed_csv: &str) -> bool {
    if allowed_csv.trim().is_empty() {
        return true;
    }
    let Some(role) = role.map(str::trim).filter(|r| !r.is_empty()) else {
        return false;
    };
    let role = role.to_lowercase();
    allowed_csv
        .split(',')
        .map(|c| c.trim().to_lowercase())
        .any(|c| c == role)
}

/// Parses a free-text employee count: thousands separators stripped, a
/// `k` suffix multiplies by 1000 (so "1.2k" is 1200).
fn parse_employee_count(raw: &str) -> Option<i64> {
    let cleaned = raw.trim().to_lowercase();
    if cleaned.is_empty() {
        return None;
    }
    if let Some(prefix) = cleaned.strip_suffix('k') {
        let value: f64 = prefix.trim().replace(',', ".").parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        return Some((value * 1000.0).round() as i64);
    }
    cleaned.replace(['.', ','], "").parse().ok()
}

/// Does the lead's employee count satisfy the ICP range expression?
///
/// An empty expression accepts every size. An unparsable count rejects.
/// Expression forms, decided by keyword then shape:
/// - "acima"/"maior"/"above"/"greater" — `count > first number`;
/// - "abaixo"/"menor"/"below"/"less" — `count < first number`;
/// - "A-B" with exactly two numbers — inclusive range;
/// - a single bare number — `count >= number`;
/// - anything else (no number, or several numbers in an unrecognized
///   shape) — reject (fail closed).
#[must_use]
pub fn employee_count_matches(count: Option<&str>, range_expr: &str) -> bool {
    let expr = range_expr.trim().to_lowercase();
    if expr.is_empty() {
        return true;
    }
    let Some(count) = count.and_then(parse_employee_count) else {
        return false;
    };

    let numbers: Vec<i64> = integer_re()
        .find_iter(&expr)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    let Some(&first) = numbers.first() else {
        return false;
    };

    if ["acima", "maior", "above", "greater"]
        .iter()
        .any(|kw| expr.contains(kw))
    {
        count > first
    } else if ["abaixo", "menor", "below", "less"]
        .iter()
        .any(|kw| expr.contains(kw))
    {
        count < first
    } else if expr.contains('-') && numbers.len() == 2 {
        numbers[0] <= count && count <= numbers[1]
    } else if numbers.len() == 1 {
        count >= first
    } else {
        // Several numbers in an unrecognized shape: fail closed.
        false
    }
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;
