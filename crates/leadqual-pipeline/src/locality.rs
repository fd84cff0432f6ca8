//! Locality matching against ICP locality rules.
//!
//! A rule is one of: a Brazilian macro-region name ("Sudeste"), a
//! comma-joined set of location tokens ("Campinas, SP, Brasil"), or the
//! country-wide sentinel ("Brasil inteiro"). Matching is OR across rules
//! and AND across the tokens of one rule; one semantics applies to every
//! non-region rule shape, single-token rules included, with country
//! tokens participating exactly like city and state tokens.

/// Brazilian states: (code, full name).
const STATES: &[(&str, &str)] = &[
    ("AC", "Acre"),
    ("AL", "Alagoas"),
    ("AP", "Amapá"),
    ("AM", "Amazonas"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("DF", "Distrito Federal"),
    ("ES", "Espírito Santo"),
    ("GO", "Goiás"),
    ("MA", "Maranhão"),
    ("MT", "Mato Grosso"),
    ("MS", "Mato Grosso do Sul"),
    ("MG", "Minas Gerais"),
    ("PA", "Pará"),
    ("PB", "Paraíba"),
    ("PR", "Paraná"),
    ("PE", "Pernambuco"),
    ("PI", "Piauí"),
    ("RJ", "Rio de Janeiro"),
    ("RN", "Rio Grande do Norte"),
    ("RS", "Rio Grande do Sul"),
    ("RO", "Rondônia"),
    ("RR", "Roraima"),
    ("SC", "Santa Catarina"),
    ("SP", "São Paulo"),
    ("SE", "Sergipe"),
    ("TO", "Tocantins"),
];

/// Macro-regions keyed by normalized name, each a fixed set of state codes.
const REGIONS: &[(&str, &[&str])] = &[
    ("norte", &["AC", "AP", "AM", "PA", "RO", "RR", "TO"]),
    (
        "nordeste",
        &["AL", "BA", "CE", "MA", "PB", "PE", "PI", "RN", "SE"],
    ),
    ("centro-oeste", &["DF", "GO", "MT", "MS"]),
    ("sudeste", &["ES", "MG", "RJ", "SP"]),
    ("sul", &["PR", "RS", "SC"]),
];

/// Rule values that allow every locality.
const COUNTRY_WIDE_SENTINELS: &[&str] = &["brasil inteiro", "todo o brasil"];

/// Case-folds, strips diacritics, trims, and drops an Apollo-style
/// "State of " prefix. The comparison form for every locality value.
#[must_use]
pub fn normalize_text(value: &str) -> String {
    let folded: String = value
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect();
    folded
        .strip_prefix("state of ")
        .unwrap_or(&folded)
        .trim()
        .to_string()
}

/// Maps the accented characters that occur in Brazilian place names to
/// their ASCII base.
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        other => other,
    }
}

/// Canonical country form: collapses the common spellings of Brazil.
fn canonical_country(normalized: &str) -> &str {
    match normalized {
        "br" | "bra" | "brazil" => "brasil",
        other => other,
    }
}

fn is_country_wide(normalized_rule: &str) -> bool {
    COUNTRY_WIDE_SENTINELS.contains(&normalized_rule)
}

/// State codes of the macro-region named by `normalized_rule`, if any.
fn region_states(normalized_rule: &str) -> Option<&'static [&'static str]> {
    let key = normalized_rule.replace(' ', "-");
    REGIONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, codes)| *codes)
}

/// Resolves a lead's state field (code or full name, any casing) to a
/// state code.
fn state_code(normalized_state: &str) -> Option<&'static str> {
    STATES
        .iter()
        .find(|(code, name)| {
            code.to_ascii_lowercase() == normalized_state
                || normalize_text(name) == normalized_state
        })
        .map(|(code, _)| *code)
}

/// Expands a state code or loosely-spelled state name to the official
/// full name ("sp" or "Sao Paulo" to "São Paulo").
#[must_use]
pub fn state_full_name(value: &str) -> Option<&'static str> {
    let normalized = normalize_text(value);
    state_code(&normalized)
        .and_then(|code| STATES.iter().find(|(c, _)| *c == code))
        .map(|(_, name)| *name)
}

/// Does the lead's city/state/country satisfy any of the ICP locality
/// rules?
///
/// An empty rule set, or one consisting solely of the country-wide
/// sentinel, matches unconditionally. A region rule matches when the
/// lead's state belongs to the region. Any other rule is a comma-joined
/// token set and matches when every token is found among the lead's
/// city, state (code or full name), and country.
#[must_use]
pub fn locality_matches(city: &str, state: &str, country: &str, rules: &[String]) -> bool {
    let active: Vec<String> = rules
        .iter()
        .map(|r| normalize_text(r))
        .filter(|r| !r.is_empty())
        .collect();

    if active.is_empty() || active.iter().all(|r| is_country_wide(r)) {
        return true;
    }

    let candidates = lead_candidates(city, state, country);
    active.iter().any(|rule| rule_matches(rule, &candidates))
}

fn rule_matches(rule: &str, candidates: &[String]) -> bool {
    if is_country_wide(rule) {
        return true;
    }
    if let Some(codes) = region_states(rule) {
        return candidates
            .iter()
            .any(|c| codes.iter().any(|code| code.to_ascii_lowercase() == *c));
    }
    rule.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .all(|token| {
            let token = canonical_country(&normalize_text(token)).to_string();
            candidates.contains(&token)
        })
}

/// The normalized comparison set for a lead: city, state code, state full
/// name, and canonical country.
fn lead_candidates(city: &str, state: &str, country: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    let city = normalize_text(city);
    if !city.is_empty() {
        candidates.push(city);
    }

    let state_norm = normalize_text(state);
    if !state_norm.is_empty() {
        if let Some(code) = state_code(&state_norm) {
            candidates.push(code.to_ascii_lowercase());
            if let Some((_, name)) = STATES.iter().find(|(c, _)| *c == code) {
                candidates.push(normalize_text(name));
            }
        } else {
            candidates.push(state_norm);
        }
    }

    let country = canonical_country(&normalize_text(country)).to_string();
    if !country.is_empty() {
        candidates.push(country);
    }

    candidates
}

#[cfg(test)]
#[path = "locality_test.rs"]
mod tests;
