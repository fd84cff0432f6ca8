use super::*;

// -----------------------------------------------------------------------
// role_matches
// -----------------------------------------------------------------------

#[test]
fn empty_allow_list_accepts_any_role() {
    assert!(role_matches(Some("CTO"), ""));
    assert!(role_matches(None, "   "));
}

#[test]
fn role_membership_is_case_folded() {
    assert!(role_matches(Some("diretor comercial"), "CEO, Diretor Comercial, CTO"));
}

#[test]
fn role_outside_allow_list_rejects() {
    assert!(!role_matches(Some("Estagiário"), "CEO, CTO"));
}

#[test]
fn absent_role_with_allow_list_rejects() {
    assert!(!role_matches(None, "CEO"));
    assert!(!role_matches(Some("  "), "CEO"));
}

#[test]
fn role_match_is_exact_not_substring() {
    assert!(!role_matches(Some("CEO Assistant"), "CEO"));
}

// -----------------------------------------------------------------------
// employee_count_matches
// -----------------------------------------------------------------------

#[test]
fn empty_range_accepts_any_count() {
    assert!(employee_count_matches(Some("7"), ""));
    assert!(employee_count_matches(None, ""));
}

#[test]
fn above_keyword_is_strict() {
    assert!(employee_count_matches(Some("51"), "acima de 50"));
    assert!(!employee_count_matches(Some("50"), "acima de 50"));
    assert!(employee_count_matches(Some("600"), "above 500"));
}

#[test]
fn below_keyword_is_strict() {
    assert!(employee_count_matches(Some("19"), "abaixo de 20"));
    assert!(!employee_count_matches(Some("20"), "menor que 20"));
}

#[test]
fn literal_range_is_inclusive() {
    assert!(employee_count_matches(Some("100"), "100-500"));
    assert!(employee_count_matches(Some("500"), "100-500"));
    assert!(!employee_count_matches(Some("501"), "100-500"));
}

#[test]
fn bare_number_means_at_least() {
    assert!(employee_count_matches(Some("200"), "200"));
    assert!(!employee_count_matches(Some("199"), "200"));
}

#[test]
fn k_suffix_scales_by_thousand() {
    assert!(employee_count_matches(Some("1.2k"), "above 500"));
    assert!(employee_count_matches(Some("2k"), "1000-5000"));
}

#[test]
fn thousands_separators_are_stripped() {
    assert!(employee_count_matches(Some("1.200"), "above 500"));
    assert!(employee_count_matches(Some("10,000"), "acima de 5000"));
}

#[test]
fn unparsable_count_rejects() {
    assert!(!employee_count_matches(Some("muitos"), "above 10"));
    assert!(!employee_count_matches(None, "above 10"));
}

#[test]
fn expression_without_numbers_fails_closed() {
    assert!(!employee_count_matches(Some("100"), "qualquer porte"));
    assert!(!employee_count_matches(Some("100"), "acima de muitos"));
}

#[test]
fn unrecognized_multi_number_expression_fails_closed() {
    assert!(!employee_count_matches(Some("5000"), "10-20-30"));
    assert!(!employee_count_matches(Some("5000"), "entre 10 e 20"));
    assert!(!employee_count_matches(Some("15"), "entre 10 e 20"));
}
