use std::sync::atomic::Ordering;

use leadqual_core::{LeadRecord, Subject};

use crate::testing::{Answer, ScriptedClassifier};

use super::*;

fn lead_with_site(site: Option<&str>) -> LeadRecord {
    LeadRecord {
        company: "Acme Sistemas".to_string(),
        company_city: Some("Campinas".to_string()),
        company_state: Some("SP".to_string()),
        website: site.map(ToString::to_string),
        ..LeadRecord::default()
    }
}

// -----------------------------------------------------------------------
// resolve_subject
// -----------------------------------------------------------------------

#[tokio::test]
async fn stage_one_uses_lead_website_without_any_call() {
    let classifier = ScriptedClassifier::all_not_found();
    let lead = lead_with_site(Some("www.acme.com.br"));
    let resolution = resolve_subject(&lead, &classifier).await.unwrap();
    match resolution {
        Resolution::Resolved {
            subject,
            discovered_site,
            attempts,
        } => {
            assert_eq!(subject, Subject::Url("https://www.acme.com.br".to_string()));
            assert_eq!(discovered_site, None);
            assert_eq!(attempts.len(), 1);
            assert_eq!(attempts[0].stage, EnrichmentStage::LeadWebsite);
        }
        Resolution::Unresolved { .. } => panic!("expected resolved"),
    }
    assert_eq!(classifier.discover_calls.load(Ordering::SeqCst), 0);
    assert_eq!(classifier.presence_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn stage_one_keeps_existing_scheme() {
    let classifier = ScriptedClassifier::all_not_found();
    let lead = lead_with_site(Some("http://acme.com.br"));
    let resolution = resolve_subject(&lead, &classifier).await.unwrap();
    let Resolution::Resolved { subject, .. } = resolution else {
        panic!("expected resolved");
    };
    assert_eq!(subject, Subject::Url("http://acme.com.br".to_string()));
}

#[tokio::test]
async fn stage_two_accepts_domain_like_answer() {
    let mut classifier = ScriptedClassifier::all_not_found();
    classifier.discover = Answer::text("acme.com.br");
    let lead = lead_with_site(None);
    let resolution = resolve_subject(&lead, &classifier).await.unwrap();
    let Resolution::Resolved {
        subject,
        discovered_site,
        attempts,
    } = resolution
    else {
        panic!("expected resolved");
    };
    assert_eq!(subject, Subject::Url("https://acme.com.br".to_string()));
    assert_eq!(discovered_site.as_deref(), Some("acme.com.br"));
    assert_eq!(attempts.len(), 2);
    assert!(!attempts[0].accepted);
    assert!(attempts[1].accepted);
    assert_eq!(classifier.presence_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn stage_two_rejects_sentinel_and_prose() {
    for bad in [
        "NAO_ENCONTRADO",
        "the site is probably acme.com.br",
        "no dot-here",
    ] {
        let mut classifier = ScriptedClassifier::all_not_found();
        classifier.discover = Answer::text(bad);
        let lead = lead_with_site(None);
        let resolution = resolve_subject(&lead, &classifier).await.unwrap();
        assert!(
            matches!(resolution, Resolution::Unresolved { .. }),
            "accepted bad answer: {bad}"
        );
    }
}

#[tokio::test]
async fn stage_three_accepts_active_summary() {
    let mut classifier = ScriptedClassifier::all_not_found();
    classifier.presence = Answer::text(
        r#"{"summary": "Distribuidora de autopecas em Campinas.", "active": true}"#,
    );
    let lead = lead_with_site(None);
    let resolution = resolve_subject(&lead, &classifier).await.unwrap();
    let Resolution::Resolved { subject, .. } = resolution else {
        panic!("expected resolved");
    };
    assert_eq!(
        subject,
        Subject::Summary("Distribuidora de autopecas em Campinas.".to_string())
    );
}

#[tokio::test]
async fn stage_three_rejects_inactive_company() {
    let mut classifier = ScriptedClassifier::all_not_found();
    classifier.presence =
        Answer::text(r#"{"summary": "Empresa aparentemente encerrada.", "active": false}"#);
    let lead = lead_with_site(None);
    let resolution = resolve_subject(&lead, &classifier).await.unwrap();
    assert!(matches!(resolution, Resolution::Unresolved { .. }));
}

#[tokio::test]
async fn unresolved_records_every_attempt() {
    let classifier = ScriptedClassifier::all_not_found();
    let lead = lead_with_site(None);
    let Resolution::Unresolved { attempts } = resolve_subject(&lead, &classifier).await.unwrap()
    else {
        panic!("expected unresolved");
    };
    let stages: Vec<_> = attempts.iter().map(|a| a.stage).collect();
    assert_eq!(
        stages,
        vec![
            EnrichmentStage::LeadWebsite,
            EnrichmentStage::WebsiteDiscovery,
            EnrichmentStage::PresenceLookup,
        ]
    );
    assert!(attempts.iter().all(|a| !a.accepted));
}

#[tokio::test]
async fn transport_failure_propagates() {
    let mut classifier = ScriptedClassifier::all_not_found();
    classifier.discover = Answer::Timeout;
    let lead = lead_with_site(None);
    let result = resolve_subject(&lead, &classifier).await;
    assert!(result.is_err());
}

// -----------------------------------------------------------------------
// resolve_phone
// -----------------------------------------------------------------------

#[tokio::test]
async fn analysis_phone_wins_over_lookup() {
    let classifier = ScriptedClassifier::all_not_found();
    let lead = lead_with_site(None);
    let phone = resolve_phone(&lead, Some("+55 11 98888-7777"), &classifier).await;
    assert_eq!(phone.as_deref(), Some("(11) 98888-7777"));
    assert_eq!(classifier.phone_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn lookup_runs_when_analysis_found_nothing() {
    let mut classifier = ScriptedClassifier::all_not_found();
    classifier.phone = Answer::text("(19) 3255-0100");
    let lead = lead_with_site(None);
    let phone = resolve_phone(&lead, None, &classifier).await;
    assert_eq!(phone.as_deref(), Some("(19) 3255-0100"));
    assert_eq!(classifier.phone_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn sentinel_answer_yields_none() {
    let classifier = ScriptedClassifier::all_not_found();
    let lead = lead_with_site(None);
    assert_eq!(resolve_phone(&lead, None, &classifier).await, None);
}

#[tokio::test]
async fn digitless_candidate_is_dropped() {
    let classifier = ScriptedClassifier::all_not_found();
    let lead = lead_with_site(None);
    let phone = resolve_phone(&lead, Some("call reception"), &classifier).await;
    // Falls through to the lookup, which answers the sentinel.
    assert_eq!(phone, None);
}

#[tokio::test]
async fn unnormalizable_candidate_is_kept_raw() {
    let classifier = ScriptedClassifier::all_not_found();
    let lead = lead_with_site(None);
    let phone = resolve_phone(&lead, Some("+44 20 7946 0958"), &classifier).await;
    assert_eq!(phone.as_deref(), Some("+44 20 7946 0958"));
}

#[tokio::test]
async fn lookup_failure_degrades_to_none() {
    let mut classifier = ScriptedClassifier::all_not_found();
    classifier.phone = Answer::Network("connection reset".to_string());
    let lead = lead_with_site(None);
    assert_eq!(resolve_phone(&lead, None, &classifier).await, None);
}
