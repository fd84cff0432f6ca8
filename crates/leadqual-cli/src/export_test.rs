use std::fs;

use leadqual_core::types::{ClassificationResult, LeadRecord, LeadStatus};
use tempfile::NamedTempFile;

use super::write_results;

fn lead(name: &str, company: &str) -> LeadRecord {
    LeadRecord {
        full_name: name.to_string(),
        company: company.to_string(),
        company_city: Some("Campinas".to_string()),
        company_state: Some("São Paulo".to_string()),
        company_country: Some("Brasil".to_string()),
        ..LeadRecord::default()
    }
}

#[test]
fn writes_status_labels_and_enrichment_columns() {
    let leads = vec![lead("Ana Souza", "Acme"), lead("Bruno Lima", "Beta")];
    let results = vec![
        ClassificationResult {
            status: LeadStatus::Qualified,
            reason: "segment confirmed".to_string(),
            segment_category: "Industria".to_string(),
            discovered_site: Some("https://acme.com.br".to_string()),
            discovered_phone: Some("(19) 3222-1000".to_string()),
            discovered_summary: None,
        },
        ClassificationResult::bare(LeadStatus::RejectedLocal, "locality outside the ICP rules"),
    ];
    let out = NamedTempFile::new().unwrap();
    write_results(out.path(), &leads, &results).unwrap();

    let bytes = fs::read(out.path()).unwrap();
    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(
        "classificacao_icp;motivo_classificacao;categoria_do_lead;\
         site_descoberto;telefone_descoberto;resumo_descoberto"
    ));
    assert!(lines[1].contains("Dentro do ICP"));
    assert!(lines[1].contains("Industria"));
    assert!(lines[1].contains("https://acme.com.br"));
    assert!(lines[2].contains("Fora do ICP"));
    assert!(lines[2].contains("locality outside the ICP rules"));
}

#[test]
fn cancelled_batch_writes_only_the_processed_prefix() {
    let leads = vec![lead("Ana Souza", "Acme"), lead("Bruno Lima", "Beta")];
    let results = vec![ClassificationResult::bare(
        LeadStatus::Qualified,
        "segment confirmed",
    )];
    let out = NamedTempFile::new().unwrap();
    write_results(out.path(), &leads, &results).unwrap();

    let bytes = fs::read(out.path()).unwrap();
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(!text.contains("Bruno Lima"));
}
