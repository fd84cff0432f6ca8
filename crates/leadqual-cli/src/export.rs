//! Writes the qualification results back out as a spreadsheet.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use leadqual_core::types::{ClassificationResult, LeadRecord};

/// Writes one row per processed lead, semicolon-separated with a UTF-8
/// BOM. On a cancelled batch `results` is shorter than `leads`; only
/// the processed prefix is written.
pub fn write_results(
    path: &Path,
    leads: &[LeadRecord],
    results: &[ClassificationResult],
) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(b"\xEF\xBB\xBF")?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    writer.write_record([
        "Nome_Completo",
        "Cargo",
        "Nome_Empresa",
        "Numero_Funcionarios",
        "Email_Lead",
        "Cidade_Empresa",
        "Estado_Empresa",
        "Pais_Empresa",
        "Site_Original",
        "Telefone_Original",
        "classificacao_icp",
        "motivo_classificacao",
        "categoria_do_lead",
        "site_descoberto",
        "telefone_descoberto",
        "resumo_descoberto",
    ])?;
    for (lead, result) in leads.iter().zip(results) {
        let (city, state, country) = lead.locality();
        writer.write_record([
            lead.full_name.as_str(),
            lead.role.as_deref().unwrap_or(""),
            lead.company.as_str(),
            lead.employee_count.as_deref().unwrap_or(""),
            lead.email.as_deref().unwrap_or(""),
            city,
            state,
            country,
            lead.website.as_deref().unwrap_or(""),
            lead.phones.first().map_or("", String::as_str),
            result.status.label(),
            result.reason.as_str(),
            result.segment_category.as_str(),
            result.discovered_site.as_deref().unwrap_or(""),
            result.discovered_phone.as_deref().unwrap_or(""),
            result.discovered_summary.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
