//! Best-effort CSV ingestion.
//!
//! Lead exports arrive with either `;` or `,` separators and with
//! column names from the exporter (Apollo-style English headers) or
//! from a previous cleaning pass (Portuguese snake_case). Column-name
//! mapping is best effort by design; unknown columns are ignored.

use std::path::Path;

use anyhow::Context;
use leadqual_core::{IcpCriteria, LeadRecord};

/// Reads a whole CSV file, stripping a UTF-8 BOM when present and
/// falling back from `;` to `,` when the first separator yields a
/// single column.
fn read_records(path: &Path) -> anyhow::Result<(Vec<String>, Vec<Vec<String>>)> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let parse = |delimiter: u8| -> anyhow::Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(text.as_bytes());
        let headers: Vec<String> = reader
            .headers()
            .context("reading CSV headers")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("reading CSV record")?;
            rows.push(record.iter().map(|f| f.trim().to_string()).collect());
        }
        Ok((headers, rows))
    };

    let (headers, rows) = parse(b';')?;
    if headers.len() > 1 {
        return Ok((headers, rows));
    }
    parse(b',')
}

/// Column aliases, normalized to lowercase: exporter names and cleaned
/// Portuguese names map to the same field.
fn header_index(headers: &[String], aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| aliases.contains(&h.to_lowercase().as_str()))
}

fn field(row: &[String], index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| row.get(i))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Reads leads from a raw or cleaned export.
///
/// # Errors
///
/// Fails only on unreadable files or malformed CSV structure; missing
/// columns leave the corresponding fields empty.
pub fn read_leads(path: &Path) -> anyhow::Result<Vec<LeadRecord>> {
    let (headers, rows) = read_records(path)?;

    let full_name = header_index(&headers, &["nome_completo", "full name"]);
    let first_name = header_index(&headers, &["first name", "nome_lead"]);
    let last_name = header_index(&headers, &["last name", "sobrenome_lead"]);
    let role = header_index(&headers, &["title", "cargo"]);
    let company = header_index(&headers, &["company", "nome_empresa"]);
    let employees = header_index(&headers, &["employees", "# employees", "numero_funcionarios"]);
    let email = header_index(&headers, &["email", "email_lead"]);
    let contact_city = header_index(&headers, &["city", "cidade_contato"]);
    let contact_state = header_index(&headers, &["state", "estado_contato"]);
    let contact_country = header_index(&headers, &["country", "pais_contato"]);
    let company_city = header_index(&headers, &["company city", "cidade_empresa"]);
    let company_state = header_index(&headers, &["company state", "estado_empresa"]);
    let company_country = header_index(&headers, &["company country", "pais_empresa"]);
    let website = header_index(&headers, &["website", "site_original"]);
    let phone_columns: Vec<usize> =
        ["phone", "corporate phone", "mobile phone", "telefone_original"]
            .into_iter()
            .filter_map(|alias| header_index(&headers, &[alias]))
            .collect();
    let linkedin_contact = header_index(&headers, &["person linkedin url", "linkedin_contato"]);
    let linkedin_company = header_index(&headers, &["company linkedin url", "linkedin_empresa"]);

    let leads = rows
        .iter()
        .map(|row| {
            let name = field(row, full_name).unwrap_or_else(|| {
                let first = field(row, first_name).unwrap_or_default();
                let last = field(row, last_name).unwrap_or_default();
                format!("{first} {last}").trim().to_string()
            });
            LeadRecord {
                full_name: name,
                role: field(row, role),
                company: field(row, company).unwrap_or_default(),
                employee_count: field(row, employees),
                email: field(row, email),
                contact_city: field(row, contact_city),
                contact_state: field(row, contact_state),
                contact_country: field(row, contact_country),
                company_city: field(row, company_city),
                company_state: field(row, company_state),
                company_country: field(row, company_country),
                website: field(row, website),
                phones: phone_columns
                    .iter()
                    .filter_map(|&i| field(row, Some(i)))
                    .collect(),
                linkedin_contact: field(row, linkedin_contact),
                linkedin_company: field(row, linkedin_company),
            }
        })
        .collect();
    Ok(leads)
}

/// Splits a locality value into individual rules. Rules are separated
/// by `;` or `|` so that a single rule can keep its internal commas
/// ("Campinas, SP, Brasil").
fn split_locality_rules(value: &str) -> Vec<String> {
    value
        .split([';', '|'])
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn split_csv_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Reads the ICP key/value sheet (`Campo_ICP` / `Valor_ICP` columns, or
/// simply the first two columns).
///
/// # Errors
///
/// Fails on unreadable files or malformed CSV structure. Unknown keys
/// are logged and ignored; the comparison-basis gate is enforced later
/// by the pipeline, not here.
pub fn read_icp(path: &Path) -> anyhow::Result<IcpCriteria> {
    let (headers, rows) = read_records(path)?;

    let key_col = header_index(&headers, &["campo_icp"]).unwrap_or(0);
    let value_col = header_index(&headers, &["valor_icp"]).unwrap_or(1);

    let mut criteria = IcpCriteria::default();
    for row in &rows {
        let Some(key) = field(row, Some(key_col)) else {
            continue;
        };
        let value = field(row, Some(value_col)).unwrap_or_default();
        match key.to_lowercase().as_str() {
            "cargos_de_interesse_do_lead" => criteria.allowed_roles = value,
            "numero_de_funcionarios" => criteria.employee_range = value,
            "localidade_do_lead" => criteria.locality_rules = split_locality_rules(&value),
            "segmento_desejado_do_lead" => criteria.valid_segments = split_csv_list(&value),
            "nome_da_empresa_contratante" => criteria.own_company = value,
            "site_da_empresa_contratante" => criteria.own_site = value,
            "descricao_da_empresa_contratante" => criteria.own_description = value,
            other => {
                tracing::debug!(key = other, "ignoring unknown ICP key");
            }
        }
    }
    Ok(criteria)
}

#[cfg(test)]
#[path = "ingest_test.rs"]
mod tests;
