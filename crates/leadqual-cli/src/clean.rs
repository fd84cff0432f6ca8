//! Standardizes a raw lead export without qualifying it.
//!
//! Contact names, company names, sites, phones, and locality fields all
//! come out of prospecting tools in inconsistent shapes; this pass
//! rewrites them into one canonical form so later runs (and humans
//! reading the sheet) see uniform data.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

use leadqual_core::types::LeadRecord;
use leadqual_pipeline::{normalize_phone, normalize_text, state_full_name};
use regex::Regex;

use crate::{ingest, CleanArgs};

const NAME_CONNECTIVES: &[&str] = &["de", "da", "do", "dos", "das"];
const COMPANY_EXCEPTIONS: &[&str] = &["de", "da", "do", "dos", "das", "e"];

pub fn run(args: &CleanArgs) -> anyhow::Result<()> {
    let leads = ingest::read_leads(&args.input)?;
    let total = leads.len();
    let cleaned: Vec<LeadRecord> = leads.into_iter().map(clean_lead).collect();
    write_cleaned(&args.out, &cleaned)?;
    tracing::info!(total, out = %args.out.display(), "cleaned export written");
    Ok(())
}

/// Applies every standardization to one record. Fields with no cleaning
/// rule (role, employee count, email, LinkedIn URLs) pass through.
pub(crate) fn clean_lead(lead: LeadRecord) -> LeadRecord {
    LeadRecord {
        full_name: standardize_full_name(&lead.full_name),
        role: lead.role,
        company: standardize_company(&lead.company),
        employee_count: lead.employee_count,
        email: lead.email,
        contact_city: clean_opt(lead.contact_city, standardize_city),
        contact_state: clean_opt(lead.contact_state, standardize_state),
        contact_country: clean_opt(lead.contact_country, standardize_country),
        company_city: clean_opt(lead.company_city, standardize_city),
        company_state: clean_opt(lead.company_state, standardize_state),
        company_country: clean_opt(lead.company_country, standardize_country),
        website: clean_opt(lead.website, standardize_site),
        phones: lead
            .phones
            .iter()
            .map(|p| normalize_phone(p))
            .filter(|p| !p.is_empty())
            .collect(),
        linkedin_contact: lead.linkedin_contact,
        linkedin_company: lead.linkedin_company,
    }
}

fn clean_opt(value: Option<String>, f: impl Fn(&str) -> String) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(f)
        .filter(|s| !s.is_empty())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Title-cases a phrase while keeping Portuguese connectives lowercase
/// ("banco do brasil" stays "Banco do Brasil", not "Banco Do Brasil").
/// The first word is always capitalized.
pub(crate) fn title_case_with_exceptions(value: &str, exceptions: &[&str]) -> String {
    value
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && exceptions.contains(&word.to_lowercase().as_str()) {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapses a full contact name to first name plus final surname,
/// skipping connectives ("Maria de Souza dos Santos" becomes
/// "Maria Santos").
pub(crate) fn standardize_full_name(name: &str) -> String {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return String::new();
    };
    let last = tokens[1..]
        .iter()
        .rev()
        .find(|t| !NAME_CONNECTIVES.contains(&t.to_lowercase().as_str()));
    match last {
        Some(last) => format!("{} {}", capitalize(first), capitalize(last)),
        None => capitalize(first),
    }
}

fn legal_suffix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\s(s/a|s\.a\.?|sa\b|ltda\.?|me\b|eireli\b|epp\b|mei\b)")
            .expect("static regex")
    })
}

/// Drops legal-form suffixes (LTDA, S/A, ME, EIRELI, EPP, MEI) and
/// title-cases the rest.
pub(crate) fn standardize_company(name: &str) -> String {
    let stripped = legal_suffix_pattern().replace_all(name, "");
    title_case_with_exceptions(stripped.trim(), COMPANY_EXCEPTIONS)
}

/// Canonical site form: no scheme, no trailing slash, `www.` prefix.
pub(crate) fn standardize_site(site: &str) -> String {
    let mut cleaned = site.trim();
    for scheme in ["https://", "http://"] {
        if let Some(rest) = strip_prefix_ascii_ci(cleaned, scheme) {
            cleaned = rest;
            break;
        }
    }
    let cleaned = cleaned.trim_end_matches('/');
    if cleaned.is_empty() {
        return String::new();
    }
    if strip_prefix_ascii_ci(cleaned, "www.").is_some() {
        cleaned.to_string()
    } else {
        format!("www.{cleaned}")
    }
}

fn strip_prefix_ascii_ci<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    value
        .get(..prefix.len())
        .filter(|p| p.eq_ignore_ascii_case(prefix))
        .map(|_| &value[prefix.len()..])
}

/// Cities keep only letters and spaces; exports often carry stray
/// digits or punctuation ("São Paulo - 04")
pub(crate) fn standardize_city(city: &str) -> String {
    let letters: String = city
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();
    title_case_with_exceptions(letters.trim(), NAME_CONNECTIVES)
}

/// Expands state codes and unaccented spellings to the official name;
/// anything unrecognized is title-cased as-is.
pub(crate) fn standardize_state(state: &str) -> String {
    match state_full_name(state) {
        Some(name) => name.to_string(),
        None => title_case_with_exceptions(state, &["de", "do"]),
    }
}

pub(crate) fn standardize_country(country: &str) -> String {
    match normalize_text(country).as_str() {
        "br" | "bra" | "brazil" | "brasil" => "Brasil".to_string(),
        _ => capitalize(country.trim()),
    }
}

/// Writes the cleaned sheet semicolon-separated with a UTF-8 BOM so
/// spreadsheet tools open it with accents intact.
fn write_cleaned(path: &Path, leads: &[LeadRecord]) -> anyhow::Result<()> {
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
        "Linkedin_Contato",
        "LinkedIn_Empresa",
    ])?;
    for lead in leads {
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
            lead.linkedin_contact.as_deref().unwrap_or(""),
            lead.linkedin_company.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "clean_test.rs"]
mod tests;
