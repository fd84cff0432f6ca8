use serde::{Deserialize, Serialize};

/// One lead under evaluation: a contact plus the company they belong to.
///
/// Populated once during ingestion and treated as read-only by the
/// pipeline; enrichment output lands in [`ClassificationResult`], not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadRecord {
    pub full_name: String,
    /// Contact's role/title, as exported (free text).
    pub role: Option<String>,
    pub company: String,
    /// Employee count as free text; may carry a `k` suffix ("1.2k") or
    /// thousands separators.
    pub employee_count: Option<String>,
    pub email: Option<String>,
    pub contact_city: Option<String>,
    pub contact_state: Option<String>,
    pub contact_country: Option<String>,
    pub company_city: Option<String>,
    pub company_state: Option<String>,
    pub company_country: Option<String>,
    pub website: Option<String>,
    /// Raw phone fields, zero or more, in export order.
    pub phones: Vec<String>,
    pub linkedin_contact: Option<String>,
    pub linkedin_company: Option<String>,
}

impl LeadRecord {
    /// The city/state/country triple used for locality matching.
    ///
    /// Company locality wins over contact locality; the contact fields are
    /// the fallback for exports that only carry person-level location.
    #[must_use]
    pub fn locality(&self) -> (&str, &str, &str) {
        fn pick<'a>(company: &'a Option<String>, contact: &'a Option<String>) -> &'a str {
            company
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .or(contact.as_deref())
                .unwrap_or("")
        }
        (
            pick(&self.company_city, &self.contact_city),
            pick(&self.company_state, &self.contact_state),
            pick(&self.company_country, &self.contact_country),
        )
    }

    /// Website field if it holds a non-blank value.
    #[must_use]
    pub fn usable_website(&self) -> Option<&str> {
        self.website
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// What the external classifier is asked to analyze for one lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// A website URL (scheme included).
    Url(String),
    /// A short business summary discovered through the online-presence
    /// lookup, used when no site could be found.
    Summary(String),
}

impl Subject {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Subject::Url(s) | Subject::Summary(s) => s,
        }
    }
}

/// Terminal classification of one lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    /// Passed local rules and the classifier confirmed segment fit with no
    /// competitor overlap.
    Qualified,
    /// Failed a local rule (size, locality, or role) before any I/O.
    RejectedLocal,
    /// Classifier judged the lead a direct competitor.
    RejectedCompetitor,
    /// Classifier judged the lead outside the valid segments.
    RejectedSegment,
    /// The lead is the requesting company itself.
    SelfMatch,
    /// No analyzable data found after exhausting the enrichment cascade.
    AttentionNeeded,
    /// External call or response validation failed for this lead.
    Error,
}

impl LeadStatus {
    /// Human-readable label used in exported result sheets.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::Qualified => "Dentro do ICP",
            LeadStatus::RejectedLocal
            | LeadStatus::RejectedCompetitor
            | LeadStatus::RejectedSegment => "Fora do ICP",
            LeadStatus::SelfMatch => "Empresa Contratante",
            LeadStatus::AttentionNeeded => "Ponto de Atencao",
            LeadStatus::Error => "Erro na Analise",
        }
    }
}

/// Per-lead outcome plus any artifacts the enrichment cascade produced.
///
/// Built once by the orchestrator when the lead reaches a terminal state;
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub status: LeadStatus,
    /// Human-readable justification for the status.
    pub reason: String,
    /// Segment label from the classifier, or `"N/A"`.
    pub segment_category: String,
    /// Website discovered during enrichment (absent when the lead already
    /// had one, or when none was found).
    pub discovered_site: Option<String>,
    /// Phone discovered during enrichment, normalized when possible.
    pub discovered_phone: Option<String>,
    /// Business summary used as the classification subject when no site
    /// could be resolved.
    pub discovered_summary: Option<String>,
}

impl ClassificationResult {
    /// A terminal result with no enrichment artifacts.
    #[must_use]
    pub fn bare(status: LeadStatus, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            segment_category: "N/A".to_string(),
            discovered_site: None,
            discovered_phone: None,
            discovered_summary: None,
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
