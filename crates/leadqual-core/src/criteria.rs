use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Sentinel left in ICP template sheets for the contracting company's site.
const SITE_PLACEHOLDER_MARKER: &str = "[INSIRA";
/// Sentinel left in ICP template sheets for the company description.
const DESCRIPTION_PLACEHOLDER_MARKER: &str = "[Descreva";

/// The Ideal Customer Profile a whole batch of leads is evaluated against.
///
/// Loaded once per batch and read-only from then on; every lookup is an
/// explicit field access. [`IcpCriteria::validate`] must pass before any
/// lead is processed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IcpCriteria {
    /// Comma-separated role allow-list. Empty allows every role.
    pub allowed_roles: String,
    /// Free-text employee range: "acima de 50", "100-500", "abaixo de 20",
    /// or a bare number meaning ">= N". Empty allows every size.
    pub employee_range: String,
    /// Locality rules; each a macro-region name, a comma-joined
    /// city/state/country token set, or the country-wide sentinel.
    pub locality_rules: Vec<String>,
    /// Segment labels the classifier may answer with.
    pub valid_segments: Vec<String>,
    /// Contracting company's name, used for self-exclusion.
    pub own_company: String,
    /// Contracting company's website, the preferred comparison basis for
    /// competitor detection.
    pub own_site: String,
    /// Free-text description of the contracting company, the fallback
    /// comparison basis.
    pub own_description: String,
}

/// Which comparison basis competitor analysis should be anchored on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonBasis {
    Site(String),
    Description(String),
}

impl IcpCriteria {
    /// Checks the batch-level precondition: at least one of the two
    /// comparison-basis fields must hold a real value rather than the
    /// template placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingComparisonBasis`] when neither field
    /// is usable. Fatal to the whole batch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.usable_site().is_none() && self.usable_description().is_none() {
            return Err(ConfigError::MissingComparisonBasis);
        }
        Ok(())
    }

    /// The comparison basis competitor prompts should use: the site when
    /// usable, the description otherwise.
    ///
    /// Only meaningful after [`IcpCriteria::validate`] has passed; returns
    /// `None` when neither field is usable.
    #[must_use]
    pub fn comparison_basis(&self) -> Option<ComparisonBasis> {
        if let Some(site) = self.usable_site() {
            return Some(ComparisonBasis::Site(site.to_string()));
        }
        self.usable_description()
            .map(|d| ComparisonBasis::Description(d.to_string()))
    }

    fn usable_site(&self) -> Option<&str> {
        let site = self.own_site.trim();
        (site.len() > 4 && site.contains('.') && !site.contains(SITE_PLACEHOLDER_MARKER))
            .then_some(site)
    }

    fn usable_description(&self) -> Option<&str> {
        let desc = self.own_description.trim();
        (desc.len() > 15 && !desc.contains(DESCRIPTION_PLACEHOLDER_MARKER)).then_some(desc)
    }
}

#[cfg(test)]
#[path = "criteria_test.rs"]
mod tests;
