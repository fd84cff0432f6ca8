//! Validation of the classifier's free-form answers.
//!
//! The external responder is instructed to answer pure JSON, but its
//! output is untrusted: fences, missing keys, wrong types, and invented
//! segment labels all happen. This module turns the raw text into a
//! [`ClassifierVerdict`] or a [`PipelineError::Validation`] — never a
//! silently-defaulted field.

use leadqual_core::IcpCriteria;

use crate::error::PipelineError;
use crate::locality::normalize_text;

/// Segment labels always accepted besides the ICP's declared list.
const FALLBACK_SEGMENTS: &[&str] = &["outros", "other"];

/// A validated, structured classifier verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierVerdict {
    pub is_competitor: bool,
    pub is_segment_correct: bool,
    pub competitor_reason: String,
    pub segment_reason: String,
    /// One of the ICP's valid segments (or the "Outros"/"Other"
    /// fallback) when `is_segment_correct`; `"N/A"` otherwise.
    pub segment_category: String,
    /// Phone number the responder spotted on the analyzed page, if any.
    pub phone_found: Option<String>,
}

/// Strips the Markdown code fences responders wrap JSON in.
fn strip_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

fn required_bool(value: &serde_json::Value, key: &str) -> Result<bool, PipelineError> {
    value
        .get(key)
        .ok_or_else(|| PipelineError::Validation {
            reason: format!("missing required key \"{key}\""),
        })?
        .as_bool()
        .ok_or_else(|| PipelineError::Validation {
            reason: format!("key \"{key}\" is not a boolean"),
        })
}

fn optional_string(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Parses and sanity-checks a raw classifier answer.
///
/// # Errors
///
/// Returns [`PipelineError::Validation`] when the text is not a JSON
/// object, a required boolean key is missing or mistyped, or the segment
/// category is a label the ICP never declared.
pub fn validate_verdict(
    raw: &str,
    criteria: &IcpCriteria,
) -> Result<ClassifierVerdict, PipelineError> {
    let cleaned = strip_fences(raw);
    let value: serde_json::Value =
        serde_json::from_str(&cleaned).map_err(|e| PipelineError::Validation {
            reason: format!("response is not valid JSON: {e}"),
        })?;
    if !value.is_object() {
        return Err(PipelineError::Validation {
            reason: "response is not a JSON object".to_string(),
        });
    }

    let is_competitor = required_bool(&value, "isCompetitor")?;
    let is_segment_correct = required_bool(&value, "isSegmentCorrect")?;

    let segment_category = if is_segment_correct {
        let category =
            optional_string(&value, "segmentCategory").ok_or_else(|| PipelineError::Validation {
                reason: "segment accepted but \"segmentCategory\" is missing".to_string(),
            })?;
        let normalized = normalize_text(&category);
        let declared = criteria
            .valid_segments
            .iter()
            .any(|s| normalize_text(s) == normalized);
        if !declared && !FALLBACK_SEGMENTS.contains(&normalized.as_str()) {
            return Err(PipelineError::Validation {
                reason: format!("segment category \"{category}\" is not a declared segment"),
            });
        }
        category
    } else {
        "N/A".to_string()
    };

    Ok(ClassifierVerdict {
        is_competitor,
        is_segment_correct,
        competitor_reason: optional_string(&value, "competitorReason").unwrap_or_default(),
        segment_reason: optional_string(&value, "segmentReason").unwrap_or_default(),
        segment_category,
        phone_found: optional_string(&value, "phoneFound"),
    })
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
