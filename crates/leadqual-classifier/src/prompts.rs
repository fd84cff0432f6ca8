//! Prompt builders for the four asks the pipeline makes.
//!
//! Every prompt demands a machine-readable answer (pure JSON or a bare
//! value) with explicit no-invention rules; the pipeline still treats
//! whatever comes back as untrusted.

use leadqual_core::collab::NOT_FOUND_SENTINEL;
use leadqual_core::criteria::ComparisonBasis;
use leadqual_core::{IcpCriteria, Subject};

/// ICP verdict prompt for a site URL or a business summary.
#[must_use]
pub fn verdict_prompt(subject: &Subject, criteria: &IcpCriteria) -> String {
    let basis = match criteria.comparison_basis() {
        Some(ComparisonBasis::Site(site)) => format!("My company's website is: {site}"),
        Some(ComparisonBasis::Description(desc)) => {
            format!("My company is described as: \"{desc}\"")
        }
        // validate() rejects the batch before this can matter; keep the
        // prompt honest anyway.
        None => "No information about my company is available.".to_string(),
    };
    let step_one = match subject {
        Subject::Url(url) => format!(
            "1. Access and read the main content of the website at this URL: {url}"
        ),
        Subject::Summary(text) => format!(
            "1. Read the following business summary of the lead: \"{text}\""
        ),
    };
    let segments = criteria.valid_segments.join(", ");

    format!(
        "You are a senior lead development analyst. Your task is to analyze a \
lead and compare it against my Ideal Customer Profile (ICP).

ACT IN TWO STEPS:
{step_one}
2. Then, based on what you read, analyze the lead against the criteria below.

My company's ICP criteria:
- {basis}
- Valid segments (for qualification and categorization): [{segments}]

STRICT RULES FOR YOUR ANSWER:
- Do NOT make assumptions or inferences when the information is unclear.
- If the information about my company is insufficient for a real \
competition comparison, answer \"isCompetitor\" as false and explain in the \
reason that the base information was insufficient.
- Do NOT invent data under any circumstances.

Your answer (mandatory): respond ONLY with a valid JSON object holding \
these keys:
- \"isCompetitor\": true if, based on the information provided, the lead is \
a direct competitor; otherwise false.
- \"competitorReason\": one short sentence explaining why.
- \"isSegmentCorrect\": true if the lead belongs to one of the valid \
segments; otherwise false.
- \"segmentReason\": one short sentence explaining why.
- \"segmentCategory\": when \"isSegmentCorrect\" is true, EXACTLY the one \
valid segment from the list above that best describes the lead; when \
false, \"N/A\".
- \"phoneFound\": a public contact phone number visible in the analyzed \
content, or \"{NOT_FOUND_SENTINEL}\" if none is visible."
    )
}

/// Official-website discovery prompt.
#[must_use]
pub fn website_discovery_prompt(company: &str, city: &str, state: &str) -> String {
    format!(
        "Find the official website of the company \"{company}\" located in \
{city}, {state}, Brazil. Answer ONLY with the bare domain (for example: \
empresa.com.br), with no explanation and no extra words. If you cannot \
identify the official website with confidence, answer exactly \
{NOT_FOUND_SENTINEL}. Do not guess."
    )
}

/// Online-presence lookup prompt; JSON contract with an activity flag.
#[must_use]
pub fn presence_prompt(company: &str, city: &str) -> String {
    format!(
        "Search for the online presence of the company \"{company}\" in \
{city}, Brazil (directories, social profiles, news). Respond ONLY with a \
valid JSON object holding these keys:
- \"summary\": a short paragraph describing what the company does, built \
strictly from what you found.
- \"active\": true only if the presence indicates the company is currently \
operating; false otherwise or when you found nothing reliable.
Do not invent information."
    )
}

/// Phone lookup prompt against professional-network presence.
#[must_use]
pub fn phone_prompt(company: &str) -> String {
    format!(
        "Find a public contact phone number for the company \"{company}\" \
from its professional-network presence (LinkedIn or similar public \
profiles). Answer ONLY with the phone number, no extra words. If no public \
number exists, answer exactly {NOT_FOUND_SENTINEL}. Never invent a number."
    )
}

#[cfg(test)]
#[path = "prompts_test.rs"]
mod tests;
