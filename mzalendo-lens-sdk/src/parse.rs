//! Extraction, parsing and validation of the service's JSON answer

use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;
use crate::schema::{EXPECTED_IMPACT_CARDS, EXPECTED_QUIZ_QUESTIONS};
use crate::types::BillAnalysis;

/// What to do when the service ignores the requested array sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardinalityPolicy {
    /// Reject anything but exactly 3 impact cards and 3 questions
    #[default]
    Strict,
    /// Accept any counts; the UI renders whatever arrived
    Lenient,
}

impl FromStr for CardinalityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(CardinalityPolicy::Strict),
            "lenient" => Ok(CardinalityPolicy::Lenient),
            other => Err(format!(
                "unknown cardinality policy '{}' (expected 'strict' or 'lenient')",
                other
            )),
        }
    }
}

impl fmt::Display for CardinalityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardinalityPolicy::Strict => f.write_str("strict"),
            CardinalityPolicy::Lenient => f.write_str("lenient"),
        }
    }
}

/// Extract JSON content from markdown code fences or raw text
///
/// Handles:
/// - ```json blocks (any language tag, any case)
/// - Generic ``` blocks
/// - Single-line fences such as ```json {...} ```
/// - Raw JSON text
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();

    // Bare JSON may legitimately contain backticks inside string values
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return trimmed.to_string();
    }

    let Some(fence_start) = trimmed.find("```") else {
        return trimmed.to_string();
    };

    // Skip the language tag right after the opening fence
    let after_fence = &trimmed[fence_start + 3..];
    let tag_len = after_fence
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(after_fence.len());
    let body = &after_fence[tag_len..];

    let body = match body.rfind("```") {
        Some(end) => &body[..end],
        None => body,
    };

    body.trim().to_string()
}

/// Parse the service's text into a validated [`BillAnalysis`]
pub fn parse_analysis(raw: &str, policy: CardinalityPolicy) -> Result<BillAnalysis, AnalysisError> {
    let json = strip_code_fences(raw);
    if json.is_empty() {
        return Err(AnalysisError::empty("response text was blank"));
    }

    let analysis: BillAnalysis = serde_json::from_str(&json).map_err(|e| {
        let preview: String = json.chars().take(200).collect();
        tracing::debug!(error = %e, preview = %preview, "analysis JSON did not parse");
        AnalysisError::malformed(e.to_string())
    })?;

    validate_analysis(&analysis, policy)?;
    Ok(analysis)
}

/// Check the invariants serde cannot express.
///
/// Per-question invariants hold under every policy; array sizes are only
/// enforced under [`CardinalityPolicy::Strict`].
pub fn validate_analysis(
    analysis: &BillAnalysis,
    policy: CardinalityPolicy,
) -> Result<(), AnalysisError> {
    if analysis.summary.trim().is_empty() {
        return Err(AnalysisError::malformed("summary is empty"));
    }
    if analysis.detailed_summary.trim().is_empty() {
        return Err(AnalysisError::malformed("detailedSummary is empty"));
    }

    for (idx, question) in analysis.quiz.iter().enumerate() {
        if question.options.len() < 2 {
            return Err(AnalysisError::malformed(format!(
                "quiz question {} has {} option(s), need at least 2",
                idx + 1,
                question.options.len()
            )));
        }
        if question.correct_index >= question.options.len() {
            return Err(AnalysisError::malformed(format!(
                "quiz question {} has correctIndex {} but only {} options",
                idx + 1,
                question.correct_index,
                question.options.len()
            )));
        }
    }

    if policy == CardinalityPolicy::Strict {
        if analysis.impact_cards.len() != EXPECTED_IMPACT_CARDS {
            return Err(AnalysisError::malformed(format!(
                "expected {} impact cards, got {}",
                EXPECTED_IMPACT_CARDS,
                analysis.impact_cards.len()
            )));
        }
        if analysis.quiz.len() != EXPECTED_QUIZ_QUESTIONS {
            return Err(AnalysisError::malformed(format!(
                "expected {} quiz questions, got {}",
                EXPECTED_QUIZ_QUESTIONS,
                analysis.quiz.len()
            )));
        }
    }

    Ok(())
}
