//! Gemini implementation of the [`Analyzer`] capability
//!
//! Issues a single `generateContent` call asking for JSON that matches the
//! bill analysis schema, then re-validates whatever comes back.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use mzalendo_lens_sdk::schema::{
    response_schema, DOCUMENT_PROMPT, SYSTEM_INSTRUCTION, TEXT_PROMPT_PREFIX,
};
use mzalendo_lens_sdk::{
    parse_analysis, AnalysisError, AnalysisRequest, Analyzer, BillAnalysis, CardinalityPolicy,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::LensConfig;

/// Connection settings for the Generative Language API
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
    pub cardinality: CardinalityPolicy,
}

impl From<&LensConfig> for GeminiSettings {
    fn from(config: &LensConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base: config.api_base.clone(),
            timeout: config.timeout,
            cardinality: config.cardinality,
        }
    }
}

/// Gemini-backed analyzer
pub struct GeminiAnalyzer {
    settings: GeminiSettings,
    client: reqwest::Client,
}

impl GeminiAnalyzer {
    pub fn new(settings: GeminiSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { settings, client })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.api_base.trim_end_matches('/'),
            self.settings.model
        )
    }
}

#[async_trait]
impl Analyzer for GeminiAnalyzer {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn analyze(&self, request: AnalysisRequest) -> Result<BillAnalysis, AnalysisError> {
        // Checked first so a missing key never costs a network round trip
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or_else(|| AnalysisError::configuration("no Gemini API key found"))?;

        let body = build_request_body(&request);
        let endpoint = self.endpoint();
        info!(model = %self.settings.model, "requesting bill analysis");

        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AnalysisError::request(format!(
                "HTTP {}: {}",
                status.as_u16(),
                api_error_message(&text)
            )));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::malformed(format!("unexpected response envelope: {}", e)))?;

        let text = extract_text(payload)?;
        debug!(chars = text.len(), "analysis text received");
        parse_analysis(&text, self.settings.cardinality)
    }
}

/// Build the `generateContent` body: text part, then document and its
/// reading instruction, plus the structured-output config.
pub fn build_request_body(request: &AnalysisRequest) -> Value {
    let mut parts = Vec::new();

    if let Some(text) = &request.text {
        parts.push(json!({ "text": format!("{}{}", TEXT_PROMPT_PREFIX, text) }));
    }

    if let Some(document) = &request.document {
        parts.push(json!({
            "inlineData": {
                "mimeType": document.kind.mime_type(),
                "data": BASE64.encode(&document.bytes),
            }
        }));
        parts.push(json!({ "text": DOCUMENT_PROMPT }));
    }

    json!({
        "systemInstruction": {
            "parts": [{ "text": SYSTEM_INSTRUCTION }]
        },
        "contents": [{
            "role": "user",
            "parts": parts,
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
        }
    })
}

// ============================================================================
// Response envelope
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// Pull the answer text out of the envelope, mapping every flavour of
/// "nothing came back" to [`AnalysisError::EmptyResponse`].
pub fn extract_text(response: GenerateContentResponse) -> Result<String, AnalysisError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(AnalysisError::empty(format!("prompt blocked ({})", reason)));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AnalysisError::empty("no candidates returned"))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = match candidate.finish_reason {
            Some(r) => format!("candidate finished with {} and no text", r),
            None => "candidate had no text".to_string(),
        };
        return Err(AnalysisError::empty(reason));
    }

    Ok(text)
}

/// Best-effort `error.message` from an API error body
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect())
}
