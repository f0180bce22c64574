//! Data types for a bill analysis and the request that produces it.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Analysis Types
// ============================================================================

/// Structured analysis of one piece of legislation.
///
/// Produced once per session by the analysis service and never mutated
/// afterwards. Field names on the wire are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillAnalysis {
    /// One-sentence "vibe check" of the bill
    pub summary: String,

    /// Long-form breakdown (objective, provisions, timeline, red flags)
    pub detailed_summary: String,

    /// Everyday cost areas the bill touches
    pub impact_cards: Vec<ImpactCard>,

    /// Multiple-choice questions, easiest first
    pub quiz: Vec<QuizQuestion>,
}

/// How the bill affects one real-world cost category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactCard {
    pub title: String,
    pub description: String,
    /// Single glyph shown next to the card
    pub icon: String,
    pub category: ImpactCategory,
}

/// Closed set of impact categories the service may choose from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactCategory {
    Salary,
    Fuel,
    Food,
    Business,
    Digital,
    Other,
}

impl ImpactCategory {
    pub const ALL: [ImpactCategory; 6] = [
        ImpactCategory::Salary,
        ImpactCategory::Fuel,
        ImpactCategory::Food,
        ImpactCategory::Business,
        ImpactCategory::Digital,
        ImpactCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactCategory::Salary => "Salary",
            ImpactCategory::Fuel => "Fuel",
            ImpactCategory::Food => "Food",
            ImpactCategory::Business => "Business",
            ImpactCategory::Digital => "Digital",
            ImpactCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,

    /// Index into `options` of the right answer
    #[serde(deserialize_with = "deserialize_index")]
    pub correct_index: usize,

    /// Shown once the user has answered
    pub explanation: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }
}

/// The schema declares `correctIndex` as a JSON number, so the service is
/// free to send `1.0`. Accept any non-negative integral number.
fn deserialize_index<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as usize)
    } else {
        Err(serde::de::Error::custom(format!(
            "correctIndex must be a non-negative integer, got {}",
            value
        )))
    }
}

// ============================================================================
// Request Types
// ============================================================================

/// Document formats the analysis service accepts inline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Jpeg,
    Png,
}

impl DocumentKind {
    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Jpeg => "image/jpeg",
            DocumentKind::Png => "image/png",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Jpeg => "JPG",
            DocumentKind::Png => "PNG",
        };
        f.write_str(label)
    }
}

/// A scanned page or PDF attached by the user
#[derive(Clone, PartialEq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(file_name: impl Into<String>, kind: DocumentKind, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            kind,
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Raw bytes would flood the logs
impl fmt::Debug for DocumentUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentUpload")
            .field("file_name", &self.file_name)
            .field("kind", &self.kind)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Input for one analysis call: bill text, a document, or both
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisRequest {
    pub text: Option<String>,
    pub document: Option<DocumentUpload>,
}

impl AnalysisRequest {
    /// Blank text is dropped so it never reaches the service as an empty part.
    pub fn new(text: Option<String>, document: Option<DocumentUpload>) -> Self {
        let text = text.filter(|t| !t.trim().is_empty());
        Self { text, document }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.document.is_none()
    }
}
