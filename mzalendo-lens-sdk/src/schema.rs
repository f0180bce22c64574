//! Structured-output schema and the fixed instruction sent with every request

use serde_json::{json, Value};

use crate::types::ImpactCategory;

/// Number of impact cards the service is asked for
pub const EXPECTED_IMPACT_CARDS: usize = 3;

/// Number of quiz questions the service is asked for
pub const EXPECTED_QUIZ_QUESTIONS: usize = 3;

/// Part prepended to pasted bill text
pub const TEXT_PROMPT_PREFIX: &str = "Analyze this bill text: ";

/// Part sent after an attached document
pub const DOCUMENT_PROMPT: &str = "Read the attached document (it might be a scan or PDF) and analyze the legislative content within it.";

/// Audience and tone brief for the analysis service
pub const SYSTEM_INSTRUCTION: &str = r#"You are a savvy Kenyan civic educator.
Your goal is to explain complex legislation in 'Gen-Z' and 'Early Professional' Kenyan language.

Requirements:
1. summary: A concise 1-sentence 'vibe check' of the bill.
2. detailedSummary: A comprehensive, structured breakdown. Use bullet points. Cover:
   - Main Objective: What is this bill trying to achieve?
   - Key Provisions: List the most important changes/rules.
   - Timeline: When does this take effect?
   - Red Flags: What should the public be worried about?
3. impactCards: Identify 3 specific impact areas.
4. quiz: Create exactly 3 multiple-choice questions with a PROGRESSIVE DIFFICULTY curve (Easy, Medium, Hard).

Use local examples (e.g., M-Pesa, fuel at Shell/Rubis, rent in Roysambu, cost of 1kg sugar).
Tone: Informative, empathetic, slightly witty but respectful."#;

/// Response schema in the service's OpenAPI subset.
///
/// Mirrors [`BillAnalysis`](crate::types::BillAnalysis) field for field.
pub fn response_schema() -> Value {
    let categories: Vec<&str> = ImpactCategory::ALL.iter().map(|c| c.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "detailedSummary": { "type": "STRING" },
            "impactCards": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "icon": { "type": "STRING" },
                        "category": { "type": "STRING", "enum": categories }
                    },
                    "required": ["title", "description", "icon", "category"]
                }
            },
            "quiz": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "correctIndex": { "type": "NUMBER" },
                        "explanation": { "type": "STRING" }
                    },
                    "required": ["question", "options", "correctIndex", "explanation"]
                },
                "minItems": EXPECTED_QUIZ_QUESTIONS,
                "maxItems": EXPECTED_QUIZ_QUESTIONS
            }
        },
        "required": ["summary", "detailedSummary", "impactCards", "quiz"]
    })
}
