//! Request and response models for the Gemini generateContent API

use serde::{Deserialize, Serialize};

/// Finish reason reported when a candidate was stopped by the safety layer
const FINISH_REASON_SAFETY: &str = "SAFETY";

/// One text part of a content block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Raw text carried by this part; empty for non-text parts
    #[serde(default)]
    pub text: String,
}

/// A block of content exchanged with the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Producer of the content ("user" or "model"); absent on system instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered parts making up the content
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a user content block with a single text part
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Create a role-less content block, as used for system instructions
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Concatenated text of all parts
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Request body for one generateContent call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Fixed steering instructions applied to the whole request
    pub system_instruction: Content,
    /// Conversation contents; a single user document here
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build a fresh request carrying the instruction set and one document
    pub fn new(instructions: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            system_instruction: Content::system(instructions),
            contents: vec![Content::user(content)],
        }
    }
}

/// Response body of a generateContent call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates; may be empty when the prompt was blocked
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Feedback about the prompt itself, present on prompt-level blocks
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, if the response carries one
    pub fn primary_text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(Content::text)
    }
}

/// A single generated candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content; absent when generation produced nothing
    pub content: Option<Content>,
    /// Why generation stopped ("STOP", "SAFETY", ...)
    pub finish_reason: Option<String>,
    /// Safety ratings attached to this candidate
    #[serde(default)]
    pub safety_ratings: Vec<SafetyRating>,
}

impl Candidate {
    /// Whether this candidate was stopped by the safety layer
    pub fn is_safety_blocked(&self) -> bool {
        self.finish_reason.as_deref() == Some(FINISH_REASON_SAFETY)
    }
}

/// Feedback on the prompt, reported when the service filtered the request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked, if it was
    pub block_reason: Option<String>,
    /// Safety ratings computed for the prompt
    #[serde(default)]
    pub safety_ratings: Vec<SafetyRating>,
}

/// One safety classification entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRating {
    /// Harm category, e.g. "HARM_CATEGORY_DANGEROUS_CONTENT"
    pub category: String,
    /// Assessed probability, e.g. "NEGLIGIBLE" or "HIGH"
    pub probability: String,
    /// Whether this rating blocked the content
    #[serde(default)]
    pub blocked: bool,
}
