use serde::{Deserialize, Serialize};

/// Recipient profile as entered by the user. All four fields are free text;
/// the input surface enforces non-empty, the core does not re-validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: String,
    pub occasion: String,
    pub hobbies: String,
    pub budget: String,
}

/// One gift suggestion, the unit of display and of favoriting.
///
/// `id` is derived from the gift name and its position in the response list
/// (see `normalize`); it is stable for a given response but not globally
/// unique across calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GiftRecommendation {
    pub id: String,
    pub gift_name: String,
    pub why_it_fits: String,
    pub budget_category: String,
    pub alternatives: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub target_audience: String,
}

// Gemini generateContent request format
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

// Gemini generateContent response format
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

/// Which list the surface is currently rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Results,
    Saved,
}

/// Transient per-session state driven by the orchestrator. Only favorites
/// outlive a session.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub loading: bool,
    pub error: Option<String>,
    pub recommendations: Vec<GiftRecommendation>,
}
