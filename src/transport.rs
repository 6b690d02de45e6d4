use async_trait::async_trait;
use reqwest::Client;

use crate::error::{GiftGenieError, Result};
use crate::models::{GenerateRequest, GenerateResponse};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[async_trait]
pub trait Transport: Send + Sync {
    async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse>;
}

pub struct GeminiTransport {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiTransport {
    pub fn new(api_key: String, model: String) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            api_key,
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.model)
    }
}

#[async_trait]
impl Transport for GeminiTransport {
    /// Single attempt, no retry: a failed submission is surfaced to the user
    /// as one terminal error and they resubmit.
    async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(req)
            .send()
            .await
            .map_err(|e| GiftGenieError::ApiFailure(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GiftGenieError::ApiFailure(format!(
                "Gemini API returned {status}: {body}"
            )));
        }

        response.json().await.map_err(|e| {
            GiftGenieError::ApiFailure(format!("failed to parse Gemini API response: {e}"))
        })
    }
}

/// Extract the text of the first candidate's first part, the payload the
/// normalizer consumes. A response with no candidate or no part is an empty
/// response, not a malformed one.
pub fn first_text(response: &GenerateResponse) -> Result<String> {
    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or(GiftGenieError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Candidate, Content, Part};

    #[test]
    fn test_first_text_extracts_candidate() {
        let response = GenerateResponse {
            candidates: vec![Candidate {
                content: Content {
                    parts: vec![Part {
                        text: "[]".to_string(),
                    }],
                },
            }],
        };
        assert_eq!(first_text(&response).unwrap(), "[]");
    }

    #[test]
    fn test_first_text_empty_candidates() {
        let response = GenerateResponse { candidates: vec![] };
        assert!(matches!(
            first_text(&response),
            Err(GiftGenieError::EmptyResponse)
        ));
    }

    #[test]
    fn test_first_text_candidate_without_parts() {
        let response = GenerateResponse {
            candidates: vec![Candidate {
                content: Content { parts: vec![] },
            }],
        };
        assert!(matches!(
            first_text(&response),
            Err(GiftGenieError::EmptyResponse)
        ));
    }
}
