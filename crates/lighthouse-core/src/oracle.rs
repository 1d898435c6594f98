//! Conversation oracle client: the hosted language model treated as an opaque
//! text-in/text-out function.
//!
//! One request per submission carries the full prior history, the new
//! utterance as the final user turn, the fixed persona instruction, and a
//! moderate sampling configuration. Any transport, authentication, or quota
//! failure surfaces as a single `OracleError` — no retry, no streaming.

use crate::persona::SYSTEM_INSTRUCTION;
use crate::shared::Message;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("oracle API error {status}: {body}")]
    Api { status: u16, body: String },
}

/// The external model behind one async operation. The controller only ever
/// sees this trait, so tests script replies without a network.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Sends `prompt` as the final user turn after `prior_history` and returns
    /// the model's textual reply. An empty reply is `Ok("")` — the controller
    /// substitutes its fallback text, not this client.
    async fn converse(&self, prompt: &str, prior_history: &[Message])
        -> Result<String, OracleError>;
}

// Wire shape of the generateContent API.

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    top_k: u32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Gemini `generateContent` client. API key from configuration, sent via the
/// `x-goog-api-key` header.
pub struct GeminiOracle {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiOracle {
    pub fn new(api_key: String, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key: api_key.trim().to_string(),
            model,
            client,
        }
    }

    fn build_request(&self, prompt: &str, prior_history: &[Message]) -> GenerateRequest {
        let mut contents: Vec<Content> = prior_history
            .iter()
            .map(|m| Content {
                role: Some(m.role.as_str().to_string()),
                parts: vec![Part {
                    text: m.content.clone(),
                }],
            })
            .collect();
        contents.push(Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        });
        GenerateRequest {
            contents,
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: 0.7,
                top_p: 0.9,
                top_k: 40,
                max_output_tokens: 2048,
            },
        }
    }
}

#[async_trait]
impl Oracle for GeminiOracle {
    async fn converse(
        &self,
        prompt: &str,
        prior_history: &[Message],
    ) -> Result<String, OracleError> {
        let url = format!("{}/models/{}:generateContent", API_BASE, self.model);
        let body = self.build_request(prompt, prior_history);

        let res = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(OracleError::Api { status, body });
        }

        let parsed: GenerateResponse = res.json().await?;
        let text = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Role;

    #[test]
    fn request_carries_history_persona_and_sampling_config() {
        let oracle = GeminiOracle::new("key".to_string(), "gemini-3-pro-preview".to_string());
        let history = vec![
            Message::now(Role::Model, "# SYSTEM ONLINE"),
            Message::now(Role::User, "status report"),
        ];
        let req = oracle.build_request("sleep 90 diet 60 exercise 40", &history);
        let json = serde_json::to_value(&req).unwrap();

        let contents = json["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "model");
        assert_eq!(contents[1]["role"], "user");
        // The new utterance is the final user turn, separate from history.
        assert_eq!(contents[2]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "sleep 90 diet 60 exercise 40");

        let persona = json["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
        assert!(persona.contains("Abyss Lighthouse"));

        assert_eq!(json["generationConfig"]["temperature"], 0.7);
        assert_eq!(json["generationConfig"]["topP"], 0.9);
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
    }
}
