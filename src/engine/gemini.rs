use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::engine::completion::CompletionClient;
use crate::error::{AssistantError, Result};
use crate::model::options::GenerationOptions;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Blocking client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// No request timeout is set here; the transport default applies.
    pub fn new(config: &AppConfig) -> GeminiClient {
        GeminiClient {
            http: Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Lists the models visible to the configured key and returns how many
    /// there are. Proves the key works without spending generation quota.
    pub fn verify_credentials(&self) -> Result<usize> {
        let url = format!("{}/v1beta/models", self.base_url);

        let response = self
            .http
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(describe_failure(status, &body));
        }

        let listing: serde_json::Value = serde_json::from_str(&body).map_err(|err| {
            AssistantError::RemoteService(format!("model listing was not valid JSON: {err}"))
        })?;

        Ok(listing["models"]
            .as_array()
            .map(|models| models.len())
            .unwrap_or(0))
    }
}

impl CompletionClient for GeminiClient {
    fn complete(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: options.system_instruction.as_deref().map(|text| Content {
                parts: vec![Part { text }],
            }),
            generation_config: GenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_output_tokens,
            },
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(describe_failure(status, &body));
        }

        let payload: GenerateContentResponse = serde_json::from_str(&body).map_err(|err| {
            AssistantError::RemoteService(format!("the reply was not valid JSON: {err}"))
        })?;

        extract_text(payload)
    }
}

/// Turns a non-success HTTP reply into a message the learner can act on.
fn describe_failure(status: StatusCode, body: &str) -> AssistantError {
    let mut detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.trim().to_string());
    if detail.is_empty() {
        detail = "no detail provided".to_string();
    }

    let message = match status.as_u16() {
        401 | 403 => format!("the API key was rejected ({detail})"),
        429 => format!("request quota exhausted, try again shortly ({detail})"),
        500..=599 => format!("the service is currently unavailable ({detail})"),
        _ => format!("the service answered HTTP {status} ({detail})"),
    };

    AssistantError::RemoteService(message)
}

fn extract_text(payload: GenerateContentResponse) -> Result<String> {
    let GenerateContentResponse {
        candidates,
        prompt_feedback,
    } = payload;

    let candidate = match candidates.into_iter().next() {
        Some(candidate) => candidate,
        None => {
            let reason = prompt_feedback
                .and_then(|feedback| feedback.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(AssistantError::RemoteService(format!(
                "the service returned no answer ({reason})"
            )));
        }
    };

    let text: String = candidate
        .content
        .map(|content| content.parts.into_iter().map(|part| part.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "unknown".to_string());
        return Err(AssistantError::RemoteService(format!(
            "the service returned an empty answer (finish reason: {reason})"
        )));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request_for(options: &GenerationOptions, prompt: &str) -> serde_json::Value {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: options.system_instruction.as_deref().map(|text| Content {
                parts: vec![Part { text }],
            }),
            generation_config: GenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_output_tokens,
            },
        };
        serde_json::to_value(&request).unwrap()
    }

    #[test]
    fn study_requests_serialize_with_camel_case_keys() {
        let options = GenerationOptions::study_chat("Be kind.".to_string());
        let value = request_for(&options, "What is a derivative?");

        assert_eq!(
            value["contents"][0]["parts"][0]["text"],
            "What is a derivative?"
        );
        assert_eq!(
            value["systemInstruction"]["parts"][0]["text"],
            "Be kind."
        );
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 2000);
        let temperature = value["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.4).abs() < 1e-6);
    }

    #[test]
    fn quiz_requests_omit_the_system_instruction() {
        let value = request_for(&GenerationOptions::quiz(), "Make a quiz.");

        assert!(value.get("systemInstruction").is_none());
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 1500);
    }

    #[test]
    fn concatenates_the_parts_of_the_first_candidate() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello " }, { "text": "world" }] },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();

        assert_eq!(extract_text(payload).unwrap(), "Hello world");
    }

    #[test]
    fn blocked_prompts_surface_the_block_reason() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [],
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();

        let err = extract_text(payload).unwrap_err();
        match err {
            AssistantError::RemoteService(message) => assert!(message.contains("SAFETY")),
            other => panic!("expected a remote service error, got {other:?}"),
        }
    }

    #[test]
    fn empty_answers_surface_the_finish_reason() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "MAX_TOKENS" }]
        }))
        .unwrap();

        let err = extract_text(payload).unwrap_err();
        match err {
            AssistantError::RemoteService(message) => assert!(message.contains("MAX_TOKENS")),
            other => panic!("expected a remote service error, got {other:?}"),
        }
    }

    #[test]
    fn auth_failures_read_like_auth_failures() {
        let body = json!({ "error": { "message": "API key not valid." } }).to_string();
        let err = describe_failure(StatusCode::FORBIDDEN, &body);
        match err {
            AssistantError::RemoteService(message) => {
                assert!(message.contains("rejected"));
                assert!(message.contains("API key not valid."));
            }
            other => panic!("expected a remote service error, got {other:?}"),
        }
    }

    #[test]
    fn server_outages_read_like_outages() {
        let err = describe_failure(StatusCode::SERVICE_UNAVAILABLE, "");
        match err {
            AssistantError::RemoteService(message) => {
                assert!(message.contains("unavailable"));
            }
            other => panic!("expected a remote service error, got {other:?}"),
        }
    }
}
