//! Gemini `generateContent` wire types and payload parsing

use pyarch_core::{GenerationError, ProjectStructure};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prompt::{build_prompt, response_schema};

const JSON_MIME_TYPE: &str = "application/json";

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Build the request for one user prompt (wrapper + JSON schema)
    pub fn for_prompt(user_prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(build_prompt(user_prompt)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE.to_string(),
                response_schema: response_schema(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// Successful response body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Error body returned with non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Concatenated text of the first candidate's parts.
///
/// Returns `None` when there is no candidate or the text is empty.
pub fn extract_candidate_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Parse the model's text as a project description.
///
/// Tolerates a surrounding Markdown code fence, which some models add even
/// when JSON output is requested.
pub fn parse_project_payload(text: &str) -> Result<ProjectStructure, GenerationError> {
    if text.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    let json = strip_code_fence(text);
    serde_json::from_str(json).map_err(|e| GenerationError::parse(e.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening fence line
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

/// Human-readable message for a non-success response.
///
/// Prefers the service's own `error.message`, falling back to the raw body.
pub fn service_error_message(status: u16, body: &str) -> String {
    let detail = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => body.trim().to_string(),
    };
    if detail.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {detail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_parts(parts: &[&str]) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts: parts
                        .iter()
                        .map(|t| Part {
                            text: Some(t.to_string()),
                        })
                        .collect(),
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            prompt_feedback: None,
        }
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateContentRequest::for_prompt("a flask api");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
        let text = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("a flask api"));
    }

    #[test]
    fn test_extract_candidate_text_concatenates_parts() {
        let response = response_with_parts(&["{\"projectName\":", "\"x\"}"]);
        assert_eq!(
            extract_candidate_text(&response).as_deref(),
            Some("{\"projectName\":\"x\"}")
        );
    }

    #[test]
    fn test_extract_candidate_text_none_without_candidates() {
        assert!(extract_candidate_text(&GenerateContentResponse::default()).is_none());
    }

    #[test]
    fn test_extract_candidate_text_none_for_empty_text() {
        assert!(extract_candidate_text(&response_with_parts(&[""])).is_none());
    }

    #[test]
    fn test_deserialize_blocked_response() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert!(response.candidates.is_empty());
        assert_eq!(
            response.prompt_feedback.unwrap().block_reason.as_deref(),
            Some("SAFETY")
        );
    }

    #[test]
    fn test_parse_project_payload_valid() {
        let text = r##"{"projectName":"todo-app","description":"d","files":[{"path":"README.md","content":"# Todo"}]}"##;
        let project = parse_project_payload(text).unwrap();
        assert_eq!(project.project_name, "todo-app");
        assert_eq!(project.files.len(), 1);
    }

    #[test]
    fn test_parse_project_payload_malformed() {
        let err = parse_project_payload("{not json").unwrap_err();
        assert!(matches!(err, GenerationError::Parse { .. }));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_parse_project_payload_wrong_shape() {
        let err = parse_project_payload(r#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, GenerationError::Parse { .. }));
    }

    #[test]
    fn test_parse_project_payload_empty_is_empty_response() {
        assert_eq!(
            parse_project_payload("").unwrap_err(),
            GenerationError::EmptyResponse
        );
    }

    #[test]
    fn test_parse_project_payload_strips_code_fence() {
        let text = "```json\n{\"projectName\":\"x\",\"description\":\"\",\"files\":[]}\n```";
        let project = parse_project_payload(text).unwrap();
        assert_eq!(project.project_name, "x");
    }

    #[test]
    fn test_service_error_message_prefers_error_body() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(service_error_message(400, body), "HTTP 400: API key not valid.");
    }

    #[test]
    fn test_service_error_message_falls_back_to_raw_body() {
        assert_eq!(service_error_message(502, "Bad Gateway\n"), "HTTP 502: Bad Gateway");
        assert_eq!(service_error_message(500, ""), "HTTP 500");
    }
}
