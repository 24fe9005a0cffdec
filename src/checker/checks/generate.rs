//! Checks for the `POST /api/generate` endpoint: the service must reject
//! incomplete payloads with `400` and surface a downstream rejection of an
//! invalid API key as `500`.
use reqwest::StatusCode;
use serde::Serialize;

use crate::checker::printer::Printer;
use crate::checker::service::{Method, Outcome, Service};

const ENDPOINT: &str = "api/generate";

// Fixed probe payload. The key is syntactically well-formed but can never be
// accepted by the downstream provider.
const INVALID_API_KEY: &str = "invalid_key_12345";
const PROBE_MODEL: &str = "gemini-1.5-flash";
const PROBE_PROMPT: &str = "Create a simple button component";
const PROBE_TYPE: &str = "component";

/// Request body for `POST /api/generate`. Absent fields are omitted from the
/// serialized payload, which is how the partial-payload checks are built.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl GenerateRequest {
    fn into_body(self) -> serde_json::Value {
        serde_json::to_value(self).expect("a generate request should serialize to JSON")
    }
}

/// Runs the three generation checks in order. None of them is fatal to the
/// run.
pub async fn run<P: Printer>(service: &mut Service<P>) {
    missing_params(service).await;
    partial_payload(service).await;
    invalid_key(service).await;
}

/// An empty body must be rejected as a bad request.
pub async fn missing_params<P: Printer>(service: &mut Service<P>) -> Outcome {
    service
        .run_check(
            "Generate without params",
            Method::Post,
            ENDPOINT,
            StatusCode::BAD_REQUEST,
            Some(GenerateRequest::default().into_body()),
            None,
        )
        .await
}

/// A payload carrying only a prompt must still be rejected as a bad request.
pub async fn partial_payload<P: Printer>(service: &mut Service<P>) -> Outcome {
    let request = GenerateRequest {
        prompt: Some(PROBE_PROMPT.to_string()),
        ..GenerateRequest::default()
    };

    service
        .run_check(
            "Generate with partial payload",
            Method::Post,
            ENDPOINT,
            StatusCode::BAD_REQUEST,
            Some(request.into_body()),
            None,
        )
        .await
}

/// A complete payload with an invalid API key is expected to fail inside the
/// downstream provider call and surface as a server error.
pub async fn invalid_key<P: Printer>(service: &mut Service<P>) -> Outcome {
    let request = GenerateRequest {
        api_key: Some(INVALID_API_KEY.to_string()),
        model: Some(PROBE_MODEL.to_string()),
        prompt: Some(PROBE_PROMPT.to_string()),
        kind: Some(PROBE_TYPE.to_string()),
    };

    service
        .run_check(
            "Generate with invalid key",
            Method::Post,
            ENDPOINT,
            StatusCode::INTERNAL_SERVER_ERROR,
            Some(request.into_body()),
            None,
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::GenerateRequest;

    #[test]
    fn an_empty_request_should_serialize_to_an_empty_object() {
        let body = GenerateRequest::default().into_body();

        assert_eq!(body, serde_json::json!({}));
    }

    #[test]
    fn absent_fields_should_be_omitted_from_the_payload() {
        let request = GenerateRequest {
            prompt: Some("Create a simple button component".to_string()),
            ..GenerateRequest::default()
        };

        let body = request.into_body();

        assert_eq!(body, serde_json::json!({"prompt": "Create a simple button component"}));
    }

    #[test]
    fn field_names_should_match_the_service_schema() {
        let request = GenerateRequest {
            api_key: Some("key".to_string()),
            model: Some("model".to_string()),
            prompt: Some("prompt".to_string()),
            kind: Some("component".to_string()),
        };

        let body = request.into_body();

        assert_eq!(
            body,
            serde_json::json!({
                "apiKey": "key",
                "model": "model",
                "prompt": "prompt",
                "type": "component"
            })
        );
    }
}
