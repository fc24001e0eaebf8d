//! HTTP client for the generation API.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{PromptCraftError, Result};
use crate::prompt::{FIELD_NAMES, StructuredPrompt};

/// Instruction prepended to every generation request. The model must answer
/// with a JSON object containing exactly the five section keys.
const META_PROMPT: &str = r#"
You are an expert-level AI Prompt Engineer named 'PromptCraft'. Your sole function is to generate a detailed, structured, and optimized prompt for another AI model based on a user's simple use case.

When you receive a use case, you MUST generate a prompt in a structured JSON format. The JSON object must contain exactly these five keys: "persona", "task", "context", "format", "constraints".

- persona: Define the persona the AI should adopt.
- task: Clearly and concisely state the primary objective.
- context: Provide background with [User to insert ...] placeholders.
- format: Specify the exact output format.
- constraints: Define the rules and limitations.

Analyze the following user use case and generate the structured JSON output. Do NOT include any other text or explanations outside of the JSON object.

USER USE CASE:
"#;

const X_GOOG_API_KEY: &str = "x-goog-api-key";

/// Doubling stops here; further retries wait 1024x the base delay.
const MAX_BACKOFF_EXPONENT: u32 = 10;

/// Delay before the given retry attempt (1-based). Saturates instead of
/// overflowing for large attempt counts or base delays.
fn backoff_delay(base_ms: u64, attempt: u32) -> u64 {
    let exponent = attempt.saturating_sub(1).min(MAX_BACKOFF_EXPONENT);
    base_ms.saturating_mul(1_u64 << exponent)
}

/// Blocking HTTP client for the generateContent endpoint.
pub struct GenerationClient {
    api_key: String,
    endpoint: String,
    max_retries: u32,
    retry_delay_ms: u64,
    client: Client,
}

impl std::fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationClient")
            .field("endpoint", &self.endpoint)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl GenerationClient {
    /// Create a client with an explicit API key.
    pub fn new(api_key: String, config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                PromptCraftError::UserError(format!("failed to create HTTP client: {}", e))
            })?;

        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.api_base_url.as_str().trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            api_key,
            endpoint,
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
            client,
        })
    }

    /// Create a client reading the API key from the configured environment
    /// variable.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            PromptCraftError::UserError(format!(
                "{} environment variable not set",
                config.api_key_env
            ))
        })?;

        Self::new(api_key, config)
    }

    /// Generate a structured prompt for a use case.
    ///
    /// Retries retryable failures (timeouts, connection errors, 429, 5xx)
    /// with exponential backoff. Malformed model output is an API error, not
    /// a retryable one.
    pub fn generate(&self, use_case: &str) -> Result<StructuredPrompt> {
        let use_case = use_case.trim();
        if use_case.is_empty() {
            return Err(PromptCraftError::UserError(
                "use case cannot be empty".to_string(),
            ));
        }

        let request = ApiRequest::for_use_case(use_case);

        let mut last_error = None;
        let max_attempts = self.max_retries.max(1);

        for attempt in 0..max_attempts {
            if attempt > 0 {
                let delay = backoff_delay(self.retry_delay_ms, attempt);
                std::thread::sleep(Duration::from_millis(delay));
                eprintln!("Retrying... (attempt {}/{})", attempt + 1, max_attempts);
            }

            match self.send_request(&request) {
                Ok(prompt) => return Ok(prompt),
                Err(RequestError::Retryable(message)) => {
                    last_error = Some(message);
                }
                Err(RequestError::Fatal(err)) => return Err(err),
            }
        }

        Err(PromptCraftError::ApiError(format!(
            "gave up after {} attempts: {}",
            max_attempts,
            last_error.unwrap_or_else(|| "unknown error".to_string())
        )))
    }

    fn send_request(&self, request: &ApiRequest) -> std::result::Result<StructuredPrompt, RequestError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    RequestError::Retryable(e.to_string())
                } else {
                    RequestError::Fatal(PromptCraftError::ApiError(e.to_string()))
                }
            })?;

        let status = response.status();
        if status.as_u16() == 429 || status.is_server_error() {
            return Err(RequestError::Retryable(format!("API returned {}", status)));
        }
        if !status.is_success() {
            return Err(RequestError::Fatal(PromptCraftError::ApiError(format!(
                "API returned {}",
                status
            ))));
        }

        let payload: ApiResponse = response.json().map_err(|e| {
            RequestError::Fatal(PromptCraftError::ApiError(format!(
                "invalid response body: {}",
                e
            )))
        })?;

        let text = payload
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.as_str())
            .ok_or_else(|| {
                RequestError::Fatal(PromptCraftError::ApiError(
                    "model returned an empty response".to_string(),
                ))
            })?;

        parse_structured_prompt(text).map_err(RequestError::Fatal)
    }
}

/// Internal classification of request failures for the retry loop.
enum RequestError {
    Retryable(String),
    Fatal(PromptCraftError),
}

/// Parse model output into a structured prompt.
///
/// The model's JSON must be an object whose key set is exactly the five
/// section names; anything else is reported as an API error rather than
/// silently coerced.
fn parse_structured_prompt(text: &str) -> Result<StructuredPrompt> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|_| PromptCraftError::ApiError("model returned invalid JSON".to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| PromptCraftError::ApiError("model JSON is not an object".to_string()))?;

    let keys_match = object.len() == FIELD_NAMES.len()
        && FIELD_NAMES.iter().all(|key| object.contains_key(*key));
    if !keys_match {
        return Err(PromptCraftError::ApiError(
            "model JSON missing required keys".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| PromptCraftError::ApiError(format!("model JSON has invalid fields: {}", e)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

impl ApiRequest {
    fn for_use_case(use_case: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: format!("{}\"{}\"", META_PROMPT, use_case),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;

    fn test_config(server_url: &str) -> Config {
        Config {
            api_base_url: Url::parse(server_url).unwrap(),
            max_retries: 2,
            retry_delay_ms: 1,
            ..Config::default()
        }
    }

    fn test_client(server_url: &str) -> GenerationClient {
        GenerationClient::new("test-key".to_string(), &test_config(server_url)).unwrap()
    }

    fn candidates_body(prompt_json: &serde_json::Value) -> String {
        json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": prompt_json.to_string() }]
                }
            }]
        })
        .to_string()
    }

    const ENDPOINT_PATH: &str = "/models/gemini-1.5-flash:generateContent";

    #[test]
    fn generate_parses_a_valid_response() {
        let mut server = mockito::Server::new();
        let body = candidates_body(&json!({
            "persona": "p", "task": "t", "context": "c",
            "format": "f", "constraints": "k"
        }));
        let mock = server
            .mock("POST", ENDPOINT_PATH)
            .match_header(X_GOOG_API_KEY, "test-key")
            .with_status(200)
            .with_body(body)
            .create();

        let prompt = test_client(&server.url()).generate("a launch email").unwrap();

        assert_eq!(prompt.persona, "p");
        assert_eq!(prompt.constraints, "k");
        mock.assert();
    }

    #[test]
    fn empty_use_case_is_rejected_without_a_request() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", ENDPOINT_PATH).expect(0).create();

        let result = test_client(&server.url()).generate("   ");

        assert!(matches!(result, Err(PromptCraftError::UserError(_))));
        mock.assert();
    }

    #[test]
    fn invalid_model_json_is_an_api_error() {
        let mut server = mockito::Server::new();
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "not json at all" }] }
            }]
        })
        .to_string();
        let _mock = server
            .mock("POST", ENDPOINT_PATH)
            .with_status(200)
            .with_body(body)
            .create();

        let result = test_client(&server.url()).generate("x");

        assert!(matches!(result, Err(PromptCraftError::ApiError(_))));
    }

    #[test]
    fn missing_keys_in_model_json_is_an_api_error() {
        let mut server = mockito::Server::new();
        let body = candidates_body(&json!({ "persona": "p", "task": "t" }));
        let _mock = server
            .mock("POST", ENDPOINT_PATH)
            .with_status(200)
            .with_body(body)
            .create();

        let result = test_client(&server.url()).generate("x");

        assert!(matches!(result, Err(PromptCraftError::ApiError(_))));
    }

    #[test]
    fn empty_candidates_is_an_api_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", ENDPOINT_PATH)
            .with_status(200)
            .with_body(r#"{"candidates": []}"#)
            .create();

        let result = test_client(&server.url()).generate("x");

        assert!(matches!(result, Err(PromptCraftError::ApiError(_))));
    }

    #[test]
    fn server_errors_are_retried_then_surfaced() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", ENDPOINT_PATH)
            .with_status(500)
            .expect(2)
            .create();

        let result = test_client(&server.url()).generate("x");

        assert!(matches!(result, Err(PromptCraftError::ApiError(_))));
        mock.assert();
    }

    #[test]
    fn client_errors_are_not_retried() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", ENDPOINT_PATH)
            .with_status(400)
            .expect(1)
            .create();

        let result = test_client(&server.url()).generate("x");

        assert!(matches!(result, Err(PromptCraftError::ApiError(_))));
        mock.assert();
    }

    #[test]
    fn parse_rejects_extra_keys() {
        let text = json!({
            "persona": "p", "task": "t", "context": "c",
            "format": "f", "constraints": "k", "extra": "e"
        })
        .to_string();

        assert!(parse_structured_prompt(&text).is_err());
    }

    #[test]
    fn parse_accepts_exactly_the_five_keys() {
        let text = json!({
            "persona": "p", "task": "t", "context": "c",
            "format": "f", "constraints": "k"
        })
        .to_string();

        let prompt = parse_structured_prompt(&text).unwrap();
        assert_eq!(prompt.task, "t");
    }

    #[test]
    fn backoff_doubles_per_attempt() {
        assert_eq!(backoff_delay(500, 1), 500);
        assert_eq!(backoff_delay(500, 2), 1000);
        assert_eq!(backoff_delay(500, 3), 2000);
    }

    #[test]
    fn backoff_exponent_is_capped() {
        assert_eq!(backoff_delay(500, 11), backoff_delay(500, 11_000));
        assert_eq!(backoff_delay(500, u32::MAX), 500 * 1024);
    }

    #[test]
    fn backoff_saturates_for_huge_base_delays() {
        assert_eq!(backoff_delay(u64::MAX, 64), u64::MAX);
    }

    #[test]
    fn debug_output_redacts_the_api_key() {
        let client = test_client("http://localhost:1234");
        let debug = format!("{:?}", client);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("test-key"));
    }
}
