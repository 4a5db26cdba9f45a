use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::{ChatMessage, GenerateRequest, GenerateResponse, Provider};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat-completions provider speaking the OpenAI wire format. Each call is a
/// single HTTP request; failures are returned as-is.
pub struct OpenAIProvider {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    host: String,
    port: u16,
}

impl OpenAIProvider {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let (host, port) = match Url::parse(base_url) {
            Ok(url) => (
                url.host_str().unwrap_or("unknown").to_string(),
                url.port_or_known_default().unwrap_or(443),
            ),
            Err(_) => ("unknown".to_string(), 443),
        };

        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            endpoint: format!("{base_url}/chat/completions"),
            host,
            port,
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    model: String,
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Deserialize)]
struct OpenAIError {
    error: OpenAIErrorDetail,
}

#[derive(Deserialize)]
struct OpenAIErrorDetail {
    message: String,
}

#[async_trait::async_trait]
impl Provider for OpenAIProvider {
    async fn generate(&self, req: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        let body = ChatCompletionBody {
            model: &req.model,
            messages: &req.messages,
            temperature: req.temperature,
            max_tokens: req.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            if let Ok(err) = serde_json::from_str::<OpenAIError>(&error_body) {
                return Err(anyhow::anyhow!(
                    "OpenAI API error ({}): {}",
                    status,
                    err.error.message
                ));
            }
            return Err(anyhow::anyhow!(
                "OpenAI API error ({}): {}",
                status,
                error_body
            ));
        }

        let resp: ChatCompletionResponse = response.json().await?;

        let first = resp.choices.into_iter().next();
        let finish_reason = first
            .as_ref()
            .and_then(|c| c.finish_reason.clone())
            .unwrap_or_default();
        let content = first.and_then(|c| c.message.content).unwrap_or_default();

        let (input_tokens, output_tokens) = match &resp.usage {
            Some(usage) => (usage.prompt_tokens, usage.completion_tokens),
            None => (0, 0),
        };

        Ok(GenerateResponse {
            content,
            model: resp.model,
            input_tokens,
            output_tokens,
            cost_usd: 0.0,
            finish_reason,
            provider: String::new(),
        })
    }

    fn name(&self) -> &str {
        "openai"
    }

    fn server_address(&self) -> &str {
        &self.host
    }

    fn server_port(&self) -> u16 {
        self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            model: "gpt-4-1106-preview".to_string(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: 0.3,
            max_tokens: 3000,
            stage: "test".to_string(),
        }
    }

    #[test]
    fn test_server_from_base_url() {
        let provider = OpenAIProvider::new("key");
        assert_eq!(provider.server_address(), "api.openai.com");
        assert_eq!(provider.server_port(), 443);
        assert_eq!(
            provider.endpoint,
            "https://api.openai.com/v1/chat/completions"
        );

        let local = OpenAIProvider::with_base_url("key", "http://localhost:11434/v1/");
        assert_eq!(local.server_address(), "localhost");
        assert_eq!(local.server_port(), 11434);
        assert_eq!(local.endpoint, "http://localhost:11434/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_generate_parses_completion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4-1106-preview",
                "messages": [{"role": "user", "content": "hello"}],
                "temperature": 0.3,
                "max_tokens": 3000,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "created": 1700000000,
                "model": "gpt-4-1106-preview",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "1. Contexto"},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = OpenAIProvider::with_base_url("sk-test", &server.uri());
        let resp = provider.generate(&request("hello")).await.unwrap();

        assert_eq!(resp.content, "1. Contexto");
        assert_eq!(resp.model, "gpt-4-1106-preview");
        assert_eq!(resp.input_tokens, 120);
        assert_eq!(resp.output_tokens, 40);
        assert_eq!(resp.finish_reason, "stop");
    }

    #[tokio::test]
    async fn test_generate_surfaces_api_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "code": "invalid_api_key"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = OpenAIProvider::with_base_url("wrong", &server.uri());
        let err = provider.generate(&request("hello")).await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("401"), "{message}");
        assert!(message.contains("Incorrect API key provided"), "{message}");
    }

    #[tokio::test]
    async fn test_generate_does_not_retry_rate_limits() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .expect(1)
            .mount(&server)
            .await;

        let provider = OpenAIProvider::with_base_url("key", &server.uri());
        let err = provider.generate(&request("hello")).await.unwrap_err();

        assert!(err.to_string().contains("slow down"));
    }
}
