pub mod prompt;
pub mod tools;

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::web::models::{Message, Mode};
use self::tools::{Tool, ToolChoice};

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Completion {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    // Truncated choices may arrive without a message.
    #[serde(default)]
    pub message: CompletionMessage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    pub function: FunctionCall,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded arguments, as sent by the gateway.
    pub arguments: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Builds the upstream body. Pure in its inputs.
pub fn build_request(model: &str, mode: Mode, messages: &[Message]) -> CompletionRequest {
    let (tools, tool_choice) = match mode {
        Mode::Chat => (None, None),
        Mode::Suggest => (
            Some(vec![tools::suggest_faqs_tool()]),
            Some(tools::force_suggest_faqs()),
        ),
    };

    CompletionRequest {
        model: model.to_string(),
        messages: prompt::assemble_messages(messages),
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
        tools,
        tool_choice,
    }
}

/// Maps a non-success gateway status to the relay's error taxonomy.
pub fn classify_failure(status: u16, body: String) -> RelayError {
    match status {
        429 => RelayError::RateLimited,
        402 => RelayError::QuotaExhausted,
        _ => RelayError::Upstream { status, body },
    }
}

#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, RelayError>;
}

// OpenAI-compatible chat completion endpoint reached over HTTPS
pub struct HttpGateway {
    url: String,
    api_key: Option<String>,
    client: Client,
}

impl HttpGateway {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        info!("Using AI gateway at: {}", config.gateway_url);

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            url: config.gateway_url.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }
}

#[async_trait]
impl ChatGateway for HttpGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, RelayError> {
        let api_key = self.api_key.as_deref().ok_or(RelayError::MissingCredential)?;

        debug!("Payload: {:?}", request);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    error!("Failed to read AI Gateway error body: {}", e);
                    String::new()
                }
            };
            error!("AI Gateway error: {} {}", status.as_u16(), error_text);
            return Err(classify_failure(status.as_u16(), error_text));
        }

        let response_text = response.text().await?;
        debug!("Response JSON: {}", response_text);

        let completion: Completion = serde_json::from_str(&response_text)?;
        Ok(completion)
    }
}
