use super::types::*;
use super::JokeClient;
use crate::error::{JokeError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

const DEEPSEEK_API_BASE: &str = "https://api.deepseek.com";
pub const DEEPSEEK_CHAT_MODEL: &str = "deepseek-chat";

#[derive(Clone)]
pub struct DeepSeekClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl DeepSeekClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEEPSEEK_API_BASE)
    }

    pub fn with_base_url(api_key: &str, base_url: impl Into<String>) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| JokeError::ClientConstruction(format!("Invalid API key: {}", e)))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| {
                JokeError::ClientConstruction(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: DEEPSEEK_CHAT_MODEL.to_string(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = self.completions_url();
        tracing::debug!(model = %request.model, url = %url, "Sending chat completion");

        let response = self.client.post(&url).json(request).send().await?;
        let response = check_response_status(response).await?;
        let parsed: ChatCompletionResponse = response.json().await?;

        tracing::debug!(
            id = parsed.id.as_deref().unwrap_or("-"),
            model = parsed.model.as_deref().unwrap_or("-"),
            choices = parsed.choices.len(),
            "Chat completion received"
        );
        Ok(parsed)
    }
}

impl JokeClient for DeepSeekClient {
    async fn tell(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![Message::user(prompt)],
            stream: false,
        };

        let response = self.create_chat_completion(&request).await?;
        first_choice_text(response)
    }
}

async fn check_response_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        tracing::error!(status = %status, error = %error_text, "DeepSeek request failed");
        return Err(JokeError::Api(format!(
            "request failed with status {}: {}",
            status, error_text
        )));
    }
    Ok(response)
}

/// Text of the first choice; a choice with null content reads as empty
fn first_choice_text(response: ChatCompletionResponse) -> Result<String> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(JokeError::EmptyResponse)?;

    if let Some(reason) = choice.finish_reason.as_deref() {
        if reason != "stop" {
            tracing::warn!(finish_reason = reason, "Joke may be incomplete");
        }
    }

    Ok(choice.message.content.unwrap_or_default())
}
