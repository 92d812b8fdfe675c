use crate::prelude::*;
use feature_matrix_core::gemini::{
    parse_api_error, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// A Gemini API key. The value never shows up in `Debug` output.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Fails when the key is absent or blank.
    pub fn resolve(value: Option<&str>) -> Result<Self, Error> {
        match value.map(str::trim) {
            Some(key) if !key.is_empty() => Ok(Self(key.to_string())),
            _ => Err(Error::MissingApiKey),
        }
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Anything that can turn a prompt into a `generateContent` response.
pub trait GenerativeModel {
    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse>;
}

/// HTTP client for a single Gemini model
#[derive(Debug)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: ApiKey,
    base_url: String,
    model: String,
    generation_config: GenerationConfig,
}

impl GeminiClient {
    pub fn new(api_key: ApiKey, base_url: &str, model: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(f!("feature-matrix/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            generation_config: GenerationConfig::default(),
        })
    }

    fn endpoint(&self) -> String {
        f!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl GenerativeModel for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse> {
        let request = GenerateContentRequest::from_prompt(prompt, self.generation_config);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose())
            .json(&request)
            .send()
            .await
            .context("Failed to send request to the Gemini API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: parse_api_error(&body),
            }
            .into());
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .context("Failed to parse Gemini API response")
    }
}
