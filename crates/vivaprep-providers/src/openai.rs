//! OpenAI embeddings API backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use vivaprep_core::traits::Embedder;

use crate::error::EmbedError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "text-embedding-3-small";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// OpenAI embeddings API backend.
pub struct OpenAiEmbedder {
    api_key: String,
    base_url: String,
    model: String,
    dims: usize,
    client: reqwest::Client,
}

impl OpenAiEmbedder {
    pub fn new(
        api_key: &str,
        base_url: Option<String>,
        model: Option<String>,
        dimensions: Option<usize>,
    ) -> Self {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let dims = dimensions.unwrap_or(match model.as_str() {
            "text-embedding-3-small" => 1536,
            "text-embedding-3-large" => 3072,
            _ => 1536,
        });

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.to_string(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model,
            dims,
            client,
        }
    }
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    fn name(&self) -> &str {
        "openai"
    }

    #[instrument(skip(self, text), fields(model = %self.model, chars = text.len()))]
    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        let body = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        let response = self
            .client
            .post(format!("{}/v1/embeddings", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EmbedError::Timeout(DEFAULT_TIMEOUT_SECS)
                } else {
                    EmbedError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status == 401 {
            return Err(EmbedError::AuthenticationFailed(
                "invalid OpenAI API key".to_string(),
            )
            .into());
        }
        if status == 404 {
            return Err(EmbedError::ModelNotFound(self.model.clone()).into());
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbedError::ApiError {
                status,
                message: body,
            }
            .into());
        }

        let api_response: EmbeddingResponse =
            response.json().await.map_err(|e| EmbedError::ApiError {
                status: 0,
                message: format!("failed to parse response: {e}"),
            })?;

        api_response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| {
                EmbedError::ApiError {
                    status: 0,
                    message: "response contained no embedding".to_string(),
                }
                .into()
            })
    }

    fn dimensions(&self) -> usize {
        self.dims
    }
}
