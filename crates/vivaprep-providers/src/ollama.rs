//! Ollama (local) embeddings backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use vivaprep_core::traits::Embedder;

use crate::error::EmbedError;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "nomic-embed-text";
const DEFAULT_TIMEOUT_SECS: u64 = 120; // Local models are slower

/// Ollama local embeddings backend.
pub struct OllamaEmbedder {
    base_url: String,
    model: String,
    dims: usize,
    client: reqwest::Client,
}

impl OllamaEmbedder {
    pub fn new(base_url: &str, model: Option<String>, dimensions: Option<usize>) -> Self {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base.to_string(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            dims: dimensions.unwrap_or(768),
            client,
        }
    }
}

#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct OllamaResponse {
    embedding: Vec<f32>,
}

#[async_trait]
impl Embedder for OllamaEmbedder {
    fn name(&self) -> &str {
        "ollama"
    }

    #[instrument(skip(self, text), fields(model = %self.model, chars = text.len()))]
    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        let body = OllamaRequest {
            model: &self.model,
            prompt: text,
        };

        let response = self
            .client
            .post(format!("{}/api/embeddings", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EmbedError::Timeout(DEFAULT_TIMEOUT_SECS)
                } else if e.is_connect() {
                    EmbedError::NetworkError(format!(
                        "Ollama not reachable at {}. Is it running? Start with: ollama serve",
                        self.base_url
                    ))
                } else {
                    EmbedError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status == 404 {
            return Err(EmbedError::ModelNotFound(format!(
                "Model '{}' not found locally. Pull it with: ollama pull {}",
                self.model, self.model
            ))
            .into());
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbedError::ApiError {
                status,
                message: body,
            }
            .into());
        }

        let api_response: OllamaResponse =
            response.json().await.map_err(|e| EmbedError::ApiError {
                status: 0,
                message: format!("failed to parse response: {e}"),
            })?;

        Ok(api_response.embedding)
    }

    fn dimensions(&self) -> usize {
        self.dims
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn successful_embedding() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "embedding": [0.5, 0.5, 0.0]
        });

        Mock::given(method("POST"))
            .and(path("/api/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let embedder = OllamaEmbedder::new(&server.uri(), None, Some(3));
        let vector = embedder.embed("an answer").await.unwrap();
        assert_eq!(vector, vec![0.5, 0.5, 0.0]);
    }

    #[tokio::test]
    async fn model_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/embeddings"))
            .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
            .mount(&server)
            .await;

        let embedder =
            OllamaEmbedder::new(&server.uri(), Some("nonexistent".to_string()), None);
        let err = embedder.embed("text").await.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn empty_base_url_falls_back_to_default() {
        let embedder = OllamaEmbedder::new("", None, None);
        assert_eq!(embedder.base_url, DEFAULT_BASE_URL);
        assert_eq!(embedder.dimensions(), 768);
    }
}
