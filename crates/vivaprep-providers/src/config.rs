//! Configuration and embedder factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use vivaprep_core::traits::Embedder;

use crate::mock::MockEmbedder;
use crate::ollama::OllamaEmbedder;
use crate::openai::OpenAiEmbedder;

/// Configuration for a single embedding backend.
///
/// Note: Custom Debug impl masks API keys to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EmbedderConfig {
    OpenAI {
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        dimensions: Option<usize>,
    },
    Ollama {
        #[serde(default = "default_ollama_url")]
        base_url: String,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        dimensions: Option<usize>,
    },
    /// Deterministic offline embedder; useful for tests and demos.
    Mock,
}

impl std::fmt::Debug for EmbedderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbedderConfig::OpenAI {
                api_key: _,
                base_url,
                model,
                dimensions,
            } => f
                .debug_struct("OpenAI")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .field("model", model)
                .field("dimensions", dimensions)
                .finish(),
            EmbedderConfig::Ollama {
                base_url,
                model,
                dimensions,
            } => f
                .debug_struct("Ollama")
                .field("base_url", base_url)
                .field("model", model)
                .field("dimensions", dimensions)
                .finish(),
            EmbedderConfig::Mock => f.debug_struct("Mock").finish(),
        }
    }
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

/// Top-level vivaprep configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VivaprepConfig {
    /// Embedding backend configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, EmbedderConfig>,
    /// Default backend to use.
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Path to the question dataset CSV.
    #[serde(default = "default_dataset")]
    pub dataset: PathBuf,
    /// Question count substituted when console input is not a number.
    #[serde(default = "default_question_count")]
    pub default_question_count: usize,
}

fn default_provider() -> String {
    "openai".to_string()
}
fn default_dataset() -> PathBuf {
    PathBuf::from("questions.csv")
}
fn default_question_count() -> usize {
    5
}

impl Default for VivaprepConfig {
    fn default() -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider(),
            dataset: default_dataset(),
            default_question_count: default_question_count(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in a backend config.
fn resolve_embedder_config(config: &EmbedderConfig) -> EmbedderConfig {
    match config {
        EmbedderConfig::OpenAI {
            api_key,
            base_url,
            model,
            dimensions,
        } => EmbedderConfig::OpenAI {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
            model: model.clone(),
            dimensions: *dimensions,
        },
        EmbedderConfig::Ollama {
            base_url,
            model,
            dimensions,
        } => EmbedderConfig::Ollama {
            base_url: resolve_env_vars(base_url),
            model: model.clone(),
            dimensions: *dimensions,
        },
        EmbedderConfig::Mock => EmbedderConfig::Mock,
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `vivaprep.toml` in the current directory
/// 2. `~/.config/vivaprep/config.toml`
///
/// Environment variable override: `VIVAPREP_OPENAI_KEY`.
pub fn load_config() -> Result<VivaprepConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<VivaprepConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("vivaprep.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<VivaprepConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => VivaprepConfig::default(),
    };

    // Apply env var override
    if let Ok(key) = std::env::var("VIVAPREP_OPENAI_KEY") {
        config
            .providers
            .entry("openai".into())
            .or_insert(EmbedderConfig::OpenAI {
                api_key: String::new(),
                base_url: None,
                model: None,
                dimensions: None,
            });
        if let Some(EmbedderConfig::OpenAI { api_key, .. }) = config.providers.get_mut("openai") {
            *api_key = key;
        }
    }

    // Resolve env vars in all backend configs
    let resolved: HashMap<String, EmbedderConfig> = config
        .providers
        .iter()
        .map(|(k, v)| (k.clone(), resolve_embedder_config(v)))
        .collect();
    config.providers = resolved;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("vivaprep"))
}

/// Create an embedder instance from its configuration.
pub fn create_embedder(config: &EmbedderConfig) -> Result<Box<dyn Embedder>> {
    match config {
        EmbedderConfig::OpenAI {
            api_key,
            base_url,
            model,
            dimensions,
        } => Ok(Box::new(OpenAiEmbedder::new(
            api_key,
            base_url.clone(),
            model.clone(),
            *dimensions,
        ))),
        EmbedderConfig::Ollama {
            base_url,
            model,
            dimensions,
        } => Ok(Box::new(OllamaEmbedder::new(
            base_url,
            model.clone(),
            *dimensions,
        ))),
        EmbedderConfig::Mock => Ok(Box::new(MockEmbedder::new())),
    }
}
