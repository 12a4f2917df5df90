//! vivaprep-providers — embedding backend integrations.
//!
//! Implements the `Embedder` trait for the OpenAI and Ollama embedding APIs,
//! plus a deterministic offline mock for tests and demos.

pub mod config;
pub mod error;
pub mod mock;
pub mod ollama;
pub mod openai;

pub use config::{create_embedder, load_config, EmbedderConfig, VivaprepConfig};
pub use error::EmbedError;
