//! Subcommand implementations and shared helpers.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use vivaprep_core::evaluate::Evaluator;
use vivaprep_core::store::QuestionBank;
use vivaprep_providers::config::{create_embedder, load_config_from, VivaprepConfig};

pub mod categories;
pub mod drill;
pub mod init;
pub mod practice;
pub mod validate;

/// Load config from the explicit path or the default search locations.
pub(crate) fn load_config(path: Option<&Path>) -> Result<VivaprepConfig> {
    load_config_from(path)
}

/// Load the question bank, preferring the --dataset flag over the config.
pub(crate) fn load_bank(
    config: &VivaprepConfig,
    dataset_flag: Option<&PathBuf>,
) -> Result<QuestionBank> {
    let path = dataset_flag.unwrap_or(&config.dataset);
    let bank = QuestionBank::load_csv(path)
        .with_context(|| format!("failed to load dataset {}", path.display()))?;
    Ok(bank)
}

/// Build the evaluator from the named backend (or the config default).
pub(crate) fn build_evaluator(
    config: &VivaprepConfig,
    provider_flag: Option<&str>,
) -> Result<Evaluator> {
    let name = provider_flag.unwrap_or(&config.default_provider);
    let backend_config = config.providers.get(name).with_context(|| {
        format!(
            "provider '{}' not found in config. Available: {:?}",
            name,
            config.providers.keys().collect::<Vec<_>>()
        )
    })?;
    let embedder = create_embedder(backend_config)?;
    Ok(Evaluator::new(Arc::from(embedder)))
}

/// Print a prompt and read one trimmed line from stdin. Returns an empty
/// string at end of input.
pub(crate) fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Render a keyword list for the transcript.
pub(crate) fn format_keywords(keywords: &[String]) -> String {
    if keywords.is_empty() {
        "none".to_string()
    } else {
        keywords.join(", ")
    }
}
