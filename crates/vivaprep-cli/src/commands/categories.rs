//! The `vivaprep categories` command.

use std::path::PathBuf;

use anyhow::Result;

use super::{load_bank, load_config};

pub fn execute(dataset: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let bank = load_bank(&config, dataset.as_ref())?;

    // Counts match the sampler's case-insensitive category filter, so
    // mixed-case spellings fold into a single line.
    let mut listed: Vec<String> = Vec::new();
    for category in bank.categories() {
        if listed.iter().any(|c| c.eq_ignore_ascii_case(&category)) {
            continue;
        }
        let count = bank
            .records()
            .iter()
            .filter(|r| r.category.eq_ignore_ascii_case(&category))
            .count();
        println!("{category} ({count} questions)");
        listed.push(category);
    }
    println!("\n{} questions total.", bank.len());

    Ok(())
}
