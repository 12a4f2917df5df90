//! The `vivaprep validate` command: the dataset smoke test.

use std::path::PathBuf;

use anyhow::Result;

use super::{load_bank, load_config};

pub fn execute(dataset: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let bank = load_bank(&config, dataset.as_ref())?;

    println!("Rows in dataset: {}", bank.len());

    println!("\nFirst questions:");
    for record in bank.records().iter().take(5) {
        println!("  [{}] {}", record.category, record.question);
    }

    let mut warnings = 0;
    for (row, record) in bank.records().iter().enumerate() {
        if record.question.trim().is_empty() {
            println!("  row {}: WARNING: empty question", row + 1);
            warnings += 1;
        }
        if record.ideal_answer.trim().is_empty() {
            println!("  row {}: WARNING: empty ideal answer", row + 1);
            warnings += 1;
        }
        if record.keywords.is_empty() {
            println!("  row {}: WARNING: no keywords", row + 1);
            warnings += 1;
        }
    }

    if warnings == 0 {
        println!("\nDataset OK.");
    } else {
        println!("\n{warnings} warning(s) found.");
    }

    Ok(())
}
