//! The `vivaprep drill` command: one synchronous pass through a session.
//!
//! Reads category and question count from stdin, asks each question in turn
//! with full per-answer feedback (similarity score, missing keywords,
//! sentiment), then prints the average and a review of every answer.

use std::path::PathBuf;

use anyhow::Result;

use vivaprep_core::error::CoreError;
use vivaprep_core::model::Evaluation;
use vivaprep_core::session::SessionController;

use super::{build_evaluator, format_keywords, load_bank, load_config, read_line};

/// One question's worth of transcript, kept for the final review.
struct ReviewEntry {
    question: String,
    answer: String,
    ideal_answer: String,
    evaluation: Evaluation,
}

pub async fn execute(
    dataset: Option<PathBuf>,
    provider: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let bank = load_bank(&config, dataset.as_ref())?;
    let evaluator = build_evaluator(&config, provider.as_deref())?;
    tracing::info!(backend = evaluator.backend(), "using embedding backend");

    println!("vivaprep — interview practice");
    println!("Loaded {} questions.", bank.len());
    println!("Available categories: {}", bank.categories().join(", "));
    println!();

    let category = read_line("Choose a category (or press Enter for any): ")?;
    let category = if category.is_empty() {
        None
    } else {
        Some(category)
    };

    // Non-integer input silently falls back to the configured default.
    let count = read_line("How many questions? ")?
        .parse::<usize>()
        .unwrap_or(config.default_question_count);

    let mut session = SessionController::new(bank);
    match session.start(category.as_deref(), count) {
        Ok(()) => {}
        Err(CoreError::EmptyCategory(cat)) => {
            println!("No questions found for category '{cat}'.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let mut review = Vec::with_capacity(session.question_count());

    while let Some((index, record)) = session.current().map(|(i, r)| (i, r.clone())) {
        println!("\n--- Question {} ---", index + 1);
        println!("{}", record.question);
        let answer = read_line("Your answer: ")?;

        let evaluation = evaluator.evaluate(&answer, &record).await?;
        println!("\nEvaluation:");
        println!("  Similarity score: {:.2}/10", evaluation.similarity);
        println!(
            "  Missing keywords: {}",
            format_keywords(&evaluation.missing_keywords)
        );
        println!("  Sentiment: {}", evaluation.sentiment);

        session.record(evaluation.similarity)?;
        review.push(ReviewEntry {
            question: record.question,
            answer,
            ideal_answer: record.ideal_answer,
            evaluation,
        });
    }

    println!("\nInterview complete!");
    if let Some(average) = session.average() {
        println!("Your average score: {average:.2}/10");
    }

    println!("\nReview & ideal answers:");
    for (number, entry) in review.iter().enumerate() {
        println!("\nQ{}: {}", number + 1, entry.question);
        println!("Your answer: {}", entry.answer);
        println!("Ideal answer: {}", entry.ideal_answer);
        println!("Score: {:.2}/10", entry.evaluation.similarity);
        println!(
            "Missing keywords: {}",
            format_keywords(&entry.evaluation.missing_keywords)
        );
        println!("Sentiment: {}", entry.evaluation.sentiment);
    }

    Ok(())
}
