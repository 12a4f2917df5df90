//! The `vivaprep practice` command: the interactive stateful session.
//!
//! Each user action runs one step against a persistent session controller:
//! start (category picked from an enumerated list plus "any", question count
//! bounded by the dataset), one answer per question with score-only feedback,
//! a final report table, and a restart action that clears the session.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use vivaprep_core::session::{SessionController, SessionPhase};
use vivaprep_core::store::QuestionBank;

use super::{build_evaluator, load_bank, load_config, read_line};

pub async fn execute(
    dataset: Option<PathBuf>,
    provider: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let bank = load_bank(&config, dataset.as_ref())?;
    let evaluator = build_evaluator(&config, provider.as_deref())?;
    tracing::info!(backend = evaluator.backend(), "using embedding backend");

    println!("vivaprep — interview practice (interactive)");

    let mut session = SessionController::new(bank);

    loop {
        match session.phase() {
            SessionPhase::Setup => {
                if !run_setup(&mut session, config.default_question_count)? {
                    return Ok(());
                }
            }
            SessionPhase::Asking(index) => {
                let (question, ideal_answer) = {
                    let (_, record) = session.current().expect("asking phase has a question");
                    (record.question.clone(), record.ideal_answer.clone())
                };
                println!(
                    "\nQuestion {}/{}: {}",
                    index + 1,
                    session.question_count(),
                    question
                );
                let answer = read_line("Your answer: ")?;
                let score = evaluator.similarity(&answer, &ideal_answer).await?;
                println!("Score: {score:.2}/10");
                session.record(score)?;
            }
            SessionPhase::Complete => {
                print_report(&session);
                let again = read_line("\nRestart? [y/N]: ")?;
                if again.eq_ignore_ascii_case("y") {
                    session.restart();
                } else {
                    return Ok(());
                }
            }
        }
    }
}

/// Collect category and count, then start the session. Returns `false` if
/// the user quit at the category prompt.
fn run_setup(session: &mut SessionController, default_count: usize) -> Result<bool> {
    let categories = session.bank().categories();

    loop {
        println!("\nSetup — choose a category:");
        println!("  0) Any");
        for (i, cat) in categories.iter().enumerate() {
            println!("  {}) {}", i + 1, cat);
        }

        let choice = read_line("Category number (or q to quit): ")?;
        if choice.eq_ignore_ascii_case("q") {
            return Ok(false);
        }
        let category: Option<String> = match choice.parse::<usize>() {
            Ok(0) => None,
            Ok(n) if n <= categories.len() => Some(categories[n - 1].clone()),
            _ => {
                println!("Please enter a number between 0 and {}.", categories.len());
                continue;
            }
        };

        let available = available_for(session.bank(), category.as_deref());
        let count = match read_line(&format!(
            "How many questions? [1-{available}, default {default_count}]: "
        ))?
        .parse::<usize>()
        {
            Ok(n) => n,
            Err(_) => default_count.min(available),
        };

        match session.start(category.as_deref(), count) {
            Ok(()) => return Ok(true),
            Err(e) if e.is_user_input() => {
                println!("{e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// How many questions match the given category filter.
fn available_for(bank: &QuestionBank, category: Option<&str>) -> usize {
    match category {
        Some(cat) => bank
            .records()
            .iter()
            .filter(|r| r.category.eq_ignore_ascii_case(cat))
            .count(),
        None => bank.len(),
    }
}

fn print_report(session: &SessionController) {
    println!("\nInterview complete!");
    if let Some(average) = session.average() {
        println!("Your average score: {average:.2}/10");
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Ideal answer", "Score"]);
    for (number, (record, score)) in session.review().enumerate() {
        table.add_row(vec![
            Cell::new(number + 1),
            Cell::new(&record.question),
            Cell::new(&record.ideal_answer),
            Cell::new(format!("{score:.2}/10")),
        ]);
    }
    println!("\n{table}");
}
