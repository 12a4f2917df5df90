//! The `vivaprep init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create vivaprep.toml
    if std::path::Path::new("vivaprep.toml").exists() {
        println!("vivaprep.toml already exists, skipping.");
    } else {
        std::fs::write("vivaprep.toml", SAMPLE_CONFIG)?;
        println!("Created vivaprep.toml");
    }

    // Create example dataset
    if std::path::Path::new("questions.csv").exists() {
        println!("questions.csv already exists, skipping.");
    } else {
        std::fs::write("questions.csv", SAMPLE_DATASET)?;
        println!("Created questions.csv");
    }

    println!("\nNext steps:");
    println!("  1. Edit vivaprep.toml with your API key (or keep provider \"mock\" to try it offline)");
    println!("  2. Run: vivaprep validate");
    println!("  3. Run: vivaprep drill");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# vivaprep configuration

default_provider = "openai"
dataset = "questions.csv"
default_question_count = 5

[providers.openai]
type = "openai"
api_key = "${OPENAI_API_KEY}"
model = "text-embedding-3-small"

[providers.ollama]
type = "ollama"
base_url = "http://localhost:11434"
model = "nomic-embed-text"

[providers.mock]
type = "mock"
"#;

const SAMPLE_DATASET: &str = r#"Question,IdealAnswer,Category,Keywords
Tell me about a project you are proud of.,I led a migration that cut deploy times in half while mentoring two junior engineers.,Behavioral,"project, impact, team"
How do you handle disagreements in code review?,I focus the discussion on the code and agreed conventions and escalate only when we cannot converge.,Behavioral,"code review, conventions, discussion"
What is ownership in Rust?,Each value has a single owner and the value is dropped when the owner goes out of scope.,Rust,"owner, scope, drop"
What does the borrow checker prevent?,It prevents data races and dangling references by enforcing aliasing and lifetime rules at compile time.,Rust,"borrow, lifetime, data race"
What is a SQL join?,A join combines rows from two tables based on a related column between them.,SQL,"join, tables, column"
When would you add an index to a table?,When a column is frequently used in filters or joins and read performance outweighs the write overhead.,SQL,"index, performance, query"
What are design patterns?,Reusable solutions to recurring design problems such as factory or observer.,Design,"design patterns, reusable, factory"
How would you design a URL shortener?,"Hash the long URL to a short code, store the mapping in a key-value store, and redirect on lookup.",Design,"hash, store, redirect"
"#;
