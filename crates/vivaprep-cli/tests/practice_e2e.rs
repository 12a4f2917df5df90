//! End-to-end interactive practice sessions over piped stdin with the
//! offline mock embedder.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = "\
default_provider = \"mock\"
dataset = \"questions.csv\"
default_question_count = 2

[providers.mock]
type = \"mock\"
";

const DATASET: &str = "\
Question,IdealAnswer,Category,Keywords
What is ownership?,Each value has a single owner.,Rust,\"owner, scope\"
What does the borrow checker prevent?,It prevents data races and dangling references.,Rust,\"borrow, data race\"
What is a join?,A join combines rows from two tables.,SQL,\"join, tables\"
";

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("vivaprep.toml"), CONFIG).unwrap();
    std::fs::write(dir.path().join("questions.csv"), DATASET).unwrap();
    dir
}

fn vivaprep() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("vivaprep").unwrap()
}

#[test]
fn practice_full_session_with_restart() {
    let dir = setup();

    // Categories enumerate sorted, so SQL is 2. First session: one SQL
    // question answered with its ideal answer, then restart and run a
    // second session before quitting at the restart prompt.
    let stdin = "\
2
1
A join combines rows from two tables.
y
2
1
no idea
n
";

    vivaprep()
        .current_dir(dir.path())
        .arg("practice")
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains("Setup — choose a category:").count(2))
        .stdout(predicate::str::contains("0) Any"))
        .stdout(predicate::str::contains("1) Rust"))
        .stdout(predicate::str::contains("2) SQL"))
        .stdout(predicate::str::contains("Question 1/1: What is a join?"))
        .stdout(predicate::str::contains("Score: 10.00/10"))
        .stdout(predicate::str::contains("Interview complete!").count(2))
        .stdout(predicate::str::contains("Your average score: 10.00/10"))
        .stdout(predicate::str::contains("Ideal answer"));
}

#[test]
fn practice_invalid_category_reprompts() {
    let dir = setup();

    // 7 is out of range; 0 picks any category. "abc" is not a number, so
    // the configured default of 2 questions kicks in.
    let stdin = "\
7
0
abc
first answer
second answer
n
";

    vivaprep()
        .current_dir(dir.path())
        .arg("practice")
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please enter a number between 0 and 2.",
        ))
        .stdout(predicate::str::contains("Question 2/2:"))
        .stdout(predicate::str::contains("Interview complete!"));
}

#[test]
fn practice_oversized_count_returns_to_setup() {
    let dir = setup();

    // SQL has one question; asking for 5 restarts setup instead of
    // aborting the session.
    let stdin = "\
2
5
2
1
A join combines rows from two tables.
n
";

    vivaprep()
        .current_dir(dir.path())
        .arg("practice")
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "requested 5 questions but only 1 available",
        ))
        .stdout(predicate::str::contains("Setup — choose a category:").count(2))
        .stdout(predicate::str::contains("Interview complete!"));
}

#[test]
fn practice_quit_at_setup() {
    let dir = setup();

    vivaprep()
        .current_dir(dir.path())
        .arg("practice")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Setup — choose a category:"))
        .stdout(predicate::str::contains("Question 1/").not());
}
