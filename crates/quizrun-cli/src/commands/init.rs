//! The `quizrun init` command.

use std::path::Path;

use anyhow::Result;

use quizrun_core::config::CONFIG_FILE_NAME;

const QUESTION_FILE_NAME: &str = "quiz-problem.csv";

pub fn execute() -> Result<()> {
    write_if_missing(Path::new(CONFIG_FILE_NAME), SAMPLE_CONFIG)?;
    write_if_missing(Path::new(QUESTION_FILE_NAME), SAMPLE_QUESTIONS)?;

    println!("\nNext steps:");
    println!("  1. Add your own questions to {QUESTION_FILE_NAME} (question<TAB>answer)");
    println!("  2. Run: quizrun validate");
    println!("  3. Run: quizrun run");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizrun configuration

questions = "quiz-problem.csv"
time_limit_secs = 30
shuffle = false
# "shared" bounds the whole run, "per-question" restarts the limit per prompt
timer = "shared"
delimiter = "\t"
"#;

const SAMPLE_QUESTIONS: &str = "5+5\t10\n\
7+3\t10\n\
1+1\t2\n\
8+3\t11\n\
Capital of France\tParis\n\
Largest planet in the solar system\tJupiter\n";
