//! The `quizrun validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizrun_core::config::load_config_from;
use quizrun_core::loader;

pub fn execute(file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    config.validate()?;
    let path = file.unwrap_or_else(|| config.questions.clone());

    let questions = loader::load_questions(&path, &config.loader_options())?;
    println!("{}: {} questions", path.display(), questions.len());

    let warnings = loader::validate_questions(&questions);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.position, w.message);
    }

    if warnings.is_empty() {
        println!("Question file valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
