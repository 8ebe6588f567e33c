//! Delimited question file loader.
//!
//! Each record holds a prompt and an expected answer. Extra fields are
//! ignored, no header row is expected, and nothing is trimmed at load time.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;
use crate::model::{QuestionEntry, QuestionSequence};

/// Options for parsing a question source.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Field separator byte. Tab by default.
    pub delimiter: u8,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self { delimiter: b'\t' }
    }
}

/// Open `path` and parse its questions.
pub fn load_questions(path: &Path, options: &LoaderOptions) -> Result<QuestionSequence, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions(file, options)?;
    tracing::debug!(
        "loaded {} question(s) from {}",
        questions.len(),
        path.display()
    );
    Ok(questions)
}

/// Parse questions from any reader.
///
/// The whole load fails on the first short row; no partial sequence is
/// returned.
pub fn parse_questions<R: Read>(
    reader: R,
    options: &LoaderOptions,
) -> Result<QuestionSequence, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut questions = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() < 2 {
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 1);
            return Err(LoadError::Format {
                line,
                fields: record.len(),
            });
        }
        questions.push(QuestionEntry::new(&record[0], &record[1]));
    }

    if questions.is_empty() {
        return Err(LoadError::EmptySource);
    }

    Ok(questions)
}

/// A non-fatal issue found in a loaded question set.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based position of the question in the sequence.
    pub position: usize,
    /// Warning message.
    pub message: String,
}

/// Check a question set for entries that load fine but make a poor quiz.
pub fn validate_questions(questions: &[QuestionEntry]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_prompts = HashSet::new();
    for (i, q) in questions.iter().enumerate() {
        let position = i + 1;

        if q.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                position,
                message: "prompt is empty".into(),
            });
        }

        // An empty answer can only be matched by submitting a blank line
        if q.answer.trim().is_empty() {
            warnings.push(ValidationWarning {
                position,
                message: "answer is empty".into(),
            });
        }

        if !seen_prompts.insert(q.prompt.trim().to_lowercase()) {
            warnings.push(ValidationWarning {
                position,
                message: format!("duplicate prompt: {}", q.prompt),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Result<QuestionSequence, LoadError> {
        parse_questions(src.as_bytes(), &LoaderOptions::default())
    }

    #[test]
    fn parse_preserves_order_and_fields() {
        let questions = parse("2+2\t4\nCapital of France\tParis\n").unwrap();
        assert_eq!(
            questions,
            vec![
                QuestionEntry::new("2+2", "4"),
                QuestionEntry::new("Capital of France", "Paris"),
            ]
        );
    }

    #[test]
    fn parse_ignores_extra_fields() {
        let questions = parse("5+5\t10\tarithmetic\textra\n").unwrap();
        assert_eq!(questions, vec![QuestionEntry::new("5+5", "10")]);
    }

    #[test]
    fn parse_does_not_trim() {
        let questions = parse(" 1+1 \t 2 \n").unwrap();
        assert_eq!(questions[0].prompt, " 1+1 ");
        assert_eq!(questions[0].answer, " 2 ");
    }

    #[test]
    fn parse_keeps_commas_inside_fields() {
        let questions = parse("Name a, b or c\ta, b\n").unwrap();
        assert_eq!(questions[0].prompt, "Name a, b or c");
        assert_eq!(questions[0].answer, "a, b");
    }

    #[test]
    fn parse_quoted_field_may_contain_delimiter() {
        let questions = parse("\"Spell \ttab\"\ttab\n").unwrap();
        assert_eq!(questions[0].prompt, "Spell \ttab");
        assert_eq!(questions[0].answer, "tab");
    }

    #[test]
    fn parse_handles_crlf_and_missing_final_newline() {
        let questions = parse("a\tb\r\nc\td").unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].answer, "b");
        assert_eq!(questions[1].answer, "d");
    }

    #[test]
    fn parse_header_row_is_a_question() {
        let questions = parse("question\tanswer\n1+1\t2\n").unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].prompt, "question");
    }

    #[test]
    fn short_row_fails_the_whole_load() {
        let err = parse("1+1\t2\nlonely\n3+3\t6\n").unwrap_err();
        match err {
            LoadError::Format { line, fields } => {
                assert_eq!(line, 2);
                assert_eq!(fields, 1);
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn single_field_source_is_a_format_error() {
        assert!(matches!(
            parse("only a prompt\n"),
            Err(LoadError::Format { .. })
        ));
    }

    #[test]
    fn empty_source_is_rejected() {
        assert!(matches!(parse(""), Err(LoadError::EmptySource)));
        assert!(matches!(parse("\n\n"), Err(LoadError::EmptySource)));
    }

    #[test]
    fn custom_delimiter() {
        let options = LoaderOptions { delimiter: b';' };
        let questions = parse_questions("2+2;4\n".as_bytes(), &options).unwrap();
        assert_eq!(questions, vec![QuestionEntry::new("2+2", "4")]);

        // With a semicolon delimiter a tab row is a single field
        let err = parse_questions("2+2\t4\n".as_bytes(), &options).unwrap_err();
        assert!(matches!(err, LoadError::Format { .. }));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let bytes: &[u8] = b"caf\xff\tanswer\n";
        let err = parse_questions(bytes, &LoaderOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_questions(&dir.path().join("missing.csv"), &LoaderOptions::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::SourceOpen { .. }));
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.csv");
        std::fs::write(&path, "2+2\t4\n").unwrap();

        let questions = load_questions(&path, &LoaderOptions::default()).unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn validate_flags_blank_and_duplicate_entries() {
        let questions = vec![
            QuestionEntry::new("2+2", "4"),
            QuestionEntry::new("  ", "x"),
            QuestionEntry::new("2+2 ", " "),
        ];
        let warnings = validate_questions(&questions);
        assert!(warnings
            .iter()
            .any(|w| w.position == 2 && w.message.contains("prompt is empty")));
        assert!(warnings
            .iter()
            .any(|w| w.position == 3 && w.message.contains("answer is empty")));
        assert!(warnings
            .iter()
            .any(|w| w.position == 3 && w.message.contains("duplicate")));
    }

    #[test]
    fn validate_clean_set() {
        let questions = vec![QuestionEntry::new("2+2", "4"), QuestionEntry::new("3+3", "6")];
        assert!(validate_questions(&questions).is_empty());
    }
}
