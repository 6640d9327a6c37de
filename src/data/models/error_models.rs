use std::path::PathBuf;

use thiserror::Error;

// Vocabulary loading errors
#[derive(Error, Debug)]
pub enum VocabError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Could not read the vocabulary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("The CSV file is empty")]
    Empty,
    #[error("Could not parse the CSV file: {0}")]
    Parse(#[from] csv::Error),
    #[error("CSV file must contain {} columns (missing: {})", required_columns(), .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("Invalid entry on line {line}: {reason}")]
    InvalidEntry { line: u64, reason: String },
}

fn required_columns() -> String {
    crate::data::loader::REQUIRED_COLUMNS
        .iter()
        .map(|c| format!("'{}'", c))
        .collect::<Vec<_>>()
        .join(" and ")
}

// Quiz interaction errors
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("No question is active, start the quiz first")]
    NoActiveQuestion,
    #[error("This question has already been answered")]
    AlreadyAnswered,
    #[error("Answer the current question before moving on")]
    NotAnswered,
    #[error(transparent)]
    Vocabulary(#[from] VocabError),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Upload failed: {0}")]
    Upload(String),
    #[error("Session error: {0}")]
    Session(String),
}

impl QuizError {
    /// Errors the user caused and can fix, as opposed to server faults.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, QuizError::Session(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_lists_requirements() {
        let err = VocabError::MissingColumns(vec!["definition".into()]);
        assert_eq!(
            err.to_string(),
            "CSV file must contain 'word' and 'definition' columns (missing: definition)"
        );
    }

    #[test]
    fn session_errors_are_not_user_facing() {
        assert!(!QuizError::Session("store down".into()).is_user_facing());
        assert!(QuizError::AlreadyAnswered.is_user_facing());
        assert!(QuizError::Vocabulary(VocabError::Empty).is_user_facing());
    }
}
