use serde::{Deserialize, Serialize};

use super::WordEntry;

/// A question as held in the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub entry: WordEntry,      // The answer and its details
    pub choices: Vec<String>,  // Answer plus distractors, shuffled
}

/// Outcome of the guess submitted for the current question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub guess: String,
    pub correct: bool,
}

/// Form payload for submitting a guess (HTML form or JSON body)
#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    #[serde(default)]
    pub guess: String,
}

/// What the templates and the JSON API see of the quiz.
/// The answer is only exposed once the question has been answered.
#[derive(Debug, Serialize)]
pub struct QuizView {
    pub started: bool,
    pub question_number: u32,
    pub score: u32,
    pub answered: u32,
    pub definition: Option<String>,
    pub choices: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<FeedbackView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<WordEntry>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackView {
    pub guess: String,
    pub correct: bool,
    pub correct_word: String,
    pub message: String,
}

impl FeedbackView {
    pub fn new(feedback: &Feedback, entry: &WordEntry) -> Self {
        let message = if feedback.correct {
            "Correct!".to_string()
        } else {
            format!("Incorrect. The correct word was: {}", entry.word)
        };

        Self {
            guess: feedback.guess.clone(),
            correct: feedback.correct,
            correct_word: entry.word.clone(),
            message,
        }
    }
}
