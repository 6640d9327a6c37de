pub mod error_models;
pub mod quiz_models;
pub mod vocab_models;

pub use error_models::{QuizError, VocabError};
pub use quiz_models::{AnswerForm, Feedback, FeedbackView, Question, QuizView};
pub use vocab_models::{Vocabulary, VocabularySource, WordEntry};
