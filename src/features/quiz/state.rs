use rand::Rng;
use serde::{Deserialize, Serialize};

use super::QuizEngine;
use crate::data::models::{Feedback, FeedbackView, Question, QuizError, QuizView, Vocabulary};

/// Per-session quiz progress, stored in the session as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizState {
    pub question: Option<Question>,
    pub question_number: u32,
    pub score: u32,
    pub answered: u32,
    pub feedback: Option<Feedback>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            question: None,
            question_number: 1,
            score: 0,
            answered: 0,
            feedback: None,
        }
    }
}

impl QuizState {
    pub fn start<R: Rng>(&mut self, vocab: &Vocabulary, rng: &mut R) {
        *self = Self {
            question: Some(QuizEngine::generate_question(vocab, rng)),
            ..Self::default()
        };
    }

    pub fn submit(&mut self, guess: &str) -> Result<&Feedback, QuizError> {
        let question = self.question.as_ref().ok_or(QuizError::NoActiveQuestion)?;
        if self.feedback.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }

        let correct = QuizEngine::check_guess(guess, &question.entry);
        self.answered += 1;
        if correct {
            self.score += 1;
        }

        Ok(self.feedback.insert(Feedback {
            guess: guess.trim().to_string(),
            correct,
        }))
    }

    pub fn next<R: Rng>(&mut self, vocab: &Vocabulary, rng: &mut R) -> Result<(), QuizError> {
        if self.question.is_none() {
            return Err(QuizError::NoActiveQuestion);
        }
        if self.feedback.is_none() {
            return Err(QuizError::NotAnswered);
        }

        self.question_number += 1;
        self.question = Some(QuizEngine::generate_question(vocab, rng));
        self.feedback = None;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn view(&self) -> QuizView {
        let feedback = match (&self.question, &self.feedback) {
            (Some(q), Some(f)) => Some(FeedbackView::new(f, &q.entry)),
            _ => None,
        };
        let details = self
            .question
            .as_ref()
            .filter(|_| self.feedback.is_some())
            .map(|q| q.entry.clone());

        QuizView {
            started: self.question.is_some(),
            question_number: self.question_number,
            score: self.score,
            answered: self.answered,
            definition: self.question.as_ref().map(|q| q.entry.definition.clone()),
            choices: self
                .question
                .as_ref()
                .map(|q| q.choices.clone())
                .unwrap_or_default(),
            feedback,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::WordEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocab() -> Vocabulary {
        Vocabulary::new(vec![
            WordEntry::new("ephemeral", "lasting a very short time"),
            WordEntry::new("lucid", "expressed clearly"),
            WordEntry::new("frugal", "economical with money"),
        ])
        .unwrap()
    }

    fn started() -> (QuizState, StdRng) {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = QuizState::default();
        state.start(&vocab(), &mut rng);
        (state, rng)
    }

    fn answer(state: &QuizState) -> String {
        state.question.as_ref().unwrap().entry.word.clone()
    }

    #[test]
    fn fresh_state_has_no_question() {
        let state = QuizState::default();
        let view = state.view();
        assert!(!view.started);
        assert_eq!(view.question_number, 1);
        assert!(view.definition.is_none());
        assert!(view.choices.is_empty());
    }

    #[test]
    fn correct_answer_scores() {
        let (mut state, _) = started();
        let word = answer(&state).to_uppercase();

        let feedback = state.submit(&word).unwrap();
        assert!(feedback.correct);
        assert_eq!((state.score, state.answered), (1, 1));

        let view = state.view();
        assert_eq!(view.feedback.unwrap().message, "Correct!");
        assert!(view.details.is_some());
    }

    #[test]
    fn wrong_answer_reveals_word() {
        let (mut state, _) = started();
        let word = answer(&state);

        assert!(!state.submit("definitely not it").unwrap().correct);
        assert_eq!((state.score, state.answered), (0, 1));
        assert_eq!(
            state.view().feedback.unwrap().message,
            format!("Incorrect. The correct word was: {}", word)
        );
    }

    #[test]
    fn double_submit_does_not_double_count() {
        let (mut state, _) = started();
        let word = answer(&state);
        state.submit(&word).unwrap();

        assert!(matches!(state.submit(&word), Err(QuizError::AlreadyAnswered)));
        assert_eq!((state.score, state.answered), (1, 1));
    }

    #[test]
    fn next_requires_an_answer() {
        let (mut state, mut rng) = started();
        assert!(matches!(state.next(&vocab(), &mut rng), Err(QuizError::NotAnswered)));

        state.submit("nope").unwrap();
        state.next(&vocab(), &mut rng).unwrap();
        assert_eq!(state.question_number, 2);
        assert!(state.feedback.is_none());
        assert!(state.view().feedback.is_none());
    }

    #[test]
    fn transitions_need_an_active_question() {
        let mut state = QuizState::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(state.submit("lucid"), Err(QuizError::NoActiveQuestion)));
        assert!(matches!(state.next(&vocab(), &mut rng), Err(QuizError::NoActiveQuestion)));
    }

    #[test]
    fn view_hides_answer_until_answered() {
        let (state, _) = started();
        let json = serde_json::to_value(state.view()).unwrap();
        assert!(json.get("details").is_none());
        assert!(json.get("feedback").is_none());
        assert!(json["definition"].is_string());
    }

    #[test]
    fn start_and_reset_clear_progress() {
        let (mut state, mut rng) = started();
        let word = answer(&state);
        state.submit(&word).unwrap();
        state.next(&vocab(), &mut rng).unwrap();

        state.start(&vocab(), &mut rng);
        assert_eq!((state.score, state.answered, state.question_number), (0, 0, 1));
        assert!(state.question.is_some());

        state.reset();
        assert_eq!(state, QuizState::default());
    }

    #[test]
    fn score_never_exceeds_answered() {
        let (mut state, mut rng) = started();
        for round in 0..30 {
            let guess = if round % 3 == 0 { "wrong".to_string() } else { answer(&state) };
            state.submit(&guess).unwrap();
            assert!(state.score <= state.answered);
            state.next(&vocab(), &mut rng).unwrap();
        }
        assert_eq!(state.answered, 30);
        assert_eq!(state.score, 20);
    }

    #[test]
    fn state_round_trips_through_session_json() {
        let (mut state, _) = started();
        state.submit("lucid").unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let restored: QuizState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
