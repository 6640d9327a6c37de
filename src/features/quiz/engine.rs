use std::collections::HashSet;

use lazy_static::lazy_static;
use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

use crate::data::models::{Question, Vocabulary, WordEntry};

lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Number of wrong choices offered alongside the answer.
pub const DISTRACTORS: usize = 3;

pub struct QuizEngine;

impl QuizEngine {
    /// Picks a uniformly random entry. Vocabularies are never empty.
    pub fn select_entry<'a, R: Rng>(vocab: &'a Vocabulary, rng: &mut R) -> &'a WordEntry {
        let index = rng.gen_range(0..vocab.len());
        &vocab.entries()[index]
    }

    pub fn check_guess(guess: &str, entry: &WordEntry) -> bool {
        Self::normalize(guess) == Self::normalize(&entry.word)
    }

    pub fn generate_question<R: Rng>(vocab: &Vocabulary, rng: &mut R) -> Question {
        let entry = Self::select_entry(vocab, rng).clone();

        let mut seen = HashSet::new();
        seen.insert(Self::normalize(&entry.word));
        let candidates: Vec<&str> = vocab
            .entries()
            .iter()
            .filter(|e| seen.insert(Self::normalize(&e.word)))
            .map(|e| e.word.as_str())
            .collect();

        let mut choices: Vec<String> = candidates
            .choose_multiple(rng, DISTRACTORS)
            .map(|w| w.to_string())
            .collect();
        choices.push(entry.word.clone());
        choices.shuffle(rng);

        Question { entry, choices }
    }

    // Uppercasing first folds letters like ß that have no single-char lowercase pair
    fn normalize(s: &str) -> String {
        WHITESPACE_RE
            .replace_all(s.trim(), " ")
            .to_uppercase()
            .to_lowercase()
    }
}
