use std::collections::BTreeSet;

use crate::engine::markup::{ProgressMarkup, render_progress};

/// One target word and the learner's progress through it.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub target: Vec<char>,
    /// Typed prefix of `target`, separators included.
    pub input: Vec<char>,
    pub error_indices: BTreeSet<usize>,
}

impl RoundState {
    pub fn new(text: &str) -> Self {
        Self {
            target: text.chars().collect(),
            input: Vec::new(),
            error_indices: BTreeSet::new(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.input.len()
    }

    pub fn is_complete(&self) -> bool {
        self.input.len() >= self.target.len()
    }

    pub fn target_word(&self) -> String {
        self.target.iter().collect()
    }

    pub fn input_value(&self) -> String {
        self.input.iter().collect()
    }

    pub fn error_positions(&self) -> Vec<usize> {
        self.error_indices.iter().copied().collect()
    }

    pub fn error_count(&self) -> usize {
        self.error_indices.len()
    }

    pub fn letter_count(&self) -> usize {
        self.target.iter().filter(|&&ch| ch != ' ').count()
    }

    pub fn progress(&self) -> f64 {
        if self.target.is_empty() {
            return 0.0;
        }
        self.input.len() as f64 / self.target.len() as f64
    }

    pub fn markup(&self) -> ProgressMarkup {
        render_progress(&self.target, self.input.len(), &self.error_indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round() {
        let round = RoundState::new("כ ח");
        assert_eq!(round.target.len(), 3);
        assert_eq!(round.cursor(), 0);
        assert_eq!(round.letter_count(), 2);
        assert!(!round.is_complete());
        assert_eq!(round.progress(), 0.0);
    }

    #[test]
    fn test_empty_round_is_complete() {
        let round = RoundState::new("");
        assert!(round.is_complete());
        assert_eq!(round.progress(), 0.0);
        assert!(round.markup().segments.is_empty());
    }

    #[test]
    fn test_multibyte_positions_are_char_based() {
        let mut round = RoundState::new("ש ך");
        round.input.extend(['ש', ' ']);
        assert_eq!(round.cursor(), 2);
        assert_eq!(round.input_value(), "ש ");
        assert_eq!(round.markup().segments[2].text, "ך");
    }
}
