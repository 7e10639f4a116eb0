use crate::session::round::RoundState;

/// Summary of a finished round, captured just before the reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub level: usize,
    pub letters: usize,
    pub error_count: usize,
    pub advanced: bool,
}

impl RoundResult {
    pub fn from_round(round: &RoundState, level: usize, advanced: bool) -> Self {
        Self {
            level,
            letters: round.letter_count(),
            error_count: round.error_count(),
            advanced,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }

    pub fn accuracy(&self) -> f64 {
        if self.letters == 0 {
            return 100.0;
        }
        let clean = self.letters.saturating_sub(self.error_count);
        (clean as f64 / self.letters as f64 * 100.0).clamp(0.0, 100.0)
    }
}
