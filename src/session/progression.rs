use tracing::{debug, info, trace};

use crate::engine::level_table::{LevelDescriptors, LevelTable};
use crate::engine::markup::ProgressMarkup;
use crate::generator::{RandomLetterGenerator, TextGenerator, generate_target_word};
use crate::session::input::{self, Key, KeyOutcome};
use crate::session::result::RoundResult;
use crate::session::round::RoundState;

pub const DEFAULT_LETTERS_PER_ROUND: usize = 20;

/// Drives a learner through the level table one round at a time.
///
/// Completing a round only marks a reset as pending. The host renders the
/// finished round first and calls [`ProgressionEngine::maybe_reset`] on its
/// next turn; key presses arriving in between are ignored.
pub struct ProgressionEngine<G: TextGenerator = RandomLetterGenerator> {
    table: LevelTable,
    letters_per_round: usize,
    level: usize,
    round: RoundState,
    generator: G,
    reset_pending: bool,
    last_result: Option<RoundResult>,
}

impl ProgressionEngine<RandomLetterGenerator> {
    pub fn new(table: LevelTable, letters_per_round: usize, start_level: usize) -> Self {
        Self::with_generator(
            table,
            letters_per_round,
            start_level,
            RandomLetterGenerator::from_entropy(),
        )
    }
}

impl<G: TextGenerator> ProgressionEngine<G> {
    pub fn with_generator(
        table: LevelTable,
        letters_per_round: usize,
        start_level: usize,
        generator: G,
    ) -> Self {
        let level = table.clamp_level(start_level);
        let mut engine = Self {
            table,
            letters_per_round,
            level,
            round: RoundState::new(""),
            generator,
            reset_pending: false,
            last_result: None,
        };
        engine.start_round();
        engine
    }

    fn start_round(&mut self) {
        let text = generate_target_word(
            &mut self.generator,
            &self.table,
            self.letters_per_round,
            self.level as i64,
        );
        self.round = RoundState::new(&text);
        self.reset_pending = false;
        debug!(level = self.level, target = %text, "new round");
    }

    pub fn handle_key_press(&mut self, key: Key) -> KeyOutcome {
        let outcome = input::process_key(&mut self.round, key);
        match outcome {
            KeyOutcome::Correct { completed: true } => {
                self.reset_pending = true;
                trace!(level = self.level, "round complete, reset deferred");
            }
            KeyOutcome::Incorrect { position } => {
                trace!(position, "mistyped");
            }
            _ => {}
        }
        outcome
    }

    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// Run the deferred reset if the last key press completed the round.
    /// Mid-round calls do nothing.
    pub fn maybe_reset(&mut self) -> Option<RoundResult> {
        if !self.reset_pending || !self.round.is_complete() {
            return None;
        }
        Some(self.reset())
    }

    /// Advance on a clean round below the last level, then start a fresh round.
    /// Only reachable through `maybe_reset`, once the target is fully typed.
    fn reset(&mut self) -> RoundResult {
        let played = self.level;
        let advanced = self.round.error_indices.is_empty() && self.level < self.table.last_index();
        if advanced {
            self.level += 1;
            info!(from = played, to = self.level, "level advanced");
        } else {
            debug!(
                level = played,
                errors = self.round.error_count(),
                "round finished without advancing"
            );
        }

        let result = RoundResult::from_round(&self.round, played, advanced);
        self.last_result = Some(result.clone());
        self.start_round();
        result
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn is_last_level(&self) -> bool {
        self.level == self.table.last_index()
    }

    pub fn table(&self) -> &LevelTable {
        &self.table
    }

    pub fn letters_per_round(&self) -> usize {
        self.letters_per_round
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn target_word(&self) -> String {
        self.round.target_word()
    }

    pub fn input_value(&self) -> String {
        self.round.input_value()
    }

    pub fn error_indices(&self) -> Vec<usize> {
        self.round.error_positions()
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    pub fn markup(&self) -> ProgressMarkup {
        self.round.markup()
    }

    pub fn descriptors(&self) -> LevelDescriptors {
        self.table.descriptors(self.level)
    }

    pub fn previous_level_name(&self) -> String {
        self.descriptors().previous.name
    }

    pub fn previous_level_character_set(&self) -> String {
        self.descriptors().previous.character_set
    }

    pub fn current_level_name(&self) -> String {
        self.descriptors().current.name
    }

    pub fn current_level_character_set(&self) -> String {
        self.descriptors().current.character_set
    }

    pub fn next_level_name(&self) -> String {
        self.descriptors().next.name
    }

    pub fn next_level_character_set(&self) -> String {
        self.descriptors().next.character_set
    }
}
