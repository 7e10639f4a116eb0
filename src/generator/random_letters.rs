use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::engine::filter::CharFilter;
use crate::engine::level_table::LevelTable;
use crate::generator::TextGenerator;

/// Shown in place of a target when a level has nothing to practice.
pub const NO_CHARACTERS_MESSAGE: &str = "Error: No characters available for this level.";

/// Draws letters uniformly with replacement and joins them with single spaces.
pub struct RandomLetterGenerator {
    rng: SmallRng,
}

impl RandomLetterGenerator {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl TextGenerator for RandomLetterGenerator {
    fn generate(&mut self, filter: &CharFilter, letter_count: usize) -> String {
        if filter.is_empty() {
            return String::new();
        }

        let mut result = String::with_capacity(letter_count.saturating_mul(2));
        for i in 0..letter_count {
            if i > 0 {
                result.push(' ');
            }
            let idx = self.rng.gen_range(0..filter.allowed.len());
            result.push(filter.allowed[idx]);
        }
        result
    }
}

/// Target word of `letter_count` letters drawn from the cumulative set at `level`.
/// Levels outside the table yield [`NO_CHARACTERS_MESSAGE`].
pub fn generate_target_word<G: TextGenerator>(
    generator: &mut G,
    table: &LevelTable,
    letter_count: usize,
    level: i64,
) -> String {
    let filter = CharFilter::for_level(table, level);
    if filter.is_empty() {
        return NO_CHARACTERS_MESSAGE.to_string();
    }
    generator.generate(&filter, letter_count)
}
