pub mod random_letters;

use crate::engine::filter::CharFilter;

pub use random_letters::{NO_CHARACTERS_MESSAGE, RandomLetterGenerator, generate_target_word};

pub trait TextGenerator {
    fn generate(&mut self, filter: &CharFilter, letter_count: usize) -> String;
}
