pub mod input;
pub mod progression;
pub mod result;
pub mod round;

pub use input::{ControlKey, Key, KeyOutcome};
pub use progression::{DEFAULT_LETTERS_PER_ROUND, ProgressionEngine};
pub use result::RoundResult;
pub use round::RoundState;
