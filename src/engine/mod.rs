pub mod filter;
pub mod level_table;
pub mod markup;

pub use level_table::{LevelDescriptor, LevelDescriptors, LevelTable, LevelTableError};
pub use markup::{ProgressMarkup, Segment, Tag, render_progress};
