pub mod level_info;
pub mod progress_bar;
pub mod typing_area;
