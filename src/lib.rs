// The progression engine lives in the library so the terminal front end in
// main.rs, the integration tests and the criterion benchmarks share one tree.

pub mod config;
pub mod engine;
pub mod generator;
pub mod session;
