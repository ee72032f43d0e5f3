//! Application layer: graph documents in, verdicts out

pub mod graph_input;

pub use graph_input::{GraphInput, InputFormat};
