//! Shared models

mod edge;

pub use edge::{Edge, VertexId};
