//! Terminal UI: text rendering of directory views and the stdin reader.

pub mod input;
pub mod render;
