//! Bridge between typed input and the directory controller's event loop.

pub mod commands;
pub mod runtime;
