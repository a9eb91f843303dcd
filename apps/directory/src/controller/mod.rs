//! Controller layer: UI events and the gating of commands against the
//! current directory state.

pub mod events;
pub mod orchestration;
