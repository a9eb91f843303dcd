//! Events published from the backend loop to the renderer.

use client_core::DirectoryView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    View(DirectoryView),
    Rejected {
        command: &'static str,
        reason: &'static str,
    },
    Info(String),
}
