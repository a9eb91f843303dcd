//! Gates commands the way the directory screen exposes them: navigation only
//! while a multi-user batch is shown, reload only from the error and empty
//! screens.

use client_core::{DirectoryController, DirectoryStatus, UserSource};

use crate::backend_bridge::commands::BackendCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Redraw,
    StartLoad,
    Quit,
    Rejected(&'static str),
}

pub fn dispatch_command<S: UserSource>(
    controller: &mut DirectoryController<S>,
    cmd: BackendCommand,
) -> Dispatch {
    let dispatch = match cmd {
        BackendCommand::Quit => Dispatch::Quit,
        BackendCommand::Previous | BackendCommand::Next => match navigation_gate(controller) {
            Some(reason) => Dispatch::Rejected(reason),
            None => {
                if cmd == BackendCommand::Previous {
                    controller.go_to_previous();
                } else {
                    controller.go_to_next();
                }
                Dispatch::Redraw
            }
        },
        BackendCommand::Reload => match reload_gate(controller) {
            Some(reason) => Dispatch::Rejected(reason),
            None => Dispatch::StartLoad,
        },
    };

    tracing::debug!(command = cmd.name(), ?dispatch, "dispatched ui command");
    dispatch
}

fn navigation_gate<S: UserSource>(controller: &DirectoryController<S>) -> Option<&'static str> {
    match controller.state().status() {
        DirectoryStatus::Loading => Some("users are still loading"),
        DirectoryStatus::Ready if !controller.can_navigate() => {
            Some("navigation needs more than one user")
        }
        DirectoryStatus::Ready => None,
        DirectoryStatus::Idle | DirectoryStatus::Error(_) => Some("no users to browse"),
    }
}

fn reload_gate<S: UserSource>(controller: &DirectoryController<S>) -> Option<&'static str> {
    match controller.state().status() {
        DirectoryStatus::Loading => Some("a load is already in progress"),
        DirectoryStatus::Ready if !controller.is_empty() => Some("users are already loaded"),
        DirectoryStatus::Idle | DirectoryStatus::Ready | DirectoryStatus::Error(_) => None,
    }
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
