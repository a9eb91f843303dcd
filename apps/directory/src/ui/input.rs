//! Blocking stdin reader feeding the backend command queue.

use std::{
    io::{self, BufRead},
    thread,
};

use tokio::sync::mpsc;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Reads commands on a dedicated thread so a pending read never holds up
/// runtime shutdown. The queue closes when stdin reaches EOF.
pub fn spawn_stdin_reader(cmd_tx: mpsc::Sender<BackendCommand>, ui_tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || read_commands(io::stdin().lock(), &cmd_tx, &ui_tx));
}

pub fn read_commands(
    input: impl BufRead,
    cmd_tx: &mpsc::Sender<BackendCommand>,
    ui_tx: &mpsc::Sender<UiEvent>,
) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!("failed to read input: {err}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match BackendCommand::parse(&line) {
            Some(cmd) => {
                if cmd_tx.blocking_send(cmd).is_err() {
                    break;
                }
                if cmd == BackendCommand::Quit {
                    break;
                }
            }
            None => {
                let hint = format!(
                    "unrecognized input '{}'; use p, n, r or q",
                    line.trim()
                );
                if ui_tx.blocking_send(UiEvent::Info(hint)).is_err() {
                    break;
                }
            }
        }
    }
}
