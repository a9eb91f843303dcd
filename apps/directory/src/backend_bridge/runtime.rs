//! Backend loop: owns the directory controller, applies queued commands, and
//! publishes a fresh view after every state change.

use client_core::{DirectoryController, LoadTicket, UserSource};
use shared::{domain::User, error::FetchError};
use tokio::sync::mpsc;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent,
    orchestration::{dispatch_command, Dispatch},
};

struct LoadCompletion {
    ticket: LoadTicket,
    result: Result<Vec<User>, FetchError>,
}

/// Runs until a quit command arrives, the command queue closes, or the
/// renderer hangs up. The first load starts immediately. When the queue
/// closes, loads still in flight are applied and rendered before stopping.
pub async fn run<S: UserSource + 'static>(
    mut controller: DirectoryController<S>,
    mut cmd_rx: mpsc::Receiver<BackendCommand>,
    ui_tx: mpsc::Sender<UiEvent>,
) {
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<LoadCompletion>();

    let mut in_flight = 0usize;
    let mut commands_open = true;

    start_load(&mut controller, &done_tx);
    in_flight += 1;
    if !publish(&ui_tx, UiEvent::View(controller.view())).await {
        return;
    }

    loop {
        if !commands_open && in_flight == 0 {
            tracing::info!("command queue closed; stopping directory loop");
            break;
        }

        let event = tokio::select! {
            Some(done) = done_rx.recv(), if in_flight > 0 => {
                in_flight -= 1;
                controller.complete_load(done.ticket, done.result);
                UiEvent::View(controller.view())
            }
            cmd = cmd_rx.recv(), if commands_open => {
                let Some(cmd) = cmd else {
                    commands_open = false;
                    continue;
                };
                match dispatch_command(&mut controller, cmd) {
                    Dispatch::Quit => break,
                    Dispatch::Redraw => UiEvent::View(controller.view()),
                    Dispatch::StartLoad => {
                        start_load(&mut controller, &done_tx);
                        in_flight += 1;
                        UiEvent::View(controller.view())
                    }
                    Dispatch::Rejected(reason) => UiEvent::Rejected {
                        command: cmd.name(),
                        reason,
                    },
                }
            }
        };

        if !publish(&ui_tx, event).await {
            break;
        }
    }
}

// Fetches run on their own task so commands keep flowing while one is pending.
fn start_load<S: UserSource + 'static>(
    controller: &mut DirectoryController<S>,
    done_tx: &mpsc::UnboundedSender<LoadCompletion>,
) {
    let ticket = controller.begin_load();
    let source = controller.source();
    let done_tx = done_tx.clone();
    tokio::spawn(async move {
        let result = source.fetch_users().await;
        if done_tx.send(LoadCompletion { ticket, result }).is_err() {
            tracing::debug!(ticket = ticket.0, "directory loop gone before load completed");
        }
    });
}

async fn publish(ui_tx: &mpsc::Sender<UiEvent>, event: UiEvent) -> bool {
    if ui_tx.send(event).await.is_err() {
        tracing::warn!("renderer disconnected; stopping directory loop");
        return false;
    }
    true
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
