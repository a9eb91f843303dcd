use std::io::{self, Write};

use client_core::DirectoryView;
use shared::domain::User;

use crate::controller::events::UiEvent;

const FALLBACK_ERROR: &str = "Sorry, some error occurred...";
const DIVIDER: &str = "----------------------------------------";

pub fn render_view(view: &DirectoryView) -> String {
    match view {
        DirectoryView::Loading => "Loading users...\n".to_string(),
        DirectoryView::Error { message } => {
            let message = if message.trim().is_empty() {
                FALLBACK_ERROR
            } else {
                message.as_str()
            };
            format!("{message}\n[r] Try Again   [q] Quit\n")
        }
        DirectoryView::Empty => "No user data found\n[r] Retry   [q] Quit\n".to_string(),
        DirectoryView::Ready {
            user,
            position,
            total,
            can_navigate,
        } => {
            let mut out = String::new();
            out.push_str("User Directory\n");
            out.push_str(&format!("User {position} of {total}\n\n"));
            out.push_str(&render_card(user));
            out.push('\n');
            if *can_navigate {
                out.push_str("[p] Previous   [n] Next   [q] Quit\n");
            } else {
                out.push_str("[q] Quit\n");
            }
            out
        }
    }
}

fn render_card(user: &User) -> String {
    let rows = [
        ("ID", user.id.0.to_string()),
        ("UID", user.uid.clone()),
        ("Password", user.password.clone()),
        ("First Name", user.first_name.clone()),
        ("Last Name", user.last_name.clone()),
        ("Username", user.username.clone()),
        ("Email", user.email.clone()),
    ];

    let mut out = format!(
        "Avatar: {}\n{}\n{}\n{DIVIDER}\n",
        user.avatar,
        user.full_name(),
        user.handle()
    );
    for (label, value) in rows {
        out.push_str(&format!("{label:<11} {value}\n"));
    }
    out
}

pub fn write_event(out: &mut impl Write, event: &UiEvent) -> io::Result<()> {
    match event {
        UiEvent::View(view) => {
            writeln!(out)?;
            out.write_all(render_view(view).as_bytes())?;
        }
        UiEvent::Rejected { command, reason } => {
            writeln!(out, "({command} unavailable: {reason})")?
        }
        UiEvent::Info(message) => writeln!(out, "{message}")?,
    }
    out.flush()
}

#[cfg(test)]
#[path = "../tests/render_tests.rs"]
mod tests;
