//! Directory view controller: the fetched batch, a cursor into it, and the
//! load status the presentation layer renders from.

use std::sync::Arc;

use shared::{domain::User, error::FetchError};
use tracing::{debug, error, info};

use crate::user_client::UserSource;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DirectoryStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

/// Invariant: `cursor < users.len()` whenever `users` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryState {
    users: Vec<User>,
    cursor: usize,
    status: DirectoryStatus,
}

impl DirectoryState {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> &DirectoryStatus {
        &self.status
    }
}

/// Identifies one `begin_load` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(pub u64);

/// What the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryView {
    Loading,
    Error {
        message: String,
    },
    Empty,
    Ready {
        user: User,
        /// 1-based.
        position: usize,
        total: usize,
        can_navigate: bool,
    },
}

pub struct DirectoryController<S: UserSource> {
    source: Arc<S>,
    state: DirectoryState,
    issued: u64,
}

impl<S: UserSource> DirectoryController<S> {
    pub fn new(source: S) -> Self {
        Self::with_shared_source(Arc::new(source))
    }

    pub fn with_shared_source(source: Arc<S>) -> Self {
        Self {
            source,
            state: DirectoryState::default(),
            issued: 0,
        }
    }

    pub fn source(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    /// Fetch a fresh batch and apply it. Exactly one call to the source.
    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.source.fetch_users().await;
        self.complete_load(ticket, result);
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        self.state.status = DirectoryStatus::Loading;
        info!(ticket = self.issued, "loading users");
        LoadTicket(self.issued)
    }

    /// Apply a fetch result. Results are applied in completion order, so a
    /// stale ticket that resolves last overwrites a newer one. An empty batch
    /// counts as invalid data whatever the source.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<Vec<User>, FetchError>) {
        if !self.is_latest(ticket) {
            debug!(
                ticket = ticket.0,
                latest = self.issued,
                "applying result from a superseded load"
            );
        }

        let result = result.and_then(|users| {
            if users.is_empty() {
                Err(FetchError::InvalidData)
            } else {
                Ok(users)
            }
        });

        match result {
            Ok(users) => {
                info!(ticket = ticket.0, count = users.len(), "users loaded");
                self.state.users = users;
                self.state.cursor = 0;
                self.state.status = DirectoryStatus::Ready;
            }
            Err(err) => {
                error!(ticket = ticket.0, kind = ?err.kind(), "error loading users: {err}");
                // Previously loaded users stay in place.
                self.state.status = DirectoryStatus::Error(err.message());
            }
        }
    }

    pub fn is_latest(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.issued
    }

    pub fn len(&self) -> usize {
        self.state.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.users.is_empty()
    }

    pub fn can_navigate(&self) -> bool {
        self.len() > 1
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.users.get(self.state.cursor)
    }

    /// Step back one user, wrapping from the first to the last. Returns
    /// whether the cursor moved; with one user or none this is a no-op.
    pub fn go_to_previous(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        self.state.cursor = if self.state.cursor == 0 {
            self.len() - 1
        } else {
            self.state.cursor - 1
        };
        debug!(cursor = self.state.cursor, "moved to previous user");
        true
    }

    /// Step forward one user, wrapping from the last to the first.
    pub fn go_to_next(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        self.state.cursor = if self.state.cursor == self.len() - 1 {
            0
        } else {
            self.state.cursor + 1
        };
        debug!(cursor = self.state.cursor, "moved to next user");
        true
    }

    pub fn view(&self) -> DirectoryView {
        match &self.state.status {
            DirectoryStatus::Loading => DirectoryView::Loading,
            DirectoryStatus::Error(message) => DirectoryView::Error {
                message: message.clone(),
            },
            DirectoryStatus::Idle | DirectoryStatus::Ready => match self.current_user() {
                Some(user) => DirectoryView::Ready {
                    user: user.clone(),
                    position: self.state.cursor + 1,
                    total: self.len(),
                    can_navigate: self.can_navigate(),
                },
                None => DirectoryView::Empty,
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/directory_tests.rs"]
mod tests;
