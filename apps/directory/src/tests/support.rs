//! Scripted user sources shared by the app's tests.

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use client_core::UserSource;
use shared::{
    domain::{User, UserId},
    error::FetchError,
};
use tokio::sync::Semaphore;

pub struct ScriptedSource {
    results: Mutex<VecDeque<Result<Vec<User>, FetchError>>>,
    gate: Option<Arc<Semaphore>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(results: impl IntoIterator<Item = Result<Vec<User>, FetchError>>) -> Self {
        Self {
            results: Mutex::new(results.into_iter().collect()),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Each fetch waits for one permit on `gate` before answering.
    pub fn gated(
        results: impl IntoIterator<Item = Result<Vec<User>, FetchError>>,
        gate: Arc<Semaphore>,
    ) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(results)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserSource for ScriptedSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }
        self.results
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::transport("script exhausted")))
    }
}

pub fn user(id: i64, first_name: &str) -> User {
    User {
        id: UserId(id),
        uid: format!("uid-{id}"),
        password: "pa55word".to_string(),
        first_name: first_name.to_string(),
        last_name: "Smith".to_string(),
        username: format!("{}.smith", first_name.to_ascii_lowercase()),
        email: format!("{}.smith@email.com", first_name.to_ascii_lowercase()),
        avatar: format!("https://robohash.org/{id}.png?size=300x300"),
    }
}

pub fn abc() -> Vec<User> {
    vec![user(1, "A"), user(2, "B"), user(3, "C")]
}
