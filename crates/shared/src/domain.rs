use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// One synthetic person as served by the mock data source.
///
/// Every field is required. Extra fields in the payload are ignored, but a
/// missing or mistyped field fails the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub uid: String,
    /// Plaintext, exactly as the mock source returns it.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    /// Avatar image reference; loading it is up to the presentation layer.
    pub avatar: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
