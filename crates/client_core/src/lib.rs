//! Data client and view controller for paging through a batch of synthetic
//! users fetched from a mock data endpoint.

pub mod config;
pub mod directory;
pub mod user_client;

pub use config::{ClientConfig, BATCH_SIZE, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, DEFAULT_TIMEOUT_MS};
pub use directory::{
    DirectoryController, DirectoryState, DirectoryStatus, DirectoryView, LoadTicket,
};
pub use user_client::{decode_users, UserDataClient, UserSource};
