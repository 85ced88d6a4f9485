pub mod analytics;
pub mod app;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod journal;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{EntryStore, FileStorage, MemoryStorage, StorageBackend};
