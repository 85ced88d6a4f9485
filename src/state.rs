use crate::storage::{EntryStore, FileStorage};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<EntryStore<FileStorage>>>,
}

impl AppState {
    pub fn new(store: EntryStore<FileStorage>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
