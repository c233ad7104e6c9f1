use std::sync::{Arc, Mutex};

use gridwalk_core::Strategy;
use rusqlite::Connection;

/// Shared handler state
///
/// The connection is locked only for the duration of an insert.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub strategy: Strategy,
}

impl AppState {
    pub fn new(conn: Connection, strategy: Strategy) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            strategy,
        }
    }
}
