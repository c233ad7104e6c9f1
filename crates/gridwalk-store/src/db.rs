//! Database connection management

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Path value that selects an in-memory database
pub const IN_MEMORY: &str = ":memory:";

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Open by configured path, honouring [`IN_MEMORY`], and apply pragmas
pub fn open_configured(path: &str) -> Result<Connection> {
    let conn = if path == IN_MEMORY {
        open_in_memory()?
    } else {
        open(path)?
    };
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection
pub fn configure(conn: &Connection) -> Result<()> {
    // journal_mode returns a row, so it goes through query_row
    conn.query_row("PRAGMA journal_mode = WAL", [], |_| Ok(()))
        .map_err(from_rusqlite)?;
    conn.execute_batch("PRAGMA busy_timeout = 5000")
        .map_err(from_rusqlite)?;
    Ok(())
}
