//! Execution records: one row per successful path computation

#![allow(clippy::result_large_err)]

use std::time::Instant;

use chrono::{DateTime, SecondsFormat, Utc};
use gridwalk_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use crate::errors::{corrupt_row, from_rusqlite, Result};

const SELECT_COLUMNS: &str = "SELECT id, timestamp, commands, result, duration FROM executions";

/// A persisted execution, serialized as the response record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    /// Number of commands in the request
    pub commands: u64,
    /// Distinct points covered
    pub result: u64,
    /// Computation time in seconds
    pub duration: f64,
}

/// Values for a row about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewExecution {
    pub timestamp: DateTime<Utc>,
    pub commands: u64,
    pub result: u64,
    pub duration: f64,
}

impl NewExecution {
    /// Record stamped with the current time
    pub fn now(commands: u64, result: u64, duration: f64) -> Self {
        Self {
            timestamp: Utc::now(),
            commands,
            result,
            duration,
        }
    }
}

pub struct ExecutionRepo;

impl ExecutionRepo {
    /// Insert a record and return it with its assigned id
    ///
    /// Runs in a transaction; on failure no row is left behind.
    pub fn insert(conn: &mut Connection, new: &NewExecution) -> Result<Execution> {
        const OP: &str = "insert_execution";
        log_op_start!(OP);
        let started = Instant::now();

        match Self::insert_tx(conn, new) {
            Ok(execution) => {
                log_op_end!(
                    OP,
                    duration_ms = started.elapsed().as_millis() as u64,
                    execution_id = execution.id
                );
                Ok(execution)
            }
            Err(err) => {
                log_op_error!(
                    OP,
                    err.clone(),
                    duration_ms = started.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    fn insert_tx(conn: &mut Connection, new: &NewExecution) -> Result<Execution> {
        let stamp = new.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true);
        let commands = to_sql_int("insert_execution", new.commands)?;
        let result = to_sql_int("insert_execution", new.result)?;

        let tx = conn.transaction().map_err(from_rusqlite)?;
        tx.execute(
            "INSERT INTO executions (timestamp, commands, result, duration)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![stamp, commands, result, new.duration],
        )
        .map_err(from_rusqlite)?;
        let id = tx.last_insert_rowid();
        tx.commit().map_err(from_rusqlite)?;

        Ok(Execution {
            id,
            timestamp: parse_timestamp(&stamp)?,
            commands: new.commands,
            result: new.result,
            duration: new.duration,
        })
    }

    pub fn get(conn: &Connection, id: i64) -> Result<Option<Execution>> {
        let raw = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                [id],
                RawRow::read,
            )
            .optional()
            .map_err(from_rusqlite)?;
        raw.map(RawRow::into_execution).transpose()
    }

    /// Most recent executions first
    pub fn list_recent(conn: &Connection, limit: usize) -> Result<Vec<Execution>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = conn
            .prepare(&format!("{} ORDER BY id DESC LIMIT ?1", SELECT_COLUMNS))
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([limit], RawRow::read)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        rows.into_iter().map(RawRow::into_execution).collect()
    }

    pub fn count(conn: &Connection) -> Result<u64> {
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM executions", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        u64::try_from(count).map_err(|e| corrupt_row("count_executions", e))
    }
}

/// Column values as SQLite hands them back
struct RawRow {
    id: i64,
    timestamp: String,
    commands: i64,
    result: i64,
    duration: f64,
}

impl RawRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            timestamp: row.get(1)?,
            commands: row.get(2)?,
            result: row.get(3)?,
            duration: row.get(4)?,
        })
    }

    fn into_execution(self) -> Result<Execution> {
        let op = "read_execution";
        Ok(Execution {
            id: self.id,
            timestamp: parse_timestamp(&self.timestamp)?,
            commands: u64::try_from(self.commands).map_err(|e| corrupt_row(op, e))?,
            result: u64::try_from(self.result).map_err(|e| corrupt_row(op, e))?,
            duration: self.duration,
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| corrupt_row("read_execution", e))
}

fn to_sql_int(op: &str, value: u64) -> Result<i64> {
    i64::try_from(value).map_err(|e| corrupt_row(op, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::apply_migrations;

    fn setup() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_then_get() {
        let mut conn = setup();
        let inserted =
            ExecutionRepo::insert(&mut conn, &NewExecution::now(2, 4, 0.000123)).unwrap();
        let loaded = ExecutionRepo::get(&conn, inserted.id).unwrap().unwrap();
        assert_eq!(loaded, inserted);
    }

    #[test]
    fn test_get_missing_is_none() {
        let conn = setup();
        assert_eq!(ExecutionRepo::get(&conn, 42).unwrap(), None);
    }

    #[test]
    fn test_result_beyond_i64_rejected_before_write() {
        let mut conn = setup();
        let err =
            ExecutionRepo::insert(&mut conn, &NewExecution::now(1, u64::MAX, 0.0)).unwrap_err();
        assert_eq!(err.code(), "ERR_SERIALIZATION");
        assert_eq!(ExecutionRepo::count(&conn).unwrap(), 0);
    }
}
