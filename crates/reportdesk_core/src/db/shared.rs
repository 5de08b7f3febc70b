//! Mutex-guarded connection shared by concurrent callers.
//!
//! # Invariants
//! - At most one caller uses the connection at a time.
//! - A poisoned lock is reported as `DbError::LockPoisoned`, never a panic.

use super::{open_db, open_db_in_memory, DbError, DbResult};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

/// Single owner of the store's connection lifecycle.
#[derive(Debug)]
pub struct SharedDb {
    conn: Mutex<Connection>,
}

impl SharedDb {
    /// Wraps an already bootstrapped connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Opens (and migrates) a file database.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Opens (and migrates) a private in-memory database.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    /// Runs `f` with exclusive access to the connection.
    ///
    /// Blocks the calling thread while another caller holds the lock.
    pub fn with_conn<T>(&self, f: impl FnOnce(&mut Connection) -> T) -> DbResult<T> {
        let mut guard = self.conn.lock().map_err(|_| DbError::LockPoisoned)?;
        Ok(f(&mut *guard))
    }
}
