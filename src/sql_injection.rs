// SPDX-License-Identifier: Apache-2.0

//! SQL injection via string interpolation (CWE-89).
//!
//! WARNING: This module contains intentionally vulnerable code for
//! scanner testing. DO NOT use these patterns in production code.

use std::fmt::Display;

use rusqlite::Connection;
use rusqlite::types::Value;

use crate::Result;

/// File name of the SQLite store every call opens, resolved against the
/// process working directory. Created on first use by SQLite itself.
pub const USERS_DB: &str = "users.db";

/// One result row: an ordered sequence of dynamically typed column values.
///
/// No schema is assumed; the column count comes from the prepared
/// statement at runtime.
pub type Row = Vec<Value>;

/// Looks up user rows by interpolating `user_id` directly into the query
/// text (CWE-89).
///
/// The literal textual form of `user_id` is substituted into
/// `SELECT * FROM users WHERE id = <value>` with no escaping, quoting, or
/// type coercion, so input like `1 OR 1=1` widens the query to every row
/// in the table.
///
/// Every call opens a fresh connection to [`USERS_DB`] and, on success,
/// deliberately leaks the handle so it stays open for the life of the
/// process (CWE-772). Storage errors propagate to the caller unhandled.
pub fn get_user_info(user_id: impl Display) -> Result<Vec<Row>> {
    let conn = Connection::open(USERS_DB)?;
    let sql = format!("SELECT * FROM users WHERE id = {user_id}");
    tracing::debug!(%sql, "executing interpolated query");

    let mut records = Vec::new();
    {
        let mut stmt = conn.prepare(&sql)?;
        let column_count = stmt.column_count();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut record = Row::with_capacity(column_count);
            for idx in 0..column_count {
                record.push(row.get(idx)?);
            }
            records.push(record);
        }
    }

    // The handle stays open: no release on any success path.
    std::mem::forget(conn);
    Ok(records)
}
