// SPDX-License-Identifier: Apache-2.0

//! Remediated counterparts of the vulnerable fixtures.
//!
//! This module is NOT part of the demonstration: it is the contrast half
//! of the corpus, showing the same two operations written without the
//! vulnerability. Keeping it separate leaves the fixtures in
//! [`crate::sql_injection`] and [`crate::command_injection`] faithful to
//! the anti-patterns they demonstrate.

use std::path::{Component, Path};

use rusqlite::Connection;

use crate::sql_injection::{Row, USERS_DB};
use crate::{FixtureError, Result};

/// Looks up user rows with `user_id` bound as a SQL parameter.
///
/// The query shape is fixed at `WHERE id = ?1`; metacharacters in
/// `user_id` match literally instead of rewriting the statement, so
/// `1 OR 1=1` finds nothing. The connection closes on drop.
pub fn get_user_info(user_id: &str) -> Result<Vec<Row>> {
    let conn = Connection::open(USERS_DB)?;
    let mut stmt = conn.prepare("SELECT * FROM users WHERE id = ?1")?;
    let column_count = stmt.column_count();
    let mut rows = stmt.query([user_id])?;

    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        let mut record = Row::with_capacity(column_count);
        for idx in 0..column_count {
            record.push(row.get(idx)?);
        }
        records.push(record);
    }
    Ok(records)
}

/// Removes `file_name` without consulting a shell.
///
/// Rejects absolute paths and any non-plain component (`..`, `.`, path
/// prefixes), then deletes exactly one directory entry with
/// [`std::fs::remove_file`]. Shell metacharacters have no meaning here;
/// a name containing them is simply a file that does not exist.
pub fn delete_file(file_name: &str) -> Result<()> {
    let path = Path::new(file_name);
    if path.is_absolute() || !path.components().all(|c| matches!(c, Component::Normal(_))) {
        return Err(FixtureError::Rejected {
            reason: format!("unsafe file name: {file_name}"),
        });
    }
    std::fs::remove_file(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_rejects_traversal_and_absolute_paths() {
        assert!(matches!(
            delete_file("../escape.txt"),
            Err(FixtureError::Rejected { .. })
        ));
        assert!(matches!(
            delete_file("/etc/hosts"),
            Err(FixtureError::Rejected { .. })
        ));
        assert!(matches!(
            delete_file("nested/../../escape.txt"),
            Err(FixtureError::Rejected { .. })
        ));
    }

    #[test]
    fn delete_surfaces_missing_target() {
        let result = delete_file("no-such-file-5e1b.txt");
        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
