// SPDX-License-Identifier: Apache-2.0

//! Error types for the fixture crate.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Test code uses `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur while exercising the fixtures.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Storage-engine error from SQLite (malformed query, missing table,
    /// I/O failure opening the database file).
    ///
    /// The vulnerable query path propagates these uncaught: a `user_id`
    /// that breaks the interpolated statement surfaces here verbatim.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Filesystem error.
    ///
    /// Only the `safe` counterparts produce this; the vulnerable delete
    /// path discards its errors entirely.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A remediated operation refused its input.
    ///
    /// Only the `safe` counterparts produce this; the vulnerable fixtures
    /// never validate anything.
    #[error("input rejected: {reason}")]
    Rejected {
        /// Why the input was refused.
        reason: String,
    },
}
