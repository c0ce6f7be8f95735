// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Vuln Fixtures
//!
//! Live security fixtures: intentionally vulnerable operations that a
//! scanner's test suite can execute end-to-end, so exploit effects are
//! asserted for real instead of only pattern-matched as source text.
//!
//! WARNING: This crate contains intentionally vulnerable code.
//! DO NOT use these patterns in production code, and only exercise the
//! fixtures inside a throwaway working directory.
//!
//! Fixture index:
//!
//! - [`get_user_info`] - SQL injection via string interpolation (CWE-89),
//!   plus a connection handle that is never released (CWE-772)
//! - [`delete_file`] - OS command injection via unsanitized `sh -c`
//!   invocation (CWE-78)
//! - [`db_password`] / [`DB_URL`] - hardcoded credentials (CWE-798)
//!
//! The [`safe`] module holds the remediated counterparts. It is the
//! contrast half of the corpus and deliberately not part of the
//! demonstration surface.
//!
//! ## Modules
//!
//! - [`sql_injection`] - interpolated query against a local SQLite file
//! - [`command_injection`] - shell invocation with concatenated input
//! - [`hardcoded_secrets`] - credential constants embedded in source
//! - [`safe`] - remediated counterparts
//! - [`error`] - error types

// ============================================================================
// Vulnerable Fixtures
// ============================================================================

pub use command_injection::delete_file;
pub use hardcoded_secrets::{DB_URL, db_password};
pub use sql_injection::{Row, USERS_DB, get_user_info};

// ============================================================================
// Error Handling
// ============================================================================

pub use error::FixtureError;

/// Convenience Result type for fixture operations.
///
/// This is equivalent to `std::result::Result<T, FixtureError>`.
pub type Result<T> = std::result::Result<T, FixtureError>;

// ============================================================================
// Modules
// ============================================================================

pub mod command_injection;
pub mod error;
pub mod hardcoded_secrets;
pub mod safe;
pub mod sql_injection;
