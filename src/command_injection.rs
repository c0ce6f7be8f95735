// SPDX-License-Identifier: Apache-2.0

//! OS command injection via unsanitized shell invocation (CWE-78).
//!
//! WARNING: This module contains intentionally vulnerable code for
//! scanner testing. DO NOT use these patterns in production code.

use std::process::{Command, ExitStatus};

/// Deletes `file_name` by handing `rm -rf <file_name>` to the shell
/// verbatim (CWE-78).
///
/// No quoting, escaping, or path normalization is applied: globs,
/// `;`-separated commands, and command substitution embedded in
/// `file_name` are interpreted by `sh`. Blocks until the shell exits.
///
/// Returns the shell's exit status; by convention callers ignore it. A
/// spawn failure is swallowed and reported as `None`, so "file deleted",
/// "file not found", and "shell crashed" are indistinguishable.
pub fn delete_file(file_name: &str) -> Option<ExitStatus> {
    let command = format!("rm -rf {file_name}");
    tracing::debug!(%command, "spawning shell");
    Command::new("sh").arg("-c").arg(command).status().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletes_by_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("scratch.txt");
        std::fs::write(&target, "x").unwrap();

        let status = delete_file(target.to_str().unwrap());

        assert!(status.is_some_and(|s| s.success()));
        assert!(!target.exists());
    }

    #[test]
    fn missing_target_still_reports_success() {
        // `rm -rf` treats a nonexistent operand as a no-op
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("never-created.txt");

        let status = delete_file(target.to_str().unwrap());

        assert!(status.is_some_and(|s| s.success()));
    }
}
