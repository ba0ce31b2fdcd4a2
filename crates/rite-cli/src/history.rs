//! Thin wrapper around the version-control collaborator.
//!
//! The core never talks to git; it consumes materialized strings. This
//! module is the only place that suspends on an external process, and all
//! of its failures stay here as `io::Error`s.

use std::io;
use std::process::Command;

/// Field and record separators for the log format. Commit messages are
/// multi-line, so newline-based splitting is not an option.
const FIELD_SEP: char = '\u{1f}';
const RECORD_SEP: char = '\u{1e}';

/// One commit: hash and full message.
#[derive(Debug, Clone)]
pub struct Commit {
    pub hash: String,
    pub message: String,
}

/// All commits whose message carries a `time=` tag, oldest first.
pub fn log_pulses() -> io::Result<Vec<Commit>> {
    let output = Command::new("git")
        .args([
            "log",
            "--grep=time=",
            "--format=%H%x1f%B%x1e",
            "--reverse",
        ])
        .output()?;

    if !output.status.success() {
        return Err(io::Error::other(format!(
            "git log failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let text = String::from_utf8_lossy(&output.stdout);
    let commits = text
        .split(RECORD_SEP)
        .filter_map(|record| {
            let (hash, message) = record.trim_start().split_once(FIELD_SEP)?;
            Some(Commit {
                hash: hash.trim().to_string(),
                message: message.to_string(),
            })
        })
        .collect();

    Ok(commits)
}

/// Record an envelope as an empty commit.
pub fn commit_envelope(message: &str) -> io::Result<()> {
    let output = Command::new("git")
        .args(["commit", "--allow-empty", "-m", message])
        .output()?;

    if !output.status.success() {
        return Err(io::Error::other(format!(
            "git commit failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(())
}
