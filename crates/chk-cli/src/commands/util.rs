//! Shared utilities for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use chk_core::{FilterCriteria, Session};

/// Reads a time-clock export and loads it into a fresh session.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// single badly encoded name does not prevent loading the file.
pub fn load_session(path: &Path) -> Result<Session> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let mut session = Session::new();
    let report = session.load(&text);
    if report.punches == 0 {
        tracing::warn!(path = %path.display(), "no punches found in export");
    }
    Ok(session)
}

/// Logs criteria that cannot match anything.
pub fn warn_if_inverted(criteria: &FilterCriteria) {
    if criteria.is_inverted() {
        tracing::warn!(
            from = ?criteria.date_from,
            to = ?criteria.date_to,
            "start date is after end date; no records will match"
        );
    }
}
