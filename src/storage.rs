//! Persistence boundary: snapshot load/save and the shared mirror.
//!
//! Failures here never reach the reducer: loads fall back to the default
//! state, saves hand the error back for the caller to log, mirror writes are
//! fire-and-forget. The snapshot is the serialized [`TournamentState`] minus
//! its transient session flags; every persisted field defaults individually,
//! so a partial snapshot from an older version still hydrates.

use crate::models::TournamentState;
use chrono::Utc;
use log::{error, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load the snapshot at `path`.
///
/// A missing file is a fresh install. An unreadable or unparseable file is
/// quarantined next to itself with a timestamped suffix so the data can be
/// inspected later, and the default state is returned.
pub fn load_state(path: &Path) -> TournamentState {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return TournamentState::default(),
        Err(e) => {
            warn!("failed to read state file {}: {}", path.display(), e);
            return TournamentState::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(state) => state,
        Err(e) => {
            warn!(
                "state file {} is corrupt ({}); starting fresh",
                path.display(),
                e
            );
            quarantine(path);
            TournamentState::default()
        }
    }
}

fn quarantine(path: &Path) {
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    let mut bad = path.as_os_str().to_owned();
    bad.push(format!(".bad-{}", stamp));
    if let Err(e) = fs::rename(path, &bad) {
        warn!("could not quarantine corrupt state file: {}", e);
    }
}

/// Write the snapshot to `path` (temp file + rename, so a crash mid-write
/// leaves the previous snapshot intact).
pub fn save_state(path: &Path, state: &TournamentState) -> io::Result<()> {
    let json = serde_json::to_string_pretty(state).map_err(io::Error::from)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)
}

/// Mirror the snapshot to a secondary location for shared viewing. Failures
/// are logged and swallowed; local state is already durable when this runs.
pub fn mirror_state(path: &Path, state: &TournamentState) {
    if let Err(e) = save_state(path, state) {
        error!("failed to mirror state to {}: {}", path.display(), e);
    }
}
