use std::fs;
use std::path::PathBuf;

use crate::models::lead_models::SubmissionRecord;

/// Append-only local log of submissions no channel confirmed. One named
/// slot holding a JSON array, ordered oldest first. Nothing prunes or
/// replays it; recovery is manual.
pub struct FallbackLog {
    path: PathBuf,
}

impl FallbackLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FallbackLog { path: path.into() }
    }

    /// Reads the stored sequence. A missing or corrupt slot reads as empty
    /// rather than failing; corruption is logged and the slot gets
    /// overwritten on the next append.
    pub fn load(&self) -> Vec<SubmissionRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("fallback log at {:?} is corrupt, treating as empty: {}", self.path, e);
                Vec::new()
            }
        }
    }

    /// Read-modify-write append. Never propagates an error: this runs on a
    /// path that is already presenting a message to the user, so storage
    /// trouble is logged and swallowed. The read-modify-write is not guarded
    /// against concurrent writers; single-writer is assumed, not enforced.
    pub fn append(&self, record: &SubmissionRecord) {
        let mut records = self.load();
        records.push(record.clone());

        let serialized = match serde_json::to_string(&records) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("failed to serialize fallback log: {}", e);
                return;
            }
        };
        match fs::write(&self.path, serialized) {
            Ok(()) => tracing::info!("lead saved to fallback log at {:?}", self.path),
            Err(e) => tracing::error!("failed to write fallback log at {:?}: {}", self.path, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn temp_log() -> FallbackLog {
        let path = std::env::temp_dir().join(format!("fallback-{}.json", uuid::Uuid::new_v4()));
        FallbackLog::new(path)
    }

    fn record(name: &str) -> SubmissionRecord {
        SubmissionRecord {
            name: name.to_string(),
            phone: "+380501234567".to_string(),
            contact_handle: "@ann".to_string(),
            submitted_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn missing_slot_reads_as_empty() {
        assert!(temp_log().load().is_empty());
    }

    #[test]
    fn appended_records_round_trip_in_order() {
        let log = temp_log();
        let expected: Vec<SubmissionRecord> =
            ["Ann", "Bohdan", "Cat"].iter().map(|n| record(n)).collect();
        for r in &expected {
            log.append(r);
        }
        assert_eq!(log.load(), expected);
    }

    #[test]
    fn corrupt_slot_reads_as_empty_and_recovers_on_append() {
        let log = temp_log();
        fs::write(&log.path, "{not json").unwrap();
        assert!(log.load().is_empty());

        log.append(&record("Ann"));
        assert_eq!(log.load(), vec![record("Ann")]);
    }

    #[test]
    fn append_to_unwritable_path_does_not_panic() {
        let log = FallbackLog::new("/nonexistent-dir/never/leads.json");
        log.append(&record("Ann"));
        assert!(log.load().is_empty());
    }
}
