use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw form fields exactly as the landing page posts them.
/// Nothing here is trusted until it has been through the validator.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLead {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    // the optional messenger handle field on the form
    #[serde(default, rename = "telegram")]
    pub contact_handle: String,
}

/// One validated lead. Only the validator constructs these, so any
/// `SubmissionRecord` handed to dispatch or the fallback log already
/// satisfies the shape rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub phone: String,
    #[serde(rename = "telegram")]
    pub contact_handle: String,
    #[serde(rename = "timestamp")]
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("name must be at least 2 characters after trimming")]
    NameTooShort,
    #[error("phone must be at least 10 characters of digits, spaces, +, -, ( )")]
    PhoneInvalid,
}

/// Per-channel result of one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Delivered,
    /// Channel credentials absent or still the placeholder value.
    Skipped,
    /// Transport error or non-success status. Settled, never thrown.
    Failed,
}

/// Aggregate result across both channels for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchVerdict {
    Success,
    Failure,
}

/// Terminal state of one submission walk. Drives the feedback presenter
/// and nothing else; no state is carried across submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Rejected(ValidationFailure),
    /// At least one channel confirmed delivery.
    Delivered,
    /// Every channel failed or was skipped; the record went to the fallback log.
    SavedLocally,
    /// The dispatch attempt itself blew up before the channels settled.
    /// Also ends in the fallback log, but presents as an error.
    DispatchFailed,
}
