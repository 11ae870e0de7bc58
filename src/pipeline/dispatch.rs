use reqwest::Client;

use crate::api::{sheets, telegram};
use crate::config::settings::{Settings, SheetsSettings, TelegramSettings};
use crate::models::lead_models::{DispatchOutcome, DispatchVerdict, SubmissionRecord};

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("failed to serialize submission record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Per-channel outcomes of one settled dispatch round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub telegram: DispatchOutcome,
    pub sheets: DispatchOutcome,
}

impl DispatchReport {
    /// Success iff at least one channel confirmed delivery. Skipped and
    /// Failed are equivalent here: neither got the lead anywhere.
    pub fn verdict(&self) -> DispatchVerdict {
        if self.telegram == DispatchOutcome::Delivered || self.sheets == DispatchOutcome::Delivered
        {
            DispatchVerdict::Success
        } else {
            DispatchVerdict::Failure
        }
    }
}

/// Fires both channels for one record. Channel configuration is injected at
/// construction; an unconfigured channel settles as Skipped without any
/// network traffic. Each channel is attempted exactly once, no retries.
pub struct DispatchCoordinator {
    telegram: Option<TelegramSettings>,
    sheets: Option<SheetsSettings>,
    http: Client,
}

impl DispatchCoordinator {
    pub fn from_settings(settings: &Settings, http: Client) -> Self {
        DispatchCoordinator {
            telegram: settings.telegram.clone(),
            sheets: settings.sheets.clone(),
            http,
        }
    }

    /// Wait-for-both join: the two calls run concurrently and neither
    /// outcome cancels the other. Transport failures settle as Failed
    /// inside each channel; the only error this returns is a failure of
    /// the attempt itself, before the join.
    pub async fn dispatch(
        &self,
        record: &SubmissionRecord,
    ) -> Result<DispatchReport, DispatchError> {
        let payload = serde_json::to_value(record)?;

        let (telegram, sheets) = futures::join!(
            self.send_telegram(record),
            self.send_sheets(&payload),
        );

        tracing::info!(?telegram, ?sheets, "dispatch settled");
        Ok(DispatchReport { telegram, sheets })
    }

    async fn send_telegram(&self, record: &SubmissionRecord) -> DispatchOutcome {
        match &self.telegram {
            Some(settings) => telegram::send_lead_notification(&self.http, settings, record).await,
            None => {
                tracing::info!("Telegram not configured, skipping");
                DispatchOutcome::Skipped
            }
        }
    }

    async fn send_sheets(&self, payload: &serde_json::Value) -> DispatchOutcome {
        match &self.sheets {
            Some(settings) => sheets::forward_lead(&self.http, settings, payload).await,
            None => {
                tracing::info!("Sheets webhook not configured, skipping");
                DispatchOutcome::Skipped
            }
        }
    }
}
