use reqwest::Client;

use crate::config::settings::SheetsSettings;
use crate::models::lead_models::DispatchOutcome;

/// One POST of the raw record to the Apps Script webhook. The script
/// answers through an opaque redirect chain, so the response status carries
/// no signal; any POST that completes counts as Delivered. Known blind
/// spot, inherited from the original integration.
pub async fn forward_lead(
    http: &Client,
    settings: &SheetsSettings,
    payload: &serde_json::Value,
) -> DispatchOutcome {
    match http.post(&settings.script_url).json(payload).send().await {
        Ok(_) => {
            tracing::info!("Sheets webhook accepted the POST");
            DispatchOutcome::Delivered
        }
        Err(e) => {
            tracing::warn!("Sheets webhook transport error: {}", e);
            DispatchOutcome::Failed
        }
    }
}
