use reqwest::Client;
use serde_json::json;

use crate::config::settings::TelegramSettings;
use crate::models::lead_models::{DispatchOutcome, SubmissionRecord};

// Characters with special meaning in Telegram's legacy Markdown mode.
const MARKDOWN_SPECIALS: &str = "_*[]()~`>#+-=|{}.!";

/// Backslash-escapes every Markdown special character so user input cannot
/// break the notification formatting. Each occurrence gets exactly one
/// backslash.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_SPECIALS.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Human-readable notification for the course owner's chat.
pub fn build_notification(record: &SubmissionRecord) -> String {
    let handle = if record.contact_handle.is_empty() {
        "Не вказано".to_string()
    } else {
        escape_markdown(&record.contact_handle)
    };

    format!(
        "🎓 *Нова заявка на курс!*\n\n\
         👤 *Ім'я:* {}\n\
         📞 *Телефон:* {}\n\
         💬 *Telegram:* {}\n\n\
         📅 *Час:* {}",
        escape_markdown(&record.name),
        escape_markdown(&record.phone),
        handle,
        record.submitted_at.format("%d.%m.%Y %H:%M:%S UTC"),
    )
}

/// One sendMessage POST. Delivered iff Telegram answers 2xx; transport
/// errors settle as Failed rather than propagating, so the other channel's
/// outcome still counts.
pub async fn send_lead_notification(
    http: &Client,
    settings: &TelegramSettings,
    record: &SubmissionRecord,
) -> DispatchOutcome {
    let url = format!(
        "https://api.telegram.org/bot{}/sendMessage",
        settings.bot_token
    );
    let body = json!({
        "chat_id": &settings.chat_id,
        "text": build_notification(record),
        "parse_mode": "Markdown",
    });

    match http.post(&url).json(&body).send().await {
        Ok(response) if response.status().is_success() => {
            tracing::info!("Telegram notification delivered");
            DispatchOutcome::Delivered
        }
        Ok(response) => {
            tracing::warn!("Telegram sendMessage returned {}", response.status());
            DispatchOutcome::Failed
        }
        Err(e) => {
            tracing::warn!("Telegram sendMessage transport error: {}", e);
            DispatchOutcome::Failed
        }
    }
}
