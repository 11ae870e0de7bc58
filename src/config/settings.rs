use std::env;
use std::path::PathBuf;

// Values the one-click deploy templates ship with. Treated the same as
// an unset variable so a half-configured instance degrades to Skipped
// channels instead of posting garbage.
const BOT_TOKEN_PLACEHOLDER: &str = "YOUR_BOT_TOKEN_HERE";
const CHAT_ID_PLACEHOLDER: &str = "YOUR_CHAT_ID_HERE";
const SCRIPT_URL_PLACEHOLDER: &str = "YOUR_GOOGLE_SCRIPT_URL_HERE";

#[derive(Debug, Clone)]
pub struct TelegramSettings {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct SheetsSettings {
    pub script_url: String,
}

/// Display strings the landing page pulls over `/api/content`.
#[derive(Debug, Clone)]
pub struct DisplayContent {
    pub price: String,
    pub price_note: String,
    pub location: String,
    pub location_note: String,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub telegram: Option<TelegramSettings>,
    pub sheets: Option<SheetsSettings>,
    pub display: DisplayContent,
    pub fallback_path: PathBuf,
    pub bind_addr: String,
}

fn configured(var: &str, placeholder: &str) -> Option<String> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() && value != placeholder => Some(value),
        _ => None,
    }
}

fn display_or(var: &str, default: &str) -> String {
    env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl Settings {
    /// Loads everything once at startup. Channel credentials are optional by
    /// design; missing or placeholder values make that channel Skipped.
    pub fn from_env() -> Self {
        let telegram = match (
            configured("TELEGRAM_BOT_TOKEN", BOT_TOKEN_PLACEHOLDER),
            configured("TELEGRAM_CHAT_ID", CHAT_ID_PLACEHOLDER),
        ) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramSettings { bot_token, chat_id }),
            _ => None,
        };

        let sheets = configured("SHEETS_SCRIPT_URL", SCRIPT_URL_PLACEHOLDER)
            .map(|script_url| SheetsSettings { script_url });

        let display = DisplayContent {
            price: display_or("COURSE_PRICE", "15 000 ₴"),
            price_note: display_or("COURSE_PRICE_NOTE", "* Можлива оплата частинами"),
            location: display_or("COURSE_LOCATION", "Київ, район метро Либідська"),
            location_note: display_or(
                "COURSE_LOCATION_NOTE",
                "Повна адреса надсилається після реєстрації",
            ),
        };

        let fallback_path = env::var("FALLBACK_LOG_PATH")
            .unwrap_or_else(|_| "lead_backups.json".to_string())
            .into();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        Settings {
            telegram,
            sheets,
            display,
            fallback_path,
            bind_addr,
        }
    }
}
