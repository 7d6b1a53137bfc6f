//! Shared bits for the diagnostic binaries.
//!
//! These talk to the admin panel (port 8001), a separate service from the
//! Message Server the client library wraps.

use std::env;

pub const DEFAULT_ADMIN_PANEL_URL: &str = "http://127.0.0.1:8001";

/// Telegram id the probes fall back to when none is given on the command line.
pub const DEFAULT_TEST_TELEGRAM_ID: i64 = 5093303797;

/// Admin panel base URL from `ADMIN_PANEL_URL`, without a trailing slash.
pub fn admin_panel_url() -> String {
    env::var("ADMIN_PANEL_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ADMIN_PANEL_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// First CLI argument parsed as a Telegram id, or the default test id.
pub fn telegram_id_arg() -> i64 {
    env::args()
        .nth(1)
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_TEST_TELEGRAM_ID)
}

/// First `max` characters of `s`, for printing page bodies without flooding
/// the terminal.
pub fn snippet(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Result of walking the dialogs API: the raw listing, plus the message
/// history of the first dialog when the listing names one.
#[derive(Debug)]
pub struct DialogsProbe {
    pub dialogs: serde_json::Value,
    pub first: Option<(i64, serde_json::Value)>,
}

/// List `/api/dialogs`, then fetch `/api/dialogs/{telegram_id}/messages` for
/// the first dialog listed.
///
/// `first` is `None` when the listing is empty or not an array of dialogs
/// with a numeric `telegram_id`; endpoint failures propagate to the caller.
pub async fn probe_dialogs(http: &reqwest::Client, base: &str) -> anyhow::Result<DialogsProbe> {
    let dialogs: serde_json::Value = http
        .get(format!("{base}/api/dialogs"))
        .send()
        .await?
        .json()
        .await?;

    let Some(telegram_id) = first_dialog_id(&dialogs) else {
        return Ok(DialogsProbe {
            dialogs,
            first: None,
        });
    };

    let messages: serde_json::Value = http
        .get(format!("{base}/api/dialogs/{telegram_id}/messages"))
        .send()
        .await?
        .json()
        .await?;

    Ok(DialogsProbe {
        dialogs,
        first: Some((telegram_id, messages)),
    })
}

fn first_dialog_id(dialogs: &serde_json::Value) -> Option<i64> {
    dialogs
        .as_array()?
        .first()?
        .get("telegram_id")?
        .as_i64()
}
