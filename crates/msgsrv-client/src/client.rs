//! The Message Server client proper: four operations, one HTTP exchange each.

use serde::Serialize;

use crate::{config::ClientConfig, errors::Error, Result};

/// Opaque JSON returned by the server; passed through to the caller unchanged.
pub type ApiResult = serde_json::Value;

#[derive(Debug, Serialize)]
struct CaseReplyBody<'a> {
    admin_message: &'a str,
    admin_id: i64,
}

#[derive(Debug, Serialize)]
struct NotifyBody<'a> {
    telegram_id: i64,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct BroadcastBody<'a> {
    message: &'a str,
    /// Omitted from the JSON entirely when `None`; the server reads an absent
    /// field as "broadcast to all users".
    #[serde(skip_serializing_if = "Option::is_none")]
    user_ids: Option<&'a [i64]>,
}

/// Stateless facade over the Message Server HTTP API.
///
/// Cheap to clone (shares the underlying connection pool). Every call is an
/// independent request/response exchange; nothing is retried or queued here.
#[derive(Clone, Debug)]
pub struct MessageServerClient {
    base_url: String,
    http: reqwest::Client,
}

impl MessageServerClient {
    pub fn new(cfg: &ClientConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = cfg.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().expect("reqwest client build");

        Self {
            base_url: cfg.base_url.clone(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Post an admin reply into a case thread.
    ///
    /// `admin_id` defaults to 0 when `None`; the server treats 0 as a
    /// system-originated message.
    pub async fn send_case_reply(
        &self,
        case_id: i64,
        message: &str,
        admin_id: Option<i64>,
    ) -> Result<ApiResult> {
        let path = format!("/api/cases/{case_id}/reply");
        let body = CaseReplyBody {
            admin_message: message,
            admin_id: admin_id.unwrap_or(0),
        };
        self.post_json(&path, &body).await
    }

    /// Notify a single user by Telegram id.
    pub async fn send_notification(&self, telegram_id: i64, message: &str) -> Result<ApiResult> {
        let body = NotifyBody {
            telegram_id,
            message,
        };
        self.post_json("/api/notify", &body).await
    }

    /// Broadcast a message to the given users, or to everyone when
    /// `user_ids` is `None`.
    pub async fn send_broadcast(&self, message: &str, user_ids: Option<&[i64]>) -> Result<ApiResult> {
        let body = BroadcastBody { message, user_ids };
        self.post_json("/api/broadcast", &body).await
    }

    /// Liveness probe. Unlike the send operations this never errors: any
    /// failure, remote or transport, comes back as `false`.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.http.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::warn!(%url, error = %e, "message server unreachable");
                false
            }
        }
    }

    async fn post_json(&self, path: &str, body: &impl Serialize) -> Result<ApiResult> {
        let url = format!("{}{}", self.base_url, path);

        let resp = match self.http.post(&url).json(body).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(%url, error = %e, "message server request failed");
                return Err(Error::Transport(e));
            }
        };

        let status = resp.status();
        if status.is_success() {
            return resp.json::<ApiResult>().await.map_err(|e| {
                tracing::error!(%url, error = %e, "message server response was not JSON");
                Error::Transport(e)
            });
        }

        // Error responses carry `{"detail": "..."}`; anything else maps to
        // the fixed fallback text.
        let detail = resp
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
            .unwrap_or_else(|| "Unknown error".to_string());

        tracing::error!(%url, %status, detail = %detail, "message server rejected the request");
        Err(Error::Remote(detail))
    }
}
