use std::{env, fs, path::Path, time::Duration};

/// Default base URL of the Message Server (local deployment, port 8002).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8002";

/// Configuration injected into [`MessageServerClient`](crate::MessageServerClient)
/// at construction, so tests and multi-environment setups can point the same
/// code at different servers.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:8002`.
    pub base_url: String,
    /// Per-request timeout. `None` means an unbounded wait on the network call.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            request_timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Load from the environment: `MESSAGE_SERVER_URL` (default
    /// [`DEFAULT_BASE_URL`]) and optional `MESSAGE_SERVER_TIMEOUT_MS`.
    ///
    /// A `.env` file in the working directory is read first, without
    /// overriding variables already set in the process environment.
    pub fn from_env() -> Self {
        load_dotenv_if_present(Path::new(".env"));

        let base_url = env_str("MESSAGE_SERVER_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let request_timeout = env_u64("MESSAGE_SERVER_TIMEOUT_MS").map(Duration::from_millis);

        let mut cfg = Self::new(base_url);
        cfg.request_timeout = request_timeout;
        cfg
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
