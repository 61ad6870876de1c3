use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Where the initial task list is fetched from
    pub endpoint: String,

    /// Upper bound on the initial fetch. `None` waits forever.
    pub request_timeout: Option<Duration>,

    /// Desktop window title and page heading
    pub window_title: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: None,
            window_title: "Todo List".to_string(),
        }
    }
}

impl BoardConfig {
    /// Defaults overridden by `TODOBOARD_ENDPOINT`, `TODOBOARD_TIMEOUT_SECS`
    /// and `TODOBOARD_TITLE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("TODOBOARD_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Some(raw) = lookup("TODOBOARD_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("TODOBOARD_TIMEOUT_SECS is not a number: {raw:?}"))?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        if let Some(title) = lookup("TODOBOARD_TITLE") {
            config.window_title = title;
        }

        Ok(config)
    }
}
