use crate::config::BoardConfig;
use crate::domain::task::Task;
use crate::services::error_handling::{LoadError, log_load_failure};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Somewhere the initial task list comes from.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<Task>, LoadError>;
}

/// Result of the one-time load. Failure is kept explicit here even though
/// the board shows the same empty list either way.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Vec<Task>),
    Failed(LoadError),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    pub fn into_tasks(self) -> Vec<Task> {
        match self {
            LoadOutcome::Loaded(tasks) => tasks,
            LoadOutcome::Failed(_) => Vec::new(),
        }
    }
}

pub async fn load_initial(source: &dyn TaskSource) -> LoadOutcome {
    let origin = source.describe();
    debug!(source = %origin, "Fetching initial tasks");

    match source.fetch().await {
        Ok(tasks) => {
            info!(source = %origin, count = tasks.len(), "Loaded initial tasks");
            LoadOutcome::Loaded(tasks)
        }
        Err(e) => {
            log_load_failure(&origin, &e);
            LoadOutcome::Failed(e)
        }
    }
}

pub fn decode_tasks(body: &[u8]) -> Result<Vec<Task>, LoadError> {
    Ok(serde_json::from_slice(body)?)
}

/// GETs a JSON array of tasks from a fixed endpoint.
#[derive(Clone)]
pub struct HttpTaskSource {
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpTaskSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.endpoint.clone()).with_timeout(config.request_timeout)
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TaskSource for HttpTaskSource {
    fn describe(&self) -> String {
        self.endpoint.clone()
    }

    async fn fetch(&self) -> Result<Vec<Task>, LoadError> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        decode_tasks(&body)
    }
}

/// Hands out a fixed list, or a fixed failure. Useful offline and in tests.
#[derive(Debug, Clone)]
pub struct StaticTaskSource {
    result: Result<Vec<Task>, String>,
}

impl StaticTaskSource {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { result: Ok(tasks) }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(reason.into()),
        }
    }
}

#[async_trait]
impl TaskSource for StaticTaskSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn fetch(&self) -> Result<Vec<Task>, LoadError> {
        self.result.clone().map_err(LoadError::Unavailable)
    }
}
