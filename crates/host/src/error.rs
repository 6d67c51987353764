use thiserror::Error;

/// Failures at the host boundary (the simulation itself never fails)
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to start host runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("host is not running")]
    Stopped,

    #[error("host task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("failed to encode observation: {0}")]
    Encode(#[from] serde_json::Error),
}
