use thiserror::Error;

/// Errors surfaced by the registry and its collaborators.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The delegation path was used before a registrar was supplied. This is
    /// a wiring bug in the host application, not a runtime condition.
    #[error("schedule registrar is not set")]
    RegistrarNotSet,
    #[error("scheduler error: {0}")]
    Scheduler(#[from] tokio_cron_scheduler::JobSchedulerError),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("unresolved config key: {0}")]
    UnresolvedKey(String),
    #[error("invalid duration value: {0}")]
    InvalidDuration(String),
    #[error("invalid execution policy: {0}")]
    InvalidPolicy(String),
}
