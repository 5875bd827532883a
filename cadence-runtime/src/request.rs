use std::sync::Arc;
use std::time::Duration;

use tracing::Level;

use crate::workload::Workload;

/// What a caller asks the registry to run: a named workload with a period,
/// an optional initial delay and the level its run reports are logged at.
#[derive(Clone)]
pub struct TaskRequest {
    pub(crate) name: String,
    pub(crate) period: Duration,
    pub(crate) initial_delay: Option<Duration>,
    pub(crate) level: Level,
    pub(crate) workload: Arc<dyn Workload>,
}

impl TaskRequest {
    pub fn new(period: Duration, workload: Arc<dyn Workload>) -> Self {
        Self {
            name: "timer-task".to_string(),
            period,
            initial_delay: None,
            level: Level::TRACE,
            workload,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Delay before the first firing. Defaults to the period.
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = Some(delay);
        self
    }

    /// Level the per-run log line is emitted at.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub(crate) fn initial_delay_or_period(&self) -> Duration {
        self.initial_delay.unwrap_or(self.period)
    }
}
