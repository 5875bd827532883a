use std::future::Future;
use std::pin::Pin;

/// A statically declared recurring task, collected at link time and drained
/// by [`crate::RegistryBuilder::register_all`].
///
/// Every schedule field is a string so it can hold a literal ("500ms"), a
/// config placeholder ("${app.sync.period}") or a placeholder with a
/// fallback ("${app.sync.period:5s}"). Empty fields mean "use the default".
pub struct TaskDefinition {
    pub name: &'static str,
    pub policy: &'static str,
    pub period: &'static str,
    pub initial_delay: &'static str,
    pub enabled: &'static str,
    pub level: &'static str,
    pub workload: fn() -> Pin<Box<dyn Future<Output = ()> + Send>>,
}

impl TaskDefinition {
    pub fn new(
        name: &'static str,
        period: &'static str,
        workload: fn() -> Pin<Box<dyn Future<Output = ()> + Send>>,
    ) -> Self {
        Self {
            name,
            policy: "",
            period,
            initial_delay: "",
            enabled: "true",
            level: "trace",
            workload,
        }
    }

    pub fn policy(mut self, policy: &'static str) -> Self {
        self.policy = policy;
        self
    }

    pub fn initial_delay(mut self, initial_delay: &'static str) -> Self {
        self.initial_delay = initial_delay;
        self
    }

    pub fn enabled(mut self, enabled: &'static str) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn level(mut self, level: &'static str) -> Self {
        self.level = level;
        self
    }
}

/// Global distributed slice for collecting task definitions
#[linkme::distributed_slice]
pub static TASK_DEFINITIONS: [fn() -> TaskDefinition] = [..];
