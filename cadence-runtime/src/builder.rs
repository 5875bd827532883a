use std::sync::Arc;
use std::time::Duration;

use config::Config;
use tracing::{info, warn, Level};

use crate::catalog::{TaskDefinition, TASK_DEFINITIONS};
use crate::config::{load_toml_config, load_yaml_config, resolve_config_value, RegistrySettings};
use crate::error::RegistryError;
use crate::registry::{ExecutionPolicy, ScheduleRegistry, SchedulerRegistry};
use crate::request::TaskRequest;
use crate::time_unit::TimeUnit;
use crate::workload::workload_fn;

/// Builds a [`SchedulerRegistry`] from configuration plus a set of task
/// definitions, resolving every schedule knob against the config whether it
/// came in as a literal or a `${...}` placeholder.
pub struct RegistryBuilder {
    config: Arc<Config>,
    definitions: Vec<TaskDefinition>,
}

impl RegistryBuilder {
    /// Create a new builder with default config (empty)
    pub fn new() -> Self {
        Self {
            config: Arc::new(Config::default()),
            definitions: Vec::new(),
        }
    }

    /// Create with TOML config file
    pub fn with_toml(path: &str) -> Result<Self, RegistryError> {
        Ok(Self {
            config: Arc::new(load_toml_config(path)?),
            definitions: Vec::new(),
        })
    }

    /// Create with YAML config file
    pub fn with_yaml(path: &str) -> Result<Self, RegistryError> {
        Ok(Self {
            config: Arc::new(load_yaml_config(path)?),
            definitions: Vec::new(),
        })
    }

    /// Create with custom config
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            definitions: Vec::new(),
        }
    }

    /// Queue one task definition for registration.
    pub fn task(mut self, definition: TaskDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Queue every definition collected in [`TASK_DEFINITIONS`].
    pub fn register_all(mut self) -> Self {
        self.definitions
            .extend(TASK_DEFINITIONS.iter().map(|definition| definition()));
        self
    }

    /// Resolve and register every queued definition.
    pub fn build(self) -> Result<SchedulerRegistry, RegistryError> {
        let settings = RegistrySettings::from_config(&self.config)?;
        let registry = match settings.default_policy {
            Some(policy) => SchedulerRegistry::with_default_policy(policy),
            None => SchedulerRegistry::new(),
        };

        for definition in self.definitions {
            let enabled = resolve_config_value(definition.enabled, &self.config)?;
            if enabled.eq_ignore_ascii_case("false") {
                info!(task = definition.name, "task disabled by config");
                continue;
            }

            let period = parse_duration_field(definition.period, &self.config)?;
            let initial_delay = match definition.initial_delay {
                "" => None,
                value => Some(parse_duration_field(value, &self.config)?),
            };
            let level = parse_level(&resolve_config_value(definition.level, &self.config)?);

            let handler = definition.workload;
            let mut request = TaskRequest::new(period, workload_fn(move || handler()))
                .name(definition.name)
                .level(level);
            if let Some(delay) = initial_delay {
                request = request.initial_delay(delay);
            }

            let id = match definition.policy {
                "" => registry.register_task(request),
                value => {
                    let policy: ExecutionPolicy =
                        resolve_config_value(value, &self.config)?.parse()?;
                    registry.register_task_as(policy, request)
                }
            };
            info!(task = definition.name, id, "task registered");
        }

        Ok(registry)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepts shorthand ("500ms", "5s") or a bare number of milliseconds.
fn parse_duration_field(value: &str, config: &Config) -> Result<Duration, RegistryError> {
    let resolved = resolve_config_value(value, config)?;
    match TimeUnit::parse_duration(&resolved) {
        Some((value, unit)) => Ok(unit.duration_of(value)),
        None => resolved
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| RegistryError::InvalidDuration(resolved)),
    }
}

fn parse_level(value: &str) -> Level {
    match value.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" | "" => Level::TRACE,
        other => {
            warn!(level = other, "unknown log level, using trace");
            Level::TRACE
        }
    }
}
