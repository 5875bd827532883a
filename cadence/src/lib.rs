//! # Cadence - Periodic Task Scheduling Registry for Rust
//!
//! This library provides a registry for recurring work: submit a workload
//! with a period and an initial delay, get back an opaque id, and later
//! cancel that one task without disturbing any other.
//!
//! ## Features
//!
//! - **Execution policies**: serialized (runs of one task never overlap),
//!   overlapping (every firing runs independently), or a dedicated driver
//!   loop per task for structural isolation
//! - **Failure containment**: a panicking workload is caught and logged at
//!   the execution boundary; the schedule keeps going
//! - **Prompt cancellation**: in-flight runs are interrupted at their next
//!   await point when a task is removed
//! - **Config support**: placeholders like `${app.interval}` resolve
//!   schedule knobs from TOML/YAML config files
//! - **Cron delegation**: hand a `JobScheduler` to the dynamic registry and
//!   register cron, fixed-rate and fixed-delay jobs on it
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use cadence::{workload_fn, ExecutionPolicy, ScheduleRegistry, SchedulerRegistry, TaskRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = SchedulerRegistry::new();
//!
//!     let id = registry.register_task_as(
//!         ExecutionPolicy::SerializedShared,
//!         TaskRequest::new(
//!             Duration::from_secs(30),
//!             workload_fn(|| async {
//!                 println!("sync inventory");
//!             }),
//!         )
//!         .name("inventory-sync")
//!         .initial_delay(Duration::from_secs(5)),
//!     );
//!
//!     // ... later
//!     assert!(registry.remove(id));
//! }
//! ```
//!
//! ## Configuration
//!
//! Create `config/application.toml`:
//!
//! ```toml
//! [registry]
//! default_policy = "overlapping-shared"
//!
//! [app.sync]
//! period = "30s"
//! enabled = true
//! ```
//!
//! and resolve it through the builder:
//!
//! ```rust,ignore
//! let registry = RegistryBuilder::with_toml("config/application.toml")?
//!     .register_all()
//!     .build()?;
//! ```
//!
//! You can also use environment variables with the `APP_` prefix:
//!
//! ```bash
//! export APP_SYNC_PERIOD="10s"
//! ```

// Re-export core types
pub use cadence_runtime::{
    load_toml_config, load_yaml_config, resolve_config_value, workload_fn, ConcurrencyMode,
    DynamicScheduleRegistry, ExecutionPolicy, PerTaskTimerRegistry, RegistryBuilder,
    RegistryError, RegistrySettings, ScheduleRegistry, SchedulerRegistry, SharedTimerRegistry,
    TaskDefinition, TaskId, TaskRequest, TimeUnit, Workload, TASK_DEFINITIONS,
};

// Make the runtime available for downstream use
pub use cadence_runtime;

// Re-export commonly used types
pub use tokio_cron_scheduler::{Job, JobScheduler};
