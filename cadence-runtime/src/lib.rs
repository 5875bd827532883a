//! Cadence Runtime - Core runtime for periodic task scheduling
//!
//! This crate provides the execution core for registering recurring tasks,
//! running them on shared or dedicated timing resources, and cancelling a
//! single task without disturbing any other.

mod builder;
mod catalog;
mod config;
mod error;
mod registrar;
mod registry;
mod request;
mod scheduler;
mod task;
mod time_unit;
mod workload;

// Re-export public API
pub use builder::RegistryBuilder;
pub use catalog::{TaskDefinition, TASK_DEFINITIONS};
pub use crate::config::{load_toml_config, load_yaml_config, resolve_config_value, RegistrySettings};
pub use error::RegistryError;
pub use linkme;
pub use registrar::DynamicScheduleRegistry;
pub use registry::{
    ExecutionPolicy, PerTaskTimerRegistry, ScheduleRegistry, SchedulerRegistry,
    SharedTimerRegistry, TaskId,
};
pub use request::TaskRequest;
pub use task::ConcurrencyMode;
pub use time_unit::TimeUnit;
pub use workload::{workload_fn, Workload};
