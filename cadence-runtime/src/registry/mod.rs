mod base;
mod dedicated;
mod facade;
mod policy;
mod shared;

pub use base::{ScheduleRegistry, TaskId};
pub use dedicated::PerTaskTimerRegistry;
pub use facade::SchedulerRegistry;
pub use policy::ExecutionPolicy;
pub use shared::SharedTimerRegistry;

pub(crate) use base::TaskMap;
