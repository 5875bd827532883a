use super::base::{ScheduleRegistry, TaskId, TaskMap};
use super::dedicated::PerTaskTimerRegistry;
use super::policy::ExecutionPolicy;
use super::shared::SharedTimerRegistry;
use crate::request::TaskRequest;
use crate::task::ConcurrencyMode;

/// Single entry point dispatching registrations by execution policy.
///
/// Owns one registry per timing strategy plus the id -> policy map that
/// routes later cancellations. Each layer carries its own lock and there is
/// no lock spanning both sub-registries; the one invariant owned here is
/// that every id lives in exactly one sub-registry and has exactly one
/// policy entry.
pub struct SchedulerRegistry {
    shared: SharedTimerRegistry,
    dedicated: PerTaskTimerRegistry,
    policies: TaskMap<ExecutionPolicy>,
    default_policy: ExecutionPolicy,
}

impl SchedulerRegistry {
    pub fn new() -> Self {
        Self::with_default_policy(ExecutionPolicy::OverlappingShared)
    }

    pub fn with_default_policy(default_policy: ExecutionPolicy) -> Self {
        Self {
            shared: SharedTimerRegistry::new(ConcurrencyMode::Overlapping),
            dedicated: PerTaskTimerRegistry::new(),
            policies: TaskMap::new(),
            default_policy,
        }
    }

    pub fn default_policy(&self) -> ExecutionPolicy {
        self.default_policy
    }

    /// Register under an explicit policy.
    pub fn register_task_as(&self, policy: ExecutionPolicy, request: TaskRequest) -> TaskId {
        let id = match policy {
            ExecutionPolicy::SerializedShared => self
                .shared
                .register_task_with(ConcurrencyMode::Serialized, request),
            ExecutionPolicy::OverlappingShared => self
                .shared
                .register_task_with(ConcurrencyMode::Overlapping, request),
            ExecutionPolicy::DedicatedTimer => self.dedicated.register_task(request),
        };
        self.policies.insert(id, policy);
        id
    }

    pub fn task_count(&self) -> usize {
        self.policies.len()
    }
}

impl ScheduleRegistry for SchedulerRegistry {
    /// Register under the registry's default policy.
    fn register_task(&self, request: TaskRequest) -> TaskId {
        self.register_task_as(self.default_policy, request)
    }

    fn remove(&self, id: TaskId) -> bool {
        match self.policies.remove(id) {
            Some(ExecutionPolicy::SerializedShared) | Some(ExecutionPolicy::OverlappingShared) => {
                self.shared.remove(id)
            }
            Some(ExecutionPolicy::DedicatedTimer) => self.dedicated.remove(id),
            None => false,
        }
    }

    fn clear(&self) {
        self.shared.clear();
        self.dedicated.clear();
        self.policies.drain();
    }
}

impl Default for SchedulerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
