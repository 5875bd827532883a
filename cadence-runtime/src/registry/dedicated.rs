use super::base::{ScheduleRegistry, TaskId, TaskMap};
use crate::request::TaskRequest;
use crate::scheduler::DedicatedScheduler;
use crate::task::TaskExecution;

/// Registry allocating one dedicated driver loop per task.
///
/// Isolation here is structural: a task that stalls or bursts occupies only
/// its own loop. The trade-off is one timer resource per task and no mid-run
/// interruption.
pub struct PerTaskTimerRegistry {
    tasks: TaskMap<DedicatedScheduler>,
}

impl PerTaskTimerRegistry {
    pub fn new() -> Self {
        Self {
            tasks: TaskMap::new(),
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl ScheduleRegistry for PerTaskTimerRegistry {
    /// The dedicated scheduler starts firing on construction.
    fn register_task(&self, request: TaskRequest) -> TaskId {
        let initial_delay = request.initial_delay_or_period();
        let period = request.period;
        let exec = TaskExecution::new(request.name, request.level, request.workload);
        self.tasks
            .insert_new(DedicatedScheduler::new(exec, initial_delay, period))
    }

    fn remove(&self, id: TaskId) -> bool {
        match self.tasks.remove(id) {
            Some(scheduler) => {
                scheduler.cancel();
                true
            }
            None => false,
        }
    }

    fn clear(&self) {
        for scheduler in self.tasks.drain() {
            scheduler.cancel();
        }
    }
}

impl Default for PerTaskTimerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
