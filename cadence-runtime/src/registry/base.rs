use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Opaque key a caller holds for a registered task.
pub type TaskId = u64;

/// Contract every concrete registry implements: start a recurring task and
/// cancel one or all of them.
pub trait ScheduleRegistry {
    /// Register `request` and start firing it. Returns the id the caller
    /// later hands to [`ScheduleRegistry::remove`].
    fn register_task(&self, request: crate::request::TaskRequest) -> TaskId;

    /// Cancel the task registered under `id` and forget it.
    /// Returns false for ids that are unknown or already removed.
    fn remove(&self, id: TaskId) -> bool;

    /// Cancel and forget every task.
    fn clear(&self);
}

/// Mutex-guarded id -> handle storage shared by the concrete registries.
///
/// Only map mutations happen under the lock. Cancelling an evicted handle is
/// a non-blocking signal and happens after eviction; since eviction has
/// exactly one winner, no handle is ever cancelled twice concurrently.
pub(crate) struct TaskMap<H> {
    inner: Mutex<HashMap<TaskId, H>>,
}

impl<H> TaskMap<H> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TaskId, H>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert under a fresh random id and return it. Collisions across the
    /// 64-bit id space are treated as negligible and not checked.
    pub(crate) fn insert_new(&self, handle: H) -> TaskId {
        let mut map = self.lock();
        let id = rand::random::<TaskId>();
        map.insert(id, handle);
        id
    }

    pub(crate) fn insert(&self, id: TaskId, handle: H) {
        self.lock().insert(id, handle);
    }

    /// Evict the record for `id`. Exactly one concurrent caller can win.
    pub(crate) fn remove(&self, id: TaskId) -> Option<H> {
        self.lock().remove(&id)
    }

    /// Evict every record in one guarded step.
    pub(crate) fn drain(&self) -> Vec<H> {
        self.lock().drain().map(|(_, handle)| handle).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }
}
