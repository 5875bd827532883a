use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use cadence_runtime::{
    workload_fn, ConcurrencyMode, ExecutionPolicy, PerTaskTimerRegistry, ScheduleRegistry,
    SchedulerRegistry, SharedTimerRegistry, TaskRequest,
};

/// A request that never fires within a test's lifetime.
fn idle_request() -> TaskRequest {
    TaskRequest::new(Duration::from_secs(3600), workload_fn(|| async {}))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registrations_get_distinct_ids() {
    let registry = Arc::new(SchedulerRegistry::new());

    let mut joins = Vec::new();
    for _ in 0..8 {
        let registry = Arc::clone(&registry);
        joins.push(tokio::spawn(async move {
            (0..25)
                .map(|_| registry.register_task(idle_request()))
                .collect::<Vec<_>>()
        }));
    }

    let mut ids = HashSet::new();
    for join in joins {
        for id in join.await.unwrap() {
            assert!(ids.insert(id), "duplicate task id issued");
        }
    }
    assert_eq!(ids.len(), 200);
    assert_eq!(registry.task_count(), 200);

    registry.clear();
    assert_eq!(registry.task_count(), 0);
}

#[tokio::test]
async fn remove_is_true_exactly_once() {
    let registry = SchedulerRegistry::new();
    let id = registry.register_task(idle_request());
    assert!(registry.remove(id));
    assert!(!registry.remove(id));
}

#[tokio::test]
async fn remove_unknown_id_is_false() {
    let registry = SchedulerRegistry::new();
    assert!(!registry.remove(42));
}

#[tokio::test]
async fn each_policy_routes_and_cancels() {
    let registry = SchedulerRegistry::new();
    let serialized = registry.register_task_as(ExecutionPolicy::SerializedShared, idle_request());
    let overlapping = registry.register_task_as(ExecutionPolicy::OverlappingShared, idle_request());
    let dedicated = registry.register_task_as(ExecutionPolicy::DedicatedTimer, idle_request());
    assert_eq!(registry.task_count(), 3);

    assert!(registry.remove(serialized));
    assert!(registry.remove(overlapping));
    assert!(registry.remove(dedicated));
    assert_eq!(registry.task_count(), 0);
}

#[tokio::test]
async fn removing_one_task_leaves_the_others_registered() {
    let registry = SchedulerRegistry::new();
    let doomed = registry.register_task(idle_request());
    let survivor = registry.register_task(idle_request());

    assert!(registry.remove(doomed));
    assert_eq!(registry.task_count(), 1);
    assert!(registry.remove(survivor));
}

#[tokio::test]
async fn concrete_registries_honor_the_contract() {
    let shared = SharedTimerRegistry::new(ConcurrencyMode::Overlapping);
    let id = shared.register_task(idle_request());
    assert_eq!(shared.task_count(), 1);
    assert!(shared.remove(id));
    assert!(!shared.remove(id));
    assert_eq!(shared.task_count(), 0);

    let id = shared.register_task_with(ConcurrencyMode::Serialized, idle_request());
    assert!(shared.remove(id));

    let dedicated = PerTaskTimerRegistry::new();
    let id = dedicated.register_task(idle_request());
    assert_eq!(dedicated.task_count(), 1);
    assert!(dedicated.remove(id));
    assert!(!dedicated.remove(id));

    let id = dedicated.register_task(idle_request());
    dedicated.clear();
    assert_eq!(dedicated.task_count(), 0);
    assert!(!dedicated.remove(id));
}
