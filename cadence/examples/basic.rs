use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use cadence::{workload_fn, ExecutionPolicy, ScheduleRegistry, SchedulerRegistry, TaskRequest};

static COUNTER: AtomicU64 = AtomicU64::new(0);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("cadence_runtime=trace")
        .init();

    let registry = SchedulerRegistry::new();

    // Runs every 500 milliseconds; firings may overlap.
    let fast = registry.register_task(
        TaskRequest::new(
            Duration::from_millis(500),
            workload_fn(|| async {
                let count = COUNTER.fetch_add(1, Ordering::SeqCst) + 1;
                println!("[FAST] execution #{count} (every 500ms)");
            }),
        )
        .name("fast-task"),
    );

    // Runs every 2 seconds on its own driver loop.
    let slow = registry.register_task_as(
        ExecutionPolicy::DedicatedTimer,
        TaskRequest::new(
            Duration::from_secs(2),
            workload_fn(|| async {
                println!("[SLOW] every 2 seconds");
            }),
        )
        .name("slow-task"),
    );

    tokio::time::sleep(Duration::from_secs(10)).await;

    registry.remove(fast);
    registry.remove(slow);

    println!(
        "fast task ran {} times in 10 seconds (expected ~20)",
        COUNTER.load(Ordering::SeqCst)
    );
}
