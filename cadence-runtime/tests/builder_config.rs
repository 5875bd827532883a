use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use cadence_runtime::{
    ExecutionPolicy, RegistryBuilder, ScheduleRegistry, TaskDefinition, TASK_DEFINITIONS,
};
use linkme::distributed_slice;

static LINKED_FIRES: AtomicU64 = AtomicU64::new(0);

fn linked_beat() -> Pin<Box<dyn Future<Output = ()> + Send>> {
    Box::pin(async {
        LINKED_FIRES.fetch_add(1, Ordering::SeqCst);
    })
}

#[distributed_slice(TASK_DEFINITIONS)]
static LINKED_TASK: fn() -> TaskDefinition =
    || TaskDefinition::new("linked-beat", "50ms", linked_beat).policy("dedicated-timer");

fn noop() -> Pin<Box<dyn Future<Output = ()> + Send>> {
    Box::pin(async {})
}

#[tokio::test(start_paused = true)]
async fn register_all_schedules_linked_definitions() {
    let registry = RegistryBuilder::new().register_all().build().unwrap();
    assert_eq!(registry.task_count(), 1);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(LINKED_FIRES.load(Ordering::SeqCst) >= 5);
    registry.clear();
}

#[tokio::test]
async fn builder_resolves_placeholders_and_disabled_flags() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        concat!(
            "[registry]\n",
            "default_policy = \"serialized-shared\"\n",
            "\n",
            "[app]\n",
            "period = \"40ms\"\n",
            "enabled = \"false\"\n",
        )
    )
    .unwrap();

    let registry = RegistryBuilder::with_toml(file.path().to_str().unwrap())
        .unwrap()
        .task(TaskDefinition::new("from-config", "${app.period}", noop))
        .task(
            TaskDefinition::new("disabled", "${app.period}", noop).enabled("${app.enabled}"),
        )
        .task(TaskDefinition::new(
            "defaulted",
            "${app.missing:75ms}",
            noop,
        ))
        .build()
        .unwrap();

    assert_eq!(registry.default_policy(), ExecutionPolicy::SerializedShared);
    assert_eq!(registry.task_count(), 2);
    registry.clear();
}

#[tokio::test]
async fn builder_rejects_unresolvable_knobs() {
    let registry = RegistryBuilder::new()
        .task(TaskDefinition::new("broken", "${app.missing}", noop))
        .build();
    assert!(registry.is_err());

    let registry = RegistryBuilder::new()
        .task(TaskDefinition::new("garbage", "soon", noop))
        .build();
    assert!(registry.is_err());

    let registry = RegistryBuilder::new()
        .task(TaskDefinition::new("bad-policy", "1s", noop).policy("threaded"))
        .build();
    assert!(registry.is_err());
}

#[tokio::test]
async fn bare_numbers_are_milliseconds() {
    let registry = RegistryBuilder::new()
        .task(TaskDefinition::new("plain", "250", noop))
        .build()
        .unwrap();
    assert_eq!(registry.task_count(), 1);
    registry.clear();
}
