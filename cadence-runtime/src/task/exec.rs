use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use futures::FutureExt;
use tracing::Level;

use crate::workload::Workload;

/// Runs one firing of a workload, timing it and reporting the outcome.
///
/// This is the failure boundary: a panicking workload is caught here and
/// reported in the run log line. A driver loop that let the panic through
/// would die with it, silently ending the schedule of every task it drives.
pub(crate) struct TaskExecution {
    name: String,
    counter: AtomicU64,
    level: Level,
    workload: Arc<dyn Workload>,
}

impl TaskExecution {
    pub(crate) fn new(name: String, level: Level, workload: Arc<dyn Workload>) -> Self {
        Self {
            name,
            counter: AtomicU64::new(1),
            level,
            workload,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Run the workload once. The run counter advances on every attempt,
    /// whether the workload returns or panics.
    pub(crate) async fn execute(&self) {
        let run = self.counter.fetch_add(1, Ordering::Relaxed);
        let started = Instant::now();
        let outcome = AssertUnwindSafe(self.workload.run()).catch_unwind().await;
        let took = started.elapsed().as_millis();
        match outcome {
            Ok(()) => emit(
                self.level,
                &format!("{} job #{} took {}ms.", self.name, run, took),
            ),
            Err(payload) => emit(
                self.level,
                &format!(
                    "{} job #{} took {}ms. Exception executing Task {}. panic:{}",
                    self.name,
                    run,
                    took,
                    self.name,
                    panic_message(payload.as_ref())
                ),
            ),
        }
    }
}

/// tracing events carry a const level; dispatch the per-task dynamic one.
fn emit(level: Level, message: &str) {
    if level == Level::ERROR {
        tracing::error!("{message}");
    } else if level == Level::WARN {
        tracing::warn!("{message}");
    } else if level == Level::INFO {
        tracing::info!("{message}");
    } else if level == Level::DEBUG {
        tracing::debug!("{message}");
    } else {
        tracing::trace!("{message}");
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "opaque panic payload"
    }
}
