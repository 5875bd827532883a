use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tokio::sync::Mutex as AsyncMutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::debug;
use uuid::Uuid;

use crate::error::RegistryError;
use crate::workload::Workload;

/// Delegation point for schedules driven by an external cron engine.
///
/// The engine is handed over once at wiring time. Using any registration
/// method before that is a configuration bug in the host application and
/// fails immediately with [`RegistryError::RegistrarNotSet`].
pub struct DynamicScheduleRegistry {
    registrar: RwLock<Option<JobScheduler>>,
}

impl DynamicScheduleRegistry {
    pub fn new() -> Self {
        Self {
            registrar: RwLock::new(None),
        }
    }

    /// Supply the scheduler that all registrations are delegated to.
    pub fn set_registrar(&self, scheduler: JobScheduler) {
        *self
            .registrar
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(scheduler);
    }

    fn registrar(&self) -> Result<JobScheduler, RegistryError> {
        self.registrar
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(RegistryError::RegistrarNotSet)
    }

    /// Register a cron-style task.
    pub async fn register_cron(
        &self,
        expr: &str,
        workload: Arc<dyn Workload>,
    ) -> Result<Uuid, RegistryError> {
        let registrar = self.registrar()?;
        let job = Job::new_async(expr, move |_id, _scheduler| {
            let workload = Arc::clone(&workload);
            Box::pin(async move {
                workload.run().await;
            })
        })?;
        Ok(registrar.add(job).await?)
    }

    /// Register a fixed-rate task: fires every `period` regardless of how
    /// long a run takes.
    pub async fn register_fixed_rate(
        &self,
        period: Duration,
        workload: Arc<dyn Workload>,
    ) -> Result<Uuid, RegistryError> {
        let registrar = self.registrar()?;
        let job = Job::new_repeated_async(period, move |_id, _scheduler| {
            let workload = Arc::clone(&workload);
            Box::pin(async move {
                workload.run().await;
            })
        })?;
        Ok(registrar.add(job).await?)
    }

    /// Register a fixed-delay task. The engine only offers fixed-rate
    /// repetition, so a firing that finds the previous run still in progress
    /// is skipped; runs therefore never overlap and stay at least one period
    /// apart from each other's start.
    pub async fn register_fixed_delay(
        &self,
        period: Duration,
        workload: Arc<dyn Workload>,
    ) -> Result<Uuid, RegistryError> {
        let registrar = self.registrar()?;
        let busy = Arc::new(AsyncMutex::new(()));
        let job = Job::new_repeated_async(period, move |_id, _scheduler| {
            let workload = Arc::clone(&workload);
            let busy = Arc::clone(&busy);
            Box::pin(async move {
                match busy.try_lock() {
                    Ok(_running) => workload.run().await,
                    Err(_) => {
                        debug!("fixed-delay firing skipped, previous run still in progress")
                    }
                }
            })
        })?;
        Ok(registrar.add(job).await?)
    }

    /// Register a task with a caller-built trigger.
    pub async fn register_job(&self, job: Job) -> Result<Uuid, RegistryError> {
        let registrar = self.registrar()?;
        Ok(registrar.add(job).await?)
    }
}

impl Default for DynamicScheduleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
