use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// A recurring unit of work.
///
/// The registry never inspects the outcome of a run: a workload that panics
/// is caught and logged at the execution boundary and the schedule keeps
/// going. Interruption on cancellation is cooperative — a run is stopped at
/// its next await point, and a workload that never awaits runs to completion.
pub trait Workload: Send + Sync {
    /// Execute one run of the workload.
    fn run(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

struct FnWorkload<F> {
    f: F,
}

impl<F, Fut> Workload for FnWorkload<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send + 'static,
{
    fn run(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin((self.f)())
    }
}

/// Wrap an async closure as a [`Workload`].
///
/// # Example
///
/// ```rust
/// use cadence_runtime::workload_fn;
///
/// let workload = workload_fn(|| async {
///     println!("tick");
/// });
/// ```
pub fn workload_fn<F, Fut>(f: F) -> Arc<dyn Workload>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Arc::new(FnWorkload { f })
}
