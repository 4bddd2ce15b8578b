pub mod fetch;
pub mod scheduler;

pub use fetch::{Fetch, FetchError, HttpFetcher};
pub use scheduler::{CycleOutcome, Scheduler, SchedulerState};

use crate::render::{self, Surface};

/// Applies a finished cycle to the surface.
///
/// A failed cycle is logged and leaves the surface exactly as it was; the
/// error is handed back so callers can decide whether to surface it.
pub fn settle<S: Surface + ?Sized>(outcome: CycleOutcome, surface: &mut S) -> Option<FetchError> {
    match outcome {
        Ok(snapshot) => {
            render::render(&snapshot, surface);
            None
        }
        Err(err) => {
            tracing::warn!("failed to load system data: {err}");
            Some(err)
        }
    }
}

/// Fetches once and renders the result.
pub async fn run_cycle<F, S>(fetcher: &F, surface: &mut S) -> Result<(), FetchError>
where
    F: Fetch,
    S: Surface + ?Sized,
{
    match settle(fetcher.fetch().await, surface) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
