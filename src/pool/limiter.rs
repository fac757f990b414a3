// src/pool/limiter.rs
// =============================================================================
// A semaphore-gated admission primitive.
//
// How it works:
// 1. Every task waits for a permit before it starts doing anything
// 2. At most `limit` permits exist, so at most `limit` tasks are in flight
// 3. tokio's Semaphore is fair: waiting tasks are admitted in the order they
//    asked for a permit
// 4. limit == 0 means "no limit": no semaphore at all
//
// Nothing is spawned. run_all drives the tasks with try_join_all inside the
// calling task, so the first error wins and the remaining futures are dropped.
// =============================================================================

use std::future::Future;
use std::sync::Arc;

use futures::future::try_join_all;
use tokio::sync::Semaphore;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Limiter {
    limit: usize,
    semaphore: Option<Arc<Semaphore>>,
}

impl Limiter {
    pub fn new(limit: usize) -> Self {
        let semaphore = (limit > 0).then(|| Arc::new(Semaphore::new(limit)));
        Self { limit, semaphore }
    }

    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// `None` when unbounded
    pub fn limit(&self) -> Option<usize> {
        self.semaphore.as_ref().map(|_| self.limit)
    }

    // Runs one task once a permit is free
    pub async fn run<F, T>(&self, task: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match &self.semaphore {
            None => task.await,
            Some(semaphore) => {
                // Held until the task finishes, then released on drop
                let _permit = semaphore.acquire().await.map_err(|_| Error::LimiterClosed)?;
                task.await
            }
        }
    }

    // Runs every task under the limit and waits for all of them.
    // Results come back in input order.
    pub async fn run_all<I, F, T>(&self, tasks: I) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Result<T>>,
    {
        // Wrap each task in run() so it waits for its own permit
        try_join_all(tasks.into_iter().map(|task| self.run(task))).await
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a semaphore and not buffer_unordered?
//    - buffer_unordered(N) caps one stream of futures
//    - A shared Limiter can cap futures coming from several places at once,
//      e.g. the profile fetches of every organization in one call
//
// 2. What is a permit?
//    - semaphore.acquire() hands out a guard (SemaphorePermit)
//    - Dropping the guard gives the slot back, even on an early `?` return
//
// 3. Why does `_permit` start with an underscore?
//    - We never read it; we only need it alive until task.await finishes
//    - A plain `_` would drop it immediately and release the slot too early
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Tracks how many tasks are running at once
    #[derive(Default)]
    struct Gauge {
        current: AtomicUsize,
        max: AtomicUsize,
    }

    impl Gauge {
        async fn work(&self, value: usize) -> Result<usize> {
            let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
            self.max.fetch_max(now, Ordering::SeqCst);
            for _ in 0..3 {
                tokio::task::yield_now().await;
            }
            self.current.fetch_sub(1, Ordering::SeqCst);
            Ok(value)
        }
    }

    #[test]
    fn test_zero_means_unbounded() {
        assert_eq!(Limiter::new(0).limit(), None);
        assert_eq!(Limiter::unbounded().limit(), None);
        assert_eq!(Limiter::new(4).limit(), Some(4));
    }

    #[tokio::test]
    async fn test_never_exceeds_limit() {
        let gauge = Gauge::default();
        let limiter = Limiter::new(3);

        let results = limiter
            .run_all((0..10).map(|i| gauge.work(i)))
            .await
            .unwrap();

        assert_eq!(results, (0..10).collect::<Vec<_>>());
        assert_eq!(gauge.max.load(Ordering::SeqCst), 3);
        assert_eq!(gauge.current.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unbounded_runs_everything_at_once() {
        let gauge = Gauge::default();
        let limiter = Limiter::unbounded();

        limiter.run_all((0..10).map(|i| gauge.work(i))).await.unwrap();

        assert_eq!(gauge.max.load(Ordering::SeqCst), 10);
    }

    #[tokio::test]
    async fn test_first_error_fails_everything() {
        let limiter = Limiter::new(2);
        let tasks = (0..5).map(|i| async move {
            if i == 1 {
                Err(Error::Api("boom".to_string()))
            } else {
                Ok(i)
            }
        });

        let err = limiter.run_all(tasks).await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[tokio::test]
    async fn test_empty_input() {
        let limiter = Limiter::new(2);
        let results: Vec<usize> = limiter
            .run_all(Vec::<std::future::Ready<Result<usize>>>::new())
            .await
            .unwrap();
        assert!(results.is_empty());
    }
}
