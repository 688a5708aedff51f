//! Bounded worker pool with submit-and-block dispatch.

use log::info;

use super::error::AnalysisError;

/// At most `workers` submissions run their pipelines concurrently; further
/// submissions queue for a free worker while their callers block. There is no
/// cancellation or timeout: a stream that never ends occupies its worker
/// indefinitely. The extension point for that gap is a deadline threaded
/// through the sampling loop.
pub struct AnalysisPool {
    pool: rayon::ThreadPool,
}

impl AnalysisPool {
    /// Default sizing: one worker per core, capped at 4.
    pub fn default_workers() -> usize {
        num_cpus::get().min(4)
    }

    pub fn new(workers: usize) -> Result<Self, AnalysisError> {
        let workers = workers.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("engage-worker-{}", i))
            .build()
            .map_err(|e| AnalysisError::PoolInit(e.to_string()))?;

        info!("🧵 analysis pool ready: {} workers", workers);
        Ok(Self { pool })
    }

    /// Run `job` on the pool, blocking the caller until it completes.
    pub fn run<F, R>(&self, job: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(job)
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_run_blocks_for_the_result() {
        let pool = AnalysisPool::new(2).unwrap();
        assert_eq!(pool.run(|| 21 * 2), 42);
    }

    #[test]
    fn test_worker_count_is_bounded() {
        let pool = AnalysisPool::new(3).unwrap();
        assert_eq!(pool.workers(), 3);

        let pool = AnalysisPool::new(0).unwrap();
        assert_eq!(pool.workers(), 1);
    }

    #[test]
    fn test_queued_submissions_all_complete() {
        let pool = Arc::new(AnalysisPool::new(2).unwrap());
        let completed = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let pool = Arc::clone(&pool);
                let completed = Arc::clone(&completed);
                std::thread::spawn(move || {
                    pool.run(|| completed.fetch_add(1, Ordering::SeqCst));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(completed.load(Ordering::SeqCst), 8);
    }

    #[test]
    fn test_default_workers_never_exceed_four() {
        let workers = AnalysisPool::default_workers();
        assert!(workers >= 1);
        assert!(workers <= 4);
    }
}
