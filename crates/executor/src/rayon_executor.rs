//! Rayon-based parallel executor.

use quire_traits::{Executor, ExecutorError};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;

/// A parallel executor using rayon's work-stealing pool.
///
/// [`RayonExecutor::new`] shares rayon's global pool; [`RayonExecutor::with_threads`]
/// gets a dedicated pool of a fixed size.
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    num_threads: usize,
    pool: Option<Arc<ThreadPool>>,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            num_threads: rayon::current_num_threads(),
            pool: None,
        }
    }

    /// Builds a dedicated pool with `num_threads` workers.
    pub fn with_threads(num_threads: usize) -> Result<Self, ExecutorError> {
        if num_threads == 0 {
            return Err(ExecutorError::new("thread count must be at least 1"));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|index| format!("quire-render-{}", index))
            .build()
            .map_err(|e| ExecutorError::new(format!("failed to build thread pool: {}", e)))?;
        Ok(Self {
            num_threads,
            pool: Some(Arc::new(pool)),
        })
    }

    fn run<R, F>(&self, job: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(job),
            None => job(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    // Indexed parallel iterators collect in input order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        self.run(move || items.into_par_iter().map(f).collect())
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        self.run(move || items.into_par_iter().map(f).collect())
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rayon_executor_keeps_input_order() {
        let executor = RayonExecutor::new();
        let results = executor.execute_all(vec![5, 4, 3, 2, 1], |x| x * 2);
        assert_eq!(results, vec![10, 8, 6, 4, 2]);
    }

    #[test]
    fn test_rayon_executor_handles_fallible_operations() {
        let executor = RayonExecutor::new();
        let results: Vec<Result<i32, &str>> = executor.execute_all_fallible(vec![1, 2, 0, 4], |x| {
            if x == 0 { Err("division by zero") } else { Ok(10 / x) }
        });
        assert_eq!(results.len(), 4);
        assert!(results[2].is_err());
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 3);
    }

    #[test]
    fn test_rayon_executor_parallelism_is_positive() {
        assert!(RayonExecutor::new().parallelism() > 0);
    }

    #[test]
    fn test_dedicated_pool_reports_its_size() {
        let executor = RayonExecutor::with_threads(2).unwrap();
        assert_eq!(executor.parallelism(), 2);
        let results = executor.execute_all((0..10).collect::<Vec<u32>>(), |x| x + 1);
        assert_eq!(results, (1..11).collect::<Vec<u32>>());
    }

    #[test]
    fn test_zero_threads_is_rejected() {
        let err = RayonExecutor::with_threads(0).unwrap_err();
        assert!(err.message.contains("at least 1"));
    }
}
