//! Bounded parallel fan-out.
//!
//! Every command runs one unit of work per package or checkout on a fixed-size
//! rayon thread pool and blocks until all of them have finished. Units return
//! plain data, so a failing unit never cancels the others.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Result;

/// A bounded worker pool for independent units of work.
pub struct FanOut {
    pool: ThreadPool,
}

impl FanOut {
    /// Create a pool with `jobs` worker threads.
    ///
    /// `0` lets rayon pick its default, one thread per logical CPU.
    pub fn new(jobs: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(jobs)
            .thread_name(|index| format!("linter-registry-{}", index))
            .build()?;
        Ok(Self { pool })
    }

    /// Number of worker threads in the pool.
    pub fn jobs(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `work` on every item and collect the results in input order.
    pub fn run<T, R, F>(&self, items: &[T], work: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        self.pool
            .install(|| items.par_iter().with_max_len(1).map(&work).collect())
    }
}
