//! Parallel utilities for per-round stages.
//!
//! With the `rayon` feature the helpers fan out over Rayon's worker pool;
//! without it they run the same closures sequentially. Results are always
//! returned in input order, so output never depends on scheduling.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Worker count used when no partition count is configured.
pub fn default_partitions() -> usize {
    #[cfg(feature = "rayon")]
    {
        rayon::current_num_threads().max(1)
    }
    #[cfg(not(feature = "rayon"))]
    {
        1
    }
}

/// Executes `func(i, &item)` over `data`, collecting results in order.
pub fn par_map_indexed<T, R, F>(data: &[T], func: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(usize, &T) -> R + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        data.par_iter()
            .enumerate()
            .map(|(i, item)| func(i, item))
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        data.iter()
            .enumerate()
            .map(|(i, item)| func(i, item))
            .collect()
    }
}

/// Executes `func(&item)` over `data`, collecting results in order.
pub fn par_map<T, R, F>(data: &[T], func: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Send + Sync,
{
    par_map_indexed(data, |_, item| func(item))
}
