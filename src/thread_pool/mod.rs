use std::panic::{self, AssertUnwindSafe};

use log::{debug, error};

use crate::{QueensError, Result};

/// A fork-join pool: runs a fixed batch of tasks and waits for all of them.
///
/// Implementors never rebalance work. Every task runs to completion on
/// some worker, and `join_all` returns only after the last one has
/// finished.
pub trait ThreadPool {
    /// Creates a new thread pool with the given number of threads.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created (e.g., invalid size).
    fn new(threads: usize) -> Result<Self>
    where
        Self: Sized;

    /// Runs every task and returns their results in task order.
    ///
    /// Task `i` writes only to result slot `i`; the slots are handed out
    /// as disjoint `&mut` borrows, so no lock guards them. Slots are read
    /// only after all tasks have been joined.
    ///
    /// # Errors
    ///
    /// Returns `WorkerPanicked` with the index of the first task that
    /// panicked, or `Pool` if a worker thread could not be started.
    fn join_all<T, F>(&self, tasks: Vec<F>) -> Result<Vec<T>>
    where
        F: FnOnce() -> T + Send,
        T: Send;
}

mod naive;
mod rayon_pool;
mod shared_queue;

pub use self::naive::NaiveThreadPool;
pub use self::rayon_pool::RayonThreadPool;
pub use self::shared_queue::SharedQueueThreadPool;

/// Allocates one empty result slot per task.
fn empty_slots<T>(len: usize) -> Result<Vec<Option<T>>> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(len)?;
    slots.extend((0..len).map(|_| None));
    Ok(slots)
}

/// Runs task `id` and stores its value in `slot`.
///
/// A panicking task leaves its slot empty; the panic is reported by
/// `collect_slots` once every task has been joined.
fn run_task<T, F>(id: usize, task: F, slot: &mut Option<T>)
where
    F: FnOnce() -> T,
{
    debug!("Task {id} started");
    match panic::catch_unwind(AssertUnwindSafe(task)) {
        Ok(value) => {
            *slot = Some(value);
            debug!("Task {id} finished");
        }
        Err(_) => error!("Task {id} panicked"),
    }
}

/// Unwraps the slots after the join barrier.
fn collect_slots<T>(slots: Vec<Option<T>>) -> Result<Vec<T>> {
    slots
        .into_iter()
        .enumerate()
        .map(|(id, slot)| slot.ok_or(QueensError::WorkerPanicked(id)))
        .collect()
}
