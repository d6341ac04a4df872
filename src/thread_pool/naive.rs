use super::{collect_slots, empty_slots, run_task, ThreadPool};
use crate::{QueensError, Result};

/// A naive pool that spawns a new scoped thread for every task.
///
/// The thread count given to `new` is ignored: a batch of `k` tasks runs
/// on exactly `k` threads, one per task.
pub struct NaiveThreadPool;

impl ThreadPool for NaiveThreadPool {
    fn new(_threads: usize) -> Result<Self> {
        Ok(NaiveThreadPool)
    }

    fn join_all<T, F>(&self, tasks: Vec<F>) -> Result<Vec<T>>
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        let mut slots = empty_slots(tasks.len())?;

        crossbeam::scope(|scope| {
            for (id, (task, slot)) in tasks.into_iter().zip(slots.iter_mut()).enumerate() {
                scope
                    .builder()
                    .name(format!("queens-worker-{id}"))
                    .spawn(move |_| run_task(id, task, slot))?;
            }
            Ok::<(), std::io::Error>(())
        })
        .map_err(|_| QueensError::Pool("worker thread panicked".to_string()))?
        .map_err(|e| QueensError::Pool(e.to_string()))?;

        collect_slots(slots)
    }
}
