use super::{collect_slots, empty_slots, run_task, ThreadPool};
use crate::{QueensError, Result};

/// A thread pool backed by a dedicated `rayon` pool of fixed size.
///
/// Each task is spawned whole into a rayon scope; tasks are never split,
/// so an idle worker can at most pick up a task nobody has started yet.
pub struct RayonThreadPool {
    pool: rayon::ThreadPool,
}

impl ThreadPool for RayonThreadPool {
    fn new(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(QueensError::Pool(
                "rayon pool needs at least one thread".to_string(),
            ));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("rayon-worker-{i}"))
            .build()
            .map_err(|e| QueensError::Pool(e.to_string()))?;
        Ok(RayonThreadPool { pool })
    }

    fn join_all<T, F>(&self, tasks: Vec<F>) -> Result<Vec<T>>
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        let mut slots = empty_slots(tasks.len())?;

        self.pool.scope(|scope| {
            for (id, (task, slot)) in tasks.into_iter().zip(slots.iter_mut()).enumerate() {
                scope.spawn(move |_| run_task(id, task, slot));
            }
        });

        collect_slots(slots)
    }
}
