use crossbeam::channel;
use log::debug;

use super::{collect_slots, empty_slots, run_task, ThreadPool};
use crate::{QueensError, Result};

/// A pool of a fixed number of workers draining a shared task queue.
///
/// All tasks are queued before any worker starts; each worker pulls tasks
/// from a single MPMC channel until it is empty, then exits.
pub struct SharedQueueThreadPool {
    threads: usize,
}

impl ThreadPool for SharedQueueThreadPool {
    fn new(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(QueensError::Pool(
                "shared queue pool needs at least one thread".to_string(),
            ));
        }
        Ok(SharedQueueThreadPool { threads })
    }

    fn join_all<T, F>(&self, tasks: Vec<F>) -> Result<Vec<T>>
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        let mut slots = empty_slots(tasks.len())?;
        let (tx, rx) = channel::unbounded();

        for (id, (task, slot)) in tasks.into_iter().zip(slots.iter_mut()).enumerate() {
            tx.send((id, task, slot))
                .map_err(|_| QueensError::Pool("task queue closed".to_string()))?;
        }
        // closing the queue lets workers exit once it is drained
        drop(tx);

        crossbeam::scope(|scope| {
            for worker in 0..self.threads {
                let rx = rx.clone();
                scope
                    .builder()
                    .name(format!("pool-worker-{worker}"))
                    .spawn(move |_| {
                        for (id, task, slot) in rx.iter() {
                            debug!("Worker {worker} executing task {id}");
                            run_task(id, task, slot);
                        }
                        debug!("Worker {worker}: queue drained, shutting down");
                    })?;
            }
            Ok::<(), std::io::Error>(())
        })
        .map_err(|_| QueensError::Pool("worker thread panicked".to_string()))?
        .map_err(|e| QueensError::Pool(e.to_string()))?;
        drop(rx);

        collect_slots(slots)
    }
}
