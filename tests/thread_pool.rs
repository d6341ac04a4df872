use std::sync::Barrier;
use std::thread;

use queens::{NaiveThreadPool, QueensError, RayonThreadPool, SharedQueueThreadPool, ThreadPool};

fn results_in_task_order<P: ThreadPool>() {
    let pool = P::new(4).unwrap();
    let tasks: Vec<_> = (0..4u64).map(|i| move || i * 10).collect();
    assert_eq!(pool.join_all(tasks).unwrap(), vec![0, 10, 20, 30]);
}

/// All tasks must be running at once for any of them to get past the barrier.
fn runs_tasks_concurrently<P: ThreadPool>() {
    const THREADS: usize = 4;
    let pool = P::new(THREADS).unwrap();
    let barrier = Barrier::new(THREADS);

    let tasks: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = &barrier;
            move || {
                barrier.wait();
                thread::current().id()
            }
        })
        .collect();

    let mut ids = pool.join_all(tasks).unwrap();
    ids.sort_by_key(|id| format!("{id:?}"));
    ids.dedup();
    assert_eq!(ids.len(), THREADS);
}

fn reports_panicking_task<P: ThreadPool>() {
    let pool = P::new(3).unwrap();
    let tasks: Vec<_> = (0..3usize)
        .map(|i| {
            move || {
                if i == 1 {
                    panic!("task {i} failed");
                }
                i
            }
        })
        .collect();

    assert!(matches!(
        pool.join_all(tasks),
        Err(QueensError::WorkerPanicked(1))
    ));
}

fn writes_borrowed_slots<P: ThreadPool>() {
    let pool = P::new(2).unwrap();
    let mut left = 0u64;
    let mut right = 0u64;
    {
        let tasks: Vec<Box<dyn FnOnce() + Send + '_>> = vec![
            Box::new(|| left = 1),
            Box::new(|| right = 2),
        ];
        pool.join_all(tasks).unwrap();
    }
    assert_eq!((left, right), (1, 2));
}

#[test]
fn naive_thread_pool() {
    results_in_task_order::<NaiveThreadPool>();
    runs_tasks_concurrently::<NaiveThreadPool>();
    reports_panicking_task::<NaiveThreadPool>();
    writes_borrowed_slots::<NaiveThreadPool>();
}

#[test]
fn shared_queue_thread_pool() {
    results_in_task_order::<SharedQueueThreadPool>();
    runs_tasks_concurrently::<SharedQueueThreadPool>();
    reports_panicking_task::<SharedQueueThreadPool>();
    writes_borrowed_slots::<SharedQueueThreadPool>();
}

#[test]
fn rayon_thread_pool() {
    results_in_task_order::<RayonThreadPool>();
    runs_tasks_concurrently::<RayonThreadPool>();
    reports_panicking_task::<RayonThreadPool>();
    writes_borrowed_slots::<RayonThreadPool>();
}

#[test]
fn zero_sized_pools_are_rejected() {
    assert!(SharedQueueThreadPool::new(0).is_err());
    assert!(RayonThreadPool::new(0).is_err());
}
