use queens::{
    partition, NaiveThreadPool, ParallelSolver, QueensError, RayonThreadPool, SequentialSolver,
    SharedQueueThreadPool, Solver, ThreadPool,
};
use rand::prelude::*;

const KNOWN: [(usize, u64); 10] = [
    (1, 1),
    (2, 0),
    (3, 0),
    (4, 2),
    (5, 10),
    (6, 4),
    (7, 40),
    (8, 92),
    (9, 352),
    (10, 724),
];

#[test]
fn sequential_matches_known_counts() {
    let solver = SequentialSolver::new();
    for (queens, expected) in KNOWN {
        let outcome = solver.solve(queens).unwrap();
        assert_eq!(outcome.solutions, expected, "{queens} queens");
        assert_eq!(outcome.snapshot.is_some(), expected > 0, "{queens} queens");
    }
}

#[test]
fn sequential_snapshot_is_a_valid_placement() {
    for queens in [1, 4, 5, 8, 10] {
        let snapshot = SequentialSolver::new().solve(queens).unwrap().snapshot.unwrap();
        assert_eq!(snapshot.size(), queens);
        assert!(snapshot.is_valid());

        let grid = snapshot.grid();
        for row in &grid {
            assert_eq!(row.iter().filter(|&&q| q).count(), 1);
        }
        for col in 0..queens {
            assert_eq!(grid.iter().filter(|row| row[col]).count(), 1);
        }
    }
}

#[test]
fn snapshot_can_be_disabled() {
    let outcome = SequentialSolver::new()
        .with_snapshot(false)
        .solve(8)
        .unwrap();
    assert_eq!(outcome.solutions, 92);
    assert!(outcome.snapshot.is_none());
}

fn cross_validate<P: ThreadPool>() {
    for (queens, expected) in KNOWN {
        for threads in 1..=queens {
            let solver = ParallelSolver::<P>::new(threads).unwrap();
            let outcome = solver.solve(queens).unwrap();
            assert_eq!(
                outcome.solutions, expected,
                "{queens} queens on {threads} threads"
            );
            assert!(outcome.snapshot.is_none());
        }
    }
}

#[test]
fn naive_pool_matches_sequential() {
    cross_validate::<NaiveThreadPool>();
}

#[test]
fn shared_queue_pool_matches_sequential() {
    cross_validate::<SharedQueueThreadPool>();
}

#[test]
fn rayon_pool_matches_sequential() {
    cross_validate::<RayonThreadPool>();
}

#[test]
fn uneven_split_eight_queens_three_threads() {
    let solver = ParallelSolver::<NaiveThreadPool>::new(3).unwrap();
    assert_eq!(solver.solve(8).unwrap().solutions, 92);
}

#[test]
fn random_configurations_agree_and_repeat() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let sequential = SequentialSolver::new().with_snapshot(false);

    for _ in 0..20 {
        let queens = rng.gen_range(1..=11);
        let threads = rng.gen_range(1..=queens);
        let expected = sequential.solve(queens).unwrap().solutions;

        let solver = ParallelSolver::<SharedQueueThreadPool>::new(threads).unwrap();
        let first = solver.solve(queens).unwrap().solutions;
        let second = solver.solve(queens).unwrap().solutions;
        assert_eq!(first, expected, "{queens} queens on {threads} threads");
        assert_eq!(first, second);
    }
}

#[test]
fn partition_is_disjoint_and_exhaustive() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let queens = rng.gen_range(1..=64);
        let threads = rng.gen_range(1..=queens);
        let ranges = partition(queens, threads).unwrap();

        let mut seen = vec![0u32; queens];
        for range in &ranges {
            for row in range.rows() {
                seen[row] += 1;
            }
        }
        assert!(seen.iter().all(|&count| count == 1), "{queens}/{threads}");
        assert_eq!(ranges.last().unwrap().end, queens - 1);
    }
}

#[test]
fn rejects_empty_board_and_too_many_threads() {
    assert!(matches!(
        SequentialSolver::new().solve(0),
        Err(QueensError::InvalidParameterValue(_))
    ));

    let solver = ParallelSolver::<NaiveThreadPool>::new(8).unwrap();
    assert!(matches!(
        solver.solve(4),
        Err(QueensError::InvalidParameterValue(_))
    ));

    assert!(ParallelSolver::<RayonThreadPool>::new(0).is_err());
}
