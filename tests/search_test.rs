use std::thread;

use parfind::io::generate_dataset;
use parfind::{partition, scan, search, SharedResult};

const SCENARIO_DATASET: [i32; 9] = [5, 3, 8, 2, 9, 1, 4, 7, 6];

#[test]
fn scenario_single_worker() {
    assert_eq!(search(&SCENARIO_DATASET, 6, 1).unwrap(), Some(8));
}

#[test]
fn scenario_one_worker_per_element() {
    assert_eq!(search(&SCENARIO_DATASET, 6, 9).unwrap(), Some(8));
}

#[test]
fn scenario_empty_dataset() {
    for worker_count in [1, 4, 16] {
        assert_eq!(search(&[], 6, worker_count).unwrap(), None);
    }
}

#[test]
fn scenario_zero_workers() {
    let err = search(&SCENARIO_DATASET, 6, 0).unwrap_err();
    assert!(err.to_string().contains("invalid configuration"));
}

#[test]
fn scenario_racing_duplicates() {
    // Target at indices 2 and 7, one in each half of a two-worker split.
    let data = [0, 1, 6, 3, 4, 5, 2, 6];
    for _ in 0..200 {
        let index = search(&data, 6, 2).unwrap().unwrap();
        assert!(index == 2 || index == 7, "unexpected index {index}");
    }
}

#[test]
fn unique_match_found_regardless_of_partitioning() {
    let mut data = generate_dataset(10_000, 11, None);
    // VALUE_RANGE keeps generated values non-negative, so -1 is unique.
    data[6_543] = -1;

    for worker_count in [1, 2, 3, 7, 16, 100] {
        assert_eq!(
            search(&data, -1, worker_count).unwrap(),
            Some(6_543),
            "worker_count = {worker_count}"
        );
    }
}

#[test]
fn absent_target_returns_none() {
    let data = generate_dataset(10_000, 3, None);
    for worker_count in [1, 4, 32] {
        assert_eq!(search(&data, -7, worker_count).unwrap(), None);
    }
}

#[test]
fn stress_single_writer_invariant() {
    // Every element matches, so all eight workers race for the claim on
    // every run. The claim counter must still only ever advance once.
    let data = vec![6i32; 4_096];
    let partitions = partition(data.len(), 8).unwrap();

    for _ in 0..300 {
        let shared = SharedResult::new();
        thread::scope(|scope| {
            for part in partitions.iter().copied() {
                let data = &data;
                let shared = &shared;
                scope.spawn(move || scan(data, part, 6, shared));
            }
        });

        assert_eq!(shared.claim_count(), 1);
        let index = shared.into_index().unwrap();
        assert!(index < data.len());
    }
}

#[test]
fn reported_index_always_holds_the_target() {
    let mut data = generate_dataset(50_000, 99, None);
    for index in [10, 20_000, 49_999] {
        data[index] = -5;
    }

    for _ in 0..50 {
        let index = search(&data, -5, 8).unwrap().unwrap();
        assert_eq!(data[index], -5);
    }
}
