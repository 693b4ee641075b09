use std::panic;
use std::thread;

use anyhow::{anyhow, Result};

use crate::partition::partition;
use crate::worker::{scan, SharedResult};

/// Search `dataset` for `target` using `worker_count` parallel scan workers.
///
/// The dataset is split into contiguous equal partitions, one worker per
/// partition. Every worker runs its scan to completion (or until it finds a
/// match of its own); there is no cancellation signal, so total latency is
/// bounded by the slowest partition's full scan.
///
/// Returns the matched index, or `None` if the target appears nowhere. When
/// the target appears at several indices in different partitions, the
/// reported index is whichever worker's guarded write won the race — first
/// in arbitration order, not lowest, and not stable across runs.
pub fn search(dataset: &[i32], target: i32, worker_count: usize) -> Result<Option<usize>> {
    let partitions = partition(dataset.len(), worker_count)?;
    let shared = SharedResult::new();

    thread::scope(|scope| -> Result<()> {
        let mut handles = Vec::with_capacity(partitions.len());

        for (worker_id, part) in partitions.iter().copied().enumerate() {
            let shared = &shared;
            let spawned = thread::Builder::new()
                .name(format!("parfind-worker-{worker_id}"))
                .spawn_scoped(scope, move || scan(dataset, part, target, shared));

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    // Workers spawned so far are joined when the scope ends;
                    // no partial result is ever reported.
                    return Err(anyhow!(
                        "resource exhausted: failed to spawn scan worker {worker_id}: {err}"
                    ));
                }
            }
        }

        for handle in handles {
            if let Err(payload) = handle.join() {
                panic::resume_unwind(payload);
            }
        }

        Ok(())
    })?;

    // All workers are joined, so the slot has a single owner again.
    Ok(shared.into_index())
}
