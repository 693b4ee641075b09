use anyhow::{bail, Result};

/// Hard ceiling on the number of scan workers a single search may spawn.
pub const MAX_WORKERS: usize = 512;

/// A half-open index range `[start, end)` over the dataset, assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `[0, dataset_len)` into `worker_count` contiguous, disjoint ranges.
///
/// Each range gets `dataset_len / worker_count` indices; the last range is
/// extended to `dataset_len` so the remainder is never lost. When
/// `dataset_len < worker_count` the trailing ranges are empty and their
/// workers scan nothing.
pub fn partition(dataset_len: usize, worker_count: usize) -> Result<Vec<Partition>> {
    if worker_count == 0 {
        bail!("invalid configuration: worker count must be at least 1");
    }

    if worker_count > MAX_WORKERS {
        bail!(
            "invalid configuration: worker count {} exceeds maximum of {}",
            worker_count,
            MAX_WORKERS
        );
    }

    let base = dataset_len / worker_count;

    let mut partitions = Vec::with_capacity(worker_count);
    for i in 0..worker_count {
        let start = i * base;
        let end = if i == worker_count - 1 {
            dataset_len
        } else {
            (i + 1) * base
        };
        partitions.push(Partition { start, end });
    }

    Ok(partitions)
}
