/// Default cap on the worker count when the caller does not ask for a
/// specific number; past this point extra scan threads mostly contend for
/// memory bandwidth.
const DEFAULT_WORKER_CAP: usize = 16;

/// Resolved worker-count configuration for one search run.
pub struct WorkerConfig {
    worker_count: usize,
}

impl WorkerConfig {
    /// An explicit request is passed through as-is (the partitioner validates
    /// it); otherwise default to the CPU count, capped.
    pub fn new(requested: Option<usize>) -> Self {
        let worker_count =
            requested.unwrap_or_else(|| num_cpus::get().min(DEFAULT_WORKER_CAP).max(1));

        Self { worker_count }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }
}
