use parking_lot::Mutex;

use crate::partition::Partition;

#[derive(Debug, Default)]
struct ResultState {
    found: bool,
    index: Option<usize>,
    claims: usize,
}

/// The single piece of mutable state shared by all scan workers.
///
/// First-writer-wins: the first `claim` to run while `found` is still false
/// records its index permanently; every later claim is suppressed. `claims`
/// counts accepted writes so stress tests can assert at most one occurred.
#[derive(Debug, Default)]
pub struct SharedResult {
    state: Mutex<ResultState>,
}

impl SharedResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to publish `index` as the search result.
    ///
    /// Returns true if this call won the race. The lock is held only for the
    /// check-and-maybe-write, never across any scanning.
    pub fn claim(&self, index: usize) -> bool {
        let mut state = self.state.lock();
        if state.found {
            return false;
        }
        state.found = true;
        state.index = Some(index);
        state.claims += 1;
        true
    }

    /// Matched index, if any worker has claimed one yet.
    pub fn index(&self) -> Option<usize> {
        self.state.lock().index
    }

    /// Number of accepted writes. At most 1 by the first-writer-wins invariant.
    pub fn claim_count(&self) -> usize {
        self.state.lock().claims
    }

    /// Consume the slot and read the final index without locking.
    ///
    /// Only sound once every worker has been joined; the coordinator owns the
    /// sole remaining reference at that point.
    pub fn into_index(self) -> Option<usize> {
        self.state.into_inner().index
    }
}

/// Linearly scan one partition for `target`.
///
/// On a match the worker attempts to claim the shared result and stops
/// scanning immediately, whether or not its claim won. A worker that reaches
/// the end of its partition without a match never touches the shared state.
pub fn scan(dataset: &[i32], partition: Partition, target: i32, shared: &SharedResult) {
    for i in partition.start..partition.end {
        if dataset[i] == target {
            shared.claim(i);
            return;
        }
    }
}
