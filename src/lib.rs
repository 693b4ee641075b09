pub mod io;
pub mod parallel;
pub mod partition;
pub mod search;
pub mod worker;

pub use parallel::WorkerConfig;
pub use partition::{partition, Partition, MAX_WORKERS};
pub use search::search;
pub use worker::{scan, SharedResult};
