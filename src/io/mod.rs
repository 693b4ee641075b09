use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use memmap2::{Mmap, MmapOptions};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::fs::File;
use std::path::Path;

/// Width of one dataset value on disk (little-endian i32).
pub const VALUE_SIZE: usize = 4;

/// Upper bound (exclusive) for generated dataset values.
pub const VALUE_RANGE: i32 = 1_000_000_000;

const GENERATION_CHUNK: usize = 1 << 16;

/// Memory-mapped dataset file: a flat sequence of little-endian i32 values.
#[derive(Debug)]
pub struct DatasetFile {
    mmap: Mmap,
    total_values: usize,
}

impl DatasetFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)
            .with_context(|| format!("Failed to open dataset file: {}", path.as_ref().display()))?;

        let metadata = file.metadata()?;
        let file_size = metadata.len() as usize;

        if !file_size.is_multiple_of(VALUE_SIZE) {
            anyhow::bail!(
                "Invalid dataset file size: {} is not a multiple of {}",
                file_size,
                VALUE_SIZE
            );
        }

        let mmap = unsafe {
            MmapOptions::new()
                .map(&file)
                .with_context(|| "Failed to memory-map dataset file")?
        };

        Ok(Self {
            mmap,
            total_values: file_size / VALUE_SIZE,
        })
    }

    pub fn total_values(&self) -> usize {
        self.total_values
    }

    pub fn value(&self, index: usize) -> Option<i32> {
        if index >= self.total_values {
            return None;
        }

        let offset = index * VALUE_SIZE;
        let bytes: [u8; VALUE_SIZE] = self.mmap[offset..offset + VALUE_SIZE]
            .try_into()
            .ok()?;
        Some(i32::from_le_bytes(bytes))
    }

    /// Decode the whole file into memory for scanning.
    pub fn to_vec(&self) -> Vec<i32> {
        self.mmap
            .chunks_exact(VALUE_SIZE)
            .map(|bytes| i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
            .collect()
    }
}

/// Fill a dataset with seeded pseudo-random values, in parallel.
///
/// Each chunk gets its own RNG derived from `seed` and the chunk index, so
/// the output depends only on `(len, seed)` and not on thread interleaving.
pub fn generate_dataset(len: usize, seed: u64, progress: Option<&ProgressBar>) -> Vec<i32> {
    let mut data = vec![0i32; len];

    data.par_chunks_mut(GENERATION_CHUNK)
        .enumerate()
        .for_each(|(chunk_index, chunk)| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(chunk_index as u64));
            for value in chunk.iter_mut() {
                *value = rng.gen_range(0..VALUE_RANGE);
            }
            if let Some(pb) = progress {
                pb.inc(chunk.len() as u64);
            }
        });

    data
}

pub fn create_progress_bar(total_values: usize) -> ProgressBar {
    let pb = ProgressBar::new(total_values as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} values ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}
