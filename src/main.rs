use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use parfind::io::{create_progress_bar, generate_dataset, DatasetFile, VALUE_SIZE};
use parfind::parallel::WorkerConfig;
use parfind::search::search;

#[derive(Parser, Debug)]
#[command(name = "parfind")]
#[command(about = "Parallel partitioned linear search over an integer dataset", long_about = None)]
struct Args {
    /// Value to search for
    #[arg(value_name = "TARGET", allow_negative_numbers = true)]
    target: i32,

    /// Number of values in the generated dataset
    #[arg(short, long, default_value_t = 10_000_000)]
    size: usize,

    /// Load the dataset from a raw little-endian i32 file instead of generating
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Number of worker threads (defaults to number of CPU cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Seed for the generated dataset
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Overwrite the value at this index with the target before searching
    #[arg(long, value_name = "INDEX")]
    plant: Option<usize>,

    /// Disable progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut dataset = match &args.input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file does not exist: {}", path.display());
            }

            println!("Loading dataset from {}", path.display());
            let file = DatasetFile::open(path)?;
            file.to_vec()
        }
        None => {
            println!("Generating {} values (seed {})", args.size, args.seed);

            let progress = if !args.quiet {
                Some(create_progress_bar(args.size))
            } else {
                None
            };

            let data = generate_dataset(args.size, args.seed, progress.as_ref());

            if let Some(ref pb) = progress {
                pb.finish_with_message("Generation complete");
            }

            data
        }
    };

    println!(
        "Dataset: {} values ({:.2} MB)",
        dataset.len(),
        (dataset.len() * VALUE_SIZE) as f64 / (1024.0 * 1024.0)
    );

    if let Some(index) = args.plant {
        if index >= dataset.len() {
            anyhow::bail!(
                "Plant index {} is out of bounds for dataset of length {}",
                index,
                dataset.len()
            );
        }
        dataset[index] = args.target;
    }

    let config = WorkerConfig::new(args.threads);
    println!("Using {} worker threads", config.worker_count());

    let start_time = Instant::now();
    let result = search(&dataset, args.target, config.worker_count())?;
    let elapsed = start_time.elapsed();

    match result {
        Some(index) => println!("Target {} found at index {}", args.target, index),
        None => println!("Target {} not found", args.target),
    }

    let mb_per_sec =
        (dataset.len() * VALUE_SIZE) as f64 / (1024.0 * 1024.0) / elapsed.as_secs_f64();
    println!("\nSearch completed in {:.2?} ({:.2} MB/s scanned)", elapsed, mb_per_sec);

    Ok(())
}
