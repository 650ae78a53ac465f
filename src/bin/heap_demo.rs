//! Trace a min-heap through a run of inserts followed by extracts.

use anyhow::{Context, Result};
use clap::Parser;
use heapsort_lab::logging::init_logger;
use heapsort_lab::BinaryMinHeap;
use log::info;

#[derive(Parser)]
#[command(name = "heap_demo")]
struct Cli {
    /// Items to insert, in order
    #[arg(allow_negative_numbers = true, default_values_t = [9i64, 25, 86, 3, 29, 5, 55])]
    items: Vec<i64>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut heap = BinaryMinHeap::with_capacity(cli.items.len());
    println!("heap: {}", heap);

    println!("\nInserting items:");
    for (index, &item) in cli.items.iter().enumerate() {
        heap.insert(item);
        let heap_min = *heap.peek_min()?;
        let real_min = cli.items[..=index]
            .iter()
            .copied()
            .min()
            .context("no items inserted")?;
        println!("insert({})", item);
        println!("heap: {}", heap);
        println!("size: {}", heap.size());
        println!("get_min: {}, correct: {}", heap_min, heap_min == real_min);
    }

    println!("\nDeleting items:");
    while !heap.is_empty() {
        let heap_min = heap.extract_min()?;
        println!("delete_min: {}", heap_min);
        println!("heap: {}", heap);
        println!("size: {}", heap.size());
    }

    info!("Drained {} items", cli.items.len());
    Ok(())
}
