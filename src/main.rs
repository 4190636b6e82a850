use std::env;
use std::process;

use log::{error, info};

use huffman_cost::{Result, estimate, read_frequencies};

fn report(filepath: &str) -> Result<()> {
    let freq = read_frequencies(filepath)?;
    let costs = estimate(&freq)?;
    println!("Fixed-length cost for {}: {}", filepath, costs.fixed_length);
    println!("Huffman cost for {}: {}", filepath, costs.huffman);
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        let program = args.first().map_or("huffman-cost", String::as_str);
        error!("Usage: {} <input_file>...", program);
        eprintln!("  <input_file>: one or more text files to estimate.");
        process::exit(1);
    }

    info!("--- Start Estimating ({} files) ---", args.len() - 1);

    let mut failed = 0usize;
    for filepath in &args[1..] {
        if let Err(e) = report(filepath) {
            error!("Failed to estimate {}: {}", filepath, e);
            failed += 1;
        }
    }

    info!("--- End ---");
    if failed > 0 {
        error!("{} of {} files failed", failed, args.len() - 1);
        process::exit(1);
    }
}
