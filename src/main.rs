//! nregions: extract non-N regions from a FASTA file as BED
//!
//! Usage: nregions -f <FASTA> -o <BED>

use clap::Parser;
use std::path::PathBuf;
use std::process;

use nregions::commands::ExtractCommand;

#[derive(Parser)]
#[command(name = "nregions")]
#[command(version)]
#[command(
    about = "Extract non-N regions from a FASTA file, only where whole lines are N",
    long_about = "Reads a FASTA file and writes a BED file of <chrom> <start> <end> blocks \
                  that contain no complete line of Ns. Ns inside lines with other bases are \
                  kept, so small assembly gaps are ignored and only large N-padded gaps \
                  split regions. Only uppercase N is recognised. Set RUST_LOG=debug for \
                  per-record details."
)]
struct Cli {
    /// Input sequence file in FASTA format (use - for stdin)
    #[arg(short = 'f', long)]
    fasta: PathBuf,

    /// Output file in BED format (use - for stdout)
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Print run statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Use smaller I/O buffers
    #[arg(long)]
    low_memory: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let cmd = ExtractCommand::new().with_low_memory(cli.low_memory);

    match cmd.run_files(&cli.fasta, &cli.output) {
        Ok(stats) => {
            if cli.stats {
                eprintln!("Extract stats: {}", stats);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
