use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pricer::{replay, ReplayConfig};

#[derive(Parser, Debug)]
#[command(name = "pricer")]
#[command(about = "Prints the cost of buying and the proceeds of selling a target size")]
#[command(long_about = "\
Pricer reads a market data log on standard input. As the book is modified,
Pricer prints (on standard output) the total expense incurred on buying
TARGET_SIZE shares (by taking as many asks as necessary, lowest first), and
the total income you would receive if you sold TARGET_SIZE shares (by
hitting as many bids as necessary, highest first). Each time the income or
expense changes, it prints the changed value.")]
struct Args {
    /// Number of shares to price
    target_size: u64,

    /// Read the log from a file instead of standard input
    #[arg(long)]
    input: Option<PathBuf>,

    /// Stop at the first malformed line or rejected event
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    // Quotes own stdout, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = ReplayConfig {
        target_size: args.target_size,
        strict: args.strict,
    };

    info!("Pricing target size {}", config.target_size);

    let output = BufWriter::new(io::stdout().lock());
    let stats = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            info!("Reading market data from {}", path.display());
            replay(BufReader::new(file), output, &config)?
        }
        None => replay(io::stdin().lock(), output, &config)?,
    };

    if stats.skipped > 0 {
        info!("{} of {} lines were skipped", stats.skipped, stats.lines);
    }

    Ok(())
}
