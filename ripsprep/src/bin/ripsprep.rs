//! Parse a distance input, select its representation and print the decision
//! as JSON.

use anyhow::Context;
use clap::Parser;
use ripsprep::{InputFormat, PrepConfig, ShortReadPolicy, Value};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Prepare distance data for Vietoris-Rips persistent homology")]
struct Cli {
    /// Input file, standard input when omitted
    file: Option<PathBuf>,

    /// Input format (lower-triangular, upper-triangular, full-matrix,
    /// point-cloud, sparse-edge-list, dipha-binary, binary)
    #[arg(long)]
    format: Option<InputFormat>,

    /// Maximum homology dimension
    #[arg(long)]
    dim: Option<usize>,

    /// Compute the Rips complex only up to this diameter
    #[arg(long)]
    threshold: Option<Value>,

    /// Coefficient field modulus
    #[arg(long)]
    modulus: Option<u16>,

    /// Engine worker count, 0 for one per core
    #[arg(long)]
    threads: Option<usize>,

    /// JSON configuration file, overridden by the flags above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pad truncated binary values with zero bits instead of failing
    #[arg(long)]
    zero_fill_short_reads: bool,

    /// Reject full matrices whose upper half disagrees with the lower half
    #[arg(long)]
    verify_symmetry: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> anyhow::Result<PrepConfig> {
        let mut config = match &self.config {
            Some(path) => PrepConfig::from_json_file(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => PrepConfig::default(),
        };

        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(dim) = self.dim {
            config.dim_max = dim;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(modulus) = self.modulus {
            config.modulus = modulus;
        }
        if let Some(threads) = self.threads {
            config.num_threads = threads;
        }
        if self.zero_fill_short_reads {
            config.short_read = ShortReadPolicy::ZeroFill;
        }
        if self.verify_symmetry {
            config.verify_symmetry = true;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ripsprep=info")),
        1 => EnvFilter::new("ripsprep=debug"),
        _ => EnvFilter::new("ripsprep=trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config()?;
    let start_time = std::time::Instant::now();
    let prepared = ripsprep::load(cli.file.as_deref(), &config).with_context(|| {
        match &cli.file {
            Some(path) => format!("preparing {}", path.display()),
            None => "preparing standard input".to_string(),
        }
    })?;
    tracing::info!(elapsed = ?start_time.elapsed(), "prepared input");

    println!("{}", serde_json::to_string_pretty(&prepared.summary())?);
    Ok(())
}
