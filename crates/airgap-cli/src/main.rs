//! `airgap`: derive keys and addresses from a seed file on an offline machine.

mod commands;
mod tsv;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use airgap_core::{Deriver, Network, SeedPhrase};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Deterministic offline key derivation from seed words")]
struct Cli {
    /// Network whose version bytes are used
    #[arg(long, global = true, default_value = "mainnet")]
    network: Network,
    /// Log output format: text or json
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args)]
struct IndexRange {
    /// First index to derive
    #[arg(long, default_value_t = 0)]
    start: u64,
    /// Number of indices to derive, starting from --start
    #[arg(long, default_value_t = 10)]
    count: u64,
}

#[derive(Subcommand)]
enum Command {
    /// Generate WIFs from a file with seed words
    Wif {
        seed_in: PathBuf,
        wif_out: PathBuf,
        #[command(flatten)]
        range: IndexRange,
    },
    /// Generate uncompressed public keys (hex) from a file with seed words
    Pubkey {
        seed_in: PathBuf,
        pubkey_out: PathBuf,
        #[command(flatten)]
        range: IndexRange,
    },
    /// Convert a public key TSV into addresses
    Addr {
        pubkey_in: PathBuf,
        addr_out: PathBuf,
    },
    /// Write full accounts as JSON lines
    Accounts {
        seed_in: PathBuf,
        out: PathBuf,
        #[command(flatten)]
        range: IndexRange,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_format);

    let network = cli.network;
    let rows = match cli.cmd {
        Command::Wif { seed_in, wif_out, range } => {
            let deriver = load_deriver(&seed_in, network)?;
            commands::write_wifs(&deriver, range.start, range.count, open_output(&wif_out)?)?
        }
        Command::Pubkey { seed_in, pubkey_out, range } => {
            let deriver = load_deriver(&seed_in, network)?;
            commands::write_pubkeys(&deriver, range.start, range.count, open_output(&pubkey_out)?)?
        }
        Command::Addr { pubkey_in, addr_out } => {
            commands::write_addresses(network, open_input(&pubkey_in)?, open_output(&addr_out)?)?
        }
        Command::Accounts { seed_in, out, range } => {
            let deriver = load_deriver(&seed_in, network)?;
            commands::write_accounts(&deriver, range.start, range.count, open_output(&out)?)?
        }
    };

    tracing::debug!(rows, "done");
    Ok(())
}

fn init_logging(format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if format == "json" {
        fmt.json().init();
    } else {
        fmt.init();
    }
}

fn load_deriver(path: &Path, network: Network) -> Result<Deriver> {
    let mut text = String::new();
    open_input(path)?
        .read_to_string(&mut text)
        .with_context(|| format!("reading seed file {}", path.display()))?;

    let seed = SeedPhrase::from_text(&text)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    Ok(Deriver::from_seed(seed).with_network(network))
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}
