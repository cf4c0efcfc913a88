use crate::domain::constants::{CONFIG_ENV, ROOT_ENV};
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "receipt-stats",
    version,
    about = "Descriptive statistics over partitioned receipt annotations"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = ROOT_ENV,
        help = "Corpus root holding <partition>/json/*.json"
    )]
    pub root: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_delimiter = ',',
        help = "Partitions to scan, in order [default: dev,test,train]"
    )]
    pub partitions: Option<Vec<String>>,
    #[arg(
        long,
        global = true,
        env = CONFIG_ENV,
        help = "TOML config file (root, partitions, bins)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Documents found per partition and files that were skipped
    Scan,
    /// Total and subtotal line counts
    Totals,
    /// Images with more than one tax line, per partition
    Taxes,
    /// Where total amounts sit on the page, as a 2D histogram
    Positions {
        #[arg(long, help = "Bins per axis [default: 50]")]
        bins: Option<NonZeroUsize>,
    },
    /// Category frequencies and the rarest category
    Entities,
    /// All of the above in one pass
    Report {
        #[arg(long, help = "Bins per axis for the position histogram [default: 50]")]
        bins: Option<NonZeroUsize>,
    },
}
