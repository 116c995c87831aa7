//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{load_or_default, validate_config, ScbctlConfig};
use crate::error::{ScbError, ScbResult};

const SCAN_ABOUT: &str =
    "Create a new execution (Scan) in the current namespace if no namespace is provided";

const SCAN_EXAMPLES: &str = "\
Examples:
  # Create a new scan
  scbctl scan nmap scanme.nmap.org

  # Create in a different namespace
  scbctl scan nmap scanme.nmap.org --namespace foobar

  # Create and stream the scanner output
  scbctl scan nmap scanme.nmap.org --follow";

#[derive(Parser, Debug)]
#[command(name = "scbctl")]
#[command(about = "Launch secureCodeBox scans and follow their output", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the kubeconfig file to use
    #[arg(long, global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new scan
    #[command(
        long_about = SCAN_ABOUT,
        after_help = SCAN_EXAMPLES
    )]
    Scan(ScanArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ScanArgs {
    /// Name of the scan; also used as the scan type
    pub name: String,

    /// Target passed to the scanner
    pub target: String,

    /// Namespace to create the scan in
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Stream the scanner's output until it finishes
    #[arg(short, long)]
    pub follow: bool,

    /// Delay between worker lookups while following, in milliseconds
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,
}

impl Cli {
    /// Load the config file, then layer flags on top.
    ///
    /// The file is validated on load. Anything rejected afterwards came from a
    /// flag and is reported as invalid input.
    pub fn resolve_config(&self) -> ScbResult<ScbctlConfig> {
        let mut config = load_or_default(self.config.as_deref())?;
        self.apply_overrides(&mut config);
        validate_config(&config).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            ScbError::Validation(messages.join("; "))
        })?;
        Ok(config)
    }

    /// Apply flag values on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut ScbctlConfig) {
        if let Some(path) = &self.kubeconfig {
            config.cluster.kubeconfig = Some(path.clone());
        }
        if let Some(context) = &self.context {
            config.cluster.context = Some(context.clone());
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }

        let Commands::Scan(args) = &self.command;
        if let Some(interval) = args.poll_interval_ms {
            config.follow.poll_interval_ms = interval;
        }
    }
}
