//! acctview - Interactive TUI for a single bank account.
//!
//! Shows the account overview and its transactions, and lets the user send
//! points or delete the account against a simulated backend.
//!
//! Usage:
//!   acctview                           # built-in sample account
//!   acctview --data account.json       # account loaded from a JSON file
//!   acctview --fail-delete network     # deletion always fails
//!   acctview --log-file acctview.log -v

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use acctview_core::config::{DEFAULT_PAGE_SIZE, ViewConfig};
use acctview_core::service::{FailureKind, SimulatedAccountService};
use acctview_core::tui::App;

/// Interactive account viewer.
#[derive(Parser)]
#[command(name = "acctview", about = "Account viewer", version)]
struct Args {
    /// Account data file (JSON). Uses a built-in sample account if omitted.
    #[arg(short, long, value_name = "PATH", env = "ACCTVIEW_DATA")]
    data: Option<PathBuf>,

    /// Simulated backend latency in milliseconds, for deletes and transfers.
    #[arg(long, default_value = "1000")]
    service_delay_ms: u64,

    /// Make account deletion fail: network, validation or unauthorized.
    #[arg(long, value_name = "KIND")]
    fail_delete: Option<FailureKind>,

    /// Make sending points fail: network, validation or unauthorized.
    #[arg(long, value_name = "KIND")]
    fail_transfer: Option<FailureKind>,

    /// Transactions per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Event poll interval in milliseconds.
    #[arg(long, default_value = "250")]
    tick_ms: u64,

    /// Write logs to this file. Logging is off without it, since the
    /// terminal is taken by the UI.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only log errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes file logging. `RUST_LOG` overrides the -v/-q level.
fn init_logging(path: &Path, verbose: u8, quiet: bool) -> std::io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("acctview={level},acctview_core={level}")));

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        if let Err(e) = init_logging(path, args.verbose, args.quiet) {
            eprintln!("Error opening log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let mut config = ViewConfig::default()
        .with_page_size(args.page_size)
        .with_tick_rate(Duration::from_millis(args.tick_ms.max(1)));
    if let Some(ref path) = args.data {
        config = config.with_data_path(path);
    }

    let data = match config.load_data() {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut service = SimulatedAccountService::new(Duration::from_millis(args.service_delay_ms));
    if let Some(kind) = args.fail_delete {
        service = service.fail_deletes(kind);
    }
    if let Some(kind) = args.fail_transfer {
        service = service.fail_transfers(kind);
    }

    info!(
        "acctview {} starting: account={}, page_size={}, delay={}ms",
        env!("CARGO_PKG_VERSION"),
        data.account.account_number,
        config.page_size,
        args.service_delay_ms
    );

    let app = App::new(data, Arc::new(service), &config);
    if let Err(e) = app.run(config.tick_rate) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use acctview_core::service::FailureKind;
    use clap::Parser;

    #[test]
    fn service_delay_applies_to_both_operations() {
        let args = Args::try_parse_from([
            "acctview",
            "--service-delay-ms",
            "50",
            "--fail-transfer",
            "network",
        ])
        .unwrap();
        assert_eq!(args.service_delay_ms, 50);
        assert_eq!(args.fail_transfer, Some(FailureKind::Network));
        assert_eq!(args.fail_delete, None);
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["acctview"]).unwrap();
        assert_eq!(args.service_delay_ms, 1000);
        assert!(args.data.is_none());
        assert!(Args::try_parse_from(["acctview", "--delete-delay-ms", "5"]).is_err());
    }
}
