//! Ledger Tally - daily totals from the paginated transactions API
//!
//! Prints one `<date>: <total>` line per date on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use ledger_tally::{AmountPolicy, DEFAULT_BASE_URL, LedgerTally, TallyConfig, report};
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ledger-tally")]
#[command(about = "Sum transaction amounts per day from a paginated JSON API")]
#[command(version)]
struct Cli {
    /// Collection URL; pages are fetched from <BASE_URL>/<n>.json
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Fail on amounts that are not well-formed numbers instead of coercing them
    #[arg(long)]
    strict_amounts: bool,

    /// Fail when a non-final page is shorter or longer than page 1
    #[arg(long)]
    validate_page_size: bool,

    /// Print totals as a JSON object
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> (TallyConfig, bool) {
        let config = TallyConfig {
            base_url: self.base_url,
            request_timeout_secs: self.timeout_secs,
            amount_policy: if self.strict_amounts {
                AmountPolicy::Strict
            } else {
                AmountPolicy::Lenient
            },
            validate_page_size: self.validate_page_size,
            ..TallyConfig::default()
        };
        (config, self.json)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let (config, as_json) = Cli::parse().into_config();

    let tally = LedgerTally::http(config).context("Failed to initialise ledger tally")?;
    let run = match tally.run().await {
        Ok(run) => run,
        Err(e) => {
            error!("Ledger tally failed: {}", e);
            return Err(e.into());
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if as_json {
        writeln!(out, "{}", report::totals_json(&run.totals))?;
    } else {
        report::write_totals(&run.totals, &mut out)?;
    }
    out.flush()?;

    if run.coerced > 0 {
        info!("{} amount(s) were not well-formed numbers and were coerced", run.coerced);
    }

    Ok(())
}
