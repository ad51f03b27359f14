use crate::api::Client;
use crate::console::Console;
use crate::error::Error;
use crate::fs::DataDir;
use crate::stock::{resources, symbols};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Delay between two symbols, keeping the run under the IEX Cloud rate limit.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

/// Suspends the run between symbols.
pub trait Pacer {
    fn pause(&mut self) -> impl Future<Output = ()> + Send;
}

/// Sleep for a fixed duration, whatever the previous symbol's outcome.
#[derive(Clone, Copy, Debug)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        Self(DEFAULT_PAUSE)
    }
}

impl Pacer for FixedDelay {
    async fn pause(&mut self) {
        tokio::time::sleep(self.0).await
    }
}

/// Failures that end a run early.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("configuration: {0}")]
    Config(#[source] Error),

    #[error("symbol index: {0}")]
    Index(#[source] Error),

    #[error("symbol index holds no common stock, preferred stock or ETFs")]
    EmptyIndex,
}

impl RunError {
    /// Process exit status: 1 for configuration, 2 for the symbol index.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Config(_) => 1,
            RunError::Index(_) | RunError::EmptyIndex => 2,
        }
    }
}

/// Fetch the symbol index, then replicate every symbol in index order, one at
/// a time, pausing after each.
///
/// Only a failed index aborts the run; per-symbol failures are logged and
/// skipped.
pub async fn run<P: Pacer>(
    client: &Client,
    data: &DataDir,
    console: &Console,
    pacer: &mut P,
) -> Result<(), RunError> {
    let time = std::time::Instant::now();

    let symbols = symbols::fetch(client, data, console)
        .await
        .map_err(RunError::Index)?;
    if symbols.is_empty() {
        console.warning("No symbols to download");
        return Err(RunError::EmptyIndex);
    }

    for symbol in &symbols {
        let outcome = resources::fetch_symbol(client, data, console, symbol).await;
        debug!(
            "{symbol} replicated: company({}), chart({})",
            outcome.company.is_ok(),
            outcome.chart.is_ok()
        );
        pacer.pause().await;
    }

    console.gap(3);
    console.default(
        "Finished downloading all historical charts and company information for all ETFs, \
        Common Stock, and Preferred Stock symbols available via the IEX Cloud API.",
    );
    info!("replication finished, time elapsed: {:?}", time.elapsed());

    Ok(())
}
