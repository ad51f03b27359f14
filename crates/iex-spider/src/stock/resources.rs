use crate::api::Client;
use crate::console::Console;
use crate::error::Result;
use crate::fs::{self, DataDir};
use std::path::PathBuf;
use tracing::debug;

/// Per-symbol IEX Cloud resources that are replicated verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// Maximal historical daily chart.
    Chart,
    /// Company profile.
    Company,
}

impl Resource {
    /// Subdirectory of the data directory the resource is written to.
    pub fn dir(self) -> &'static str {
        match self {
            Resource::Chart => "chart",
            Resource::Company => "company",
        }
    }

    /// Path segments of the endpoint, for an already lower-cased symbol.
    fn segments(self, symbol: &str) -> Vec<&str> {
        match self {
            Resource::Chart => vec!["stock", symbol, "chart", "max"],
            Resource::Company => vec!["stock", symbol, "company"],
        }
    }

    fn description(self) -> &'static str {
        match self {
            Resource::Chart => "historical daily chart",
            Resource::Company => "company info",
        }
    }
}

/// Download `resource` for `symbol` and write the raw body to
/// `<data>/<resource dir>/<symbol>.json`, returning the written path.
pub async fn fetch(
    client: &Client,
    data: &DataDir,
    console: &Console,
    resource: Resource,
    symbol: &str,
) -> Result<PathBuf> {
    let what = resource.description();
    let lower = symbol.to_lowercase();
    let path = data.symbol_path(resource.dir(), symbol).map_err(|err| {
        console.error(format!("Skipping {what} for {symbol}, not a valid file name"));
        err
    })?;

    let body = client
        .get(&resource.segments(&lower))
        .await
        .map_err(|err| {
            console.error(format!("Unable to download {what} for {symbol}"));
            debug!("{resource:?} request for {symbol} failed, error({err})");
            err
        })?;
    console.success(format!("Successfully downloaded {what} for {symbol}"));

    fs::write_file(&path, &body).await.map_err(|err| {
        console.error(format!("Unable to write {what} for {symbol} to drive"));
        debug!("{err}");
        err
    })?;
    console.success(format!("Successfully wrote {what} for {symbol} to drive"));

    Ok(path)
}

/// Result of replicating both resources of one symbol.
#[derive(Debug)]
pub struct SymbolOutcome {
    pub company: Result<PathBuf>,
    pub chart: Result<PathBuf>,
}

impl SymbolOutcome {
    /// Whether the chart, the last of the two downloads, succeeded.
    ///
    /// Ignores a failed company download.
    pub fn last_call_succeeded(&self) -> bool {
        self.chart.is_ok()
    }

    /// Whether both files were written.
    pub fn all_succeeded(&self) -> bool {
        self.company.is_ok() && self.chart.is_ok()
    }
}

/// Replicate the company profile, then the chart, of `symbol`.
///
/// A failure of either download is logged and does not stop the other.
pub async fn fetch_symbol(
    client: &Client,
    data: &DataDir,
    console: &Console,
    symbol: &str,
) -> SymbolOutcome {
    console.default(format!("Downloading data for {symbol}"));
    let company = fetch(client, data, console, Resource::Company, symbol).await;
    let chart = fetch(client, data, console, Resource::Chart, symbol).await;
    let outcome = SymbolOutcome { company, chart };

    if outcome.all_succeeded() {
        console.default(format!("Finished downloading data for {symbol}"));
    } else {
        console.error(format!("Data download for {symbol} was not successful"));
    }

    outcome
}
