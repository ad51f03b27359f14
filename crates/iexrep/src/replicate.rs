use crate::cli::Cli;
use iex_spider::api::{Client, RetryPolicy};
use iex_spider::config;
use iex_spider::console::Console;
use iex_spider::fs::DataDir;
use iex_spider::replicate::{self, FixedDelay, RunError};
use std::time::Duration;
use tracing::{debug, trace};

/// Base wait before the first retry; doubled for every further attempt.
const RETRY_BASE_DELAY: Duration = Duration::from_millis(500);

/// Load the credential, then replicate the symbol index and every symbol.
pub(crate) async fn run(cli: &Cli, console: &Console) -> Result<(), RunError> {
    // 1. credential
    let credential = config::load(&cli.config).map_err(|err| {
        console.error(format!(
            "Unable to read configuration for IEX Cloud api key in {}",
            cli.config.display()
        ));
        debug!("{err}");
        console.default("Exiting...");
        RunError::Config(err)
    })?;
    console.success(format!(
        "Loaded API key for IEX Cloud from {}",
        cli.config.display()
    ));
    console.info(format!("API key: {}", credential.masked()));

    // 2. http client
    trace!("building IEX Cloud client");
    let client = Client::builder(credential)
        .retry(RetryPolicy {
            retries: cli.retries,
            base_delay: RETRY_BASE_DELAY,
        })
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()
        .map_err(|err| {
            console.error("Unable to build the IEX Cloud client");
            RunError::Config(err)
        })?;

    // 3. symbols, one at a time
    let data = DataDir::new(&cli.data_dir);
    let mut pacer = FixedDelay(Duration::from_millis(cli.pause_ms));
    replicate::run(&client, &data, console, &mut pacer).await
}
