#![allow(dead_code)]

use iex_spider::api::{Client, Hosts, RetryPolicy};
use iex_spider::config::Credential;
use iex_spider::console::Console;
use iex_spider::replicate::Pacer;
use serde::de::DeserializeOwned;
use std::path::Path;

pub const INDEX: &str = r#"[
    {"symbol": "AAPL", "exchange": "NAS", "name": "Apple Inc", "type": "cs", "isEnabled": true},
    {"symbol": "T-2025", "exchange": "NYS", "name": "AT&T bond", "type": "bond", "isEnabled": true},
    {"symbol": "SPY", "exchange": "PSE", "name": "SPDR S&P 500 ETF Trust", "type": "et", "isEnabled": true}
]"#;

pub const CHART: &str = r#"[{"date":"1993-01-29","close":43.94,"volume":1003200}]"#;

pub const COMPANY: &str = r#"{"symbol":"AAPL","companyName":"Apple Inc","industry":"Technology"}"#;

/// Client whose production host lives under `/cloud` and sandbox under `/sandbox`
/// of the mock server.
pub fn client(server: &mockito::ServerGuard, token: &str) -> Client {
    client_with_retry(server, token, RetryPolicy::none())
}

pub fn client_with_retry(server: &mockito::ServerGuard, token: &str, retry: RetryPolicy) -> Client {
    let hosts = Hosts::new(
        &format!("{}/cloud/", server.url()),
        &format!("{}/sandbox/", server.url()),
    )
    .unwrap();
    Client::builder(Credential::new(token))
        .hosts(hosts)
        .retry(retry)
        .build()
        .unwrap()
}

/// Console without a subscriber: messages go to `tracing` and are dropped.
pub fn quiet() -> Console {
    Console::new(false)
}

/// Counts pauses instead of sleeping.
#[derive(Default)]
pub struct CountingPacer(pub usize);

impl Pacer for CountingPacer {
    async fn pause(&mut self) {
        self.0 += 1;
    }
}

/// Reads a `.json` file from `path`.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> T {
    let file = tokio::fs::read(path).await.unwrap();
    serde_json::from_slice(&file).unwrap()
}
