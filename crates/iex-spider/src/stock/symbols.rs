use crate::api::Client;
use crate::console::Console;
use crate::error::Result;
use crate::fs::{self, DataDir};
use serde::Deserialize;
use tracing::{debug, trace};

const SYMBOLS_ENDPOINT: [&str; 2] = ["ref-data", "symbols"];

// fetch
// ----------------------------------------------------------------------------

/// Download the IEX Cloud symbol index, keep the common stock, preferred stock
/// and ETF tickers, and write them to `allsymbols.json`.
///
/// The list is only returned once it is on disk; a failed write fails the
/// whole fetch.
pub async fn fetch(client: &Client, data: &DataDir, console: &Console) -> Result<Vec<String>> {
    console.default("Beginning download of symbol index from IEX");
    let body = client.get(&SYMBOLS_ENDPOINT).await.map_err(|err| {
        console.error("Unable to download symbol index from IEX");
        debug!("symbol index request failed, error({err})");
        err
    })?;
    console.success("Successfully downloaded symbol index from IEX");

    let index: SymbolIndex = serde_json::from_slice(&body).map_err(|err| {
        console.error("Unable to parse symbol index from IEX");
        debug!("symbol index is not valid JSON, error({err})");
        err
    })?;
    console.info(format!("Found {} supported symbols", index.0.len()));

    let symbols = index.tickers();
    console.info(format!(
        "{} symbols are ETFs, Common Stock, or Preferred stock",
        symbols.len()
    ));

    let path = data.symbols_path();
    console.default(format!(
        "Writing symbol index to drive in JSON format at '{}'",
        path.display()
    ));
    fs::write_json(&path, &symbols).await.map_err(|err| {
        console.error("Unable to write symbol index, make sure that you have write permissions");
        debug!("{err}");
        err
    })?;
    console.success("Successfully wrote symbol index to drive");

    Ok(symbols)
}

// de
// ----------------------------------------------------------------------------

/// The full IEX Cloud reference list, in source order.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct SymbolIndex(pub Vec<SecurityDescriptor>);

/// One entry of the reference list; every other field is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct SecurityDescriptor {
    pub symbol: String,
    #[serde(rename = "type", default)]
    pub kind: Option<SecurityType>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum SecurityType {
    #[serde(rename = "cs")]
    CommonStock,
    #[serde(rename = "ps")]
    PreferredStock,
    #[serde(rename = "et")]
    Etf,
    #[serde(other)]
    Other,
}

impl SecurityType {
    pub fn is_replicated(self) -> bool {
        matches!(
            self,
            SecurityType::CommonStock | SecurityType::PreferredStock | SecurityType::Etf
        )
    }
}

impl SymbolIndex {
    /// Tickers of the replicated security types, in source order.
    pub fn tickers(&self) -> Vec<String> {
        self.0
            .iter()
            .filter(|descriptor| descriptor.kind.is_some_and(SecurityType::is_replicated))
            .map(|descriptor| {
                trace!("keeping {} ({:?})", descriptor.symbol, descriptor.kind);
                descriptor.symbol.clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_stocks_and_etfs_in_order() {
        let index: SymbolIndex = serde_json::from_str(
            r#"[
                {"symbol": "A", "name": "Agilent", "type": "cs", "isEnabled": true},
                {"symbol": "AAA", "type": "bond"},
                {"symbol": "AAPL", "type": "cs"},
                {"symbol": "AAPL230120C", "type": "opt"},
                {"symbol": "BAC-PL", "type": "ps"},
                {"symbol": "SPY", "type": "et"},
                {"symbol": "ZZZ", "type": ""},
                {"symbol": "NOTYPE"},
                {"symbol": "NULLTYPE", "type": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(index.0.len(), 9);
        assert_eq!(index.tickers(), vec!["A", "AAPL", "BAC-PL", "SPY"]);
    }

    #[test]
    fn rejects_non_array_payloads() {
        assert!(serde_json::from_str::<SymbolIndex>(r#"{"error": "forbidden"}"#).is_err());
    }
}
