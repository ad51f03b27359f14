/// The IEX Cloud reference list of tradable symbols, narrowed to common stock, preferred stock
/// and ETFs.
///
/// [ref-data/symbols](https://iexcloud.io/docs/api/#symbols)
pub mod symbols;

/// Per-symbol downloads; [chart](https://iexcloud.io/docs/api/#charts) and
/// [company](https://iexcloud.io/docs/api/#company) payloads, written verbatim.
pub mod resources;
