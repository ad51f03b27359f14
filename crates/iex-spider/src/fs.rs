use crate::error::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Default root of the replicated data, relative to the working directory.
pub const DATA_DIR: &str = "data";

const SYMBOLS_FILE: &str = "allsymbols.json";

/// Layout of the replicated files:
///
/// ```text
/// <root>/allsymbols.json
/// <root>/chart/<symbol>.json
/// <root>/company/<symbol>.json
/// ```
///
/// Symbols are lower-cased in file names.
#[derive(Clone, Debug)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn symbols_path(&self) -> PathBuf {
        self.root.join(SYMBOLS_FILE)
    }

    /// `<root>/<subdir>/<symbol, lower-cased>.json`
    ///
    /// Symbols that are empty or contain a path separator or `..` are refused,
    /// so every file lands directly inside `<root>/<subdir>`.
    pub fn symbol_path(&self, subdir: &str, symbol: &str) -> Result<PathBuf> {
        if symbol.is_empty() || symbol.contains(['/', '\\']) || symbol.contains("..") {
            return Err(Error::Symbol(symbol.to_string()));
        }
        Ok(self
            .root
            .join(subdir)
            .join(format!("{}.json", symbol.to_lowercase())))
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new(DATA_DIR)
    }
}

/// Write `bytes` to `path`, creating parent directories as necessary and
/// overwriting any existing file.
pub async fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent() {
        trace!("checking directory path: {}", dir.display());
        tokio::fs::create_dir_all(dir).await.map_err(io_err)?;
    }
    tokio::fs::write(path, bytes).await.map_err(io_err)?;
    trace!("wrote {} bytes to {}", bytes.len(), path.display());

    Ok(())
}

/// Serialize `value` as JSON and write it to `path`.
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec(value)?;
    write_file(path, &bytes).await
}
