use crate::error::Result;
use config::{File, FileFormat};
use std::path::Path;
use tracing::{debug, trace};

/// Default settings file, read from the working directory.
pub const CONFIG_FILE: &str = "config.ini";

/// INI section holding the IEX Cloud credentials.
pub const SECTION: &str = "iexcloud";

/// Key, within [`SECTION`], holding the API token.
pub const KEY: &str = "apikey";

/// An IEX Cloud API token.
///
/// Loaded once at startup and never mutated. The prefix decides which host
/// the requests are routed to; see [`crate::api::Host::for_token`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    /// The token with everything between the 3rd and 25th character hidden.
    pub fn masked(&self) -> String {
        self.0
            .chars()
            .enumerate()
            .map(|(i, c)| if (3..25).contains(&i) { '*' } else { c })
            .collect()
    }
}

// never leak the token through `{:?}`
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

/// Read the API token from the `[iexcloud]` section of an INI file at `path`.
///
/// A missing file, a malformed file or a missing key are all reported as
/// [`Error::Config`](crate::Error::Config). An empty token is kept as is; it
/// routes to the sandbox like any other non-production token.
pub fn load(path: impl AsRef<Path>) -> Result<Credential> {
    let path = path.as_ref();
    trace!("reading settings file: {}", path.display());

    let settings = config::Config::builder()
        .add_source(File::from(path).format(FileFormat::Ini))
        .build()?;

    let token = settings.get_string(&format!("{SECTION}.{KEY}"))?;
    debug!("loaded {SECTION}.{KEY} from {}", path.display());

    Ok(Credential::new(token.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_middle_of_token() {
        let credential = Credential::new("pk_0123456789abcdefghijklmnopqrstuv");
        let expected = format!("pk_{}mnopqrstuv", "*".repeat(22));
        assert_eq!(credential.masked(), expected);
    }

    #[test]
    fn short_tokens_keep_prefix_only() {
        assert_eq!(Credential::new("Tpk_abc").masked(), "Tpk****");
        assert_eq!(Credential::new("").masked(), "");
    }

    #[test]
    fn debug_output_is_masked() {
        let credential = Credential::new("sk_secretsecretsecret");
        assert!(!format!("{credential:?}").contains("secret"));
    }
}
