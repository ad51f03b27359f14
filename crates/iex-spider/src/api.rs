//! IEX Cloud calls are made up of the following components:
//! 1. host, chosen from the token prefix on every call
//! 2. path segments, percent-encoded onto the host's base url
//! 3. the token, as the `token` query parameter
//! 4. the raw response body; decoding (if any) is left to the caller

use crate::config::Credential;
use crate::error::{Error, Result};
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, trace, warn};

pub const PRODUCTION_URL: &str = "https://cloud.iexapis.com/stable/";
pub const SANDBOX_URL: &str = "https://sandbox.iexapis.com/stable/";

/// Token prefixes routed to the production host.
const PRODUCTION_PREFIXES: [&str; 2] = ["pk_", "sk_"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Host {
    Production,
    Sandbox,
}

impl Host {
    /// `pk_` and `sk_` tokens go to production; anything else to the sandbox.
    pub fn for_token(token: &str) -> Self {
        if PRODUCTION_PREFIXES
            .iter()
            .any(|prefix| token.starts_with(prefix))
        {
            Host::Production
        } else {
            Host::Sandbox
        }
    }
}

/// Base urls of both hosts.
#[derive(Clone, Debug)]
pub struct Hosts {
    pub production: Url,
    pub sandbox: Url,
}

impl Hosts {
    pub fn new(production: &str, sandbox: &str) -> Result<Self> {
        let parse =
            |url: &str| Url::parse(url).map_err(|err| Error::Url(format!("{url}: {err}")));
        Ok(Self {
            production: parse(production)?,
            sandbox: parse(sandbox)?,
        })
    }

    pub fn base(&self, host: Host) -> &Url {
        match host {
            Host::Production => &self.production,
            Host::Sandbox => &self.sandbox,
        }
    }
}

impl Default for Hosts {
    fn default() -> Self {
        Self {
            production: Url::parse(PRODUCTION_URL).expect("valid production url"),
            sandbox: Url::parse(SANDBOX_URL).expect("valid sandbox url"),
        }
    }
}

/// Bounded retry with exponential backoff. Zero retries means every request
/// is attempted exactly once.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub retries: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            retries: 0,
            base_delay: Duration::ZERO,
        }
    }

    /// Wait before retry number `attempt` (0-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Blocking-in-sequence IEX Cloud client.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    hosts: Hosts,
    credential: Credential,
    retry: RetryPolicy,
}

impl Client {
    pub fn new(credential: Credential) -> Result<Self> {
        Self::builder(credential).build()
    }

    pub fn builder(credential: Credential) -> ClientBuilder {
        ClientBuilder {
            credential,
            hosts: Hosts::default(),
            retry: RetryPolicy::default(),
            timeout: None,
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// The url for `segments`, on the host the token routes to.
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let host = Host::for_token(self.credential.token());
        let base = self.hosts.base(host);
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Url(format!("{base} cannot be a base")))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("token", self.credential.token());
        trace!("{host:?} endpoint: {}", url.path());
        Ok(url)
    }

    /// GET `segments` and return the raw response body.
    ///
    /// Transport failures, timeouts and non-2xx statuses are all errors.
    pub async fn get(&self, segments: &[&str]) -> Result<Vec<u8>> {
        let url = self.url(segments)?;
        let mut attempt = 0;
        loop {
            match self.try_get(url.clone()).await {
                Ok(body) => {
                    debug!("GET {} returned {} bytes", url.path(), body.len());
                    return Ok(body);
                }
                Err(err) if attempt < self.retry.retries => {
                    let wait = self.retry.backoff(attempt);
                    warn!(
                        "GET {} failed, retrying in {wait:?} ({}/{}), error({err})",
                        url.path(),
                        attempt + 1,
                        self.retry.retries
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn try_get(&self, url: Url) -> Result<Vec<u8>> {
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(body.to_vec())
    }
}

pub struct ClientBuilder {
    credential: Credential,
    hosts: Hosts,
    retry: RetryPolicy,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn hosts(mut self, hosts: Hosts) -> Self {
        self.hosts = hosts;
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut http = reqwest::ClientBuilder::new();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        Ok(Client {
            http: http.build()?,
            hosts: self.hosts,
            credential: self.credential,
            retry: self.retry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_by_token_prefix() {
        assert_eq!(Host::for_token("pk_abc"), Host::Production);
        assert_eq!(Host::for_token("sk_abc"), Host::Production);
        assert_eq!(Host::for_token("Tpk_abc"), Host::Sandbox);
        assert_eq!(Host::for_token("Tsk_abc"), Host::Sandbox);
        assert_eq!(Host::for_token("pk"), Host::Sandbox);
        assert_eq!(Host::for_token(""), Host::Sandbox);
    }

    #[test]
    fn url_encodes_segments_and_token() {
        let client = Client::new(Credential::new("pk_test")).unwrap();
        let url = client.url(&["stock", "brk#a", "company"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://cloud.iexapis.com/stable/stock/brk%23a/company?token=pk_test"
        );

        let client = Client::new(Credential::new("Tsk_test")).unwrap();
        let url = client.url(&["ref-data", "symbols"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://sandbox.iexapis.com/stable/ref-data/symbols?token=Tsk_test"
        );
    }

    #[test]
    fn backoff_doubles() {
        let policy = RetryPolicy {
            retries: 3,
            base_delay: Duration::from_millis(250),
        };
        assert_eq!(policy.backoff(0), Duration::from_millis(250));
        assert_eq!(policy.backoff(1), Duration::from_millis(500));
        assert_eq!(policy.backoff(2), Duration::from_millis(1000));
    }
}
