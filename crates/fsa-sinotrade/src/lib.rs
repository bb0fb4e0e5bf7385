#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fsa/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! SinoTrade statement provider.
//!
//! # Example
//!
//! ```no_run
//! use fsa_core::{CompanyId, StatementProvider, StatementType};
//! use fsa_sinotrade::SinoTradeProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = SinoTradeProvider::new()?;
//!     let statement = provider
//!         .fetch_statement(CompanyId::new(1101), StatementType::FinancialPosition)
//!         .await?;
//!     match statement.line_items() {
//!         Some(items) => println!("{} line items", items.len()),
//!         None => println!("unavailable: {:?}", statement.reason()),
//!     }
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use fsa_core::{
    CompanyId, FsaError, RETRIEVAL_FAILED, Result, Statement, StatementProvider, StatementType,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// HTML parsing for statement pages.
pub mod parser;

/// SinoTrade stock channel base URL.
pub const DEFAULT_BASE_URL: &str = "https://stockchannelnew.sinotrade.com.tw";

/// Default number of requests issued before a statement is given up on.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// User agent for HTTP requests.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Returns the page path of a statement, relative to the base URL.
#[must_use]
pub fn statement_path(company: CompanyId, statement_type: StatementType) -> String {
    match statement_type {
        StatementType::IncomeStatement => format!("/z/zc/zcq/zcqa/zcqa_{company}.djhtm"),
        StatementType::FinancialPosition => format!("/z/zc/zcp/zcpb/zcpb_{company}.djhtm"),
    }
}

/// Retrieval settings for [`SinoTradeProvider`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Scheme and host the statement paths are appended to.
    pub base_url: String,
    /// Requests issued per statement before giving up (at least one).
    pub max_attempts: u32,
    /// Pause between failed attempts.
    pub retry_delay: Duration,
    /// Per-request timeout; a timed-out request counts as a failed attempt.
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: Duration::ZERO,
            timeout: Duration::from_secs(30),
        }
    }
}

impl FetchConfig {
    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the attempt budget.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the pause between failed attempts.
    #[must_use]
    pub const fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// SinoTrade statement provider.
///
/// Requests are issued one at a time. A failed request (transport error or
/// non-success status) is repeated until [`FetchConfig::max_attempts`] requests
/// have been made, after which the statement is reported as
/// [`RETRIEVAL_FAILED`].
#[derive(Debug)]
pub struct SinoTradeProvider {
    client: reqwest::Client,
    config: FetchConfig,
}

impl SinoTradeProvider {
    /// Create a provider with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(FetchConfig::default())
    }

    /// Create a provider with custom settings.
    pub fn with_config(config: FetchConfig) -> Result<Self> {
        if config.max_attempts == 0 {
            return Err(FsaError::InvalidParameter(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| FsaError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a provider with a pre-configured HTTP client.
    ///
    /// The client's own timeout applies; [`FetchConfig::timeout`] is ignored.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, config: FetchConfig) -> Self {
        Self { client, config }
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Returns the full URL of a statement page.
    #[must_use]
    pub fn statement_url(&self, company: CompanyId, statement_type: StatementType) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            statement_path(company, statement_type)
        )
    }

    /// Fetches a page body, retrying failed requests.
    ///
    /// Returns `None` once the attempt budget is spent.
    async fn get_with_retry(&self, url: &str) -> Option<String> {
        let max_attempts = self.config.max_attempts.max(1);
        for attempt in 1..=max_attempts {
            match self.get_once(url).await {
                Ok(body) => {
                    debug!(url, attempt, "Fetched page");
                    return Some(body);
                }
                Err(e) => {
                    warn!(url, attempt, max_attempts, error = %e, "Request failed");
                    if attempt < max_attempts && !self.config.retry_delay.is_zero() {
                        sleep(self.config.retry_delay).await;
                    }
                }
            }
        }
        None
    }

    async fn get_once(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FsaError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FsaError::Network(format!("HTTP {}", response.status())));
        }

        response
            .text()
            .await
            .map_err(|e| FsaError::Network(format!("Failed to read body: {e}")))
    }
}

#[async_trait]
impl StatementProvider for SinoTradeProvider {
    fn name(&self) -> &str {
        "SinoTrade"
    }

    async fn fetch_statement(
        &self,
        company: CompanyId,
        statement_type: StatementType,
    ) -> Result<Statement> {
        let url = self.statement_url(company, statement_type);
        debug!(company = %company, statement = %statement_type, %url, "Fetching statement");

        let Some(body) = self.get_with_retry(&url).await else {
            warn!(
                company = %company,
                statement = %statement_type,
                attempts = self.config.max_attempts,
                "Giving up on statement"
            );
            return Ok(Statement::unavailable(RETRIEVAL_FAILED));
        };

        parser::parse_document(&body).map_err(|e| match e {
            FsaError::Parse(msg) => {
                FsaError::Parse(format!("{statement_type} for {company}: {msg}"))
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_paths() {
        let id = CompanyId::new(1101);
        assert_eq!(
            statement_path(id, StatementType::IncomeStatement),
            "/z/zc/zcq/zcqa/zcqa_1101.djhtm"
        );
        assert_eq!(
            statement_path(id, StatementType::FinancialPosition),
            "/z/zc/zcp/zcpb/zcpb_1101.djhtm"
        );
    }

    #[test]
    fn test_statement_url_joins_base() {
        let config = FetchConfig::default().with_base_url("http://localhost:8080/");
        let provider = SinoTradeProvider::with_config(config).unwrap();
        assert_eq!(
            provider.statement_url(CompanyId::new(1102), StatementType::FinancialPosition),
            "http://localhost:8080/z/zc/zcp/zcpb/zcpb_1102.djhtm"
        );
    }

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_attempts, 100);
        assert!(config.retry_delay.is_zero());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = FetchConfig::default().with_max_attempts(0);
        assert!(matches!(
            SinoTradeProvider::with_config(config),
            Err(FsaError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_provider_name() {
        let provider = SinoTradeProvider::new().unwrap();
        assert_eq!(provider.name(), "SinoTrade");
    }
}
