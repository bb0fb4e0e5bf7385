//! Analysis configuration.

use fsa_core::CompanyId;
use fsa_report::ReportWindow;
#[cfg(feature = "sinotrade")]
use fsa_sinotrade::FetchConfig;
use serde::{Deserialize, Serialize};

/// Companies analysed by default: Taiwan cement and paper producers.
pub const COMPANY_IDS: [CompanyId; 6] = [
    CompanyId::new(1101),
    CompanyId::new(1102),
    CompanyId::new(1103),
    CompanyId::new(1104),
    CompanyId::new(1108),
    CompanyId::new(1109),
];

/// Settings of one analysis run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Companies in report order.
    pub companies: Vec<CompanyId>,
    /// Year labels of the table columns.
    pub window: ReportWindow,
    /// Retrieval settings of the SinoTrade provider.
    #[cfg(feature = "sinotrade")]
    pub fetch: FetchConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            companies: COMPANY_IDS.to_vec(),
            window: ReportWindow::default(),
            #[cfg(feature = "sinotrade")]
            fetch: FetchConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Replaces the company list.
    #[must_use]
    pub fn with_companies(mut self, companies: impl IntoIterator<Item = CompanyId>) -> Self {
        self.companies = companies.into_iter().collect();
        self
    }

    /// Replaces the report window.
    #[must_use]
    pub fn with_window(mut self, window: ReportWindow) -> Self {
        self.window = window;
        self
    }

    /// Replaces the retrieval settings.
    #[cfg(feature = "sinotrade")]
    #[must_use]
    pub fn with_fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }
}
