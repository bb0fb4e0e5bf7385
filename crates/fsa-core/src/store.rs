//! Per-run store of fetched statements.

use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{FsaError, Result},
    provider::StatementProvider,
    statement::StatementBundle,
    types::{CompanyId, StatementType},
};

/// Company → statement type → statement, for one run.
///
/// Companies keep the order they were inserted in; reports iterate in that
/// order. The store is filled once and only read afterwards.
#[derive(Clone, Debug, Default)]
pub struct StatementStore {
    companies: Vec<CompanyId>,
    bundles: HashMap<CompanyId, StatementBundle>,
}

impl StatementStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches both statements for every company, one request at a time.
    ///
    /// Unavailable statements are stored as such; a provider error (a parse
    /// failure) aborts collection.
    #[instrument(skip_all, fields(provider = provider.name(), companies = companies.len()))]
    pub async fn collect(
        provider: &dyn StatementProvider,
        companies: &[CompanyId],
    ) -> Result<Self> {
        let mut store = Self::new();
        for &company in companies {
            debug!(company = %company, "Fetching statements");
            let bundle = provider.fetch_bundle(company).await?;
            for statement_type in StatementType::ALL {
                if let Some(reason) = bundle.get(statement_type).reason() {
                    warn!(
                        company = %company,
                        statement = %statement_type,
                        reason,
                        "Statement unavailable"
                    );
                }
            }
            store.insert(company, bundle);
        }
        info!(
            companies = store.len(),
            incomplete = store.incomplete_count(),
            "Collected statements"
        );
        Ok(store)
    }

    /// Inserts a bundle. Re-inserting a company replaces its bundle in place.
    pub fn insert(&mut self, company: CompanyId, bundle: StatementBundle) {
        if self.bundles.insert(company, bundle).is_none() {
            self.companies.push(company);
        }
    }

    /// Returns the bundle for a company, if present.
    #[must_use]
    pub fn get(&self, company: CompanyId) -> Option<&StatementBundle> {
        self.bundles.get(&company)
    }

    /// Returns the bundle for a company or [`FsaError::CompanyNotFound`].
    pub fn bundle(&self, company: CompanyId) -> Result<&StatementBundle> {
        self.get(company)
            .ok_or_else(|| FsaError::CompanyNotFound(company.to_string()))
    }

    /// Companies in insertion order.
    #[must_use]
    pub fn companies(&self) -> &[CompanyId] {
        &self.companies
    }

    /// Iterates over `(company, bundle)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CompanyId, &StatementBundle)> {
        self.companies
            .iter()
            .filter_map(|id| self.bundles.get(id).map(|bundle| (*id, bundle)))
    }

    /// Number of companies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// Returns true if no company was stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Number of companies with at least one unavailable statement.
    #[must_use]
    pub fn incomplete_count(&self) -> usize {
        self.bundles
            .values()
            .filter(|bundle| bundle.available_pair().is_none())
            .count()
    }
}
