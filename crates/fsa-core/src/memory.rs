//! In-memory statement provider.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

use crate::{
    error::Result,
    provider::StatementProvider,
    statement::{RETRIEVAL_FAILED, Statement, StatementBundle},
    types::{CompanyId, StatementType},
};

/// Provider serving statements from memory, for tests and offline runs.
///
/// Pairs that were never registered answer as [`RETRIEVAL_FAILED`], the same
/// way an endpoint that never responds does.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    statements: HashMap<(CompanyId, StatementType), Statement>,
    requests: AtomicUsize,
}

impl InMemoryProvider {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one statement.
    #[must_use]
    pub fn with_statement(
        mut self,
        company: CompanyId,
        statement_type: StatementType,
        statement: Statement,
    ) -> Self {
        self.statements.insert((company, statement_type), statement);
        self
    }

    /// Registers both statements of a company.
    #[must_use]
    pub fn with_bundle(self, company: CompanyId, bundle: StatementBundle) -> Self {
        self.with_statement(company, StatementType::IncomeStatement, bundle.income_statement)
            .with_statement(
                company,
                StatementType::FinancialPosition,
                bundle.financial_position,
            )
    }

    /// Number of `fetch_statement` calls served so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl StatementProvider for InMemoryProvider {
    fn name(&self) -> &str {
        "In-memory"
    }

    async fn fetch_statement(
        &self,
        company: CompanyId,
        statement_type: StatementType,
    ) -> Result<Statement> {
        self.requests.fetch_add(1, Ordering::Relaxed);
        match self.statements.get(&(company, statement_type)) {
            Some(statement) => Ok(statement.clone()),
            None => {
                debug!(company = %company, statement = %statement_type, "No statement registered");
                Ok(Statement::unavailable(RETRIEVAL_FAILED))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::LineItems;

    #[tokio::test]
    async fn test_registered_and_missing_statements() {
        let company = CompanyId::new(1101);
        let items: LineItems = [("存貨", vec![1.0, 2.0])].into_iter().collect();
        let provider = InMemoryProvider::new().with_statement(
            company,
            StatementType::FinancialPosition,
            items.clone().into(),
        );

        let fp = provider
            .fetch_statement(company, StatementType::FinancialPosition)
            .await
            .unwrap();
        assert_eq!(fp, Statement::Available(items));

        let is = provider
            .fetch_statement(company, StatementType::IncomeStatement)
            .await
            .unwrap();
        assert_eq!(is.reason(), Some(RETRIEVAL_FAILED));
        assert_eq!(provider.request_count(), 2);
    }

    #[tokio::test]
    async fn test_fetch_bundle_is_sequential_pair() {
        let company = CompanyId::new(1102);
        let provider = InMemoryProvider::new();
        let bundle = provider.fetch_bundle(company).await.unwrap();
        assert!(!bundle.income_statement.is_available());
        assert!(!bundle.financial_position.is_available());
        assert_eq!(provider.request_count(), 2);
    }
}
