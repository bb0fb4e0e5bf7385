//! Provider trait for fetching statements.
//!
//! A [`StatementProvider`] performs the retrieval for one (company, statement
//! type) pair. Implementations must fold expected failures (no published data,
//! an exhausted retry budget) into [`Statement::Unavailable`] and reserve `Err`
//! for conditions that need investigation, such as a changed page layout.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    statement::{Statement, StatementBundle},
    types::{CompanyId, StatementType},
};

/// Source of published financial statements.
#[async_trait]
pub trait StatementProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "SinoTrade").
    fn name(&self) -> &str;

    /// Fetches one statement for one company.
    async fn fetch_statement(
        &self,
        company: CompanyId,
        statement_type: StatementType,
    ) -> Result<Statement>;

    /// Fetches both statements of a company.
    ///
    /// Default implementation calls `fetch_statement` sequentially in
    /// [`StatementType::ALL`] order.
    async fn fetch_bundle(&self, company: CompanyId) -> Result<StatementBundle> {
        let income_statement = self
            .fetch_statement(company, StatementType::IncomeStatement)
            .await?;
        let financial_position = self
            .fetch_statement(company, StatementType::FinancialPosition)
            .await?;
        Ok(StatementBundle::new(income_statement, financial_position))
    }
}
