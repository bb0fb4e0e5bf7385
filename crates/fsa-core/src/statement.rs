//! Parsed statements and per-company bundles.
//!
//! A [`Statement`] is either a set of [`LineItems`] or the human-readable reason
//! it could not be obtained. Both outcomes are ordinary data: the ratio layer
//! decides what to do with an unavailable statement.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{FsaError, Result};
use crate::types::StatementType;

/// Reason attached to a statement whose retrieval budget was exhausted.
pub const RETRIEVAL_FAILED: &str = "無法取得資料";

/// Per-period values of one line item, most recent period first.
pub type LineItemSeries = Vec<f64>;

/// Mapping from source-language line-item label to its series.
///
/// Inserting a label that already exists replaces the earlier series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItems {
    items: BTreeMap<String, LineItemSeries>,
}

impl LineItems {
    /// Creates an empty set of line items.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Inserts a line item, overwriting any earlier row with the same label.
    pub fn insert(&mut self, label: impl Into<String>, series: LineItemSeries) {
        self.items.insert(label.into(), series);
    }

    /// Returns the series for `label`, if present.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[f64]> {
        self.items.get(label).map(Vec::as_slice)
    }

    /// Returns the series for `label` or [`FsaError::MissingLineItem`].
    pub fn series(&self, label: &str) -> Result<&[f64]> {
        self.get(label)
            .ok_or_else(|| FsaError::MissingLineItem(label.to_string()))
    }

    /// Returns the number of line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no line items were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the shared period count, or `None` when empty or ragged.
    #[must_use]
    pub fn period_count(&self) -> Option<usize> {
        let mut lengths = self.items.values().map(Vec::len);
        let first = lengths.next()?;
        lengths.all(|len| len == first).then_some(first)
    }

    /// Iterates over `(label, series)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.items
            .iter()
            .map(|(label, series)| (label.as_str(), series.as_slice()))
    }
}

impl<S: Into<String>> FromIterator<(S, LineItemSeries)> for LineItems {
    fn from_iter<I: IntoIterator<Item = (S, LineItemSeries)>>(iter: I) -> Self {
        let mut items = Self::new();
        for (label, series) in iter {
            items.insert(label, series);
        }
        items
    }
}

/// One fetched statement: parsed line items or the reason they are missing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// The statement was retrieved and parsed.
    Available(LineItems),
    /// The statement could not be obtained; carries the source's message or
    /// [`RETRIEVAL_FAILED`].
    Unavailable(String),
}

impl Statement {
    /// Creates an unavailable statement with the given reason.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// Returns true if line items are present.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Returns the parsed line items, if available.
    #[must_use]
    pub const fn line_items(&self) -> Option<&LineItems> {
        match self {
            Self::Available(items) => Some(items),
            Self::Unavailable(_) => None,
        }
    }

    /// Returns the failure reason, if unavailable.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Available(_) => None,
            Self::Unavailable(reason) => Some(reason),
        }
    }
}

impl From<LineItems> for Statement {
    fn from(items: LineItems) -> Self {
        Self::Available(items)
    }
}

/// Both statements of one company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatementBundle {
    /// The income statement.
    pub income_statement: Statement,
    /// The statement of financial position.
    pub financial_position: Statement,
}

impl StatementBundle {
    /// Creates a bundle from its two statements.
    #[must_use]
    pub const fn new(income_statement: Statement, financial_position: Statement) -> Self {
        Self {
            income_statement,
            financial_position,
        }
    }

    /// Returns the statement of the given type.
    #[must_use]
    pub const fn get(&self, statement_type: StatementType) -> &Statement {
        match statement_type {
            StatementType::IncomeStatement => &self.income_statement,
            StatementType::FinancialPosition => &self.financial_position,
        }
    }

    /// Returns both line-item sets when both statements are available.
    ///
    /// The pair is ordered `(financial_position, income_statement)`.
    #[must_use]
    pub const fn available_pair(&self) -> Option<(&LineItems, &LineItems)> {
        match (&self.financial_position, &self.income_statement) {
            (Statement::Available(fp), Statement::Available(is)) => Some((fp, is)),
            _ => None,
        }
    }
}
