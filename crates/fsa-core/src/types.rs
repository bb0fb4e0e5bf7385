//! Identifier and enumeration types.
//!
//! - [`CompanyId`] - Numeric listing code of a company
//! - [`StatementType`] - The two statement kinds a report is derived from

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FsaError;

/// Numeric listing code of a company (e.g. `1101`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(u32);

impl CompanyId {
    /// Creates a company id from its numeric code.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompanyId {
    type Err = FsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| FsaError::InvalidParameter(format!("company id {s:?}: {e}")))
    }
}

impl From<u32> for CompanyId {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

/// Kind of financial statement published for a company.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatementType {
    /// Income statement (損益表).
    IncomeStatement,
    /// Statement of financial position, i.e. the balance sheet (資產負債表).
    FinancialPosition,
}

impl StatementType {
    /// Both statement types, in the order they are fetched.
    pub const ALL: [Self; 2] = [Self::IncomeStatement, Self::FinancialPosition];

    /// Returns a short lowercase name suitable for logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IncomeStatement => "income_statement",
            Self::FinancialPosition => "financial_position",
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_id_parse() {
        let id: CompanyId = " 1101 ".parse().unwrap();
        assert_eq!(id, CompanyId::new(1101));
        assert_eq!(id.to_string(), "1101");
        assert!("11a".parse::<CompanyId>().is_err());
    }

    #[test]
    fn test_company_id_ordering() {
        let mut ids = vec![CompanyId::new(1109), CompanyId::new(1101)];
        ids.sort();
        assert_eq!(ids, vec![CompanyId::new(1101), CompanyId::new(1109)]);
    }

    #[test]
    fn test_statement_type_fetch_order() {
        assert_eq!(
            StatementType::ALL,
            [StatementType::IncomeStatement, StatementType::FinancialPosition]
        );
        assert_eq!(StatementType::FinancialPosition.to_string(), "financial_position");
    }
}
