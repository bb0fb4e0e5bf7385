//! Ratio groups across all companies of a run.

use fsa_core::{CompanyId, LineItems, Result, Statement, StatementStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::groups::{efficiency, long_term, profitability, returns, short_term};
use crate::set::RatioSet;

/// The five ratio categories of a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioGroupKind {
    /// Current ratio, quick ratio, days in inventory.
    ShortTermSolvency,
    /// Leverage, fixed-asset coverage, interest coverage.
    LongTermSolvency,
    /// Sales turnover of cash, receivables, inventory, fixed and total assets.
    AssetEfficiency,
    /// Margins over net sales.
    Profitability,
    /// ROA and ROE.
    Returns,
}

impl RatioGroupKind {
    /// All groups in report order.
    pub const ALL: [Self; 5] = [
        Self::ShortTermSolvency,
        Self::LongTermSolvency,
        Self::AssetEfficiency,
        Self::Profitability,
        Self::Returns,
    ];

    /// Ratio names of this group in report order.
    #[must_use]
    pub const fn ratio_names(&self) -> &'static [&'static str] {
        match self {
            Self::ShortTermSolvency => &short_term::RATIOS,
            Self::LongTermSolvency => &long_term::RATIOS,
            Self::AssetEfficiency => &efficiency::RATIOS,
            Self::Profitability => &profitability::RATIOS,
            Self::Returns => &returns::RATIOS,
        }
    }

    /// Section title as used in the published report.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ShortTermSolvency => "短期償債能力",
            Self::LongTermSolvency => "長期償債能力",
            Self::AssetEfficiency => "資產使用效率",
            Self::Profitability => "獲利能力",
            Self::Returns => "投資報酬率",
        }
    }

    /// Short lowercase identifier for logs and file names.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::ShortTermSolvency => "short_term_solvency",
            Self::LongTermSolvency => "long_term_solvency",
            Self::AssetEfficiency => "asset_efficiency",
            Self::Profitability => "profitability",
            Self::Returns => "returns",
        }
    }

    /// Computes this group's ratios for one company.
    pub fn compute_company(&self, fp: &LineItems, is: &LineItems) -> Result<RatioSet> {
        match self {
            Self::ShortTermSolvency => short_term::compute(fp, is),
            Self::LongTermSolvency => long_term::compute(fp, is),
            Self::AssetEfficiency => efficiency::compute(fp, is),
            Self::Profitability => profitability::compute(fp, is),
            Self::Returns => returns::compute(fp, is),
        }
    }
}

impl fmt::Display for RatioGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One company's entry in a ratio group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RatioEntry {
    /// Ratios computed from two available statements.
    Computed(RatioSet),
    /// At least one statement was unavailable; both are kept as fetched.
    Unavailable {
        /// The statement of financial position, available or not.
        financial_position: Statement,
        /// The income statement, available or not.
        income_statement: Statement,
    },
}

impl RatioEntry {
    /// Returns the computed ratios, if any.
    #[must_use]
    pub const fn ratios(&self) -> Option<&RatioSet> {
        match self {
            Self::Computed(set) => Some(set),
            Self::Unavailable { .. } => None,
        }
    }

    /// Returns `(financial_position, income_statement)` for a fallback entry.
    #[must_use]
    pub const fn fallback(&self) -> Option<(&Statement, &Statement)> {
        match self {
            Self::Computed(_) => None,
            Self::Unavailable {
                financial_position,
                income_statement,
            } => Some((financial_position, income_statement)),
        }
    }
}

/// A ratio group evaluated for every company of a store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatioGroup {
    kind: RatioGroupKind,
    entries: Vec<(CompanyId, RatioEntry)>,
}

impl RatioGroup {
    /// Evaluates `kind` for every company in store order.
    ///
    /// Companies with an unavailable statement get a fallback entry; a missing
    /// line item or misaligned series in an available statement is an error.
    pub fn compute(kind: RatioGroupKind, store: &StatementStore) -> Result<Self> {
        let mut entries = Vec::with_capacity(store.len());
        for (company, bundle) in store.iter() {
            let entry = match bundle.available_pair() {
                Some((fp, is)) => {
                    debug!(group = %kind, company = %company, "Computing ratios");
                    RatioEntry::Computed(kind.compute_company(fp, is)?)
                }
                None => {
                    warn!(group = %kind, company = %company, "Statements unavailable, keeping fallback");
                    RatioEntry::Unavailable {
                        financial_position: bundle.financial_position.clone(),
                        income_statement: bundle.income_statement.clone(),
                    }
                }
            };
            entries.push((company, entry));
        }
        Ok(Self { kind, entries })
    }

    /// Evaluates all five groups in report order.
    pub fn compute_all(store: &StatementStore) -> Result<Vec<Self>> {
        RatioGroupKind::ALL
            .iter()
            .map(|&kind| Self::compute(kind, store))
            .collect()
    }

    /// Assembles a group from precomputed entries.
    #[must_use]
    pub const fn from_entries(kind: RatioGroupKind, entries: Vec<(CompanyId, RatioEntry)>) -> Self {
        Self { kind, entries }
    }

    /// The group's category.
    #[must_use]
    pub const fn kind(&self) -> RatioGroupKind {
        self.kind
    }

    /// Ratio names of this group in report order.
    #[must_use]
    pub const fn ratio_names(&self) -> &'static [&'static str] {
        self.kind.ratio_names()
    }

    /// Returns the entry of a company.
    #[must_use]
    pub fn get(&self, company: CompanyId) -> Option<&RatioEntry> {
        self.entries
            .iter()
            .find(|(id, _)| *id == company)
            .map(|(_, entry)| entry)
    }

    /// Iterates over `(company, entry)` in store order.
    pub fn iter(&self) -> impl Iterator<Item = (CompanyId, &RatioEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    /// Number of companies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the group covers no company.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::fixtures;
    use fsa_core::{RETRIEVAL_FAILED, StatementBundle};

    fn store() -> StatementStore {
        let mut store = StatementStore::new();
        store.insert(
            CompanyId::new(1101),
            StatementBundle::new(
                fixtures::income_statement().into(),
                fixtures::financial_position().into(),
            ),
        );
        store.insert(
            CompanyId::new(1102),
            StatementBundle::new(
                fixtures::income_statement().into(),
                Statement::unavailable(RETRIEVAL_FAILED),
            ),
        );
        store
    }

    #[test]
    fn test_catalogue() {
        let total: usize = RatioGroupKind::ALL
            .iter()
            .map(|kind| kind.ratio_names().len())
            .sum();
        assert_eq!(total, 20);
        assert_eq!(RatioGroupKind::Returns.title(), "投資報酬率");
    }

    #[test]
    fn test_every_group_falls_back_for_unavailable_company() {
        let store = store();
        let groups = RatioGroup::compute_all(&store).unwrap();
        assert_eq!(groups.len(), 5);

        for group in &groups {
            let entry = group.get(CompanyId::new(1102)).unwrap();
            let (fp, is) = entry.fallback().unwrap();
            assert_eq!(fp, &Statement::unavailable(RETRIEVAL_FAILED));
            assert_eq!(is, &Statement::Available(fixtures::income_statement()));

            let computed = group.get(CompanyId::new(1101)).unwrap().ratios().unwrap();
            assert_eq!(
                computed.names().collect::<Vec<_>>(),
                group.ratio_names().to_vec()
            );
            assert!(computed.iter().all(|(_, series)| series.len() == 5));
        }
    }

    #[test]
    fn test_entries_follow_store_order() {
        let group = RatioGroup::compute(RatioGroupKind::Returns, &store()).unwrap();
        assert_eq!(
            group.iter().map(|(id, _)| id).collect::<Vec<_>>(),
            vec![CompanyId::new(1101), CompanyId::new(1102)]
        );
    }

    #[test]
    fn test_missing_line_item_is_an_error() {
        let mut store = StatementStore::new();
        store.insert(
            CompanyId::new(1103),
            StatementBundle::new(LineItems::new().into(), LineItems::new().into()),
        );
        assert!(RatioGroup::compute(RatioGroupKind::Profitability, &store).is_err());
    }
}
