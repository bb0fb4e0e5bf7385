//! Profitability: margins over net sales.

use fsa_core::{LineItems, Result};

use super::{after_tax_income, closed_ratio};
use crate::line_items::{GROSS_PROFIT, NET_SALES, OPERATING_INCOME, PRE_TAX_INCOME};
use crate::set::RatioSet;

/// Gross profit / net sales.
pub const GROSS_PROFIT_MARGIN: &str = "Gross Profit Margin";
/// Operating income / net sales.
pub const OPERATING_MARGIN: &str = "Operating Net Profit Margin";
/// Pre-tax income / net sales.
pub const PRE_TAX_MARGIN: &str = "Pre-Tax Income Margin";
/// After-tax income / net sales.
pub const AFTER_TAX_MARGIN: &str = "Net Operating Profit After Tax";

/// Ratio names in report order.
pub const RATIOS: [&str; 4] = [
    GROSS_PROFIT_MARGIN,
    OPERATING_MARGIN,
    PRE_TAX_MARGIN,
    AFTER_TAX_MARGIN,
];

/// Computes the profitability ratios of one company.
///
/// Only the income statement is read; the statement of financial position is
/// accepted so every group shares one signature.
pub fn compute(_fp: &LineItems, is: &LineItems) -> Result<RatioSet> {
    let sales = is.series(NET_SALES)?;

    Ok([
        (
            GROSS_PROFIT_MARGIN,
            closed_ratio(GROSS_PROFIT_MARGIN, is.series(GROSS_PROFIT)?, sales)?,
        ),
        (
            OPERATING_MARGIN,
            closed_ratio(OPERATING_MARGIN, is.series(OPERATING_INCOME)?, sales)?,
        ),
        (
            PRE_TAX_MARGIN,
            closed_ratio(PRE_TAX_MARGIN, is.series(PRE_TAX_INCOME)?, sales)?,
        ),
        (
            AFTER_TAX_MARGIN,
            closed_ratio(AFTER_TAX_MARGIN, &after_tax_income(is)?, sales)?,
        ),
    ]
    .into_iter()
    .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::fixtures;

    #[test]
    fn test_margins() {
        let ratios = compute(&fixtures::financial_position(), &fixtures::income_statement()).unwrap();

        assert_eq!(ratios.get(GROSS_PROFIT_MARGIN), Some(&[0.2; 5][..]));
        assert_eq!(ratios.get(OPERATING_MARGIN), Some(&[0.1; 5][..]));
        assert_eq!(ratios.get(PRE_TAX_MARGIN), Some(&[0.08; 5][..]));
        // (40 - 10) / 500
        assert_eq!(ratios.get(AFTER_TAX_MARGIN), Some(&[0.06; 5][..]));
    }

    #[test]
    fn test_zero_sales() {
        let mut is = fixtures::income_statement();
        is.insert(NET_SALES, vec![0.0; 6]);
        let ratios = compute(&fixtures::financial_position(), &is).unwrap();
        for name in RATIOS {
            assert!(ratios.get(name).unwrap().iter().all(|v| v.is_nan()), "{name}");
        }
    }
}
