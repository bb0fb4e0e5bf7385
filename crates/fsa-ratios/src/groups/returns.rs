//! Returns on assets and equity.

use fsa_core::{LineItems, Result};

use super::{after_tax_income, closed_ratio};
use crate::line_items::{TOTAL_ASSETS, TOTAL_EQUITY};
use crate::set::RatioSet;

/// After-tax income / total assets.
pub const ROA: &str = "ROA";
/// After-tax income / total equity.
pub const ROE: &str = "ROE";

/// Ratio names in report order.
pub const RATIOS: [&str; 2] = [ROA, ROE];

/// Computes the return ratios of one company.
pub fn compute(fp: &LineItems, is: &LineItems) -> Result<RatioSet> {
    let income = after_tax_income(is)?;

    Ok([
        (ROA, closed_ratio(ROA, &income, fp.series(TOTAL_ASSETS)?)?),
        (ROE, closed_ratio(ROE, &income, fp.series(TOTAL_EQUITY)?)?),
    ]
    .into_iter()
    .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::fixtures;

    #[test]
    fn test_returns() {
        let ratios = compute(&fixtures::financial_position(), &fixtures::income_statement()).unwrap();
        assert_eq!(ratios.get(ROA), Some(&[0.03; 5][..]));
        assert_eq!(ratios.get(ROE), Some(&[0.05; 5][..]));
    }
}
