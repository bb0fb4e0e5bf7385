//! Asset efficiency: how many times sales turn over each asset base.

use fsa_core::{LineItems, Result};

use super::{averaged_ratio, closed_ratio};
use crate::line_items::{
    CASH, COST_OF_GOODS_SOLD, FIXED_ASSETS, INVENTORY, NET_SALES, RECEIVABLES, TOTAL_ASSETS,
};
use crate::set::RatioSet;

/// Net sales / cash and equivalents.
pub const SALES_TO_CASH: &str = "Sales to Cash";
/// Net sales / receivables.
pub const SALES_TO_RECEIVABLES: &str = "Sales to Accounts Receivable";
/// Cost of goods sold / average inventory.
pub const SALES_TO_INVENTORY: &str = "Sales to Inventory";
/// Net sales / average property, plant and equipment.
pub const SALES_TO_FIXED_ASSETS: &str = "Sales to Fixed Assets";
/// Net sales / average total assets.
pub const SALES_TO_TOTAL_ASSETS: &str = "Sales to Total Asset";

/// Ratio names in report order.
pub const RATIOS: [&str; 5] = [
    SALES_TO_CASH,
    SALES_TO_RECEIVABLES,
    SALES_TO_INVENTORY,
    SALES_TO_FIXED_ASSETS,
    SALES_TO_TOTAL_ASSETS,
];

/// Computes the asset efficiency ratios of one company.
pub fn compute(fp: &LineItems, is: &LineItems) -> Result<RatioSet> {
    let sales = is.series(NET_SALES)?;

    Ok([
        (
            SALES_TO_CASH,
            closed_ratio(SALES_TO_CASH, sales, fp.series(CASH)?)?,
        ),
        (
            SALES_TO_RECEIVABLES,
            closed_ratio(SALES_TO_RECEIVABLES, sales, fp.series(RECEIVABLES)?)?,
        ),
        (
            SALES_TO_INVENTORY,
            averaged_ratio(
                SALES_TO_INVENTORY,
                is.series(COST_OF_GOODS_SOLD)?,
                fp.series(INVENTORY)?,
            )?,
        ),
        (
            SALES_TO_FIXED_ASSETS,
            averaged_ratio(SALES_TO_FIXED_ASSETS, sales, fp.series(FIXED_ASSETS)?)?,
        ),
        (
            SALES_TO_TOTAL_ASSETS,
            averaged_ratio(SALES_TO_TOTAL_ASSETS, sales, fp.series(TOTAL_ASSETS)?)?,
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
    fn test_turnover_ratios() {
        let ratios = compute(&fixtures::financial_position(), &fixtures::income_statement()).unwrap();

        assert_eq!(ratios.get(SALES_TO_CASH), Some(&[50.0; 5][..]));
        assert_eq!(ratios.get(SALES_TO_RECEIVABLES), Some(&[31.25; 5][..]));
        assert_eq!(ratios.get(SALES_TO_INVENTORY), Some(&[10.0; 5][..]));
        assert_eq!(ratios.get(SALES_TO_FIXED_ASSETS), Some(&[2.5; 5][..]));
        assert_eq!(ratios.get(SALES_TO_TOTAL_ASSETS), Some(&[0.5; 5][..]));
    }

    #[test]
    fn test_averaged_denominator_shift() {
        let fp = {
            let mut fp = fixtures::financial_position();
            fp.insert(TOTAL_ASSETS, vec![600.0, 400.0, 200.0, 400.0, 600.0, 1000.0]);
            fp
        };
        let ratios = compute(&fp, &fixtures::income_statement()).unwrap();
        // averages: 500, 300, 300, 500, 800
        assert_eq!(
            ratios.get(SALES_TO_TOTAL_ASSETS),
            Some(&[1.0, 1.667, 1.667, 1.0, 0.625][..])
        );
    }
}
