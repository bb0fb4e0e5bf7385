//! Short-term solvency: current ratio, quick ratio, days in inventory.

use fsa_core::{LineItems, Result, series};

use super::closed_ratio;
use crate::line_items::{
    CASH, COST_OF_GOODS_SOLD, CURRENT_ASSETS, CURRENT_FINANCIAL_ASSETS, CURRENT_LIABILITIES,
    INVENTORY, RECEIVABLES,
};
use crate::set::RatioSet;

/// Current assets / current liabilities.
pub const CURRENT_RATIO: &str = "Current Ratio";
/// Quick assets / current liabilities.
pub const QUICK_RATIO: &str = "Quick Ratio";
/// 365 / (cost of goods sold / average inventory).
pub const DAYS_IN_INVENTORY: &str = "Days in Inventory";

/// Ratio names in report order.
pub const RATIOS: [&str; 3] = [CURRENT_RATIO, QUICK_RATIO, DAYS_IN_INVENTORY];

const DAYS_PER_YEAR: f64 = 365.0;

/// Computes the short-term solvency ratios of one company.
pub fn compute(fp: &LineItems, is: &LineItems) -> Result<RatioSet> {
    let current_liabilities = fp.series(CURRENT_LIABILITIES)?;

    let financial_assets = CURRENT_FINANCIAL_ASSETS
        .iter()
        .map(|label| fp.series(label))
        .collect::<Result<Vec<_>>>()?;
    let financial_assets = series::sum("current financial assets", &financial_assets)?;
    let quick_assets = series::sum(
        "quick assets",
        &[
            fp.series(CASH)?,
            financial_assets.as_slice(),
            fp.series(RECEIVABLES)?,
        ],
    )?;

    let cost_of_goods_sold = series::drop_tail(is.series(COST_OF_GOODS_SOLD)?);
    let average_inventory = series::adjacent_average(fp.series(INVENTORY)?);
    let days_in_inventory = series::zip_with(
        DAYS_IN_INVENTORY,
        cost_of_goods_sold,
        &average_inventory,
        |cogs, inventory| {
            series::round_ratio(series::safe_div(
                DAYS_PER_YEAR,
                series::safe_div(cogs, inventory),
            ))
        },
    )?;

    Ok([
        (
            CURRENT_RATIO,
            closed_ratio(CURRENT_RATIO, fp.series(CURRENT_ASSETS)?, current_liabilities)?,
        ),
        (
            QUICK_RATIO,
            closed_ratio(QUICK_RATIO, &quick_assets, current_liabilities)?,
        ),
        (DAYS_IN_INVENTORY, days_in_inventory),
    ]
    .into_iter()
    .collect())
}
