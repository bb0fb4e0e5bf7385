//! Long-term solvency: capital structure and interest coverage.

use fsa_core::{LineItems, Result, series};

use super::closed_ratio;
use crate::line_items::{
    FIXED_ASSETS, INTEREST_EXPENSE, NON_CURRENT_LIABILITIES, PRE_TAX_INCOME, TOTAL_ASSETS,
    TOTAL_EQUITY, TOTAL_LIABILITIES,
};
use crate::set::RatioSet;

/// Total liabilities / total assets.
pub const DEBT_TO_TOTAL_ASSETS: &str = "Debt to Total Assets Ratio";
/// Total equity / total assets.
pub const EQUITY_RATIO: &str = "Equity Ratio";
/// Total liabilities / total equity.
pub const DEBT_TO_EQUITY: &str = "Debt To Shareholder's Equity";
/// Total equity / property, plant and equipment.
pub const EQUITY_TO_FIXED_ASSETS: &str = "Shareholder's Equity To Fixed Assets";
/// (Total equity + non-current liabilities) / property, plant and equipment.
pub const LONG_TERM_FUNDS_TO_FIXED_ASSETS: &str = "Long Term Funds to Fixed Assets";
/// (Pre-tax income + interest expense) / interest expense.
pub const TIMES_INTEREST_EARNED: &str = "Times Interest Earned";

/// Ratio names in report order.
pub const RATIOS: [&str; 6] = [
    DEBT_TO_TOTAL_ASSETS,
    EQUITY_RATIO,
    DEBT_TO_EQUITY,
    EQUITY_TO_FIXED_ASSETS,
    LONG_TERM_FUNDS_TO_FIXED_ASSETS,
    TIMES_INTEREST_EARNED,
];

/// Computes the long-term solvency ratios of one company.
pub fn compute(fp: &LineItems, is: &LineItems) -> Result<RatioSet> {
    let total_assets = fp.series(TOTAL_ASSETS)?;
    let total_liabilities = fp.series(TOTAL_LIABILITIES)?;
    let equity = fp.series(TOTAL_EQUITY)?;
    let fixed_assets = fp.series(FIXED_ASSETS)?;
    let interest = is.series(INTEREST_EXPENSE)?;

    let earnings_before_interest_and_tax =
        series::add("EBIT", is.series(PRE_TAX_INCOME)?, interest)?;
    let long_term_funds = series::add(
        "long-term funds",
        equity,
        fp.series(NON_CURRENT_LIABILITIES)?,
    )?;

    Ok([
        (
            DEBT_TO_TOTAL_ASSETS,
            closed_ratio(DEBT_TO_TOTAL_ASSETS, total_liabilities, total_assets)?,
        ),
        (EQUITY_RATIO, closed_ratio(EQUITY_RATIO, equity, total_assets)?),
        (
            DEBT_TO_EQUITY,
            closed_ratio(DEBT_TO_EQUITY, total_liabilities, equity)?,
        ),
        (
            EQUITY_TO_FIXED_ASSETS,
            closed_ratio(EQUITY_TO_FIXED_ASSETS, equity, fixed_assets)?,
        ),
        (
            LONG_TERM_FUNDS_TO_FIXED_ASSETS,
            closed_ratio(LONG_TERM_FUNDS_TO_FIXED_ASSETS, &long_term_funds, fixed_assets)?,
        ),
        (
            TIMES_INTEREST_EARNED,
            closed_ratio(
                TIMES_INTEREST_EARNED,
                &earnings_before_interest_and_tax,
                interest,
            )?,
        ),
    ]
    .into_iter()
    .collect())
}
