//! Ratio formulas, one module per group.
//!
//! Every formula runs over most-recent-first series. Point-in-time ratios are
//! computed for every period and then lose the oldest one, which has no prior
//! period to compare with. Ratios over an adjacent-period average pair the
//! average with the numerator minus its oldest period, so both sides cover the
//! same closed periods.

/// Asset efficiency (turnover) ratios.
pub mod efficiency;
/// Long-term solvency ratios.
pub mod long_term;
/// Profitability margins.
pub mod profitability;
/// Returns on assets and equity.
pub mod returns;
/// Short-term solvency ratios.
pub mod short_term;

use fsa_core::{LineItems, Result, series};

/// Rounded ratio over all periods, without the oldest one.
fn closed_ratio(name: &str, numerator: &[f64], denominator: &[f64]) -> Result<Vec<f64>> {
    let mut out = series::ratio(name, numerator, denominator)?;
    out.pop();
    Ok(out)
}

/// Rounded ratio of the numerator's closed periods to an adjacent average.
fn averaged_ratio(name: &str, numerator: &[f64], averaged: &[f64]) -> Result<Vec<f64>> {
    series::ratio(
        name,
        series::drop_tail(numerator),
        &series::adjacent_average(averaged),
    )
}

/// Income after tax: pre-tax income minus income tax expense.
fn after_tax_income(is: &LineItems) -> Result<Vec<f64>> {
    use crate::line_items::{INCOME_TAX, PRE_TAX_INCOME};
    series::subtract(
        "after-tax income",
        is.series(PRE_TAX_INCOME)?,
        is.series(INCOME_TAX)?,
    )
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! A company whose figures give round ratios in every group.

    use crate::line_items::*;
    use fsa_core::LineItems;

    fn flat(value: f64) -> Vec<f64> {
        vec![value; 6]
    }

    pub(crate) fn financial_position() -> LineItems {
        let mut fp: LineItems = [
            (CURRENT_ASSETS, vec![120.0, 110.0, 100.0, 90.0, 80.0, 70.0]),
            (CURRENT_LIABILITIES, vec![60.0, 55.0, 50.0, 45.0, 40.0, 35.0]),
            (CASH, flat(10.0)),
            (RECEIVABLES, flat(16.0)),
            (INVENTORY, vec![50.0, 30.0, 50.0, 30.0, 50.0, 30.0]),
            (FIXED_ASSETS, flat(200.0)),
            (TOTAL_ASSETS, flat(1000.0)),
            (TOTAL_LIABILITIES, flat(400.0)),
            (NON_CURRENT_LIABILITIES, flat(100.0)),
            (TOTAL_EQUITY, flat(600.0)),
        ]
        .into_iter()
        .collect();
        for label in CURRENT_FINANCIAL_ASSETS {
            fp.insert(label, flat(1.0));
        }
        fp
    }

    pub(crate) fn income_statement() -> LineItems {
        [
            (NET_SALES, flat(500.0)),
            (COST_OF_GOODS_SOLD, flat(400.0)),
            (GROSS_PROFIT, flat(100.0)),
            (OPERATING_INCOME, flat(50.0)),
            (PRE_TAX_INCOME, flat(40.0)),
            (INCOME_TAX, flat(10.0)),
            (INTEREST_EXPENSE, flat(8.0)),
        ]
        .into_iter()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_ratio_drops_oldest() {
        let out = closed_ratio("t", &[4.0, 6.0, 8.0], &[2.0, 2.0, 2.0]).unwrap();
        assert_eq!(out, vec![2.0, 3.0]);
    }

    #[test]
    fn test_averaged_ratio_alignment() {
        // numerator [10, 20] pairs with averages [(2+6)/2, (6+4)/2]
        let out = averaged_ratio("t", &[10.0, 20.0, 30.0], &[2.0, 6.0, 4.0]).unwrap();
        assert_eq!(out, vec![2.5, 4.0]);
    }

    #[test]
    fn test_averaged_ratio_requires_equal_periods() {
        assert!(averaged_ratio("t", &[10.0, 20.0, 30.0], &[2.0, 6.0]).is_err());
    }
}
