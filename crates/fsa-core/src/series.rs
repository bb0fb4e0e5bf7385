//! Aligned arithmetic over period series.
//!
//! All binary operations require both operands to cover the same periods and
//! fail with [`FsaError::Misaligned`] otherwise. Division never panics and never
//! yields an infinity: a zero denominator produces `NaN`.

use crate::error::{FsaError, Result};

/// Number of decimal places every published ratio is rounded to.
pub const RATIO_DECIMALS: usize = 3;

/// Rounds a value to [`RATIO_DECIMALS`] places. Non-finite values pass through.
///
/// Rounding works on the exact binary value with ties to even, so `0.0625`
/// becomes `0.062` and `1.0005` (stored just below the tie) becomes `1.0`.
#[must_use]
pub fn round_ratio(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.RATIO_DECIMALS$}").parse().unwrap_or(value)
}

/// Divides `numerator` by `denominator`, returning `NaN` for a zero denominator.
#[must_use]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        f64::NAN
    } else {
        numerator / denominator
    }
}

/// Combines two equally long series element by element.
pub fn zip_with(
    context: &str,
    left: &[f64],
    right: &[f64],
    f: impl Fn(f64, f64) -> f64,
) -> Result<Vec<f64>> {
    if left.len() != right.len() {
        return Err(FsaError::Misaligned {
            context: context.to_string(),
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(left.iter().zip(right).map(|(&a, &b)| f(a, b)).collect())
}

/// Element-wise sum of two series.
pub fn add(context: &str, left: &[f64], right: &[f64]) -> Result<Vec<f64>> {
    zip_with(context, left, right, |a, b| a + b)
}

/// Element-wise difference of two series.
pub fn subtract(context: &str, left: &[f64], right: &[f64]) -> Result<Vec<f64>> {
    zip_with(context, left, right, |a, b| a - b)
}

/// Element-wise sum of any number of series.
pub fn sum(context: &str, series: &[&[f64]]) -> Result<Vec<f64>> {
    let Some((first, rest)) = series.split_first() else {
        return Ok(Vec::new());
    };
    rest.iter()
        .try_fold(first.to_vec(), |acc, next| add(context, &acc, next))
}

/// Element-wise rounded ratio `numerator / denominator`.
pub fn ratio(context: &str, numerator: &[f64], denominator: &[f64]) -> Result<Vec<f64>> {
    zip_with(context, numerator, denominator, |a, b| {
        round_ratio(safe_div(a, b))
    })
}

/// Drops the last (oldest) period, which has no prior period to compare with.
#[must_use]
pub fn drop_tail(series: &[f64]) -> &[f64] {
    series.split_last().map_or(series, |(_, head)| head)
}

/// Averages each period with the one before it: `(x[i] + x[i + 1]) / 2`.
///
/// The result is one period shorter than the input.
#[must_use]
pub fn adjacent_average(series: &[f64]) -> Vec<f64> {
    series.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_ratio() {
        assert_eq!(round_ratio(2.0), 2.0);
        assert_eq!(round_ratio(1.0 / 3.0), 0.333);
        assert_eq!(round_ratio(2.0 / 3.0), 0.667);
        assert!(round_ratio(f64::NAN).is_nan());
    }

    #[test]
    fn test_round_ratio_ties_to_even() {
        assert_eq!(round_ratio(1.0 / 16.0), 0.062);
        assert_eq!(round_ratio(5.0 / 16.0), 0.312);
        assert_eq!(round_ratio(2.0625), 2.062);
        assert_eq!(round_ratio(1.0005), 1.0);
        assert_eq!(round_ratio(-1.0 / 16.0), -0.062);

        let out = ratio("test", &[1.0, 5.0], &[16.0, 16.0]).unwrap();
        assert_eq!(out, vec![0.062, 0.312]);
    }

    #[test]
    fn test_safe_div_zero_is_nan() {
        assert!(safe_div(1.0, 0.0).is_nan());
        assert!(safe_div(0.0, 0.0).is_nan());
        assert!(safe_div(1.0, -0.0).is_nan());
        assert_eq!(safe_div(3.0, 2.0), 1.5);
    }

    #[test]
    fn test_ratio_rejects_misaligned() {
        let err = ratio("test", &[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, FsaError::Misaligned { left: 2, right: 1, .. }));
    }

    #[test]
    fn test_ratio_rounds_and_propagates_nan() {
        let out = ratio("test", &[1.0, 5.0, 2.0], &[3.0, 0.0, 4.0]).unwrap();
        assert_eq!(out[0], 0.333);
        assert!(out[1].is_nan());
        assert_eq!(out[2], 0.5);
    }

    #[test]
    fn test_sum_many() {
        let out = sum("test", &[&[1.0, 2.0], &[10.0, 20.0], &[100.0, 200.0]]).unwrap();
        assert_eq!(out, vec![111.0, 222.0]);
        assert!(sum("test", &[]).unwrap().is_empty());
        assert!(sum("test", &[&[1.0], &[1.0, 2.0]]).is_err());
    }

    #[test]
    fn test_drop_tail_and_average() {
        let s = [6.0, 4.0, 2.0, 0.0];
        assert_eq!(drop_tail(&s), &[6.0, 4.0, 2.0]);
        assert_eq!(adjacent_average(&s), vec![5.0, 3.0, 1.0]);
        assert!(drop_tail(&[]).is_empty());
        assert!(adjacent_average(&[1.0]).is_empty());
    }
}
