//! The fixed window of fiscal years a report is labelled with.

use chrono::{Datelike, NaiveDate};
use fsa_core::{FsaError, Result};
use serde::{Deserialize, Serialize};

/// Year labels of the published report, most recent first.
///
/// These are literals: the source pages do not state which fiscal year each
/// column belongs to in a form the parser reads.
pub const DEFAULT_YEARS: [i32; 5] = [2019, 2018, 2017, 2016, 2015];

/// Descending run of fiscal-year labels used as table columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    years: Vec<i32>,
}

impl Default for ReportWindow {
    fn default() -> Self {
        Self {
            years: DEFAULT_YEARS.to_vec(),
        }
    }
}

impl ReportWindow {
    /// Creates a window of `width` consecutive years ending at `latest`.
    pub fn ending(latest: i32, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(FsaError::InvalidParameter(
                "report window must span at least one year".to_string(),
            ));
        }
        let years = (0..width).map(|offset| latest - offset as i32).collect();
        Ok(Self { years })
    }

    /// Year labels, most recent first.
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Year labels, oldest first.
    #[must_use]
    pub fn years_ascending(&self) -> Vec<i32> {
        self.years.iter().rev().copied().collect()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.years.len()
    }

    /// Most recent year label.
    #[must_use]
    pub fn latest(&self) -> Option<i32> {
        self.years.first().copied()
    }

    /// Returns true when the latest label trails `today` by more than one year,
    /// i.e. the source has very likely published a newer fiscal year.
    #[must_use]
    pub fn is_stale(&self, today: NaiveDate) -> bool {
        self.latest().is_some_and(|latest| latest < today.year() - 1)
    }
}
