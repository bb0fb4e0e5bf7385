//! Named ratio series of one company.

use serde::{Deserialize, Serialize};

/// Rounded ratio values, one per usable period, most recent first.
pub type RatioSeries = Vec<f64>;

/// Ratio name → series, in catalogue order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    ratios: Vec<(String, RatioSeries)>,
}

impl RatioSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { ratios: Vec::new() }
    }

    /// Adds a ratio, replacing an existing one of the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, series: RatioSeries) {
        let name = name.into();
        match self.ratios.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = series,
            None => self.ratios.push((name, series)),
        }
    }

    /// Returns the series of a ratio.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.ratios
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, series)| series.as_slice())
    }

    /// Ratio names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ratios.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates over `(name, series)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.ratios
            .iter()
            .map(|(name, series)| (name.as_str(), series.as_slice()))
    }

    /// Number of ratios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Returns true if the set holds no ratio.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, RatioSeries)> for RatioSet {
    fn from_iter<I: IntoIterator<Item = (S, RatioSeries)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, series) in iter {
            set.insert(name, series);
        }
        set
    }
}
