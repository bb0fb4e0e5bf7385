//! Chart layouts for ratio groups.
//!
//! A [`ChartLayout`] describes one figure per group: a grid of line charts, one
//! subplot per ratio and one line per company. Rendering is left to an external
//! tool reading the serialized layout.

use fsa_core::series::round_ratio;
use serde::{Deserialize, Serialize};

use crate::table::{RatioBlock, WideTable};

/// Subplots per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Number of y-axis ticks per subplot.
pub const TICK_COUNT: usize = 10;

/// Figure width in inches.
pub const FIGURE_WIDTH: f64 = 20.0;

/// Figure height per grid row in inches.
pub const ROW_HEIGHT: f64 = 5.0;

/// One company's line in a subplot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Legend label (the company id).
    pub label: String,
    /// Values, oldest year first. `NaN` serializes as `null`.
    pub values: Vec<f64>,
}

/// One ratio's chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subplot {
    /// Ratio name.
    pub title: String,
    /// Year labels, oldest first.
    pub x_labels: Vec<i32>,
    /// One line per company, in table order.
    pub lines: Vec<Line>,
    /// Evenly spaced ticks from the smallest to the largest finite value.
    /// Empty when no value is finite.
    pub y_ticks: Vec<f64>,
}

impl Subplot {
    fn from_block(block: &RatioBlock<'_>) -> Self {
        let lines: Vec<Line> = block
            .companies
            .iter()
            .map(|(company, values)| Line {
                label: company.to_string(),
                values: values.iter().rev().copied().collect(),
            })
            .collect();

        let y_ticks = value_range(lines.iter().flat_map(|line| line.values.iter().copied()))
            .map(|(min, max)| ticks(min, max))
            .unwrap_or_default();

        Self {
            title: block.ratio.to_string(),
            x_labels: block.years.iter().rev().copied().collect(),
            lines,
            y_ticks,
        }
    }
}

/// Figure description of a whole ratio group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Figure title, also the base name of the rendered image.
    pub title: String,
    /// `(width, height)` in inches.
    pub figure_size: (f64, f64),
    /// `(rows, columns)` of the subplot grid.
    pub grid: (usize, usize),
    /// Subplots in ratio order, filling the grid row by row.
    pub subplots: Vec<Subplot>,
}

impl ChartLayout {
    /// Lays out one subplot per ratio block of `table`.
    #[must_use]
    pub fn from_table(title: impl Into<String>, table: &WideTable) -> Self {
        let subplots: Vec<Subplot> = table.blocks().iter().map(Subplot::from_block).collect();
        let rows = grid_rows(subplots.len());

        Self {
            title: title.into(),
            figure_size: (FIGURE_WIDTH, ROW_HEIGHT * rows as f64),
            grid: (rows, GRID_COLUMNS),
            subplots,
        }
    }

    /// Name of the image file an external renderer should produce.
    #[must_use]
    pub fn image_file_name(&self) -> String {
        format!("{}.jpg", self.title)
    }
}

fn grid_rows(subplots: usize) -> usize {
    subplots.saturating_sub(1) / GRID_COLUMNS + 1
}

fn value_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

fn ticks(min: f64, max: f64) -> Vec<f64> {
    let steps = (TICK_COUNT - 1) as f64;
    (0..TICK_COUNT)
        .map(|i| round_ratio(min + (max - min) * (i as f64 / steps)))
        .collect()
}
