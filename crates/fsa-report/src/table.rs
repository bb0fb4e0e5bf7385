//! Wide report tables.
//!
//! A [`WideTable`] lays a ratio group out the way the published report does:
//!
//! ```text
//! Current Ratio  2019   2018   2017   2016   2015
//! 1101           2.0    2.0    2.0    2.0    2.0
//! 1102           NaN    NaN    NaN    NaN    NaN
//! Quick Ratio    2019   2018   ...
//! ```

use fsa_core::{CompanyId, FsaError, Result};
use fsa_ratios::{RatioEntry, RatioGroup};
use polars::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::window::ReportWindow;

/// One cell of a wide table.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Ratio name in a header row.
    Ratio(String),
    /// Year label in a header row.
    Year(i32),
    /// Company id leading a value row.
    Company(CompanyId),
    /// A ratio value; `NaN` when not computable.
    Value(f64),
}

impl Cell {
    /// Text of the cell for tabular files; missing values are empty.
    #[must_use]
    pub fn to_field(&self) -> String {
        match self {
            Self::Value(value) if value.is_nan() => String::new(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ratio(name) => f.write_str(name),
            Self::Year(year) => write!(f, "{year}"),
            Self::Company(id) => write!(f, "{id}"),
            Self::Value(value) if value.is_nan() => f.write_str("NaN"),
            Self::Value(value) if value.fract() == 0.0 => write!(f, "{value:.1}"),
            Self::Value(value) => write!(f, "{value}"),
        }
    }
}

/// A row of a wide table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TableRow {
    /// Opens a ratio block: the ratio name and the window's year labels.
    Header {
        /// Ratio name.
        ratio: String,
        /// Year labels, most recent first.
        years: Vec<i32>,
    },
    /// One company's values for the ratio of the enclosing block.
    Company {
        /// Company id.
        company: CompanyId,
        /// Values aligned with the header's years.
        values: Vec<f64>,
    },
}

impl TableRow {
    /// Flattens the row into cells.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        match self {
            Self::Header { ratio, years } => std::iter::once(Cell::Ratio(ratio.clone()))
                .chain(years.iter().copied().map(Cell::Year))
                .collect(),
            Self::Company { company, values } => std::iter::once(Cell::Company(*company))
                .chain(values.iter().copied().map(Cell::Value))
                .collect(),
        }
    }
}

/// One ratio's block within a table: its name, years and company rows.
#[derive(Clone, Debug, PartialEq)]
pub struct RatioBlock<'a> {
    /// Ratio name.
    pub ratio: &'a str,
    /// Year labels, most recent first.
    pub years: &'a [i32],
    /// `(company, values)` in table order.
    pub companies: Vec<(CompanyId, &'a [f64])>,
}

/// A ratio group reshaped into header and company rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct WideTable {
    rows: Vec<TableRow>,
}

impl WideTable {
    /// Builds the table of a group for the given ratios, in the given order.
    ///
    /// For each ratio a header row is followed by one row per company in group
    /// order. Companies with a fallback entry get `NaN` for every year. A
    /// computed series must span exactly the window's width.
    pub fn build(group: &RatioGroup, ratio_names: &[&str], window: &ReportWindow) -> Result<Self> {
        let width = window.width();
        let mut rows = Vec::with_capacity(ratio_names.len() * (group.len() + 1));

        for &ratio in ratio_names {
            rows.push(TableRow::Header {
                ratio: ratio.to_string(),
                years: window.years().to_vec(),
            });

            for (company, entry) in group.iter() {
                let values = match entry {
                    RatioEntry::Computed(set) => {
                        let series = set.get(ratio).ok_or_else(|| {
                            FsaError::InvalidParameter(format!(
                                "ratio {ratio:?} is not part of the {} group",
                                group.kind()
                            ))
                        })?;
                        if series.len() != width {
                            return Err(FsaError::Misaligned {
                                context: format!("{ratio} for {company} against report window"),
                                left: series.len(),
                                right: width,
                            });
                        }
                        series.to_vec()
                    }
                    RatioEntry::Unavailable { .. } => vec![f64::NAN; width],
                };
                rows.push(TableRow::Company { company, values });
            }
        }

        Ok(Self { rows })
    }

    /// Builds the table of a group with its full catalogue.
    pub fn for_group(group: &RatioGroup, window: &ReportWindow) -> Result<Self> {
        Self::build(group, group.ratio_names(), window)
    }

    /// Rows in table order.
    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of rows, headers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Splits the table into its ratio blocks.
    #[must_use]
    pub fn blocks(&self) -> Vec<RatioBlock<'_>> {
        let mut blocks: Vec<RatioBlock<'_>> = Vec::new();
        for row in &self.rows {
            match row {
                TableRow::Header { ratio, years } => blocks.push(RatioBlock {
                    ratio,
                    years,
                    companies: Vec::new(),
                }),
                TableRow::Company { company, values } => {
                    if let Some(block) = blocks.last_mut() {
                        block.companies.push((*company, values));
                    }
                }
            }
        }
        blocks
    }

    /// Converts the company rows into a tidy frame with columns
    /// `ratio`, `company`, `year`, `value`.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let mut ratios = Vec::new();
        let mut companies = Vec::new();
        let mut years = Vec::new();
        let mut values = Vec::new();

        for block in self.blocks() {
            for (company, series) in &block.companies {
                for (&year, &value) in block.years.iter().zip(series.iter()) {
                    ratios.push(block.ratio.to_string());
                    companies.push(company.code());
                    years.push(year);
                    values.push(value);
                }
            }
        }

        DataFrame::new(vec![
            Column::new("ratio".into(), ratios),
            Column::new("company".into(), companies),
            Column::new("year".into(), years),
            Column::new("value".into(), values),
        ])
        .map_err(|e| FsaError::Other(e.to_string()))
    }
}

impl fmt::Display for WideTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.cells().iter().map(ToString::to_string).collect())
            .collect();

        let columns = rendered.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|col| {
                rendered
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|text| text.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for row in &rendered {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(text, &width)| format!("{text:<width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
