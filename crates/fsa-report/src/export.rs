//! File export of report sections.
//!
//! Each group is written as `{title}.csv` holding the wide table verbatim (no
//! header line, no index column) and `{title}.chart.json` holding its chart
//! layout.

use fsa_core::FsaError;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::chart::ChartLayout;
use crate::table::WideTable;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ExportError> for FsaError {
    fn from(err: ExportError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Files written for one report section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFiles {
    /// The wide table as CSV.
    pub table: PathBuf,
    /// The chart layout as JSON.
    pub chart: PathBuf,
}

/// Writes the rows of `table` as CSV records.
///
/// Missing values become empty fields.
pub fn write_table_csv<W: Write>(table: &WideTable, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);
    for row in table.rows() {
        wtr.write_record(row.cells().iter().map(|cell| cell.to_field()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Renders `table` as a CSV string.
pub fn table_to_csv_string(table: &WideTable) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_table_csv(table, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes `value` as pretty-printed JSON.
pub fn write_json<T: Serialize, W: Write>(value: &T, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}

/// Writes a section's table and chart layout into `dir`, named after `title`.
///
/// The directory is created if needed; existing files are overwritten.
pub fn write_section_files(
    dir: &Path,
    title: &str,
    table: &WideTable,
    chart: &ChartLayout,
) -> Result<ExportedFiles, ExportError> {
    fs::create_dir_all(dir)?;

    let table_path = dir.join(format!("{title}.csv"));
    write_table_csv(table, File::create(&table_path)?)?;

    let chart_path = dir.join(format!("{title}.chart.json"));
    let mut file = File::create(&chart_path)?;
    write_json(chart, &mut file)?;
    file.flush()?;

    debug!(title, table = %table_path.display(), chart = %chart_path.display(), "Exported section");

    Ok(ExportedFiles {
        table: table_path,
        chart: chart_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::ReportWindow;
    use fsa_core::{CompanyId, RETRIEVAL_FAILED, Statement};
    use fsa_ratios::{RatioEntry, RatioGroup, RatioGroupKind, RatioSet};

    fn table() -> WideTable {
        let computed = RatioEntry::Computed(
            [("ROA", vec![0.03; 5]), ("ROE", vec![0.05; 5])]
                .into_iter()
                .collect::<RatioSet>(),
        );
        let fallback = RatioEntry::Unavailable {
            financial_position: Statement::unavailable(RETRIEVAL_FAILED),
            income_statement: Statement::unavailable(RETRIEVAL_FAILED),
        };
        let group = RatioGroup::from_entries(
            RatioGroupKind::Returns,
            vec![(CompanyId::new(1101), computed), (CompanyId::new(1102), fallback)],
        );
        WideTable::for_group(&group, &ReportWindow::default()).unwrap()
    }

    #[test]
    fn test_csv_is_verbatim() {
        let csv = table_to_csv_string(&table()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ROA,2019,2018,2017,2016,2015",
                "1101,0.03,0.03,0.03,0.03,0.03",
                "1102,,,,,",
                "ROE,2019,2018,2017,2016,2015",
                "1101,0.05,0.05,0.05,0.05,0.05",
                "1102,,,,,",
            ]
        );
    }

    #[test]
    fn test_write_section_files() {
        let dir = tempfile::tempdir().unwrap();
        let table = table();
        let chart = ChartLayout::from_table("投資報酬率", &table);

        let files = write_section_files(dir.path(), "投資報酬率", &table, &chart).unwrap();
        assert_eq!(files.table, dir.path().join("投資報酬率.csv"));
        assert_eq!(files.chart, dir.path().join("投資報酬率.chart.json"));

        let csv = fs::read_to_string(&files.table).unwrap();
        assert!(csv.starts_with("ROA,2019"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&files.chart).unwrap()).unwrap();
        assert_eq!(json["title"], "投資報酬率");
        assert_eq!(json["subplots"].as_array().unwrap().len(), 2);
        assert!(json["subplots"][0]["lines"][1]["values"][0].is_null());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("ratios");
        let table = table();
        let chart = ChartLayout::from_table("投資報酬率", &table);

        write_section_files(&nested, "投資報酬率", &table, &chart).unwrap();
        assert!(nested.join("投資報酬率.csv").exists());
    }

    #[test]
    fn test_export_error_into_fsa_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: FsaError = ExportError::from(io).into();
        assert!(matches!(err, FsaError::Export(msg) if msg.contains("denied")));
    }
}
