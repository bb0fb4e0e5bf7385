#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fsa/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Report building for ratio groups.
//!
//! - [`ReportWindow`] - Year labels of the table columns
//! - [`WideTable`] - Header and company rows per ratio
//! - [`ChartLayout`] - One subplot per ratio for an external renderer
//! - [`write_section_files`] - CSV and JSON output per group

/// Chart layouts.
pub mod chart;
/// CSV and JSON export.
pub mod export;
/// Wide tables.
pub mod table;
/// Report year window.
pub mod window;

pub use chart::{ChartLayout, Line, Subplot};
pub use export::{
    ExportError, ExportedFiles, table_to_csv_string, write_json, write_section_files,
    write_table_csv,
};
pub use table::{Cell, RatioBlock, TableRow, WideTable};
pub use window::{DEFAULT_YEARS, ReportWindow};
