#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fsa/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Financial statement analysis.
//!
//! This crate re-exports the core types, the ratio groups and the report
//! builders, and provides an [`Analysis`] runner that drives them end to end.
//!
//! # Features
//!
//! - `sinotrade` - SinoTrade stock channel provider

// Core types and traits
pub use fsa_core::*;

// Ratios and reports
pub use fsa_ratios::{
    self as ratios, RatioEntry, RatioGroup, RatioGroupKind, RatioSeries, RatioSet,
};
pub use fsa_report::{ChartLayout, ExportError, ExportedFiles, ReportWindow, TableRow, WideTable};

// Providers
#[cfg(feature = "sinotrade")]
pub use fsa_sinotrade::{FetchConfig, SinoTradeProvider};

mod analysis;
pub use analysis::{Analysis, AnalysisReport, ReportSection};

mod config;
pub use config::{AnalysisConfig, COMPANY_IDS};
