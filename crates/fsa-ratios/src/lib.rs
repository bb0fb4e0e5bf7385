#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fsa/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Financial ratio groups.
//!
//! - [`RatioGroup`] - One group evaluated for every company of a store
//! - [`RatioGroupKind`] - The five categories and their ratio catalogues
//! - [`RatioEntry`] - Computed ratios or the fallback pair of statements
//! - [`RatioSet`] - Named ratio series of one company

/// Ratio groups across companies.
pub mod group;
/// Ratio formulas per group.
pub mod groups;
/// Line-item labels used by the formulas.
pub mod line_items;
/// Named ratio series.
pub mod set;

pub use group::{RatioEntry, RatioGroup, RatioGroupKind};
pub use set::{RatioSeries, RatioSet};
