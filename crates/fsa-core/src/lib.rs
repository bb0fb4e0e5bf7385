#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fsa/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for financial statement analysis.
//!
//! - [`StatementProvider`](provider::StatementProvider) - Source of published statements
//! - [`Statement`](statement::Statement) - Parsed line items or the reason they are missing
//! - [`StatementStore`](store::StatementStore) - All bundles fetched during one run
//! - [`series`] - Aligned arithmetic used by ratio formulas

/// Error types for statement operations.
pub mod error;
/// In-memory provider for tests and offline runs.
pub mod memory;
/// Provider trait for fetching statements.
pub mod provider;
/// Aligned series arithmetic.
pub mod series;
/// Statements, line items and bundles.
pub mod statement;
/// Per-run statement store.
pub mod store;
/// Identifier and enumeration types.
pub mod types;

// Re-export commonly used items at crate root
pub use error::{FsaError, Result};
pub use memory::InMemoryProvider;
pub use provider::StatementProvider;
pub use statement::{LineItemSeries, LineItems, RETRIEVAL_FAILED, Statement, StatementBundle};
pub use store::StatementStore;
pub use types::{CompanyId, StatementType};
