//! End-to-end analysis runs.

use std::fmt;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use fsa_core::{FsaError, Result, StatementProvider, StatementStore};
use fsa_ratios::{RatioGroup, RatioGroupKind};
use fsa_report::{ChartLayout, ExportedFiles, WideTable, write_section_files};
use polars::prelude::{Column, CsvWriter, DataFrame, SerWriter};
use tracing::{debug, info, warn};

use crate::config::AnalysisConfig;

/// Runs the whole pipeline against one statement provider.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use fsa::{Analysis, AnalysisConfig, InMemoryProvider};
///
/// let analysis = Analysis::new(Arc::new(InMemoryProvider::new()), AnalysisConfig::default());
/// let report = analysis.run().await?;
/// for section in report.sections() {
///     println!("{}\n{}", section.title(), section.table);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Analysis {
    provider: Arc<dyn StatementProvider>,
    config: AnalysisConfig,
}

impl Analysis {
    /// Creates a run over `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn StatementProvider>, config: AnalysisConfig) -> Self {
        Self { provider, config }
    }

    /// Creates a run over the SinoTrade provider built from `config.fetch`.
    #[cfg(feature = "sinotrade")]
    pub fn sinotrade(config: AnalysisConfig) -> Result<Self> {
        let provider = fsa_sinotrade::SinoTradeProvider::with_config(config.fetch.clone())?;
        Ok(Self::new(Arc::new(provider), config))
    }

    /// The run's settings.
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Fetches every statement, then computes and lays out all five groups.
    ///
    /// Unavailable statements become fallback rows. A parse failure or a
    /// statement missing a required line item aborts the run.
    pub async fn run(&self) -> Result<AnalysisReport> {
        let generated_at = Utc::now();
        let window = &self.config.window;

        if window.is_stale(generated_at.date_naive()) {
            warn!(
                latest = ?window.latest(),
                today = %generated_at.date_naive(),
                "Report year labels look stale; newer fiscal years are likely published"
            );
        }

        let store =
            StatementStore::collect(self.provider.as_ref(), &self.config.companies).await?;

        let mut sections = Vec::with_capacity(RatioGroupKind::ALL.len());
        for group in RatioGroup::compute_all(&store)? {
            let table = WideTable::for_group(&group, window)?;
            let chart = ChartLayout::from_table(group.kind().title(), &table);
            sections.push(ReportSection {
                kind: group.kind(),
                group,
                table,
                chart,
            });
        }

        info!(
            provider = self.provider.name(),
            companies = store.len(),
            sections = sections.len(),
            "Analysis complete"
        );

        Ok(AnalysisReport {
            generated_at,
            store,
            sections,
        })
    }
}

/// One ratio group with its table and chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    /// The group's category.
    pub kind: RatioGroupKind,
    /// Computed and fallback entries per company.
    pub group: RatioGroup,
    /// The wide table.
    pub table: WideTable,
    /// The chart layout.
    pub chart: ChartLayout,
}

impl ReportSection {
    /// Section title, also the base name of exported files.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Writes the table and chart layout into `dir`.
    pub fn write_files(&self, dir: &Path) -> Result<ExportedFiles> {
        Ok(write_section_files(dir, self.title(), &self.table, &self.chart)?)
    }
}

/// Outcome of an analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    generated_at: DateTime<Utc>,
    store: StatementStore,
    sections: Vec<ReportSection>,
}

impl AnalysisReport {
    /// When the run started.
    #[must_use]
    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// The fetched statements.
    #[must_use]
    pub const fn store(&self) -> &StatementStore {
        &self.store
    }

    /// Sections in report order.
    #[must_use]
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    /// Returns the section of one group.
    #[must_use]
    pub fn section(&self, kind: RatioGroupKind) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// Writes every section into `dir`.
    pub fn write_files(&self, dir: &Path) -> Result<Vec<ExportedFiles>> {
        self.sections
            .iter()
            .map(|section| section.write_files(dir))
            .collect()
    }

    /// All sections as one tidy frame with columns
    /// `ratio`, `company`, `year`, `value`, `group`.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let mut combined: Option<DataFrame> = None;
        for section in &self.sections {
            let mut frame = section.table.to_frame()?;
            let group = vec![section.kind.slug(); frame.height()];
            frame
                .with_column(Column::new("group".into(), group))
                .map_err(|e| FsaError::Other(e.to_string()))?;

            combined = Some(match combined {
                Some(mut acc) => {
                    acc.vstack_mut(&frame)
                        .map_err(|e| FsaError::Other(e.to_string()))?;
                    acc
                }
                None => frame,
            });
        }
        Ok(combined.unwrap_or_default())
    }

    /// Writes [`to_frame`](Self::to_frame) as CSV with a header line.
    pub fn write_tidy_csv(&self, path: &Path) -> Result<()> {
        let mut frame = self.to_frame()?;
        let mut file = File::create(path).map_err(|e| FsaError::Export(e.to_string()))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut frame)
            .map_err(|e| FsaError::Export(e.to_string()))?;
        debug!(path = %path.display(), rows = frame.height(), "Wrote tidy ratios");
        Ok(())
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "{}", section.title())?;
            write!(f, "{}", section.table)?;
        }
        Ok(())
    }
}
