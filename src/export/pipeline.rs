//! The audit export pipeline
//!
//! One linear run per invocation: select columns for the caller's role,
//! aggregate category totals, render the chart, and assemble the document.
//! Runs are serialized by an in-flight guard; a second invocation while one
//! is running is refused instead of racing on the rendering surface.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::error::{EerisError, EerisResult};
use crate::models::{amount, HistoryEntry};
use crate::session::Role;

use super::aggregate;
use super::chart::{self, ChartImage};
use super::{csv, document};

/// Renders the category chart for a history
///
/// The single implementation draws with plotters; tests substitute a stub
/// so pipeline behavior can be exercised without a font stack.
pub trait ChartRenderer {
    fn render(&self, totals: &std::collections::BTreeMap<String, f64>) -> EerisResult<ChartImage>;
}

/// Plotters-backed renderer on a fixed off-screen surface
#[derive(Debug, Clone)]
pub struct BitmapChartRenderer {
    width: u32,
    height: u32,
}

impl BitmapChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl ChartRenderer for BitmapChartRenderer {
    fn render(&self, totals: &std::collections::BTreeMap<String, f64>) -> EerisResult<ChartImage> {
        chart::render_category_chart(totals, self.width, self.height)
    }
}

/// The role-selected history table
#[derive(Debug, Clone)]
pub struct HistoryTable {
    /// Column headers, in order
    pub columns: Vec<&'static str>,
    /// One row of cells per history entry
    pub rows: Vec<Vec<String>>,
}

impl HistoryTable {
    /// Build the table for a role
    ///
    /// Supervisors and admins get a "User" column; employees do not.
    pub fn build(entries: &[HistoryEntry], role: Role, currency_symbol: &str) -> Self {
        let elevated = role.is_elevated();

        let columns: Vec<&'static str> = if elevated {
            vec!["#", "User", "Store", "Category", "Amount", "Status", "Uploaded"]
        } else {
            vec!["#", "Store", "Category", "Amount", "Status", "Uploaded"]
        };

        let rows = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut row = vec![(i + 1).to_string()];
                if elevated {
                    row.push(
                        entry
                            .user_name
                            .clone()
                            .unwrap_or_else(|| "Unknown User".to_string()),
                    );
                }
                row.push(entry.store().to_string());
                row.push(entry.category_name().to_string());
                row.push(format!("{}{}", currency_symbol, amount::format(entry.amount)));
                row.push(entry.status.to_string());
                row.push(entry.uploaded_at.clone());
                row
            })
            .collect();

        Self { columns, rows }
    }
}

/// What a pipeline run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The history was empty; nothing was written. Informational, not an
    /// error.
    Empty,
    /// A document was written
    Written { path: PathBuf, entries: usize },
}

/// Output format for the assembled document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Csv,
}

/// Orchestrates one history export end to end
pub struct ExportPipeline<R: ChartRenderer> {
    renderer: R,
    currency_symbol: String,
    in_flight: AtomicBool,
}

impl ExportPipeline<BitmapChartRenderer> {
    /// Create a pipeline drawing on a fixed off-screen surface
    pub fn new(chart_width: u32, chart_height: u32, currency_symbol: impl Into<String>) -> Self {
        Self::with_renderer(
            BitmapChartRenderer::new(chart_width, chart_height),
            currency_symbol,
        )
    }
}

impl<R: ChartRenderer> ExportPipeline<R> {
    /// Create a pipeline with a specific renderer
    pub fn with_renderer(renderer: R, currency_symbol: impl Into<String>) -> Self {
        Self {
            renderer,
            currency_symbol: currency_symbol.into(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Run the pipeline over an already-fetched, role-filtered history
    ///
    /// An empty history aborts early with `ExportOutcome::Empty` and writes
    /// nothing. Stage failures surface as their own error variants so chart
    /// rendering and chart embedding are reported distinctly.
    pub fn run(
        &self,
        entries: &[HistoryEntry],
        role: Role,
        format: ExportFormat,
        output: &Path,
    ) -> EerisResult<ExportOutcome> {
        if entries.is_empty() {
            return Ok(ExportOutcome::Empty);
        }

        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        let table = HistoryTable::build(entries, role, &self.currency_symbol);

        match format {
            ExportFormat::Csv => {
                csv::write_history_csv(&table, output)?;
            }
            ExportFormat::Pdf => {
                let totals = aggregate::category_totals(entries);
                info!(categories = totals.len(), "rendering category chart");
                let chart = self.renderer.render(&totals)?;
                document::write_history_pdf(&table, &chart, output)?;
            }
        }

        info!(entries = entries.len(), path = %output.display(), "export written");
        Ok(ExportOutcome::Written {
            path: output.to_path_buf(),
            entries: entries.len(),
        })
    }
}

/// Clears the in-flight flag when a run ends, on success or failure
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> EerisResult<Self> {
        if flag
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(EerisError::ExportInProgress);
        }
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReceiptStatus;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    /// Renderer producing a tiny fixed bitmap, no font stack required
    struct StubRenderer;

    impl ChartRenderer for StubRenderer {
        fn render(&self, _totals: &BTreeMap<String, f64>) -> EerisResult<ChartImage> {
            Ok(ChartImage {
                width: 2,
                height: 2,
                pixels: vec![255; 2 * 2 * 3],
            })
        }
    }

    /// Renderer that always fails, for failure-path tests
    struct FailingRenderer;

    impl ChartRenderer for FailingRenderer {
        fn render(&self, _totals: &BTreeMap<String, f64>) -> EerisResult<ChartImage> {
            Err(EerisError::ChartRender("stub failure".to_string()))
        }
    }

    fn entry(user: Option<&str>, category: &str, amount: f64) -> HistoryEntry {
        HistoryEntry {
            user_name: user.map(str::to_string),
            receipt_id: Some(1),
            store_name: Some("Aldi".to_string()),
            category: Some(category.to_string()),
            amount,
            status: ReceiptStatus::Approved,
            uploaded_at: "2025-04-01 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_empty_history_aborts_without_document() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out.pdf");
        let pipeline = ExportPipeline::with_renderer(StubRenderer, "$");

        let outcome = pipeline
            .run(&[], Role::Employee, ExportFormat::Pdf, &output)
            .unwrap();

        assert_eq!(outcome, ExportOutcome::Empty);
        assert!(!output.exists());
    }

    #[test]
    fn test_elevated_roles_get_user_column() {
        let entries = vec![entry(Some("Jordan"), "Groceries", 10.0)];

        for role in [Role::Supervisor, Role::Admin] {
            let table = HistoryTable::build(&entries, role, "$");
            assert_eq!(
                table.columns,
                vec!["#", "User", "Store", "Category", "Amount", "Status", "Uploaded"]
            );
            assert_eq!(table.rows[0][1], "Jordan");
        }

        let table = HistoryTable::build(&entries, Role::Employee, "$");
        assert_eq!(
            table.columns,
            vec!["#", "Store", "Category", "Amount", "Status", "Uploaded"]
        );
        assert_eq!(table.rows[0][1], "Aldi");
    }

    #[test]
    fn test_amounts_formatted_as_currency() {
        let entries = vec![entry(None, "Gas", 7.0)];
        let table = HistoryTable::build(&entries, Role::Employee, "$");
        assert_eq!(table.rows[0][3], "$7.00");
    }

    #[test]
    fn test_missing_user_name_in_elevated_view() {
        let entries = vec![entry(None, "Gas", 7.0)];
        let table = HistoryTable::build(&entries, Role::Admin, "$");
        assert_eq!(table.rows[0][1], "Unknown User");
    }

    #[test]
    fn test_pdf_written_with_stub_renderer() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("history.pdf");
        let pipeline = ExportPipeline::with_renderer(StubRenderer, "$");
        let entries = vec![
            entry(Some("Jordan"), "Groceries", 10.0),
            entry(Some("Sam"), "Gas", 20.0),
        ];

        let outcome = pipeline
            .run(&entries, Role::Admin, ExportFormat::Pdf, &output)
            .unwrap();

        assert_eq!(
            outcome,
            ExportOutcome::Written {
                path: output.clone(),
                entries: 2
            }
        );
        assert!(output.exists());
        assert!(std::fs::metadata(&output).unwrap().len() > 0);
    }

    #[test]
    fn test_csv_written_without_chart() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("history.csv");
        // CSV runs never touch the renderer
        let pipeline = ExportPipeline::with_renderer(FailingRenderer, "$");
        let entries = vec![entry(None, "Gas", 20.0)];

        let outcome = pipeline
            .run(&entries, Role::Employee, ExportFormat::Csv, &output)
            .unwrap();

        assert!(matches!(outcome, ExportOutcome::Written { .. }));
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("#,Store,Category,Amount,Status,Uploaded"));
        assert!(content.contains("$20.00"));
    }

    #[test]
    fn test_render_failure_surfaces_and_releases_guard() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("history.pdf");
        let pipeline = ExportPipeline::with_renderer(FailingRenderer, "$");
        let entries = vec![entry(None, "Gas", 20.0)];

        let err = pipeline
            .run(&entries, Role::Employee, ExportFormat::Pdf, &output)
            .unwrap_err();
        assert!(matches!(err, EerisError::ChartRender(_)));
        assert!(!output.exists());

        // The guard is released, so a later run is not refused
        let err = pipeline
            .run(&entries, Role::Employee, ExportFormat::Pdf, &output)
            .unwrap_err();
        assert!(matches!(err, EerisError::ChartRender(_)));
    }
}
