//! Expense history export
//!
//! Turns a fetched expense history into a downloadable document: a tabular
//! listing followed by a category-spending bar chart, assembled as a PDF
//! (or a plain CSV of the same table).

pub mod aggregate;
pub mod chart;
pub mod csv;
pub mod document;
pub mod pipeline;

pub use chart::ChartImage;
pub use pipeline::{ChartRenderer, ExportFormat, ExportOutcome, ExportPipeline, HistoryTable};
