//! Expense history commands
//!
//! `show` renders the role-selected table on the terminal; `export` runs
//! the full pipeline and writes a PDF (or CSV) document.

use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::api::ApiClient;
use crate::config::Settings;
use crate::display::{history, notify};
use crate::error::EerisResult;
use crate::export::{ExportFormat, ExportOutcome, ExportPipeline, HistoryTable};
use crate::session::{Role, Session};

/// Output format options for `history export`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HistoryExportFormat {
    /// Tabular history plus the category chart
    Pdf,
    /// The table alone
    Csv,
}

/// History subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// Show the expense history table
    Show,

    /// Export the history as a document
    Export {
        /// Output file path
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "pdf")]
        format: HistoryExportFormat,
    },
}

/// Handle history subcommands
pub async fn handle_history_command(
    api: &ApiClient,
    session: &Session,
    settings: &Settings,
    cmd: HistoryCommands,
) -> EerisResult<()> {
    let role = session.current_role().unwrap_or(Role::Employee);

    match cmd {
        HistoryCommands::Show => {
            let entries = api.expense_history(session).await?;
            if entries.is_empty() {
                notify::info("No expenses available.");
                return Ok(());
            }

            let table = HistoryTable::build(&entries, role, &settings.currency_symbol);
            println!("{}", history::format_history(&table));
            Ok(())
        }
        HistoryCommands::Export { out, format } => {
            let entries = api.expense_history(session).await?;

            let format = match format {
                HistoryExportFormat::Pdf => ExportFormat::Pdf,
                HistoryExportFormat::Csv => ExportFormat::Csv,
            };
            let output = out.unwrap_or_else(|| default_output(settings, format));

            let pipeline = ExportPipeline::new(
                settings.chart_width,
                settings.chart_height,
                settings.currency_symbol.clone(),
            );

            match pipeline.run(&entries, role, format, &output)? {
                ExportOutcome::Empty => {
                    notify::info("No expenses available.");
                }
                ExportOutcome::Written { path, entries } => {
                    notify::success(&format!(
                        "Exported {} entries to {}",
                        entries,
                        path.display()
                    ));
                }
            }
            Ok(())
        }
    }
}

/// The default output path for a format, from the configured filename
fn default_output(settings: &Settings, format: ExportFormat) -> PathBuf {
    let path = PathBuf::from(&settings.export_filename);
    match format {
        ExportFormat::Pdf => path,
        ExportFormat::Csv => path.with_extension("csv"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_follows_format() {
        let settings = Settings::default();
        assert_eq!(
            default_output(&settings, ExportFormat::Pdf),
            PathBuf::from("expense_history.pdf")
        );
        assert_eq!(
            default_output(&settings, ExportFormat::Csv),
            PathBuf::from("expense_history.csv")
        );
    }
}
