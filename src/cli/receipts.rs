//! Receipt listing and review commands

use clap::Subcommand;

use crate::api::ApiClient;
use crate::config::Settings;
use crate::display::{notify, receipts};
use crate::error::{EerisError, EerisResult};
use crate::models::ReceiptStatus;
use crate::session::Session;

/// Receipt subcommands
#[derive(Subcommand, Debug)]
pub enum ReceiptCommands {
    /// List receipts visible to your role
    List,

    /// Show one receipt's line items and submitter
    Show {
        /// Receipt id
        id: i64,
    },

    /// Approve a pending receipt (supervisor)
    Approve {
        /// Receipt id
        id: i64,
    },

    /// Reject a pending receipt (supervisor)
    Reject {
        /// Receipt id
        id: i64,
    },

    /// Delete a receipt (admin)
    Delete {
        /// Receipt id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Handle receipt subcommands
pub async fn handle_receipts_command(
    api: &ApiClient,
    session: &Session,
    settings: &Settings,
    cmd: ReceiptCommands,
) -> EerisResult<()> {
    match cmd {
        ReceiptCommands::List => handle_list(api, session, settings).await,
        ReceiptCommands::Show { id } => handle_show(api, session, settings, id).await,
        ReceiptCommands::Approve { id } => {
            handle_review(api, session, id, ReceiptStatus::Approved).await
        }
        ReceiptCommands::Reject { id } => {
            handle_review(api, session, id, ReceiptStatus::Rejected).await
        }
        ReceiptCommands::Delete { id, yes } => handle_delete(api, session, id, yes).await,
    }
}

async fn handle_list(api: &ApiClient, session: &Session, settings: &Settings) -> EerisResult<()> {
    let response = api.fetch_receipts(session).await?;
    println!(
        "{}",
        receipts::format_receipts(&response.receipts, &settings.currency_symbol)
    );
    Ok(())
}

async fn handle_show(
    api: &ApiClient,
    session: &Session,
    settings: &Settings,
    id: i64,
) -> EerisResult<()> {
    let details = api.receipt_details(session, id).await?;
    print!(
        "{}",
        receipts::format_receipt_details(id, &details, &settings.currency_symbol)
    );
    Ok(())
}

async fn handle_review(
    api: &ApiClient,
    session: &Session,
    id: i64,
    status: ReceiptStatus,
) -> EerisResult<()> {
    // Mirror the backend's gate so the round trip isn't wasted
    let elevated = session
        .current_role()
        .map(|r| r.is_elevated())
        .unwrap_or(false);
    if !elevated {
        return Err(EerisError::Validation(
            "Reviewing receipts requires the supervisor or admin role".to_string(),
        ));
    }

    let message = api.update_receipt_status(session, id, status).await?;
    notify::success(&message);
    Ok(())
}

async fn handle_delete(api: &ApiClient, session: &Session, id: i64, yes: bool) -> EerisResult<()> {
    let admin = session
        .current_role()
        .map(|r| r.is_admin())
        .unwrap_or(false);
    if !admin {
        return Err(EerisError::Validation(
            "Deleting receipts requires the admin role".to_string(),
        ));
    }

    if !yes
        && !notify::confirm(&format!(
            "Are you sure you want to delete receipt #{}?",
            id
        ))
    {
        notify::info("Delete canceled.");
        return Ok(());
    }

    let message = api.delete_receipt(session, id).await?;
    notify::success(&message);
    Ok(())
}
