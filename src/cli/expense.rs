//! Expense entry commands
//!
//! Three ways into the same submission flow: the interactive form, direct
//! flags, and receipt upload with OCR extraction feeding the form.

use clap::Subcommand;
use std::path::PathBuf;

use crate::api::ApiClient;
use crate::display::notify;
use crate::error::{EerisError, EerisResult};
use crate::ingest::ingest_extraction;
use crate::ledger::can_submit;
use crate::models::{amount, catalog, ExpenseDraft, LineItem};
use crate::session::Session;
use crate::tui::run_expense_form;

/// Expense entry subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Open the interactive expense entry form
    Form,

    /// Submit an expense directly from flags
    Submit {
        /// Expense category (fixed set: Groceries, Gas, Furniture, Transportation)
        #[arg(short, long)]
        category: String,

        /// Subcategory; defaults to the category's first option
        #[arg(short, long)]
        subcategory: Option<String>,

        /// Store name
        #[arg(long)]
        store: String,

        /// Line items as NAME=AMOUNT (repeatable)
        #[arg(short, long = "item", value_name = "NAME=AMOUNT")]
        items: Vec<String>,
    },

    /// Upload a receipt image for OCR extraction
    Upload {
        /// Path to the receipt image
        file: PathBuf,

        /// Open the extracted draft in the entry form for review
        #[arg(long, conflicts_with = "submit")]
        review: bool,

        /// Submit the extracted draft as-is (when it passes validation)
        #[arg(long)]
        submit: bool,
    },
}

/// Handle expense subcommands
pub async fn handle_expense_command(
    api: &ApiClient,
    session: &Session,
    cmd: ExpenseCommands,
) -> EerisResult<()> {
    match cmd {
        ExpenseCommands::Form => handle_form(api, session, ExpenseDraft::new()).await,
        ExpenseCommands::Submit {
            category,
            subcategory,
            store,
            items,
        } => handle_submit(api, session, category, subcategory, store, items).await,
        ExpenseCommands::Upload {
            file,
            review,
            submit,
        } => handle_upload(api, session, file, review, submit).await,
    }
}

/// Run the interactive form, then submit whatever it produced
async fn handle_form(api: &ApiClient, session: &Session, draft: ExpenseDraft) -> EerisResult<()> {
    // Fail before opening the form when no session exists
    session.require_token()?;

    let Some(draft) = run_expense_form(draft)? else {
        notify::info("Expense entry canceled.");
        return Ok(());
    };

    submit_draft(api, session, &draft).await
}

async fn handle_submit(
    api: &ApiClient,
    session: &Session,
    category: String,
    subcategory: Option<String>,
    store: String,
    item_specs: Vec<String>,
) -> EerisResult<()> {
    let subcategories = catalog::subcategories(&category).ok_or_else(|| {
        EerisError::Validation(format!(
            "Unknown category '{}'; choose one of: {}",
            category,
            catalog::category_names().join(", ")
        ))
    })?;

    let mut draft = ExpenseDraft::new();
    draft.set_category(&category);

    if let Some(subcategory) = subcategory {
        if !catalog::is_valid_pair(&draft.category, &subcategory) {
            return Err(EerisError::Validation(format!(
                "Subcategory '{}' does not belong to {}; choose one of: {}",
                subcategory,
                draft.category,
                subcategories.join(", ")
            )));
        }
        draft.set_subcategory(&subcategory);
    }

    if store.trim().is_empty() {
        return Err(EerisError::Validation("Store name is required".to_string()));
    }
    draft.store = store.trim().to_string();

    draft.items = item_specs
        .iter()
        .map(|spec| parse_item_spec(spec))
        .collect::<EerisResult<Vec<_>>>()?;

    submit_draft(api, session, &draft).await
}

async fn handle_upload(
    api: &ApiClient,
    session: &Session,
    file: PathBuf,
    review: bool,
    submit: bool,
) -> EerisResult<()> {
    let extraction = api.upload_receipt(session, &file).await?;
    notify::success("Receipt uploaded; extraction complete.");

    let draft = ingest_extraction(&extraction);

    if review {
        return handle_form(api, session, draft).await;
    }

    print_draft(&draft);

    if submit {
        submit_draft(api, session, &draft).await
    } else {
        notify::info("Re-run with --review to correct the draft, or --submit to send it as-is.");
        Ok(())
    }
}

/// Gate-check and submit a finished draft
async fn submit_draft(api: &ApiClient, session: &Session, draft: &ExpenseDraft) -> EerisResult<()> {
    if !can_submit(draft.items.as_slice()) {
        return Err(EerisError::Validation(
            "Nothing to submit: add at least one named item with a positive total".to_string(),
        ));
    }

    let message = api.submit_manual_receipt(session, draft).await?;
    notify::success(&message);
    Ok(())
}

/// Parse a NAME=AMOUNT item flag
fn parse_item_spec(spec: &str) -> EerisResult<LineItem> {
    let (name, raw_amount) = spec.split_once('=').ok_or_else(|| {
        EerisError::Validation(format!("Invalid item '{}'; expected NAME=AMOUNT", spec))
    })?;

    if name.trim().is_empty() {
        return Err(EerisError::Validation(format!(
            "Invalid item '{}'; the name is empty",
            spec
        )));
    }
    if amount::parse(raw_amount).is_none() {
        return Err(EerisError::Validation(format!(
            "Invalid item '{}'; '{}' is not an amount",
            spec, raw_amount
        )));
    }

    Ok(LineItem::new(name.trim(), amount::reformat(raw_amount)))
}

fn print_draft(draft: &ExpenseDraft) {
    println!("Extracted draft:");
    println!("  Store:       {}", draft.store);
    println!("  Category:    {}", draft.category);
    println!("  Subcategory: {}", draft.subcategory);
    println!("  Items:");
    for item in &draft.items {
        println!("    {}: {}", item.name, item.amount);
    }
    println!("  Total: {}", amount::format(draft.total()));
}
