//! Receipt ingestion adapter
//!
//! Normalizes an OCR extraction result into an expense draft the entry form
//! can edit. The adapter never fails: extraction mistakes are for the user
//! to correct in the form, not reasons to block the flow.

use crate::api::types::ExtractionResponse;
use crate::models::{amount, catalog, ExpenseDraft, LineItem};

/// Name given to the synthesized item when extraction found no line items
const FALLBACK_ITEM_NAME: &str = "Extracted Item";

/// Build an editable draft from an extraction result
///
/// - The category is matched case-insensitively against the catalog,
///   defaulting to the first category when unrecognized.
/// - Extracted item amounts are reformatted to exactly 2 decimals;
///   malformed amounts become `0.00`.
/// - When extraction produced no items, a single "Extracted Item" carries
///   the aggregate total (or `0.00` when that is absent too).
pub fn ingest_extraction(extraction: &ExtractionResponse) -> ExpenseDraft {
    let mut draft = ExpenseDraft::new();
    draft.set_category(catalog::match_category(extraction.category.as_deref()));
    draft.store = extraction.store_name.clone().unwrap_or_default();

    draft.items = if extraction.items.is_empty() {
        vec![LineItem::new(
            FALLBACK_ITEM_NAME,
            amount::format(extraction.total_amount.unwrap_or(0.0)),
        )]
    } else {
        extraction
            .items
            .iter()
            .map(|item| LineItem::new(item.name.clone(), amount::format(item.amount_value())))
            .collect()
    };

    draft
}
