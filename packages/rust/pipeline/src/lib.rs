//! Owner-record filtering pipeline.
//!
//! Cleans and filters a table of unclaimed-property owner records down to
//! mailable personal owners, then formats a fixed 15-column report. The
//! pipeline is a linear sequence of per-row stages; a row dropped by one
//! stage never reaches the next, and row order is preserved throughout.

pub mod stages;

use claimsift_keywords::KeywordMatcher;
use claimsift_shared::{Result, schema};
use claimsift_table::Table;
use tracing::info;

/// Run the full filtering pipeline over `table`.
///
/// A zero-row table is returned unchanged without running any stage. Fails
/// when a column a stage needs is missing from the input.
pub fn apply_filtering(mut table: Table, matcher: &KeywordMatcher) -> Result<Table> {
    if table.is_empty() {
        return Ok(table);
    }

    let input_rows = table.height();
    info!(rows = input_rows, "applying owner-record filtering");

    table = stages::filter_non_negative_cash(table)?;
    table = stages::clean_owner_names(table)?;
    table = stages::filter_valid_names(table, matcher)?;
    table = stages::split_owner_names(table)?;
    table = stages::filter_name_quality(table)?;
    table = stages::normalize_country_codes(table)?;
    table = stages::filter_country_codes(table)?;
    table = stages::normalize_streets(table)?;
    table = stages::filter_street_validity(table)?;
    table = stages::format_outputs(table)?;

    let output = table.select(&schema::OUTPUT_COLUMNS)?;
    info!(
        input_rows,
        output_rows = output.height(),
        "owner-record filtering complete"
    );
    Ok(output)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
