//! Filter and transform stages over owner-record tables.
//!
//! Each stage is a function `Table -> Result<Table>` applied in a fixed
//! order by [`crate::apply_filtering`]. Filter stages narrow rows and
//! transform stages rewrite or add columns. A stage fails only when a
//! column it needs is missing from the input.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use claimsift_keywords::KeywordMatcher;
use claimsift_shared::{Result, schema};
use claimsift_table::Table;

/// House number followed by non-digit text, the shape of a street address.
static ADDRESS_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s+\D+").expect("valid regex"));

/// Country codes a row may carry after normalization. "NAN" stands for
/// unknown or blank, not a country.
const ALLOWED_COUNTRY_CODES: [&str; 3] = ["US", "USA", "NAN"];

// ---------------------------------------------------------------------------
// Stage 1: Non-negative cash filter
// ---------------------------------------------------------------------------

/// Drop rows whose reported cash is negative or fails to parse as a number.
pub fn filter_non_negative_cash(mut table: Table) -> Result<Table> {
    let cash = table.column_index(schema::CASH_REPORTED)?;
    let before = table.height();

    table.retain_rows(|row| matches!(row[cash].trim().parse::<f64>(), Ok(v) if v >= 0.0));

    debug!(dropped = before - table.height(), "non-negative cash filter");
    Ok(table)
}

// ---------------------------------------------------------------------------
// Stage 2: Owner-name cleaning
// ---------------------------------------------------------------------------

/// Remove the phrase "ESTATE OF" from owner names and trim the remainder.
pub fn clean_owner_names(mut table: Table) -> Result<Table> {
    static ESTATE_OF_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)\bESTATE\s+OF\b").expect("valid regex"));

    table.map_column(schema::OWNER_NAME, |name| {
        ESTATE_OF_RE.replace_all(name, "").trim().to_string()
    })?;
    Ok(table)
}

// ---------------------------------------------------------------------------
// Stage 3: Valid-name filter
// ---------------------------------------------------------------------------

/// Keep only multi-token personal names.
///
/// A name without a space cannot be split into last and first parts, and a
/// name matching the business keyword list belongs to an organization
/// rather than a person.
pub fn filter_valid_names(mut table: Table, matcher: &KeywordMatcher) -> Result<Table> {
    let name = table.column_index(schema::OWNER_NAME)?;
    let before = table.height();

    table.retain_rows(|row| row[name].contains(' ') && !matcher.is_business_name(&row[name]));

    debug!(dropped = before - table.height(), "valid-name filter");
    Ok(table)
}

// ---------------------------------------------------------------------------
// Stage 4: Name splitting
// ---------------------------------------------------------------------------

/// Split owner names on single spaces into up to six positional parts.
///
/// The first token is the last name, the second the first name. Tokens past
/// the sixth are discarded and missing positions stay empty.
pub fn split_owner_names(mut table: Table) -> Result<Table> {
    let names: Vec<String> = table
        .column_values(schema::OWNER_NAME)?
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut parts: Vec<Vec<String>> =
        vec![Vec::with_capacity(names.len()); schema::NAME_PART_COLUMNS.len()];
    for name in &names {
        let mut tokens = name.split(' ');
        for column in &mut parts {
            column.push(tokens.next().unwrap_or_default().to_string());
        }
    }

    for (column, values) in schema::NAME_PART_COLUMNS.iter().zip(parts) {
        table.set_column(column, values)?;
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// Stage 5: Name quality filter
// ---------------------------------------------------------------------------

/// Drop rows whose split name parts look wrong.
///
/// Last and first names must contain only ASCII letters, which also rejects
/// hyphenated and apostrophe-carrying surnames. The first name must be
/// non-empty.
pub fn filter_name_quality(mut table: Table) -> Result<Table> {
    let last = table.column_index(schema::LAST_NAME)?;
    let first = table.column_index(schema::FIRST_NAME)?;
    let before = table.height();

    table.retain_rows(|row| {
        is_alphabetic(&row[last]) && is_alphabetic(&row[first]) && !row[first].is_empty()
    });

    debug!(dropped = before - table.height(), "name quality filter");
    Ok(table)
}

fn is_alphabetic(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphabetic())
}

// ---------------------------------------------------------------------------
// Stage 6: Country-code normalization
// ---------------------------------------------------------------------------

/// Normalize owner country codes: blank becomes "NAN", the rest are
/// trimmed and uppercased.
pub fn normalize_country_codes(mut table: Table) -> Result<Table> {
    table.map_column(schema::OWNER_COUNTRY_CODE, |code| {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            "NAN".to_string()
        } else {
            trimmed.to_uppercase()
        }
    })?;
    Ok(table)
}

// ---------------------------------------------------------------------------
// Stage 7: Country-code filter
// ---------------------------------------------------------------------------

/// Keep only domestic rows, plus rows with no usable country code.
pub fn filter_country_codes(mut table: Table) -> Result<Table> {
    let country = table.column_index(schema::OWNER_COUNTRY_CODE)?;
    let before = table.height();

    table.retain_rows(|row| ALLOWED_COUNTRY_CODES.contains(&row[country].as_str()));

    debug!(dropped = before - table.height(), "country-code filter");
    Ok(table)
}

// ---------------------------------------------------------------------------
// Stage 8: Street normalization
// ---------------------------------------------------------------------------

/// Reconcile the two street columns into one normalized street.
///
/// Street 2 stands in for street 1 when street 1 is unusable, or when
/// street 1 is not address-shaped while street 2 is. PO Box spelling
/// variants collapse to the canonical "PO BOX". Intermediate candidates are
/// kept as extra columns until the final projection discards them.
pub fn normalize_streets(mut table: Table) -> Result<Table> {
    static PO_BOX_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)P\s*\.?\s*O\s*\.?\s*BOX").expect("valid regex"));

    let street1: Vec<String> = table
        .column_values(schema::OWNER_STREET_1)?
        .into_iter()
        .map(|s| s.trim().to_string())
        .collect();
    let street2: Vec<String> = table
        .column_values(schema::OWNER_STREET_2)?
        .into_iter()
        .map(|s| s.trim().to_string())
        .collect();

    let candidates: Vec<String> = street1
        .iter()
        .zip(&street2)
        .map(|(s1, s2)| {
            if is_unusable_street(s1) && ADDRESS_SHAPE_RE.is_match(s2) {
                s2.clone()
            } else {
                s1.clone()
            }
        })
        .collect();
    table.set_column(schema::OWNER_STREET_1_NEW, candidates.clone())?;

    let finals: Vec<String> = candidates
        .iter()
        .zip(&street2)
        .map(|(candidate, s2)| {
            if !ADDRESS_SHAPE_RE.is_match(candidate) && ADDRESS_SHAPE_RE.is_match(s2) {
                s2.clone()
            } else {
                candidate.clone()
            }
        })
        .collect();
    table.set_column(schema::OWNER_STREET_1_FINAL, finals.clone())?;

    let cleaned: Vec<String> = finals
        .iter()
        .map(|street| PO_BOX_RE.replace_all(street, "PO BOX").to_string())
        .collect();
    table.set_column(schema::OWNER_STREET_1_CLEAN, cleaned)?;

    Ok(table)
}

fn is_unusable_street(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "unknown" | "" | "nan")
}

// ---------------------------------------------------------------------------
// Stage 9: Street validity filter
// ---------------------------------------------------------------------------

/// Keep only rows whose normalized street looks deliverable: it must be
/// address-shaped or mention a PO Box, and must not be a blank or unknown
/// placeholder.
pub fn filter_street_validity(mut table: Table) -> Result<Table> {
    let street = table.column_index(schema::OWNER_STREET_1_CLEAN)?;
    let before = table.height();

    table.retain_rows(|row| {
        let value = &row[street];
        let deliverable =
            ADDRESS_SHAPE_RE.is_match(value) || value.to_uppercase().contains("PO BOX");
        deliverable && !is_unusable_street(value)
    });

    debug!(dropped = before - table.height(), "street validity filter");
    Ok(table)
}

// ---------------------------------------------------------------------------
// Stage 10: Output formatting
// ---------------------------------------------------------------------------

/// Format retained rows for output.
///
/// Overwrites the street with its normalized form, truncates zips to five
/// characters, defaults a blank owner count to 0, stamps the reporting
/// state, renders both cash columns as currency text, and strips the
/// category prefix from property types.
pub fn format_outputs(mut table: Table) -> Result<Table> {
    let streets: Vec<String> = table
        .column_values(schema::OWNER_STREET_1_CLEAN)?
        .into_iter()
        .map(str::to_string)
        .collect();
    table.set_column(schema::OWNER_STREET_1, streets)?;

    table.map_column(schema::OWNER_ZIP, |zip| first_chars(zip, 5))?;

    table.map_column(schema::NO_OF_OWNERS, |count| {
        if count.is_empty() {
            "0".to_string()
        } else {
            count.to_string()
        }
    })?;

    let state = vec![schema::STATE_REPORTED_VALUE.to_string(); table.height()];
    table.set_column(schema::STATE_REPORTED, state)?;

    table.map_column(schema::CASH_REPORTED, format_cash_cell)?;
    table.map_column(schema::CURRENT_CASH_BALANCE, format_cash_cell)?;

    table.map_column(schema::PROPERTY_TYPE, |property_type| {
        match property_type.split_once(':') {
            Some((_, rest)) => rest.trim().to_string(),
            None => property_type.to_string(),
        }
    })?;

    Ok(table)
}

// Unparseable amounts pass through as-is. The non-negative filter already
// dropped bad CASH_REPORTED values, so this only arises for the balance
// column.
fn format_cash_cell(value: &str) -> String {
    match value.trim().parse::<f64>() {
        Ok(amount) => format_currency(amount),
        Err(_) => value.to_string(),
    }
}

/// Render an amount as currency text, e.g. `$1,234.56`.
fn format_currency(amount: f64) -> String {
    let rendered = format!("{amount:.2}");
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("${sign}{grouped}.{frac_part}")
}

fn first_chars(value: &str, count: usize) -> String {
    value.chars().take(count).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
