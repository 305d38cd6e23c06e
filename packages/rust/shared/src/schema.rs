//! Column names for the owner-record dataset.
//!
//! Input files come from the state's unclaimed-property extract and use its
//! header spelling verbatim (upper snake case); derived name-part columns use
//! the downstream report's mixed-case spelling. Both are external contracts,
//! so they live here as constants rather than being derived.

// ---------------------------------------------------------------------------
// Input columns
// ---------------------------------------------------------------------------

pub const OWNER_NAME: &str = "OWNER_NAME";
pub const CASH_REPORTED: &str = "CASH_REPORTED";
pub const CURRENT_CASH_BALANCE: &str = "CURRENT_CASH_BALANCE";
pub const OWNER_COUNTRY_CODE: &str = "OWNER_COUNTRY_CODE";
pub const OWNER_STREET_1: &str = "OWNER_STREET_1";
pub const OWNER_STREET_2: &str = "OWNER_STREET_2";
pub const OWNER_CITY: &str = "OWNER_CITY";
pub const OWNER_ZIP: &str = "OWNER_ZIP";
pub const OWNER_STATE: &str = "OWNER_STATE";
pub const PROPERTY_ID: &str = "PROPERTY_ID";
pub const HOLDER_NAME: &str = "HOLDER_NAME";
pub const PROPERTY_TYPE: &str = "PROPERTY_TYPE";
pub const SHARES_REPORTED: &str = "SHARES_REPORTED";
pub const NO_OF_OWNERS: &str = "NO_OF_OWNERS";

// ---------------------------------------------------------------------------
// Derived columns
// ---------------------------------------------------------------------------

pub const LAST_NAME: &str = "Last_Name";
pub const FIRST_NAME: &str = "First_Name";
pub const MIDDLE_NAME: &str = "Middle_Name";
pub const ADDITIONAL_NAME_03: &str = "AdditionalName_03";
pub const ADDITIONAL_NAME_04: &str = "AdditionalName_04";
pub const ADDITIONAL_NAME_05: &str = "AdditionalName_05";

/// Street reconciliation intermediates (dropped by the final projection).
pub const OWNER_STREET_1_NEW: &str = "OWNER_STREET_1_NEW";
pub const OWNER_STREET_1_FINAL: &str = "OWNER_STREET_1_FINAL";
pub const OWNER_STREET_1_CLEAN: &str = "OWNER_STREET_1_CLEAN";

pub const STATE_REPORTED: &str = "STATE_REPORTED";

/// Every retained record reports the same jurisdiction.
pub const STATE_REPORTED_VALUE: &str = "CALIFORNIA";

// ---------------------------------------------------------------------------
// Column groups
// ---------------------------------------------------------------------------

/// Positional targets for the space-split owner name, in token order.
pub const NAME_PART_COLUMNS: [&str; 6] = [
    LAST_NAME,
    FIRST_NAME,
    MIDDLE_NAME,
    ADDITIONAL_NAME_03,
    ADDITIONAL_NAME_04,
    ADDITIONAL_NAME_05,
];

/// The output projection: exactly these columns, in this order.
pub const OUTPUT_COLUMNS: [&str; 15] = [
    FIRST_NAME,
    LAST_NAME,
    OWNER_NAME,
    OWNER_STREET_1,
    OWNER_CITY,
    OWNER_ZIP,
    OWNER_STATE,
    PROPERTY_ID,
    HOLDER_NAME,
    PROPERTY_TYPE,
    CASH_REPORTED,
    CURRENT_CASH_BALANCE,
    SHARES_REPORTED,
    NO_OF_OWNERS,
    STATE_REPORTED,
];
