// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_BROAD_LIMIT: usize = 25;
pub const DEFAULT_ANCHOR_DATASET: &str = "NIPA";
pub const DEFAULT_ANCHOR_FLOOR: usize = 10;
pub const DEFAULT_SCOPED_LIMIT: usize = 25;
pub const DEFAULT_LISTING_FALLBACK_LIMIT: usize = 200;

// --- Ranking ---
pub const DEFAULT_TRIAGE_TOP_N: usize = 10;
pub const DEFAULT_TIE_THRESHOLD: u8 = 3;
pub const DEFAULT_ANCHOR_TERMS: &[&str] = &["gdp"];

// --- Context ---
pub const DEFAULT_TABLE_PARAMETERS: &[&str] = &["TableName", "TableID"];
pub const DEFAULT_GEO_PARAMETER: &str = "GeoFips";
pub const DEFAULT_YEAR_PARAMETER: &str = "Year";
pub const DEFAULT_LINE_CODE_PARAMETER: &str = "LineCode";
pub const DEFAULT_ELISION_THRESHOLD: usize = 500;
