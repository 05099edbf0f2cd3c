use serde::{Deserialize, Serialize};

use super::defaults;

/// Context construction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Parameter names that identify the table dimension itself
    /// (matched case-insensitively).
    pub table_parameters: Vec<String>,
    /// The very large geographic parameter whose values are elided in
    /// eval payloads instead of enumerated.
    pub geo_parameter: String,
    /// The Year-typed parameter eligible for min/max collapse.
    pub year_parameter: String,
    /// The parameter whose values are scoped to a table by a
    /// `[TABLE]` description-prefix convention.
    pub line_code_parameter: String,
    /// Value lists longer than this are elided with a note in eval
    /// payloads.
    pub elision_threshold: usize,
}

impl ContextConfig {
    pub fn is_table_parameter(&self, name: &str) -> bool {
        self.table_parameters
            .iter()
            .any(|t| t.eq_ignore_ascii_case(name))
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            table_parameters: defaults::DEFAULT_TABLE_PARAMETERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            geo_parameter: defaults::DEFAULT_GEO_PARAMETER.to_string(),
            year_parameter: defaults::DEFAULT_YEAR_PARAMETER.to_string(),
            line_code_parameter: defaults::DEFAULT_LINE_CODE_PARAMETER.to_string(),
            elision_threshold: defaults::DEFAULT_ELISION_THRESHOLD,
        }
    }
}
