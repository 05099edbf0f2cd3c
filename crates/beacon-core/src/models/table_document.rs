use serde::{Deserialize, Serialize};

/// One searchable document in the table index: a (dataset, table) pair with
/// its descriptions, the non-table parameters of the dataset, an optional
/// embedding vector, and optional structured metadata parsed from a
/// hierarchically-named table description.
///
/// Invariant: `dataset_name` must reference an existing catalog dataset.
/// A document whose embedding length differs from the index dimensionality
/// is rejected at indexing time, never silently tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDocument {
    /// Stable identity assigned by the search backend, when it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub dataset_name: String,
    #[serde(default)]
    pub dataset_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_description: Option<String>,
    /// Names/descriptions of the dataset's parameters that are not
    /// table-specific.
    #[serde(default)]
    pub other_parameters: Vec<ParameterSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<StructuredMetadata>,
}

impl TableDocument {
    /// The key used for deduplication and result merging: the backend id
    /// when present, otherwise the dataset/table pair.
    pub fn identity(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!(
                "{}::{}",
                self.dataset_name,
                self.table_name.as_deref().unwrap_or("")
            ),
        }
    }

    /// A copy suitable for reports and prompts: embedding and parameter
    /// payloads stripped, descriptive fields kept.
    pub fn for_display(&self) -> TableDocument {
        TableDocument {
            embedding: None,
            other_parameters: Vec::new(),
            ..self.clone()
        }
    }
}

/// A `{name, description}` pair for a parameter carried on a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSummary {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Structured attributes extracted from a hierarchically-named table
/// description, e.g. `"Table 1.2.3. Foo Bar (A) (Q)"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredMetadata {
    pub section: u32,
    pub subsection: u32,
    /// Trailing letter of the two-part `X.Y` form, e.g. `"7.1A"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_subsection: Option<char>,
    /// Third component of the `X.Y.Z` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
    pub is_annual: bool,
    pub is_quarterly: bool,
    pub is_monthly: bool,
    /// Section title from the fixed taxonomy, `"Section N"` for unknown
    /// section numbers.
    pub section_label: String,
    /// Canonical label shared by the sibling tables of the same
    /// section.subsection cluster.
    pub subsection_label: String,
}
