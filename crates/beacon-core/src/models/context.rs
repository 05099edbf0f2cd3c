use serde::{Deserialize, Serialize};

use super::{Dataset, Parameter};

/// A deep, independent copy of one dataset's descriptor, optionally scoped
/// to a single selected table.
///
/// Never aliases catalog storage: building a context clones the dataset and
/// then filters, elides, or collapses value lists in the copy only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryContext {
    #[serde(rename = "DatasetName")]
    pub dataset_name: String,
    #[serde(rename = "DatasetDescription")]
    pub dataset_description: String,
    #[serde(rename = "Parameters")]
    pub parameters: Vec<Parameter>,
    #[serde(
        rename = "SelectedTableName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_table: Option<String>,
}

impl QueryContext {
    /// A context covering the whole dataset, no table selected.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            dataset_name: dataset.name.clone(),
            dataset_description: dataset.description.clone(),
            parameters: dataset.parameters.clone(),
            selected_table: None,
        }
    }

    /// Names of parameters the dataset marks as required.
    pub fn required_parameter_names(&self) -> Vec<String> {
        self.parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.clone())
            .collect()
    }
}
