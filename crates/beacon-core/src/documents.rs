//! Derivation of searchable table documents from catalog datasets, and the
//! canonical text used to embed them.

use crate::config::defaults::DEFAULT_TABLE_PARAMETERS;
use crate::errors::CatalogError;
use crate::models::{Dataset, ParameterSummary, ParameterValue, TableDocument};

/// Build one document per table of each dataset.
///
/// A dataset's table parameter (`TableName`, falling back to `TableID`)
/// contributes one document per value; the remaining parameters ride along
/// as `{name, description}` pairs. A dataset without a table parameter
/// yields a single dataset-level document.
pub fn derive_table_documents(datasets: &[Dataset]) -> Vec<TableDocument> {
    let mut documents = Vec::new();

    for dataset in datasets {
        let table_parameter = DEFAULT_TABLE_PARAMETERS
            .iter()
            .find_map(|name| dataset.parameter(name));

        let other_parameters: Vec<ParameterSummary> = dataset
            .parameters
            .iter()
            .filter(|p| {
                !DEFAULT_TABLE_PARAMETERS
                    .iter()
                    .any(|t| p.name.eq_ignore_ascii_case(t))
            })
            .map(|p| ParameterSummary {
                name: p.name.clone(),
                description: p.description.clone(),
            })
            .collect();

        match table_parameter {
            Some(parameter) => {
                for value in &parameter.values {
                    if let Some((table_name, table_description)) = table_value_fields(value) {
                        documents.push(TableDocument {
                            id: None,
                            dataset_name: dataset.name.clone(),
                            dataset_description: dataset.description.clone(),
                            table_name: Some(table_name),
                            table_description: Some(table_description),
                            other_parameters: other_parameters.clone(),
                            embedding: None,
                            metadata: None,
                        });
                    }
                }
            }
            None => documents.push(TableDocument {
                id: None,
                dataset_name: dataset.name.clone(),
                dataset_description: dataset.description.clone(),
                table_name: None,
                table_description: None,
                other_parameters,
                embedding: None,
                metadata: None,
            }),
        }
    }

    documents
}

/// Verify every document references a dataset that exists.
///
/// Run after a catalog load or refresh; an orphaned document means the
/// document store and the dataset listing are out of sync.
pub fn check_integrity(
    datasets: &[Dataset],
    documents: &[TableDocument],
) -> Result<(), CatalogError> {
    for document in documents {
        if !datasets.iter().any(|d| d.name == document.dataset_name) {
            return Err(CatalogError::DocumentIntegrity {
                identity: document.identity(),
                dataset: document.dataset_name.clone(),
            });
        }
    }
    Ok(())
}

fn table_value_fields(value: &ParameterValue) -> Option<(String, String)> {
    match value {
        ParameterValue::TableScoped {
            table_name,
            description,
        } => Some((table_name.clone(), description.clone())),
        ParameterValue::Plain { key, description } => Some((key.clone(), description.clone())),
        _ => None,
    }
}

/// The canonical text a document is embedded from.
///
/// Field order is stable: dataset name, table name, dataset description,
/// table description, then the flattened other-parameter pairs. Changing
/// this order requires re-embedding the whole corpus.
pub fn embedding_text(document: &TableDocument) -> String {
    let mut parts: Vec<String> = Vec::new();

    for field in [
        Some(document.dataset_name.as_str()),
        document.table_name.as_deref(),
        Some(document.dataset_description.as_str()),
        document.table_description.as_deref(),
    ]
    .into_iter()
    .flatten()
    {
        let trimmed = field.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
    }

    let flattened: Vec<String> = document
        .other_parameters
        .iter()
        .map(|p| format!("{} {}", p.name, p.description).trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if !flattened.is_empty() {
        parts.push(flattened.join("; "));
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Parameter;

    fn dataset_with_tables() -> Dataset {
        Dataset {
            name: "NIPA".into(),
            description: "National accounts".into(),
            parameters: vec![
                Parameter {
                    name: "TableName".into(),
                    description: "The table".into(),
                    required: true,
                    multiple_accepted: false,
                    all_value: None,
                    values: vec![
                        ParameterValue::table_scoped("T10101", "Table 1.1.1. Real GDP"),
                        ParameterValue::table_scoped("T10105", "Table 1.1.5. GDP"),
                    ],
                },
                Parameter {
                    name: "Frequency".into(),
                    description: "A or Q".into(),
                    required: true,
                    multiple_accepted: true,
                    all_value: None,
                    values: vec![],
                },
            ],
        }
    }

    #[test]
    fn one_document_per_table_value() {
        let docs = derive_table_documents(&[dataset_with_tables()]);
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].table_name.as_deref(), Some("T10101"));
        assert_eq!(docs[0].other_parameters.len(), 1);
        assert_eq!(docs[0].other_parameters[0].name, "Frequency");
    }

    #[test]
    fn dataset_without_table_parameter_yields_single_document() {
        let ds = Dataset {
            name: "FixedAssets".into(),
            description: "Fixed assets".into(),
            parameters: vec![],
        };
        let docs = derive_table_documents(&[ds]);
        assert_eq!(docs.len(), 1);
        assert!(docs[0].table_name.is_none());
    }

    #[test]
    fn orphaned_document_fails_the_integrity_check() {
        let datasets = [dataset_with_tables()];
        let mut documents = derive_table_documents(&datasets);
        assert!(check_integrity(&datasets, &documents).is_ok());

        documents[0].dataset_name = "Gone".into();
        let err = check_integrity(&datasets, &documents).unwrap_err();
        assert!(matches!(err, CatalogError::DocumentIntegrity { .. }));
    }

    #[test]
    fn embedding_text_field_order_is_stable() {
        let docs = derive_table_documents(&[dataset_with_tables()]);
        let text = embedding_text(&docs[0]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "NIPA",
                "T10101",
                "National accounts",
                "Table 1.1.1. Real GDP",
                "Frequency A or Q",
            ]
        );
    }
}
