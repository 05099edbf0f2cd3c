use beacon_core::errors::CatalogError;
use beacon_core::models::{Dataset, Parameter, ParameterValue, TableDocument};
use beacon_core::traits::CatalogReader;

/// A catalog held fully in memory; the snapshot is cloned on every read.
pub struct InMemoryCatalog {
    datasets: Vec<Dataset>,
    documents: Vec<TableDocument>,
}

impl InMemoryCatalog {
    pub fn new(datasets: Vec<Dataset>, documents: Vec<TableDocument>) -> Self {
        Self {
            datasets,
            documents,
        }
    }
}

impl CatalogReader for InMemoryCatalog {
    fn datasets(&self) -> Result<Vec<Dataset>, CatalogError> {
        Ok(self.datasets.clone())
    }

    fn table_documents(&self) -> Result<Vec<TableDocument>, CatalogError> {
        Ok(self.documents.clone())
    }
}

/// A NIPA-like dataset with table, frequency, year, and line-code
/// parameters.
pub fn nipa_dataset() -> Dataset {
    Dataset {
        name: "NIPA".into(),
        description: "National income and product accounts".into(),
        parameters: vec![
            Parameter {
                name: "TableName".into(),
                description: "The standard table identifier".into(),
                required: true,
                multiple_accepted: false,
                all_value: None,
                values: vec![
                    ParameterValue::table_scoped(
                        "T10101",
                        "Table 1.1.1. Percent Change From Preceding Period in Real Gross Domestic Product (A) (Q)",
                    ),
                    ParameterValue::table_scoped(
                        "T10105",
                        "Table 1.1.5. Gross Domestic Product (A) (Q)",
                    ),
                    ParameterValue::table_scoped(
                        "T20100",
                        "Table 2.1. Personal Income and Its Disposition (A) (Q)",
                    ),
                ],
            },
            Parameter {
                name: "Frequency".into(),
                description: "A - Annual, Q - Quarterly, M - Monthly".into(),
                required: true,
                multiple_accepted: true,
                all_value: Some("X".into()),
                values: vec![
                    ParameterValue::plain("A", "Annual"),
                    ParameterValue::plain("Q", "Quarterly"),
                ],
            },
            Parameter {
                name: "Year".into(),
                description: "List of years to retrieve".into(),
                required: true,
                multiple_accepted: true,
                all_value: Some("X".into()),
                values: (2015..=2023)
                    .map(|y| ParameterValue::plain(y.to_string(), y.to_string()))
                    .collect(),
            },
            Parameter {
                name: "LineCode".into(),
                description: "Line within the table".into(),
                required: false,
                multiple_accepted: false,
                all_value: None,
                values: vec![
                    ParameterValue::plain("1", "[T10101] Gross domestic product"),
                    ParameterValue::plain("2", "[T10105] Personal consumption expenditures"),
                ],
            },
        ],
    }
}

/// A Regional-like dataset with the oversized geographic parameter.
pub fn regional_dataset() -> Dataset {
    Dataset {
        name: "Regional".into(),
        description: "Income, product, and employment by state and county".into(),
        parameters: vec![
            Parameter {
                name: "TableName".into(),
                description: "The table identifier".into(),
                required: true,
                multiple_accepted: false,
                all_value: None,
                values: vec![ParameterValue::table_scoped(
                    "SAINC1",
                    "Personal Income Summary",
                )],
            },
            Parameter {
                name: "GeoFips".into(),
                description: "Geographic area codes".into(),
                required: true,
                multiple_accepted: true,
                all_value: Some("STATE".into()),
                values: (0..600)
                    .map(|i| ParameterValue::plain(format!("{:05}", i * 20), format!("Area {i}")))
                    .collect(),
            },
        ],
    }
}

/// A bare table document for retrieval tests.
pub fn table_doc(dataset: &str, table: &str) -> TableDocument {
    TableDocument {
        id: None,
        dataset_name: dataset.into(),
        dataset_description: format!("{dataset} dataset"),
        table_name: Some(table.into()),
        table_description: Some(format!("{table} description")),
        other_parameters: vec![],
        embedding: None,
        metadata: None,
    }
}

/// The standard two-dataset test catalog, with structured metadata
/// attached to every table whose name parses.
pub fn test_catalog() -> InMemoryCatalog {
    let datasets = vec![nipa_dataset(), regional_dataset()];
    let mut documents = beacon_core::documents::derive_table_documents(&datasets);
    beacon_metadata::enrich_documents(&mut documents);
    InMemoryCatalog::new(datasets, documents)
}
