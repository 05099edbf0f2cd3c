/// Catalog read and integrity errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("dataset not found: {name}")]
    DatasetNotFound { name: String },

    #[error("table document {identity} references missing dataset {dataset}")]
    DocumentIntegrity { identity: String, dataset: String },

    #[error("catalog read failed: {reason}")]
    ReadFailed { reason: String },
}
