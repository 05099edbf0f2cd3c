use crate::errors::CatalogError;
use crate::models::{Dataset, TableDocument};

/// Read-only access to the catalog snapshot.
///
/// Implementations must not let a refresh race an in-flight question's
/// reads; copy-on-read or a reader lock around the snapshot is sufficient.
pub trait CatalogReader: Send + Sync {
    fn datasets(&self) -> Result<Vec<Dataset>, CatalogError>;

    fn table_documents(&self) -> Result<Vec<TableDocument>, CatalogError>;

    /// Exactly one dataset is expected per name.
    fn dataset(&self, name: &str) -> Result<Dataset, CatalogError> {
        self.datasets()?
            .into_iter()
            .find(|d| d.name == name)
            .ok_or_else(|| CatalogError::DatasetNotFound {
                name: name.to_string(),
            })
    }
}
