use crate::errors::FetchError;
use crate::models::QueryParams;

/// The statistics-API data fetch. Returns raw result rows; a
/// server-reported error payload surfaces as `FetchError::Api`, distinct
/// from transport failures.
pub trait StatisticsFetcher: Send + Sync {
    fn fetch(&self, params: &QueryParams) -> Result<Vec<serde_json::Value>, FetchError>;
}
