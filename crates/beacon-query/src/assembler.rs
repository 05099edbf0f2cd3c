use tracing::{debug, warn};

use beacon_core::config::ContextConfig;
use beacon_core::extract;
use beacon_core::models::{QueryContext, QueryParams, DATASET_NAME_KEY};
use beacon_core::traits::{ModelTier, TextGenerator};

use crate::prompts;

/// Year-range keys fixed by the statistics API. When the generator emits
/// both a range and the enumerated single-year parameter, the range wins.
pub(crate) const YEAR_RANGE_KEYS: [&str; 2] = ["FirstYear", "LastYear"];

/// Builds the fetch parameter map from a question and a table-scoped
/// context. Generation failures and unparsable output both degrade to an
/// empty map, which post-processing then seeds with the pinned fields.
pub struct QueryAssembler<'a> {
    generator: &'a dyn TextGenerator,
    config: &'a ContextConfig,
}

impl<'a> QueryAssembler<'a> {
    pub fn new(generator: &'a dyn TextGenerator, config: &'a ContextConfig) -> Self {
        Self { generator, config }
    }

    pub fn assemble(&self, question: &str, context: &QueryContext) -> QueryParams {
        let prompt = prompts::assemble(question, context);
        let mut params = match self.generator.generate(&prompt, ModelTier::Large) {
            Ok(reply) => parse_params(&reply),
            Err(e) => {
                warn!(error = %e, "parameter assembly call failed, starting from empty params");
                QueryParams::new()
            }
        };

        postprocess(&mut params, context, self.config);
        debug!(params = params.len(), "parameters assembled");
        params
    }
}

/// Pull the first JSON object out of a reply and flatten it to string
/// values. An unparsable reply yields an empty map.
pub(crate) fn parse_params(reply: &str) -> QueryParams {
    match extract::first_json_string_map(reply) {
        Some(pairs) => pairs.into_iter().collect(),
        None => {
            warn!("generated parameters were not parsable JSON, using empty params");
            QueryParams::new()
        }
    }
}

/// Normalization applied to every generated parameter map:
/// the dataset name is force-set from the context, the selected table is
/// injected when the generator omitted it, and an enumerated single-year
/// field yields to an explicit year range.
pub(crate) fn postprocess(
    params: &mut QueryParams,
    context: &QueryContext,
    config: &ContextConfig,
) {
    params.insert(DATASET_NAME_KEY, context.dataset_name.clone());

    if let Some(table) = &context.selected_table {
        let has_table_key = params
            .iter()
            .any(|(name, _)| config.is_table_parameter(name));
        if !has_table_key {
            if let Some(key) = config.table_parameters.first() {
                params.insert(key.clone(), table.clone());
            }
        }
    }

    let has_range = YEAR_RANGE_KEYS.iter().any(|k| params.contains(k));
    if has_range && params.remove(&config.year_parameter).is_some() {
        debug!("dropped single-year parameter in favor of year range");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_core::models::Dataset;

    fn context() -> QueryContext {
        let mut ctx = QueryContext::from_dataset(&Dataset {
            name: "NIPA".into(),
            description: "National accounts".into(),
            parameters: vec![],
        });
        ctx.selected_table = Some("T10101".into());
        ctx
    }

    #[test]
    fn postprocess_pins_dataset_and_injects_table() {
        let mut params = QueryParams::new();
        params.insert("DatasetName", "Regional");
        params.insert("Frequency", "A");
        postprocess(&mut params, &context(), &ContextConfig::default());

        assert_eq!(params.dataset_name(), Some("NIPA"));
        assert_eq!(params.get("TableName"), Some("T10101"));
    }

    #[test]
    fn postprocess_respects_an_existing_table_key() {
        let mut params = QueryParams::new();
        params.insert("TableID", "T20100");
        postprocess(&mut params, &context(), &ContextConfig::default());

        assert_eq!(params.get("TableID"), Some("T20100"));
        assert!(!params.contains("TableName"));
    }

    #[test]
    fn year_range_supersedes_single_year() {
        let mut params = QueryParams::new();
        params.insert("Year", "2020");
        params.insert("FirstYear", "2015");
        params.insert("LastYear", "2023");
        postprocess(&mut params, &context(), &ContextConfig::default());

        assert!(!params.contains("Year"));
        assert_eq!(params.get("FirstYear"), Some("2015"));
    }

    #[test]
    fn single_year_survives_without_a_range() {
        let mut params = QueryParams::new();
        params.insert("Year", "2020");
        postprocess(&mut params, &context(), &ContextConfig::default());
        assert_eq!(params.get("Year"), Some("2020"));
    }

    #[test]
    fn unparsable_reply_becomes_empty_params() {
        assert!(parse_params("sorry, I cannot help").is_empty());
        assert_eq!(
            parse_params(r#"Here you go: {"Frequency": "A"}"#).get("Frequency"),
            Some("A")
        );
    }

    #[test]
    fn multi_valued_parameters_flatten_to_comma_lists() {
        let params = parse_params(r#"{"Frequency": ["A", "Q"], "Year": ["2020", "2021"]}"#);
        assert_eq!(params.get("Frequency"), Some("A,Q"));
        assert_eq!(params.get("Year"), Some("2020,2021"));
    }
}
