use tracing::{info, warn};

use beacon_core::config::ContextConfig;
use beacon_core::models::{QueryContext, QueryParams};
use beacon_core::traits::{ModelTier, TextGenerator};

use crate::assembler::{parse_params, postprocess};
use crate::prompts;

/// Repairs a rejected parameter map. Invoked at most once per question,
/// after the first fetch attempt fails; a second failure is surfaced to
/// the caller, never retried here.
pub struct QueryCorrector<'a> {
    generator: &'a dyn TextGenerator,
    config: &'a ContextConfig,
}

impl<'a> QueryCorrector<'a> {
    pub fn new(generator: &'a dyn TextGenerator, config: &'a ContextConfig) -> Self {
        Self { generator, config }
    }

    /// Produce the corrected parameter map. On an unusable generation the
    /// current params are returned unchanged, so the retry at least
    /// re-exercises the original request.
    pub fn correct(
        &self,
        error_message: &str,
        question: &str,
        context: &QueryContext,
        current: &QueryParams,
    ) -> QueryParams {
        let prompt = prompts::correct(error_message, question, context, current);
        let mut corrected = match self.generator.generate(&prompt, ModelTier::Large) {
            Ok(reply) => {
                let parsed = parse_params(&reply);
                if parsed.is_empty() {
                    warn!("correction output unusable, retrying with current params");
                    current.clone()
                } else {
                    parsed
                }
            }
            Err(e) => {
                warn!(error = %e, "correction call failed, retrying with current params");
                current.clone()
            }
        };

        // A required parameter the first attempt carried must not vanish
        // in the corrected map; restore it and warn. The restore is a
        // deliberate tightening over a warn-only policy, not an API
        // requirement.
        for name in context.required_parameter_names() {
            if let Some(value) = current.get(&name) {
                if !corrected.contains(&name) {
                    warn!(parameter = %name, "correction dropped a required parameter, restoring it");
                    corrected.insert(name.clone(), value.to_string());
                }
            }
        }

        postprocess(&mut corrected, context, self.config);
        info!(params = corrected.len(), "correction round complete");
        corrected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_core::errors::GenerationError;
    use test_fixtures::ScriptedGenerator;

    fn context() -> QueryContext {
        use beacon_core::models::{Dataset, Parameter};
        let mut ctx = QueryContext::from_dataset(&Dataset {
            name: "NIPA".into(),
            description: "National accounts".into(),
            parameters: vec![Parameter {
                name: "Frequency".into(),
                description: "A/Q/M".into(),
                required: true,
                multiple_accepted: true,
                all_value: None,
                values: vec![],
            }],
        });
        ctx.selected_table = Some("T10101".into());
        ctx
    }

    fn current() -> QueryParams {
        let mut p = QueryParams::new();
        p.insert("DatasetName", "NIPA");
        p.insert("TableName", "T10101");
        p.insert("Frequency", "A");
        p.insert("Year", "209X");
        p
    }

    #[test]
    fn corrected_params_replace_the_failed_map() {
        let generator = ScriptedGenerator::new("");
        generator.push_reply(
            r#"{"DatasetName": "NIPA", "TableName": "T10101", "Frequency": "A", "Year": "2020"}"#,
        );
        let config = ContextConfig::default();
        let corrector = QueryCorrector::new(&generator, &config);

        let corrected = corrector.correct("invalid Year", "gdp in 2020", &context(), &current());
        assert_eq!(corrected.get("Year"), Some("2020"));
        assert_eq!(corrected.dataset_name(), Some("NIPA"));
    }

    #[test]
    fn unusable_correction_falls_back_to_current_params() {
        let generator = ScriptedGenerator::new("");
        generator.push_error(GenerationError::Provider {
            reason: "unavailable".into(),
        });
        let config = ContextConfig::default();
        let corrector = QueryCorrector::new(&generator, &config);

        let corrected = corrector.correct("invalid Year", "gdp in 2020", &context(), &current());
        assert_eq!(corrected, current());
    }

    #[test]
    fn dropped_required_parameter_is_restored() {
        let generator = ScriptedGenerator::new("");
        generator.push_reply(r#"{"TableName": "T10101", "Year": "2020"}"#);
        let config = ContextConfig::default();
        let corrector = QueryCorrector::new(&generator, &config);

        let corrected = corrector.correct("invalid Year", "gdp in 2020", &context(), &current());
        assert_eq!(corrected.get("Frequency"), Some("A"));
    }

    #[test]
    fn dataset_name_is_pinned_through_correction() {
        let generator = ScriptedGenerator::new("");
        generator.push_reply(r#"{"DatasetName": "Regional", "TableName": "T10101"}"#);
        let config = ContextConfig::default();
        let corrector = QueryCorrector::new(&generator, &config);

        let corrected = corrector.correct("bad dataset", "gdp", &context(), &current());
        assert_eq!(corrected.dataset_name(), Some("NIPA"));
    }
}
