use rayon::prelude::*;
use tracing::{debug, info, warn};

use beacon_context::ContextBuilder;
use beacon_core::config::RankingConfig;
use beacon_core::errors::{CatalogError, GenerationError};
use beacon_core::extract;
use beacon_core::models::{CandidateResult, QueryContext};
use beacon_core::traits::{ModelTier, TextGenerator};

use crate::prompts;

/// Stage-2 output: the selected candidate, the near-ties a caller may
/// surface as alternatives, and the full ranked list.
#[derive(Debug, Clone)]
pub struct Selection {
    pub top: CandidateResult,
    /// Candidates within the tie threshold of the top score.
    pub ties: Vec<CandidateResult>,
    pub ranked: Vec<CandidateResult>,
}

/// Fine-grained ranking of the triage survivors over full context
/// payloads, with tie detection.
pub struct FineRanker<'a> {
    generator: &'a dyn TextGenerator,
    contexts: &'a ContextBuilder<'a>,
    config: &'a RankingConfig,
}

impl<'a> FineRanker<'a> {
    pub fn new(
        generator: &'a dyn TextGenerator,
        contexts: &'a ContextBuilder<'a>,
        config: &'a RankingConfig,
    ) -> Self {
        Self {
            generator,
            contexts,
            config,
        }
    }

    /// Rank the survivors and detect ties.
    ///
    /// A context-build failure is fatal to the whole stage: survivors are
    /// expected to reference the live catalog, so a missing dataset means
    /// the candidate set and catalog disagree. A scoring failure for one
    /// candidate (after a single higher-capacity retry on overflow) skips
    /// that candidate only.
    pub fn rank(
        &self,
        question: &str,
        survivors: &[CandidateResult],
    ) -> Result<Option<Selection>, CatalogError> {
        let mut staged: Vec<(CandidateResult, QueryContext)> =
            Vec::with_capacity(survivors.len());
        for candidate in survivors {
            let context = self.contexts.build(
                &candidate.document.dataset_name,
                candidate.document.table_name.as_deref(),
                true,
            )?;
            staged.push((candidate.clone(), context));
        }

        let mut ranked: Vec<CandidateResult> = staged
            .into_par_iter()
            .filter_map(|(candidate, context)| {
                self.score(question, &context)
                    .map(|score| CandidateResult::new(candidate.document, score))
            })
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        let Some(top) = ranked.first().cloned() else {
            debug!("no fine-ranked candidates survived scoring");
            return Ok(None);
        };

        let ties: Vec<CandidateResult> = ranked
            .iter()
            .skip(1)
            .take_while(|c| top.score - c.score <= self.config.tie_threshold)
            .cloned()
            .collect();

        info!(
            top = %top.identity(),
            score = top.score,
            ties = ties.len(),
            ranked = ranked.len(),
            "fine ranking complete"
        );
        Ok(Some(Selection { top, ties, ranked }))
    }

    /// Score one candidate's context. `None` means the candidate is
    /// skipped; malformed output degrades to a zero score instead.
    fn score(&self, question: &str, context: &QueryContext) -> Option<i64> {
        let prompt = prompts::fine_score(question, context);
        match self.generator.generate(&prompt, ModelTier::Standard) {
            Ok(reply) => Some(extract::first_integer(&reply).unwrap_or(0)),
            Err(GenerationError::CapacityExceeded { .. }) => {
                // One escalation to the higher-capacity tier, then give up
                // on this candidate only.
                match self.generator.generate(&prompt, ModelTier::Large) {
                    Ok(reply) => Some(extract::first_integer(&reply).unwrap_or(0)),
                    Err(e) => {
                        warn!(error = %e, "fine scoring failed after escalation, skipping candidate");
                        None
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "fine scoring failed, skipping candidate");
                None
            }
        }
    }
}
