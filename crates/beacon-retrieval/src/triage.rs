use rayon::prelude::*;
use tracing::{debug, warn};

use beacon_core::config::RankingConfig;
use beacon_core::extract;
use beacon_core::models::{CandidateResult, TableDocument};
use beacon_core::traits::{ModelTier, TextGenerator};

use crate::prompts;

/// Stage-1 output: the top-N survivors plus the full scored list.
#[derive(Debug, Clone)]
pub struct TriageOutcome {
    pub top: Vec<CandidateResult>,
    pub all: Vec<CandidateResult>,
}

/// Broad relevance triage: a cheap confidence score per candidate,
/// with a deterministic heuristic fallback when the scoring call fails.
pub struct TriageRanker<'a> {
    generator: &'a dyn TextGenerator,
    config: &'a RankingConfig,
}

impl<'a> TriageRanker<'a> {
    pub fn new(generator: &'a dyn TextGenerator, config: &'a RankingConfig) -> Self {
        Self { generator, config }
    }

    /// Score every candidate and keep the top N.
    ///
    /// Scoring calls are independent and fan out across a worker pool;
    /// results stay keyed to their candidate, so completion order cannot
    /// affect the final ranking.
    pub fn rank(&self, question: &str, documents: Vec<TableDocument>) -> TriageOutcome {
        let mut scored: Vec<CandidateResult> = documents
            .into_par_iter()
            .map(|document| {
                let score = self.score(question, &document);
                CandidateResult::new(document, score)
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));

        let top: Vec<CandidateResult> = scored
            .iter()
            .take(self.config.triage_top_n)
            .cloned()
            .collect();
        debug!(
            candidates = scored.len(),
            survivors = top.len(),
            "triage ranking complete"
        );

        TriageOutcome { top, all: scored }
    }

    fn score(&self, question: &str, document: &TableDocument) -> i64 {
        let prompt = prompts::triage_score(question, document);
        match self.generator.generate(&prompt, ModelTier::Fast) {
            Ok(reply) => extract::first_integer(&reply).unwrap_or(0),
            Err(e) => {
                warn!(
                    identity = %document.identity(),
                    error = %e,
                    "triage scoring call failed, using heuristic"
                );
                heuristic_score(question, document, self.config)
            }
        }
    }
}

/// Deterministic fallback confidence: token overlap plus small fixed
/// boosts for anchor terms and the anchor dataset. Always in [0, 100].
pub fn heuristic_score(question: &str, document: &TableDocument, config: &RankingConfig) -> i64 {
    let question_lower = question.to_lowercase();
    let text = format!(
        "{} {} {} {}",
        document.dataset_name,
        document.table_name.as_deref().unwrap_or(""),
        document.dataset_description,
        document.table_description.as_deref().unwrap_or(""),
    )
    .to_lowercase();

    let mut score = 0i64;
    if question_lower
        .split_whitespace()
        .any(|token| text.contains(token))
    {
        score += 30;
    }
    for term in &config.anchor_terms {
        let term = term.to_lowercase();
        if question_lower.contains(&term) && text.contains(&term) {
            score += 30;
        }
    }
    if document.dataset_name == config.anchor_dataset {
        score += 20;
    }
    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(dataset: &str, table: &str, description: &str) -> TableDocument {
        TableDocument {
            id: None,
            dataset_name: dataset.into(),
            dataset_description: String::new(),
            table_name: Some(table.into()),
            table_description: Some(description.into()),
            other_parameters: vec![],
            embedding: None,
            metadata: None,
        }
    }

    #[test]
    fn heuristic_rewards_overlap_and_anchors() {
        let config = RankingConfig::default();
        let gdp = doc("NIPA", "T10101", "Real gross domestic product GDP");
        let score = heuristic_score("what is US GDP", &gdp, &config);
        // overlap + gdp anchor term + anchor dataset
        assert_eq!(score, 80);

        let unrelated = doc("ITA", "T1", "Trade in services");
        assert_eq!(heuristic_score("zzz qqq", &unrelated, &config), 0);
    }

    #[test]
    fn heuristic_handles_empty_inputs() {
        let config = RankingConfig::default();
        let empty = doc("", "", "");
        let score = heuristic_score("", &empty, &config);
        assert!((0..=100).contains(&score));
    }
}
