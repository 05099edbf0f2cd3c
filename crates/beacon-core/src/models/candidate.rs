use serde::{Deserialize, Serialize};

use super::TableDocument;

/// A table document together with a relevance confidence in [0, 100].
///
/// Created fresh per question and discarded after the pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub document: TableDocument,
    /// Confidence score, clamped to [0, 100] at construction.
    pub score: u8,
}

impl CandidateResult {
    /// Build a candidate, clamping any raw score into [0, 100].
    pub fn new(document: TableDocument, raw_score: i64) -> Self {
        Self {
            document,
            score: raw_score.clamp(0, 100) as u8,
        }
    }

    /// Deduplication key, delegated to the document.
    pub fn identity(&self) -> String {
        self.document.identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> TableDocument {
        TableDocument {
            id: None,
            dataset_name: "NIPA".into(),
            dataset_description: String::new(),
            table_name: Some("T10101".into()),
            table_description: None,
            other_parameters: vec![],
            embedding: None,
            metadata: None,
        }
    }

    #[test]
    fn scores_clamp_into_range() {
        assert_eq!(CandidateResult::new(doc(), -5).score, 0);
        assert_eq!(CandidateResult::new(doc(), 42).score, 42);
        assert_eq!(CandidateResult::new(doc(), 250).score, 100);
    }
}
