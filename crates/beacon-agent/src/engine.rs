use tracing::{debug, info, warn};

use beacon_context::ContextBuilder;
use beacon_core::config::BeaconConfig;
use beacon_core::models::{CandidateResult, QueryContext, QueryParams};
use beacon_core::traits::{
    CatalogReader, EmbeddingProvider, HybridSearch, ModelTier, StatisticsFetcher, TextGenerator,
};
use beacon_core::BeaconResult;
use beacon_query::{QueryAssembler, QueryCorrector};
use beacon_retrieval::{CandidateRetriever, FineRanker, Selection, TriageRanker};

use crate::prompts;
use crate::report::{AskReport, FetchStatus};

/// Rows carried into the report. Answer synthesis sees the full fetched
/// row set; only the report is truncated.
const PREVIEW_ROWS: usize = 3;

/// Facade over the whole question pipeline.
///
/// Holds only borrowed ports and configuration; one engine can serve any
/// number of questions, and independent questions never share mutable
/// state.
pub struct AgentEngine<'a> {
    catalog: &'a dyn CatalogReader,
    search: &'a dyn HybridSearch,
    embedder: &'a dyn EmbeddingProvider,
    generator: &'a dyn TextGenerator,
    fetcher: &'a dyn StatisticsFetcher,
    config: &'a BeaconConfig,
}

impl<'a> AgentEngine<'a> {
    pub fn new(
        catalog: &'a dyn CatalogReader,
        search: &'a dyn HybridSearch,
        embedder: &'a dyn EmbeddingProvider,
        generator: &'a dyn TextGenerator,
        fetcher: &'a dyn StatisticsFetcher,
        config: &'a BeaconConfig,
    ) -> Self {
        Self {
            catalog,
            search,
            embedder,
            generator,
            fetcher,
            config,
        }
    }

    /// Answer a question end-to-end: retrieve, rank, build the context,
    /// assemble parameters, fetch (with at most one correction round), and
    /// synthesize an answer from the fetched rows.
    pub fn ask(&self, question: &str) -> BeaconResult<AskReport> {
        info!(question, "question received");

        let Some(selection) = self.retrieve_and_rank(question)? else {
            info!("no usable candidate, returning empty report");
            return Ok(AskReport::empty(question));
        };

        let chosen = selection.top.clone();
        let context = self.build_context(
            &chosen.document.dataset_name,
            chosen.document.table_name.as_deref(),
        )?;
        let params = self.assemble_params(question, &context);

        let mut report = AskReport {
            question: question.to_string(),
            candidates: display_trimmed(&selection.ranked),
            chosen: Some(trim_candidate(&chosen)),
            ties: display_trimmed(&selection.ties),
            context: Some(context.clone()),
            params: Some(params.clone()),
            fetch_status: FetchStatus::NotAttempted,
            error: None,
            corrected_params: None,
            second_error: None,
            data_preview: Vec::new(),
            answer: None,
        };

        match self.fetcher.fetch(&params) {
            Ok(rows) => {
                report.fetch_status = FetchStatus::Fetched;
                report.answer = self.synthesize(question, &rows);
                report.data_preview = preview(rows);
            }
            Err(first) => {
                let message = first.correction_message();
                warn!(error = %message, "fetch failed, running the correction round");
                report.error = Some(message.clone());

                let corrected = self.correct_params(&message, question, &context, &params);
                report.corrected_params = Some(corrected.clone());

                match self.fetcher.fetch(&corrected) {
                    Ok(rows) => {
                        report.fetch_status = FetchStatus::FetchedAfterCorrection;
                        report.answer = self.synthesize(question, &rows);
                        report.data_preview = preview(rows);
                    }
                    Err(second) => {
                        warn!(error = %second, "corrected fetch failed, giving up");
                        report.fetch_status = FetchStatus::Failed;
                        report.second_error = Some(second.to_string());
                    }
                }
            }
        }

        info!(status = ?report.fetch_status, "question pipeline complete");
        Ok(report)
    }

    /// Retrieve candidates (scoped when a dataset can be chosen up front,
    /// broad otherwise) and run both ranking stages.
    pub fn retrieve_and_rank(&self, question: &str) -> BeaconResult<Option<Selection>> {
        let retriever = CandidateRetriever::new(
            self.search,
            self.embedder,
            self.generator,
            &self.config.retrieval,
        );

        let documents = match self.select_dataset(question) {
            Some(dataset) => {
                debug!(dataset = %dataset, "dataset selected, running scoped retrieval");
                retriever.scoped(question, &dataset)
            }
            None => {
                debug!("no dataset selected, running broad retrieval");
                retriever.broad(question)
            }
        };
        if documents.is_empty() {
            return Ok(None);
        }

        let triage = TriageRanker::new(self.generator, &self.config.ranking)
            .rank(question, documents);

        let contexts = ContextBuilder::new(self.catalog, &self.config.context);
        let fine = FineRanker::new(self.generator, &contexts, &self.config.ranking);
        Ok(fine.rank(question, &triage.top)?)
    }

    /// A production (non-eval) context for one dataset/table.
    pub fn build_context(
        &self,
        dataset: &str,
        table: Option<&str>,
    ) -> BeaconResult<QueryContext> {
        let contexts = ContextBuilder::new(self.catalog, &self.config.context);
        Ok(contexts.build(dataset, table, false)?)
    }

    pub fn assemble_params(&self, question: &str, context: &QueryContext) -> QueryParams {
        QueryAssembler::new(self.generator, &self.config.context).assemble(question, context)
    }

    pub fn correct_params(
        &self,
        error_message: &str,
        question: &str,
        context: &QueryContext,
        current: &QueryParams,
    ) -> QueryParams {
        QueryCorrector::new(self.generator, &self.config.context)
            .correct(error_message, question, context, current)
    }

    /// Ask the generator to route the question to one catalog dataset.
    /// Anything that is not an exact catalog name means "no selection".
    fn select_dataset(&self, question: &str) -> Option<String> {
        let datasets = match self.catalog.datasets() {
            Ok(datasets) => datasets,
            Err(e) => {
                warn!(error = %e, "catalog read failed, skipping dataset selection");
                return None;
            }
        };

        let prompt = prompts::select_dataset(question, &datasets);
        let reply = match self.generator.generate(&prompt, ModelTier::Fast) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "dataset selection call failed");
                return None;
            }
        };

        let name = reply.trim().trim_matches('"');
        datasets
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .map(|d| d.name.clone())
    }

    /// Grounded answer synthesis. A generation failure degrades to a
    /// report without an answer, never a pipeline error.
    fn synthesize(&self, question: &str, rows: &[serde_json::Value]) -> Option<String> {
        if rows.is_empty() {
            return None;
        }
        let rows_json = serde_json::to_string(rows).unwrap_or_else(|_| "[]".to_string());
        match self
            .generator
            .generate(&prompts::answer(question, &rows_json), ModelTier::Large)
        {
            Ok(reply) => {
                let answer = reply.trim().to_string();
                (!answer.is_empty()).then_some(answer)
            }
            Err(e) => {
                warn!(error = %e, "answer synthesis failed, returning data without an answer");
                None
            }
        }
    }
}

fn preview(rows: Vec<serde_json::Value>) -> Vec<serde_json::Value> {
    rows.into_iter().take(PREVIEW_ROWS).collect()
}

fn trim_candidate(candidate: &CandidateResult) -> CandidateResult {
    CandidateResult {
        document: candidate.document.for_display(),
        score: candidate.score,
    }
}

fn display_trimmed(candidates: &[CandidateResult]) -> Vec<CandidateResult> {
    candidates.iter().map(trim_candidate).collect()
}
