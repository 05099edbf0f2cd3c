//! Prompt construction for the scoring, extraction, and classification
//! calls. The generator is constrained to bare integers or raw JSON so the
//! extraction helpers in `beacon-core` can recover the payload.

use beacon_core::models::{QueryContext, TableDocument};

/// Triage relevance assessment: a bare 0-100 confidence.
pub fn triage_score(question: &str, document: &TableDocument) -> String {
    let other_params = if document.other_parameters.is_empty() {
        "(none)".to_string()
    } else {
        document
            .other_parameters
            .iter()
            .map(|p| format!("- {}: {}", p.name, p.description))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "You are a data relevance assessor. A user asks a question and you have a \
dataset (and maybe a table) description plus other parameter metadata.\n\
Rate your confidence that querying this dataset/table will help answer the user's question.\n\
Consider parameter names/descriptions if they are indicative of relevant dimensions or measures.\n\
Return ONLY an integer 0-100. No words, no percent sign.\n\
\n\
Question: {question}\n\
Dataset Name: {}\n\
Table Name: {}\n\
Dataset Description: {}\n\
Table Description: {}\n\
Other Parameters:\n{other_params}\n\
\n\
Confidence (0-100):",
        document.dataset_name,
        document.table_name.as_deref().unwrap_or(""),
        document.dataset_description,
        document.table_description.as_deref().unwrap_or(""),
    )
}

/// Fine-grained assessment over a full query context payload.
pub fn fine_score(question: &str, context: &QueryContext) -> String {
    let context_json =
        serde_json::to_string(context).unwrap_or_else(|_| "{}".to_string());
    format!(
        "You are selecting the single best statistics table to answer a question.\n\
You are given the full parameter context of one candidate table.\n\
Rate your confidence that a query built from this context answers the question.\n\
Return ONLY an integer 0-100. No words, no percent sign.\n\
\n\
Question: {question}\n\
Candidate Context: {context_json}\n\
\n\
Confidence (0-100):"
    )
}

/// Extract the core data item the question asks about, as a short phrase.
pub fn core_data_item(question: &str) -> String {
    format!(
        "Extract the core data item the user is asking about, as a short noun \
phrase suitable for searching a statistics table catalog.\n\
Return ONLY the phrase. No quotes, no prose.\n\
\n\
Question: {question}\n\
\n\
Phrase:"
    )
}

/// Classify the question into section/metric numbers used as narrowing
/// hints. The reply is a raw JSON object; missing or unparsable output
/// simply disables the hint.
pub fn classification(question: &str) -> String {
    format!(
        "Classify this economic-data question against the national-accounts \
table taxonomy.\n\
Return ONLY a raw JSON object (no prose, no code fences) of the form \
{{\"section\": <integer 1-8>, \"metric\": <integer>}}.\n\
Omit a field you are unsure about.\n\
\n\
Question: {question}\n\
\n\
JSON:"
    )
}
