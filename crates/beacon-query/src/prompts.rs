//! Prompt construction for parameter assembly and correction. Replies are
//! raw JSON objects recovered by the `beacon-core` extraction helpers.

use beacon_core::models::{QueryContext, QueryParams};

fn required_list(context: &QueryContext) -> String {
    let required = context.required_parameter_names();
    if required.is_empty() {
        "(none)".to_string()
    } else {
        required.join(", ")
    }
}

/// Build the full parameter set for a fetch from the question and the
/// table-scoped context.
pub fn assemble(question: &str, context: &QueryContext) -> String {
    let context_json =
        serde_json::to_string(context).unwrap_or_else(|_| "{}".to_string());
    format!(
        "You are building a statistics API query.\n\
Given the user's question and the dataset context below, produce the \
parameter map for the data request.\n\
Use ONLY parameter names and values that appear in the context. Never \
invent a parameter or a value.\n\
Required parameters that MUST be present: {}\n\
Return ONLY a raw JSON object mapping parameter names to string values. \
No prose, no code fences.\n\
\n\
Question: {question}\n\
Context: {context_json}\n\
\n\
JSON:",
        required_list(context),
    )
}

/// Repair a parameter set after the API rejected it. The error message and
/// the failing params are part of the prompt; the reply is a full
/// replacement map.
pub fn correct(
    error_message: &str,
    question: &str,
    context: &QueryContext,
    current: &QueryParams,
) -> String {
    let context_json =
        serde_json::to_string(context).unwrap_or_else(|_| "{}".to_string());
    let params_json =
        serde_json::to_string(current).unwrap_or_else(|_| "{}".to_string());
    format!(
        "A statistics API request failed. Fix the parameters.\n\
Use ONLY parameter names and values that appear in the context. Never \
invent a parameter or a value.\n\
Required parameters that MUST be present: {}\n\
Return ONLY a raw JSON object with the complete corrected parameter map. \
No prose, no code fences.\n\
\n\
Question: {question}\n\
Failed Parameters: {params_json}\n\
API Error: {error_message}\n\
Context: {context_json}\n\
\n\
JSON:",
        required_list(context),
    )
}
