//! Prompt construction for dataset selection and answer synthesis.

use beacon_core::models::Dataset;

/// Pick the single dataset most likely to hold the answer, or admit none
/// stands out. The reply is validated against the catalog; anything else
/// falls back to broad retrieval.
pub fn select_dataset(question: &str, datasets: &[Dataset]) -> String {
    let listing = datasets
        .iter()
        .map(|d| format!("- {}: {}", d.name, d.description))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "You are routing an economic-data question to a statistics dataset.\n\
Available datasets:\n{listing}\n\
\n\
If exactly one dataset clearly covers the question, return ONLY its name.\n\
If you are unsure, return ONLY the word NONE.\n\
\n\
Question: {question}\n\
\n\
Dataset:"
    )
}

/// Synthesize the final answer, grounded only in the fetched rows.
pub fn answer(question: &str, rows_json: &str) -> String {
    format!(
        "Answer the user's question using ONLY the data rows below.\n\
If the rows do not contain the answer, say so. Do not use outside \
knowledge and do not invent numbers.\n\
Cite the figures you use.\n\
\n\
Question: {question}\n\
Data Rows: {rows_json}\n\
\n\
Answer:"
    )
}
