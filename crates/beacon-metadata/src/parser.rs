use std::sync::LazyLock;

use regex::Regex;

use beacon_core::models::{StructuredMetadata, TableDocument};

use crate::label::longest_common_substring;
use crate::taxonomy::section_label;

/// Three-part numbering: `Table 1.2.3. ...` or bare `1.2.3 ...`.
static THREE_PART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:Table\s+)?(\d+)\.(\d+)\.(\d+)").unwrap());

/// Two-part numbering with an optional trailing letter: `7.1A ...`.
static TWO_PART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:Table\s+)?(\d+)\.(\d+)([A-Z])?(?:[.\s]|$)").unwrap());

/// The numbering prefix, for marker stripping.
static NUMBER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:Table\s+)?\d+\.\d+(?:\.\d+)?[A-Z]?\.?\s*").unwrap());

/// Literal frequency marker tokens detected anywhere in a name.
const FREQUENCY_MARKERS: [(&str, usize); 3] = [("(A)", 0), ("(Q)", 1), ("(M)", 2)];

/// Remove the numbering prefix and frequency markers from a table
/// description, collapsing the whitespace left behind.
pub fn strip_markers(description: &str) -> String {
    let mut stripped = NUMBER_PREFIX_RE.replace(description, "").into_owned();
    for (marker, _) in FREQUENCY_MARKERS {
        stripped = stripped.replace(marker, " ");
    }
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a table description into structured metadata.
///
/// `siblings` are the descriptions of the other tables in the same dataset;
/// for the three-part form the canonical label is the longest contiguous
/// substring common to the stripped descriptions of every sibling sharing
/// the same section.subsection prefix. The two-part form has one table per
/// prefix, so its stripped remainder is the label directly.
///
/// Returns `None` when the name matches neither numbering scheme.
pub fn parse(description: &str, siblings: &[&str]) -> Option<StructuredMetadata> {
    let (is_annual, is_quarterly, is_monthly) = frequency_flags(description);

    if let Some(caps) = THREE_PART_RE.captures(description) {
        let section: u32 = caps[1].parse().ok()?;
        let subsection: u32 = caps[2].parse().ok()?;
        let table_number: u32 = caps[3].parse().ok()?;

        let cluster = cluster_labels(description, siblings, section, subsection);
        let cluster_refs: Vec<&str> = cluster.iter().map(String::as_str).collect();
        let subsection_label = longest_common_substring(&cluster_refs);

        return Some(StructuredMetadata {
            section,
            subsection,
            sub_subsection: None,
            table_number: Some(table_number),
            is_annual,
            is_quarterly,
            is_monthly,
            section_label: section_label(section),
            subsection_label,
        });
    }

    if let Some(caps) = TWO_PART_RE.captures(description) {
        let section: u32 = caps[1].parse().ok()?;
        let subsection: u32 = caps[2].parse().ok()?;
        let sub_subsection = caps.get(3).and_then(|m| m.as_str().chars().next());

        return Some(StructuredMetadata {
            section,
            subsection,
            sub_subsection,
            table_number: None,
            is_annual,
            is_quarterly,
            is_monthly,
            section_label: section_label(section),
            subsection_label: strip_markers(description),
        });
    }

    None
}

/// Attach structured metadata to every document whose table description is
/// parseable, using the other documents of the same dataset as siblings.
pub fn enrich_documents(documents: &mut [TableDocument]) {
    let descriptions: Vec<(String, Option<String>)> = documents
        .iter()
        .map(|d| (d.dataset_name.clone(), d.table_description.clone()))
        .collect();

    for (i, document) in documents.iter_mut().enumerate() {
        let Some(description) = document.table_description.clone() else {
            continue;
        };
        let siblings: Vec<&str> = descriptions
            .iter()
            .enumerate()
            .filter(|(j, (dataset, desc))| {
                *j != i && *dataset == document.dataset_name && desc.is_some()
            })
            .filter_map(|(_, (_, desc))| desc.as_deref())
            .collect();
        document.metadata = parse(&description, &siblings);
    }
}

fn frequency_flags(description: &str) -> (bool, bool, bool) {
    let mut flags = [false; 3];
    for (marker, slot) in FREQUENCY_MARKERS {
        flags[slot] = description.contains(marker);
    }
    (flags[0], flags[1], flags[2])
}

/// Stripped descriptions of every table in the same section.subsection
/// cluster, the parsed table included.
fn cluster_labels(
    description: &str,
    siblings: &[&str],
    section: u32,
    subsection: u32,
) -> Vec<String> {
    let mut cluster = vec![strip_markers(description)];
    for sibling in siblings {
        if let Some(caps) = THREE_PART_RE.captures(sibling) {
            let same = caps[1].parse() == Ok(section) && caps[2].parse() == Ok(subsection);
            if same {
                cluster.push(strip_markers(sibling));
            }
        }
    }
    cluster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_part_form_with_frequency_markers() {
        let meta = parse("Table 1.2.3. Foo Bar (A) (Q)", &[]).unwrap();
        assert_eq!(meta.section, 1);
        assert_eq!(meta.subsection, 2);
        assert_eq!(meta.table_number, Some(3));
        assert!(meta.is_annual);
        assert!(meta.is_quarterly);
        assert!(!meta.is_monthly);
        assert_eq!(meta.section_label, "Domestic Product and Income");
        assert_eq!(meta.subsection_label, "Foo Bar");
    }

    #[test]
    fn two_part_form_with_trailing_letter() {
        let meta = parse("Table 7.1A Selected Aggregates (A)", &[]).unwrap();
        assert_eq!(meta.section, 7);
        assert_eq!(meta.subsection, 1);
        assert_eq!(meta.sub_subsection, Some('A'));
        assert_eq!(meta.table_number, None);
        assert!(meta.is_annual);
        assert_eq!(meta.subsection_label, "Selected Aggregates");
    }

    #[test]
    fn unnumbered_name_yields_none() {
        assert!(parse("Gross Domestic Product by State", &[]).is_none());
        assert!(parse("", &[]).is_none());
    }

    #[test]
    fn cluster_label_is_common_core_of_siblings() {
        let siblings = [
            "Table 1.1.2. Contributions to Percent Change in Real Gross Domestic Product (A) (Q)",
            "Table 1.1.3. Real Gross Domestic Product, Quantity Indexes (A) (Q)",
            // Different subsection, must not join the cluster.
            "Table 1.2.1. Some Unrelated Series (A)",
        ];
        let meta = parse(
            "Table 1.1.1. Percent Change From Preceding Period in Real Gross Domestic Product (A) (Q)",
            &siblings,
        )
        .unwrap();
        assert_eq!(meta.subsection_label, "Real Gross Domestic Product");
    }

    #[test]
    fn generic_section_label_outside_taxonomy() {
        let meta = parse("Table 9.4.1. Whatever (M)", &[]).unwrap();
        assert_eq!(meta.section_label, "Section 9");
        assert!(meta.is_monthly);
    }

    #[test]
    fn strip_markers_removes_prefix_and_frequencies() {
        assert_eq!(strip_markers("Table 1.2.3. Foo Bar (A) (Q)"), "Foo Bar");
        assert_eq!(strip_markers("7.1A Selected Aggregates"), "Selected Aggregates");
        assert_eq!(strip_markers("No numbering here"), "No numbering here");
    }
}
