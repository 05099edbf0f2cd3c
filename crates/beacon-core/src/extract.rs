//! Robust extraction of structured content from arbitrary generator output.
//!
//! Generators are asked for a bare integer or a raw JSON object but may wrap
//! the answer in prose or code fences; these helpers pull out the usable
//! part deterministically, leaving the default to the caller.

/// The first balanced JSON object snippet: from the first `{` to the last
/// `}`. Returns `None` when no such span exists.
pub fn first_json_object(text: &str) -> Option<&str> {
    let first = text.find('{')?;
    let last = text.rfind('}')?;
    (last > first).then(|| &text[first..=last])
}

/// Parse the first JSON object found in `text` into a string-to-string
/// map. Scalar values are stringified; arrays of scalars are joined with
/// commas (the multi-value wire convention); anything else is discarded.
/// `None` on any parse failure.
pub fn first_json_string_map(text: &str) -> Option<Vec<(String, String)>> {
    let snippet = first_json_object(text)?;
    let value: serde_json::Value = serde_json::from_str(snippet).ok()?;
    let object = value.as_object()?;
    Some(
        object
            .iter()
            .filter_map(|(k, v)| Some((k.clone(), scalar_string(v)?)))
            .collect(),
    )
}

fn scalar_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s.clone()),
                    serde_json::Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join(","))
        }
        _ => None,
    }
}

/// The first well-formed unsigned integer in `text`: the first contiguous
/// digit run, truncated to three digits to guard against runaway output.
pub fn first_integer(text: &str) -> Option<i64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .take(3)
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_spans_first_to_last_brace() {
        assert_eq!(
            first_json_object(r#"Sure! {"a": {"b": 1}} done"#),
            Some(r#"{"a": {"b": 1}}"#)
        );
        assert_eq!(first_json_object("no braces"), None);
        assert_eq!(first_json_object("}{"), None);
    }

    #[test]
    fn string_map_keeps_strings_and_numbers() {
        let map =
            first_json_string_map(r#"{"DatasetName": "NIPA", "Year": 2020, "nested": {}}"#)
                .unwrap();
        assert!(map.contains(&("DatasetName".into(), "NIPA".into())));
        assert!(map.contains(&("Year".into(), "2020".into())));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn array_values_join_with_commas() {
        let map = first_json_string_map(
            r#"{"Frequency": ["A", "Q"], "Year": [2020, 2021], "bad": [[]], "obj": {}}"#,
        )
        .unwrap();
        assert!(map.contains(&("Frequency".into(), "A,Q".into())));
        assert!(map.contains(&("Year".into(), "2020,2021".into())));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn integer_extraction_is_bounded() {
        assert_eq!(first_integer("Confidence: 85"), Some(85));
        assert_eq!(first_integer("85%"), Some(85));
        assert_eq!(first_integer("123456"), Some(123));
        assert_eq!(first_integer("none"), None);
    }
}
