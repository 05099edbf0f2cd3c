use serde::{Deserialize, Serialize};

/// A catalog dataset: unique name, description, and ordered parameters.
///
/// Owned by the read-only catalog. Refreshed wholesale, never mutated in
/// place by pipeline consumers. Field names follow the statistics-API wire
/// format so contexts serialize exactly as the API documents them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "DatasetName")]
    pub name: String,
    #[serde(rename = "DatasetDescription")]
    pub description: String,
    #[serde(rename = "Parameters", default)]
    pub parameters: Vec<Parameter>,
}

impl Dataset {
    /// Look up a parameter by name, case-insensitively.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// One API parameter of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "ParameterName")]
    pub name: String,
    #[serde(rename = "ParameterDescription", default)]
    pub description: String,
    #[serde(rename = "ParameterIsRequiredFlag", default)]
    pub required: bool,
    #[serde(rename = "MultipleAcceptedFlag", default)]
    pub multiple_accepted: bool,
    /// Wildcard value accepted by the API for "all", when one exists.
    #[serde(rename = "AllValue", default, skip_serializing_if = "Option::is_none")]
    pub all_value: Option<String>,
    #[serde(rename = "Values", default)]
    pub values: Vec<ParameterValue>,
}

/// One accepted value of a parameter.
///
/// Union type discriminated by which fields are present: a generic
/// `{Key, Description}` pair, a table-scoped variant carrying the table
/// identifier it belongs to, or one of the synthetic entries a built
/// context may substitute for an enumerated list (year bounds, elision
/// notes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    TableScoped {
        #[serde(rename = "TableName")]
        table_name: String,
        #[serde(rename = "Description", default)]
        description: String,
    },
    Plain {
        #[serde(rename = "Key")]
        key: String,
        #[serde(rename = "Description", default)]
        description: String,
    },
    MinYear {
        #[serde(rename = "MinYear")]
        min_year: String,
    },
    MaxYear {
        #[serde(rename = "MaxYear")]
        max_year: String,
    },
    Note {
        #[serde(rename = "Note")]
        note: String,
    },
}

impl ParameterValue {
    pub fn plain(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Plain {
            key: key.into(),
            description: description.into(),
        }
    }

    pub fn table_scoped(table_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::TableScoped {
            table_name: table_name.into(),
            description: description.into(),
        }
    }

    /// The description text, when this value carries one.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::TableScoped { description, .. } | Self::Plain { description, .. } => {
                Some(description)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_value_discriminates_by_fields() {
        let scoped: ParameterValue =
            serde_json::from_str(r#"{"TableName":"T10101","Description":"GDP"}"#).unwrap();
        assert!(matches!(scoped, ParameterValue::TableScoped { .. }));

        let plain: ParameterValue =
            serde_json::from_str(r#"{"Key":"2020","Description":"2020"}"#).unwrap();
        assert!(matches!(plain, ParameterValue::Plain { .. }));

        let bound: ParameterValue = serde_json::from_str(r#"{"MinYear":"2015"}"#).unwrap();
        assert!(matches!(bound, ParameterValue::MinYear { .. }));
    }

    #[test]
    fn min_year_serializes_to_single_key_object() {
        let v = ParameterValue::MinYear {
            min_year: "2015".into(),
        };
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"MinYear":"2015"}"#);
    }

    #[test]
    fn parameter_lookup_is_case_insensitive() {
        let ds = Dataset {
            name: "NIPA".into(),
            description: String::new(),
            parameters: vec![Parameter {
                name: "TableName".into(),
                description: String::new(),
                required: true,
                multiple_accepted: false,
                all_value: None,
                values: vec![],
            }],
        };
        assert!(ds.parameter("tablename").is_some());
        assert!(ds.parameter("Frequency").is_none());
    }
}
