use tracing::debug;

use beacon_core::config::ContextConfig;
use beacon_core::errors::CatalogError;
use beacon_core::models::{Parameter, ParameterValue, QueryContext};
use beacon_core::traits::CatalogReader;

/// Builds filtered, minimized query contexts from the catalog.
pub struct ContextBuilder<'a> {
    catalog: &'a dyn CatalogReader,
    config: &'a ContextConfig,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(catalog: &'a dyn CatalogReader, config: &'a ContextConfig) -> Self {
        Self { catalog, config }
    }

    /// Build a context for `dataset_name`, optionally scoped to one table.
    ///
    /// Fails with `CatalogError::DatasetNotFound` when no dataset matches.
    /// Without a table name the result is the dataset deep-copied,
    /// untouched. With one:
    /// 1. When `for_eval`, parameters identifying the table dimension are
    ///    dropped (redundant once a table is chosen) and the oversized
    ///    geographic parameter's values are replaced with a note.
    /// 2. Table-scoped value lists are filtered to the selected table
    ///    (explicit table-name field, or the line-code `[TABLE]`
    ///    description-prefix convention).
    /// 3. A Year parameter collapses to `{MinYear}/{MaxYear}` bounds, but
    ///    only if every value is a plain integer-keyed pair; the collapse
    ///    is all-or-nothing, never partial.
    pub fn build(
        &self,
        dataset_name: &str,
        table_name: Option<&str>,
        for_eval: bool,
    ) -> Result<QueryContext, CatalogError> {
        let dataset = self.catalog.dataset(dataset_name)?;
        let mut context = QueryContext::from_dataset(&dataset);

        let table = match table_name {
            Some(t) if !t.is_empty() => t,
            _ => return Ok(context),
        };

        if for_eval {
            // The table dimension is redundant in eval payloads once a
            // table is already chosen; production param-building keeps it.
            context
                .parameters
                .retain(|p| !self.config.is_table_parameter(&p.name));
        }

        for parameter in &mut context.parameters {
            if for_eval && parameter.name.eq_ignore_ascii_case(&self.config.geo_parameter) {
                elide(parameter, "geographic");
                continue;
            }

            self.filter_table_scoped(parameter, table);

            if parameter
                .name
                .eq_ignore_ascii_case(&self.config.year_parameter)
            {
                collapse_years(parameter);
            }

            if for_eval && parameter.values.len() > self.config.elision_threshold {
                elide(parameter, "oversized");
            }
        }

        context.selected_table = Some(table.to_string());
        debug!(
            dataset = %dataset_name,
            table = %table,
            for_eval,
            parameters = context.parameters.len(),
            "built query context"
        );
        Ok(context)
    }

    /// Keep only the values belonging to the selected table. Parameters
    /// without table-scoped values (and without the line-code convention)
    /// pass through untouched.
    fn filter_table_scoped(&self, parameter: &mut Parameter, table: &str) {
        if parameter
            .name
            .eq_ignore_ascii_case(&self.config.line_code_parameter)
        {
            let prefix = format!("[{table}]");
            parameter.values.retain(|v| {
                v.description()
                    .map(|d| d.trim_start().starts_with(&prefix))
                    .unwrap_or(false)
            });
            return;
        }

        let has_scoped = parameter
            .values
            .iter()
            .any(|v| matches!(v, ParameterValue::TableScoped { .. }));
        if has_scoped {
            parameter.values.retain(
                |v| matches!(v, ParameterValue::TableScoped { table_name, .. } if table_name == table),
            );
        }
    }
}

fn elide(parameter: &mut Parameter, kind: &str) {
    let count = parameter.values.len();
    parameter.values = vec![ParameterValue::Note {
        note: format!(
            "{count} {kind} values elided; query the {} parameter listing for the full set",
            parameter.name
        ),
    }];
}

/// All-or-nothing collapse of an enumerated Year list to min/max bounds.
fn collapse_years(parameter: &mut Parameter) {
    let mut years = Vec::with_capacity(parameter.values.len());
    for value in &parameter.values {
        match value {
            ParameterValue::Plain { key, .. } => match key.trim().parse::<i64>() {
                Ok(year) => years.push(year),
                Err(_) => return,
            },
            _ => return,
        }
    }
    let (Some(&min), Some(&max)) = (years.iter().min(), years.iter().max()) else {
        return;
    };
    parameter.values = vec![
        ParameterValue::MinYear {
            min_year: min.to_string(),
        },
        ParameterValue::MaxYear {
            max_year: max.to_string(),
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_core::models::Parameter;

    fn year_parameter(keys: &[&str]) -> Parameter {
        Parameter {
            name: "Year".into(),
            description: "Year".into(),
            required: false,
            multiple_accepted: true,
            all_value: Some("X".into()),
            values: keys
                .iter()
                .map(|k| ParameterValue::plain(*k, *k))
                .collect(),
        }
    }

    #[test]
    fn collapse_is_all_or_nothing() {
        let mut clean = year_parameter(&["2019", "2020", "2021"]);
        collapse_years(&mut clean);
        assert_eq!(
            clean.values,
            vec![
                ParameterValue::MinYear { min_year: "2019".into() },
                ParameterValue::MaxYear { max_year: "2021".into() },
            ]
        );

        let mut dirty = year_parameter(&["2019", "LAST5", "2021"]);
        let original = dirty.values.clone();
        collapse_years(&mut dirty);
        assert_eq!(dirty.values, original);
    }

    #[test]
    fn empty_year_list_stays_empty() {
        let mut empty = year_parameter(&[]);
        collapse_years(&mut empty);
        assert!(empty.values.is_empty());
    }
}
