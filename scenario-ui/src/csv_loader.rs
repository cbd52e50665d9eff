//! CSV loader for batches of scenario comparisons.
//!
//! ## CSV Format
//!
//! One row per comparison. Every column other than `label` is a form field key
//! (`<scenario>.<field>`, see [`FormField`]); column order does not matter.
//! Cells hold the same text a user would type into the form, so percentages
//! are written as `10` for 10 %. Empty cells, and fields with no column at
//! all, fall back to the defaults when the row is resolved.
//!
//! | Column | Required | Notes |
//! |--------|----------|-------|
//! | `label` | no | Name of the comparison; defaults to `row N` |
//! | `investment.initial_amount` | no | decimal |
//! | `investment.annual_return_pct` | no | percent |
//! | `investment.period_years` | no | years, shared by all scenarios |
//! | `renovate_to_live.*` | no | `property_value`, `renovation_cost`, `monthly_condo_fee`, `annual_iptu`, `annual_maintenance`, `appreciation_pct`, `period_years` |
//! | `renovate_to_rent.*` | no | `monthly_rent`, `period_years` |
//! | `current_home.*` | no | `property_value`, `annual_iptu`, `annual_maintenance`, `renovation_cost`, `appreciation_pct`, `comparable_monthly_rent`, `period_years` |
//!
//! ### Example
//!
//! ```csv
//! label,investment.initial_amount,investment.annual_return_pct,investment.period_years,renovate_to_rent.monthly_rent
//! baseline,,,,
//! cautious,100000,6,15,1500
//! ```
use std::{collections::BTreeMap, path::Path};

use scenario_core::{ProjectionResults, ScenarioInputs, project};
use tracing::debug;

use crate::models::{FieldKeyError, FormField, ScenarioForm};

/// Header of the optional column naming each comparison.
pub const LABEL_COLUMN: &str = "label";

/// One comparison read from a batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    pub label: String,
    pub form: ScenarioForm,
}

impl BatchRow {
    /// Resolves the row against `defaults` and projects it.
    pub fn project(
        &self,
        defaults: &ScenarioInputs,
    ) -> ProjectionResults {
        project(&self.form.resolve(defaults))
    }
}

/// Errors that can occur while loading batch CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV parsing failed (bad structure, ragged rows, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A header is neither `label` nor a known field key.
    #[error("unrecognised column '{column}': {source}")]
    UnknownColumn {
        column: String,
        #[source]
        source: FieldKeyError,
    },

    /// Two headers name the same field.
    #[error("column '{0}' appears more than once")]
    DuplicateColumn(String),

    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Checks every header up front so a bad column is reported once, not per row.
fn validate_headers(headers: &csv::StringRecord) -> Result<(), CsvLoadError> {
    let mut seen = Vec::with_capacity(headers.len());
    for header in headers.iter() {
        if header != LABEL_COLUMN {
            header
                .parse::<FormField>()
                .map_err(|source| CsvLoadError::UnknownColumn {
                    column: header.to_string(),
                    source,
                })?;
        }
        if seen.contains(&header) {
            return Err(CsvLoadError::DuplicateColumn(header.to_string()));
        }
        seen.push(header);
    }
    Ok(())
}

/// Builds the form for one row. `row_number` is 1-based.
fn convert_row(
    row: BTreeMap<String, String>,
    row_number: usize,
) -> BatchRow {
    let mut label = None;
    let mut form = ScenarioForm::new();

    for (column, value) in row {
        if column == LABEL_COLUMN {
            label = Some(value).filter(|v| !v.is_empty());
        } else if let Ok(field) = column.parse::<FormField>() {
            form = form.update_field(field, value);
        }
    }

    BatchRow {
        label: label.unwrap_or_else(|| format!("row {row_number}")),
        form,
    }
}

/// Parse CSV text and return one [`BatchRow`] per data row, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::UnknownColumn`] or [`CsvLoadError::DuplicateColumn`] for
///   a bad header.
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid.
pub fn load_from_str(input: &str) -> Result<Vec<BatchRow>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    validate_headers(reader.headers()?)?;

    let rows = reader
        .deserialize::<BTreeMap<String, String>>()
        .enumerate()
        .map(|(idx, result)| Ok(convert_row(result?, idx + 1)))
        .collect::<Result<Vec<_>, CsvLoadError>>()?;

    debug!(rows = rows.len(), "loaded batch rows");
    Ok(rows)
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<BatchRow>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}
