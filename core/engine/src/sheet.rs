//! FILENAME: core/engine/src/sheet.rs
//! PURPOSE: Builds a sheet from tokenized rows and evaluates it.
//! CONTEXT: Input arrives already split into fields with whitespace removed.
//! The header supplies the column labels; each data row starts with its row
//! label followed by exactly one cell text per column. Construction fails
//! on the first malformed row or cell; nothing is evaluated until every
//! row has been parsed, so forward references to later rows are fine.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{SheetError, SheetResult};
use crate::evaluator::Evaluator;
use crate::formula::parse_formula;
use crate::grid::Grid;
use crate::schema::Schema;

/// A parsed, not yet evaluated sheet.
#[derive(Debug, Clone)]
pub struct Sheet {
    schema: Schema,
    grid: Grid,
    /// Row labels as written in the input, for display.
    row_labels: Vec<String>,
}

impl Sheet {
    /// Builds a sheet from the column labels (without the corner field) and
    /// the data rows (row label first).
    pub fn build<C, R, F>(columns: &[C], rows: &[R]) -> SheetResult<Self>
    where
        C: AsRef<str>,
        R: AsRef<[F]>,
        F: AsRef<str>,
    {
        let mut schema = Schema::new();
        for column in columns {
            schema.register_column(column.as_ref())?;
        }

        let width = schema.column_count();
        let mut grid = Grid::new(width);
        let mut row_labels = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let Some((label_field, fields)) = row.as_ref().split_first() else {
                return Err(SheetError::EmptyRow { index: index + 1 });
            };
            let label_text = label_field.as_ref();
            let label = parser::parse_row_label(label_text)
                .map_err(|_| SheetError::InvalidRowLabel(label_text.to_string()))?;

            if fields.len() != width {
                return Err(SheetError::FieldCount {
                    row: label_text.to_string(),
                    expected: width,
                    found: fields.len(),
                });
            }
            schema.register_row(label)?;

            let cells = fields
                .iter()
                .zip(schema.column_labels())
                .map(|(text, column)| {
                    parse_formula(text.as_ref(), &schema)
                        .map(Cell::from)
                        .map_err(|e| e.in_cell(format!("{}{}", column, label_text)))
                })
                .collect::<SheetResult<Vec<_>>>()?;

            grid.push_row(cells)?;
            row_labels.push(label_text.to_string());
        }

        log::debug!(
            target: "SCHEMA",
            "built sheet: {} rows x {} columns, {} formulas",
            grid.rows(),
            grid.cols(),
            grid.pending_count()
        );

        Ok(Sheet {
            schema,
            grid,
            row_labels,
        })
    }

    /// Builds a sheet from raw records where the first record is the header
    /// line, corner field included.
    pub fn from_records<R, F>(records: &[R]) -> SheetResult<Self>
    where
        R: AsRef<[F]>,
        F: AsRef<str>,
    {
        let Some((header, rows)) = records.split_first() else {
            return Err(SheetError::MissingHeader);
        };
        let columns = header.as_ref().get(1..).unwrap_or_default();
        Self::build::<F, R, F>(columns, rows)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// An evaluator over this sheet's grid, for resolving individual cells.
    pub fn evaluator(&mut self) -> SheetResult<Evaluator<'_>> {
        Evaluator::new(&mut self.grid, &self.schema)
    }

    /// Resolves every cell in row-major order.
    pub fn evaluate(mut self) -> SheetResult<ResolvedSheet> {
        let values = self.evaluator()?.resolve_all()?;
        let columns = self.schema.column_labels().to_vec();
        let rows = self
            .row_labels
            .into_iter()
            .zip(values)
            .map(|(label, values)| ResolvedRow { label, values })
            .collect();
        Ok(ResolvedSheet { columns, rows })
    }
}

/// The fully evaluated grid together with its labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSheet {
    pub columns: Vec<String>,
    pub rows: Vec<ResolvedRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRow {
    pub label: String,
    /// Non-finite values are written as the strings "inf", "-inf" and "nan".
    #[serde(with = "number_list")]
    pub values: Vec<f64>,
}

impl ResolvedSheet {
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.values.get(col)).copied()
    }

    /// Looks a row up by its label as written in the input.
    pub fn row(&self, label: &str) -> Option<&ResolvedRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

/// JSON has no literal for infinities or NaN, so those values are written as
/// the text the table renderer prints for them.
mod number_list {
    use serde::de::Error as _;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::number_format::format_number;

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            if value.is_finite() {
                seq.serialize_element(value)?;
            } else {
                seq.serialize_element(&format_number(*value))?;
            }
        }
        seq.end()
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Finite(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        Vec::<Number>::deserialize(deserializer)?
            .into_iter()
            .map(|number| match number {
                Number::Finite(v) => Ok(v),
                Number::Text(text) => match text.as_str() {
                    "inf" => Ok(f64::INFINITY),
                    "-inf" => Ok(f64::NEG_INFINITY),
                    "nan" => Ok(f64::NAN),
                    _ => Err(D::Error::custom(format!("invalid cell value `{}`", text))),
                },
            })
            .collect()
    }
}
