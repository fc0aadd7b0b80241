//! FILENAME: app/src/render.rs
//! PURPOSE: Text renderings of a resolved sheet.

use anyhow::Result;
use engine::{format_number, ResolvedSheet};

/// Header line `, A, B` followed by one `label, v1, v2` line per row.
pub fn render_table(sheet: &ResolvedSheet) -> String {
    let mut out = String::new();

    let header: Vec<&str> = std::iter::once("")
        .chain(sheet.columns.iter().map(String::as_str))
        .collect();
    out.push_str(&header.join(", "));
    out.push('\n');

    for row in &sheet.rows {
        let mut fields = Vec::with_capacity(row.values.len() + 1);
        fields.push(row.label.clone());
        fields.extend(row.values.iter().map(|v| format_number(*v)));
        out.push_str(&fields.join(", "));
        out.push('\n');
    }
    out
}

pub fn render_json(sheet: &ResolvedSheet) -> Result<String> {
    let mut json = serde_json::to_string_pretty(sheet)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::ResolvedRow;

    fn sample() -> ResolvedSheet {
        ResolvedSheet {
            columns: vec!["A".to_string(), "B".to_string()],
            rows: vec![
                ResolvedRow {
                    label: "1".to_string(),
                    values: vec![10.0, 15.0],
                },
                ResolvedRow {
                    label: "2".to_string(),
                    values: vec![2.0 / 3.0, -0.5],
                },
            ],
        }
    }

    #[test]
    fn test_table_layout() {
        assert_eq!(render_table(&sample()), ", A, B\n1, 10, 15\n2, 0.666667, -0.5\n");
    }

    #[test]
    fn test_table_without_rows() {
        let sheet = ResolvedSheet {
            columns: vec!["A".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(render_table(&sheet), ", A\n");
    }

    #[test]
    fn test_json_round_trips() {
        let json = render_json(&sample()).unwrap();
        let back: ResolvedSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
