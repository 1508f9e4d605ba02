use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_rows(&items)),
        Value::Object(map) => {
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(render_aligned(&["key", "value"], &rows))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    if headers.is_empty() {
        return items.iter().map(value_to_cell).collect::<Vec<_>>().join("\n");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    render_aligned(&header_refs, &rows)
}

fn render_aligned(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| h.len()).collect::<Vec<_>>();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers.iter().map(|h| (*h).to_string()), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(format_row(row.iter().cloned(), &widths));
    }
    lines.join("\n")
}

fn format_row(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Sample {
        email: String,
        authenticated: bool,
    }

    fn sample() -> Sample {
        Sample {
            email: "student@example.com".into(),
            authenticated: true,
        }
    }

    #[test]
    fn json_renders_pretty() {
        let rendered = render(&sample(), OutputFormat::Json).expect("render");
        assert!(rendered.contains("\"authenticated\": true"));
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn raw_renders_compact() {
        let rendered = render(&sample(), OutputFormat::Raw).expect("render");
        assert_eq!(
            rendered,
            r#"{"email":"student@example.com","authenticated":true}"#
        );
    }

    #[test]
    fn table_renders_object_as_sorted_key_value_rows() {
        let rendered = render(&sample(), OutputFormat::Table).expect("render");
        let lines = rendered.lines().collect::<Vec<_>>();
        assert!(lines[0].starts_with("key"));
        assert!(lines[2].starts_with("authenticated"));
        assert!(lines[3].starts_with("email"));
    }

    #[test]
    fn table_renders_array_with_union_of_columns() {
        let items = vec![
            serde_json::json!({"role": "student", "email": "student@example.com"}),
            serde_json::json!({"role": "employer"}),
        ];
        let rendered = render(&items, OutputFormat::Table).expect("render");
        assert!(rendered.contains("role"));
        assert!(rendered.lines().count() >= 4);
        assert!(rendered.contains('-'), "missing cells render as a dash");
    }

    #[test]
    fn table_renders_empty_array_placeholder() {
        let items: Vec<serde_json::Value> = Vec::new();
        let rendered = render(&items, OutputFormat::Table).expect("render");
        assert_eq!(rendered, "(no rows)");
    }
}
