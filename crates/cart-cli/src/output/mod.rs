use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

use table::{TableOptions, render_table};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_value_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_value_table(value: &Value) -> String {
    let options = TableOptions::from_env();
    match value {
        Value::Array(items) => render_array_table(items, options),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            render_table(&headers, &rows, options)
        }
        scalar => render_table(&["value"], &[vec![value_to_cell(scalar)]], options),
    }
}

/// Render an array of objects with one column per key, in first-seen order.
pub fn render_array_table(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return render_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    render_table(&header_refs, &rows, options)
}

pub fn value_to_cell(value: &Value) -> String {
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
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        keyword: &'static str,
        factor_kg: f64,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            keyword: "rice",
            factor_kg: 3.7,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["keyword"], "rice");
        assert_eq!(parsed["factor_kg"], 3.7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            keyword: "rice",
            factor_kg: 3.7,
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_array_uses_field_columns() {
        let values = vec![
            Example {
                keyword: "beef",
                factor_kg: 50.0,
            },
            Example {
                keyword: "lamb",
                factor_kg: 39.2,
            },
        ];
        let out = render(&values, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        assert!(header.contains("keyword"));
        assert!(header.contains("factor_kg"));
        assert!(out.contains("lamb"));
    }

    #[test]
    fn table_render_for_empty_array() {
        let values: Vec<Example> = Vec::new();
        let out = render(&values, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
