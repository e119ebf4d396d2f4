// Chart interpreter - normalizes pie/line/bar definitions into one renderer-agnostic shape
use crate::domain::chart::{ChartConfig, ChartKind, ChartType, DataRow, NormalizedChart, NormalizedRow, SeriesSpec};
use serde_json::Value;

const DEFAULT_PIE_VALUE_KEY: &str = "value";
const DEFAULT_PIE_NAME_KEY: &str = "name";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("unsupported chart type '{0}'")]
    UnsupportedChartType(String),
}

pub fn normalize(chart: &ChartConfig) -> Result<NormalizedChart, ChartError> {
    match &chart.kind {
        ChartType::Pie => Ok(normalize_pie(chart)),
        ChartType::Line => Ok(normalize_cartesian(chart, ChartKind::Line)),
        ChartType::Bar => Ok(normalize_cartesian(chart, ChartKind::Bar)),
        ChartType::Other(name) => Err(ChartError::UnsupportedChartType(name.clone())),
    }
}

/// Color for series or segment `index`, cycling through the palette.
/// An empty palette assigns no color.
pub fn cycle_color(colors: &[String], index: usize) -> Option<String> {
    if colors.is_empty() {
        return None;
    }
    Some(colors[index % colors.len()].clone())
}

fn normalize_pie(chart: &ChartConfig) -> NormalizedChart {
    let value_key = chart
        .data_keys
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_PIE_VALUE_KEY);

    let rows = chart
        .data
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let category = pie_segment_name(row, chart.category_key.as_deref(), value_key)
                .unwrap_or_else(|| format!("#{}", i + 1));
            NormalizedRow {
                category,
                values: vec![row.get(value_key).and_then(numeric)],
                color: cycle_color(&chart.colors, i),
            }
        })
        .collect();

    NormalizedChart {
        kind: ChartKind::Pie,
        series: vec![SeriesSpec {
            key: value_key.to_string(),
            color: cycle_color(&chart.colors, 0),
        }],
        rows,
    }
}

fn pie_segment_name(row: &DataRow, category_key: Option<&str>, value_key: &str) -> Option<String> {
    if let Some(key) = category_key {
        return row.get(key).map(category_label);
    }
    if let Some(name) = row.get(DEFAULT_PIE_NAME_KEY) {
        return Some(category_label(name));
    }
    row.iter()
        .find(|(key, _)| key.as_str() != value_key)
        .map(|(_, value)| category_label(value))
}

fn normalize_cartesian(chart: &ChartConfig, kind: ChartKind) -> NormalizedChart {
    let series = chart
        .data_keys
        .iter()
        .enumerate()
        .map(|(i, key)| SeriesSpec {
            key: key.clone(),
            color: cycle_color(&chart.colors, i),
        })
        .collect();

    // Rows may be sparse, so the category field is looked up per row.
    let rows = chart
        .data
        .iter()
        .map(|row| NormalizedRow {
            category: cartesian_category(row, chart).unwrap_or_default(),
            values: chart
                .data_keys
                .iter()
                .map(|key| row.get(key).and_then(numeric))
                .collect(),
            color: None,
        })
        .collect();

    NormalizedChart { kind, series, rows }
}

fn cartesian_category(row: &DataRow, chart: &ChartConfig) -> Option<String> {
    if let Some(key) = &chart.category_key {
        return row.get(key).map(category_label);
    }
    row.iter()
        .find(|(key, _)| !chart.data_keys.iter().any(|k| k == *key))
        .map(|(_, value)| category_label(value))
}

fn category_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
