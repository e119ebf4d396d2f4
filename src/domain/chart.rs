// Chart definition and normalized chart domain models
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One data row: field name to value. Rows in a chart need not share keys.
pub type DataRow = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartType {
    Pie,
    Line,
    Bar,
    /// Any type name this build does not know how to interpret
    Other(String),
}

impl ChartType {
    pub fn as_str(&self) -> &str {
        match self {
            ChartType::Pie => "pie",
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Other(name) => name,
        }
    }
}

impl From<String> for ChartType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "pie" => ChartType::Pie,
            "line" => ChartType::Line,
            "bar" => ChartType::Bar,
            _ => ChartType::Other(name),
        }
    }
}

impl From<&str> for ChartType {
    fn from(name: &str) -> Self {
        ChartType::from(name.to_string())
    }
}

impl From<ChartType> for String {
    fn from(kind: ChartType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartType,
    #[serde(default)]
    pub data_keys: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub data: Vec<DataRow>,
    /// Field used as the x-axis (line/bar) or segment name (pie) instead of inferring it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_key: Option<String>,
}

impl ChartConfig {
    pub fn new(kind: impl Into<ChartType>, data_keys: Vec<String>, colors: Vec<String>, data: Vec<DataRow>) -> Self {
        Self {
            kind: kind.into(),
            data_keys,
            colors,
            data,
            category_key: None,
        }
    }

    pub fn with_category_key(mut self, key: impl Into<String>) -> Self {
        self.category_key = Some(key.into());
        self
    }
}

/// Chart kinds a renderer can draw once a definition has been normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSpec {
    pub key: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRow {
    pub category: String,
    /// One entry per series, `None` where the row has no numeric value for it
    pub values: Vec<Option<f64>>,
    /// Per-row color, only set for pie segments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedChart {
    pub kind: ChartKind,
    pub series: Vec<SeriesSpec>,
    pub rows: Vec<NormalizedRow>,
}

impl NormalizedChart {
    pub fn data_keys(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.key.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_type_keeps_unknown_names() {
        assert_eq!(ChartType::from("pie"), ChartType::Pie);
        assert_eq!(ChartType::from("bar"), ChartType::Bar);
        assert_eq!(
            ChartType::from("quadrant"),
            ChartType::Other("quadrant".to_string())
        );
        assert_eq!(ChartType::from("quadrant").to_string(), "quadrant");
    }

    #[test]
    fn test_chart_config_deserializes_camel_case() {
        let chart: ChartConfig = serde_json::from_str(
            r##"{"type":"line","dataKeys":["proposals"],"colors":["#4F46E5"],
                "data":[{"month":"Jan","proposals":10}]}"##,
        )
        .unwrap();

        assert_eq!(chart.kind, ChartType::Line);
        assert_eq!(chart.data_keys, vec!["proposals"]);
        assert_eq!(chart.data.len(), 1);
        assert!(chart.category_key.is_none());
    }
}
