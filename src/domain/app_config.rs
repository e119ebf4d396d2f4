// Application configuration schema
use super::chart::ChartConfig;
use super::icon::Icon;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Structural problems that make a configuration unusable for composition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("dashboard.tabs must declare at least one tab")]
    EmptyTabs,

    #[error("dashboard.tabs[{index}] has a blank id")]
    BlankTabId { index: usize },

    #[error("dashboard.tabs[{index}] reuses id '{id}' first declared at index {first}")]
    DuplicateTabId { id: String, first: usize, index: usize },

    #[error("invalid configuration: {}", format_all(.0))]
    Multiple(Vec<SchemaError>),
}

fn format_all(errors: &[SchemaError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl SchemaError {
    /// Flattened list of the individual violations
    pub fn violations(&self) -> Vec<&SchemaError> {
        match self {
            SchemaError::Multiple(errors) => errors.iter().flat_map(|e| e.violations()).collect(),
            other => vec![other],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Icon,
}

impl TabConfig {
    pub fn new(id: impl Into<String>, label: impl Into<String>, description: impl Into<String>, icon: Icon) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            icon,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDashboardConfig {
    #[serde(default)]
    tabs: Vec<TabConfig>,
    #[serde(default)]
    charts: BTreeMap<String, ChartConfig>,
}

/// Tabs and charts of the main dashboard. Always holds a non-empty list of uniquely
/// identified tabs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawDashboardConfig")]
pub struct DashboardConfig {
    tabs: Vec<TabConfig>,
    charts: BTreeMap<String, ChartConfig>,
}

impl DashboardConfig {
    pub fn new(tabs: Vec<TabConfig>, charts: BTreeMap<String, ChartConfig>) -> Result<Self, SchemaError> {
        validate_tabs(&tabs)?;
        Ok(Self { tabs, charts })
    }

    pub fn tabs(&self) -> &[TabConfig] {
        &self.tabs
    }

    pub fn tab(&self, id: &str) -> Option<&TabConfig> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn charts(&self) -> &BTreeMap<String, ChartConfig> {
        &self.charts
    }

    pub fn chart(&self, name: &str) -> Option<&ChartConfig> {
        self.charts.get(name)
    }
}

impl TryFrom<RawDashboardConfig> for DashboardConfig {
    type Error = SchemaError;

    fn try_from(raw: RawDashboardConfig) -> Result<Self, Self::Error> {
        DashboardConfig::new(raw.tabs, raw.charts)
    }
}

/// Checks every tab rule and reports all violations at once.
pub fn validate_tabs(tabs: &[TabConfig]) -> Result<(), SchemaError> {
    if tabs.is_empty() {
        return Err(SchemaError::EmptyTabs);
    }

    let mut errors = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::with_capacity(tabs.len());

    for (index, tab) in tabs.iter().enumerate() {
        if tab.id.trim().is_empty() {
            errors.push(SchemaError::BlankTabId { index });
            continue;
        }
        if let Some(&first) = first_seen.get(tab.id.as_str()) {
            errors.push(SchemaError::DuplicateTabId {
                id: tab.id.clone(),
                first,
                index,
            });
            continue;
        }
        first_seen.insert(tab.id.as_str(), index);
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(SchemaError::Multiple(errors)),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub charts: BTreeMap<String, ChartConfig>,
}

impl AnalyticsConfig {
    pub fn chart(&self, name: &str) -> Option<&ChartConfig> {
        self.charts.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: String,
}

/// Feature gates. Missing or unrecognized flags read as disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Features {
    pub data_import: bool,
    pub analytics: bool,
    pub reporting: bool,
    pub templates: bool,
    pub ai_proposal_generation: bool,
    pub seo_data_collection: bool,
}

impl Features {
    pub fn is_enabled(&self, name: &str) -> bool {
        match name {
            "dataImport" => self.data_import,
            "analytics" => self.analytics,
            "reporting" => self.reporting,
            "templates" => self.templates,
            "aiProposalGeneration" => self.ai_proposal_generation,
            "seoDataCollection" => self.seo_data_collection,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub logo: String,
    pub primary_color: String,
    pub secondary_color: String,
    #[serde(default)]
    pub user_name: String,
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub features: Features,
}

impl AppConfig {
    pub fn tabs(&self) -> &[TabConfig] {
        self.dashboard.tabs()
    }
}
