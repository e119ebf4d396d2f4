// Panel view model - the renderer-agnostic output of a renderable unit
use super::chart::NormalizedChart;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Heading { text: String },
    Text { text: String },
    Actions { buttons: Vec<ActionButton> },
    Table { columns: Vec<String>, rows: Vec<Vec<String>> },
    Metrics { items: Vec<Metric> },
    Chart { title: String, chart: NormalizedChart },
    Notice { level: NoticeLevel, text: String },
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Block::Heading { text: text.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Block::Text { text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Block::Notice {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Block::Notice {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionButton {
    pub label: String,
    /// Action name accepted by the panel, `None` for display-only buttons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub enabled: bool,
}

impl ActionButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
            enabled: true,
        }
    }

    pub fn triggers(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelStatus {
    Ready,
    Placeholder,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub status: PanelStatus,
    pub blocks: Vec<Block>,
}
