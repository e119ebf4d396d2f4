// Dashboard domain model
use super::panel::PanelView;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDashboard {
    pub title: String,
    pub company_name: String,
    pub user_name: String,
    pub logo: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub generated_at: DateTime<Utc>,
    pub panels: Vec<PanelView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSkeleton {
    pub id: String,
    pub label: String,
    pub description: String,
    pub icon: String,
    pub placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSkeleton {
    pub title: String,
    pub panels: Vec<PanelSkeleton>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEvent {
    pub total_panels: usize,
    pub duration_ms: u64,
}

/// Messages of the progressive dashboard stream, in send order:
/// one skeleton, one update per panel, one completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum StreamMessage {
    Skeleton(DashboardSkeleton),
    PanelUpdate(PanelView),
    Complete(CompletionEvent),
}
