// Streaming dashboard service - progressive loading, skeleton first
use crate::application::dashboard_service::{render_resolved, DashboardService};
use crate::domain::dashboard::{CompletionEvent, DashboardSkeleton, PanelSkeleton, StreamMessage};
use std::time::Instant;
use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 100;

#[derive(Clone)]
pub struct StreamingDashboardService {
    dashboard: DashboardService,
}

impl StreamingDashboardService {
    pub fn new(dashboard: DashboardService) -> Self {
        Self { dashboard }
    }

    pub fn stream_dashboard(&self) -> mpsc::Receiver<StreamMessage> {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let start_time = Instant::now();

        // 1. Resolve once; the skeleton and every update come from the same pass
        let panels = self.dashboard.compose();
        let skeleton = DashboardSkeleton {
            title: self.dashboard.config().title.clone(),
            panels: panels
                .iter()
                .map(|p| PanelSkeleton {
                    id: p.id.clone(),
                    label: p.tab.label.clone(),
                    description: p.tab.description.clone(),
                    icon: p.tab.icon.render(),
                    placeholder: p.is_placeholder(),
                })
                .collect(),
        };
        let total_panels = panels.len();

        let config = self.dashboard.config().clone();
        let data = self.dashboard.data().clone();

        tokio::spawn(async move {
            if tx.send(StreamMessage::Skeleton(skeleton)).await.is_err() {
                tracing::debug!("Dashboard stream closed before skeleton was sent");
                return;
            }

            // 2. One task per panel; updates arrive in completion order
            let handles: Vec<_> = panels
                .into_iter()
                .map(|panel| {
                    let tx = tx.clone();
                    let config = config.clone();
                    let data = data.clone();
                    tokio::spawn(async move {
                        let view = render_resolved(&config, &data, &panel);
                        let _ = tx.send(StreamMessage::PanelUpdate(view)).await;
                    })
                })
                .collect();

            for result in futures::future::join_all(handles).await {
                if let Err(e) = result {
                    tracing::error!("Panel render task failed: {}", e);
                }
            }

            // 3. Completion once every panel task has finished
            let complete = CompletionEvent {
                total_panels,
                duration_ms: start_time.elapsed().as_millis() as u64,
            };
            let _ = tx.send(StreamMessage::Complete(complete)).await;
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::registry::ComponentRegistry;
    use crate::application::renderable::{RenderContext, RenderableUnit};
    use crate::domain::app_config::{AppConfig, DashboardConfig, Features, TabConfig};
    use crate::domain::custom_data::CustomData;
    use crate::domain::icon::Icon;
    use crate::domain::panel::{Block, PanelStatus};
    use std::collections::{BTreeMap, HashSet};
    use std::sync::Arc;

    struct Static;

    impl RenderableUnit for Static {
        fn render(&self, ctx: &RenderContext<'_>) -> anyhow::Result<Vec<Block>> {
            Ok(vec![Block::text(ctx.tab.id.clone())])
        }
    }

    struct Broken;

    impl RenderableUnit for Broken {
        fn render(&self, _ctx: &RenderContext<'_>) -> anyhow::Result<Vec<Block>> {
            anyhow::bail!("source unavailable")
        }
    }

    fn service() -> StreamingDashboardService {
        service_with(|_| {})
    }

    fn service_with(extra: impl FnOnce(&mut ComponentRegistry)) -> StreamingDashboardService {
        let tabs = ["one", "two", "three"]
            .iter()
            .map(|id| TabConfig::new(*id, *id, "", Icon::default()))
            .collect();
        let config = AppConfig {
            title: "Stream".to_string(),
            company_name: "Acme".to_string(),
            logo: String::new(),
            primary_color: "#000".to_string(),
            secondary_color: "#fff".to_string(),
            user_name: String::new(),
            dashboard: DashboardConfig::new(tabs, BTreeMap::new()).unwrap(),
            analytics: Default::default(),
            clients: Vec::new(),
            features: Features::default(),
        };
        let mut registry = ComponentRegistry::new();
        registry.register_unit("one", Static);
        registry.register_unit("three", Static);
        extra(&mut registry);

        StreamingDashboardService::new(DashboardService::new(
            Arc::new(config),
            Arc::new(registry),
            Arc::new(CustomData::new()),
        ))
    }

    #[tokio::test]
    async fn test_stream_sends_skeleton_updates_then_completion() {
        let mut rx = service().stream_dashboard();

        let mut messages = Vec::new();
        while let Some(msg) = rx.recv().await {
            messages.push(msg);
        }

        assert_eq!(messages.len(), 5);

        match &messages[0] {
            StreamMessage::Skeleton(skeleton) => {
                let ids: Vec<(&str, bool)> = skeleton
                    .panels
                    .iter()
                    .map(|p| (p.id.as_str(), p.placeholder))
                    .collect();
                assert_eq!(ids, vec![("one", false), ("two", true), ("three", false)]);
            }
            other => panic!("expected skeleton first, got {:?}", other),
        }

        let updated: HashSet<(String, PanelStatus)> = messages[1..4]
            .iter()
            .map(|m| match m {
                StreamMessage::PanelUpdate(view) => (view.id.clone(), view.status),
                other => panic!("expected panel update, got {:?}", other),
            })
            .collect();
        assert!(updated.contains(&("one".to_string(), PanelStatus::Ready)));
        assert!(updated.contains(&("two".to_string(), PanelStatus::Placeholder)));
        assert!(updated.contains(&("three".to_string(), PanelStatus::Ready)));

        assert!(matches!(
            &messages[4],
            StreamMessage::Complete(CompletionEvent { total_panels: 3, .. })
        ));
    }

    #[tokio::test]
    async fn test_failing_panel_streams_as_failed_update() {
        let mut rx = service_with(|registry| registry.register_unit("three", Broken)).stream_dashboard();

        let mut messages = Vec::new();
        while let Some(msg) = rx.recv().await {
            messages.push(msg);
        }

        assert_eq!(messages.len(), 5);
        let failed: Vec<&str> = messages
            .iter()
            .filter_map(|m| match m {
                StreamMessage::PanelUpdate(view) if view.status == PanelStatus::Failed => Some(view.id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(failed, vec!["three"]);
        assert!(matches!(messages.last(), Some(StreamMessage::Complete(_))));
    }
}
