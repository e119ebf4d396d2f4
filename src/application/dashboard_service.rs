// Dashboard service - one render pass over the composed panels
use crate::application::chart_interpreter::{self, ChartError};
use crate::application::registry::ComponentRegistry;
use crate::application::renderable::{ActionOutcome, RenderContext, UnitError};
use crate::application::resolver::{resolve_composition, resolve_tab, PanelUnit, ResolvedPanel};
use crate::domain::app_config::AppConfig;
use crate::domain::chart::NormalizedChart;
use crate::domain::custom_data::{CustomData, DataValue};
use crate::domain::dashboard::RenderedDashboard;
use crate::domain::panel::{Block, NoticeLevel, PanelStatus, PanelView};
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("no panel with id '{0}'")]
    UnknownPanel(String),

    #[error("panel '{0}' has no registered component")]
    PanelUnavailable(String),

    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Where a named chart definition lives in the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartScope {
    Dashboard,
    Analytics,
}

impl FromStr for ChartScope {
    type Err = ChartLookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(ChartScope::Dashboard),
            "analytics" => Ok(ChartScope::Analytics),
            other => Err(ChartLookupError::UnknownScope(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartLookupError {
    #[error("unknown chart scope '{0}'")]
    UnknownScope(String),

    #[error("no chart named '{0}'")]
    NotFound(String),

    #[error(transparent)]
    Unsupported(#[from] ChartError),
}

#[derive(Clone)]
pub struct DashboardService {
    config: Arc<AppConfig>,
    registry: Arc<ComponentRegistry>,
    data: Arc<CustomData>,
}

impl DashboardService {
    pub fn new(config: Arc<AppConfig>, registry: Arc<ComponentRegistry>, data: Arc<CustomData>) -> Self {
        Self {
            config,
            registry,
            data,
        }
    }

    pub fn config(&self) -> &Arc<AppConfig> {
        &self.config
    }

    pub fn data(&self) -> &Arc<CustomData> {
        &self.data
    }

    pub fn custom_data(&self, key: &str) -> Option<&DataValue> {
        self.data.get(key)
    }

    /// Resolve the current tabs against the registry. Re-derived on every call.
    pub fn compose(&self) -> Vec<ResolvedPanel> {
        resolve_composition(&self.config.dashboard, &self.registry)
    }

    pub fn render_dashboard(&self) -> RenderedDashboard {
        let panels = self
            .compose()
            .iter()
            .map(|panel| render_resolved(&self.config, &self.data, panel))
            .collect();

        RenderedDashboard {
            title: self.config.title.clone(),
            company_name: self.config.company_name.clone(),
            user_name: self.config.user_name.clone(),
            logo: self.config.logo.clone(),
            primary_color: self.config.primary_color.clone(),
            secondary_color: self.config.secondary_color.clone(),
            generated_at: chrono::Utc::now(),
            panels,
        }
    }

    /// Render one panel, resolving only its own tab.
    pub fn render_panel(&self, id: &str) -> Option<PanelView> {
        let tab = self.config.dashboard.tab(id)?;
        let panel = resolve_tab(tab, &self.registry);
        Some(render_resolved(&self.config, &self.data, &panel))
    }

    pub async fn trigger_action(&self, id: &str, action: &str) -> Result<ActionOutcome, ActionError> {
        if self.config.dashboard.tab(id).is_none() {
            return Err(ActionError::UnknownPanel(id.to_string()));
        }

        let unit = self
            .registry
            .resolve(id)
            .map_err(|_| ActionError::PanelUnavailable(id.to_string()))?;

        tracing::debug!("Dispatching action '{}' to panel '{}'", action, id);
        Ok(unit.handle_action(&self.config, action).await?)
    }

    pub fn chart(&self, scope: ChartScope, name: &str) -> Result<NormalizedChart, ChartLookupError> {
        let chart = match scope {
            ChartScope::Dashboard => self.config.dashboard.chart(name),
            ChartScope::Analytics => self.config.analytics.chart(name),
        }
        .ok_or_else(|| ChartLookupError::NotFound(name.to_string()))?;

        Ok(chart_interpreter::normalize(chart)?)
    }
}

/// Render one resolved panel. A failing unit only affects its own panel.
pub fn render_resolved(config: &AppConfig, data: &CustomData, panel: &ResolvedPanel) -> PanelView {
    let ctx = RenderContext {
        config,
        data,
        tab: &panel.tab,
    };

    let (status, blocks) = match panel.unit.as_renderable().render(&ctx) {
        Ok(blocks) if matches!(panel.unit, PanelUnit::Placeholder(_)) => (PanelStatus::Placeholder, blocks),
        Ok(blocks) => (PanelStatus::Ready, blocks),
        Err(e) => {
            tracing::warn!("Panel '{}' failed to render: {:#}", panel.id, e);
            (
                PanelStatus::Failed,
                vec![
                    Block::heading(panel.tab.label.clone()),
                    Block::Notice {
                        level: NoticeLevel::Error,
                        text: format!("This panel could not be displayed: {}", e),
                    },
                ],
            )
        }
    };

    PanelView {
        id: panel.id.clone(),
        title: panel.tab.label.clone(),
        description: panel.tab.description.clone(),
        icon: panel.tab.icon.render(),
        status,
        blocks,
    }
}
