// Composition resolver - turns (schema, registry) into the ordered render list
use crate::application::registry::ComponentRegistry;
use crate::application::renderable::{RenderContext, RenderableUnit};
use crate::domain::app_config::{DashboardConfig, TabConfig};
use crate::domain::panel::Block;
use std::fmt;
use std::sync::Arc;

/// Stand-in for a tab whose id has no registered unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderUnit {
    pub id: String,
    pub label: String,
}

impl PlaceholderUnit {
    pub fn for_tab(tab: &TabConfig) -> Self {
        Self {
            id: tab.id.clone(),
            label: tab.label.clone(),
        }
    }
}

impl RenderableUnit for PlaceholderUnit {
    fn render(&self, _ctx: &RenderContext<'_>) -> anyhow::Result<Vec<Block>> {
        Ok(vec![
            Block::heading(self.label.clone()),
            Block::warning(format!(
                "Panel unavailable: no component is registered for '{}'",
                self.id
            )),
        ])
    }
}

#[derive(Clone)]
pub enum PanelUnit {
    Registered(Arc<dyn RenderableUnit>),
    Placeholder(PlaceholderUnit),
}

impl PanelUnit {
    pub fn as_renderable(&self) -> &dyn RenderableUnit {
        match self {
            PanelUnit::Registered(unit) => unit.as_ref(),
            PanelUnit::Placeholder(placeholder) => placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PanelUnit::Placeholder(_))
    }
}

// Registered units are equal only when they are the same instance.
impl PartialEq for PanelUnit {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PanelUnit::Registered(a), PanelUnit::Registered(b)) => Arc::ptr_eq(a, b),
            (PanelUnit::Placeholder(a), PanelUnit::Placeholder(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for PanelUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelUnit::Registered(unit) => write!(f, "Registered({:p})", Arc::as_ptr(unit)),
            PanelUnit::Placeholder(placeholder) => f.debug_tuple("Placeholder").field(placeholder).finish(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPanel {
    pub id: String,
    pub unit: PanelUnit,
    pub tab: TabConfig,
}

impl ResolvedPanel {
    pub fn is_placeholder(&self) -> bool {
        self.unit.is_placeholder()
    }
}

/// Resolve every tab, in declaration order, against the registry.
///
/// A tab without a registered unit degrades to a [`PlaceholderUnit`]; the miss
/// is logged and the remaining tabs are still resolved. Holds no state, so it
/// can be re-run whenever the configuration or registry changes.
pub fn resolve_composition(dashboard: &DashboardConfig, registry: &ComponentRegistry) -> Vec<ResolvedPanel> {
    dashboard.tabs().iter().map(|tab| resolve_tab(tab, registry)).collect()
}

/// Resolve a single tab the same way [`resolve_composition`] does.
pub fn resolve_tab(tab: &TabConfig, registry: &ComponentRegistry) -> ResolvedPanel {
    let unit = match registry.resolve(&tab.id) {
        Ok(unit) => PanelUnit::Registered(unit),
        Err(e) => {
            tracing::warn!("Rendering placeholder for tab '{}': {}", tab.label, e);
            PanelUnit::Placeholder(PlaceholderUnit::for_tab(tab))
        }
    };

    ResolvedPanel {
        id: tab.id.clone(),
        unit,
        tab: tab.clone(),
    }
}
