// Renderable unit trait - the seam between the host and customization components
use crate::domain::app_config::{AppConfig, TabConfig};
use crate::domain::custom_data::CustomData;
use crate::domain::panel::Block;
use async_trait::async_trait;
use serde::Serialize;

/// Everything a unit may read while rendering one panel
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a AppConfig,
    pub data: &'a CustomData,
    pub tab: &'a TabConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionOutcome {
    pub message: String,
}

impl ActionOutcome {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("action '{0}' is not supported by this panel")]
    UnsupportedAction(String),

    /// The action exists but cannot run right now (feature off, already running)
    #[error("action rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait RenderableUnit: Send + Sync {
    /// Produce the panel body. Units may keep private state but must not
    /// mutate the shared configuration.
    fn render(&self, ctx: &RenderContext<'_>) -> anyhow::Result<Vec<Block>>;

    /// Run a named panel action. Long-running work should be spawned so the
    /// caller is never blocked on it.
    async fn handle_action(&self, _config: &AppConfig, action: &str) -> Result<ActionOutcome, UnitError> {
        Err(UnitError::UnsupportedAction(action.to_string()))
    }
}
