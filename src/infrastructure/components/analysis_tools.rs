// Analysis tools panel - simulated AI proposal generation
use crate::application::renderable::{ActionOutcome, RenderContext, RenderableUnit, UnitError};
use crate::domain::app_config::AppConfig;
use crate::domain::panel::{ActionButton, Block, Metric};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

pub const GENERATE_PROPOSAL: &str = "generateProposal";

const DEFAULT_GENERATION_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeoData {
    pub traffic: u64,
    pub keywords: u64,
    pub backlinks: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalState {
    Idle,
    Generating,
    Ready(SeoData),
}

pub struct AnalysisTools {
    state: Arc<Mutex<ProposalState>>,
    delay: Duration,
}

impl AnalysisTools {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_GENERATION_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ProposalState::Idle)),
            delay,
        }
    }

    pub fn state(&self) -> ProposalState {
        *lock(&self.state)
    }
}

impl Default for AnalysisTools {
    fn default() -> Self {
        Self::new()
    }
}

// The state is a plain value, so a poisoned lock still holds usable data.
fn lock(state: &Mutex<ProposalState>) -> MutexGuard<'_, ProposalState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl RenderableUnit for AnalysisTools {
    fn render(&self, ctx: &RenderContext<'_>) -> anyhow::Result<Vec<Block>> {
        let features = &ctx.config.features;
        let state = self.state();
        let generating = state == ProposalState::Generating;

        let label = if generating {
            "Generating..."
        } else {
            "Generate AI Proposal"
        };
        let mut blocks = vec![
            Block::heading("Analysis and Proposal Tools"),
            Block::Actions {
                buttons: vec![
                    ActionButton::new(label)
                        .triggers(GENERATE_PROPOSAL)
                        .enabled(features.ai_proposal_generation && !generating),
                ],
            },
        ];

        if !features.ai_proposal_generation {
            blocks.push(Block::info("AI proposal generation is disabled for this workspace"));
        }

        if let ProposalState::Ready(seo) = state {
            blocks.push(Block::heading("SEO Data:"));
            blocks.push(Block::Metrics {
                items: vec![
                    Metric::new("Traffic", seo.traffic),
                    Metric::new("Keywords", seo.keywords),
                    Metric::new("Backlinks", seo.backlinks),
                ],
            });
        }

        if features.seo_data_collection {
            if let Some(metrics) = ctx.data.text_list("seoMetrics") {
                blocks.push(Block::text(format!("Collected metrics: {}", metrics.join(", "))));
            }
        }

        Ok(blocks)
    }

    async fn handle_action(&self, config: &AppConfig, action: &str) -> Result<ActionOutcome, UnitError> {
        if action != GENERATE_PROPOSAL {
            return Err(UnitError::UnsupportedAction(action.to_string()));
        }
        if !config.features.ai_proposal_generation {
            return Err(UnitError::Rejected("AI proposal generation is disabled".to_string()));
        }

        {
            let mut state = lock(&self.state);
            if *state == ProposalState::Generating {
                return Err(UnitError::Rejected("a proposal is already being generated".to_string()));
            }
            *state = ProposalState::Generating;
        }

        let state = self.state.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            *lock(&state) = ProposalState::Ready(SeoData {
                traffic: 10000,
                keywords: 500,
                backlinks: 1000,
            });
            tracing::debug!("Proposal generation finished");
        });

        Ok(ActionOutcome::new("Proposal generation started"))
    }
}
