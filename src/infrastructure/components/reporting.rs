// Reporting panel - summary metrics and configured charts
use crate::application::chart_interpreter;
use crate::application::renderable::{RenderContext, RenderableUnit};
use crate::domain::chart::ChartConfig;
use crate::domain::panel::{Block, Metric};

/// Dashboard charts this panel expects, with their display titles
const DASHBOARD_CHARTS: [(&str, &str); 2] = [
    ("monthlyPerformance", "Performance Graph"),
    ("proposalStatus", "Proposal Status"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposalSummary {
    pub total_proposals: u32,
    pub success_rate_percent: u32,
}

pub struct Reporting {
    summary: ProposalSummary,
}

impl Reporting {
    pub fn new() -> Self {
        Self::with_summary(ProposalSummary {
            total_proposals: 25,
            success_rate_percent: 60,
        })
    }

    pub fn with_summary(summary: ProposalSummary) -> Self {
        Self { summary }
    }
}

impl Default for Reporting {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderableUnit for Reporting {
    fn render(&self, ctx: &RenderContext<'_>) -> anyhow::Result<Vec<Block>> {
        let config = ctx.config;
        if !config.features.reporting {
            return Ok(vec![
                Block::heading("Reporting and Analytics"),
                Block::info("Reporting is disabled for this workspace"),
            ]);
        }

        let mut blocks = vec![
            Block::heading("Reporting and Analytics"),
            Block::heading("Summary Metrics"),
            Block::Metrics {
                items: vec![
                    Metric::new("Total Proposals", self.summary.total_proposals),
                    Metric::new("Success Rate", format!("{}%", self.summary.success_rate_percent)),
                ],
            },
        ];

        for (name, title) in DASHBOARD_CHARTS {
            blocks.push(chart_block(title, name, config.dashboard.chart(name)));
        }

        if config.features.analytics {
            for (name, chart) in &config.analytics.charts {
                blocks.push(chart_block(&humanize(name), name, Some(chart)));
            }
        }

        if let Some(industries) = ctx.data.text_list("industryTypes") {
            let items = industries
                .iter()
                .map(|industry| {
                    let count = config.clients.iter().filter(|c| c.industry == *industry).count();
                    Metric::new(*industry, count)
                })
                .collect();
            blocks.push(Block::heading("Clients by Industry"));
            blocks.push(Block::Metrics { items });
        }

        Ok(blocks)
    }
}

/// A missing or uninterpretable chart only degrades its own block.
fn chart_block(title: &str, name: &str, chart: Option<&ChartConfig>) -> Block {
    let Some(chart) = chart else {
        return Block::warning(format!("Chart unavailable: '{}' is not configured", name));
    };

    match chart_interpreter::normalize(chart) {
        Ok(chart) => Block::Chart {
            title: title.to_string(),
            chart,
        },
        Err(e) => {
            tracing::debug!("Skipping chart '{}': {}", name, e);
            Block::warning(format!("Chart unavailable: {}", e))
        }
    }
}

/// "clientGrowth" -> "Client Growth"
fn humanize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}
