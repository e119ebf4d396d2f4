// Prospect management panel
use crate::application::renderable::{RenderContext, RenderableUnit};
use crate::domain::panel::{ActionButton, Block};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prospect {
    pub id: u32,
    pub company: String,
    pub status: String,
    pub proposal: String,
}

impl Prospect {
    fn new(id: u32, company: &str, status: &str, proposal: &str) -> Self {
        Self {
            id,
            company: company.to_string(),
            status: status.to_string(),
            proposal: proposal.to_string(),
        }
    }
}

pub struct ProspectManagement {
    prospects: Vec<Prospect>,
}

impl ProspectManagement {
    pub fn new() -> Self {
        Self {
            prospects: vec![
                Prospect::new(1, "TechCorp", "Active", "Pending"),
                Prospect::new(2, "GreenEnergy", "New Lead", "Not Started"),
                Prospect::new(3, "DataSystems", "Negotiation", "Signed"),
            ],
        }
    }

    pub fn with_prospects(prospects: Vec<Prospect>) -> Self {
        Self { prospects }
    }
}

impl Default for ProspectManagement {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderableUnit for ProspectManagement {
    fn render(&self, ctx: &RenderContext<'_>) -> anyhow::Result<Vec<Block>> {
        let features = &ctx.config.features;
        let mut blocks = vec![
            Block::heading("Prospect Management"),
            Block::Actions {
                buttons: vec![
                    ActionButton::new("New Proposal").enabled(features.templates),
                    ActionButton::new("Quick Start").enabled(features.data_import),
                ],
            },
            Block::Table {
                columns: ["Company", "Status", "Proposal"]
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
                rows: self
                    .prospects
                    .iter()
                    .map(|p| vec![p.company.clone(), p.status.clone(), p.proposal.clone()])
                    .collect(),
            },
        ];

        // Row actions follow the table in row order. They are display-only.
        blocks.extend(self.prospects.iter().map(|p| Block::Actions {
            buttons: vec![
                ActionButton::new(format!("Edit {}", p.company)),
                ActionButton::new(format!("Delete {}", p.company)),
            ],
        }));

        if let Some(statuses) = ctx.data.text_list("proposalStatuses") {
            blocks.push(Block::text(format!("Proposal statuses: {}", statuses.join(", "))));
        }

        if !ctx.config.clients.is_empty() {
            blocks.push(Block::Table {
                columns: vec!["Client".to_string(), "Industry".to_string()],
                rows: ctx
                    .config
                    .clients
                    .iter()
                    .map(|c| vec![c.name.clone(), c.industry.clone()])
                    .collect(),
            });
        }

        Ok(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::custom_data::CustomData;
    use crate::infrastructure::components::tests::sample_config;

    #[test]
    fn test_renders_prospect_table_and_gated_buttons() {
        let mut config = sample_config();
        config.features.templates = false;
        let mut data = CustomData::new();
        data.insert("proposalStatuses", vec!["Pending", "Active", "Closed"]);
        let tab = config.tabs()[0].clone();
        let ctx = RenderContext {
            config: &config,
            data: &data,
            tab: &tab,
        };

        let blocks = ProspectManagement::new().render(&ctx).unwrap();

        match &blocks[1] {
            Block::Actions { buttons } => {
                assert_eq!(buttons[0].label, "New Proposal");
                assert!(!buttons[0].enabled);
                assert!(buttons[1].enabled);
            }
            other => panic!("expected actions, got {:?}", other),
        }
        match &blocks[2] {
            Block::Table { rows, .. } => {
                assert_eq!(rows.len(), 3);
                assert_eq!(rows[1][0], "GreenEnergy");
                assert_eq!(rows[1][2], "Not Started");
            }
            other => panic!("expected table, got {:?}", other),
        }
        assert!(blocks.contains(&Block::text("Proposal statuses: Pending, Active, Closed")));
    }

    #[test]
    fn test_each_prospect_row_gets_edit_and_delete_buttons() {
        let config = sample_config();
        let data = CustomData::new();
        let tab = config.tabs()[0].clone();
        let ctx = RenderContext {
            config: &config,
            data: &data,
            tab: &tab,
        };

        let blocks = ProspectManagement::new().render(&ctx).unwrap();

        let row_labels: Vec<Vec<&str>> = blocks[3..6]
            .iter()
            .map(|b| match b {
                Block::Actions { buttons } => buttons.iter().map(|btn| btn.label.as_str()).collect(),
                other => panic!("expected row actions, got {:?}", other),
            })
            .collect();
        assert_eq!(
            row_labels,
            vec![
                vec!["Edit TechCorp", "Delete TechCorp"],
                vec!["Edit GreenEnergy", "Delete GreenEnergy"],
                vec!["Edit DataSystems", "Delete DataSystems"],
            ]
        );
    }

    #[test]
    fn test_statuses_omitted_without_custom_data() {
        let config = sample_config();
        let data = CustomData::new();
        let tab = config.tabs()[0].clone();
        let ctx = RenderContext {
            config: &config,
            data: &data,
            tab: &tab,
        };

        let blocks = ProspectManagement::with_prospects(Vec::new()).render(&ctx).unwrap();

        assert!(!blocks
            .iter()
            .any(|b| matches!(b, Block::Text { text } if text.starts_with("Proposal statuses"))));
    }
}
