// Customization components - concrete panels for the configured tabs
pub mod analysis_tools;
pub mod prospect_management;
pub mod reporting;

use crate::application::registry::ComponentRegistry;
use analysis_tools::AnalysisTools;
use prospect_management::ProspectManagement;
use reporting::Reporting;

pub const PROSPECT_MANAGEMENT: &str = "prospectManagement";
pub const ANALYSIS_TOOLS: &str = "analysisTools";
pub const REPORTING: &str = "reporting";

/// Register the customization's panels. Later registrations for the same id
/// replace these.
pub fn register_custom_components(registry: &mut ComponentRegistry) {
    registry.register_unit(PROSPECT_MANAGEMENT, ProspectManagement::new());
    registry.register_unit(ANALYSIS_TOOLS, AnalysisTools::new());
    registry.register_unit(REPORTING, Reporting::new());
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::application::resolver::resolve_composition;
    use crate::domain::app_config::AppConfig;
    use crate::infrastructure::config::parse_app_config;

    pub(crate) fn sample_config() -> AppConfig {
        parse_app_config(include_str!("../../../config/app.toml")).unwrap()
    }

    #[test]
    fn test_every_sample_tab_has_a_component() {
        let mut registry = ComponentRegistry::new();
        register_custom_components(&mut registry);

        let panels = resolve_composition(&sample_config().dashboard, &registry);

        assert_eq!(panels.len(), 3);
        assert!(panels.iter().all(|p| !p.is_placeholder()));
        assert_eq!(registry.ids(), vec![ANALYSIS_TOOLS, PROSPECT_MANAGEMENT, REPORTING]);
    }
}
