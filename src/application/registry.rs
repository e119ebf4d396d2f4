// Component registry - panel id to renderable unit
use crate::application::renderable::RenderableUnit;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("no renderable unit registered for panel '{0}'")]
    NotFound(String),
}

/// Built once during startup, then shared read-only behind an `Arc`.
/// Registering an id twice replaces the earlier unit.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    units: HashMap<String, Arc<dyn RenderableUnit>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, unit: Arc<dyn RenderableUnit>) {
        let id = id.into();
        if self.units.insert(id.clone(), unit).is_some() {
            tracing::debug!("Renderable unit for panel '{}' overridden", id);
        }
    }

    pub fn register_unit<U: RenderableUnit + 'static>(&mut self, id: impl Into<String>, unit: U) {
        self.register(id, Arc::new(unit));
    }

    pub fn resolve(&self, id: &str) -> Result<Arc<dyn RenderableUnit>, RegistryError> {
        self.units
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.units.contains_key(id)
    }

    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.units.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::renderable::RenderContext;
    use crate::domain::panel::Block;

    struct Label(&'static str);

    impl RenderableUnit for Label {
        fn render(&self, _ctx: &RenderContext<'_>) -> anyhow::Result<Vec<Block>> {
            Ok(vec![Block::text(self.0)])
        }
    }

    #[test]
    fn test_resolve_missing_id() {
        let registry = ComponentRegistry::new();
        assert_eq!(
            registry.resolve("reporting").err(),
            Some(RegistryError::NotFound("reporting".to_string()))
        );
    }

    #[test]
    fn test_last_registration_wins() {
        let first: Arc<dyn RenderableUnit> = Arc::new(Label("first"));
        let second: Arc<dyn RenderableUnit> = Arc::new(Label("second"));

        let mut registry = ComponentRegistry::new();
        registry.register("reporting", first.clone());
        registry.register("reporting", second.clone());

        let resolved = registry.resolve("reporting").unwrap();
        assert!(Arc::ptr_eq(&resolved, &second));
        assert!(!Arc::ptr_eq(&resolved, &first));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_ids_are_sorted() {
        let mut registry = ComponentRegistry::new();
        registry.register_unit("reporting", Label("r"));
        registry.register_unit("analysisTools", Label("a"));

        assert_eq!(registry.ids(), vec!["analysisTools", "reporting"]);
        assert!(registry.contains("reporting"));
        assert!(!registry.is_empty());
    }
}
