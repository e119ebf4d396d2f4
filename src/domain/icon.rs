// Icon domain model - anything that can be rendered as a tab icon
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Supplies icon markup for icons that are not one of the builtin glyphs.
pub trait IconRenderer: Send + Sync {
    fn render_icon(&self) -> String;
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    /// Builtin glyph id, e.g. "briefcase"
    Glyph(String),
    Custom(Arc<dyn IconRenderer>),
}

impl Icon {
    pub fn glyph(id: impl Into<String>) -> Self {
        Icon::Glyph(id.into())
    }

    pub fn custom(renderer: Arc<dyn IconRenderer>) -> Self {
        Icon::Custom(renderer)
    }

    pub fn render(&self) -> String {
        match self {
            Icon::Glyph(id) => id.clone(),
            Icon::Custom(renderer) => renderer.render_icon(),
        }
    }
}

impl Default for Icon {
    fn default() -> Self {
        Icon::Glyph("square".to_string())
    }
}

impl From<String> for Icon {
    fn from(id: String) -> Self {
        Icon::Glyph(id)
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.render()
    }
}

// Custom renderers have no structural equality, so they compare by identity.
impl PartialEq for Icon {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Icon::Glyph(a), Icon::Glyph(b)) => a == b,
            (Icon::Custom(a), Icon::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Icon::Glyph(id) => f.debug_tuple("Glyph").field(id).finish(),
            Icon::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Svg(&'static str);

    impl IconRenderer for Svg {
        fn render_icon(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_glyph_round_trips_as_plain_string() {
        let icon: Icon = serde_json::from_str("\"briefcase\"").unwrap();
        assert_eq!(icon, Icon::glyph("briefcase"));
        assert_eq!(serde_json::to_string(&icon).unwrap(), "\"briefcase\"");
    }

    #[test]
    fn test_custom_icons_compare_by_identity() {
        let renderer: Arc<dyn IconRenderer> = Arc::new(Svg("<svg/>"));
        let a = Icon::custom(renderer.clone());
        let b = Icon::custom(renderer);
        let c = Icon::custom(Arc::new(Svg("<svg/>")));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.render(), "<svg/>");
    }
}
