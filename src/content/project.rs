use serde::{Deserialize, Serialize};

/// Substituted wherever a project carries no visuals of its own.
pub const PLACEHOLDER_VISUAL: &str = "/assets/img/project-placeholder.svg";

/// External references attached to a project. Both are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

/// One portfolio item. Immutable once loaded; `id` is the lookup key
/// for the detail modal and must be unique within a load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub visuals: Vec<String>,
    #[serde(default)]
    pub links: Option<Links>,
}

impl Project {
    /// First visual, or the bundled placeholder when the list is empty.
    pub fn thumbnail(&self) -> &str {
        self.visuals
            .first()
            .map_or(PLACEHOLDER_VISUAL, String::as_str)
    }

    pub fn github_link(&self) -> Option<&str> {
        self.links.as_ref()?.github.as_deref()
    }

    pub fn demo_link(&self) -> Option<&str> {
        self.links.as_ref()?.demo.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_record_parses_with_defaults() {
        let p: Project = serde_json::from_str(
            r#"{"id":"x","title":"X","category":"General"}"#,
        )
        .expect("should parse");
        assert!(!p.featured);
        assert!(p.tools.is_empty());
        assert!(p.links.is_none());
        assert_eq!(p.thumbnail(), PLACEHOLDER_VISUAL);
    }

    #[test]
    fn thumbnail_is_first_visual() {
        let p = Project {
            visuals: vec!["a.svg".into(), "b.svg".into()],
            ..Default::default()
        };
        assert_eq!(p.thumbnail(), "a.svg");
    }
}
