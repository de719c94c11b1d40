use crate::content::Project;

/// The active project-category selection. One state per category value
/// plus the implicit initial `All`; never persisted across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn select_all(&mut self) {
        *self = CategoryFilter::All;
    }

    pub fn select(&mut self, category: &str) {
        *self = CategoryFilter::Category(category.to_owned());
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn is_active(&self, category: &str) -> bool {
        matches!(self, CategoryFilter::Category(c) if c == category)
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => &project.category == c,
        }
    }

    /// The currently visible subset, in source order. Full recompute on
    /// every call; list sizes are small.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Distinct categories in first-appearance order; these become the
/// filter chips after the implicit "All".
pub fn chips(projects: &[Project]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for p in projects {
        if !out.iter().any(|c| c == &p.category) {
            out.push(p.category.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::samples;

    #[test]
    fn all_passes_everything() {
        let projects = samples::projects();
        let filter = CategoryFilter::default();
        assert!(filter.is_all());
        assert_eq!(filter.apply(&projects).len(), projects.len());
    }

    #[test]
    fn category_selects_exact_subset() {
        let projects = samples::projects();
        let mut filter = CategoryFilter::default();
        filter.select("Horticulture");
        let visible = filter.apply(&projects);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|p| p.category == "Horticulture"));
        let expected = projects
            .iter()
            .filter(|p| p.category == "Horticulture")
            .count();
        assert_eq!(visible.len(), expected);
    }

    #[test]
    fn unknown_category_yields_empty_grid() {
        let projects = samples::projects();
        let mut filter = CategoryFilter::default();
        filter.select("Robotics");
        assert!(filter.apply(&projects).is_empty());
    }

    #[test]
    fn reselecting_all_restores_everything() {
        let projects = samples::projects();
        let mut filter = CategoryFilter::default();
        filter.select("General");
        filter.select_all();
        assert_eq!(filter.apply(&projects).len(), projects.len());
    }

    #[test]
    fn chips_keep_first_appearance_order() {
        let projects = samples::projects();
        assert_eq!(chips(&projects), vec!["General", "Horticulture"]);
    }
}
