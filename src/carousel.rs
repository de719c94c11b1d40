use crate::content::Project;

/// At most this many featured projects become highlight slides.
pub const MAX_SLIDES: usize = 3;

/// Projects marked featured, in list order, capped at [`MAX_SLIDES`].
/// Fewer featured entries simply yield fewer slides.
pub fn slides(projects: &[Project]) -> Vec<&Project> {
    projects
        .iter()
        .filter(|p| p.featured)
        .take(MAX_SLIDES)
        .collect()
}

/// Current slide index, clamped to the available range on every move.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    idx: usize,
}

impl CarouselState {
    pub fn idx(self) -> usize {
        self.idx
    }

    pub fn advance(&mut self, slide_count: usize) {
        self.idx = (self.idx + 1).min(slide_count.saturating_sub(1));
    }

    pub fn retreat(&mut self) {
        self.idx = self.idx.saturating_sub(1);
    }

    /// Re-clamp after the slide list changed underneath us.
    pub fn clamp(&mut self, slide_count: usize) {
        self.idx = self.idx.min(slide_count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::samples;

    #[test]
    fn fewer_than_three_featured_yields_that_many_slides() {
        let projects = samples::projects();
        let s = slides(&projects);
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].id, "roadmap");
        assert_eq!(s[1].id, "plant-ml");
    }

    #[test]
    fn no_featured_yields_no_slides() {
        let mut projects = samples::projects();
        for p in &mut projects {
            p.featured = false;
        }
        assert!(slides(&projects).is_empty());
    }

    #[test]
    fn at_most_three_slides() {
        let mut projects = samples::projects();
        for p in &mut projects {
            p.featured = true;
        }
        assert_eq!(slides(&projects).len(), MAX_SLIDES);
    }

    #[test]
    fn index_clamps_at_both_ends() {
        let mut c = CarouselState::default();
        c.retreat();
        assert_eq!(c.idx(), 0);
        c.advance(2);
        assert_eq!(c.idx(), 1);
        c.advance(2);
        assert_eq!(c.idx(), 1);
        c.retreat();
        assert_eq!(c.idx(), 0);
    }

    #[test]
    fn zero_slides_never_panics() {
        let mut c = CarouselState::default();
        c.advance(0);
        assert_eq!(c.idx(), 0);
        c.clamp(0);
        assert_eq!(c.idx(), 0);
    }

    #[test]
    fn clamp_follows_shrinking_list() {
        let mut c = CarouselState::default();
        c.advance(3);
        c.advance(3);
        assert_eq!(c.idx(), 2);
        c.clamp(1);
        assert_eq!(c.idx(), 0);
    }
}
