use std::f32::consts::{FRAC_PI_2, TAU};

use egui::{Align2, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};

use super::{SkillRating, MAX_SCORE};
use crate::views::style;

const RING_STEPS: usize = 4;
const LABEL_OFFSET: f32 = 1.18;

/// Point of axis `i` out of `n` at `frac` of the rim radius. Axis 0
/// points straight up; the rest follow clockwise.
pub fn vertex(center: Pos2, radius: f32, i: usize, n: usize, frac: f32) -> Pos2 {
    let angle = -FRAC_PI_2 + TAU * (i as f32) / (n as f32);
    center + Vec2::new(angle.cos(), angle.sin()) * (radius * frac)
}

/// The filled score polygon, one vertex per rating.
pub fn value_polygon(center: Pos2, radius: f32, ratings: &[SkillRating]) -> Vec<Pos2> {
    let n = ratings.len();
    ratings
        .iter()
        .enumerate()
        .map(|(i, r)| vertex(center, radius, i, n, (r.score / MAX_SCORE).clamp(0.0, 1.0)))
        .collect()
}

/// Radar chart of the static proficiency ratings, drawn straight onto
/// the painter.
pub struct Radar<'a> {
    ratings: &'a [SkillRating],
}

impl<'a> Radar<'a> {
    pub fn new(ratings: &'a [SkillRating]) -> Self {
        Self { ratings }
    }

    pub fn show(&self, ui: &mut Ui) {
        let n = self.ratings.len();
        if n < 3 {
            return;
        }

        let side = ui.available_width().min(280.0);
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = side * 0.34;

        let grid_stroke = Stroke::new(1.0, style::COLOR_GRID);
        for step in 1..=RING_STEPS {
            let frac = step as f32 / RING_STEPS as f32;
            let ring: Vec<Pos2> = (0..n).map(|i| vertex(center, radius, i, n, frac)).collect();
            painter.add(Shape::closed_line(ring, grid_stroke));
        }
        for i in 0..n {
            painter.line_segment([center, vertex(center, radius, i, n, 1.0)], grid_stroke);
        }

        let points = value_polygon(center, radius, self.ratings);
        painter.add(Shape::convex_polygon(
            points.clone(),
            style::COLOR_ACCENT_FILL,
            Stroke::new(1.5, style::COLOR_ACCENT),
        ));
        for p in points {
            painter.circle_filled(p, 2.5, style::COLOR_ACCENT);
        }

        for (i, r) in self.ratings.iter().enumerate() {
            painter.text(
                vertex(center, radius, i, n, LABEL_OFFSET),
                Align2::CENTER_CENTER,
                r.label,
                FontId::proportional(12.0),
                style::COLOR_TEXT,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::RATINGS;

    #[test]
    fn polygon_has_one_vertex_per_axis() {
        let pts = value_polygon(Pos2::new(100.0, 100.0), 50.0, &RATINGS);
        assert_eq!(pts.len(), RATINGS.len());
    }

    #[test]
    fn full_score_lands_on_the_rim() {
        let full = [SkillRating {
            label: "x",
            score: MAX_SCORE,
        }; 3];
        let center = Pos2::new(0.0, 0.0);
        for p in value_polygon(center, 10.0, &full) {
            let d = (p - center).length();
            assert!((d - 10.0).abs() < 1e-3, "distance {d}");
        }
    }

    #[test]
    fn zero_score_collapses_to_center() {
        let zero = [SkillRating {
            label: "x",
            score: 0.0,
        }; 3];
        let center = Pos2::new(5.0, 5.0);
        for p in value_polygon(center, 10.0, &zero) {
            assert!((p - center).length() < 1e-3);
        }
    }

    #[test]
    fn first_axis_points_up() {
        let p = vertex(Pos2::new(0.0, 0.0), 10.0, 0, 5, 1.0);
        assert!(p.x.abs() < 1e-3);
        assert!((p.y + 10.0).abs() < 1e-3);
    }

    #[test]
    fn scores_above_max_are_clamped() {
        let over = [SkillRating {
            label: "x",
            score: 250.0,
        }; 3];
        let center = Pos2::new(0.0, 0.0);
        for p in value_polygon(center, 10.0, &over) {
            assert!((p - center).length() <= 10.0 + 1e-3);
        }
    }
}
