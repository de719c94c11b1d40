//! Decorative particle field painted behind the page.
//!
//! A fixed population of particles drifts on a toroidal viewport;
//! nearby pairs get a faint connecting line. Purely cosmetic and fully
//! independent of the rest of the UI.

use egui::{Context, CornerRadius, LayerId, Pos2, Rect, Stroke, Vec2};
use rand::Rng;

use crate::views::style;

pub const PARTICLE_COUNT: usize = 70;
/// Pair-link distance in logical pixels, scaled by pixel density.
pub const LINK_DIST: f32 = 120.0;
/// Pixel density is clamped here so dense displays don't blow up the
/// link threshold.
pub const MAX_SCALE: f32 = 2.0;

const TURN_JITTER: f32 = 0.05;
const SPEED_MIN: f32 = 0.3;
const SPEED_SPAN: f32 = 1.2;
const RADIUS_MIN: f32 = 0.5;
const RADIUS_SPAN: f32 = 1.8;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Pos2,
    pub heading: f32,
    pub speed: f32,
    pub radius: f32,
}

/// The whole simulation: particle population plus current bounds.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    scale: f32,
}

impl ParticleField {
    pub fn new(bounds: Vec2, scale: f32, rng: &mut impl Rng) -> Self {
        let scale = scale.min(MAX_SCALE);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                pos: Pos2::new(
                    rng.random_range(0.0..bounds.x.max(1.0)),
                    rng.random_range(0.0..bounds.y.max(1.0)),
                ),
                heading: rng.random_range(0.0..std::f32::consts::TAU),
                speed: SPEED_MIN + rng.random_range(0.0..SPEED_SPAN),
                radius: RADIUS_MIN + rng.random_range(0.0..RADIUS_SPAN),
            })
            .collect();
        Self {
            particles,
            bounds,
            scale,
        }
    }

    /// Adopt new viewport bounds. Positions are deliberately NOT
    /// rescaled: particles may cluster or sparsen until they wrap back
    /// into the visible region. Accepted drift, not a bug.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// One simulation tick: jitter headings, advance, wrap across edges.
    pub fn step(&mut self, rng: &mut impl Rng) {
        let (w, h) = (self.bounds.x, self.bounds.y);
        for p in &mut self.particles {
            p.heading += rng.random_range(-TURN_JITTER..TURN_JITTER);
            p.pos.x += p.heading.cos() * p.speed;
            p.pos.y += p.heading.sin() * p.speed;
            p.pos.x = wrap(p.pos.x, w);
            p.pos.y = wrap(p.pos.y, h);
        }
    }

    /// Every unordered pair closer than the link threshold. O(n²), fine
    /// for a fixed population of 70.
    pub fn links(&self) -> Vec<(Pos2, Pos2)> {
        let max_d2 = (LINK_DIST * self.scale).powi(2);
        let mut out = Vec::new();
        for i in 0..self.particles.len() {
            let pi = self.particles[i].pos;
            for pj in &self.particles[i + 1..] {
                let d = pi - pj.pos;
                if d.x * d.x + d.y * d.y < max_d2 {
                    out.push((pi, pj.pos));
                }
            }
        }
        out
    }

    /// Paint the field on the background layer and keep the frame loop
    /// running. Runs for the lifetime of the app.
    pub fn show(&mut self, ctx: &Context, rng: &mut impl Rng) {
        let rect = ctx.screen_rect();
        self.set_bounds(rect.size());
        self.step(rng);

        let painter = ctx.layer_painter(LayerId::background());
        painter.rect_filled(
            Rect::from_min_size(Pos2::ZERO, rect.size()),
            CornerRadius::ZERO,
            style::COLOR_VEIL,
        );

        let link_stroke = Stroke::new(1.0, style::COLOR_LINK);
        for (a, b) in self.links() {
            painter.line_segment([a, b], link_stroke);
        }
        for p in &self.particles {
            painter.circle_filled(p.pos, p.radius * self.scale, style::COLOR_DOT);
        }

        ctx.request_repaint();
    }
}

fn wrap(v: f32, max: f32) -> f32 {
    if v < 0.0 {
        max
    } else if v > max {
        0.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn particles_stay_in_bounds_after_wrapping() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Vec2::new(640.0, 480.0);
        let mut field = ParticleField::new(bounds, 1.0, &mut rng);
        for _ in 0..1000 {
            field.step(&mut rng);
            for p in field.particles() {
                assert!((0.0..=bounds.x).contains(&p.pos.x), "x = {}", p.pos.x);
                assert!((0.0..=bounds.y).contains(&p.pos.y), "y = {}", p.pos.y);
            }
        }
    }

    #[test]
    fn resize_does_not_rescale_positions() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = ParticleField::new(Vec2::new(640.0, 480.0), 1.0, &mut rng);
        let before: Vec<Pos2> = field.particles().iter().map(|p| p.pos).collect();
        field.set_bounds(Vec2::new(320.0, 240.0));
        let after: Vec<Pos2> = field.particles().iter().map(|p| p.pos).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn population_is_fixed() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(Vec2::new(100.0, 100.0), 2.0, &mut rng);
        field.step(&mut rng);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn links_only_within_threshold() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = ParticleField::new(Vec2::new(2000.0, 2000.0), 1.0, &mut rng);
        let max_d2 = (LINK_DIST * 1.0).powi(2);
        for (a, b) in field.links() {
            let d = a - b;
            assert!(d.x * d.x + d.y * d.y < max_d2);
        }
    }
}
