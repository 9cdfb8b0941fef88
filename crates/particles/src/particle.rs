use crate::FieldConfig;
use festa_types::Color;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::f64::consts::PI;
use std::ops::RangeInclusive;

/// One piece of confetti.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: u32,
    pub color: Color,
    /// Tumbling phase in radians.
    pub angle: f64,
}

/// Axis-aligned rectangle with `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Particle {
    /// A randomized particle with its vertical position drawn from `y_band`.
    pub fn random<R: Rng + ?Sized>(config: &FieldConfig, y_band: RangeInclusive<i32>, rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0..=config.width) as f64,
            y: rng.random_range(y_band) as f64,
            size: rng.random_range(config.size_range.clone()),
            color: config.palette.choose(rng).copied().unwrap_or(Color::WHITE),
            angle: rng.random::<f64>() * PI,
        }
    }

    /// Signed drawn width. Negative when the tumble shows the back face.
    pub fn width(&self) -> f64 {
        self.size as f64 * self.angle.cos()
    }

    pub fn height(&self) -> f64 {
        self.size as f64 * 0.6
    }

    pub fn draw_rect(&self) -> DrawRect {
        let (half_w, half_h) = (self.width() / 2.0, self.height() / 2.0);
        let (x1, x2) = (self.x - half_w, self.x + half_w);
        let (y1, y2) = (self.y - half_h, self.y + half_h);
        DrawRect {
            left: x1.min(x2),
            top: y1.min(y2),
            right: x1.max(x2),
            bottom: y1.max(y2),
        }
    }

    /// Applies one tick of gravity, sway and tumbling. The sway uses the
    /// already updated vertical position.
    pub(crate) fn step(mut self, config: &FieldConfig) -> Self {
        self.y += config.gravity_base + self.size as f64 * config.gravity_scale;
        self.x += (self.y * config.sway_frequency).sin() * config.sway_amplitude;
        self.angle += config.angle_step;
        self
    }

    pub(crate) fn is_visible(&self, config: &FieldConfig) -> bool {
        self.y < config.height as f64 + config.margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn particle(angle: f64) -> Particle {
        Particle {
            x: 100.0,
            y: 50.0,
            size: 10,
            color: Color::RED,
            angle,
        }
    }

    #[test]
    fn step_applies_gravity_then_sway() {
        let config = FieldConfig::default();
        let moved = Particle { y: 0.0, angle: 0.0, ..particle(0.0) }.step(&config);

        assert!((moved.y - 7.0).abs() < 1e-12);
        assert!((moved.x - (100.0 + (7.0f64 * 0.05).sin() * 2.0)).abs() < 1e-12);
        assert!((moved.angle - 0.1).abs() < 1e-12);
    }

    #[test]
    fn draw_rect_is_normalized_for_any_angle() {
        for i in 0..64 {
            let p = particle(i as f64 * PI / 16.0);
            let rect = p.draw_rect();
            assert!(rect.left <= rect.right, "angle {}", p.angle);
            assert!(rect.top <= rect.bottom, "angle {}", p.angle);
            assert!(((rect.right - rect.left) - p.width().abs()).abs() < 1e-9);
            assert!(((rect.bottom - rect.top) - 6.0).abs() < 1e-9);
        }
    }

    #[test]
    fn back_facing_rect_is_still_centered() {
        let rect = particle(PI).draw_rect();
        assert!((rect.left - 95.0).abs() < 1e-9);
        assert!((rect.right - 105.0).abs() < 1e-9);
        assert!((rect.top - 47.0).abs() < 1e-9);
    }

    #[test]
    fn random_particles_respect_ranges() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::random(&config, config.spawn_band.clone(), &mut rng);
            assert!((0.0..=480.0).contains(&p.x));
            assert!((-50.0..=-10.0).contains(&p.y));
            assert!((5..=12).contains(&p.size));
            assert!((0.0..PI).contains(&p.angle));
            assert!(config.palette.contains(&p.color));
        }
    }

    #[test]
    fn visibility_ends_at_margin_below_canvas() {
        let config = FieldConfig::default();
        assert!(Particle { y: 499.9, ..particle(0.0) }.is_visible(&config));
        assert!(!Particle { y: 500.0, ..particle(0.0) }.is_visible(&config));
    }
}
