//! Background starfield: seeded random generation plus a global twinkle
//! clock. Regenerated wholesale on resize (density tracks canvas area).

use rand::prelude::*;

use super::constants::{STAR_AREA_PER_STAR_PX2, STAR_BRIGHT_SHARE, STAR_TWINKLE_RATE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
    pub twinkle_speed: f32,
    pub twinkle_phase: f32,
    /// Bright stars get a radial glow halo when drawn.
    pub bright: bool,
}

pub struct Starfield {
    stars: Vec<Star>,
    phase: f32,
}

impl Starfield {
    /// Deterministic for a given (width, height, seed) triple.
    pub fn generate(width: f32, height: f32, seed: u64) -> Self {
        let mut stars = Vec::new();
        if width > 0.0 && height > 0.0 {
            let count = (width * height / STAR_AREA_PER_STAR_PX2).floor() as usize;
            let mut rng = StdRng::seed_from_u64(seed);
            stars.reserve(count);
            for _ in 0..count {
                let bright = rng.gen::<f32>() > 1.0 - STAR_BRIGHT_SHARE;
                let (radius, opacity) = if bright {
                    (
                        rng.gen::<f32>() * 2.0 + 1.5,
                        rng.gen::<f32>() * 0.5 + 0.8,
                    )
                } else {
                    (
                        rng.gen::<f32>() * 1.2 + 0.5,
                        rng.gen::<f32>() * 0.7 + 0.3,
                    )
                };
                stars.push(Star {
                    x: rng.gen::<f32>() * width,
                    y: rng.gen::<f32>() * height,
                    radius,
                    opacity,
                    twinkle_speed: rng.gen::<f32>() * 0.03 + 0.01,
                    twinkle_phase: rng.gen::<f32>() * std::f32::consts::TAU,
                    bright,
                });
            }
        }
        Self { stars, phase: 0.0 }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn advance(&mut self, dt_sec: f32) {
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.phase += dt_sec * STAR_TWINKLE_RATE;
        }
    }

    /// Current opacity of one star under the shared twinkle clock, already
    /// clamped to a drawable [0, 1].
    pub fn twinkle_opacity(&self, star: &Star) -> f32 {
        let twinkle = (self.phase * star.twinkle_speed + star.twinkle_phase).sin() * 0.3 + 0.7;
        (star.opacity * twinkle).clamp(0.0, 1.0)
    }
}
