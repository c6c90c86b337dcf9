//! Responsive layout math: the viewport is the only input to the distance
//! bound, the proportional distance scale and the body size multiplier.

use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Non-finite or negative dimensions (hidden tab, detached element)
    /// collapse to zero; the distance bound floors them separately.
    pub fn new(width: f32, height: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.width <= MOBILE_BREAKPOINT_PX
    }

    pub fn is_phone(&self) -> bool {
        self.width <= PHONE_BREAKPOINT_PX
    }

    fn orbit_padding(&self) -> f32 {
        if self.is_phone() {
            ORBIT_PADDING_PHONE_PX
        } else if self.is_mobile() {
            ORBIT_PADDING_TABLET_PX
        } else {
            ORBIT_PADDING_DESKTOP_PX
        }
    }

    /// Largest orbit radius that keeps bodies fully inside the viewport.
    /// Floored so degenerate viewports still yield finite positions.
    pub fn max_distance(&self) -> f32 {
        (self.width.min(self.height) / 2.0 - self.orbit_padding()).max(MIN_MAX_DISTANCE_PX)
    }

    /// Body size multiplier from the width-keyed tier table.
    pub fn size_multiplier(&self) -> f32 {
        for (bound, factor) in SIZE_TIERS {
            if self.width <= bound {
                return factor;
            }
        }
        1.0
    }

    pub fn half_diagonal(&self) -> f32 {
        (self.width * self.width + self.height * self.height).sqrt() / 2.0
    }
}

/// Proportional scale applied to nominal orbit radii so the widest orbit
/// stays inside `max_distance`. Never enlarges.
pub fn distance_scale(max_distance: f32, largest_nominal: f32) -> f32 {
    if largest_nominal > 0.0 {
        (max_distance / largest_nominal).min(1.0)
    } else {
        1.0
    }
}
