//! Ring overlay geometry: converts the set of occupied orbit radii into a
//! draw plan of concentric circles. Pure math; the web renderer just strokes
//! whatever the plan says.

use fnv::FnvHashSet;
use smallvec::SmallVec;

use super::bodies::BodyKind;
use super::constants::*;
use super::viewport::Viewport;

/// Real orbits keep the kind of the body that owns them; fillers are pure
/// visual density and carry no meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingClass {
    Orbit(BodyKind),
    Filler,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    pub radius: f32,
    pub line_width: f32,
    pub opacity: f32,
    pub class: RingClass,
}

/// Plan the overlay for one frame.
///
/// One ring per distinct (pixel-rounded) occupied radius, weighted by body
/// kind and breakpoint; then faint fillers from the innermost occupied
/// radius out to the screen's half-diagonal at fixed spacing, skipping radii
/// a real orbit already owns and radii inside the minimum-gap floor.
pub fn ring_plan(occupied: &[(BodyKind, f32)], vp: &Viewport) -> SmallVec<[RingSpec; 16]> {
    let mut plan = SmallVec::new();
    let mut drawn: FnvHashSet<i32> = FnvHashSet::default();

    let (base_width, base_opacity) = if vp.is_mobile() {
        (RING_WIDTH_MOBILE, RING_OPACITY_MOBILE)
    } else {
        (RING_WIDTH_DESKTOP, RING_OPACITY_DESKTOP)
    };

    for &(kind, radius) in occupied {
        if !radius.is_finite() || radius <= 0.0 {
            continue;
        }
        let rounded = radius.round() as i32;
        if !drawn.insert(rounded) {
            continue;
        }
        let (line_width, opacity) = match kind {
            BodyKind::Primary => (base_width, base_opacity),
            BodyKind::Satellite => (
                base_width * SATELLITE_RING_WIDTH_FACTOR,
                base_opacity * SATELLITE_RING_OPACITY_FACTOR,
            ),
        };
        plan.push(RingSpec {
            radius,
            line_width,
            opacity,
            class: RingClass::Orbit(kind),
        });
    }

    if drawn.is_empty() {
        return plan;
    }

    let spacing = if vp.is_mobile() {
        FILLER_SPACING_MOBILE_PX
    } else {
        FILLER_SPACING_DESKTOP_PX
    };
    let gap_floor = if vp.is_phone() {
        FILLER_MIN_RADIUS_PHONE_PX
    } else {
        FILLER_MIN_RADIUS_PX
    };
    let spacing = spacing as i32;
    let gap_floor = gap_floor as i32;
    let (filler_width, filler_opacity) = if vp.is_mobile() {
        (FILLER_WIDTH_MOBILE, FILLER_OPACITY_MOBILE)
    } else {
        (FILLER_WIDTH_DESKTOP, FILLER_OPACITY_DESKTOP)
    };

    let innermost = occupied
        .iter()
        .map(|&(_, r)| r)
        .filter(|r| r.is_finite() && *r > 0.0)
        .fold(f32::INFINITY, f32::min)
        .floor() as i32;
    let limit = vp.half_diagonal() as i32;

    let mut r = innermost;
    while r <= limit {
        if r > gap_floor && !drawn.contains(&r) {
            plan.push(RingSpec {
                radius: r as f32,
                line_width: filler_width,
                opacity: filler_opacity,
                class: RingClass::Filler,
            });
        }
        r += spacing;
    }

    plan
}
