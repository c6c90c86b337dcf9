//! The orbital layout engine.
//!
//! Owns the authoritative per-body kinematic state and advances it once per
//! animation frame as a pure state transition: (previous state, focus target,
//! viewport) -> next state. No platform types appear here; the web frontend
//! positions DOM nodes from the published states and any render loop can
//! drive `step`.
//!
//! Focus changes are discrete commands (`apply_focus`), not ambient
//! mutations: a click applies the command once, and every subsequent frame
//! observes the externally-held focus value.

use fnv::FnvHashMap;
use glam::Vec2;

use super::bodies::{BodyKind, CelestialBody};
use super::constants::*;
use super::viewport::{distance_scale, Viewport};

/// Per-body phase of the focus transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Orbiting,
    MovingToCenter,
    Centered,
    ReturningToOrbit,
}

/// Working state, re-derived every frame. `angle` stays in [0, 360) degrees;
/// `position` is the px offset from the layout anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyState {
    pub angle: f32,
    pub position: Vec2,
    pub target_distance: f32,
    pub motion: Motion,
    pub size: f32,
}

pub struct OrbitalEngine {
    roster: Vec<CelestialBody>,
    states: Vec<BodyState>,
    index: FnvHashMap<&'static str, usize>,
    home: Option<usize>,
    largest_nominal: f32,
}

impl OrbitalEngine {
    /// The roster is fixed for the lifetime of the engine. The first primary
    /// body with a zero nominal distance becomes the home body and starts
    /// centered; everything else starts on its nominal orbit.
    pub fn new(roster: Vec<CelestialBody>) -> Self {
        let mut index = FnvHashMap::default();
        let mut home = None;
        for (i, b) in roster.iter().enumerate() {
            index.insert(b.id, i);
            if home.is_none() && b.kind == BodyKind::Primary && b.orbital_distance <= 0.0 {
                home = Some(i);
            }
        }
        let largest_nominal = roster
            .iter()
            .map(|b| b.orbital_distance)
            .fold(0.0_f32, f32::max);
        let states = roster
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let centered = home == Some(i);
                BodyState {
                    angle: normalize_deg(b.initial_angle),
                    position: if centered {
                        Vec2::ZERO
                    } else {
                        polar(b.initial_angle, b.orbital_distance)
                    },
                    target_distance: b.orbital_distance,
                    motion: if centered {
                        Motion::Centered
                    } else {
                        Motion::Orbiting
                    },
                    size: if centered { b.focused_size } else { b.base_size },
                }
            })
            .collect();
        Self {
            roster,
            states,
            index,
            home,
            largest_nominal,
        }
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.roster
    }

    pub fn states(&self) -> &[BodyState] {
        &self.states
    }

    pub fn state(&self, i: usize) -> Option<&BodyState> {
        self.states.get(i)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn home(&self) -> Option<usize> {
        self.home
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Orbits currently occupied or being returned to, as (kind, radius)
    /// pairs for the ring planner. Centered and inbound bodies own no ring.
    pub fn occupied_orbits(&self) -> Vec<(BodyKind, f32)> {
        self.roster
            .iter()
            .zip(&self.states)
            .filter(|(_, st)| {
                !matches!(st.motion, Motion::Centered | Motion::MovingToCenter)
                    && st.target_distance > 0.0
            })
            .map(|(b, st)| (b.kind, st.target_distance))
            .collect()
    }

    /// The focus-change command. `None` recenters the home body. Returns
    /// false (and changes nothing) for satellite targets, out-of-range
    /// indices and re-entrant clicks on the already-focused body.
    pub fn apply_focus(&mut self, target: Option<usize>) -> bool {
        let Some(i) = target.or(self.home) else {
            return false;
        };
        let Some(body) = self.roster.get(i) else {
            return false;
        };
        if body.kind != BodyKind::Primary {
            return false;
        }
        if matches!(
            self.states[i].motion,
            Motion::Centered | Motion::MovingToCenter
        ) {
            return false;
        }
        self.evict_center(i);
        let st = &mut self.states[i];
        st.motion = Motion::MovingToCenter;
        st.target_distance = 0.0;
        true
    }

    /// Advance one animation frame. `focused` is the externally-held focus
    /// value; indices that are out of range or name a satellite resolve to
    /// the home body.
    pub fn step(&mut self, focused: Option<usize>, vp: &Viewport) {
        let max = vp.max_distance();
        let scale = distance_scale(max, self.largest_nominal);
        let mult = vp.size_multiplier();
        let eff = focused
            .filter(|&i| {
                self.roster
                    .get(i)
                    .map(|b| b.kind == BodyKind::Primary)
                    .unwrap_or(false)
            })
            .or(self.home);

        for i in 0..self.roster.len() {
            let body = &self.roster[i];
            let st = &mut self.states[i];

            if eff == Some(i) {
                if st.motion == Motion::Centered {
                    st.position = Vec2::ZERO;
                    st.target_distance = 0.0;
                    st.size = body.focused_size * mult;
                } else {
                    // Ease toward the origin; arrival decelerates and snaps
                    // inside the epsilon.
                    st.motion = Motion::MovingToCenter;
                    st.target_distance = 0.0;
                    let next = st.position * (1.0 - FOCUS_EASE);
                    if next.length() < CENTER_SNAP_PX {
                        st.position = Vec2::ZERO;
                        st.motion = Motion::Centered;
                        st.size = body.focused_size * mult;
                    } else {
                        st.position = next;
                        st.size = body.base_size * mult;
                    }
                }
                continue;
            }

            match st.motion {
                Motion::Orbiting => {
                    st.angle = normalize_deg(st.angle + body.angular_speed);
                    let mut d = if body.orbital_distance > 0.0 {
                        body.orbital_distance * scale
                    } else {
                        st.target_distance
                    };
                    if !d.is_finite() {
                        d = st.position.length();
                    }
                    if !d.is_finite() {
                        d = 0.0;
                    }
                    let d = d.min(max);
                    st.target_distance = d;
                    st.position = polar(st.angle, d);
                    st.size = body.base_size * mult;
                }
                Motion::Centered | Motion::MovingToCenter | Motion::ReturningToOrbit => {
                    // A body still flagged as centered (or inbound) that lost
                    // focus without a command starts returning from wherever
                    // it visually is.
                    if st.motion != Motion::ReturningToOrbit {
                        derive_return_pose(body, st);
                    }
                    // The body keeps orbiting while it spirals back out
                    // toward its scaled nominal orbit (or, for the home
                    // body, its recorded working radius).
                    st.angle = normalize_deg(st.angle + body.angular_speed);
                    let mut d = if body.orbital_distance > 0.0 {
                        body.orbital_distance * scale
                    } else {
                        st.target_distance
                    };
                    if !d.is_finite() || d <= 0.0 {
                        d = body.rest_pose().1;
                    }
                    let d = d.min(max);
                    let target = polar(st.angle, d);
                    let next = st.position + (target - st.position) * RETURN_EASE;
                    if (target - next).length() < ORBIT_SNAP_PX {
                        st.position = target;
                        st.motion = Motion::Orbiting;
                    } else {
                        st.position = next;
                        st.motion = Motion::ReturningToOrbit;
                    }
                    st.target_distance = d;
                    st.size = body.base_size * mult;
                }
            }
        }
    }

    /// Immediate distance clamp on viewport change; the next `step` finishes
    /// the rescale.
    pub fn clamp_distances(&mut self, vp: &Viewport) {
        let max = vp.max_distance();
        for st in &mut self.states {
            st.target_distance = st.target_distance.min(max);
            let r = st.position.length();
            if r > max && r > 0.0 {
                st.position *= max / r;
            }
        }
    }

    fn evict_center(&mut self, except: usize) {
        for j in 0..self.states.len() {
            if j == except {
                continue;
            }
            if matches!(
                self.states[j].motion,
                Motion::Centered | Motion::MovingToCenter
            ) {
                let body = &self.roster[j];
                let st = &mut self.states[j];
                derive_return_pose(body, st);
                st.motion = Motion::ReturningToOrbit;
                st.size = body.base_size;
            }
        }
    }
}

/// Return pose for an evicted body. The angle comes from the live
/// coordinates when the body is visibly away from the origin, so the return
/// starts from where it is; near-zero measurements fall back to the rest
/// pose instead of a noisy angle. The distance targets the body's own
/// nominal orbit; only a body without one (the home body) keeps the measured
/// radius.
fn derive_return_pose(body: &CelestialBody, st: &mut BodyState) {
    let r = st.position.length();
    let live = r.is_finite() && r >= DEGENERATE_RETURN_PX;
    if live {
        st.angle = normalize_deg(st.position.y.atan2(st.position.x).to_degrees());
    } else {
        st.angle = normalize_deg(body.rest_pose().0);
    }
    st.target_distance = if body.orbital_distance > 0.0 {
        body.orbital_distance
    } else if live {
        r
    } else {
        body.rest_pose().1
    };
}

fn normalize_deg(a: f32) -> f32 {
    a.rem_euclid(360.0)
}

fn polar(angle_deg: f32, dist: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin()) * dist
}
