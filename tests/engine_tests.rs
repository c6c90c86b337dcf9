// Host-side tests for the orbital layout engine.
// The crate itself is wasm-only, so the pure core modules are pulled in
// directly by path.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/bodies.rs"]
mod bodies;
#[path = "../src/core/viewport.rs"]
mod viewport;
#[path = "../src/core/engine.rs"]
mod engine;

use bodies::*;
use engine::*;
use glam::Vec2;
use viewport::Viewport;

fn primary(
    id: &'static str,
    base_size: f32,
    orbital_distance: f32,
    initial_angle: f32,
    angular_speed: f32,
) -> CelestialBody {
    CelestialBody {
        id,
        label: id,
        kind: BodyKind::Primary,
        base_size,
        focused_size: 400.0,
        orbital_distance,
        initial_angle,
        angular_speed,
        visual: Visual::Tint("#fff"),
    }
}

fn satellite(
    id: &'static str,
    base_size: f32,
    orbital_distance: f32,
    initial_angle: f32,
    angular_speed: f32,
) -> CelestialBody {
    CelestialBody {
        id,
        label: "",
        kind: BodyKind::Satellite,
        base_size,
        focused_size: base_size,
        orbital_distance,
        initial_angle,
        angular_speed,
        visual: Visual::Tint("#4dd0e1"),
    }
}

fn centered_count(engine: &OrbitalEngine) -> usize {
    engine
        .states()
        .iter()
        .filter(|st| matches!(st.motion, Motion::Centered | Motion::MovingToCenter))
        .count()
}

#[test]
fn home_body_starts_centered() {
    let engine = OrbitalEngine::new(default_roster());
    let home = engine.home().expect("roster has a home body");
    let st = &engine.states()[home];
    assert_eq!(st.motion, Motion::Centered);
    assert_eq!(st.position, Vec2::ZERO);
    assert_eq!(centered_count(&engine), 1);
}

#[test]
fn orbit_advances_one_frame() {
    // Square 1000px viewport: max distance 400, so a 500px nominal orbit
    // scales by 0.8 and lands exactly on the bound.
    let mut engine = OrbitalEngine::new(vec![
        primary("prime", 400.0, 0.0, 0.0, 0.0),
        satellite("drift", 40.0, 500.0, 0.0, 0.02),
    ]);
    let vp = Viewport::new(1000.0, 1000.0);
    engine.step(None, &vp);

    let st = &engine.states()[1];
    assert_eq!(st.motion, Motion::Orbiting);
    assert!((st.angle - 0.02).abs() < 1e-6, "angle = {}", st.angle);
    let rad = 0.02_f32.to_radians();
    let expect = Vec2::new(400.0 * rad.cos(), 400.0 * rad.sin());
    assert!(
        (st.position - expect).length() < 1e-3,
        "position = {:?}",
        st.position
    );
    assert!((st.target_distance - 400.0).abs() < 1e-3);
    // 1000px wide sits in the 0.8 size tier
    assert!((st.size - 40.0 * 0.8).abs() < 1e-3);

    let home = &engine.states()[0];
    assert_eq!(home.motion, Motion::Centered);
    assert_eq!(home.position, Vec2::ZERO);
}

#[test]
fn angle_stays_normalized() {
    let mut engine = OrbitalEngine::new(vec![
        primary("prime", 400.0, 0.0, 0.0, 0.0),
        satellite("fast", 30.0, 300.0, 359.5, 7.3),
    ]);
    let vp = Viewport::new(1200.0, 900.0);
    for _ in 0..500 {
        engine.step(None, &vp);
        for st in engine.states() {
            assert!(
                (0.0..360.0).contains(&st.angle),
                "angle out of range: {}",
                st.angle
            );
        }
    }
}

#[test]
fn focus_transition_centers_clicked_body_and_returns_previous() {
    let mut engine = OrbitalEngine::new(vec![
        primary("prime", 400.0, 0.0, 0.0, 0.0),
        primary("wanderer", 120.0, 500.0, 0.0, 0.02),
    ]);
    let vp = Viewport::new(1000.0, 1000.0);
    for _ in 0..5 {
        engine.step(None, &vp);
    }

    assert!(engine.apply_focus(Some(1)));
    for _ in 0..300 {
        engine.step(Some(1), &vp);
        assert!(centered_count(&engine) <= 1);
    }

    let clicked = &engine.states()[1];
    assert_eq!(clicked.motion, Motion::Centered);
    assert_eq!(clicked.position, Vec2::ZERO);
    // focused size under the 0.8 tier
    assert!((clicked.size - 400.0 * 0.8).abs() < 1e-3);

    // The evicted home body has no nominal orbit; it settles on the fallback
    // rest pose, bounded by the viewport.
    let home = &engine.states()[0];
    assert_eq!(home.motion, Motion::Orbiting);
    assert!((home.position.length() - 400.0).abs() < 0.5);
    assert!((home.angle - 180.0).abs() < 1e-3);
}

#[test]
fn eviction_mid_flight_uses_measured_angle() {
    let mut engine = OrbitalEngine::new(vec![
        primary("prime", 400.0, 0.0, 0.0, 0.0),
        primary("wanderer", 120.0, 500.0, 0.0, 0.0),
    ]);
    let vp = Viewport::new(1000.0, 1000.0);
    engine.step(None, &vp);

    assert!(engine.apply_focus(Some(1)));
    for _ in 0..5 {
        engine.step(Some(1), &vp);
    }
    // Still well outside the degenerate radius.
    let live = engine.states()[1].position;
    assert!(live.length() > constants::DEGENERATE_RETURN_PX);

    assert!(engine.apply_focus(Some(0)));
    let st = &engine.states()[1];
    assert_eq!(st.motion, Motion::ReturningToOrbit);
    // Return starts from the live position and heads back to the nominal
    // orbit at the measured angle.
    assert_eq!(st.position, live);
    let measured = live.y.atan2(live.x).to_degrees().rem_euclid(360.0);
    assert!((st.angle - measured).abs() < 1e-3);
    assert!((st.target_distance - 500.0).abs() < 1e-3);

    for _ in 0..300 {
        engine.step(Some(0), &vp);
    }
    let st = &engine.states()[1];
    assert_eq!(st.motion, Motion::Orbiting);
    assert!((st.position.length() - 400.0).abs() < 0.5);
}

#[test]
fn eviction_at_center_falls_back_to_rest_pose() {
    let mut engine = OrbitalEngine::new(vec![
        primary("prime", 400.0, 0.0, 0.0, 0.0),
        primary("wanderer", 120.0, 500.0, 45.0, 0.0),
    ]);
    let vp = Viewport::new(1000.0, 1000.0);
    engine.step(None, &vp);

    assert!(engine.apply_focus(Some(1)));
    for _ in 0..300 {
        engine.step(Some(1), &vp);
    }
    assert_eq!(engine.states()[1].motion, Motion::Centered);

    // Evicted while sitting at the origin: the measured pose is noise, so
    // the rest pose wins.
    assert!(engine.apply_focus(Some(0)));
    let st = &engine.states()[1];
    assert_eq!(st.motion, Motion::ReturningToOrbit);
    assert!((st.angle - 45.0).abs() < 1e-3);
    assert!((st.target_distance - 500.0).abs() < 1e-3);
}

#[test]
fn refocusing_the_centered_body_is_a_no_op() {
    let mut engine = OrbitalEngine::new(vec![
        primary("prime", 400.0, 0.0, 0.0, 0.0),
        primary("wanderer", 120.0, 500.0, 0.0, 0.02),
    ]);
    let vp = Viewport::new(1000.0, 1000.0);
    assert!(engine.apply_focus(Some(1)));
    for _ in 0..300 {
        engine.step(Some(1), &vp);
    }

    let before = engine.states().to_vec();
    assert!(!engine.apply_focus(Some(1)));
    assert_eq!(engine.states(), &before[..]);
}

#[test]
fn satellites_cannot_take_focus() {
    let mut engine = OrbitalEngine::new(vec![
        primary("prime", 400.0, 0.0, 0.0, 0.0),
        satellite("pebble", 30.0, 300.0, 0.0, 0.03),
    ]);
    let before = engine.states().to_vec();
    assert!(!engine.apply_focus(Some(1)));
    assert_eq!(engine.states(), &before[..]);

    // A stray satellite index observed by step resolves to the home body.
    let vp = Viewport::new(1000.0, 1000.0);
    engine.step(Some(1), &vp);
    assert_eq!(engine.states()[0].motion, Motion::Centered);
    assert_eq!(engine.states()[1].motion, Motion::Orbiting);
}

#[test]
fn out_of_range_focus_is_rejected() {
    let mut engine = OrbitalEngine::new(default_roster());
    assert!(!engine.apply_focus(Some(99)));
    let vp = Viewport::new(1000.0, 1000.0);
    engine.step(Some(99), &vp);
    let home = engine.home().unwrap();
    assert_eq!(engine.states()[home].motion, Motion::Centered);
}

#[test]
fn defocus_recenters_home_body() {
    let mut engine = OrbitalEngine::new(vec![
        primary("prime", 400.0, 0.0, 0.0, 0.0),
        primary("wanderer", 120.0, 600.0, 0.0, 0.02),
    ]);
    let vp = Viewport::new(1000.0, 1000.0);
    assert!(engine.apply_focus(Some(1)));
    for _ in 0..300 {
        engine.step(Some(1), &vp);
    }

    assert!(engine.apply_focus(None));
    for _ in 0..300 {
        engine.step(None, &vp);
        assert!(centered_count(&engine) <= 1);
    }

    let home = &engine.states()[0];
    assert_eq!(home.motion, Motion::Centered);
    assert_eq!(home.position, Vec2::ZERO);
    let wanderer = &engine.states()[1];
    assert_eq!(wanderer.motion, Motion::Orbiting);
    assert!((wanderer.position.length() - 400.0).abs() < 0.5);

    // Defocusing again changes nothing.
    assert!(!engine.apply_focus(None));
}

#[test]
fn focus_drift_without_command_still_converges() {
    // The host could rewrite the shared focus value without issuing the
    // command; the next steps must restore the single-center invariant.
    let mut engine = OrbitalEngine::new(vec![
        primary("prime", 400.0, 0.0, 0.0, 0.0),
        primary("wanderer", 120.0, 500.0, 0.0, 0.02),
    ]);
    let vp = Viewport::new(1000.0, 1000.0);
    engine.step(None, &vp);

    for _ in 0..300 {
        engine.step(Some(1), &vp);
        assert!(centered_count(&engine) <= 1);
    }
    assert_eq!(engine.states()[1].motion, Motion::Centered);
    assert_eq!(engine.states()[0].motion, Motion::Orbiting);
}

#[test]
fn distances_stay_bounded_through_focus_churn() {
    let mut engine = OrbitalEngine::new(default_roster());
    let vp = Viewport::new(1000.0, 1000.0);
    let max = vp.max_distance();
    let orionis = engine.index_of("orionis").unwrap();
    let theronix = engine.index_of("theronix").unwrap();

    let script: [(usize, Option<usize>); 4] = [
        (60, Some(orionis)),
        (60, Some(theronix)),
        (60, None),
        (60, Some(orionis)),
    ];
    for (frames, target) in script {
        engine.apply_focus(target);
        for _ in 0..frames {
            engine.step(target, &vp);
            assert!(centered_count(&engine) <= 1);
            for st in engine.states() {
                assert!(st.position.length() <= max + 1e-3);
                assert!(st.target_distance <= max + 1e-3);
                assert!(st.position.x.is_finite() && st.position.y.is_finite());
            }
        }
    }
}

#[test]
fn resize_rescales_sizes_and_clamps_distances() {
    let mut engine = OrbitalEngine::new(default_roster());
    let wide = Viewport::new(1920.0, 1080.0);
    for _ in 0..10 {
        engine.step(None, &wide);
    }
    let orionis = engine.index_of("orionis").unwrap();
    assert!((engine.states()[orionis].size - 120.0).abs() < 1e-3);

    // Shrink to a phone-sized viewport: max distance 160, smallest size tier.
    let narrow = Viewport::new(400.0, 700.0);
    engine.clamp_distances(&narrow);
    for st in engine.states() {
        assert!(st.target_distance <= narrow.max_distance() + 1e-3);
        assert!(st.position.length() <= narrow.max_distance() + 1e-3);
    }
    engine.step(None, &narrow);
    for st in engine.states() {
        assert!(st.position.length() <= narrow.max_distance() + 1e-3);
    }
    assert!((engine.states()[orionis].size - 120.0 * 0.45).abs() < 1e-3);
    let home = engine.home().unwrap();
    assert!((engine.states()[home].size - 400.0 * 0.45).abs() < 1e-3);
}

#[test]
fn zero_viewport_keeps_positions_finite() {
    let mut engine = OrbitalEngine::new(default_roster());
    let vp = Viewport::new(0.0, 0.0);
    for _ in 0..5 {
        engine.step(None, &vp);
    }
    for st in engine.states() {
        assert!(st.position.x.is_finite() && st.position.y.is_finite());
        assert!(st.target_distance.is_finite());
        assert!(st.position.length() <= vp.max_distance() + 1e-3);
    }
}

#[test]
fn occupied_orbits_skip_centered_bodies() {
    let mut engine = OrbitalEngine::new(default_roster());
    let vp = Viewport::new(1000.0, 1000.0);
    for _ in 0..5 {
        engine.step(None, &vp);
    }
    let occupied = engine.occupied_orbits();
    // Everything but the centered home body owns an orbit.
    assert_eq!(occupied.len(), engine.len() - 1);
    for (_, r) in occupied {
        assert!(r > 0.0 && r <= vp.max_distance() + 1e-3);
    }
}
