// Host-side tests for starfield generation and the twinkle clock.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/starfield.rs"]
mod starfield;

use starfield::Starfield;

#[test]
fn generation_is_deterministic_per_seed() {
    let a = Starfield::generate(800.0, 600.0, 42);
    let b = Starfield::generate(800.0, 600.0, 42);
    assert_eq!(a.stars(), b.stars());

    let c = Starfield::generate(800.0, 600.0, 43);
    assert_ne!(a.stars(), c.stars());
}

#[test]
fn density_tracks_canvas_area() {
    let field = Starfield::generate(800.0, 600.0, 7);
    assert_eq!(field.stars().len(), 60);

    let bigger = Starfield::generate(1920.0, 1080.0, 7);
    assert_eq!(bigger.stars().len(), 259);
}

#[test]
fn stars_stay_inside_the_canvas() {
    let field = Starfield::generate(1024.0, 768.0, 99);
    for star in field.stars() {
        assert!((0.0..1024.0).contains(&star.x));
        assert!((0.0..768.0).contains(&star.y));
    }
}

#[test]
fn star_radii_match_their_class() {
    let field = Starfield::generate(1920.0, 1080.0, 5);
    let mut saw_bright = false;
    let mut saw_dim = false;
    for star in field.stars() {
        if star.bright {
            saw_bright = true;
            assert!((1.5..3.5).contains(&star.radius));
        } else {
            saw_dim = true;
            assert!((0.5..1.7).contains(&star.radius));
        }
    }
    // 259 draws at a 10% bright share make both classes all but certain.
    assert!(saw_bright && saw_dim);
}

#[test]
fn zero_sized_canvas_has_no_stars() {
    assert!(Starfield::generate(0.0, 600.0, 1).stars().is_empty());
    assert!(Starfield::generate(800.0, 0.0, 1).stars().is_empty());
}

#[test]
fn twinkle_opacity_is_always_drawable() {
    let mut field = Starfield::generate(800.0, 600.0, 11);
    for _ in 0..240 {
        field.advance(1.0 / 60.0);
        for star in field.stars() {
            let o = field.twinkle_opacity(star);
            assert!((0.0..=1.0).contains(&o), "opacity out of range: {o}");
        }
    }
}

#[test]
fn bad_dt_does_not_move_the_clock() {
    let mut field = Starfield::generate(800.0, 600.0, 11);
    field.advance(0.5);
    let star = field.stars()[0];
    let before = field.twinkle_opacity(&star);
    field.advance(f32::NAN);
    field.advance(-1.0);
    assert_eq!(field.twinkle_opacity(&star), before);
}
