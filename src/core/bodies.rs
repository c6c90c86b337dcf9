//! Roster definitions: the fixed set of celestial bodies and their nominal
//! orbital parameters. Distances and speeds are hand-tuned display values at
//! the reference viewport, not physical quantities.

/// Primary bodies are clickable and focusable; satellites are minor orbiting
/// decoration and draw lighter everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Primary,
    Satellite,
}

/// How a body is presented: a bundled image asset or a flat tint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visual {
    Image(&'static str),
    Tint(&'static str),
}

#[derive(Clone, Debug)]
pub struct CelestialBody {
    pub id: &'static str,
    /// User-visible name; empty for minor bodies.
    pub label: &'static str,
    pub kind: BodyKind,
    /// Rendered size (px) at rest, before responsive scaling.
    pub base_size: f32,
    /// Rendered size (px) while occupying the center.
    pub focused_size: f32,
    /// Nominal orbit radius (px) at the reference viewport. Zero marks the
    /// home body that starts centered.
    pub orbital_distance: f32,
    /// Orbital phase (degrees) at construction.
    pub initial_angle: f32,
    /// Degrees advanced per animation frame.
    pub angular_speed: f32,
    pub visual: Visual,
}

impl CelestialBody {
    /// Rest pose used when a return-to-orbit transition cannot trust the
    /// measured live pose. The home body has no orbit of its own, so it
    /// borrows the fallback constants.
    pub fn rest_pose(&self) -> (f32, f32) {
        if self.orbital_distance > 0.0 {
            (self.initial_angle, self.orbital_distance)
        } else {
            (
                super::constants::FALLBACK_ORBIT_ANGLE_DEG,
                super::constants::FALLBACK_ORBIT_DISTANCE,
            )
        }
    }
}

/// The full body set, fixed at initialization.
pub fn default_roster() -> Vec<CelestialBody> {
    vec![
        CelestialBody {
            id: "etheron",
            label: "ETHERON",
            kind: BodyKind::Primary,
            base_size: 400.0,
            focused_size: 400.0,
            orbital_distance: 0.0,
            initial_angle: 0.0,
            angular_speed: 0.0,
            visual: Visual::Image("assets/ETHERON.png"),
        },
        CelestialBody {
            id: "orionis",
            label: "ORIONIS",
            kind: BodyKind::Primary,
            base_size: 120.0,
            focused_size: 400.0,
            orbital_distance: 600.0,
            initial_angle: 180.0,
            angular_speed: 0.02,
            visual: Visual::Image("assets/ORIONIS.png"),
        },
        CelestialBody {
            id: "lumenara",
            label: "LUMENARA",
            kind: BodyKind::Primary,
            base_size: 140.0,
            focused_size: 400.0,
            orbital_distance: 650.0,
            initial_angle: 0.0,
            angular_speed: 0.015,
            visual: Visual::Image("assets/LUMENARA.png"),
        },
        CelestialBody {
            id: "theronix",
            label: "THERONIX",
            kind: BodyKind::Primary,
            base_size: 130.0,
            focused_size: 400.0,
            orbital_distance: 620.0,
            initial_angle: 90.0,
            angular_speed: 0.018,
            visual: Visual::Image("assets/THERONIX.png"),
        },
        CelestialBody {
            id: "moon1",
            label: "",
            kind: BodyKind::Satellite,
            base_size: 40.0,
            focused_size: 40.0,
            orbital_distance: 250.0,
            initial_angle: 45.0,
            angular_speed: 0.03,
            visual: Visual::Tint("#4dd0e1"),
        },
        CelestialBody {
            id: "moon2",
            label: "",
            kind: BodyKind::Satellite,
            base_size: 35.0,
            focused_size: 35.0,
            orbital_distance: 200.0,
            initial_angle: 135.0,
            angular_speed: 0.035,
            visual: Visual::Tint("#66bb6a"),
        },
        CelestialBody {
            id: "moon3",
            label: "",
            kind: BodyKind::Satellite,
            base_size: 30.0,
            focused_size: 30.0,
            orbital_distance: 300.0,
            initial_angle: 225.0,
            angular_speed: 0.025,
            visual: Visual::Tint("#ff9800"),
        },
        CelestialBody {
            id: "moon4",
            label: "",
            kind: BodyKind::Satellite,
            base_size: 32.0,
            focused_size: 32.0,
            orbital_distance: 280.0,
            initial_angle: 315.0,
            angular_speed: 0.027,
            visual: Visual::Tint("#ab47bc"),
        },
        CelestialBody {
            id: "moon5",
            label: "",
            kind: BodyKind::Satellite,
            base_size: 28.0,
            focused_size: 28.0,
            orbital_distance: 180.0,
            initial_angle: 270.0,
            angular_speed: 0.037,
            visual: Visual::Tint("#ef5350"),
        },
        CelestialBody {
            id: "moon6",
            label: "",
            kind: BodyKind::Satellite,
            base_size: 25.0,
            focused_size: 25.0,
            orbital_distance: 220.0,
            initial_angle: 90.0,
            angular_speed: 0.032,
            visual: Visual::Tint("#ffb74d"),
        },
    ]
}
