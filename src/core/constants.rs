// Engine, ring-overlay and starfield tuning constants shared by the core
// modules and the web frontend.

// ---------------- Focus / orbit motion ----------------

/// Fraction of the remaining distance covered per frame while easing a
/// focused body toward the center.
pub const FOCUS_EASE: f32 = 0.12;
/// Ease factor for the spiral back out to orbit.
pub const RETURN_EASE: f32 = 0.10;
/// Snap-to-center threshold (px).
pub const CENTER_SNAP_PX: f32 = 2.0;
/// Snap-to-orbit threshold (px).
pub const ORBIT_SNAP_PX: f32 = 10.0;
/// Below this measured radius an evicted body's live pose is considered
/// noise; its rest pose is used for the return instead.
pub const DEGENERATE_RETURN_PX: f32 = 50.0;
/// Rest pose for bodies whose nominal orbit radius is zero (the home body).
pub const FALLBACK_ORBIT_DISTANCE: f32 = 600.0;
pub const FALLBACK_ORBIT_ANGLE_DEG: f32 = 180.0;

// ---------------- Viewport / responsive layout ----------------

pub const PHONE_BREAKPOINT_PX: f32 = 480.0;
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

/// Padding subtracted from the half-extent when bounding orbit radii.
pub const ORBIT_PADDING_DESKTOP_PX: f32 = 100.0;
pub const ORBIT_PADDING_TABLET_PX: f32 = 60.0;
pub const ORBIT_PADDING_PHONE_PX: f32 = 40.0;

/// Floor for the orbit bound so positions stay finite on zero-sized or
/// hidden viewports.
pub const MIN_MAX_DISTANCE_PX: f32 = 120.0;

/// Body size multiplier tiers keyed on viewport width: (upper bound, factor).
pub const SIZE_TIERS: [(f32, f32); 6] = [
    (480.0, 0.45),
    (640.0, 0.55),
    (768.0, 0.65),
    (1024.0, 0.80),
    (1440.0, 0.90),
    (f32::INFINITY, 1.0),
];

// ---------------- Ring overlay ----------------

pub const RING_WIDTH_DESKTOP: f32 = 1.2;
pub const RING_WIDTH_MOBILE: f32 = 0.8;
pub const RING_OPACITY_DESKTOP: f32 = 0.2;
pub const RING_OPACITY_MOBILE: f32 = 0.15;
/// Satellite orbits draw lighter than primary ones.
pub const SATELLITE_RING_OPACITY_FACTOR: f32 = 0.5;
pub const SATELLITE_RING_WIDTH_FACTOR: f32 = 0.67;

pub const FILLER_SPACING_DESKTOP_PX: f32 = 150.0;
pub const FILLER_SPACING_MOBILE_PX: f32 = 120.0;
/// Fillers never appear inside this radius.
pub const FILLER_MIN_RADIUS_PX: f32 = 100.0;
pub const FILLER_MIN_RADIUS_PHONE_PX: f32 = 80.0;
pub const FILLER_OPACITY_DESKTOP: f32 = 0.05;
pub const FILLER_OPACITY_MOBILE: f32 = 0.03;
pub const FILLER_WIDTH_DESKTOP: f32 = 0.5;
pub const FILLER_WIDTH_MOBILE: f32 = 0.4;

// ---------------- Starfield ----------------

/// One star per this many square pixels of canvas.
pub const STAR_AREA_PER_STAR_PX2: f32 = 8000.0;
/// Share of stars rendered as bright (glowing) ones.
pub const STAR_BRIGHT_SHARE: f32 = 0.1;
/// Twinkle clock advance per second (0.01 per frame at 60 fps).
pub const STAR_TWINKLE_RATE: f32 = 0.6;
