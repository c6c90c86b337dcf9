// Host-page contract and presentation constants for the web frontend.

/// Element the bodies orbit inside; its bounding rect centers the layout.
pub const SYSTEM_ID: &str = "orbital-system";
/// Full-viewport overlay canvas (starfield + rings).
pub const CANVAS_ID: &str = "orbit-canvas";
/// Clicks outside this element defocus the current body.
pub const MAIN_CONTENT_ID: &str = "main-content";
/// Stats panel the focus changes feed.
pub const PLANET_DISPLAY_ID: &str = "planet-display";
pub const PLANET_NAME_ID: &str = "planet-name";

/// DOM event dispatched on every committed focus change; detail is the
/// focused body id or null.
pub const FOCUS_EVENT: &str = "orrery:focuschange";

pub const RESIZE_DEBOUNCE_MS: i32 = 150;

// Stacking order: orbiting bodies sit under the center, and a body flying in
// overlaps the one still leaving.
pub const Z_ORBITING: &str = "20";
pub const Z_CENTER: &str = "1000";
pub const Z_INCOMING: &str = "1001";

pub const TRANSITION_FOCUS: &str =
    "transform 0.1s linear, width 0.5s ease, height 0.5s ease, z-index 0.3s ease";
pub const TRANSITION_ORBIT: &str = "transform 0.3s ease, z-index 0.3s ease";
