//! Application-level configuration constants.

// Timing behavior
pub const TICK_INTERVAL_MS: u32 = 100;

// Button palette, foreground/fill pairs
pub const START_COLOR: &str = "#50D167";
pub const START_BACKGROUND: &str = "#1B361F";
pub const STOP_COLOR: &str = "#E33935";
pub const STOP_BACKGROUND: &str = "#3C1715";
pub const LAP_COLOR: &str = "#FFFFFF";
pub const LAP_BACKGROUND: &str = "#3D3D3D";
pub const LAP_DISABLED_COLOR: &str = "#8B8B90";
pub const LAP_DISABLED_BACKGROUND: &str = "#151515";

// Lap table highlights
pub const FASTEST_COLOR: &str = "#4BC05F";
pub const SLOWEST_COLOR: &str = "#CC3531";
