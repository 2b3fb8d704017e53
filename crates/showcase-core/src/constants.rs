// Shared choreography and timing constants used by both showcase pages.

// Frame stepping: velocities are authored per 60 Hz frame
pub const FRAME_RATE_REFERENCE: f32 = 60.0;
pub const MAX_FRAME_STEP: f32 = 1.8; // clamps catch-up after a frame hitch

// Particle drift
pub const WAVE_AMPLITUDE: f32 = 0.0012;
pub const REPEL_MIN_STRENGTH: f32 = 0.01; // below this repulsion is skipped
pub const REPEL_DIST_EPSILON: f32 = 0.001;

// Page A: scroll-driven stages
pub const SECTION_ACTIVE_RATIO: f64 = 0.55;
pub const CARD_REVEAL_DELAY_MS: f64 = 620.0;
pub const STAGE_TWEEN_MS: f64 = 980.0;
pub const CAPTION_TYPE_INTERVAL_MS: f64 = 15.0;
pub const HEADING_TYPE_INTERVAL_MS: f64 = 13.0;
pub const MOUSE_REACTIVE_STAGE: usize = 3;
pub const MOUSE_NUDGE_ALPHA: f32 = 0.08;
pub const LOADING_HIDE_DELAY_MS: f64 = 1800.0;

// Page B: orbit-driven modules
pub const FEATURE_REVEAL_DELAY_MS: f64 = 260.0;
pub const HOTSPOT_TWEEN_MS: f64 = 760.0;
pub const RESTORE_TWEEN_MS: f64 = 680.0;

// Haptic pulse lengths (ms)
pub const HAPTIC_STAGE_MS: u32 = 10;
pub const HAPTIC_TAP_MS: u32 = 8;
pub const HAPTIC_ORBIT_MS: u32 = 6;
