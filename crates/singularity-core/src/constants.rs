// Shared tuning constants for the accretion effect, used by both the core
// simulation and the web front-end.

// Absorption
pub const ABSORPTION_RADIUS: f32 = 25.0; // particles closer than this are swallowed
pub const ABSORPTION_RADIUS_SQ: f32 = ABSORPTION_RADIUS * ABSORPTION_RADIUS;

// Spiral (tangential) force: max(SPIRAL_FLOOR, SPIRAL_BASE - distance * SPIRAL_FALLOFF)
pub const SPIRAL_BASE: f32 = 1.2;
pub const SPIRAL_FALLOFF_PER_PX: f32 = 0.004;
pub const SPIRAL_FLOOR: f32 = 0.2;

// Particles never fade below this alpha while alive
pub const ALPHA_FLOOR: f32 = 0.3;

// Adaptive quality controller
pub const QUALITY_MIN: f32 = 0.3;
pub const QUALITY_MAX: f32 = 1.0;
pub const QUALITY_STEP_DOWN: f32 = 0.1;
pub const QUALITY_STEP_UP: f32 = 0.05;
pub const QUALITY_CHECK_INTERVAL_MS: f64 = 2000.0;
pub const QUALITY_LOW_WATERMARK: f64 = 0.8; // fraction of target fps that triggers a step down
pub const QUALITY_HIGH_WATERMARK: f64 = 0.95; // fraction of target fps that allows a step up

// Capability estimation
pub const NARROW_VIEWPORT_PX: f64 = 768.0;
pub const HIGH_DPI_THRESHOLD: f64 = 2.0;
pub const LOW_CORE_COUNT: u32 = 4;

// Backing store resolution
pub const LOW_TIER_BACKING_SCALE: f64 = 0.75;
pub const FULL_TIER_MAX_DPR: f64 = 1.5;

// Color gradient on the full tier is interpolated over this distance (px)
pub const COLOR_GRADIENT_SPAN_PX: f32 = 400.0;

// Singularity glyph
pub const HORIZON_DISC_RADIUS: f32 = ABSORPTION_RADIUS;
pub const HORIZON_GLOW_RADIUS: f32 = 40.0;
pub const HORIZON_RING_RADIUS: f32 = 27.0;
pub const HORIZON_RING_WIDTH: f32 = 1.5;

// Performance monitor
pub const FPS_SAMPLE_INTERVAL_MS: f64 = 1000.0;
pub const FPS_POOR_BELOW: u32 = 30;
pub const FPS_FAIR_BELOW: u32 = 45;
pub const MEMORY_ELEVATED_ABOVE_MB: u32 = 50;
pub const MEMORY_HIGH_ABOVE_MB: u32 = 100;

// Cursor glow
pub const GLOW_SIZE_PX: f64 = 20.0;
pub const GLOW_OFFSET_PX: f64 = GLOW_SIZE_PX / 2.0;
