/// DOM ids, capability names and inline styles used by the web front-end.
///
/// Kept free of `web_sys` so the values can be checked from host tests.
// Elements
pub const PERF_MONITOR_ID: &str = "perf-monitor";
pub const GLOW_ELEMENT_ID: &str = "cursor-glow";

// Globals probed for the capability estimate
pub const IDLE_CALLBACK_GLOBAL: &str = "requestIdleCallback";
pub const INTERSECTION_OBSERVER_GLOBAL: &str = "IntersectionObserver";

// performance.memory is reported in bytes
pub const BYTES_PER_MIB: f64 = 1_048_576.0;

// Cursor glow look
pub const GLOW_BACKGROUND: &str =
    "radial-gradient(circle, rgba(0, 212, 255, 0.3) 0%, transparent 70%)";
pub const GLOW_BLUR_PX: u32 = 10;
pub const GLOW_Z_INDEX: u32 = 9999;
pub const GLOW_FADE_MS: u32 = 300;

/// Inline style for the glow element; starts hidden until the pointer enters.
pub fn glow_style(size_px: f64) -> String {
    format!(
        "pointer-events:none;position:fixed;left:0px;top:0px;width:{size}px;height:{size}px;\
         border-radius:50%;background:{bg};filter:blur({blur}px);z-index:{z};\
         opacity:0;transition:opacity {fade}ms",
        size = size_px,
        bg = GLOW_BACKGROUND,
        blur = GLOW_BLUR_PX,
        z = GLOW_Z_INDEX,
        fade = GLOW_FADE_MS,
    )
}

/// Whole MiB from a byte count, `None` when the host reports nothing useful.
pub fn heap_mib(used_bytes: f64) -> Option<u32> {
    if used_bytes.is_finite() && used_bytes > 0.0 {
        Some((used_bytes / BYTES_PER_MIB).round() as u32)
    } else {
        None
    }
}
