// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use singularity_core::{
    ABSORPTION_RADIUS, FPS_FAIR_BELOW, FPS_POOR_BELOW, GLOW_OFFSET_PX, GLOW_SIZE_PX,
    HORIZON_DISC_RADIUS, HORIZON_GLOW_RADIUS, HORIZON_RING_RADIUS, MEMORY_ELEVATED_ABOVE_MB,
    MEMORY_HIGH_ABOVE_MB, QUALITY_HIGH_WATERMARK, QUALITY_LOW_WATERMARK, QUALITY_MAX, QUALITY_MIN,
    QUALITY_STEP_DOWN, QUALITY_STEP_UP, SPIRAL_BASE, SPIRAL_FALLOFF_PER_PX, SPIRAL_FLOOR,
};

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_consistent() {
    // Quality range and steps
    assert!(QUALITY_MIN > 0.0 && QUALITY_MIN < QUALITY_MAX);
    assert!(QUALITY_STEP_UP < QUALITY_STEP_DOWN);
    assert!(QUALITY_LOW_WATERMARK < QUALITY_HIGH_WATERMARK);

    // The glyph covers the absorption zone and sits inside its own glow
    assert_eq!(HORIZON_DISC_RADIUS, ABSORPTION_RADIUS);
    assert!(HORIZON_RING_RADIUS > ABSORPTION_RADIUS);
    assert!(HORIZON_RING_RADIUS < HORIZON_GLOW_RADIUS);

    // Spiral force bottoms out by 250 px
    assert!(SPIRAL_BASE > SPIRAL_FLOOR);
    assert!((SPIRAL_BASE - SPIRAL_FLOOR) / SPIRAL_FALLOFF_PER_PX <= 250.0 + 1e-3);

    // Monitor bands
    assert!(FPS_POOR_BELOW < FPS_FAIR_BELOW);
    assert!(MEMORY_ELEVATED_ABOVE_MB < MEMORY_HIGH_ABOVE_MB);

    assert_eq!(GLOW_OFFSET_PX * 2.0, GLOW_SIZE_PX);
}

#[test]
fn glow_style_starts_hidden_and_ignores_pointer() {
    let style = glow_style(GLOW_SIZE_PX);
    assert!(style.contains("width:20px;height:20px"));
    assert!(style.contains("pointer-events:none"));
    assert!(style.contains("position:fixed"));
    assert!(style.contains("opacity:0"));
    assert!(style.contains("transition:opacity 300ms"));
    assert!(style.contains(GLOW_BACKGROUND));
    assert!(style.contains("z-index:9999"));
}

#[test]
fn heap_mib_rounds_and_rejects_missing_values() {
    assert_eq!(heap_mib(64.0 * BYTES_PER_MIB), Some(64));
    assert_eq!(heap_mib(1.6 * BYTES_PER_MIB), Some(2));
    assert_eq!(heap_mib(0.0), None);
    assert_eq!(heap_mib(-5.0), None);
    assert_eq!(heap_mib(f64::NAN), None);
}

#[test]
fn element_ids_are_distinct() {
    assert_ne!(PERF_MONITOR_ID, GLOW_ELEMENT_ID);
    assert!(!IDLE_CALLBACK_GLOBAL.is_empty());
    assert!(!INTERSECTION_OBSERVER_GLOBAL.is_empty());
}
