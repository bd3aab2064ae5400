// Shared helpers for host-side tests: a surface that records draw calls and a
// few canned device profiles.

#![allow(dead_code)]
use glam::Vec2;
use singularity_core::{DeviceProfile, DrawSurface, Hsla, Tier, TierParams};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Fade(f32),
    Circle {
        center: Vec2,
        radius: f32,
        color: Hsla,
    },
    Radial {
        center: Vec2,
        radius: f32,
        stops: usize,
    },
    Ring {
        center: Vec2,
        radius: f32,
        width: f32,
    },
}

pub struct RecordingSurface {
    pub size: Vec2,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            calls: Vec::new(),
        }
    }

    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fade(&mut self, alpha: f32) {
        self.calls.push(DrawCall::Fade(alpha));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[(f32, Hsla)]) {
        self.calls.push(DrawCall::Radial {
            center,
            radius,
            stops: stops.len(),
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, _color: Hsla) {
        self.calls.push(DrawCall::Ring {
            center,
            radius,
            width,
        });
    }
}

pub fn profile(tier: Tier) -> DeviceProfile {
    DeviceProfile {
        tier,
        label: "Test Device (8 cores)".to_string(),
        viewport_width: 1280.0,
        device_pixel_ratio: 1.0,
    }
}

/// Tier params with the spawn roll forced to always succeed.
pub fn forced_spawn(tier: Tier) -> TierParams {
    let mut params = TierParams::for_tier(tier, 1280.0);
    params.spawn_probability = 1.0;
    params
}

pub const DISPLAY_HZ_MS: f64 = 1000.0 / 60.0;
