//! Drawing of the effect onto an abstract 2D surface.
//!
//! The surface works in logical (CSS) pixels; the host is responsible for
//! mapping that onto its backing store at [`backing_scale`].

use crate::constants::{
    COLOR_GRADIENT_SPAN_PX, FULL_TIER_MAX_DPR, HORIZON_DISC_RADIUS, HORIZON_GLOW_RADIUS,
    HORIZON_RING_RADIUS, HORIZON_RING_WIDTH, LOW_TIER_BACKING_SCALE,
};
use crate::field::ParticleField;
use crate::tier::Tier;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub const fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    pub fn to_css(&self) -> String {
        format!(
            "hsla({:.0}, {:.0}%, {:.0}%, {:.3})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

pub const LOW_TIER_PARTICLE: Hsla = Hsla::new(30.0, 100.0, 55.0, 1.0);
pub const HORIZON_CORE: Hsla = Hsla::new(0.0, 0.0, 0.0, 1.0);
pub const HORIZON_RIM: Hsla = Hsla::new(28.0, 100.0, 45.0, 0.0);
pub const HORIZON_RING: Hsla = Hsla::new(35.0, 100.0, 60.0, 0.6);

pub type GradientStops = SmallVec<[(f32, Hsla); 4]>;

/// Drawing commands the effect issues each processed frame.
pub trait DrawSurface {
    /// Logical size of the drawable area.
    fn size(&self) -> Vec2;
    /// Paint translucent black over everything, leaving motion trails.
    fn fade(&mut self, alpha: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla);
    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[(f32, Hsla)]);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Hsla);
}

/// Flat orange on the low tier; on the full tier hue and lightness shift from
/// hot near the centre to amber at the rim.
pub fn particle_color(tier: Tier, distance: f32, alpha: f32) -> Hsla {
    match tier {
        Tier::Low => LOW_TIER_PARTICLE.with_alpha(alpha),
        Tier::Full => {
            let t = (distance / COLOR_GRADIENT_SPAN_PX).clamp(0.0, 1.0);
            Hsla::new(10.0 + 35.0 * t, 100.0, 65.0 - 20.0 * t, alpha)
        }
    }
}

pub fn draw_particles<D: DrawSurface + ?Sized>(surface: &mut D, field: &ParticleField) {
    let center = field.center();
    let tier = field.tier();
    for p in field.particles() {
        let color = particle_color(tier, p.distance_to(center), p.alpha());
        surface.fill_circle(p.position, p.size, color);
    }
}

pub fn horizon_gradient() -> GradientStops {
    smallvec![
        (0.0, HORIZON_CORE),
        (HORIZON_DISC_RADIUS / HORIZON_GLOW_RADIUS, HORIZON_CORE),
        (1.0, HORIZON_RIM),
    ]
}

pub fn draw_singularity<D: DrawSurface + ?Sized>(surface: &mut D, tier: Tier, center: Vec2) {
    match tier {
        Tier::Low => surface.fill_circle(center, HORIZON_DISC_RADIUS, HORIZON_CORE),
        Tier::Full => {
            surface.fill_radial(center, HORIZON_GLOW_RADIUS, &horizon_gradient());
            surface.stroke_circle(center, HORIZON_RING_RADIUS, HORIZON_RING_WIDTH, HORIZON_RING);
        }
    }
}

/// Backing-store pixels per logical pixel. Constrained devices render below
/// native resolution to save fill rate.
pub fn backing_scale(tier: Tier, device_pixel_ratio: f64) -> f64 {
    match tier {
        Tier::Low => LOW_TIER_BACKING_SCALE,
        Tier::Full => device_pixel_ratio.min(FULL_TIER_MAX_DPR),
    }
}
