//! Hysteresis-band quality controller.
//!
//! Not a PID loop: each check moves the scalar by at most one fixed step, and
//! steps down are larger than steps up so the effect sheds load quickly and
//! recovers slowly.

use crate::constants::{
    QUALITY_HIGH_WATERMARK, QUALITY_LOW_WATERMARK, QUALITY_MAX, QUALITY_MIN, QUALITY_STEP_DOWN,
    QUALITY_STEP_UP,
};
use crate::tier::Tier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityChange {
    Lowered,
    Raised,
    Unchanged,
}

#[derive(Clone, Debug)]
pub struct QualityController {
    scalar: f32,
    adaptive: bool,
    target_fps: f64,
}

// Keep the scalar on a 0.01 grid so repeated steps land on exact values.
#[inline]
fn snap(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

impl QualityController {
    /// Only the low tier adapts; the full tier stays pinned at 1.0.
    pub fn new(tier: Tier, target_fps: f64) -> Self {
        Self {
            scalar: QUALITY_MAX,
            adaptive: tier == Tier::Low,
            target_fps,
        }
    }

    #[inline]
    pub fn scalar(&self) -> f32 {
        self.scalar
    }

    pub fn is_adaptive(&self) -> bool {
        self.adaptive
    }

    pub fn record(&mut self, achieved_fps: f64) -> QualityChange {
        if !self.adaptive {
            return QualityChange::Unchanged;
        }
        let before = self.scalar;
        if achieved_fps < self.target_fps * QUALITY_LOW_WATERMARK && self.scalar > QUALITY_MIN {
            self.scalar = snap((self.scalar - QUALITY_STEP_DOWN).max(QUALITY_MIN));
        } else if achieved_fps > self.target_fps * QUALITY_HIGH_WATERMARK
            && self.scalar < QUALITY_MAX
        {
            self.scalar = snap((self.scalar + QUALITY_STEP_UP).min(QUALITY_MAX));
        }

        if self.scalar < before {
            log::debug!(
                "[quality] fps={:.1} target={:.0} lowered {:.2} -> {:.2}",
                achieved_fps,
                self.target_fps,
                before,
                self.scalar
            );
            QualityChange::Lowered
        } else if self.scalar > before {
            log::debug!(
                "[quality] fps={:.1} target={:.0} raised {:.2} -> {:.2}",
                achieved_fps,
                self.target_fps,
                before,
                self.scalar
            );
            QualityChange::Raised
        } else {
            QualityChange::Unchanged
        }
    }
}
