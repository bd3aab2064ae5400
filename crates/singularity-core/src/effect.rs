//! The mounted effect: one owned value from mount to unmount.
//!
//! The host calls [`BlackHoleEffect::on_frame`] from its frame callback. Each
//! call re-requests the next frame, runs admission, feeds the quality
//! controller, and on processed frames draws fade, particles and the
//! singularity in that order.

use crate::constants::QUALITY_CHECK_INTERVAL_MS;
use crate::field::{ParticleField, StepReport};
use crate::probe::DeviceProfile;
use crate::quality::QualityController;
use crate::render::{backing_scale, draw_particles, draw_singularity, DrawSurface};
use crate::scheduler::{Admission, FrameGate, FrameHandle, FrameScheduler};
use crate::tier::{ParamsError, Tier, TierParams};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The effect is unmounted; nothing was scheduled or drawn.
    Idle,
    Throttled,
    Skipped,
    Rendered { spawned: bool, report: StepReport },
}

pub struct BlackHoleEffect<S: FrameScheduler> {
    profile: DeviceProfile,
    field: ParticleField,
    quality: QualityController,
    gate: FrameGate,
    scheduler: S,
    pending: Option<FrameHandle>,
    // admitted frames since the last quality check
    frame_count: u32,
    last_quality_check_ms: f64,
    mounted: bool,
}

impl<S: FrameScheduler> BlackHoleEffect<S> {
    pub fn new(
        profile: DeviceProfile,
        scheduler: S,
        seed: u64,
        now_ms: f64,
    ) -> Result<Self, ParamsError> {
        let params = TierParams::for_tier(profile.tier, profile.viewport_width);
        Self::with_params(profile, params, scheduler, seed, now_ms)
    }

    pub fn with_params(
        profile: DeviceProfile,
        params: TierParams,
        scheduler: S,
        seed: u64,
        now_ms: f64,
    ) -> Result<Self, ParamsError> {
        let quality = QualityController::new(profile.tier, params.target_fps);
        let gate = FrameGate::new(params.frame_interval_ms(), params.frame_skip, now_ms);
        let field = ParticleField::new(profile.tier, params, seed)?;
        Ok(Self {
            profile,
            field,
            quality,
            gate,
            scheduler,
            pending: None,
            frame_count: 0,
            last_quality_check_ms: now_ms,
            mounted: true,
        })
    }

    /// Build and immediately request the first frame.
    pub fn mount(
        profile: DeviceProfile,
        scheduler: S,
        seed: u64,
        now_ms: f64,
    ) -> Result<Self, ParamsError> {
        let mut effect = Self::new(profile, scheduler, seed, now_ms)?;
        effect.start();
        Ok(effect)
    }

    pub fn start(&mut self) {
        if !self.mounted || self.pending.is_some() {
            return;
        }
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[effect] host refused to schedule frames; effect disabled");
        }
    }

    pub fn on_frame<D: DrawSurface + ?Sized>(
        &mut self,
        now_ms: f64,
        surface: &mut D,
    ) -> FrameOutcome {
        if !self.mounted {
            return FrameOutcome::Idle;
        }
        self.pending = self.scheduler.request_frame();

        let admission = self.gate.admit(now_ms);
        if admission == Admission::Throttled {
            return FrameOutcome::Throttled;
        }
        self.frame_count += 1;
        self.check_quality(now_ms);
        if admission == Admission::Skipped {
            return FrameOutcome::Skipped;
        }

        let center = surface.size() * 0.5;
        self.field.set_center(center);
        surface.fade(self.field.params().trail_alpha);
        let spawned = self.field.try_spawn(self.quality.scalar());
        let report = self.field.step();
        draw_particles(surface, &self.field);
        draw_singularity(surface, self.profile.tier, center);
        FrameOutcome::Rendered { spawned, report }
    }

    fn check_quality(&mut self, now_ms: f64) {
        if now_ms - self.last_quality_check_ms < QUALITY_CHECK_INTERVAL_MS {
            return;
        }
        let achieved_fps = self.frame_count as f64 / (QUALITY_CHECK_INTERVAL_MS / 1000.0);
        self.quality.record(achieved_fps);
        self.frame_count = 0;
        self.last_quality_check_ms = now_ms;
    }

    /// Tear down: cancel the outstanding frame and drop all particles. Later
    /// frame callbacks are no-ops.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.field.clear();
        self.mounted = false;
        log::debug!("[effect] unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn tier(&self) -> Tier {
        self.profile.tier
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Direct pool access for hosts that seed or inspect particles.
    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn quality(&self) -> &QualityController {
        &self.quality
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Backing-store scale for the ratio seen at mount.
    pub fn backing_scale(&self) -> f64 {
        self.backing_scale_for(self.profile.device_pixel_ratio)
    }

    /// Backing-store scale for the current device pixel ratio; zoom and
    /// monitor changes move it after mount.
    pub fn backing_scale_for(&self, device_pixel_ratio: f64) -> f64 {
        backing_scale(self.profile.tier, device_pixel_ratio)
    }
}
