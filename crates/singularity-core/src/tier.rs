//! Device tiers and the per-tier tuning they select.
//!
//! A tier is chosen once per mount by the capability estimator and never
//! changes afterwards; everything that differs between constrained and
//! capable devices lives in [`TierParams`].

use crate::constants::NARROW_VIEWPORT_PX;
use rand::Rng;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Low,
    Full,
}

impl Tier {
    pub fn from_low_performance(low: bool) -> Self {
        if low {
            Tier::Low
        } else {
            Tier::Full
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Full => "full",
        }
    }
}

/// Closed range sampled uniformly when a particle is born.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub min: f32,
    pub max: f32,
}

impl Band {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min + rng.gen::<f32>() * (self.max - self.min)
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("{name} band is invalid: min {min} max {max}")]
    InvalidBand {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("spawn probability {0} is outside [0, 1]")]
    InvalidProbability(f32),
    #[error("drag {0} is outside (0, 1]")]
    InvalidDrag(f32),
    #[error("target fps must be positive, got {0}")]
    InvalidTargetFps(f64),
    #[error("frame skip must be at least 1")]
    ZeroFrameSkip,
    #[error("particle budget must be at least 1")]
    ZeroBudget,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TierParams {
    pub max_particles: usize,
    pub spawn_probability: f32,
    pub spawn_radius: Band,
    pub size: Band,
    pub lifespan: Band,
    pub force_constant: f32,
    pub drag: f32,
    pub age_step: f32,
    pub target_fps: f64,
    pub frame_skip: u32,
    pub trail_alpha: f32,
}

impl TierParams {
    pub fn low() -> Self {
        Self {
            max_particles: 12,
            spawn_probability: 0.10,
            spawn_radius: Band::new(200.0, 300.0),
            size: Band::new(0.5, 2.0),
            lifespan: Band::new(120.0, 180.0),
            force_constant: 20.0,
            drag: 0.96,
            age_step: 1.5,
            target_fps: 24.0,
            frame_skip: 3,
            trail_alpha: 0.15,
        }
    }

    pub fn full(viewport_width: f64) -> Self {
        Self {
            max_particles: if viewport_width < NARROW_VIEWPORT_PX {
                18
            } else {
                25
            },
            spawn_probability: 0.15,
            spawn_radius: Band::new(250.0, 400.0),
            size: Band::new(1.0, 3.0),
            lifespan: Band::new(200.0, 300.0),
            force_constant: 30.0,
            drag: 0.98,
            age_step: 1.0,
            target_fps: 45.0,
            frame_skip: 2,
            trail_alpha: 0.08,
        }
    }

    pub fn for_tier(tier: Tier, viewport_width: f64) -> Self {
        match tier {
            Tier::Low => Self::low(),
            Tier::Full => Self::full(viewport_width),
        }
    }

    #[inline]
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.max_particles == 0 {
            return Err(ParamsError::ZeroBudget);
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(ParamsError::InvalidProbability(self.spawn_probability));
        }
        for (name, band) in [
            ("spawn radius", self.spawn_radius),
            ("size", self.size),
            ("lifespan", self.lifespan),
        ] {
            if band.min < 0.0 || band.min > band.max {
                return Err(ParamsError::InvalidBand {
                    name,
                    min: band.min,
                    max: band.max,
                });
            }
        }
        if self.lifespan.min < 1.0 {
            return Err(ParamsError::InvalidBand {
                name: "lifespan",
                min: self.lifespan.min,
                max: self.lifespan.max,
            });
        }
        if self.drag.is_nan() || self.drag <= 0.0 || self.drag > 1.0 {
            return Err(ParamsError::InvalidDrag(self.drag));
        }
        if self.target_fps.is_nan() || self.target_fps <= 0.0 {
            return Err(ParamsError::InvalidTargetFps(self.target_fps));
        }
        if self.frame_skip == 0 {
            return Err(ParamsError::ZeroFrameSkip);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn builtin_params_validate() {
        assert_eq!(TierParams::low().validate(), Ok(()));
        assert_eq!(TierParams::full(1280.0).validate(), Ok(()));
        assert_eq!(TierParams::full(375.0).validate(), Ok(()));
    }

    #[test]
    fn narrow_viewport_lowers_full_budget() {
        assert_eq!(TierParams::full(1280.0).max_particles, 25);
        assert_eq!(TierParams::full(600.0).max_particles, 18);
        assert_eq!(TierParams::for_tier(Tier::Low, 600.0).max_particles, 12);
    }

    #[test]
    fn band_sample_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let band = Band::new(200.0, 300.0);
        for _ in 0..1000 {
            assert!(band.contains(band.sample(&mut rng)));
        }
        let point = Band::new(5.0, 5.0);
        assert_eq!(point.sample(&mut rng), 5.0);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut p = TierParams::low();
        p.spawn_probability = 1.5;
        assert_eq!(p.validate(), Err(ParamsError::InvalidProbability(1.5)));

        let mut p = TierParams::low();
        p.size = Band::new(3.0, 1.0);
        assert!(matches!(
            p.validate(),
            Err(ParamsError::InvalidBand { name: "size", .. })
        ));

        let mut p = TierParams::full(1024.0);
        p.drag = 0.0;
        assert_eq!(p.validate(), Err(ParamsError::InvalidDrag(0.0)));

        let mut p = TierParams::full(1024.0);
        p.frame_skip = 0;
        assert_eq!(p.validate(), Err(ParamsError::ZeroFrameSkip));
    }
}
