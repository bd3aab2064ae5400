//! Particle pool and per-frame physics for the accretion disk.
//!
//! Particles are born at rest on a ring around the centre, pulled in by an
//! inverse-square attraction, pushed sideways by a spiral term and damped by
//! drag. They leave the pool either by crossing the absorption radius or by
//! outliving their lifespan.

use crate::constants::{ABSORPTION_RADIUS_SQ, SPIRAL_BASE, SPIRAL_FALLOFF_PER_PX, SPIRAL_FLOOR};
use crate::particle::Particle;
use crate::tier::{ParamsError, Tier, TierParams};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// What happened to the pool during one [`ParticleField::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub absorbed: usize,
    pub expired: usize,
    pub alive: usize,
}

pub struct ParticleField {
    tier: Tier,
    params: TierParams,
    center: Vec2,
    particles: Vec<Particle>,
    rng: StdRng,
}

/// Tangential force magnitude: strongest near the centre, floored further out.
#[inline]
pub fn spiral_strength(distance: f32) -> f32 {
    (SPIRAL_BASE - distance * SPIRAL_FALLOFF_PER_PX).max(SPIRAL_FLOOR)
}

impl ParticleField {
    pub fn new(tier: Tier, params: TierParams, seed: u64) -> Result<Self, ParamsError> {
        params.validate()?;
        let capacity = params.max_particles;
        Ok(Self {
            tier,
            params,
            center: Vec2::ZERO,
            particles: Vec::with_capacity(capacity),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn params(&self) -> &TierParams {
        &self.params
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Place a particle directly, bypassing the spawn policy.
    pub fn insert(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Live-particle ceiling at the given quality scalar.
    #[inline]
    pub fn spawn_budget(&self, quality: f32) -> usize {
        // small bias keeps products like 25 * 0.4 from flooring one short
        (self.params.max_particles as f32 * quality + 1e-4).floor() as usize
    }

    /// Spawn at most one particle. Returns true when a particle was born.
    pub fn try_spawn(&mut self, quality: f32) -> bool {
        if self.particles.len() >= self.spawn_budget(quality) {
            return false;
        }
        if self.rng.gen::<f32>() >= self.params.spawn_probability * quality {
            return false;
        }
        let angle = self.rng.gen::<f32>() * TAU;
        let radius = self.params.spawn_radius.sample(&mut self.rng);
        let size = self.params.size.sample(&mut self.rng);
        let max_age = self.params.lifespan.sample(&mut self.rng).floor();
        let position = self.center + Vec2::from_angle(angle) * radius;
        self.particles.push(Particle::at_rest(position, size, max_age.max(1.0)));
        true
    }

    /// Advance every particle by one frame and drop the absorbed and expired.
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport::default();
        let center = self.center;
        let params = &self.params;
        // Low tier spirals only even slots; the slot is the particle's index at
        // the start of this step, so the set of spiralling particles shifts as
        // the pool changes.
        let spiral_all = self.tier == Tier::Full;
        let mut index = 0usize;

        self.particles.retain_mut(|p| {
            let slot = index;
            index += 1;

            let d = center - p.position;
            let dist_sq = d.length_squared();
            if dist_sq < ABSORPTION_RADIUS_SQ {
                report.absorbed += 1;
                return false;
            }
            let dist = dist_sq.sqrt();
            let inv_dist = 1.0 / dist;

            p.velocity += d * inv_dist * (params.force_constant / dist_sq);
            if spiral_all || slot % 2 == 0 {
                p.velocity += Vec2::new(-d.y, d.x) * inv_dist * spiral_strength(dist);
            }
            p.position += p.velocity;
            p.velocity *= params.drag;

            // never render inside the horizon
            if p.position.distance_squared(center) < ABSORPTION_RADIUS_SQ {
                report.absorbed += 1;
                return false;
            }

            p.age += params.age_step;
            if p.is_expired() {
                report.expired += 1;
                return false;
            }
            true
        });

        report.alive = self.particles.len();
        report
    }
}
