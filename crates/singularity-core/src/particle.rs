use crate::constants::ALPHA_FLOOR;
use glam::Vec2;

/// Point mass orbiting the singularity. Velocity is in pixels per frame and
/// age is counted in frames (fractional on the low tier).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub age: f32,
    pub max_age: f32,
}

impl Particle {
    pub fn at_rest(position: Vec2, size: f32, max_age: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            age: 0.0,
            max_age,
        }
    }

    /// Linear fade by age, floored so a live particle never disappears.
    #[inline]
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age / self.max_age).max(ALPHA_FLOOR)
    }

    #[inline]
    pub fn distance_to(&self, center: Vec2) -> f32 {
        self.position.distance(center)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age > self.max_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_fades_linearly_then_floors() {
        let mut p = Particle::at_rest(Vec2::ZERO, 1.0, 200.0);
        assert_eq!(p.alpha(), 1.0);
        p.age = 100.0;
        assert!((p.alpha() - 0.5).abs() < 1e-6);
        p.age = 190.0;
        assert_eq!(p.alpha(), ALPHA_FLOOR);
        p.age = 200.0;
        assert_eq!(p.alpha(), ALPHA_FLOOR);
    }

    #[test]
    fn expiry_is_strictly_past_max_age() {
        let mut p = Particle::at_rest(Vec2::ZERO, 1.0, 120.0);
        p.age = 120.0;
        assert!(!p.is_expired());
        p.age = 120.5;
        assert!(p.is_expired());
    }
}
