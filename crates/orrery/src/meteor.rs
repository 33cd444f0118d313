//! Background meteor shower: a small pool of streaks that spawn at random intervals.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::prelude::*;

pub const METEOR_POOL: usize = 10;
/// Length of the rendered streak behind the head.
pub const STREAK_LENGTH: f32 = 5.0;
const SPAWN_OPACITY: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Meteor {
    pub active: bool,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Seconds left before the slot frees up.
    pub life: f32,
    pub opacity: f32,
}

impl Meteor {
    /// Tail end of the streak, trailing opposite the velocity.
    pub fn tail(&self) -> Vec3 {
        self.position - self.velocity.normalize_or_zero() * STREAK_LENGTH
    }

    /// Move and age; fades over the last half second and frees the slot at zero life.
    pub fn advance(&mut self, delta: f32) {
        self.position += self.velocity * delta;
        self.life -= delta;
        if self.life < 0.5 {
            self.opacity = (self.life * 2.0).max(0.0);
        }
        if self.life <= 0.0 {
            self.active = false;
        }
    }
}

#[derive(Debug)]
pub struct MeteorShower {
    rng: StdRng,
    meteors: [Meteor; METEOR_POOL],
    spawn_timer: f32,
}

impl MeteorShower {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            meteors: [Meteor::default(); METEOR_POOL],
            spawn_timer: 0.0,
        }
    }

    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    pub fn active_count(&self) -> usize {
        self.meteors.iter().filter(|m| m.active).count()
    }

    /// Advance by a wall-clock delta.
    pub fn update(&mut self, delta: f32) {
        self.spawn_timer += delta;
        // The threshold is redrawn every frame, so the mean interval sits below the midpoint.
        let threshold = 2.0 + self.rng.gen::<f32>() * 5.0;
        if self.spawn_timer > threshold {
            self.spawn_timer = 0.0;
            self.spawn();
        }

        for meteor in self.meteors.iter_mut().filter(|m| m.active) {
            meteor.advance(delta);
        }
    }

    /// Fill the first free slot; a full pool drops the spawn.
    fn spawn(&mut self) {
        let Some(index) = self.meteors.iter().position(|m| !m.active) else {
            return;
        };
        let rng = &mut self.rng;
        let angle = rng.gen::<f32>() * TAU;
        let distance = 500.0 + rng.gen::<f32>() * 200.0;
        let (sin, cos) = angle.sin_cos();
        let position = Vec3::new(cos * distance, 100.0 + rng.gen::<f32>() * 200.0, sin * distance);
        let velocity = Vec3::new(
            -cos * (50.0 + rng.gen::<f32>() * 50.0),
            -30.0 - rng.gen::<f32>() * 20.0,
            -sin * (50.0 + rng.gen::<f32>() * 50.0),
        );
        self.meteors[index] = Meteor {
            active: true,
            position,
            velocity,
            life: 2.0 + rng.gen::<f32>() * 2.0,
            opacity: SPAWN_OPACITY,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_spawns_in_the_first_two_seconds() {
        let mut shower = MeteorShower::new(5);
        for _ in 0..100 {
            shower.update(0.019);
        }
        assert_eq!(shower.active_count(), 0);
    }

    #[test]
    fn meteors_fall_inward() {
        let mut shower = MeteorShower::new(5);
        let mut steps = 0;
        while shower.active_count() == 0 && steps < 200 {
            shower.update(0.05);
            steps += 1;
        }
        assert_eq!(shower.active_count(), 1);
        let m = shower.meteors()[0];
        let horizontal = Vec3::new(m.position.x, 0.0, m.position.z).length();
        assert!((490.0..=700.0).contains(&horizontal), "{}", horizontal);
        assert!((95.0..=300.0).contains(&m.position.y));
        assert!(m.velocity.y < 0.0);
        assert!(m.velocity.dot(Vec3::new(m.position.x, 0.0, m.position.z)) < 0.0);
        assert!(((m.tail() - m.position).length() - STREAK_LENGTH).abs() < 1e-3);
        assert!(m.life > 1.9 && m.life <= 4.0);
    }

    #[test]
    fn fades_over_the_last_half_second() {
        let mut m = Meteor {
            active: true,
            velocity: Vec3::new(-50.0, -30.0, 0.0),
            life: 1.0,
            opacity: SPAWN_OPACITY,
            ..Default::default()
        };
        m.advance(0.25);
        assert_eq!(m.opacity, SPAWN_OPACITY);
        m.advance(0.5);
        assert!((m.opacity - 0.5).abs() < 1e-6);
        assert!(m.active);
        m.advance(0.5);
        assert!(!m.active);
        assert_eq!(m.opacity, 0.0);
        assert!((m.position.x + 62.5).abs() < 1e-3);
    }
}
