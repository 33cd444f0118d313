//! Asteroid belts: a seeded population of small bodies on circular orbits.

use std::f64::consts::TAU;

use glam::{EulerRot, Quat, Vec3};
use rand::prelude::*;

use engine_core::Transform;

use crate::kinematics::CircularOrbit;

#[derive(Debug, Clone, PartialEq)]
pub struct BeltConfig {
    pub name: &'static str,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub count: usize,
    pub min_size: f32,
    pub max_size: f32,
    pub color: u32,
    /// Full vertical spread, centred on the ecliptic.
    pub height_variation: f64,
    pub orbit_speed_range: (f64, f64),
}

impl BeltConfig {
    pub fn main_belt() -> Self {
        Self {
            name: "Main Asteroid Belt",
            inner_radius: 270.0,
            outer_radius: 320.0,
            count: 2000,
            min_size: 0.1,
            max_size: 0.6,
            color: 0x8b7355,
            height_variation: 15.0,
            orbit_speed_range: (0.001, 0.004),
        }
    }

    pub fn kuiper_belt() -> Self {
        Self {
            name: "Kuiper Belt",
            inner_radius: 850.0,
            outer_radius: 1100.0,
            count: 1000,
            min_size: 0.15,
            max_size: 0.8,
            color: 0x6b8e9f,
            height_variation: 40.0,
            orbit_speed_range: (0.00005, 0.0002),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub orbit: CircularOrbit,
    pub scale: f32,
    /// Tumble angles about X, Y and Z. X advances at the spin rate, Y at 0.7 of it, Z is fixed.
    pub tumble: [f64; 3],
}

impl Asteroid {
    pub fn advance(&mut self, delta: f64) {
        self.orbit.advance(delta);
        let spin = self.orbit.rotation_speed * delta;
        self.tumble[0] += spin;
        self.tumble[1] += spin * 0.7;
    }

    /// Instance transform, sun-centred.
    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.tumble[0] as f32,
            self.tumble[1] as f32,
            self.tumble[2] as f32,
        );
        Transform::from_position_rotation(self.orbit.local_position().as_vec3(), rotation).with_scale(self.scale)
    }
}

#[derive(Debug, Clone)]
pub struct AsteroidBelt {
    pub config: BeltConfig,
    pub asteroids: Vec<Asteroid>,
}

impl AsteroidBelt {
    pub fn generate(config: BeltConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (slow, fast) = config.orbit_speed_range;
        let asteroids = (0..config.count)
            .map(|_| {
                let distance = config.inner_radius + rng.gen::<f64>() * (config.outer_radius - config.inner_radius);
                let angle = rng.gen::<f64>() * TAU;
                let height = (rng.gen::<f64>() - 0.5) * config.height_variation;
                let scale = config.min_size + rng.gen::<f32>() * (config.max_size - config.min_size);
                let orbit_speed = slow + rng.gen::<f64>() * (fast - slow);
                let spin = (rng.gen::<f64>() - 0.5) * 0.5;
                Asteroid {
                    orbit: CircularOrbit::new(distance, orbit_speed, spin)
                        .with_angle(angle)
                        .with_height(height),
                    scale,
                    tumble: [rng.gen::<f64>() * TAU, rng.gen::<f64>() * TAU, rng.gen::<f64>() * TAU],
                }
            })
            .collect();
        log::info!("Generated {} with {} asteroids", config.name, config.count);
        Self { config, asteroids }
    }

    pub fn advance(&mut self, delta: f64) {
        for asteroid in &mut self.asteroids {
            asteroid.advance(delta);
        }
    }

    pub fn transforms(&self) -> impl Iterator<Item = Transform> + '_ {
        self.asteroids.iter().map(Asteroid::transform)
    }

    /// Mean orbital radius of the population.
    pub fn mean_radius(&self) -> f64 {
        if self.asteroids.is_empty() {
            return 0.0;
        }
        self.asteroids.iter().map(|a| a.orbit.distance).sum::<f64>() / self.asteroids.len() as f64
    }

    pub fn color(&self) -> Vec3 {
        let c = procgen::Pixel::from_hex(self.config.color);
        Vec3::new(c.r as f32, c.g as f32, c.b as f32) / 255.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_stays_inside_the_belt() {
        let belt = AsteroidBelt::generate(BeltConfig::main_belt(), 7);
        assert_eq!(belt.asteroids.len(), 2000);
        for a in &belt.asteroids {
            assert!((270.0..=320.0).contains(&a.orbit.distance));
            assert!(a.orbit.height.abs() <= 7.5);
            assert!((0.001..=0.004).contains(&a.orbit.orbit_speed));
            assert!((0.1..=0.6).contains(&a.scale));
        }
        assert!((belt.mean_radius() - 295.0).abs() < 3.0);
    }

    #[test]
    fn same_seed_same_belt() {
        let a = AsteroidBelt::generate(BeltConfig::kuiper_belt(), 3);
        let b = AsteroidBelt::generate(BeltConfig::kuiper_belt(), 3);
        assert_eq!(a.asteroids, b.asteroids);
    }

    #[test]
    fn tumble_y_runs_at_seven_tenths() {
        let mut belt = AsteroidBelt::generate(BeltConfig { count: 1, ..BeltConfig::main_belt() }, 1);
        let before = belt.asteroids[0];
        belt.advance(10.0);
        let after = belt.asteroids[0];
        let dx = after.tumble[0] - before.tumble[0];
        let dy = after.tumble[1] - before.tumble[1];
        assert!((dy - dx * 0.7).abs() < 1e-12);
        assert_eq!(after.tumble[2], before.tumble[2]);
        assert!((after.transform().position.length() as f64 - after.orbit.local_position().length()).abs() < 1e-3);
    }
}
