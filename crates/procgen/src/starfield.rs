//! Background star shell.

use std::f32::consts::PI;

use glam::Vec3;
use rand::prelude::*;

use crate::textures::Pixel;

#[derive(Debug, Clone)]
pub struct StarfieldConfig {
    pub count: usize,
    pub radius: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub palette: Vec<u32>,
    /// Large twinkling stars placed on an inner shell at 0.9 × radius.
    pub bright_count: usize,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 15_000,
            radius: 3000.0,
            min_size: 0.5,
            max_size: 2.5,
            palette: vec![0xffffff, 0xffffee, 0xeeeeff, 0xffeeee, 0xffeedd],
            bright_count: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub color: Pixel,
    pub size: f32,
}

/// Uniformly distributed direction on the unit sphere.
fn random_direction(rng: &mut StdRng) -> Vec3 {
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    let theta = rng.gen::<f32>() * PI * 2.0;
    Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
}

/// Generate the star shell; bright stars follow the regular ones.
pub fn generate_starfield(seed: u64, config: &StarfieldConfig) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stars = Vec::with_capacity(config.count + config.bright_count);

    for _ in 0..config.count {
        let dir = random_direction(&mut rng);
        let r = config.radius * (0.8 + rng.gen::<f32>() * 0.4);
        let color = if config.palette.is_empty() {
            Pixel::WHITE
        } else {
            Pixel::from_hex(config.palette[rng.gen_range(0..config.palette.len())])
        };
        // Squared bias toward small stars
        let size = config.min_size + rng.gen::<f32>().powi(2) * (config.max_size - config.min_size);
        stars.push(Star {
            position: dir * r,
            color,
            size,
        });
    }

    for _ in 0..config.bright_count {
        stars.push(Star {
            position: random_direction(&mut rng) * config.radius * 0.9,
            color: Pixel::from_rgb(1.0, 0.95, 0.9),
            size: 3.0 + rng.gen::<f32>() * 4.0,
        });
    }

    log::info!("Generated starfield with {} stars", stars.len());
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_lie_on_the_shell() {
        let config = StarfieldConfig::default();
        let stars = generate_starfield(42, &config);
        assert_eq!(stars.len(), 15_050);

        for star in &stars[..config.count] {
            let d = star.position.length();
            assert!(d >= 2400.0 - 0.5 && d <= 3600.0 + 0.5, "distance {}", d);
            assert!(star.size >= 0.5 && star.size <= 2.5);
        }
        for star in &stars[config.count..] {
            assert!((star.position.length() - 2700.0).abs() < 0.5);
        }
    }

    #[test]
    fn hemispheres_are_balanced() {
        let config = StarfieldConfig {
            bright_count: 0,
            ..StarfieldConfig::default()
        };
        let stars = generate_starfield(9, &config);
        let north = stars.iter().filter(|s| s.position.z > 0.0).count();
        let ratio = north as f32 / stars.len() as f32;
        assert!((ratio - 0.5).abs() < 0.03, "ratio {}", ratio);
    }
}
