//! Ring strips and the sun glow sprite.

use glam::Vec2;

use crate::noise::SimplexNoise;
use crate::surfaces::{SurfaceGenerator, SurfaceParams};
use crate::textures::{Brush, Pixel, TextureData};

/// Ring strip size; x runs from the inner to the outer edge.
pub const RING_SIZE: (u32, u32) = (512, 64);

/// Default ring tint when the catalog gives none.
const DEFAULT_RING_COLOR: [u8; 3] = [0xcc, 0xbb, 0xaa];

/// Radial density profile of a ring system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingProfile {
    /// C, B, A and F rings with the Cassini Division and Encke Gap.
    Saturn,
    /// Single triangular band peaking mid-way.
    Simple,
}

/// Opacity of the ring at normalised radius `t` in [0, 1).
pub fn ring_density(noise: &SimplexNoise, profile: RingProfile, t: f64) -> f64 {
    match profile {
        RingProfile::Saturn => {
            let mut density = 0.0;
            // C ring
            if t > 0.05 && t < 0.25 {
                density = 0.3 + noise.noise_2d(t * 50.0, 0.0) * 0.1;
            }
            // B ring
            if t > 0.28 && t < 0.55 {
                density = 0.8 + noise.noise_2d(t * 100.0, 0.0) * 0.15;
            }
            // Cassini Division
            if t > 0.55 && t < 0.60 {
                density = 0.05;
            }
            // A ring with the Encke Gap
            if t > 0.60 && t < 0.85 {
                density = if t > 0.77 && t < 0.78 {
                    0.05
                } else {
                    0.6 + noise.noise_2d(t * 80.0, 0.0) * 0.1
                };
            }
            // F ring
            if t > 0.90 && t < 0.92 {
                density = 0.4;
            }
            density
        }
        RingProfile::Simple => {
            let base = (1.0 - (t - 0.5).abs() * 2.0) * 0.5;
            (base + noise.noise_2d(t * 30.0, 0.0) * 0.1).max(0.0)
        }
    }
}

impl SurfaceGenerator {
    /// 512×64 ring strip: colour from the palette, density in alpha.
    pub fn generate_rings(&self, profile: RingProfile, params: &SurfaceParams) -> TextureData {
        let (width, height) = RING_SIZE;
        let mut tex = TextureData::new(width, height);
        let noise = self.noise();

        for x in 0..width {
            let t = x as f64 / width as f64;
            let density = ring_density(noise, profile, t);

            let [r, g, b] = if params.ring_colors.is_empty() {
                DEFAULT_RING_COLOR
            } else {
                let n = params.ring_colors.len();
                params.ring_colors[(t * n as f64).floor() as usize % n]
            };

            let alpha = (density * 255.0).clamp(0.0, 255.0) as u8;
            for y in 0..height {
                let variation = noise.noise_2d(t * 200.0, y as f64 * 0.5) * 0.1;
                let channel = |base: u8, scale: f64| (base as f64 + variation * scale).clamp(0.0, 255.0) as u8;
                tex.set_pixel(
                    x,
                    y,
                    Pixel::new(channel(r, 30.0), channel(g, 25.0), channel(b, 20.0), alpha),
                );
            }
        }

        log::debug!("Painted {:?} ring strip", profile);
        tex
    }

    /// Square additive glow sprite fading from warm white to transparent red.
    pub fn generate_glow(&self, size: u32) -> TextureData {
        let mut tex = TextureData::new(size, size);
        let half = size as f32 / 2.0;
        let center = Vec2::splat(half);
        let glow = Brush::radial(
            center,
            half,
            &[
                (0.0, Pixel::rgba(255, 200, 100, 1.0)),
                (0.2, Pixel::rgba(255, 150, 50, 0.8)),
                (0.4, Pixel::rgba(255, 100, 0, 0.4)),
                (0.7, Pixel::rgba(255, 50, 0, 0.1)),
                (1.0, Pixel::rgba(255, 0, 0, 0.0)),
            ],
        );
        tex.fill(&glow);
        tex
    }
}
