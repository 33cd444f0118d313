//! Planet surface, bump and cloud maps.
//!
//! Every painter draws into an equirectangular buffer from a seeded RNG, so a
//! generator built with the same seed produces bit-identical textures.

use std::f32::consts::PI;

use engine_core::easing::smoothstep;
use glam::Vec2;
use rand::prelude::*;

use crate::noise::SimplexNoise;
use crate::textures::{Brush, Path, Pixel, TextureData};

/// Albedo map size.
pub const SURFACE_SIZE: (u32, u32) = (1024, 512);
/// Bump map size.
pub const BUMP_SIZE: (u32, u32) = (512, 256);
/// Cloud layer size.
pub const CLOUD_SIZE: (u32, u32) = (512, 256);

/// Which bespoke painter a planet or dwarf planet uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Ceres,
    Generic,
}

impl SurfaceKind {
    /// Map an English display name to its painter; anything unknown is `Generic`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Mercury" => Self::Mercury,
            "Venus" => Self::Venus,
            "Earth" => Self::Earth,
            "Mars" => Self::Mars,
            "Jupiter" => Self::Jupiter,
            "Saturn" => Self::Saturn,
            "Uranus" => Self::Uranus,
            "Neptune" => Self::Neptune,
            "Pluto" => Self::Pluto,
            "Ceres" => Self::Ceres,
            _ => Self::Generic,
        }
    }

    /// Rocky bodies get extra crater relief in the bump map.
    pub fn is_cratered(self) -> bool {
        matches!(self, Self::Mercury | Self::Mars | Self::Ceres)
    }
}

/// Catalog-supplied inputs to the painters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceParams {
    pub base_color: [u8; 3],
    /// Ring palette indexed by radial position; a single entry paints a uniform ring.
    pub ring_colors: Vec<[u8; 3]>,
}

impl SurfaceParams {
    pub fn new(base_color: u32) -> Self {
        Self {
            base_color: Pixel::from_hex(base_color).rgb_bytes(),
            ring_colors: Vec::new(),
        }
    }

    pub fn with_ring_colors(mut self, colors: &[u32]) -> Self {
        self.ring_colors = colors
            .iter()
            .map(|&c| Pixel::from_hex(c).rgb_bytes())
            .collect();
        self
    }
}

/// Deterministic texture factory shared by planets, moons and rings.
#[derive(Debug, Clone)]
pub struct SurfaceGenerator {
    noise: SimplexNoise,
    seed: u64,
}

impl SurfaceGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            noise: SimplexNoise::new(seed as f64),
            seed,
        }
    }

    pub fn noise(&self) -> &SimplexNoise {
        &self.noise
    }

    /// A fresh RNG per texture keeps each painter independent of call order.
    pub(crate) fn rng_for(&self, salt: u64) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ salt)
    }

    /// 1024×512 albedo map for `kind`.
    pub fn generate_surface(&self, kind: SurfaceKind, params: &SurfaceParams) -> TextureData {
        let (width, height) = SURFACE_SIZE;
        let mut tex = TextureData::filled(width, height, Pixel::rgb(0, 0, 0));
        let mut rng = self.rng_for(0x5u64 << 32 | kind as u64);

        match kind {
            SurfaceKind::Mercury => paint_mercury(&mut tex, &mut rng),
            SurfaceKind::Venus => paint_venus(&mut tex, &mut rng),
            SurfaceKind::Earth => paint_earth(&mut tex, &mut rng),
            SurfaceKind::Mars => paint_mars(&mut tex, &mut rng),
            SurfaceKind::Jupiter => paint_jupiter(&mut tex, &mut rng),
            SurfaceKind::Saturn => paint_saturn(&mut tex, &mut rng),
            SurfaceKind::Uranus => paint_uranus(&mut tex, &mut rng),
            SurfaceKind::Neptune => paint_neptune(&mut tex, &mut rng),
            SurfaceKind::Pluto => paint_pluto(&mut tex, &mut rng),
            SurfaceKind::Ceres => paint_ceres(&mut tex, &mut rng),
            SurfaceKind::Generic => paint_generic(&mut tex, &mut rng, params.base_color),
        }

        log::debug!("Painted {:?} surface {}x{}", kind, width, height);
        tex
    }

    /// 512×256 greyscale relief map.
    pub fn generate_bump_map(&self, kind: SurfaceKind) -> TextureData {
        let (width, height) = BUMP_SIZE;
        let mut tex = TextureData::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let u = x as f64 / width as f64;
                let v = y as f64 / height as f64;

                let mut bump = self.noise.fbm_default(u * 10.0, v * 10.0, 4) * 0.5 + 0.5;
                if kind.is_cratered() {
                    bump += self.noise.turbulence(u * 20.0, v * 20.0, 3) * 0.3;
                }

                let c = (bump.clamp(0.0, 1.0) * 255.0).floor() as u8;
                tex.set_pixel(x, y, Pixel::rgb(c, c, c));
            }
        }

        tex
    }

    /// 512×256 white cloud layer; coverage lives in the alpha channel and thins toward the poles.
    pub fn generate_clouds(&self) -> TextureData {
        let (width, height) = CLOUD_SIZE;
        let mut tex = TextureData::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let u = x as f64 / width as f64;
                let v = y as f64 / height as f64;

                let mut cloud = smoothstep(-0.2, 0.4, self.noise.fbm_default(u * 8.0, v * 8.0, 5));
                let lat = ((v - 0.5) * 2.0).abs();
                cloud *= 1.0 - lat * 0.5;

                tex.set_pixel(x, y, Pixel::new(255, 255, 255, (cloud * 200.0) as u8));
            }
        }

        tex
    }
}

// ── Painter helpers ─────────────────────────────────────────────────────

fn size(tex: &TextureData) -> (f32, f32) {
    (tex.width as f32, tex.height as f32)
}

fn random_point(tex: &TextureData, rng: &mut StdRng) -> Vec2 {
    let (w, h) = size(tex);
    Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h)
}

/// Scatter `count` small dots of radius `base + rand*spread`.
pub(crate) fn speckle(
    tex: &mut TextureData,
    rng: &mut StdRng,
    count: usize,
    spread: f32,
    base: f32,
    mut color: impl FnMut(&mut StdRng) -> Pixel,
) {
    for _ in 0..count {
        let center = random_point(tex, rng);
        let c = color(rng);
        let radius = rng.gen::<f32>() * spread + base;
        tex.fill_circle(center, radius, &Brush::Solid(c));
    }
}

fn vertical(tex: &TextureData, stops: &[(f32, Pixel)]) -> Brush {
    Brush::linear(Vec2::ZERO, Vec2::new(0.0, tex.height as f32), stops)
}

fn diagonal(tex: &TextureData, stops: &[(f32, Pixel)]) -> Brush {
    let (w, h) = size(tex);
    Brush::linear(Vec2::ZERO, Vec2::new(w, h), stops)
}

/// Solid caps on the top and bottom 8% with a soft edge out to 12%.
fn polar_caps(tex: &mut TextureData, [r, g, b]: [u8; 3]) {
    let (w, h) = size(tex);
    let ice = Brush::Solid(Pixel::rgb(r, g, b));
    tex.fill_rect(0.0, 0.0, w, h * 0.08, &ice);
    tex.fill_rect(0.0, h * 0.92, w, h * 0.08, &ice);

    let solid = Pixel::rgb(r, g, b);
    let clear = solid.with_alpha(0.0);
    let north = Brush::linear(Vec2::ZERO, Vec2::new(0.0, h * 0.12), &[(0.0, solid), (1.0, clear)]);
    tex.fill_rect(0.0, 0.0, w, h * 0.12, &north);
    let south = Brush::linear(Vec2::new(0.0, h * 0.88), Vec2::new(0.0, h), &[(0.0, clear), (1.0, solid)]);
    tex.fill_rect(0.0, h * 0.88, w, h * 0.12, &south);
}

/// Wavy stroke drifting east from `start`, as used for cloud swirls.
fn swirl(start: Vec2, steps: usize, step_x: f32, dx: impl Fn(usize) -> f32, dy: impl Fn(usize) -> f32) -> Vec<Vec2> {
    let mut points = vec![start];
    for j in 0..steps {
        points.push(Vec2::new(start.x + j as f32 * step_x + dx(j), start.y + dy(j)));
    }
    points
}

// ── Planet painters ─────────────────────────────────────────────────────

fn paint_mercury(tex: &mut TextureData, rng: &mut StdRng) {
    let (w, h) = size(tex);
    let base = Brush::linear(
        Vec2::ZERO,
        Vec2::new(w, 0.0),
        &[
            (0.0, Pixel::from_hex(0x8a8078)),
            (0.3, Pixel::from_hex(0x9a9088)),
            (0.6, Pixel::from_hex(0x7a7068)),
            (1.0, Pixel::from_hex(0x8a8078)),
        ],
    );
    tex.fill(&base);

    speckle(tex, rng, 5000, 3.0, 1.0, |rng| {
        let b = 100 + rng.gen_range(0..80);
        Pixel::clamped(b, b - 10, b - 20, 1.0)
    });

    for _ in 0..80 {
        let center = random_point(tex, rng);
        let radius = rng.gen::<f32>() * 20.0 + 5.0;
        let floor = Pixel::rgba(60, 55, 50, 0.3 + rng.gen::<f32>() * 0.3);
        tex.fill_circle(center, radius, &Brush::Solid(floor));

        let rim = Pixel::rgba(160, 150, 140, 0.3 + rng.gen::<f32>() * 0.2);
        tex.stroke_circle(center - Vec2::splat(radius * 0.15), radius * 0.9, 2.0, &Brush::Solid(rim));
    }

    // Maria
    for _ in 0..8 {
        let center = random_point(tex, rng);
        let radii = Vec2::new(rng.gen::<f32>() * 80.0 + 40.0, rng.gen::<f32>() * 50.0 + 25.0);
        let rotation = rng.gen::<f32>() * PI;
        let color = Pixel::rgba(70, 65, 60, 0.2 + rng.gen::<f32>() * 0.15);
        tex.fill_ellipse(center, radii, rotation, &Brush::Solid(color));
    }
}

fn paint_venus(tex: &mut TextureData, rng: &mut StdRng) {
    let w = tex.width as f32;
    let base = vertical(
        tex,
        &[
            (0.0, Pixel::from_hex(0xe8c880)),
            (0.5, Pixel::from_hex(0xd4a860)),
            (1.0, Pixel::from_hex(0xe8c880)),
        ],
    );
    tex.fill(&base);

    for y in (0..tex.height).step_by(20) {
        let brightness = (180.0 + (y as f32 * 0.1).sin() * 40.0) as i32;
        let band = Pixel::clamped(brightness, brightness - 40, brightness - 80, 0.3);
        let band_height = 15.0 + rng.gen::<f32>() * 10.0;
        tex.fill_rect(0.0, y as f32, w, band_height, &Brush::Solid(band));
    }

    for _ in 0..100 {
        let start = random_point(tex, rng);
        let points = swirl(
            start,
            10,
            30.0,
            |j| (start.y * 0.05 + j as f32).sin() * 20.0,
            |j| (j as f32 * 0.5).sin() * 10.0,
        );
        let color = Pixel::rgba(255, 230, 180, 0.1 + rng.gen::<f32>() * 0.15);
        let width = 5.0 + rng.gen::<f32>() * 10.0;
        tex.stroke_polyline(&points, width, &Brush::Solid(color));
    }

    speckle(tex, rng, 3000, 4.0, 1.0, |rng| {
        let b = 200 + rng.gen_range(0..55);
        Pixel::clamped(b, b - 30, b - 80, 0.2)
    });
}

fn paint_earth(tex: &mut TextureData, rng: &mut StdRng) {
    let (w, h) = size(tex);
    let ocean = vertical(
        tex,
        &[
            (0.0, Pixel::from_hex(0xa0d0e8)),
            (0.15, Pixel::from_hex(0x1a5090)),
            (0.5, Pixel::from_hex(0x0a3060)),
            (0.85, Pixel::from_hex(0x1a5090)),
            (1.0, Pixel::from_hex(0xa0d0e8)),
        ],
    );
    tex.fill(&ocean);

    let land = Brush::Solid(Pixel::from_hex(0x3a7a3a));
    let at = |x: f32, y: f32| Vec2::new(w * x, h * y);

    let north_america = Path::new(at(0.12, 0.2))
        .bezier_to(at(0.08, 0.25), at(0.1, 0.35), at(0.15, 0.4))
        .bezier_to(at(0.18, 0.45), at(0.25, 0.42), at(0.28, 0.35))
        .bezier_to(at(0.3, 0.28), at(0.25, 0.2), at(0.2, 0.18));
    tex.fill_polygon(north_america.points(), &land);

    let south_america = Path::new(at(0.22, 0.52))
        .bezier_to(at(0.25, 0.55), at(0.27, 0.65), at(0.24, 0.75))
        .bezier_to(at(0.22, 0.8), at(0.2, 0.75), at(0.19, 0.65))
        .bezier_to(at(0.18, 0.55), at(0.2, 0.5), at(0.22, 0.52));
    tex.fill_polygon(south_america.points(), &land);

    // Europe, Africa, Asia, Australia
    tex.fill_ellipse(at(0.52, 0.35), Vec2::new(w * 0.05, h * 0.1), 0.0, &land);
    tex.fill_ellipse(at(0.52, 0.55), Vec2::new(w * 0.06, h * 0.18), 0.0, &land);
    tex.fill_ellipse(at(0.7, 0.3), Vec2::new(w * 0.15, h * 0.15), 0.2, &land);
    tex.fill_ellipse(at(0.82, 0.62), Vec2::new(w * 0.05, h * 0.07), 0.3, &land);

    const LAND_TONES: [u32; 4] = [0x2d6a2d, 0x4a8a4a, 0x5a7a3a, 0x8a7a50];
    speckle(tex, rng, 2000, 5.0, 1.0, |rng| {
        let tone = LAND_TONES[rng.gen_range(0..LAND_TONES.len())];
        Pixel::from_hex(tone).with_alpha(0.3)
    });

    polar_caps(tex, [240, 248, 255]);
}

fn paint_mars(tex: &mut TextureData, rng: &mut StdRng) {
    let (w, h) = size(tex);
    let base = diagonal(
        tex,
        &[
            (0.0, Pixel::from_hex(0xc06030)),
            (0.3, Pixel::from_hex(0xd07040)),
            (0.7, Pixel::from_hex(0xb05535)),
            (1.0, Pixel::from_hex(0xc06030)),
        ],
    );
    tex.fill(&base);

    speckle(tex, rng, 5000, 4.0, 1.0, |rng| {
        let r = 150 + rng.gen_range(0..80);
        let g = 60 + rng.gen_range(0..50);
        let b = 30 + rng.gen_range(0..40);
        Pixel::clamped(r, g, b, 0.3)
    });

    // Ancient sea beds
    let dark = Brush::Solid(Pixel::rgba(80, 40, 30, 0.4));
    tex.fill_ellipse(Vec2::new(w * 0.6, h * 0.4), Vec2::new(w * 0.15, h * 0.1), 0.3, &dark);
    tex.fill_ellipse(Vec2::new(w * 0.3, h * 0.55), Vec2::new(w * 0.12, h * 0.08), -0.2, &dark);
    tex.fill_ellipse(Vec2::new(w * 0.75, h * 0.6), Vec2::new(w * 0.1, h * 0.12), 0.1, &dark);

    // Valles Marineris
    let canyon = Path::new(Vec2::new(w * 0.2, h * 0.48)).bezier_to(
        Vec2::new(w * 0.35, h * 0.5),
        Vec2::new(w * 0.5, h * 0.48),
        Vec2::new(w * 0.6, h * 0.5),
    );
    tex.stroke_polyline(canyon.points(), 8.0, &Brush::Solid(Pixel::rgba(70, 35, 25, 0.5)));

    // Olympus Mons
    tex.fill_circle(
        Vec2::new(w * 0.25, h * 0.35),
        25.0,
        &Brush::Solid(Pixel::rgba(200, 120, 80, 0.6)),
    );

    polar_caps(tex, [255, 248, 245]);
}

fn paint_jupiter(tex: &mut TextureData, rng: &mut StdRng) {
    const BANDS: [u32; 8] = [
        0xe8d8c0, 0xc8a878, 0xe0d0b8, 0xa07850, 0xf0e8d8, 0xb89060, 0xd8c8a8, 0x906840,
    ];
    let (w, h) = size(tex);
    let band_height = h / 16.0;
    for i in 0..16 {
        let color = Pixel::from_hex(BANDS[i % BANDS.len()]);
        tex.fill_rect(0.0, i as f32 * band_height, w, band_height + 1.0, &Brush::Solid(color));
    }

    // Turbulent band edges
    let edge = Brush::Solid(Pixel::rgba(255, 255, 255, 0.15));
    let mut y = 0.0;
    while y < h {
        let mut points = vec![Vec2::new(0.0, y)];
        points.extend(
            (0..tex.width)
                .step_by(10)
                .map(|x| x as f32)
                .map(|x| Vec2::new(x, y + (x * 0.03 + y * 0.01).sin() * 5.0)),
        );
        tex.stroke_polyline(&points, 3.0, &edge);
        y += band_height;
    }

    for _ in 0..200 {
        let start = random_point(tex, rng);
        let points = swirl(
            start,
            8,
            15.0,
            |j| (start.y * 0.02 + j as f32).sin() * 10.0,
            |j| (j as f32 * 0.3).cos() * 5.0,
        );
        let b = 150 + rng.gen_range(0..100);
        let color = Pixel::clamped(b, b - 30, b - 60, 0.2);
        let width = 2.0 + rng.gen::<f32>() * 4.0;
        tex.stroke_polyline(&points, width, &Brush::Solid(color));
    }

    // Great Red Spot
    let grs = Vec2::new(w * 0.6, h * 0.55);
    let storm = Brush::radial(
        grs,
        80.0,
        &[
            (0.0, Pixel::from_hex(0xc86040)),
            (0.5, Pixel::from_hex(0xb85535)),
            (1.0, Pixel::from_hex(0xa04830)),
        ],
    );
    tex.fill_ellipse(grs, Vec2::new(80.0, 50.0), 0.0, &storm);
    tex.fill_ellipse(grs, Vec2::new(48.0, 30.0), 0.2, &Brush::Solid(Pixel::rgba(180, 90, 60, 0.6)));

    speckle(tex, rng, 3000, 3.0, 1.0, |rng| {
        let b = 150 + rng.gen_range(0..100);
        Pixel::clamped(b, b - 20, b - 50, 0.15)
    });
}

fn paint_saturn(tex: &mut TextureData, rng: &mut StdRng) {
    const BANDS: [[u8; 3]; 5] = [
        [235, 220, 180],
        [220, 200, 160],
        [245, 235, 200],
        [210, 190, 150],
        [240, 225, 190],
    ];
    let (w, h) = size(tex);
    let band_height = h / 20.0;
    for i in 0..20 {
        let [r, g, b] = BANDS[i % BANDS.len()];
        tex.fill_rect(0.0, i as f32 * band_height, w, band_height + 1.0, &Brush::Solid(Pixel::rgb(r, g, b)));
    }

    let shade = Pixel::rgba(180, 160, 120, 0.4);
    let poles = vertical(
        tex,
        &[
            (0.0, shade),
            (0.15, shade.with_alpha(0.0)),
            (0.85, shade.with_alpha(0.0)),
            (1.0, shade),
        ],
    );
    tex.fill(&poles);

    speckle(tex, rng, 3000, 2.0, 0.5, |rng| {
        let b = 200 + rng.gen_range(0..55);
        Pixel::clamped(b, b - 10, b - 30, 0.08)
    });
}

fn paint_uranus(tex: &mut TextureData, rng: &mut StdRng) {
    let (w, h) = size(tex);
    let base = vertical(
        tex,
        &[
            (0.0, Pixel::rgb(160, 210, 220)),
            (0.3, Pixel::rgb(180, 225, 235)),
            (0.5, Pixel::rgb(190, 230, 240)),
            (0.7, Pixel::rgb(180, 225, 235)),
            (1.0, Pixel::rgb(160, 210, 220)),
        ],
    );
    tex.fill(&base);

    for i in 0..8 {
        let alpha = 0.1 + (i % 2) as f32 * 0.1;
        let band = Brush::Solid(Pixel::rgba(150, 200, 215, alpha));
        tex.fill_rect(0.0, h / 8.0 * i as f32, w, h / 16.0, &band);
    }

    let glow = Pixel::rgba(220, 245, 255, 0.3);
    let poles = vertical(
        tex,
        &[
            (0.0, glow),
            (0.2, glow.with_alpha(0.0)),
            (0.8, glow.with_alpha(0.0)),
            (1.0, glow),
        ],
    );
    tex.fill(&poles);

    speckle(tex, rng, 2000, 2.0, 0.5, |rng| {
        let b = 180 + rng.gen_range(0..60);
        Pixel::clamped(b, b + 20, b + 30, 0.05)
    });
}

fn paint_neptune(tex: &mut TextureData, rng: &mut StdRng) {
    let (w, h) = size(tex);
    let base = vertical(
        tex,
        &[
            (0.0, Pixel::rgb(50, 80, 180)),
            (0.3, Pixel::rgb(60, 100, 200)),
            (0.5, Pixel::rgb(70, 110, 210)),
            (0.7, Pixel::rgb(60, 100, 200)),
            (1.0, Pixel::rgb(50, 80, 180)),
        ],
    );
    tex.fill(&base);

    for i in 0..12 {
        let alpha = 0.15 + (i % 3) as f32 * 0.05;
        let band = Brush::Solid(Pixel::rgba(40, 70, 160, alpha));
        tex.fill_rect(0.0, h / 12.0 * i as f32, w, h / 24.0, &band);
    }

    // Great Dark Spot
    let gds = Vec2::new(w * 0.35, h * 0.45);
    let spot = Brush::radial(
        gds,
        w * 0.08,
        &[
            (0.0, Pixel::rgba(30, 50, 120, 0.8)),
            (0.5, Pixel::rgba(40, 60, 140, 0.5)),
            (1.0, Pixel::rgba(60, 100, 200, 0.0)),
        ],
    );
    tex.fill_ellipse(gds, Vec2::new(w * 0.06, h * 0.04), 0.0, &spot);

    // Bright cloud streaks in the mid latitudes
    for _ in 0..25 {
        let center = Vec2::new(rng.gen::<f32>() * w, h * 0.3 + rng.gen::<f32>() * h * 0.4);
        let radii = Vec2::new(30.0 + rng.gen::<f32>() * 60.0, 3.0 + rng.gen::<f32>() * 8.0);
        let color = Pixel::rgba(220, 230, 255, 0.2 + rng.gen::<f32>() * 0.3);
        tex.fill_ellipse(center, radii, 0.0, &Brush::Solid(color));
    }

    speckle(tex, rng, 2500, 2.0, 0.5, |rng| {
        let b = 60 + rng.gen_range(0..80);
        Pixel::clamped(b, b + 30, b + 120, 0.08)
    });
}

fn paint_pluto(tex: &mut TextureData, rng: &mut StdRng) {
    let (w, h) = size(tex);
    tex.fill(&Brush::Solid(Pixel::rgb(180, 160, 130)));

    let terrain = diagonal(
        tex,
        &[
            (0.0, Pixel::rgba(120, 100, 80, 0.4)),
            (0.3, Pixel::rgba(180, 160, 130, 0.0)),
            (0.6, Pixel::rgba(200, 180, 150, 0.3)),
            (1.0, Pixel::rgba(140, 120, 90, 0.4)),
        ],
    );
    tex.fill(&terrain);

    // Tombaugh Regio: two lobes and a point
    let heart = Vec2::new(w * 0.5, h * 0.5);
    let lobe = w * 0.08;
    let ice = Brush::Solid(Pixel::rgb(230, 220, 200));
    tex.fill_circle(heart + Vec2::new(-lobe * 0.7, -lobe * 0.3), lobe, &ice);
    tex.fill_circle(heart + Vec2::new(lobe * 0.7, -lobe * 0.3), lobe, &ice);
    tex.fill_polygon(
        &[
            heart + Vec2::new(-lobe * 1.5, 0.0),
            heart + Vec2::new(lobe * 1.5, 0.0),
            heart + Vec2::new(0.0, lobe * 1.2),
        ],
        &ice,
    );

    for _ in 0..500 {
        let angle = rng.gen::<f32>() * PI * 2.0;
        let dist = rng.gen::<f32>() * lobe * 1.2;
        let p = heart + Vec2::new(angle.cos() * dist, angle.sin() * dist * 0.8);
        let color = Pixel::rgba(240, 230, 210, 0.1 + rng.gen::<f32>() * 0.2);
        let radius = rng.gen::<f32>() * 3.0 + 1.0;
        tex.fill_circle(p, radius, &Brush::Solid(color));
    }

    for _ in 0..80 {
        let p = random_point(tex, rng);
        if p.distance(heart) < lobe * 1.5 {
            continue;
        }
        let radius = 3.0 + rng.gen::<f32>() * 10.0;
        let color = Pixel::rgba(100, 80, 60, 0.2 + rng.gen::<f32>() * 0.3);
        tex.fill_circle(p, radius, &Brush::Solid(color));
    }

    speckle(tex, rng, 3000, 2.0, 0.5, |rng| {
        let b = 140 + rng.gen_range(0..80);
        Pixel::clamped(b, b - 20, b - 40, 0.08)
    });
}

fn paint_ceres(tex: &mut TextureData, rng: &mut StdRng) {
    let (w, h) = size(tex);
    tex.fill(&Brush::Solid(Pixel::rgb(130, 130, 130)));

    let terrain = Brush::radial(
        Vec2::new(w * 0.3, h * 0.3),
        w * 0.6,
        &[
            (0.0, Pixel::rgba(160, 160, 160, 0.3)),
            (0.5, Pixel::rgba(130, 130, 130, 0.0)),
            (1.0, Pixel::rgba(90, 90, 90, 0.3)),
        ],
    );
    tex.fill(&terrain);

    for _ in 0..100 {
        let p = random_point(tex, rng);
        let radius = 5.0 + rng.gen::<f32>() * 20.0;
        let rim = Pixel::rgba(160, 160, 160, 0.3 + rng.gen::<f32>() * 0.2);
        tex.fill_circle(p, radius, &Brush::Solid(rim));
        let floor = Pixel::rgba(90, 90, 90, 0.3 + rng.gen::<f32>() * 0.3);
        tex.fill_circle(p, radius * 0.7, &Brush::Solid(floor));
    }

    // Occator bright spots: (centre, radius, [(offset, grey, alpha)])
    let spots: [(Vec2, f32, [(f32, u8, f32); 3]); 2] = [
        (
            Vec2::new(w * 0.4, h * 0.35),
            w * 0.04,
            [(0.0, 255, 0.95), (0.5, 255, 0.6), (1.0, 200, 0.0)],
        ),
        (
            Vec2::new(w * 0.42, h * 0.37),
            w * 0.02,
            [(0.0, 255, 0.8), (0.6, 255, 0.4), (1.0, 180, 0.0)],
        ),
    ];
    for (center, radius, stops) in spots {
        let stops: Vec<(f32, Pixel)> = stops
            .iter()
            .map(|&(t, grey, alpha)| (t, Pixel::rgba(grey, grey, grey, alpha)))
            .collect();
        tex.fill_circle(center, radius, &Brush::radial(center, radius, &stops));
    }

    speckle(tex, rng, 2000, 2.0, 0.5, |rng| {
        let b = 100 + rng.gen_range(0..80);
        Pixel::clamped(b, b, b, 0.1)
    });
}

fn paint_generic(tex: &mut TextureData, rng: &mut StdRng, [r, g, b]: [u8; 3]) {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    tex.fill(&Brush::Solid(Pixel::clamped(r, g, b, 1.0)));

    let shading = diagonal(
        tex,
        &[
            (0.0, Pixel::clamped(r + 30, g + 30, b + 30, 0.3)),
            (0.5, Pixel::clamped(r, g, b, 0.0)),
            (1.0, Pixel::clamped(r - 30, g - 30, b - 30, 0.3)),
        ],
    );
    tex.fill(&shading);

    speckle(tex, rng, 2000, 2.0, 0.5, |rng| {
        let v = rng.gen_range(-20..20);
        Pixel::clamped(r + v, g + v, b + v, 0.1)
    });
}
