//! Moon surface maps: a base colour fill, a per-moon feature painter and fine grain.

use std::f32::consts::PI;

use glam::Vec2;
use rand::prelude::*;

use crate::surfaces::{SurfaceGenerator, SurfaceParams};
use crate::textures::{Brush, Pixel, TextureData};

/// Moon map size.
pub const MOON_SIZE: (u32, u32) = (256, 128);

/// Grain amplitude applied after painting, as a fraction of full scale.
const GRAIN: f32 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonKind {
    Luna,
    Io,
    Europa,
    Ganymede,
    Callisto,
    Titan,
    Enceladus,
    Triton,
    Generic,
}

impl MoonKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Moon" => Self::Luna,
            "Io" => Self::Io,
            "Europa" => Self::Europa,
            "Ganymede" => Self::Ganymede,
            "Callisto" => Self::Callisto,
            "Titan" => Self::Titan,
            "Enceladus" => Self::Enceladus,
            "Triton" => Self::Triton,
            _ => Self::Generic,
        }
    }
}

impl SurfaceGenerator {
    /// 256×128 moon map.
    pub fn generate_moon_surface(&self, kind: MoonKind, params: &SurfaceParams) -> TextureData {
        let (width, height) = MOON_SIZE;
        let [r, g, b] = params.base_color;
        let mut tex = TextureData::filled(width, height, Pixel::rgb(r, g, b));
        let mut rng = self.rng_for(0x3u64 << 32 | kind as u64);

        match kind {
            MoonKind::Luna => {
                paint_luna_craters(&mut tex, &mut rng);
                paint_maria(&mut tex);
            }
            MoonKind::Io => paint_io(&mut tex, &mut rng),
            MoonKind::Europa => paint_europa(&mut tex, &mut rng),
            MoonKind::Ganymede => paint_ganymede(&mut tex, &mut rng),
            MoonKind::Callisto => paint_callisto(&mut tex, &mut rng),
            MoonKind::Titan => paint_titan(&mut tex, &mut rng),
            MoonKind::Enceladus => paint_enceladus(&mut tex, &mut rng),
            MoonKind::Triton => paint_triton(&mut tex, &mut rng),
            MoonKind::Generic => paint_generic_craters(&mut tex, &mut rng),
        }

        tex.add_grain(&mut rng, GRAIN);
        tex
    }
}

fn random_point(tex: &TextureData, rng: &mut StdRng) -> Vec2 {
    Vec2::new(
        rng.gen::<f32>() * tex.width as f32,
        rng.gen::<f32>() * tex.height as f32,
    )
}

fn paint_luna_craters(tex: &mut TextureData, rng: &mut StdRng) {
    const FLOORS: [u32; 3] = [0x707070, 0x606060, 0x808080];
    let rim = Brush::Solid(Pixel::from_hex(0x909090));

    for _ in 0..30 {
        let center = random_point(tex, rng);
        let radius = rng.gen::<f32>() * 20.0 + 5.0;
        let floor = Pixel::from_hex(FLOORS[rng.gen_range(0..FLOORS.len())]);
        tex.fill_circle(center, radius, &Brush::Solid(floor));
        tex.stroke_circle(center, radius, 2.0, &rim);
    }
}

fn paint_maria(tex: &mut TextureData) {
    let (w, h) = (tex.width as f32, tex.height as f32);
    let mare = Brush::Solid(Pixel::from_hex(0x505050));
    // Tranquillitatis, Serenitatis, Imbrium
    tex.fill_ellipse(Vec2::new(w * 0.6, h * 0.4), Vec2::new(40.0, 30.0), 0.0, &mare);
    tex.fill_ellipse(Vec2::new(w * 0.55, h * 0.25), Vec2::new(25.0, 20.0), 0.3, &mare);
    tex.fill_ellipse(Vec2::new(w * 0.35, h * 0.3), Vec2::new(35.0, 25.0), -0.2, &mare);
}

fn paint_io(tex: &mut TextureData, rng: &mut StdRng) {
    const SULFUR: [u32; 4] = [0xffff00, 0xff8800, 0xff4400, 0xffffff];

    for _ in 0..60 {
        let center = random_point(tex, rng);
        let radius = rng.gen::<f32>() * 15.0 + 3.0;
        let color = Pixel::from_hex(SULFUR[rng.gen_range(0..SULFUR.len())]);
        tex.fill_circle(center, radius, &Brush::Solid(color));
    }

    // Active plumes
    let vent = Brush::Solid(Pixel::from_hex(0xff0000));
    let halo = Brush::Solid(Pixel::from_hex(0xff8800));
    for _ in 0..5 {
        let center = random_point(tex, rng);
        tex.fill_circle(center, 8.0, &vent);
        tex.stroke_circle(center, 12.0, 3.0, &halo);
    }
}

fn paint_europa(tex: &mut TextureData, rng: &mut StdRng) {
    let crack = Brush::Solid(Pixel::from_hex(0x8b4513));

    for _ in 0..40 {
        let mut p = random_point(tex, rng);
        let mut lineae = vec![p];
        for _ in 0..10 {
            p += Vec2::new((rng.gen::<f32>() - 0.5) * 30.0, (rng.gen::<f32>() - 0.5) * 10.0);
            lineae.push(p);
        }
        tex.stroke_polyline(&lineae, 1.0, &crack);
    }
}

fn paint_ganymede(tex: &mut TextureData, rng: &mut StdRng) {
    let groove = Brush::Solid(Pixel::from_hex(0xb0b0b0));
    for _ in 0..30 {
        let y = rng.gen::<f32>() * tex.height as f32;
        let mut points = vec![Vec2::new(0.0, y)];
        points.extend(
            (0..tex.width)
                .step_by(20)
                .map(|x| x as f32)
                .map(|x| Vec2::new(x, y + (x * 0.1).sin() * 3.0)),
        );
        tex.stroke_polyline(&points, 2.0, &groove);
    }

    let dark = Brush::Solid(Pixel::from_hex(0x606060));
    for _ in 0..5 {
        let center = random_point(tex, rng);
        let rotation = rng.gen::<f32>() * PI;
        tex.fill_ellipse(center, Vec2::new(30.0, 20.0), rotation, &dark);
    }
}

fn paint_callisto(tex: &mut TextureData, rng: &mut StdRng) {
    for _ in 0..100 {
        let center = random_point(tex, rng);
        let radius = rng.gen::<f32>() * 10.0 + 2.0;
        let mut channel = || 80 + rng.gen_range(0..40u8);
        let color = Pixel::rgb(channel(), channel(), channel());
        tex.fill_circle(center, radius, &Brush::Solid(color));
    }

    // Valhalla rings
    let center = Vec2::new(tex.width as f32 * 0.4, tex.height as f32 * 0.5);
    let ring = Brush::Solid(Pixel::from_hex(0x808080));
    tex.stroke_circle(center, 30.0, 2.0, &ring);
    tex.stroke_circle(center, 45.0, 2.0, &ring);
}

fn paint_titan(tex: &mut TextureData, rng: &mut StdRng) {
    let (w, h) = (tex.width as f32, tex.height as f32);
    tex.fill(&Brush::Solid(Pixel::from_hex(0xcc8800)));

    let lake = Brush::Solid(Pixel::from_hex(0x804000));
    for _ in 0..10 {
        let center = random_point(tex, rng);
        let radii = Vec2::new(rng.gen::<f32>() * 20.0 + 10.0, rng.gen::<f32>() * 15.0 + 5.0);
        let rotation = rng.gen::<f32>() * PI;
        tex.fill_ellipse(center, radii, rotation, &lake);
    }

    let polar = Brush::Solid(Pixel::from_hex(0x402000));
    tex.fill_rect(0.0, 0.0, w, h * 0.15, &polar);
    tex.fill_rect(0.0, h * 0.85, w, h * 0.15, &polar);
}

fn paint_enceladus(tex: &mut TextureData, rng: &mut StdRng) {
    let (w, h) = (tex.width as f32, tex.height as f32);
    tex.fill(&Brush::Solid(Pixel::from_hex(0xf8f8ff)));

    // Tiger stripes near the south pole
    let stripe = Brush::Solid(Pixel::from_hex(0x88ccff));
    for i in 0..4 {
        let offset = i as f32 * 20.0;
        let line = [
            Vec2::new(w * 0.2 + offset, h * 0.85),
            Vec2::new(w * 0.8 - offset, h),
        ];
        tex.stroke_polyline(&line, 3.0, &stripe);
    }

    let crater = Brush::Solid(Pixel::from_hex(0xe0e0e0));
    for _ in 0..20 {
        let center = Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h * 0.8);
        let radius = rng.gen::<f32>() * 5.0 + 2.0;
        tex.fill_circle(center, radius, &crater);
    }
}

fn paint_triton(tex: &mut TextureData, rng: &mut StdRng) {
    let (w, h) = (tex.width as f32, tex.height as f32);
    let cell = Brush::Solid(Pixel::from_hex(0xd8a0a0));
    let edge = Brush::Solid(Pixel::from_hex(0xc08080));

    // Cantaloupe terrain
    for _ in 0..50 {
        let center = random_point(tex, rng);
        let rotation = rng.gen::<f32>() * PI;
        tex.fill_ellipse(center, Vec2::new(8.0, 6.0), rotation, &cell);
        stroke_ellipse(tex, center, Vec2::new(8.0, 6.0), rotation, &edge);
    }

    tex.fill_rect(0.0, h * 0.7, w, h * 0.3, &Brush::Solid(Pixel::from_hex(0xffe0e0)));
}

/// One-pixel ellipse outline, flattened to a closed polyline.
fn stroke_ellipse(tex: &mut TextureData, center: Vec2, radii: Vec2, rotation: f32, brush: &Brush) {
    const SEGMENTS: usize = 24;
    let (sin, cos) = rotation.sin_cos();
    let outline: Vec<Vec2> = (0..=SEGMENTS)
        .map(|i| {
            let a = i as f32 / SEGMENTS as f32 * PI * 2.0;
            let local = Vec2::new(a.cos() * radii.x, a.sin() * radii.y);
            center + Vec2::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos)
        })
        .collect();
    tex.stroke_polyline(&outline, 1.0, brush);
}

fn paint_generic_craters(tex: &mut TextureData, rng: &mut StdRng) {
    let crater = Brush::Solid(Pixel::from_hex(0x707070));
    for _ in 0..30 {
        let center = random_point(tex, rng);
        let radius = rng.gen::<f32>() * 8.0 + 2.0;
        tex.fill_circle(center, radius, &crater);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_names() {
        assert_eq!(MoonKind::from_name("Moon"), MoonKind::Luna);
        assert_eq!(MoonKind::from_name("Triton"), MoonKind::Triton);
        assert_eq!(MoonKind::from_name("Phobos"), MoonKind::Generic);
    }

    #[test]
    fn moon_maps_are_half_height() {
        let gen = SurfaceGenerator::new(42);
        let tex = gen.generate_moon_surface(MoonKind::Luna, &SurfaceParams::new(0xaaaaaa));
        assert_eq!((tex.width, tex.height), MOON_SIZE);
        assert_eq!(tex.pixels.len(), 256 * 128);
    }

    #[test]
    fn titan_poles_are_dark() {
        let gen = SurfaceGenerator::new(42);
        let tex = gen.generate_moon_surface(MoonKind::Titan, &SurfaceParams::new(0xdaa520));
        // 0x402000 plus at most ±4 of grain
        let pole = tex.get_pixel(10, 2);
        assert!(pole.r <= 0x44 && pole.b <= 4, "{:?}", pole);
    }

    #[test]
    fn generic_moon_keeps_base_colour_under_grain() {
        let gen = SurfaceGenerator::new(3);
        let tex = gen.generate_moon_surface(MoonKind::Generic, &SurfaceParams::new(0x7a6a5a));
        let n = tex.pixels.len() as f64;
        let mean_r = tex.pixels.iter().map(|p| p.r as f64).sum::<f64>() / n;
        // Grey craters pull the mean slightly toward 0x70
        assert!((mean_r - 0x7a as f64).abs() < 8.0, "mean red {}", mean_r);
    }

    #[test]
    fn moon_textures_are_deterministic() {
        let params = SurfaceParams::new(0xffff00);
        let a = SurfaceGenerator::new(11).generate_moon_surface(MoonKind::Io, &params);
        let b = SurfaceGenerator::new(11).generate_moon_surface(MoonKind::Io, &params);
        assert_eq!(a, b);
    }
}
