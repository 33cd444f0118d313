//! Texture sink: paints every body's maps and writes them as PNG files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use orrery::{BodyKind, Bodies, CelestialBody};
use procgen::{MoonKind, RingProfile, SurfaceGenerator, SurfaceKind, SurfaceParams, TextureData};

const GLOW_SIZE: u32 = 256;

/// File-name stem for a body, e.g. `"halley_s_comet"`.
pub fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}

/// Every texture a body needs, keyed by file name.
pub fn body_textures(gen: &SurfaceGenerator, body: &CelestialBody) -> Vec<(String, TextureData)> {
    let stem = file_stem(&body.name);
    let mut params = SurfaceParams::new(body.color);
    if let Some(rings) = &body.rings {
        params = params.with_ring_colors(&rings.colors);
    }

    let mut out = Vec::new();
    match body.kind {
        BodyKind::Star => out.push((format!("{stem}_glow"), gen.generate_glow(GLOW_SIZE))),
        BodyKind::Planet | BodyKind::DwarfPlanet => {
            let kind = SurfaceKind::from_name(&body.name);
            out.push((format!("{stem}_surface"), gen.generate_surface(kind, &params)));
            out.push((format!("{stem}_bump"), gen.generate_bump_map(kind)));
        }
        BodyKind::Moon => {
            let kind = MoonKind::from_name(&body.name);
            out.push((format!("{stem}_surface"), gen.generate_moon_surface(kind, &params)));
        }
        BodyKind::Satellite | BodyKind::Comet => {}
    }
    if body.clouds {
        out.push((format!("{stem}_clouds"), gen.generate_clouds()));
    }
    if body.rings.is_some() {
        let profile = if body.name == "Saturn" {
            RingProfile::Saturn
        } else {
            RingProfile::Simple
        };
        out.push((format!("{stem}_rings"), gen.generate_rings(profile, &params)));
    }
    out
}

pub fn write_png(path: &Path, texture: &TextureData) -> Result<()> {
    image::save_buffer(
        path,
        texture.as_bytes(),
        texture.width,
        texture.height,
        image::ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("writing {}", path.display()))
}

/// Paint and write all textures into `dir`. Returns the written paths.
pub fn export_textures(dir: &Path, bodies: &Bodies, seed: u64) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let gen = SurfaceGenerator::new(seed);
    let mut written = Vec::new();
    for (_, body) in bodies.iter() {
        for (name, texture) in body_textures(&gen, body) {
            let path = dir.join(format!("{name}.png"));
            write_png(&path, &texture)?;
            log::debug!("Wrote {}x{} {}", texture.width, texture.height, path.display());
            written.push(path);
        }
    }
    log::info!("Exported {} textures to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery::catalog;

    #[test]
    fn stems_are_file_safe() {
        assert_eq!(file_stem("Halley's Comet"), "halley_s_comet");
        assert_eq!(file_stem("Earth"), "earth");
    }

    #[test]
    fn bodies_get_the_maps_they_draw_with() {
        let bodies = Bodies::from_catalog(&catalog::solar_system(), &[]).unwrap();
        let gen = SurfaceGenerator::new(7);
        let names = |name: &str| -> Vec<String> {
            let body = bodies.get(bodies.find(name).unwrap()).unwrap();
            body_textures(&gen, body).into_iter().map(|(n, _)| n).collect()
        };
        assert_eq!(names("Earth"), ["earth_surface", "earth_bump", "earth_clouds"]);
        assert_eq!(names("Saturn"), ["saturn_surface", "saturn_bump", "saturn_rings"]);
        assert_eq!(names("Titan"), ["titan_surface"]);
        assert_eq!(names("Sun"), ["sun_glow"]);
        assert!(names("Hubble").is_empty());
    }

    #[test]
    fn png_round_trips_through_the_decoder() {
        let gen = SurfaceGenerator::new(7);
        let tex = gen.generate_glow(16);
        let path = std::env::temp_dir().join(format!("solarium-glow-{}.png", std::process::id()));
        write_png(&path, &tex).unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (16, 16));
        assert_eq!(decoded.as_raw().as_slice(), tex.as_bytes());
        std::fs::remove_file(&path).unwrap();
    }
}
