//! Cross-module checks over the whole painter set.

use procgen::{
    ring_density, MoonKind, RingProfile, SimplexNoise, SurfaceGenerator, SurfaceKind, SurfaceParams,
    BUMP_SIZE, MOON_SIZE, RING_SIZE, SURFACE_SIZE,
};

const PLANETS: [(&str, u32); 10] = [
    ("Mercury", 0x8c8c8c),
    ("Venus", 0xe6c35c),
    ("Earth", 0x6b93d6),
    ("Mars", 0xc1440e),
    ("Jupiter", 0xd8ca9d),
    ("Saturn", 0xead6b8),
    ("Uranus", 0xd1e7e7),
    ("Neptune", 0x5b5ddf),
    ("Pluto", 0xc2b280),
    ("Ceres", 0x9f9f9f),
];

#[test]
fn every_planet_paints_an_opaque_albedo_map() {
    let gen = SurfaceGenerator::new(42);
    for (name, color) in PLANETS {
        let kind = SurfaceKind::from_name(name);
        assert_ne!(kind, SurfaceKind::Generic, "{} has a bespoke painter", name);

        let tex = gen.generate_surface(kind, &SurfaceParams::new(color));
        assert_eq!((tex.width, tex.height), SURFACE_SIZE, "{}", name);
        assert!(tex.pixels.iter().all(|p| p.a == 255), "{} has holes", name);
    }
}

#[test]
fn unknown_bodies_fall_back_to_generic_painters() {
    let gen = SurfaceGenerator::new(42);

    let planet = gen.generate_surface(SurfaceKind::from_name("Sedna"), &SurfaceParams::new(0x884422));
    assert_eq!((planet.width, planet.height), SURFACE_SIZE);

    let moon = gen.generate_moon_surface(MoonKind::from_name("Phobos"), &SurfaceParams::new(0x7a6a5a));
    assert_eq!((moon.width, moon.height), MOON_SIZE);

    let bump = gen.generate_bump_map(SurfaceKind::Generic);
    assert_eq!((bump.width, bump.height), BUMP_SIZE);
}

#[test]
fn different_seeds_give_different_surfaces() {
    let params = SurfaceParams::new(0x8c8c8c);
    let a = SurfaceGenerator::new(1).generate_surface(SurfaceKind::Mercury, &params);
    let b = SurfaceGenerator::new(2).generate_surface(SurfaceKind::Mercury, &params);
    assert_ne!(a, b);
}

#[test]
fn uranus_style_rings_are_uniformly_tinted() {
    let gen = SurfaceGenerator::new(42);
    let params = SurfaceParams::new(0xd1e7e7).with_ring_colors(&[0x666666]);
    let tex = gen.generate_rings(RingProfile::Simple, &params);
    assert_eq!((tex.width, tex.height), RING_SIZE);

    for x in (0..RING_SIZE.0).step_by(37) {
        let p = tex.get_pixel(x, 5);
        assert!((p.r as i32 - 0x66).abs() <= 3, "{:?}", p);
    }
}

#[test]
fn ring_alpha_matches_density_profile() {
    let gen = SurfaceGenerator::new(42);
    let tex = gen.generate_rings(RingProfile::Saturn, &SurfaceParams::new(0xead6b8));
    let noise = SimplexNoise::new(42.0);

    for x in (0..RING_SIZE.0).step_by(13) {
        let t = x as f64 / RING_SIZE.0 as f64;
        let expected = (ring_density(&noise, RingProfile::Saturn, t) * 255.0).clamp(0.0, 255.0) as u8;
        assert_eq!(tex.get_pixel(x, 31).a, expected, "t = {}", t);
    }
}

#[test]
fn noise_is_bounded_over_a_dense_grid() {
    let noise = SimplexNoise::new(42.0);
    let mut max_2d: f64 = 0.0;
    let mut max_3d: f64 = 0.0;
    for i in -200..200 {
        for j in -200..200 {
            let (x, y) = (i as f64 * 0.173, j as f64 * 0.219);
            max_2d = max_2d.max(noise.noise_2d(x, y).abs());
            max_3d = max_3d.max(noise.noise_3d(x, y, x - y).abs());
        }
    }
    assert!(max_2d <= 1.05 && max_2d > 0.5, "2D peak {}", max_2d);
    assert!(max_3d <= 1.05 && max_3d > 0.5, "3D peak {}", max_3d);
}
