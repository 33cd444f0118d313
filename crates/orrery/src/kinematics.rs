//! Circular orbits: signed angular rates integrated linearly in simulated seconds.

use std::f64::consts::TAU;

use glam::{DVec3, Vec3};

/// Orbital and spin state of a body on a circular orbit around its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularOrbit {
    pub distance: f64,
    pub height: f64,
    /// Radians per simulated second; negative is retrograde.
    pub orbit_speed: f64,
    pub rotation_speed: f64,
    pub angle: f64,
    pub rotation: f64,
}

impl CircularOrbit {
    pub fn new(distance: f64, orbit_speed: f64, rotation_speed: f64) -> Self {
        Self {
            distance,
            height: 0.0,
            orbit_speed,
            rotation_speed,
            angle: 0.0,
            rotation: 0.0,
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Integrate orbital angle and spin. Linear in `delta`, so two calls add up to one.
    pub fn advance(&mut self, delta: f64) {
        self.angle += self.orbit_speed * delta;
        self.rotation += self.rotation_speed * delta;
    }

    /// Position in the parent's orbital plane.
    pub fn local_position(&self) -> DVec3 {
        DVec3::new(
            self.angle.cos() * self.distance,
            self.height,
            self.angle.sin() * self.distance,
        )
    }
}

/// Closed polyline of `segments + 1` points tracing a circular orbit in the XZ plane.
pub fn circular_orbit_path(distance: f64, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let a = i as f64 / segments as f64 * TAU;
            Vec3::new((a.cos() * distance) as f32, 0.0, (a.sin() * distance) as f32)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn advancing_twice_equals_advancing_once() {
        for (d1, d2) in [(0.0, 5.0), (1.5, 2.25), (100.0, 0.016), (3600.0, 86400.0)] {
            let mut split = CircularOrbit::new(170.0, 0.01, 0.02).with_angle(0.3);
            let mut whole = split;
            split.advance(d1);
            split.advance(d2);
            whole.advance(d1 + d2);
            assert!(approx_eq(split.angle, whole.angle), "{} + {}", d1, d2);
            assert!(approx_eq(split.rotation, whole.rotation));
        }
    }

    #[test]
    fn retrograde_rates_run_backwards() {
        let mut orbit = CircularOrbit::new(16.0, -0.04, 0.04);
        orbit.advance(10.0);
        assert!(approx_eq(orbit.angle, -0.4));
        assert!(approx_eq(orbit.rotation, 0.4));
    }

    #[test]
    fn position_after_one_radian() {
        let mut orbit = CircularOrbit::new(170.0, 0.01, 0.0);
        orbit.advance(100.0);
        let p = orbit.local_position();
        assert!((p.x - 91.85).abs() < 0.01, "{:?}", p);
        assert!(approx_eq(p.y, 0.0));
        assert!((p.z - 143.05).abs() < 0.01, "{:?}", p);
    }

    #[test]
    fn path_is_closed() {
        let path = circular_orbit_path(80.0, 128);
        assert_eq!(path.len(), 129);
        let (first, last) = (path[0], path[128]);
        assert!((first - last).length() < 1e-3);
        assert!(path.iter().all(|p| (p.length() - 80.0).abs() < 1e-3));
    }
}
