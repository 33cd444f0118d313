//! Elliptical comet orbits with a distance-dependent speed law and sun-facing tails.
//!
//! The orbit angle is used directly as the time-like parameter of the ellipse rather than
//! solving Kepler's equation. Speed still rises toward perihelion through
//! `(perihelion / distance)^1.5`, which is enough for the visual effect.

use std::f64::consts::TAU;

use glam::{DVec3, Vec3};

use crate::error::{OrreryError, Result};

/// Spin rates of the nucleus about X and Y, radians per simulated second.
pub const NUCLEUS_SPIN: (f64, f64) = (0.5, 0.3);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CometOrbit {
    pub perihelion: f64,
    pub aphelion: f64,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub orbit_speed: f64,
    pub angle: f64,
}

impl CometOrbit {
    /// Validate the ellipse and derive `a` and `e` once.
    pub fn new(name: &str, perihelion: f64, aphelion: f64, orbit_speed: f64) -> Result<Self> {
        if !(perihelion > 0.0) {
            return Err(OrreryError::NonPositivePerihelion {
                name: name.to_string(),
                perihelion,
            });
        }
        if !(aphelion > perihelion) {
            return Err(OrreryError::InvalidEllipse {
                name: name.to_string(),
                perihelion,
                aphelion,
            });
        }
        Ok(Self {
            perihelion,
            aphelion,
            semi_major_axis: (perihelion + aphelion) / 2.0,
            eccentricity: (aphelion - perihelion) / (aphelion + perihelion),
            orbit_speed,
            angle: 0.0,
        })
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Distance from the sun at the current angle.
    pub fn distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.angle.cos())
    }

    pub fn speed_factor(&self) -> f64 {
        self.speed_factor_at(self.distance())
    }

    /// Kepler-like speed-up: 1 at perihelion, smaller farther out.
    pub fn speed_factor_at(&self, distance: f64) -> f64 {
        (self.perihelion / distance).powf(1.5)
    }

    /// One Euler step; the speed factor is taken at the pre-step distance.
    pub fn advance(&mut self, delta: f64) {
        self.angle += self.orbit_speed * self.speed_factor() * delta;
    }

    pub fn position(&self) -> DVec3 {
        self.position_at(self.angle)
    }

    /// Point on the ellipse, sun at the focus (origin).
    pub fn position_at(&self, angle: f64) -> DVec3 {
        DVec3::new(
            self.semi_major_axis * (angle.cos() - self.eccentricity),
            0.0,
            self.semi_minor_axis() * angle.sin(),
        )
    }

    /// Closed polyline of `segments + 1` points around the ellipse.
    pub fn path(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(3);
        (0..=segments)
            .map(|i| self.position_at(i as f64 / segments as f64 * TAU).as_vec3())
            .collect()
    }
}

/// Tail and coma parameters, recomputed from the nucleus position every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CometTail {
    /// Straight away from the sun.
    pub ion_direction: Vec3,
    /// Away from the sun, bent upward.
    pub dust_direction: Vec3,
    pub tail_scale: f32,
    pub dust_scale: f32,
    pub coma_scale: f32,
}

impl CometTail {
    pub fn at(position: DVec3, perihelion: f64) -> Self {
        let away = position.as_vec3().normalize_or_zero();
        let dust_direction = (away + Vec3::Y * 0.2).normalize_or_zero();
        let distance = position.length().max(f64::EPSILON);
        let tail_scale = (perihelion / distance).clamp(0.2, 2.0) as f32;
        Self {
            ion_direction: away,
            dust_direction,
            tail_scale,
            dust_scale: tail_scale * 0.8,
            coma_scale: 0.5 + tail_scale * 0.5,
        }
    }
}

/// Orbit, tails and tumbling nucleus of one comet.
#[derive(Debug, Clone, PartialEq)]
pub struct Comet {
    pub orbit: CometOrbit,
    pub tail: CometTail,
    /// Nucleus rotation about X and Y.
    pub spin: (f64, f64),
}

impl Comet {
    pub fn new(orbit: CometOrbit) -> Self {
        Self {
            tail: CometTail::at(orbit.position(), orbit.perihelion),
            orbit,
            spin: (0.0, 0.0),
        }
    }

    pub fn advance(&mut self, delta: f64) {
        self.orbit.advance(delta);
        self.tail = CometTail::at(self.orbit.position(), self.orbit.perihelion);
        self.spin.0 += NUCLEUS_SPIN.0 * delta;
        self.spin.1 += NUCLEUS_SPIN.1 * delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn halley() -> CometOrbit {
        CometOrbit::new("Halley", 90.0, 1000.0, 0.001).unwrap()
    }

    #[test]
    fn derived_elements() {
        let orbit = halley();
        assert_eq!(orbit.semi_major_axis, 545.0);
        assert!((orbit.eccentricity - 910.0 / 1090.0).abs() < 1e-12);
        assert!((orbit.distance() - 90.0).abs() < 1e-9);
        assert!((orbit.with_angle(PI).distance() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn polar_distance_matches_cartesian_position() {
        let orbit = halley();
        for i in 0..64 {
            let o = orbit.with_angle(i as f64 * 0.1);
            assert!((o.distance() - o.position().length()).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_degenerate_ellipses() {
        assert!(matches!(
            CometOrbit::new("flat", 100.0, 100.0, 0.01),
            Err(OrreryError::InvalidEllipse { .. })
        ));
        assert!(matches!(
            CometOrbit::new("inside", 0.0, 10.0, 0.01),
            Err(OrreryError::NonPositivePerihelion { .. })
        ));
    }

    #[test]
    fn outbound_leg_slows_monotonically() {
        let orbit = halley();
        let mut prev = orbit;
        for i in 1..=64 {
            let next = orbit.with_angle(i as f64 / 64.0 * PI);
            assert!(next.distance() > prev.distance(), "step {}", i);
            assert!(next.speed_factor() < prev.speed_factor(), "step {}", i);
            prev = next;
        }
    }

    #[test]
    fn faster_near_the_sun() {
        let mut near = halley();
        let mut far = halley().with_angle(PI);
        near.advance(1.0);
        far.advance(1.0);
        assert!(near.angle > (far.angle - PI) * 10.0);
    }

    #[test]
    fn tails_point_away_from_the_sun_and_shrink_with_distance() {
        let orbit = halley();
        let close = CometTail::at(orbit.position(), orbit.perihelion);
        assert!(close.ion_direction.dot(Vec3::X) > 0.999);
        assert!(close.dust_direction.y > 0.0);
        assert_eq!(close.tail_scale, 1.0);
        assert_eq!(close.coma_scale, 1.0);

        let far = orbit.with_angle(PI);
        let far_tail = CometTail::at(far.position(), far.perihelion);
        assert!(far_tail.ion_direction.dot(-Vec3::X) > 0.999);
        assert_eq!(far_tail.tail_scale, 0.2);
        assert!((far_tail.dust_scale - 0.16).abs() < 1e-6);
    }

    #[test]
    fn nucleus_tumbles() {
        let mut comet = Comet::new(halley());
        comet.advance(2.0);
        assert!((comet.spin.0 - 1.0).abs() < 1e-12);
        assert!((comet.spin.1 - 0.6).abs() < 1e-12);
    }
}
