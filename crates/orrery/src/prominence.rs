//! Solar prominences: a fixed pool of arcs that fade in, live, fade out and respawn.
//!
//! Each slot is independent. When its age passes its lifetime the slot is resampled in place,
//! so the pool size never changes. The manager also supplies a limb factor per arc (how close
//! the arc sits to the sun's silhouette from the camera); the renderer decides what to do with it.

use std::f32::consts::{PI, TAU};

use glam::{EulerRot, Quat, Vec3};
use rand::prelude::*;

use engine_core::smoothstep;

/// Seconds spent fading in after spawn and fading out before expiry.
pub const FADE_SECONDS: f64 = 3.0;
/// Segments along the tube; arc progress is sampled at each.
pub const ARC_SEGMENTS: usize = 40;
/// Arc footpoints sit just above the photosphere.
pub const BASE_RADIUS_FACTOR: f32 = 1.02;
/// Limb factors below this hide the arc entirely.
pub const LIMB_CUTOFF: f32 = 0.25;
const LIMB_FULL: f32 = 0.55;

/// Lifecycle stage, derived from age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Fading in.
    Spawned,
    /// Fully visible.
    Aging,
    /// Fading out.
    Retiring,
}

/// Linear fade-in over the first three seconds, fade-out over the last three.
pub fn fade_opacity(age: f64, lifetime: f64) -> f64 {
    let fade_out_start = lifetime - FADE_SECONDS;
    if age < FADE_SECONDS {
        (age / FADE_SECONDS).max(0.0)
    } else if age > fade_out_start {
        (1.0 - (age - fade_out_start) / FADE_SECONDS).max(0.0)
    } else {
        1.0
    }
}

/// `(1 - |cos θ|)^0.4` between the view direction and the surface direction: 1 on the limb, 0 at disc centre.
pub fn limb_factor(to_camera: Vec3, surface_dir: Vec3) -> f32 {
    let facing = to_camera.normalize_or_zero().dot(surface_dir.normalize_or_zero()).abs();
    (1.0 - facing).max(0.0).powf(0.4)
}

/// Opacity multiplier for a limb factor; zero below the cutoff.
pub fn limb_alpha(limb: f32) -> f32 {
    if limb < LIMB_CUTOFF {
        0.0
    } else {
        smoothstep(LIMB_CUTOFF as f64, LIMB_FULL as f64, limb as f64) as f32
    }
}

/// Quadratic Bézier in the prominence's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCurve {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl ArcCurve {
    pub fn point(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        self.start * (u * u) + self.control * (2.0 * u * t) + self.end * (t * t)
    }
}

/// 0 at both footpoints, 1 at the apex.
pub fn arc_progress(t: f32) -> f32 {
    1.0 - (2.0 * t - 1.0).abs()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prominence {
    /// Longitude around the sun's Y axis.
    pub angle: f32,
    pub height: f32,
    pub arc_span: f32,
    pub tilt: f32,
    pub tube_radius: f32,
    /// Shader phase offset.
    pub phase: f32,
    pub lifetime: f64,
    pub age: f64,
    pub opacity: f64,
    /// Accumulated shader time.
    pub time: f64,
    pub limb: f32,
    pub limb_alpha: f32,
}

impl Prominence {
    fn sample(rng: &mut StdRng, index: usize, count: usize, sun_radius: f32, initial_age: bool) -> Self {
        let base_angle = index as f32 / count.max(1) as f32 * TAU;
        let angle = base_angle + (rng.gen::<f32>() - 0.5) * 0.5;
        let height = sun_radius * (0.2 + rng.gen::<f32>() * 0.5);
        let arc_span = 0.25 + rng.gen::<f32>() * 0.35;
        let tilt = (rng.gen::<f32>() - 0.5) * PI * 0.3;
        let tube_radius = 1.5 + rng.gen::<f32>() * 1.5;
        let phase = rng.gen::<f32>() * TAU;
        let lifetime = 15.0 + rng.gen::<f64>() * 25.0;
        let age = if initial_age { rng.gen::<f64>() * 10.0 } else { 0.0 };
        Self {
            angle,
            height,
            arc_span,
            tilt,
            tube_radius,
            phase,
            lifetime,
            age,
            opacity: fade_opacity(age, lifetime),
            time: 0.0,
            limb: 1.0,
            limb_alpha: 1.0,
        }
    }

    pub fn stage(&self) -> Stage {
        if self.age < FADE_SECONDS {
            Stage::Spawned
        } else if self.age > self.lifetime - FADE_SECONDS {
            Stage::Retiring
        } else {
            Stage::Aging
        }
    }

    /// Mesh orientation about the sun centre: yaw by `angle`, pitch by `tilt`.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.tilt, self.angle, 0.0)
    }

    pub fn arc_curve(&self, sun_radius: f32) -> ArcCurve {
        let base = sun_radius * BASE_RADIUS_FACTOR;
        let half = self.arc_span / 2.0;
        ArcCurve {
            start: Vec3::new((-half).cos() * base, 0.0, (-half).sin() * base),
            control: Vec3::new(0.0, self.height * 0.8, (base + self.height) * 0.3),
            end: Vec3::new(half.cos() * base, 0.0, half.sin() * base),
        }
    }

    /// `segments + 1` sun-relative points along the arc with their arc progress.
    pub fn sample_arc(&self, sun_radius: f32, segments: usize) -> Vec<(Vec3, f32)> {
        let curve = self.arc_curve(sun_radius);
        let rotation = self.orientation();
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| {
                let t = i as f32 / segments as f32;
                (rotation * curve.point(t), arc_progress(t))
            })
            .collect()
    }

    /// Sun-relative apex of the arc.
    pub fn apex(&self, sun_radius: f32) -> Vec3 {
        self.orientation() * self.arc_curve(sun_radius).point(0.5)
    }
}

pub struct ProminenceManager {
    sun_radius: f32,
    rng: StdRng,
    prominences: Vec<Prominence>,
    respawned: u64,
}

impl ProminenceManager {
    /// Seed `count` slots spread evenly around the equator with staggered ages.
    pub fn new(sun_radius: f32, count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let prominences = (0..count)
            .map(|i| Prominence::sample(&mut rng, i, count, sun_radius, true))
            .collect();
        log::info!("Seeded {} solar prominences", count);
        Self {
            sun_radius,
            rng,
            prominences,
            respawned: 0,
        }
    }

    pub fn sun_radius(&self) -> f32 {
        self.sun_radius
    }

    pub fn prominences(&self) -> &[Prominence] {
        &self.prominences
    }

    pub fn len(&self) -> usize {
        self.prominences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prominences.is_empty()
    }

    /// Total respawns since construction.
    pub fn respawn_count(&self) -> u64 {
        self.respawned
    }

    /// Age every slot by a wall-clock delta and refresh limb factors for `camera` (sun-relative).
    pub fn update(&mut self, delta: f64, camera: Vec3) {
        let count = self.prominences.len();
        for index in 0..count {
            let slot = &mut self.prominences[index];
            slot.time += delta;
            slot.age += delta;
            if slot.age > slot.lifetime {
                log::debug!("Prominence {} expired after {:.1}s", index, slot.lifetime);
                *slot = Prominence::sample(&mut self.rng, index, count, self.sun_radius, false);
                self.respawned += 1;
            }
            let slot = &mut self.prominences[index];
            slot.opacity = fade_opacity(slot.age, slot.lifetime);

            let apex = slot.apex(self.sun_radius);
            slot.limb = limb_factor(camera, apex);
            slot.limb_alpha = limb_alpha(slot.limb);
        }
    }

    #[cfg(test)]
    fn slot_mut(&mut self, index: usize) -> &mut Prominence {
        &mut self.prominences[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_envelope() {
        let lifetime = 20.0;
        assert_eq!(fade_opacity(0.0, lifetime), 0.0);
        assert!((fade_opacity(1.5, lifetime) - 0.5).abs() < 1e-12);
        assert_eq!(fade_opacity(3.0, lifetime), 1.0);
        assert_eq!(fade_opacity(10.0, lifetime), 1.0);
        assert_eq!(fade_opacity(17.0, lifetime), 1.0);
        assert!((fade_opacity(18.5, lifetime) - 0.5).abs() < 1e-12);
        assert_eq!(fade_opacity(20.0, lifetime), 0.0);
        assert_eq!(fade_opacity(25.0, lifetime), 0.0);
    }

    #[test]
    fn initial_slots_are_staggered_and_in_range() {
        let manager = ProminenceManager::new(50.0, 8, 42);
        assert_eq!(manager.len(), 8);
        for (i, p) in manager.prominences().iter().enumerate() {
            let base = i as f32 / 8.0 * TAU;
            assert!((p.angle - base).abs() <= 0.25);
            assert!((10.0..35.0).contains(&p.height));
            assert!((0.25..0.6).contains(&p.arc_span));
            assert!(p.tilt.abs() <= PI * 0.15);
            assert!((1.5..3.0).contains(&p.tube_radius));
            assert!((15.0..40.0).contains(&p.lifetime));
            assert!((0.0..10.0).contains(&p.age));
        }
        let ages: Vec<f64> = manager.prominences().iter().map(|p| p.age).collect();
        assert!(ages.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn expired_slot_is_resampled_in_place() {
        let mut manager = ProminenceManager::new(50.0, 5, 1);
        let old = manager.prominences()[2].clone();
        manager.slot_mut(2).age = old.lifetime + 0.5;

        manager.update(0.0, Vec3::new(0.0, 0.0, 400.0));
        let fresh = &manager.prominences()[2];
        assert_eq!(manager.len(), 5);
        assert_eq!(fresh.age, 0.0);
        assert_eq!(fresh.opacity, 0.0);
        assert_eq!(fresh.stage(), Stage::Spawned);
        assert!((15.0..40.0).contains(&fresh.lifetime));
        assert_ne!(fresh.lifetime, old.lifetime);
        assert_eq!(manager.respawn_count(), 1);
    }

    #[test]
    fn stages_follow_age() {
        let mut manager = ProminenceManager::new(50.0, 1, 3);
        let slot = manager.slot_mut(0);
        slot.lifetime = 20.0;
        slot.age = 1.0;
        assert_eq!(slot.stage(), Stage::Spawned);
        slot.age = 10.0;
        assert_eq!(slot.stage(), Stage::Aging);
        slot.age = 18.0;
        assert_eq!(slot.stage(), Stage::Retiring);
    }

    #[test]
    fn arc_rises_above_the_surface() {
        let manager = ProminenceManager::new(50.0, 3, 9);
        let p = &manager.prominences()[0];
        let samples = p.sample_arc(50.0, ARC_SEGMENTS);
        assert_eq!(samples.len(), ARC_SEGMENTS + 1);
        assert!((samples[0].0.length() - 51.0).abs() < 1e-3);
        assert!((samples[ARC_SEGMENTS].0.length() - 51.0).abs() < 1e-3);
        assert_eq!(samples[0].1, 0.0);
        assert_eq!(samples[ARC_SEGMENTS / 2].1, 1.0);
        assert_eq!(samples[ARC_SEGMENTS].1, 0.0);
    }

    #[test]
    fn limb_is_brightest_at_the_silhouette() {
        let to_camera = Vec3::Z;
        assert_eq!(limb_factor(to_camera, Vec3::Z), 0.0);
        assert_eq!(limb_factor(to_camera, -Vec3::Z), 0.0);
        assert_eq!(limb_factor(to_camera, Vec3::X), 1.0);
        assert_eq!(limb_alpha(0.2), 0.0);
        assert_eq!(limb_alpha(0.6), 1.0);
        let mid = limb_alpha(0.4);
        assert!(mid > 0.0 && mid < 1.0);
    }
}
