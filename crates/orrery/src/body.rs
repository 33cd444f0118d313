//! Arena of celestial bodies with index-based parent links.
//!
//! Each body's world frame is its parent's frame composed with its own orbital pivot,
//! evaluated top-down once per frame. Parents always precede their children, so a single
//! forward pass over the arena resolves every transform.

use std::f64::consts::TAU;

use glam::{EulerRot, Quat, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use engine_core::Transform;

use crate::camera::{FocusTarget, TargetLookup};
use crate::catalog::{BodyDescriptor, CometDescriptor, FactSheet, RingDescriptor};
use crate::comet::{Comet, CometOrbit};
use crate::error::{OrreryError, Result};
use crate::kinematics::CircularOrbit;

/// The cloud layer spins slightly faster than the surface below it.
pub const CLOUD_SPIN_FACTOR: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Star,
    Planet,
    DwarfPlanet,
    Moon,
    Satellite,
    Comet,
}

impl BodyKind {
    pub fn label(self) -> &'static str {
        match self {
            BodyKind::Star => "Star",
            BodyKind::Planet => "Planet",
            BodyKind::DwarfPlanet => "Dwarf planet",
            BodyKind::Moon => "Moon",
            BodyKind::Satellite => "Satellite",
            BodyKind::Comet => "Comet",
        }
    }

    /// Only planets and dwarf planets carry moons and satellites.
    pub fn can_host(self) -> bool {
        matches!(self, BodyKind::Planet | BodyKind::DwarfPlanet)
    }
}

/// Index of a body in its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// How a body moves relative to its parent frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    /// Pinned at the parent origin; spins at a wall-clock rate.
    Fixed { rotation: f64, rotation_speed: f64 },
    Circular(CircularOrbit),
    Elliptical(Comet),
}

#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: String,
    pub kind: BodyKind,
    pub radius: f32,
    pub color: u32,
    pub parent: Option<BodyId>,
    pub motion: Motion,
    /// Tilt of the orbital plane about X, radians.
    pub inclination: f64,
    /// Tilt of the spin axis about Z, radians.
    pub axial_tilt: f64,
    pub atmosphere: Option<u32>,
    pub clouds: bool,
    pub rings: Option<RingDescriptor>,
    /// Ion and dust tail colours for comets.
    pub tail_colors: Option<(u32, u32)>,
    pub facts: FactSheet,
    /// Orbital frame translated to the body, without spin.
    frame: Transform,
    /// Mesh transform: frame plus spin and axial tilt.
    world: Transform,
}

impl CelestialBody {
    fn from_descriptor(desc: &BodyDescriptor, parent: Option<BodyId>) -> Self {
        let motion = if desc.kind == BodyKind::Star {
            Motion::Fixed {
                rotation: 0.0,
                rotation_speed: desc.rotation_speed,
            }
        } else {
            Motion::Circular(
                CircularOrbit::new(desc.distance, desc.orbit_speed, desc.rotation_speed).with_height(desc.height),
            )
        };
        Self {
            name: desc.name.to_string(),
            kind: desc.kind,
            radius: desc.radius,
            color: desc.color,
            parent,
            motion,
            inclination: desc.inclination_deg.to_radians(),
            axial_tilt: desc.axial_tilt_deg.to_radians(),
            atmosphere: desc.atmosphere,
            clouds: desc.clouds,
            rings: desc.rings.clone(),
            tail_colors: None,
            facts: desc.facts,
            frame: Transform::IDENTITY,
            world: Transform::IDENTITY,
        }
    }

    fn from_comet(desc: &CometDescriptor) -> Result<Self> {
        let orbit = CometOrbit::new(desc.name, desc.perihelion, desc.aphelion, desc.orbit_speed)?
            .with_angle(desc.start_angle);
        Ok(Self {
            name: desc.name.to_string(),
            kind: BodyKind::Comet,
            radius: desc.radius,
            color: desc.color,
            parent: None,
            motion: Motion::Elliptical(Comet::new(orbit)),
            inclination: desc.inclination_deg.to_radians(),
            axial_tilt: 0.0,
            atmosphere: None,
            clouds: false,
            rings: None,
            tail_colors: Some((desc.tail_color, desc.dust_tail_color)),
            facts: desc.facts,
            frame: Transform::IDENTITY,
            world: Transform::IDENTITY,
        })
    }

    /// Current orbital angle; zero for fixed bodies.
    pub fn angle(&self) -> f64 {
        match &self.motion {
            Motion::Fixed { .. } => 0.0,
            Motion::Circular(orbit) => orbit.angle,
            Motion::Elliptical(comet) => comet.orbit.angle,
        }
    }

    /// Accumulated spin about the body's own axis.
    pub fn rotation(&self) -> f64 {
        match &self.motion {
            Motion::Fixed { rotation, .. } => *rotation,
            Motion::Circular(orbit) => orbit.rotation,
            Motion::Elliptical(comet) => comet.spin.1,
        }
    }

    pub fn cloud_rotation(&self) -> Option<f64> {
        self.clouds.then(|| self.rotation() * CLOUD_SPIN_FACTOR)
    }

    pub fn comet(&self) -> Option<&Comet> {
        match &self.motion {
            Motion::Elliptical(comet) => Some(comet),
            _ => None,
        }
    }

    /// Advance orbit and spin by a simulated (time-scaled) delta.
    pub fn advance(&mut self, delta: f64) {
        match &mut self.motion {
            Motion::Fixed { .. } => {}
            Motion::Circular(orbit) => orbit.advance(delta),
            Motion::Elliptical(comet) => comet.advance(delta),
        }
    }

    /// Orbital pivot relative to the parent frame, translated to the body.
    pub fn local_transform(&self) -> Transform {
        let tilt = Quat::from_rotation_x(self.inclination as f32);
        match &self.motion {
            Motion::Fixed { .. } => Transform::from_position_rotation(Vec3::ZERO, tilt),
            Motion::Circular(orbit) => {
                // Negative yaw keeps the pivot aligned with (cos a, 0, sin a).
                let pivot = tilt * Quat::from_rotation_y(-orbit.angle as f32);
                Transform::from_position_rotation(tilt * orbit.local_position().as_vec3(), pivot)
            }
            Motion::Elliptical(comet) => {
                Transform::from_position_rotation(tilt * comet.orbit.position().as_vec3(), tilt)
            }
        }
    }

    fn mesh_rotation(&self) -> Quat {
        match &self.motion {
            Motion::Elliptical(comet) => {
                Quat::from_euler(EulerRot::XYZ, comet.spin.0 as f32, comet.spin.1 as f32, 0.0)
            }
            _ => Quat::from_euler(EulerRot::XYZ, 0.0, self.rotation() as f32, self.axial_tilt as f32),
        }
    }

    pub fn frame(&self) -> Transform {
        self.frame
    }

    pub fn world_transform(&self) -> Transform {
        self.world
    }

    pub fn world_position(&self) -> Vec3 {
        self.world.position
    }

    /// Ring plane: laid flat, tilted with the spin axis, but not spinning.
    pub fn ring_transform(&self) -> Option<Transform> {
        self.rings.as_ref().map(|_| {
            let flat = Quat::from_euler(EulerRot::XYZ, std::f32::consts::FRAC_PI_2, 0.0, self.axial_tilt as f32);
            Transform::from_position_rotation(self.frame.position, self.frame.rotation * flat)
        })
    }
}

/// All bodies of a session, parents before children.
#[derive(Debug, Clone, Default)]
pub struct Bodies {
    bodies: Vec<CelestialBody>,
}

impl Bodies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from circular-orbit descriptors (parents first) and comets.
    pub fn from_catalog(descriptors: &[BodyDescriptor], comets: &[CometDescriptor]) -> Result<Self> {
        let mut bodies = Self::new();
        for desc in descriptors {
            let parent = match desc.parent {
                Some(name) => Some(bodies.find(name).ok_or_else(|| OrreryError::UnknownParent(name.to_string()))?),
                None => None,
            };
            bodies.push(CelestialBody::from_descriptor(desc, parent))?;
        }
        for desc in comets {
            bodies.push(CelestialBody::from_comet(desc)?)?;
        }
        bodies.update_world_transforms();
        log::info!("Built {} bodies ({} comets)", bodies.len(), comets.len());
        Ok(bodies)
    }

    /// Append a body, validating its radius and parent link.
    pub fn push(&mut self, body: CelestialBody) -> Result<BodyId> {
        if !(body.radius > 0.0) {
            return Err(OrreryError::NonPositiveRadius {
                name: body.name,
                radius: body.radius,
            });
        }
        if let Some(parent) = body.parent {
            let host = self.bodies.get(parent.0).ok_or_else(|| OrreryError::DanglingParent {
                name: body.name.clone(),
                parent: parent.0,
            })?;
            if !host.kind.can_host() {
                return Err(OrreryError::InvalidParent {
                    name: body.name,
                    parent: host.name.clone(),
                });
            }
        }
        self.bodies.push(body);
        Ok(BodyId(self.bodies.len() - 1))
    }

    /// Start every circular orbit at a random phase.
    pub fn randomize_phases(&mut self, rng: &mut impl Rng) {
        for body in &mut self.bodies {
            if let Motion::Circular(orbit) = &mut body.motion {
                orbit.angle = rng.gen::<f64>() * TAU;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.0)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut CelestialBody> {
        self.bodies.get_mut(id.0)
    }

    /// Case-insensitive lookup by display name.
    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|b| b.name.eq_ignore_ascii_case(name))
            .map(BodyId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    pub fn of_kind(&self, kind: BodyKind) -> impl Iterator<Item = BodyId> + '_ {
        self.iter().filter(move |(_, b)| b.kind == kind).map(|(id, _)| id)
    }

    pub fn children_of(&self, parent: BodyId) -> impl Iterator<Item = BodyId> + '_ {
        self.iter().filter(move |(_, b)| b.parent == Some(parent)).map(|(id, _)| id)
    }

    /// Advance every orbiting body by a simulated delta.
    pub fn advance(&mut self, delta: f64) {
        for body in &mut self.bodies {
            body.advance(delta);
        }
    }

    /// Spin fixed bodies (the sun) by a wall-clock delta.
    pub fn spin_fixed(&mut self, delta: f64) {
        for body in &mut self.bodies {
            if let Motion::Fixed { rotation, rotation_speed } = &mut body.motion {
                *rotation += *rotation_speed * delta;
            }
        }
    }

    /// Recompute world transforms top-down.
    pub fn update_world_transforms(&mut self) {
        for i in 0..self.bodies.len() {
            let local = self.bodies[i].local_transform();
            let frame = match self.bodies[i].parent {
                Some(parent) => self.bodies[parent.0].frame.mul_transform(&local),
                None => local,
            };
            let body = &mut self.bodies[i];
            body.frame = frame;
            body.world = Transform::from_position_rotation(frame.position, frame.rotation * body.mesh_rotation());
        }
    }

    pub fn world_position(&self, id: BodyId) -> Option<Vec3> {
        self.get(id).map(CelestialBody::world_position)
    }
}

impl TargetLookup for Bodies {
    fn focus_target(&self, id: BodyId) -> Option<FocusTarget> {
        let body = self.get(id)?;
        let parent_position = match body.kind {
            BodyKind::Satellite => body.parent.and_then(|p| self.world_position(p)),
            _ => None,
        };
        Some(FocusTarget {
            id,
            position: body.world_position(),
            radius: body.radius,
            parent_position,
        })
    }
}
