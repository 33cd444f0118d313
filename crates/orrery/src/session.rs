//! Session-scoped simulation state and the per-frame update order.

use chrono::{DateTime, Utc};
use glam::{Quat, Vec3};
use rand::prelude::*;

use input::{Action, InputState};
use procgen::{generate_starfield, Star, StarfieldConfig};

use crate::belt::{AsteroidBelt, BeltConfig};
use crate::body::{BodyId, BodyKind, Bodies, Motion};
use crate::camera::{CameraController, OnComplete, TargetLookup};
use crate::catalog::{self, SUN_RADIUS};
use crate::error::Result;
use crate::info::BodyInfo;
use crate::kinematics::circular_orbit_path;
use crate::meteor::MeteorShower;
use crate::prominence::ProminenceManager;
use crate::time_control::{TimeCommand, TimeController};

/// Satellite markers hide once the camera is this close.
pub const MARKER_HIDE_DISTANCE: f32 = 2.0;
pub const ORBIT_SEGMENTS: usize = 128;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub seed: u64,
    pub prominence_count: usize,
    /// Start circular orbits at random phases instead of all aligned on +X.
    pub randomize_phases: bool,
    pub start_date: DateTime<Utc>,
    pub belts: Vec<BeltConfig>,
    pub starfield: StarfieldConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            prominence_count: 5,
            randomize_phases: true,
            start_date: Utc::now(),
            belts: vec![BeltConfig::main_belt(), BeltConfig::kuiper_belt()],
            starfield: StarfieldConfig::default(),
        }
    }
}

pub struct Session {
    pub bodies: Bodies,
    pub belts: Vec<AsteroidBelt>,
    pub prominences: ProminenceManager,
    pub meteors: MeteorShower,
    pub stars: Vec<Star>,
    pub time: TimeController,
    pub camera: CameraController,
    pub show_orbits: bool,
    pub show_labels: bool,
    pub show_help: bool,
    selected: Option<BodyId>,
    sun: Option<BodyId>,
    /// Digit-key order: the sun, then the planets.
    navigation: Vec<BodyId>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self> {
        let mut bodies = Bodies::from_catalog(&catalog::solar_system(), &catalog::comets())?;
        if config.randomize_phases {
            let mut rng = StdRng::seed_from_u64(config.seed);
            bodies.randomize_phases(&mut rng);
            bodies.update_world_transforms();
        }

        let sun = bodies.of_kind(BodyKind::Star).next();
        let navigation = sun.into_iter().chain(bodies.of_kind(BodyKind::Planet)).collect();
        let belts = config
            .belts
            .into_iter()
            .enumerate()
            .map(|(i, belt)| AsteroidBelt::generate(belt, config.seed.wrapping_add(1 + i as u64)))
            .collect();
        let stars = generate_starfield(config.seed.wrapping_add(100), &config.starfield);
        log::info!("Session ready: {} bodies, {} stars", bodies.len(), stars.len());

        Ok(Self {
            bodies,
            belts,
            prominences: ProminenceManager::new(SUN_RADIUS, config.prominence_count, config.seed.wrapping_add(200)),
            meteors: MeteorShower::new(config.seed.wrapping_add(300)),
            stars,
            time: TimeController::new(config.start_date),
            camera: CameraController::default(),
            show_orbits: true,
            show_labels: true,
            show_help: false,
            selected: None,
            sun,
            navigation,
        })
    }

    /// Run one frame. `raw_delta` is wall-clock seconds.
    pub fn frame(&mut self, raw_delta: f64, input: &InputState) {
        for action in input.actions() {
            self.apply(action);
        }

        let scaled = self.time.scale_delta(raw_delta);
        self.bodies.advance(scaled);
        for belt in &mut self.belts {
            belt.advance(scaled);
        }
        self.bodies.update_world_transforms();

        self.camera.update(raw_delta as f32, &input.flight(), &self.bodies);

        let sun_position = self.sun_position();
        self.prominences.update(raw_delta, self.camera.position() - sun_position);
        self.meteors.update(raw_delta as f32);
        self.bodies.spin_fixed(raw_delta);

        self.time.advance(scaled);
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::TogglePause => self.time.toggle_pause(),
            Action::Faster => self.time.faster(),
            Action::Slower => self.time.slower(),
            Action::Reverse => self.time.reverse(),
            Action::ToggleFreeFlight => self.camera.toggle_free_flight(),
            Action::Escape => self.camera.escape(),
            Action::Navigate(index) => {
                if let Some(&id) = self.navigation.get(index as usize) {
                    self.fly_to_id(id);
                }
            }
            Action::ToggleOrbits => self.show_orbits = !self.show_orbits,
            Action::ToggleLabels => self.show_labels = !self.show_labels,
            Action::ShowHelp => self.show_help = !self.show_help,
        }
    }

    pub fn time_command(&mut self, command: TimeCommand) {
        self.time.apply(command);
    }

    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies.find(name)
    }

    pub fn selected(&self) -> Option<BodyId> {
        self.selected
    }

    /// Fly to a body by name and select it. Returns false for unknown names.
    pub fn fly_to(&mut self, name: &str) -> bool {
        match self.find(name) {
            Some(id) => {
                self.fly_to_id(id);
                true
            }
            None => {
                log::warn!("No body named {:?}", name);
                false
            }
        }
    }

    fn fly_to_id(&mut self, id: BodyId) {
        self.camera.fly_to(self.bodies.focus_target(id), OnComplete::Nothing);
        self.selected = Some(id);
    }

    /// Fly to a body by name, then keep it framed.
    pub fn follow(&mut self, name: &str) -> bool {
        let Some(id) = self.find(name) else {
            log::warn!("No body named {:?}", name);
            return false;
        };
        self.camera.follow_object(self.bodies.focus_target(id));
        self.selected = Some(id);
        true
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset_camera();
        self.selected = None;
    }

    pub fn info(&self, id: BodyId) -> Option<BodyInfo> {
        BodyInfo::of(&self.bodies, id)
    }

    pub fn sun_position(&self) -> Vec3 {
        self.sun.and_then(|id| self.bodies.world_position(id)).unwrap_or(Vec3::ZERO)
    }

    /// Whether a satellite's marker sprite should be drawn.
    pub fn satellite_marker_visible(&self, id: BodyId) -> bool {
        self.bodies
            .get(id)
            .filter(|b| b.kind == BodyKind::Satellite)
            .is_some_and(|b| b.world_position().distance(self.camera.position()) > MARKER_HIDE_DISTANCE)
    }

    /// World-space orbit line of a body; `None` for bodies pinned in place.
    pub fn orbit_path(&self, id: BodyId) -> Option<Vec<Vec3>> {
        let body = self.bodies.get(id)?;
        let tilt = Quat::from_rotation_x(body.inclination as f32);
        let local = match &body.motion {
            Motion::Fixed { .. } => return None,
            Motion::Circular(orbit) => circular_orbit_path(orbit.distance, ORBIT_SEGMENTS),
            Motion::Elliptical(comet) => comet.orbit.path(ORBIT_SEGMENTS),
        };
        let parent = body.parent.and_then(|p| self.bodies.get(p)).map(|p| p.frame());
        Some(
            local
                .into_iter()
                .map(|p| {
                    let p = tilt * p;
                    parent.map_or(p, |frame| frame.transform_point(p))
                })
                .collect(),
        )
    }
}
