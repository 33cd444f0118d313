//! Camera and its controller: eased fly-to transitions, body following and free flight.

use glam::{Mat4, Vec3};

use engine_core::{ease_in_out_cubic, Transform};
use input::FlightInput;

use crate::body::BodyId;

pub const HOME_POSITION: Vec3 = Vec3::new(200.0, 150.0, 300.0);
pub const HOME_TARGET: Vec3 = Vec3::ZERO;
pub const TRANSITION_SECONDS: f32 = 2.0;
pub const FREE_FLIGHT_SPEED: f32 = 100.0;
pub const BOOST_FACTOR: f32 = 3.0;
/// Framing distance for satellites, which are far smaller than their orbit.
pub const SATELLITE_VIEW_DISTANCE: f32 = 0.3;
/// Framing distance when the target radius is unknown.
const FALLBACK_VIEW_DISTANCE: f32 = 50.0;
/// Blend rates per second while following.
const SATELLITE_BLEND: f32 = 20.0;
const TARGET_BLEND: f32 = 5.0;
const CAMERA_BLEND: f32 = 3.0;

/// Perspective camera.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera transform (position and rotation).
    pub transform: Transform,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            fov_degrees: 60.0,
            near: 0.1,
            far: 5000.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            transform: Transform::from_position(position),
            ..Default::default()
        }
    }

    /// Update aspect ratio (call on window resize).
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Free-fly in camera space: `direction` is -Z forward, +X right, +Y up, any length.
    pub fn process_fly(&mut self, direction: Vec3, speed: f32, dt: f32) -> Vec3 {
        if direction.length_squared() == 0.0 {
            return Vec3::ZERO;
        }
        let velocity = self.transform.rotation * direction.normalize() * speed;
        self.transform.translate(velocity * dt);
        velocity
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.transform.look_at(target, Vec3::Y);
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.transform.position;
        Mat4::look_at_rh(eye, eye + self.transform.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub fn forward(&self) -> Vec3 {
        self.transform.forward()
    }
}

/// What the controller needs to know about a body to frame it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusTarget {
    pub id: BodyId,
    pub position: Vec3,
    pub radius: f32,
    /// Host position, present only for artificial satellites.
    pub parent_position: Option<Vec3>,
}

impl FocusTarget {
    pub fn is_satellite(&self) -> bool {
        self.parent_position.is_some()
    }
}

/// Answers where a body currently is. Queried after world transforms are updated.
pub trait TargetLookup {
    fn focus_target(&self, id: BodyId) -> Option<FocusTarget>;
}

/// Offset that views a satellite from 45° above and beside, relative to its host.
pub fn satellite_offset(position: Vec3, parent_position: Vec3) -> Vec3 {
    let radial = (position - parent_position).normalize_or_zero();
    // Directly above or below the host, Y gives no tangent; use X instead.
    let reference = if Vec3::Y.cross(radial).length_squared() < 1e-6 {
        Vec3::X
    } else {
        Vec3::Y
    };
    let tangent = reference.cross(radial).normalize_or_zero();
    let elevated = radial.cross(tangent).normalize_or_zero();
    let d = SATELLITE_VIEW_DISTANCE;
    radial * (d * 0.707) + tangent * (d * 0.35) + elevated * (d * 0.35)
}

/// Camera offset used to approach a body.
pub fn approach_offset(target: &FocusTarget) -> Vec3 {
    match target.parent_position {
        Some(parent) => satellite_offset(target.position, parent),
        None => {
            let d = if target.radius > 0.0 {
                target.radius * 5.0 + 20.0
            } else {
                FALLBACK_VIEW_DISTANCE
            };
            Vec3::new(d, d * 0.5, d)
        }
    }
}

/// Action queued to run when a transition completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnComplete {
    Nothing,
    Follow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub start: Vec3,
    pub end: Vec3,
    pub target_start: Vec3,
    pub target_end: Vec3,
    pub progress: f32,
    pub duration: f32,
    pub on_complete: OnComplete,
    pub focus: Option<FocusTarget>,
}

impl Transition {
    /// Eased camera position and look target at `progress` in [0, 1].
    pub fn sample(&self, progress: f32) -> (Vec3, Vec3) {
        let t = ease_in_out_cubic(progress);
        (self.start.lerp(self.end, t), self.target_start.lerp(self.target_end, t))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follow {
    pub target: BodyId,
    pub offset: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraState {
    Idle,
    Transitioning(Transition),
    Following(Follow),
    FreeFlight { velocity: Vec3 },
}

/// Mode without payload, for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Idle,
    Transitioning,
    Following,
    FreeFlight,
}

#[derive(Debug, Clone)]
pub struct CameraController {
    pub camera: Camera,
    target: Vec3,
    state: CameraState,
    pub move_speed: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(HOME_POSITION, HOME_TARGET)
    }
}

impl CameraController {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        let mut camera = Camera::new(position);
        camera.look_at(target);
        Self {
            camera,
            target,
            state: CameraState::Idle,
            move_speed: FREE_FLIGHT_SPEED,
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn mode(&self) -> CameraMode {
        match self.state {
            CameraState::Idle => CameraMode::Idle,
            CameraState::Transitioning(_) => CameraMode::Transitioning,
            CameraState::Following(_) => CameraMode::Following,
            CameraState::FreeFlight { .. } => CameraMode::FreeFlight,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.camera.position()
    }

    /// Point the camera orbits and looks at.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn following(&self) -> Option<BodyId> {
        match self.state {
            CameraState::Following(follow) => Some(follow.target),
            _ => None,
        }
    }

    /// Eased camera position and look target of the active transition at `progress`.
    pub fn sample_transition(&self, progress: f32) -> Option<(Vec3, Vec3)> {
        match &self.state {
            CameraState::Transitioning(transition) => Some(transition.sample(progress)),
            _ => None,
        }
    }

    /// Start an eased two-second flight to frame `target`. `None` is ignored.
    pub fn fly_to(&mut self, target: Option<FocusTarget>, on_complete: OnComplete) {
        let Some(focus) = target else {
            return;
        };
        let end = focus.position + approach_offset(&focus);
        self.begin_transition(end, focus.position, on_complete, Some(focus));
        log::debug!("Flying to body {:?}", focus.id);
    }

    /// Fly to `target`, then keep it framed.
    pub fn follow_object(&mut self, target: Option<FocusTarget>) {
        self.fly_to(target, OnComplete::Follow);
    }

    pub fn stop_following(&mut self) {
        if matches!(self.state, CameraState::Following(_)) {
            self.state = CameraState::Idle;
        }
    }

    /// Glide back to the overview position.
    pub fn reset_camera(&mut self) {
        self.stop_following();
        self.begin_transition(HOME_POSITION, HOME_TARGET, OnComplete::Nothing, None);
    }

    /// Free flight excludes following and transitions.
    pub fn toggle_free_flight(&mut self) {
        self.state = match self.state {
            CameraState::FreeFlight { .. } => CameraState::Idle,
            _ => CameraState::FreeFlight { velocity: Vec3::ZERO },
        };
        log::info!("Camera mode: {:?}", self.mode());
    }

    /// Stop following, leave free flight and drop any queued follow.
    pub fn escape(&mut self) {
        match self.state {
            CameraState::Following(_) | CameraState::FreeFlight { .. } => self.state = CameraState::Idle,
            CameraState::Transitioning(ref mut transition) => transition.on_complete = OnComplete::Nothing,
            CameraState::Idle => {}
        }
    }

    fn begin_transition(&mut self, end: Vec3, target_end: Vec3, on_complete: OnComplete, focus: Option<FocusTarget>) {
        self.state = CameraState::Transitioning(Transition {
            start: self.camera.position(),
            end,
            target_start: self.target,
            target_end,
            progress: 0.0,
            duration: TRANSITION_SECONDS,
            on_complete,
            focus,
        });
    }

    /// Advance by a wall-clock delta. Call after body transforms are current.
    pub fn update(&mut self, delta: f32, flight: &FlightInput, lookup: &impl TargetLookup) {
        match self.state {
            CameraState::Idle => {}
            CameraState::Transitioning(mut transition) => {
                transition.progress = (transition.progress + delta / transition.duration).min(1.0);
                let (position, target) = transition.sample(transition.progress);
                self.camera.transform.position = position;
                self.target = target;
                self.state = if transition.progress >= 1.0 {
                    self.complete(&transition)
                } else {
                    CameraState::Transitioning(transition)
                };
            }
            CameraState::Following(mut follow) => match lookup.focus_target(follow.target) {
                Some(focus) => {
                    self.track(&mut follow, &focus, delta);
                    self.state = CameraState::Following(follow);
                }
                None => {
                    log::warn!("Follow target {:?} vanished", follow.target);
                    self.state = CameraState::Idle;
                }
            },
            CameraState::FreeFlight { .. } => {
                let speed = if flight.boost {
                    self.move_speed * BOOST_FACTOR
                } else {
                    self.move_speed
                };
                let velocity = self.camera.process_fly(flight.direction(), speed, delta);
                self.state = CameraState::FreeFlight { velocity };
                // Free flight keeps its own orientation.
                return;
            }
        }
        self.camera.look_at(self.target);
    }

    fn complete(&self, transition: &Transition) -> CameraState {
        match (transition.on_complete, transition.focus) {
            (OnComplete::Follow, Some(focus)) => {
                let r = if focus.radius > 0.0 { focus.radius } else { 10.0 };
                log::info!("Following body {:?}", focus.id);
                CameraState::Following(Follow {
                    target: focus.id,
                    offset: Vec3::new(r * 3.0, r * 1.5, r * 3.0),
                })
            }
            _ => CameraState::Idle,
        }
    }

    /// Exponential smoothing toward the framed position; blend factors are capped at 1.
    fn track(&mut self, follow: &mut Follow, focus: &FocusTarget, delta: f32) {
        let (target_blend, camera_blend) = match focus.parent_position {
            Some(parent) => {
                follow.offset = satellite_offset(focus.position, parent);
                (SATELLITE_BLEND, SATELLITE_BLEND)
            }
            None => (TARGET_BLEND, CAMERA_BLEND),
        };
        let desired = focus.position + follow.offset;
        self.target = self.target.lerp(focus.position, (delta * target_blend).min(1.0));
        let position = self.camera.position().lerp(desired, (delta * camera_blend).min(1.0));
        self.camera.transform.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<FocusTarget>);

    impl TargetLookup for Fixed {
        fn focus_target(&self, id: BodyId) -> Option<FocusTarget> {
            self.0.iter().find(|t| t.id == id).copied()
        }
    }

    fn planet() -> FocusTarget {
        FocusTarget {
            id: BodyId(3),
            position: Vec3::new(100.0, 0.0, 0.0),
            radius: 5.0,
            parent_position: None,
        }
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn transition_endpoints_and_monotonic_progress() {
        let mut cam = CameraController::default();
        cam.fly_to(Some(planet()), OnComplete::Nothing);
        let CameraState::Transitioning(transition) = *cam.state() else {
            panic!("expected a transition");
        };
        assert_eq!(cam.sample_transition(0.0), Some(transition.sample(0.0)));
        assert!(close(transition.sample(0.0).0, HOME_POSITION));
        assert!(close(transition.sample(1.0).0, Vec3::new(145.0, 22.5, 45.0)));
        assert!(close(transition.sample(1.0).1, planet().position));

        let mut prev = transition.start.distance(transition.end);
        for i in 1..=100 {
            let remaining = transition.sample(i as f32 / 100.0).0.distance(transition.end);
            assert!(remaining <= prev + 1e-4);
            prev = remaining;
        }
    }

    #[test]
    fn follow_starts_when_the_flight_lands() {
        let lookup = Fixed(vec![planet()]);
        let mut cam = CameraController::default();
        cam.follow_object(Some(planet()));
        let idle = FlightInput::default();

        cam.update(1.0, &idle, &lookup);
        assert_eq!(cam.mode(), CameraMode::Transitioning);
        cam.update(1.0, &idle, &lookup);
        assert_eq!(cam.following(), Some(BodyId(3)));
        assert!(close(cam.target(), planet().position));

        let CameraState::Following(follow) = *cam.state() else {
            panic!("expected following");
        };
        assert!(close(follow.offset, Vec3::new(15.0, 7.5, 15.0)));

        // Long frames converge straight onto the framed position.
        cam.update(1.0, &idle, &lookup);
        assert!(close(cam.position(), planet().position + follow.offset));
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let mut cam = CameraController::default();
        cam.fly_to(None, OnComplete::Follow);
        assert_eq!(cam.mode(), CameraMode::Idle);
    }

    #[test]
    fn satellites_are_framed_from_above_and_beside() {
        let offset = satellite_offset(Vec3::new(105.21, 0.0, 0.0), Vec3::new(100.0, 0.0, 0.0));
        assert!((offset.length() - 0.3 * (0.707f32.powi(2) + 2.0 * 0.35f32.powi(2)).sqrt()).abs() < 1e-4);
        assert!(offset.x > 0.0 && offset.y > 0.0);

        let hubble = FocusTarget {
            id: BodyId(30),
            position: Vec3::new(105.21, 0.0, 0.0),
            radius: 0.05,
            parent_position: Some(Vec3::new(100.0, 0.0, 0.0)),
        };
        assert!(close(approach_offset(&hubble), offset));
    }

    #[test]
    fn polar_satellites_keep_the_angled_framing() {
        let parent = Vec3::new(100.0, 0.0, 0.0);
        let usual = satellite_offset(Vec3::new(105.0, 0.0, 0.0), parent);
        for above in [Vec3::new(100.0, 5.0, 0.0), Vec3::new(100.0, -5.0, 0.0)] {
            let offset = satellite_offset(above, parent);
            assert!((offset.length() - usual.length()).abs() < 1e-4, "{:?}", offset);
            let radial = (above - parent).normalize();
            let sideways = offset - radial * offset.dot(radial);
            assert!(sideways.length() > 0.1, "{:?}", offset);
        }
    }

    #[test]
    fn free_flight_moves_in_camera_space_and_cancels_follow() {
        let lookup = Fixed(vec![planet()]);
        let mut cam = CameraController::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        cam.follow_object(Some(planet()));
        cam.update(2.0, &FlightInput::default(), &lookup);
        assert_eq!(cam.mode(), CameraMode::Following);

        cam.toggle_free_flight();
        assert_eq!(cam.following(), None);
        let start = cam.position();
        let forward = cam.camera.forward();
        let flight = FlightInput {
            forward: true,
            boost: true,
            ..Default::default()
        };
        cam.update(0.5, &flight, &lookup);
        assert!(close(cam.position(), start + forward * 150.0));

        cam.escape();
        assert_eq!(cam.mode(), CameraMode::Idle);
    }

    #[test]
    fn reset_returns_home() {
        let lookup = Fixed(vec![]);
        let mut cam = CameraController::new(Vec3::new(10.0, 10.0, 10.0), Vec3::ONE);
        cam.reset_camera();
        cam.update(2.5, &FlightInput::default(), &lookup);
        assert!(close(cam.position(), HOME_POSITION));
        assert!(close(cam.target(), HOME_TARGET));
        assert_eq!(cam.mode(), CameraMode::Idle);
    }

    #[test]
    fn escape_cancels_a_queued_follow() {
        let lookup = Fixed(vec![planet()]);
        let mut cam = CameraController::default();
        cam.follow_object(Some(planet()));
        cam.escape();
        cam.update(3.0, &FlightInput::default(), &lookup);
        assert_eq!(cam.mode(), CameraMode::Idle);
    }
}
