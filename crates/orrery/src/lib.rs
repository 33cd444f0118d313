//! Solar-system simulation: the body catalog and arena, orbital kinematics for planets,
//! moons, comets and asteroid belts, solar prominences, meteors, the time controller and
//! the camera controller, tied together by [`Session`].
//!
//! Everything runs single-threaded once per frame. See [`Session::frame`] for the order.

pub mod belt;
pub mod body;
pub mod camera;
pub mod catalog;
pub mod comet;
pub mod error;
pub mod info;
pub mod kinematics;
pub mod meteor;
pub mod prominence;
pub mod session;
pub mod time_control;

pub use belt::{Asteroid, AsteroidBelt, BeltConfig};
pub use body::{BodyId, BodyKind, Bodies, CelestialBody, Motion};
pub use camera::{Camera, CameraController, CameraMode, CameraState, FocusTarget, OnComplete, TargetLookup};
pub use comet::{Comet, CometOrbit, CometTail};
pub use engine_core::ease_in_out_cubic;
pub use error::{OrreryError, Result};
pub use info::BodyInfo;
pub use kinematics::CircularOrbit;
pub use meteor::{Meteor, MeteorShower};
pub use prominence::{Prominence, ProminenceManager};
pub use session::{Session, SessionConfig};
pub use time_control::{TimeCommand, TimeController, TimeInfo};
