//! Whole-session scenarios driven through the public frame loop.

use chrono::{TimeZone, Utc};
use glam::Vec3;
use input::{InputState, Key, KeyState};
use orrery::{
    catalog, BodyKind, CameraMode, CometOrbit, ProminenceManager, Session, SessionConfig, TimeCommand,
};
use procgen::StarfieldConfig;

fn session() -> Session {
    Session::new(SessionConfig {
        randomize_phases: false,
        start_date: Utc.with_ymd_and_hms(2026, 3, 20, 12, 0, 0).unwrap(),
        starfield: StarfieldConfig {
            count: 10,
            bright_count: 0,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap()
}

fn approx(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    (a - b).length() < tolerance
}

fn press(key: Key) -> InputState {
    let mut input = InputState::new();
    input.process_key(key, KeyState::Pressed);
    input
}

#[test]
fn earth_lands_where_its_angle_says() {
    let mut s = session();
    s.frame(100.0, &InputState::new());
    let earth = s.find("Earth").unwrap();
    let p = s.bodies.world_position(earth).unwrap();
    assert!(approx(p, Vec3::new(91.85, 0.0, 143.05), 1e-2), "{:?}", p);
}

#[test]
fn orbital_advance_is_additive() {
    let mut once = session();
    let mut twice = session();
    let idle = InputState::new();
    once.frame(2.0, &idle);
    twice.frame(1.0, &idle);
    twice.frame(1.0, &idle);

    for (id, body) in once.bodies.iter() {
        let other = twice.bodies.get(id).unwrap();
        assert!((body.angle() - other.angle()).abs() < 1e-9, "{}", body.name);
        assert!(approx(body.world_position(), other.world_position(), 1e-3), "{}", body.name);
    }
}

#[test]
fn keyboard_time_controls() {
    let mut s = session();
    let mut input = InputState::new();
    for _ in 0..3 {
        input.begin_frame();
        input.process_key(Key::ArrowUp, KeyState::Pressed);
        s.frame(0.0, &input);
        input.process_key(Key::ArrowUp, KeyState::Released);
    }
    s.frame(0.0, &press(Key::ArrowLeft));
    assert_eq!(s.time.effective_rate(), -1000.0);
    assert_eq!(s.time.speed_label(), "Speed: -1k×");

    s.frame(0.0, &press(Key::Space));
    assert_eq!(s.time.effective_rate(), 0.0);

    s.time_command(TimeCommand::Realtime);
    assert_eq!(s.time.effective_rate(), 1.0);
}

#[test]
fn reversed_time_runs_the_calendar_backwards() {
    let mut s = session();
    s.time_command(TimeCommand::Reverse);
    for _ in 0..4 {
        s.time_command(TimeCommand::Faster);
    }
    let start = s.time.date();
    s.frame(1.0, &InputState::new());
    assert_eq!(start - s.time.date(), chrono::Duration::seconds(10_000));
}

#[test]
fn comets_sweep_fastest_at_perihelion() {
    for desc in catalog::comets() {
        let orbit = CometOrbit::new(desc.name, desc.perihelion, desc.aphelion, desc.orbit_speed).unwrap();
        assert_eq!(orbit.speed_factor_at(orbit.perihelion), 1.0);
        assert!(orbit.speed_factor_at(orbit.aphelion) < 1.0);

        let mut prev = orbit;
        for i in 1..=32 {
            let next = orbit.with_angle(i as f64 / 32.0 * std::f64::consts::PI);
            assert!(next.distance() > prev.distance(), "{} step {}", desc.name, i);
            assert!(next.speed_factor() < prev.speed_factor(), "{} step {}", desc.name, i);
            prev = next;
        }

        let path = orbit.path(64);
        assert!(approx(path[0], path[64], 1e-3), "{} path is not closed", desc.name);
        let nearest = path.iter().map(|p| p.length()).fold(f32::MAX, f32::min);
        assert!((nearest as f64 - orbit.perihelion).abs() < 1e-2 * orbit.perihelion);
    }

    let mut s = session();
    s.time_command(TimeCommand::Faster);
    let idle = InputState::new();
    for _ in 0..100 {
        s.frame(0.1, &idle);
    }
    for id in s.bodies.of_kind(BodyKind::Comet).collect::<Vec<_>>() {
        let comet = s.bodies.get(id).unwrap().comet().unwrap();
        let d = comet.orbit.distance();
        assert!(d >= comet.orbit.perihelion - 1e-6 && d <= comet.orbit.aphelion + 1e-6);
    }
}

#[test]
fn prominence_pool_size_never_changes() {
    let mut manager = ProminenceManager::new(50.0, 5, 9);
    let camera = Vec3::new(0.0, 0.0, 300.0);
    for _ in 0..1200 {
        manager.update(0.1, camera);
        assert_eq!(manager.len(), 5);
        for p in manager.prominences() {
            assert!(p.age >= 0.0);
            assert!((0.0..=1.0).contains(&p.opacity));
            assert!((15.0..40.0).contains(&p.lifetime));
        }
    }
    assert!(manager.respawn_count() >= 5);
}

#[test]
fn fly_to_lands_on_the_framed_offset() {
    let mut s = session();
    s.time_command(TimeCommand::TogglePause);
    let earth = s.find("Earth").unwrap();
    let p = s.bodies.world_position(earth).unwrap();
    assert!(s.fly_to("earth"));

    let idle = InputState::new();
    for _ in 0..21 {
        s.frame(0.1, &idle);
    }
    assert_eq!(s.camera.mode(), CameraMode::Idle);
    assert!(approx(s.camera.position(), p + Vec3::new(45.0, 22.5, 45.0), 1e-3));
    assert!(approx(s.camera.target(), p, 1e-3));

    let info = s.info(earth).unwrap();
    assert_eq!(info.name, "Earth");
}

#[test]
fn free_flight_and_escape_through_keys() {
    let mut s = session();
    s.follow("Jupiter");
    s.frame(0.1, &press(Key::KeyF));
    assert_eq!(s.camera.mode(), CameraMode::FreeFlight);
    s.frame(0.1, &press(Key::Escape));
    assert_eq!(s.camera.mode(), CameraMode::Idle);
}
