// Integration tests for the orbit camera, viewport and interactive controls.

use glam::Vec3;
use tree_core::*;

fn approx(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}

#[test]
fn orbit_start_position_matches_spherical_formula() {
    let rig = CameraRig::default();
    assert_eq!(rig.radius, 50.0);
    let eye = rig.eye();
    assert!(eye.x.abs() < 1e-5);
    assert!((eye.y - 17.101).abs() < 1e-2, "y={}", eye.y);
    assert!((eye.z - 46.985).abs() < 1e-2, "z={}", eye.z);
}

#[test]
fn orbit_advances_by_fixed_step() {
    let mut rig = CameraRig::default();
    rig.advance();
    assert!((rig.angle - 0.001).abs() < 1e-9);
    let eye = rig.eye();
    let horizontal = 50.0 * 70f32.to_radians().sin();
    assert!((eye.x - horizontal * 0.001f32.sin()).abs() < 1e-4);
    assert!((eye.z - horizontal * 0.001f32.cos()).abs() < 1e-4);
    // inclination fixes the height
    assert!((eye.y - 50.0 * 70f32.to_radians().cos()).abs() < 1e-4);
}

#[test]
fn orbit_keeps_constant_distance_from_origin() {
    let mut rig = CameraRig::default();
    for _ in 0..5_000 {
        rig.advance();
        assert!((rig.eye().length() - CAMERA_RADIUS).abs() < 1e-3);
    }
}

#[test]
fn scene_camera_looks_slightly_above_ground() {
    let s = SceneState::from_seed(0);
    let view = s.camera_view();
    assert!(approx(view.target, Vec3::new(0.0, 5.0, 0.0), 1e-6));
    assert!(approx(view.eye, s.camera.eye(), 1e-4));
}

#[test]
fn resize_with_same_size_is_a_no_op() {
    let mut s = SceneState::from_seed(0);
    assert!(s.resize(1280, 720));
    let first = s.viewport.clone();
    assert!(!s.resize(1280, 720));
    assert_eq!(s.viewport, first);
    assert!((s.viewport.aspect - 1280.0 / 720.0).abs() < 1e-6);
}

#[test]
fn resize_ignores_zero_sized_viewports() {
    let mut v = Viewport::new(800, 600);
    assert!(!v.resize(0, 600));
    assert!(!v.resize(800, 0));
    assert_eq!(v.width, 800);
    assert_eq!(v.height, 600);
}

#[test]
fn projection_uses_viewport_aspect() {
    let p = Projection::default();
    assert!((p.fov_y - 75f32.to_radians()).abs() < 1e-6);
    let wide = p.matrix(2.0);
    let square = p.matrix(1.0);
    // x scale shrinks as the viewport widens
    assert!(wide.x_axis.x < square.x_axis.x);
    assert!((square.x_axis.x / wide.x_axis.x - 2.0).abs() < 1e-4);
}

#[test]
fn controls_without_input_leave_view_unchanged() {
    let mut c = OrbitControls::default();
    for _ in 0..10 {
        c.update(50.0);
    }
    let view = CameraView {
        eye: Vec3::new(3.0, 17.0, 40.0),
        target: Vec3::new(0.0, 5.0, 0.0),
    };
    let out = c.apply(view);
    assert!(approx(out.eye, view.eye, 1e-4));
    assert!(approx(out.target, view.target, 1e-6));
}

#[test]
fn zoom_is_damped_and_converges() {
    let mut c = OrbitControls::default();
    c.zoom(1000.0);
    c.update(50.0);
    let first = c.distance_scale();
    // one update only moves a damping_factor share of the request
    assert!(first > 1.0 && first < 2.0f32.powf(CONTROLS_ZOOM_SPEED * 1000.0));
    for _ in 0..1_000 {
        c.update(50.0);
    }
    assert!((c.distance_scale() - 2.0f32.powf(CONTROLS_ZOOM_SPEED * 1000.0)).abs() < 1e-3);
}

#[test]
fn zoom_distance_is_clamped() {
    let mut c = OrbitControls::default();
    c.enable_damping = false;
    c.zoom(1.0e5);
    c.update(50.0);
    let view = CameraView {
        eye: Vec3::new(0.0, 0.0, 50.0),
        target: Vec3::ZERO,
    };
    let out = c.apply(view);
    assert!((out.eye.length() - CONTROLS_MAX_DISTANCE).abs() < 1e-2);
}

#[test]
fn zoom_in_responds_right_after_zooming_out_past_the_limit() {
    let view = CameraView {
        eye: Vec3::new(0.0, 0.0, 50.0),
        target: Vec3::ZERO,
    };
    let mut c = OrbitControls::default();
    c.enable_damping = false;
    c.zoom(20_000.0);
    c.update(50.0);
    assert!((c.apply(view).eye.length() - CONTROLS_MAX_DISTANCE).abs() < 1e-2);

    // one octave in halves the distance from the limit
    c.zoom(-1.0 / CONTROLS_ZOOM_SPEED);
    c.update(50.0);
    let d = c.apply(view).eye.length();
    assert!((d - CONTROLS_MAX_DISTANCE / 2.0).abs() < 1e-2, "distance={d}");

    c.zoom(-1.0e5);
    c.update(50.0);
    assert!((c.apply(view).eye.length() - CONTROLS_MIN_DISTANCE).abs() < 1e-2);
    c.zoom(1.0 / CONTROLS_ZOOM_SPEED);
    c.update(50.0);
    let d = c.apply(view).eye.length();
    assert!((d - CONTROLS_MIN_DISTANCE * 2.0).abs() < 1e-2, "distance={d}");
}

#[test]
fn damped_zoom_out_leaves_no_backlog_at_the_limit() {
    let mut s = SceneState::from_seed(0);
    s.controls.zoom(50_000.0);
    for _ in 0..200 {
        s.tick();
    }
    let far = s.camera_view();
    assert!((far.eye.distance(far.target) - CONTROLS_MAX_DISTANCE).abs() < 1e-2);

    s.controls.zoom(-1_000.0);
    s.tick();
    let next = s.camera_view();
    assert!(next.eye.distance(next.target) < CONTROLS_MAX_DISTANCE - 1.0);
}

#[test]
fn pan_shifts_eye_and_target_together() {
    let mut c = OrbitControls::default();
    c.enable_damping = false;
    c.pan(-20.0, 0.0);
    c.update(50.0);
    let view = CameraView {
        eye: Vec3::new(0.0, 0.0, 50.0),
        target: Vec3::ZERO,
    };
    let out = c.apply(view);
    let shift = out.target - view.target;
    assert!(shift.length() > 0.0);
    assert!(approx(out.eye - out.target, view.eye - view.target, 1e-4));
    // looking down -Z, screen right is +X
    assert!(shift.x > 0.0 && shift.y.abs() < 1e-6 && shift.z.abs() < 1e-6);
}
