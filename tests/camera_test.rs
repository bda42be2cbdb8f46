use std::f32::consts::FRAC_PI_3;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use cgmath::Rad;
use shape_ngin::{
    KeyCode,
    camera::{Camera, PITCH_LIMIT, perspective_fov_lh},
    config::CameraSettings,
    input::InputState,
};

use crate::common::test_utils::{EPSILON, assert_vec3_eq, transform_point};

mod common;

fn default_camera() -> Camera {
    Camera::from_settings(16.0 / 9.0, &CameraSettings::default())
}

#[test]
fn projection_maps_near_and_far_to_unit_depth() {
    let near = 0.01;
    let far = 100.0;
    let projection = perspective_fov_lh(Rad(std::f32::consts::FRAC_PI_4), 1.5, near, far);

    let at_near = transform_point(projection, [0.0, 0.0, near]);
    assert_abs_diff_eq!(at_near.z / at_near.w, 0.0, epsilon = EPSILON);

    let at_far = transform_point(projection, [0.0, 0.0, far]);
    assert_relative_eq!(at_far.z / at_far.w, 1.0, epsilon = EPSILON);

    // w carries view-space depth for the perspective divide
    assert_abs_diff_eq!(at_far.w, far, epsilon = EPSILON);
}

#[test]
fn projection_respects_fov_and_aspect() {
    let aspect = 2.0;
    let projection = perspective_fov_lh(Rad(std::f32::consts::FRAC_PI_2), aspect, 0.1, 10.0);

    // with a 90 degree vertical fov the top edge at depth 1 sits at y = 1
    let top = transform_point(projection, [0.0, 1.0, 1.0]);
    assert_relative_eq!(top.y / top.w, 1.0, epsilon = EPSILON);

    let right = transform_point(projection, [aspect, 0.0, 1.0]);
    assert_relative_eq!(right.x / right.w, 1.0, epsilon = EPSILON);
}

#[test]
fn default_camera_looks_down_positive_z_at_origin() {
    let camera = default_camera();
    assert_vec3_eq(camera.transform().position(), [0.0, 0.0, -5.0]);

    let origin = transform_point(camera.view_matrix(), [0.0, 0.0, 0.0]);
    assert_vec3_eq(origin.truncate(), [0.0, 0.0, 5.0]);

    // left-handed: +x stays to the right
    let right = transform_point(camera.view_matrix(), [1.0, 0.0, 0.0]);
    assert_vec3_eq(right.truncate(), [1.0, 0.0, 5.0]);
}

#[test]
fn wasd_space_x_move_along_local_axes() {
    let cases = [
        (KeyCode::KeyW, [0.0, 0.0, -4.5]),
        (KeyCode::KeyS, [0.0, 0.0, -5.5]),
        (KeyCode::KeyA, [-0.5, 0.0, -5.0]),
        (KeyCode::KeyD, [0.5, 0.0, -5.0]),
        (KeyCode::Space, [0.0, 0.5, -5.0]),
        (KeyCode::KeyX, [0.0, -0.5, -5.0]),
    ];
    for (key, expected) in cases {
        let mut camera = default_camera();
        let mut input = InputState::new();
        input.press(key);
        // move_speed 5 for a tenth of a second
        camera.update(0.1, &input);
        assert_vec3_eq(camera.transform().position(), expected);
    }
}

#[test]
fn movement_updates_the_view_matrix() {
    let mut camera = default_camera();
    let mut input = InputState::new();
    input.press(KeyCode::KeyW);
    camera.update(1.0, &input);

    let origin = transform_point(camera.view_matrix(), [0.0, 0.0, 0.0]);
    assert_vec3_eq(origin.truncate(), [0.0, 0.0, 0.0]);
}

#[test]
fn mouse_look_only_while_right_button_is_held() {
    let mut camera = default_camera();
    let mut input = InputState::new();
    input.accumulate_mouse_motion(10.0, 4.0);
    camera.update(0.1, &input);
    assert_vec3_eq(camera.transform().pitch_yaw_roll(), [0.0, 0.0, 0.0]);

    input.set_right_mouse(true);
    camera.update(0.1, &input);
    // delta * look_speed(0.5) * dt(0.1)
    assert_vec3_eq(camera.transform().pitch_yaw_roll(), [0.2, 0.5, 0.0]);
}

#[test]
fn pitch_is_clamped() {
    let mut camera = default_camera();
    let mut input = InputState::new();
    input.set_right_mouse(true);

    input.accumulate_mouse_motion(0.0, 10_000.0);
    camera.update(1.0, &input);
    assert_abs_diff_eq!(camera.transform().pitch_yaw_roll().x, PITCH_LIMIT, epsilon = EPSILON);
    input.end_frame();

    input.accumulate_mouse_motion(0.0, -40_000.0);
    camera.update(1.0, &input);
    assert_abs_diff_eq!(camera.transform().pitch_yaw_roll().x, -PITCH_LIMIT, epsilon = EPSILON);
}

#[test]
fn captured_input_does_not_move_the_camera() {
    let mut camera = default_camera();
    let mut input = InputState::new();
    input.press(KeyCode::KeyW);
    input.set_right_mouse(true);
    input.accumulate_mouse_motion(50.0, 50.0);
    input.set_capture(true, true);

    camera.update(1.0, &input);
    assert_vec3_eq(camera.transform().position(), [0.0, 0.0, -5.0]);
    assert_vec3_eq(camera.transform().pitch_yaw_roll(), [0.0, 0.0, 0.0]);
}

#[test]
fn set_fov_and_resize_rebuild_the_projection() {
    let mut camera = default_camera();
    let before = camera.projection_matrix();

    camera.set_fov(Rad(FRAC_PI_3));
    assert_eq!(camera.fov(), Rad(FRAC_PI_3));
    assert_ne!(camera.projection_matrix(), before);

    camera.update_projection_matrix(1.0);
    assert_relative_eq!(camera.aspect_ratio(), 1.0);
    let projection = camera.projection_matrix();
    assert_relative_eq!(projection.x.x, projection.y.y, epsilon = EPSILON);
}
