use std::f32::consts::FRAC_PI_2;

use cgmath::{Matrix4, SquareMatrix};
use shape_ngin::data_structures::transform::Transform;

use crate::common::test_utils::{assert_mat4_eq, assert_vec3_eq, transform_point};

mod common;

#[test]
fn new_transform_is_identity() {
    let transform = Transform::new();
    assert_vec3_eq(transform.position(), [0.0, 0.0, 0.0]);
    assert_vec3_eq(transform.pitch_yaw_roll(), [0.0, 0.0, 0.0]);
    assert_vec3_eq(transform.scale(), [1.0, 1.0, 1.0]);
    assert_mat4_eq(transform.world_matrix(), Matrix4::identity());
}

#[test]
fn world_matrix_scales_then_rotates_then_translates() {
    let mut transform = Transform::new();
    transform.set_scale([2.0, 2.0, 2.0]);
    transform.set_rotation([0.0, FRAC_PI_2, 0.0]);
    transform.set_position([1.0, 0.0, 0.0]);

    // (1,0,0) -> scaled (2,0,0) -> yawed onto -z -> shifted along x
    let p = transform_point(transform.world_matrix(), [1.0, 0.0, 0.0]);
    assert_vec3_eq(p.truncate(), [1.0, 0.0, -2.0]);
}

#[test]
fn roll_is_applied_before_pitch() {
    let mut transform = Transform::new();
    transform.set_rotation([FRAC_PI_2, 0.0, FRAC_PI_2]);

    // roll takes +x to +y, pitch then takes +y to +z
    let p = transform_point(transform.world_matrix(), [1.0, 0.0, 0.0]);
    assert_vec3_eq(p.truncate(), [0.0, 0.0, 1.0]);
}

#[test]
fn matrices_are_cached_until_the_next_mutation() {
    let mut transform = Transform::new();
    assert!(transform.is_dirty());

    let first = transform.world_matrix();
    assert!(!transform.is_dirty());
    assert_mat4_eq(transform.world_matrix(), first);

    transform.move_absolute([0.0, 3.0, 0.0]);
    assert!(transform.is_dirty());
    let p = transform_point(transform.world_matrix(), [0.0, 0.0, 0.0]);
    assert_vec3_eq(p.truncate(), [0.0, 3.0, 0.0]);
    assert!(!transform.is_dirty());
}

#[test]
fn every_mutator_marks_dirty() {
    let mutations: [fn(&mut Transform); 6] = [
        |t| t.set_position([1.0, 0.0, 0.0]),
        |t| t.set_rotation([0.1, 0.0, 0.0]),
        |t| t.set_scale([2.0, 1.0, 1.0]),
        |t| t.move_relative([0.0, 0.0, 1.0]),
        |t| t.rotate([0.0, 0.2, 0.0]),
        |t| t.scale_by([1.0, 3.0, 1.0]),
    ];
    for mutate in mutations {
        let mut transform = Transform::new();
        transform.world_matrix();
        mutate(&mut transform);
        assert!(transform.is_dirty());
    }
}

#[test]
fn move_relative_follows_orientation() {
    let mut transform = Transform::new();
    transform.set_rotation([0.0, FRAC_PI_2, 0.0]);
    transform.move_relative([0.0, 0.0, 1.0]);
    assert_vec3_eq(transform.position(), [1.0, 0.0, 0.0]);

    transform.move_absolute([0.0, 0.0, 1.0]);
    assert_vec3_eq(transform.position(), [1.0, 0.0, 1.0]);
}

#[test]
fn direction_vectors_follow_yaw() {
    let mut transform = Transform::new();
    assert_vec3_eq(transform.forward(), [0.0, 0.0, 1.0]);
    assert_vec3_eq(transform.right(), [1.0, 0.0, 0.0]);
    assert_vec3_eq(transform.up(), [0.0, 1.0, 0.0]);

    transform.rotate([0.0, FRAC_PI_2, 0.0]);
    assert_vec3_eq(transform.forward(), [1.0, 0.0, 0.0]);
    assert_vec3_eq(transform.right(), [0.0, 0.0, -1.0]);
    assert_vec3_eq(transform.up(), [0.0, 1.0, 0.0]);
}

#[test]
fn scale_by_multiplies_componentwise() {
    let mut transform = Transform::new();
    transform.set_scale([2.0, 3.0, 4.0]);
    transform.scale_by([0.5, 2.0, 1.0]);
    assert_vec3_eq(transform.scale(), [1.0, 6.0, 4.0]);
}

#[test]
fn inverse_transpose_undoes_nonuniform_scale() {
    let mut transform = Transform::new();
    transform.set_scale([2.0, 1.0, 1.0]);
    assert_mat4_eq(
        transform.world_inverse_transpose_matrix(),
        Matrix4::from_nonuniform_scale(0.5, 1.0, 1.0),
    );
}

#[test]
fn zero_scale_falls_back_to_identity_inverse_transpose() {
    let mut transform = Transform::new();
    transform.set_scale([0.0, 0.0, 0.0]);
    assert_mat4_eq(transform.world_inverse_transpose_matrix(), Matrix4::identity());
}

#[test]
fn from_vector_sets_position_only() {
    let transform = Transform::from(cgmath::Vector3::new(1.0, 2.0, 3.0));
    assert_vec3_eq(transform.position(), [1.0, 2.0, 3.0]);
    assert_vec3_eq(transform.scale(), [1.0, 1.0, 1.0]);
}
