use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use cgmath::{Matrix4, Vector3, Vector4};
use shape_ngin::AppConfig;

pub const EPSILON: f32 = 1e-5;

/// Default config pointing at the crate's own `assets/` regardless of the working directory.
pub fn test_config() -> AppConfig {
    AppConfig {
        asset_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
        ..AppConfig::default()
    }
}

pub fn assert_vec3_eq(actual: Vector3<f32>, expected: [f32; 3]) {
    let actual: [f32; 3] = actual.into();
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*a, *e, epsilon = EPSILON);
    }
}

pub fn assert_mat4_eq(actual: Matrix4<f32>, expected: Matrix4<f32>) {
    let actual: [[f32; 4]; 4] = actual.into();
    let expected: [[f32; 4]; 4] = expected.into();
    for (a, e) in actual.iter().flatten().zip(expected.iter().flatten()) {
        assert_abs_diff_eq!(*a, *e, epsilon = EPSILON);
    }
}

/// Applies `m` to a point (w = 1) and returns the homogeneous result.
pub fn transform_point(m: Matrix4<f32>, p: [f32; 3]) -> Vector4<f32> {
    m * Vector4::new(p[0], p[1], p[2], 1.0)
}

/// `f64` colour channel to an 8-bit UNORM value.
pub fn f_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
