//! Position, orientation and scale of a single object.
//!
//! A [`Transform`] stores its pose as plain vectors and lazily derives the
//! world matrix (and its inverse transpose) the first time either is read
//! after a mutation. Rotation is kept as Euler angles (pitch, yaw, roll) and
//! applied roll first, then pitch, then yaw.

use std::cell::Cell;

use cgmath::{Matrix, Matrix4, Quaternion, Rad, Rotation, Rotation3, SquareMatrix, Vector3};

#[derive(Clone, Debug)]
pub struct Transform {
    position: Vector3<f32>,
    // x = pitch, y = yaw, z = roll
    rotation: Vector3<f32>,
    scale: Vector3<f32>,
    world: Cell<Matrix4<f32>>,
    world_inverse_transpose: Cell<Matrix4<f32>>,
    dirty: Cell<bool>,
}

impl Transform {
    /// Identity pose: origin, no rotation, unit scale.
    pub fn new() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            world: Cell::new(Matrix4::identity()),
            world_inverse_transpose: Cell::new(Matrix4::identity()),
            dirty: Cell::new(true),
        }
    }

    pub fn set_position(&mut self, position: impl Into<Vector3<f32>>) {
        self.position = position.into();
        self.dirty.set(true);
    }

    /// Overwrites the Euler angles, given as `(pitch, yaw, roll)` in radians.
    pub fn set_rotation(&mut self, pitch_yaw_roll: impl Into<Vector3<f32>>) {
        self.rotation = pitch_yaw_roll.into();
        self.dirty.set(true);
    }

    pub fn set_scale(&mut self, scale: impl Into<Vector3<f32>>) {
        self.scale = scale.into();
        self.dirty.set(true);
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn pitch_yaw_roll(&self) -> Vector3<f32> {
        self.rotation
    }

    pub fn scale(&self) -> Vector3<f32> {
        self.scale
    }

    /// Moves along the world axes, ignoring the current orientation.
    pub fn move_absolute(&mut self, offset: impl Into<Vector3<f32>>) {
        self.position += offset.into();
        self.dirty.set(true);
    }

    /// Moves along the object's local axes: the offset is rotated by the
    /// current orientation before it is applied.
    pub fn move_relative(&mut self, offset: impl Into<Vector3<f32>>) {
        let offset = self.orientation().rotate_vector(offset.into());
        self.position += offset;
        self.dirty.set(true);
    }

    /// Adds to the Euler angles, given as `(pitch, yaw, roll)` in radians.
    pub fn rotate(&mut self, pitch_yaw_roll: impl Into<Vector3<f32>>) {
        self.rotation += pitch_yaw_roll.into();
        self.dirty.set(true);
    }

    /// Multiplies the current scale component-wise.
    pub fn scale_by(&mut self, factor: impl Into<Vector3<f32>>) {
        let factor = factor.into();
        self.scale = Vector3::new(
            self.scale.x * factor.x,
            self.scale.y * factor.y,
            self.scale.z * factor.z,
        );
        self.dirty.set(true);
    }

    pub fn right(&self) -> Vector3<f32> {
        self.orientation().rotate_vector(Vector3::unit_x())
    }

    pub fn up(&self) -> Vector3<f32> {
        self.orientation().rotate_vector(Vector3::unit_y())
    }

    pub fn forward(&self) -> Vector3<f32> {
        self.orientation().rotate_vector(Vector3::unit_z())
    }

    pub fn world_matrix(&self) -> Matrix4<f32> {
        self.update_matrices();
        self.world.get()
    }

    pub fn world_inverse_transpose_matrix(&self) -> Matrix4<f32> {
        self.update_matrices();
        self.world_inverse_transpose.get()
    }

    /// Whether the cached matrices are stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Roll about Z, then pitch about X, then yaw about Y.
    fn orientation(&self) -> Quaternion<f32> {
        Quaternion::from_angle_y(Rad(self.rotation.y))
            * Quaternion::from_angle_x(Rad(self.rotation.x))
            * Quaternion::from_angle_z(Rad(self.rotation.z))
    }

    fn update_matrices(&self) {
        if !self.dirty.get() {
            return;
        }
        let world = Matrix4::from_translation(self.position)
            * Matrix4::from(self.orientation())
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        // a zero scale collapses the matrix, fall back to identity for normals
        let inverse_transpose = world
            .transpose()
            .invert()
            .unwrap_or_else(Matrix4::identity);

        self.world.set(world);
        self.world_inverse_transpose.set(inverse_transpose);
        self.dirty.set(false);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vector3<f32>> for Transform {
    fn from(position: Vector3<f32>) -> Self {
        let mut transform = Transform::new();
        transform.set_position(position);
        transform
    }
}
