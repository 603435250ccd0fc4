//! Projection, view and model-view matrices.
//!
//! All matrices follow OpenGL clip-space conventions (depth in `[-1, 1]`).
//! Multiply by [`OPENGL_TO_WGPU_MATRIX`] before handing a projection to wgpu.

use cgmath::{Deg, Matrix4, Rad, Vector3};

use crate::{camera::Camera, data_structures::game_object::GameObject};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Perspective projection. `fov` is the vertical field of view in radians.
pub fn projection_matrix(fov: f32, width: f32, height: f32, z_near: f32, z_far: f32) -> Matrix4<f32> {
    cgmath::perspective(Rad(fov), width / height, z_near, z_far)
}

/// Rotate about X, then Y, then translate by `-position`, so the camera
/// rotates over its own position.
pub fn view_matrix(position: Vector3<f32>, rotation: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::from_angle_x(Deg(rotation.x))
        * Matrix4::from_angle_y(Deg(rotation.y))
        * Matrix4::from_translation(-position)
}

pub fn camera_view_matrix(camera: &Camera) -> Matrix4<f32> {
    view_matrix(camera.position, camera.rotation)
}

pub fn model_view_matrix(object: &GameObject, view: &Matrix4<f32>) -> Matrix4<f32> {
    view * object.to_matrix()
}

/// View matrix with the translation removed, for geometry that follows the
/// camera such as the skybox.
pub fn without_translation(view: &Matrix4<f32>) -> Matrix4<f32> {
    let mut view = *view;
    view.w.x = 0.0;
    view.w.y = 0.0;
    view.w.z = 0.0;
    view
}
