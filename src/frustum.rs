//! View-frustum culling of game objects by bounding sphere.

use cgmath::{InnerSpace, Matrix4, Vector3, Vector4};

use crate::data_structures::game_object::GameObject;

/// The six planes (left, right, bottom, top, near, far) of a view frustum.
///
/// Each plane is `(nx, ny, nz, d)` with a unit normal pointing inwards, so
/// `n . p + d` is the signed distance of `p` from the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    planes: [Vector4<f32>; 6],
}

impl Frustum {
    /// Extract the planes of `projection * view` (OpenGL clip space).
    pub fn new(projection: &Matrix4<f32>, view: &Matrix4<f32>) -> Self {
        let m = projection * view;
        // cgmath is column-major, so row i is (x[i], y[i], z[i], w[i]).
        let row = |i: usize| Vector4::new(m.x[i], m.y[i], m.z[i], m.w[i]);
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));
        let planes = [r3 + r0, r3 - r0, r3 + r1, r3 - r1, r3 + r2, r3 - r2].map(|p| {
            let len = p.truncate().magnitude();
            if len > 0.0 { p / len } else { p }
        });
        Self { planes }
    }

    pub fn planes(&self) -> &[Vector4<f32>; 6] {
        &self.planes
    }

    /// A sphere is outside as soon as it lies entirely behind one plane.
    pub fn contains_sphere(&self, centre: Vector3<f32>, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(centre) + plane.w > -radius)
    }

    /// Refresh `inside_frustum` of every object, using `scale * mesh_radius`
    /// as the bounding sphere radius.
    pub fn filter<'a>(&self, objects: impl IntoIterator<Item = &'a mut GameObject>, mesh_radius: impl Fn(&GameObject) -> f32) {
        for object in objects {
            let radius = object.scale * mesh_radius(object);
            object.inside_frustum = self.contains_sphere(object.position, radius);
        }
    }
}
