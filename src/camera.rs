//! First-person camera.

use cgmath::{Vector2, Vector3};
use winit::dpi::PhysicalPosition;

/// Camera position plus Euler rotation in degrees (`x` pitch, `y` yaw).
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
    previous_cursor: PhysicalPosition<f64>,
}

impl Camera {
    pub fn new(position: Vector3<f32>) -> Self {
        Self {
            position,
            rotation: Vector3::new(0.0, 0.0, 0.0),
            previous_cursor: PhysicalPosition::new(-1.0, -1.0),
        }
    }

    /// Put the camera back at `spawn`, looking straight ahead.
    pub fn reset_position(&mut self, spawn: Vector3<f32>) {
        self.position = spawn;
        self.rotation = Vector3::new(0.0, 0.0, 0.0);
    }

    /// Move relative to the current yaw: `offset_z` is forward/backward,
    /// `offset_x` is strafing, `offset_y` is straight up/down.
    pub fn move_position(&mut self, offset_x: f32, offset_y: f32, offset_z: f32) {
        let yaw = self.rotation.y.to_radians();
        if offset_z != 0.0 {
            self.position.x += yaw.sin() * -1.0 * offset_z;
            self.position.z += yaw.cos() * offset_z;
        }
        if offset_x != 0.0 {
            let strafe = (self.rotation.y - 90.0).to_radians();
            self.position.x += strafe.sin() * -1.0 * offset_x;
            self.position.z += strafe.cos() * offset_x;
        }
        self.position.y += offset_y;
    }

    pub fn move_rotation(&mut self, offset_x: f32, offset_y: f32, offset_z: f32) {
        self.rotation += Vector3::new(offset_x, offset_y, offset_z);
    }

    /// Cursor displacement since the previous call, as a rotation delta
    /// `(pitch, yaw)`.
    ///
    /// Returns zero while the cursor is outside the window or when there is
    /// no valid previous sample (both previous coordinates must be positive).
    pub fn mouse_displacement(&mut self, cursor: PhysicalPosition<f64>, in_window: bool) -> Vector2<f32> {
        let mut displacement = Vector2::new(0.0, 0.0);
        if self.previous_cursor.x > 0.0 && self.previous_cursor.y > 0.0 && in_window {
            displacement.x = (cursor.y - self.previous_cursor.y) as f32;
            displacement.y = (cursor.x - self.previous_cursor.x) as f32;
        }
        self.previous_cursor = cursor;
        displacement
    }
}
