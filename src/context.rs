use std::path::PathBuf;

use cgmath::{Matrix4, Vector3};

use crate::{camera::Camera, input::InputState, timer::Timer, transformations};

/// Tunables of the demo. Everything here may be changed at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub tick_rate: u32,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub mouse_sensitivity: f32,
    pub camera_speed: f32,
    pub specular_power: f32,
    pub spawn: Vector3<f32>,
    pub assets_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            tick_rate: 60,
            fov: 1.39626,
            z_near: 0.01,
            z_far: 1000.0,
            mouse_sensitivity: 0.25,
            camera_speed: 0.025,
            specular_power: 10.0,
            spawn: Vector3::new(8.0, 9.0, 8.0),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

/// Per-session state shared by the game loop, the HUD and the renderer.
#[derive(Debug)]
pub struct Context {
    pub settings: Settings,
    pub camera: Camera,
    pub input: InputState,
    pub timer: Timer,
    pub cursor_locked: bool,
    pub should_close: bool,
}

impl Context {
    pub fn new(settings: Settings) -> Self {
        Self {
            camera: Camera::new(settings.spawn),
            settings,
            input: InputState::new(),
            timer: Timer::new(),
            cursor_locked: true,
            should_close: false,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.settings.width = width;
            self.settings.height = height;
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.settings.width as f32 / self.settings.height as f32
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let s = &self.settings;
        transformations::projection_matrix(s.fov, s.width as f32, s.height as f32, s.z_near, s.z_far)
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        transformations::camera_view_matrix(&self.camera)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
