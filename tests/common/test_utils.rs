use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use image::{ImageFormat, Rgba, RgbaImage};
use voxel_ngin::pipelines::uniforms::UniformSink;
use voxel_ngin::{Vector3, Vector4};

pub const TRIANGLE_OBJ: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0.25 0.75
vt 1 1
vt 0 0
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
";

pub const CUBE_OBJ: &str = "\
v -1 -1 -1
v 1 -1 -1
v 1 1 -1
v -1 1 -1
v -1 -1 1
v 1 -1 1
v 1 1 1
v -1 1 1
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 -1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
f 1/1/1 3/3/1 4/4/1
f 5/1/2 7/3/2 6/2/2
f 5/1/2 8/4/2 7/3/2
";

/// A fresh, empty directory under the system temp dir, unique per test name.
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("voxel-ngin-{}-{}", name, std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).expect("failed to clear temp dir");
    }
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

pub fn write_file(dir: &Path, name: &str, contents: &[u8]) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create fixture dir");
    }
    std::fs::write(path, contents).expect("failed to write fixture");
}

pub fn solid_image(width: u32, height: u32, pixel: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(pixel))
}

pub fn png_bytes(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("failed to encode png");
    bytes.into_inner()
}

/// Lay out an asset directory the demo world can be built from.
pub fn write_demo_assets(dir: &Path) {
    write_file(dir, "models/cube.obj", CUBE_OBJ.as_bytes());
    write_file(dir, "models/skybox.obj", CUBE_OBJ.as_bytes());
    write_file(
        dir,
        "textures/noiseTexture.png",
        &png_bytes(&solid_image(4, 4, [0, 0, 0, 255])),
    );
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}

/// Records every uniform write in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub writes: Vec<(String, Uniform)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Uniform {
    F32(f32),
    I32(i32),
    Vec3(Vector3<f32>),
    Vec4(Vector4<f32>),
}

impl RecordingSink {
    pub fn names(&self) -> Vec<&str> {
        self.writes.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Uniform> {
        self.writes.iter().rev().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

impl UniformSink for RecordingSink {
    fn set_f32(&mut self, name: &str, value: f32) {
        self.writes.push((name.to_string(), Uniform::F32(value)));
    }

    fn set_i32(&mut self, name: &str, value: i32) {
        self.writes.push((name.to_string(), Uniform::I32(value)));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.writes.push((name.to_string(), Uniform::Vec3(value)));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.writes.push((name.to_string(), Uniform::Vec4(value)));
    }
}
