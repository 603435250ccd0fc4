//! Scene lights.
//!
//! Lights form a closed set ([`Light`]) sharing one capability: writing
//! themselves into a [`UniformSink`] under a given uniform name. Positions and
//! directions are kept in world space; [`Light::to_view_space`] converts a
//! copy right before upload.

use cgmath::{Matrix4, Vector3, Vector4};

use crate::pipelines::uniforms::UniformSink;

pub const MAX_POINT_LIGHTS: usize = 4;
pub const MAX_SPOT_LIGHTS: usize = 4;

/// Distance falloff `1 / (constant + linear * d + exponent * d^2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub exponent: f32,
}

impl Attenuation {
    pub fn new(constant: f32, linear: f32, exponent: f32) -> Self {
        Self {
            constant,
            linear,
            exponent,
        }
    }
}

impl Default for Attenuation {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Vector3<f32>,
    pub position: Vector3<f32>,
    pub intensity: f32,
    pub attenuation: Attenuation,
}

impl PointLight {
    pub fn new(color: Vector3<f32>, position: Vector3<f32>, intensity: f32) -> Self {
        Self {
            color,
            position,
            intensity,
            attenuation: Attenuation::default(),
        }
    }

    pub fn with_attenuation(mut self, attenuation: Attenuation) -> Self {
        self.attenuation = attenuation;
        self
    }
}

/// A point light restricted to a cone.
///
/// `cut_off` is stored as the cosine of the cone angle, which is what the
/// fragment shader compares against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub point_light: PointLight,
    pub cone_direction: Vector3<f32>,
    pub cut_off: f32,
}

impl SpotLight {
    pub fn new(point_light: PointLight, cone_direction: Vector3<f32>, cut_off_angle: cgmath::Deg<f32>) -> Self {
        Self {
            point_light,
            cone_direction,
            cut_off: cgmath::Rad::from(cut_off_angle).0.cos(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Vector3<f32>,
    pub direction: Vector3<f32>,
    pub intensity: f32,
}

impl DirectionalLight {
    pub fn new(color: Vector3<f32>, direction: Vector3<f32>, intensity: f32) -> Self {
        Self {
            color,
            direction,
            intensity,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Point(PointLight),
    Spot(SpotLight),
    Directional(DirectionalLight),
}

impl Light {
    /// Write every field of this light under `name` (e.g. `pointLights[0]`).
    pub fn upload_to(&self, sink: &mut impl UniformSink, name: &str) {
        match self {
            Light::Point(light) => upload_point(sink, name, light),
            Light::Spot(light) => {
                upload_point(sink, &format!("{name}.pl"), &light.point_light);
                sink.set_vec3(&format!("{name}.conedir"), light.cone_direction);
                sink.set_f32(&format!("{name}.cutoff"), light.cut_off);
            }
            Light::Directional(light) => {
                sink.set_vec3(&format!("{name}.colour"), light.color);
                sink.set_vec3(&format!("{name}.direction"), light.direction);
                sink.set_f32(&format!("{name}.intensity"), light.intensity);
            }
        }
    }

    /// Copy of this light with positions (w = 1) and directions (w = 0)
    /// transformed by `view`.
    pub fn to_view_space(&self, view: &Matrix4<f32>) -> Light {
        let point = |p: Vector3<f32>| (view * p.extend(1.0)).truncate();
        let direction = |d: Vector3<f32>| (view * Vector4::new(d.x, d.y, d.z, 0.0)).truncate();
        match *self {
            Light::Point(mut light) => {
                light.position = point(light.position);
                Light::Point(light)
            }
            Light::Spot(mut light) => {
                light.point_light.position = point(light.point_light.position);
                light.cone_direction = direction(light.cone_direction);
                Light::Spot(light)
            }
            Light::Directional(mut light) => {
                light.direction = direction(light.direction);
                Light::Directional(light)
            }
        }
    }
}

fn upload_point(sink: &mut impl UniformSink, name: &str, light: &PointLight) {
    sink.set_vec3(&format!("{name}.color"), light.color);
    sink.set_vec3(&format!("{name}.position"), light.position);
    sink.set_f32(&format!("{name}.intensity"), light.intensity);
    sink.set_f32(&format!("{name}.att.constant"), light.attenuation.constant);
    sink.set_f32(&format!("{name}.att.linear"), light.attenuation.linear);
    sink.set_f32(&format!("{name}.att.exponent"), light.attenuation.exponent);
}

/// All lights of a scene plus the ambient term.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneLight {
    pub ambient: Vector3<f32>,
    pub lights: Vec<Light>,
}

impl SceneLight {
    pub fn new(ambient: Vector3<f32>) -> Self {
        Self {
            ambient,
            lights: Vec::new(),
        }
    }

    pub fn add(&mut self, light: Light) -> &mut Self {
        self.lights.push(light);
        self
    }

    pub fn point_lights(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter().filter_map(|l| match l {
            Light::Point(p) => Some(p),
            _ => None,
        })
    }

    pub fn spot_lights(&self) -> impl Iterator<Item = &SpotLight> {
        self.lights.iter().filter_map(|l| match l {
            Light::Spot(s) => Some(s),
            _ => None,
        })
    }

    /// The last directional light wins; the shader only has one slot.
    pub fn directional_light(&self) -> Option<&DirectionalLight> {
        self.lights.iter().rev().find_map(|l| match l {
            Light::Directional(d) => Some(d),
            _ => None,
        })
    }

    /// Upload the ambient term, the specular power and every light in view
    /// space.
    ///
    /// Point and spot lights take consecutive slots of `pointLights[i]` and
    /// `spotLights[i]`. Lights beyond [`MAX_POINT_LIGHTS`] / [`MAX_SPOT_LIGHTS`]
    /// are skipped.
    pub fn upload_to(&self, sink: &mut impl UniformSink, view: &Matrix4<f32>, specular_power: f32) {
        sink.set_vec3("ambientLight", self.ambient);
        sink.set_f32("specularPower", specular_power);

        let mut points = 0;
        let mut spots = 0;
        let mut directional = None;
        for light in &self.lights {
            let name = match light {
                Light::Point(_) if points < MAX_POINT_LIGHTS => {
                    points += 1;
                    format!("pointLights[{}]", points - 1)
                }
                Light::Spot(_) if spots < MAX_SPOT_LIGHTS => {
                    spots += 1;
                    format!("spotLights[{}]", spots - 1)
                }
                Light::Directional(_) => {
                    directional = Some(light);
                    continue;
                }
                _ => {
                    log::warn!("Light {:?} skipped, the shader has no free slot for it.", light);
                    continue;
                }
            };
            light.to_view_space(view).upload_to(sink, &name);
        }
        if let Some(light) = directional {
            light.to_view_space(view).upload_to(sink, "directionalLight");
        }
    }
}

impl Default for SceneLight {
    fn default() -> Self {
        Self::new(Vector3::new(0.0, 0.0, 0.0))
    }
}
