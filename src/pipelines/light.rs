use cgmath::{Matrix4, Vector3, Vector4};
use wgpu::util::DeviceExt;

use crate::{
    data_structures::light::{MAX_POINT_LIGHTS, MAX_SPOT_LIGHTS, SceneLight},
    pipelines::uniforms::{UniformPath, UniformSink},
};

/// GPU-side resources of the scene lights: one uniform buffer and its bind group.
pub struct LightResources {
    pub uniform: LightsUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl LightResources {
    pub fn new(device: &wgpu::Device) -> Self {
        let uniform = LightsUniform::default();
        let buffer = mk_buffer(device, &uniform);
        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = mk_bind_group(device, &bind_group_layout, &buffer);
        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    /// Repack the lights for the current view and queue the buffer upload.
    pub fn write(&mut self, queue: &wgpu::Queue, lights: &SceneLight, view: &Matrix4<f32>, specular_power: f32) {
        self.uniform = LightsUniform::from_scene(lights, view, specular_power);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightRaw {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: [f32; 3],
    pub att_constant: f32,
    pub att_linear: f32,
    pub att_exponent: f32,
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    _padding: [f32; 2],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightRaw {
    pub pl: PointLightRaw,
    pub cone_direction: [f32; 3],
    pub cut_off: f32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLightRaw {
    pub color: [f32; 3],
    pub intensity: f32,
    pub direction: [f32; 3],
    _padding: f32,
}

/// All scene lights packed as one uniform block.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub ambient: [f32; 3],
    pub specular_power: f32,
    pub directional: DirectionalLightRaw,
    pub point_lights: [PointLightRaw; MAX_POINT_LIGHTS],
    pub spot_lights: [SpotLightRaw; MAX_SPOT_LIGHTS],
    pub num_point_lights: u32,
    pub num_spot_lights: u32,
    _padding: [u32; 2],
}

impl LightsUniform {
    pub fn from_scene(lights: &SceneLight, view: &Matrix4<f32>, specular_power: f32) -> Self {
        let mut uniform = Self::default();
        lights.upload_to(&mut uniform, view, specular_power);
        uniform
    }

    fn point_field<'a>(light: &'a mut PointLightRaw, field: &str) -> Option<Field<'a>> {
        Some(match field {
            "color" => Field::Vec(&mut light.color),
            "position" => Field::Vec(&mut light.position),
            "intensity" => Field::Scalar(&mut light.intensity),
            "att.constant" => Field::Scalar(&mut light.att_constant),
            "att.linear" => Field::Scalar(&mut light.att_linear),
            "att.exponent" => Field::Scalar(&mut light.att_exponent),
            _ => return None,
        })
    }

    fn slot(&mut self, name: &str) -> Option<Field<'_>> {
        let path = UniformPath::parse(name)?;
        match (path.root, path.index) {
            ("ambientLight", None) => Some(Field::Vec(&mut self.ambient)),
            ("specularPower", None) => Some(Field::Scalar(&mut self.specular_power)),
            ("directionalLight", None) => match path.field {
                "colour" => Some(Field::Vec(&mut self.directional.color)),
                "direction" => Some(Field::Vec(&mut self.directional.direction)),
                "intensity" => Some(Field::Scalar(&mut self.directional.intensity)),
                _ => None,
            },
            ("pointLights", Some(i)) if i < MAX_POINT_LIGHTS => {
                self.num_point_lights = self.num_point_lights.max(i as u32 + 1);
                Self::point_field(&mut self.point_lights[i], path.field)
            }
            ("spotLights", Some(i)) if i < MAX_SPOT_LIGHTS => {
                self.num_spot_lights = self.num_spot_lights.max(i as u32 + 1);
                let spot = &mut self.spot_lights[i];
                match path.field {
                    "conedir" => Some(Field::Vec(&mut spot.cone_direction)),
                    "cutoff" => Some(Field::Scalar(&mut spot.cut_off)),
                    field => Self::point_field(&mut spot.pl, field.strip_prefix("pl.")?),
                }
            }
            _ => None,
        }
    }
}

enum Field<'a> {
    Scalar(&'a mut f32),
    Vec(&'a mut [f32; 3]),
}

impl UniformSink for LightsUniform {
    fn set_f32(&mut self, name: &str, value: f32) {
        match self.slot(name) {
            Some(Field::Scalar(slot)) => *slot = value,
            _ => log::debug!("Lights uniform has no scalar named {name}."),
        }
    }

    fn set_i32(&mut self, name: &str, _: i32) {
        log::debug!("Lights uniform has no integer named {name}.");
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        match self.slot(name) {
            Some(Field::Vec(slot)) => *slot = value.into(),
            _ => log::debug!("Lights uniform has no vec3 named {name}."),
        }
    }

    fn set_vec4(&mut self, name: &str, _: Vector4<f32>) {
        log::debug!("Lights uniform has no vec4 named {name}.");
    }
}

pub fn mk_buffer(device: &wgpu::Device, uniform: &LightsUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Lights Uniform Buffer"),
        contents: bytemuck::cast_slice(&[*uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("lights_bind_group_layout"),
    })
}

pub fn mk_bind_group(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    light_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout: bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: light_buffer.as_entire_binding(),
        }],
        label: Some("lights_bind_group"),
    })
}
