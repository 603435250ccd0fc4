use voxel_ngin::{
    Vector3,
    data_structures::{
        game_object::{GameObject, InstanceRaw},
        model::{ModelVertex, Vertex},
        scene::ModelId,
    },
    pipelines::light::LightsUniform,
};

#[test]
fn should_describe_interleaved_vertex_layout() {
    let layout = ModelVertex::desc();
    assert_eq!(layout.array_stride, 8 * 4);
    assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
    let offsets: Vec<u64> = layout.attributes.iter().map(|a| a.offset).collect();
    assert_eq!(offsets, vec![0, 12, 20]);
}

#[test]
fn should_describe_instance_layout_after_vertex_slots() {
    let layout = InstanceRaw::desc();
    assert_eq!(layout.array_stride as usize, std::mem::size_of::<InstanceRaw>());
    assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
    assert!(layout.attributes.iter().all(|a| a.shader_location >= 5));
}

fn locations<V: Vertex>() -> Vec<u32> {
    V::desc().attributes.iter().map(|a| a.shader_location).collect()
}

#[test]
fn should_not_overlap_vertex_and_instance_locations() {
    let vertex = locations::<ModelVertex>();
    let instance = locations::<InstanceRaw>();

    assert_eq!(vertex, vec![0, 1, 2]);
    assert_eq!(instance, (5..=12).collect::<Vec<_>>());
}

#[test]
fn should_pack_game_object_for_instancing() {
    let object = GameObject::new(ModelId(0), Vector3::new(1.0, 2.0, 3.0)).with_scale(0.5);
    let raw = object.to_raw();

    assert_eq!(raw.model[3], [1.0, 2.0, 3.0, 1.0]);
    assert_eq!(raw.model[0][0], 0.5);
    assert_eq!(raw.handedness, 1.0);
    assert_eq!(bytemuck::bytes_of(&raw).len(), std::mem::size_of::<InstanceRaw>());
}

#[test]
fn should_keep_lights_uniform_16_byte_aligned() {
    assert_eq!(std::mem::size_of::<LightsUniform>() % 16, 0);
}
