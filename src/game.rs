//! Fixed-timestep driver and the demo world.

use cgmath::{Deg, Vector3};
use instant::Duration;
use winit::keyboard::KeyCode;

use crate::{
    context::{Context, Settings},
    data_structures::{
        chunk::Chunk,
        game_object::GameObject,
        light::{Attenuation, DirectionalLight, Light, PointLight, SceneLight, SpotLight},
        model::{Material, Model},
        scene::Scene,
        terrain::Terrain,
    },
    resources::{self, height_map::HeightMapOptions, obj::ObjIndexing},
};

/// Step applied to mouse sensitivity and camera speed per tick.
pub const SETTING_STEP: f32 = 0.025;

/// Runs input ticks at `Settings::tick_rate` regardless of the frame rate.
#[derive(Debug, Default)]
pub struct Game {
    accumulator: Duration,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one frame using the wall clock.
    pub fn frame(&mut self, ctx: &mut Context) {
        let dt = ctx.timer.delta();
        self.step(ctx, dt);
    }

    /// Run one frame that took `dt`.
    pub fn advance(&mut self, ctx: &mut Context, dt: Duration) {
        ctx.timer.advance(dt);
        self.step(ctx, dt);
    }

    fn step(&mut self, ctx: &mut Context, dt: Duration) {
        let interval = tick_interval(&ctx.settings);
        self.accumulator += dt;
        while self.accumulator >= interval {
            Self::tick(ctx);
            ctx.timer.count_tick();
            self.accumulator -= interval;
        }
        ctx.timer.count_frame();
        ctx.timer.update();
    }

    /// Apply the current input to the camera and settings.
    pub fn tick(ctx: &mut Context) {
        let Context {
            settings,
            camera,
            input,
            cursor_locked,
            should_close,
            ..
        } = ctx;

        let displacement = camera.mouse_displacement(input.cursor, input.cursor_in_window);
        if *cursor_locked {
            camera.move_rotation(
                displacement.x * settings.mouse_sensitivity,
                displacement.y * settings.mouse_sensitivity,
                0.0,
            );
        }

        if input.just_pressed(KeyCode::Tab) {
            *cursor_locked = !*cursor_locked;
        }

        if input.is_pressed(KeyCode::Escape) {
            *should_close = true;
        }

        if input.is_pressed(KeyCode::BracketLeft) && settings.mouse_sensitivity >= SETTING_STEP {
            settings.mouse_sensitivity -= SETTING_STEP;
        } else if input.is_pressed(KeyCode::BracketRight) {
            settings.mouse_sensitivity += SETTING_STEP;
        }

        if input.is_pressed(KeyCode::Semicolon) && settings.camera_speed >= SETTING_STEP {
            settings.camera_speed -= SETTING_STEP;
        } else if input.is_pressed(KeyCode::Quote) {
            settings.camera_speed += SETTING_STEP;
        }

        let axis = |negative: KeyCode, positive: KeyCode| {
            if input.is_pressed(negative) {
                -1.0
            } else if input.is_pressed(positive) {
                1.0
            } else {
                0.0
            }
        };
        let movement = Vector3::new(
            axis(KeyCode::KeyA, KeyCode::KeyD),
            axis(KeyCode::KeyZ, KeyCode::KeyX),
            axis(KeyCode::KeyW, KeyCode::KeyS),
        ) * settings.camera_speed;
        camera.move_position(movement.x, movement.y, movement.z);

        if input.is_pressed(KeyCode::KeyR) {
            camera.reset_position(settings.spawn);
        }

        input.end_tick();
    }
}

pub fn tick_interval(settings: &Settings) -> Duration {
    Duration::from_secs(1) / settings.tick_rate.max(1)
}

pub const CUBE_MODEL: &str = "models/cube.obj";
pub const SKYBOX_MODEL: &str = "models/skybox.obj";
pub const SKYBOX_TEXTURE: &str = "textures/skybox.png";
pub const GRASS_TEXTURE: &str = "textures/grass.png";
pub const STONE_TEXTURE: &str = "textures/stone.png";
pub const TERRAIN_HEIGHT_MAP: &str = "textures/noiseTexture.png";
pub const TERRAIN_TEXTURE: &str = "textures/terrain.png";

pub const SKYBOX_SCALE: f32 = 500.0;
pub const TERRAIN_BLOCKS_PER_ROW: u32 = 3;
pub const TERRAIN_SCALE: f32 = 50.0;
pub const CHUNK_OFFSETS: [(i32, i32); 4] = [(0, 0), (1, 0), (1, 1), (0, 1)];

/// Assemble the demo world from `settings.assets_dir`.
pub fn build_scene(settings: &Settings) -> anyhow::Result<Scene> {
    let assets = settings.assets_dir.as_path();
    let mut scene = Scene::new();

    let skybox_mesh = resources::load_mesh_obj(assets, SKYBOX_MODEL, ObjIndexing::default())?;
    let skybox = scene.add_model(Model::new("skybox", skybox_mesh, Material::textured(SKYBOX_TEXTURE, 0.0)));
    scene.skybox = Some(GameObject::new(skybox, Vector3::new(0.0, 0.0, 0.0)).with_scale(SKYBOX_SCALE));

    scene.light = default_lights();

    let grass_mesh = resources::load_mesh_obj(assets, CUBE_MODEL, ObjIndexing::default())?;
    let stone_mesh = grass_mesh.clone();
    let grass = scene.add_model(Model::new("grass", grass_mesh, Material::textured(GRASS_TEXTURE, 0.0)));
    let stone = scene.add_model(Model::new("stone", stone_mesh, Material::textured(STONE_TEXTURE, 1.0)));

    let height_map = resources::load_height_map(
        assets,
        TERRAIN_HEIGHT_MAP,
        TERRAIN_TEXTURE,
        HeightMapOptions::new(-0.01, 0.01, 40),
    )?;
    let terrain_model = scene.add_model(Model::new("terrain", height_map.mesh, height_map.material));
    let terrain = Terrain::new(terrain_model, TERRAIN_BLOCKS_PER_ROW, TERRAIN_SCALE);
    scene.add_objects(terrain.blocks);

    for (x, z) in CHUNK_OFFSETS {
        scene.add_objects(Chunk::new(grass, stone, x, z).blocks);
    }

    log::info!("World creation complete! Objects count: {}", scene.objects().len());
    Ok(scene)
}

/// One white point light over the spawn point, two spot lights, white ambient
/// light and an unlit directional light.
pub fn default_lights() -> SceneLight {
    let mut light = SceneLight::new(Vector3::new(1.0, 1.0, 1.0));

    let white = Vector3::new(1.0, 1.0, 1.0);
    light.add(Light::Point(
        PointLight::new(white, Vector3::new(8.0, 9.0, 8.0), 1.0).with_attenuation(Attenuation::new(0.0, 0.0, 1.0)),
    ));

    let spot = SpotLight::new(
        PointLight::new(white, Vector3::new(0.0, 0.0, 10.0), 1.0).with_attenuation(Attenuation::new(0.0, 0.0, 0.02)),
        Vector3::new(0.0, 0.0, -1.0),
        Deg(140.0),
    );
    light.add(Light::Spot(spot));
    light.add(Light::Spot(spot));

    light.add(Light::Directional(DirectionalLight::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
        1.0,
    )));
    light
}
