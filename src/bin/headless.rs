//! Builds the demo world without a window and runs a few seconds of
//! simulated input through the game loop.
//!
//! Usage: `voxel-headless [ASSETS_DIR]`

use std::path::PathBuf;

use anyhow::Context as _;
use instant::Duration;
use voxel_ngin::{
    KeyCode,
    context::{Context, Settings},
    frustum::Frustum,
    game::{self, Game},
    hud::Hud,
    pipelines::light::LightsUniform,
};

const FRAME_TIME: Duration = Duration::from_millis(16);
const FRAMES: u32 = 180;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut settings = Settings::default();
    if let Some(dir) = std::env::args().nth(1) {
        settings.assets_dir = PathBuf::from(dir);
    }

    let mut scene = game::build_scene(&settings)
        .with_context(|| format!("Could not build the scene from {}", settings.assets_dir.display()))?;
    let mut ctx = Context::new(settings);
    let mut game = Game::new();

    ctx.input.set_key(KeyCode::KeyW, true);
    for frame in 0..FRAMES {
        if frame == FRAMES / 2 {
            ctx.input.set_key(KeyCode::KeyW, false);
            ctx.input.set_key(KeyCode::KeyD, true);
        }
        game.advance(&mut ctx, FRAME_TIME);
    }

    let view = ctx.view_matrix();
    scene.cull(&Frustum::new(&ctx.projection_matrix(), &view));
    let visible: usize = scene.visible_batches().values().map(Vec::len).sum();
    let lights = LightsUniform::from_scene(&scene.light, &view, ctx.settings.specular_power);

    for line in Hud::frame(&ctx).lines {
        println!("{}", line.text);
    }
    let p = ctx.camera.position;
    println!("Camera at ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
    println!(
        "{} models, {} objects, {} visible, {} point lights, {} spot lights",
        scene.models().len(),
        scene.objects().len(),
        visible,
        lights.num_point_lights,
        lights.num_spot_lights,
    );
    Ok(())
}
