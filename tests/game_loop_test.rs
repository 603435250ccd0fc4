use instant::Duration;
use voxel_ngin::{
    KeyCode, PhysicalPosition, Vector3, WindowEvent,
    context::{Context, Settings},
    game::{Game, tick_interval},
    hud::{self, Hud},
    timer::Timer,
};
use winit::event::DeviceId;

use crate::common::test_utils::assert_close;

mod common;

#[allow(unused_unsafe)]
fn device_id() -> DeviceId {
    unsafe { DeviceId::dummy() }
}

fn tick_with(ctx: &mut Context, keys: &[KeyCode]) {
    for key in keys {
        ctx.input.set_key(*key, true);
    }
    Game::tick(ctx);
    for key in keys {
        ctx.input.set_key(*key, false);
    }
}

#[test]
fn should_count_frames_and_ticks_per_second() {
    let mut timer = Timer::new();
    for _ in 0..3 {
        timer.count_frame();
    }
    timer.count_tick();
    timer.advance(Duration::from_millis(500));
    timer.update();
    // before the first full second the running counts are reported
    assert_eq!(timer.fps(), 3);
    assert_eq!(timer.tps(), 1);

    timer.count_frame();
    timer.advance(Duration::from_millis(600));
    timer.update();
    assert_eq!(timer.fps(), 4);
    assert_eq!(timer.tps(), 1);

    // the next second reports its own totals once it completes
    for _ in 0..7 {
        timer.count_frame();
    }
    timer.advance(Duration::from_millis(1000));
    timer.update();
    assert_eq!(timer.fps(), 7);
}

#[test]
fn should_run_fixed_number_of_ticks() {
    let mut ctx = Context::default();
    let mut game = Game::new();

    assert_eq!(tick_interval(&ctx.settings), Duration::from_nanos(16_666_666));

    game.advance(&mut ctx, Duration::from_secs(1));
    assert_eq!(ctx.timer.tps(), 60);
    assert_eq!(ctx.timer.fps(), 1);

    game.advance(&mut ctx, Duration::from_millis(10));
    assert_eq!(ctx.timer.tps(), 60);
    assert_eq!(ctx.timer.fps(), 2);
}

#[test]
fn should_not_tick_before_interval_elapsed() {
    let mut ctx = Context::default();
    let mut game = Game::new();
    ctx.input.set_key(KeyCode::KeyW, true);

    game.advance(&mut ctx, Duration::from_millis(10));
    assert_eq!(ctx.camera.position, Vector3::new(8.0, 9.0, 8.0));

    game.advance(&mut ctx, Duration::from_millis(10));
    assert_close(ctx.camera.position.z, 8.0 - 0.025);
}

#[test]
fn should_move_camera_relative_to_yaw() {
    let mut ctx = Context::default();

    tick_with(&mut ctx, &[KeyCode::KeyW]);
    assert_close(ctx.camera.position.x, 8.0);
    assert_close(ctx.camera.position.z, 8.0 - 0.025);

    tick_with(&mut ctx, &[KeyCode::KeyD, KeyCode::KeyX]);
    assert_close(ctx.camera.position.x, 8.025);
    assert_close(ctx.camera.position.y, 9.025);

    ctx.camera.rotation.y = 90.0;
    let before = ctx.camera.position;
    tick_with(&mut ctx, &[KeyCode::KeyW]);
    assert_close(ctx.camera.position.x, before.x + 0.025);
    assert_close(ctx.camera.position.z, before.z);
}

#[test]
fn should_reset_camera_to_spawn() {
    let mut ctx = Context::new(Settings {
        spawn: Vector3::new(1.0, 2.0, 3.0),
        ..Default::default()
    });
    ctx.camera.position = Vector3::new(50.0, 50.0, 50.0);
    ctx.camera.rotation = Vector3::new(10.0, 20.0, 0.0);

    tick_with(&mut ctx, &[KeyCode::KeyR]);
    assert_eq!(ctx.camera.position, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(ctx.camera.rotation, Vector3::new(0.0, 0.0, 0.0));
}

#[test]
fn should_not_lower_settings_below_step() {
    let mut ctx = Context::default();
    ctx.settings.mouse_sensitivity = 0.03;
    ctx.settings.camera_speed = 0.03;

    tick_with(&mut ctx, &[KeyCode::BracketLeft, KeyCode::Semicolon]);
    assert_close(ctx.settings.mouse_sensitivity, 0.005);
    assert_close(ctx.settings.camera_speed, 0.005);

    tick_with(&mut ctx, &[KeyCode::BracketLeft, KeyCode::Semicolon]);
    assert_close(ctx.settings.mouse_sensitivity, 0.005);
    assert_close(ctx.settings.camera_speed, 0.005);

    tick_with(&mut ctx, &[KeyCode::BracketRight, KeyCode::Quote]);
    assert_close(ctx.settings.mouse_sensitivity, 0.03);
    assert_close(ctx.settings.camera_speed, 0.03);
}

#[test]
fn should_toggle_cursor_lock_once_per_press() {
    let mut ctx = Context::default();
    assert!(ctx.cursor_locked);

    ctx.input.set_key(KeyCode::Tab, true);
    Game::tick(&mut ctx);
    assert!(!ctx.cursor_locked);
    // still held
    Game::tick(&mut ctx);
    assert!(!ctx.cursor_locked);

    ctx.input.set_key(KeyCode::Tab, false);
    Game::tick(&mut ctx);
    ctx.input.set_key(KeyCode::Tab, true);
    Game::tick(&mut ctx);
    assert!(ctx.cursor_locked);
}

#[test]
fn should_request_close_on_escape() {
    let mut ctx = Context::default();
    Game::tick(&mut ctx);
    assert!(!ctx.should_close);
    tick_with(&mut ctx, &[KeyCode::Escape]);
    assert!(ctx.should_close);
}

#[test]
fn should_rotate_camera_from_mouse_movement() {
    let mut ctx = Context::default();
    ctx.input.cursor_in_window = true;
    ctx.input.cursor = PhysicalPosition::new(100.0, 100.0);

    // no previous sample yet
    Game::tick(&mut ctx);
    assert_eq!(ctx.camera.rotation, Vector3::new(0.0, 0.0, 0.0));

    ctx.input.cursor = PhysicalPosition::new(110.0, 120.0);
    Game::tick(&mut ctx);
    assert_close(ctx.camera.rotation.x, 20.0 * 0.25);
    assert_close(ctx.camera.rotation.y, 10.0 * 0.25);

    ctx.cursor_locked = false;
    ctx.input.cursor = PhysicalPosition::new(200.0, 200.0);
    Game::tick(&mut ctx);
    assert_close(ctx.camera.rotation.x, 5.0);

    ctx.cursor_locked = true;
    ctx.input.cursor_in_window = false;
    ctx.input.cursor = PhysicalPosition::new(300.0, 300.0);
    Game::tick(&mut ctx);
    assert_close(ctx.camera.rotation.x, 5.0);
}

#[test]
fn should_track_cursor_from_window_events() {
    let mut ctx = Context::default();

    assert!(ctx.input.handle_window_event(&WindowEvent::CursorEntered { device_id: device_id() }));
    assert!(ctx.input.cursor_in_window);

    ctx.input.handle_window_event(&WindowEvent::CursorMoved {
        device_id: device_id(),
        position: PhysicalPosition::new(12.0, 34.0),
    });
    assert_eq!(ctx.input.cursor, PhysicalPosition::new(12.0, 34.0));

    ctx.input.handle_window_event(&WindowEvent::CursorLeft { device_id: device_id() });
    assert!(!ctx.input.cursor_in_window);

    assert!(!ctx.input.handle_window_event(&WindowEvent::Focused(true)));
}

#[test]
fn should_describe_hud() {
    let mut ctx = Context::default();
    let frame = Hud::frame(&ctx);

    assert_eq!(frame.crosshair.centre, [640.0, 360.0]);
    assert_eq!(frame.crosshair.radius, 5.0);
    assert_eq!(frame.crosshair.stroke_width, 0.75);
    assert_eq!(frame.crosshair.colour, hud::rgba(0xc1, 0xe3, 0xf9, 200));
    assert_close(frame.crosshair.colour[3], 200.0 / 255.0);

    let texts: Vec<&str> = frame.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["FPS: 0   TPS: 0", "MOUSE SENSITIVITY: 0.25 [ and ]", "CAMERA SPEED: 0.03 ; and '"]
    );
    assert_eq!(frame.lines[2].position, [1.0, 40.0]);
    assert_eq!(frame.lines[0].font_size, 28.0);

    ctx.resize(800, 600);
    ctx.timer.count_frame();
    let frame = Hud::frame(&ctx);
    assert_eq!(frame.crosshair.centre, [400.0, 300.0]);
    assert_eq!(frame.lines[0].text, "FPS: 1   TPS: 0");
}

#[test]
fn should_ignore_zero_sized_resize() {
    let mut ctx = Context::default();
    ctx.resize(0, 0);
    assert_eq!((ctx.settings.width, ctx.settings.height), (1280, 720));
    assert_close(ctx.aspect_ratio(), 1280.0 / 720.0);
}
