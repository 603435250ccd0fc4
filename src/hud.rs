//! Debug overlay description.
//!
//! The crate does not rasterise text; [`Hud::frame`] produces the shapes and
//! lines a 2D overlay renderer should draw this frame.

use crate::context::Context;

pub const CROSSHAIR_RADIUS: f32 = 5.0;
pub const CROSSHAIR_STROKE: f32 = 0.75;
pub const FONT_SIZE: f32 = 28.0;
pub const LINE_SPACING: f32 = 20.0;

/// Normalised RGBA colour built from 8-bit channels.
pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    [r, g, b, a].map(|c| c as f32 / 255.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Crosshair {
    pub centre: [f32; 2],
    pub radius: f32,
    pub stroke_width: f32,
    pub colour: [f32; 4],
}

/// Left-aligned, top-anchored text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub position: [f32; 2],
    pub font_size: f32,
    pub colour: [f32; 4],
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudFrame {
    pub crosshair: Crosshair,
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Hud;

impl Hud {
    pub fn frame(ctx: &Context) -> HudFrame {
        let settings = &ctx.settings;
        let crosshair = Crosshair {
            centre: [settings.width as f32 / 2.0, settings.height as f32 / 2.0],
            radius: CROSSHAIR_RADIUS,
            stroke_width: CROSSHAIR_STROKE,
            colour: rgba(0xc1, 0xe3, 0xf9, 200),
        };
        let texts = [
            format!("FPS: {}   TPS: {}", ctx.timer.fps(), ctx.timer.tps()),
            format!("MOUSE SENSITIVITY: {:.2} [ and ]", settings.mouse_sensitivity),
            format!("CAMERA SPEED: {:.2} ; and '", settings.camera_speed),
        ];
        let lines = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| TextLine {
                position: [1.0, LINE_SPACING * i as f32],
                font_size: FONT_SIZE,
                colour: rgba(0x00, 0x00, 0x00, 0xff),
                text,
            })
            .collect();
        HudFrame { crosshair, lines }
    }
}
