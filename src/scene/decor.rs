//! Ornament and gift drawing. Ornaments hang with a gentle time-based
//! swing; both degrade to "draw nothing" when their sprite is missing.

use crate::assets::SpriteRegistry;
use crate::geometry::ViewTransform;
use crate::render::Canvas;
use crate::scene::store::{Gift, Ornament};

const SWING_RATE: f32 = 0.02;
const SWING_AMPLITUDE: f32 = 0.05;

/// Lateral sway of a hanging ornament, in design units. The static tilt
/// plus the animated swing displace the glyph about its hang point.
pub fn sway_offset(ornament: &Ornament, frame: u64) -> f32 {
    let swing = (frame as f32 * SWING_RATE + ornament.swing_phase).sin() * SWING_AMPLITUDE;
    (ornament.rotation + swing) * ornament.size
}

pub fn draw_ornament(
    ornament: &Ornament,
    canvas: &mut Canvas,
    transform: &ViewTransform,
    sprites: &SpriteRegistry,
    frame: u64,
) {
    let Some(sprite) = sprites.get(ornament.kind.sprite_key()) else {
        return;
    };

    let (dx, dy) = transform.to_device(ornament.pos);
    let dx = dx + transform.to_device_len(sway_offset(ornament, frame));

    let w = (transform.to_device_len(ornament.size).round() as u16)
        .clamp(1, sprite.width().max(1) as u16);
    let h = ((w as f32 * sprite.aspect()).ceil() as u16).max(1);

    sprite.draw_scaled(
        canvas,
        dx.round() as i32 - (w / 2) as i32,
        dy.round() as i32 - (h / 2) as i32,
        w,
        h,
    );
}

pub fn draw_gift(
    gift: &Gift,
    canvas: &mut Canvas,
    transform: &ViewTransform,
    sprites: &SpriteRegistry,
) {
    let Some(sprite) = sprites.get(gift.kind.sprite_key()) else {
        return;
    };

    let (dx, dy) = transform.to_device(gift.pos);
    let w = (transform.to_device_len(gift.size).round() as u16).max(1);
    let h = ((w as f32 * sprite.aspect()).ceil() as u16).max(1);

    sprite.draw_scaled(
        canvas,
        dx.round() as i32 - (w / 2) as i32,
        dy.round() as i32 - (h / 2) as i32,
        w,
        h,
    );
}
