//! The snow overlay: flakes fall with a sinusoidal drift and wrap at the
//! surface edges. Everything here works in device (cell) coordinates.

use crate::render::Canvas;
use crate::scene::store::Snowflake;
use crossterm::style::Color;
use rand::Rng;
use rand::RngExt;

const DRIFT_AMPLITUDE: f32 = 0.2;
/// Flakes leaving the bottom respawn this far above the top edge.
const RESPAWN_Y: f32 = -10.0;

/// Advance one flake a single tick and wrap it back onto the surface.
pub fn advance_flake(flake: &mut Snowflake, width: u16, height: u16, rng: &mut impl Rng) {
    flake.y += flake.speed;
    flake.wobble += flake.wobble_speed;
    flake.x += flake.wobble.sin() * DRIFT_AMPLITUDE;

    let w = width as f32;
    if flake.y > height as f32 {
        flake.y = RESPAWN_Y;
        flake.x = rng.random::<f32>() * w;
    }
    if flake.x > w {
        flake.x = 0.0;
    }
    if flake.x < 0.0 {
        flake.x = w;
    }
}

fn glyph_for(flake: &Snowflake) -> char {
    if flake.size < 3.0 {
        '.'
    } else if flake.size < 4.5 {
        '+'
    } else {
        '*'
    }
}

fn color_for(flake: &Snowflake) -> Color {
    if flake.opacity > 0.8 {
        Color::White
    } else if flake.opacity > 0.6 {
        Color::Grey
    } else {
        Color::DarkGrey
    }
}

/// Clear and redraw the snow layer. When snow is toggled off the layer is
/// left blank and the flakes hold still.
pub fn draw_snow(
    flakes: &mut [Snowflake],
    snow_on: bool,
    canvas: &mut Canvas,
    rng: &mut impl Rng,
) {
    canvas.clear();
    if !snow_on {
        return;
    }

    let (width, height) = (canvas.width(), canvas.height());
    for flake in flakes.iter_mut() {
        advance_flake(flake, width, height, rng);
        canvas.set(
            flake.x.round() as i32,
            flake.y.round() as i32,
            glyph_for(flake),
            color_for(flake),
        );
    }
}
