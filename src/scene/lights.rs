//! Twinkling string lights: a fixed set of positions on the tree, each
//! pulsing between a small and a large glow with its own phase offset,
//! cycling through a six-color palette.

use crate::geometry::{Point, ViewTransform};
use crate::render::Canvas;
use crossterm::style::Color;

const LIGHT_POSITIONS: [(f32, f32); 16] = [
    (180.0, 140.0),
    (220.0, 145.0),
    (150.0, 190.0),
    (250.0, 185.0),
    (130.0, 240.0),
    (200.0, 235.0),
    (270.0, 245.0),
    (110.0, 300.0),
    (180.0, 290.0),
    (250.0, 295.0),
    (300.0, 305.0),
    (95.0, 360.0),
    (160.0, 350.0),
    (230.0, 355.0),
    (300.0, 360.0),
    (330.0, 370.0),
];

const LIGHT_COLORS: [Color; 6] = [
    Color::Rgb {
        r: 255,
        g: 107,
        b: 107,
    },
    Color::Rgb {
        r: 78,
        g: 205,
        b: 196,
    },
    Color::Rgb {
        r: 255,
        g: 230,
        b: 109,
    },
    Color::Rgb {
        r: 149,
        g: 225,
        b: 211,
    },
    Color::Rgb {
        r: 243,
        g: 129,
        b: 129,
    },
    Color::Rgb {
        r: 170,
        g: 150,
        b: 218,
    },
];

pub fn draw_lights(canvas: &mut Canvas, transform: &ViewTransform, frame: u64) {
    for (i, &(x, y)) in LIGHT_POSITIONS.iter().enumerate() {
        let twinkle = (frame as f32 * 0.1 + i as f32 * 0.5).sin() * 0.5 + 0.5;
        let glow = 8.0 + twinkle * 12.0;
        let glyph = if glow > 16.0 {
            '@'
        } else if glow > 12.0 {
            'o'
        } else {
            '.'
        };

        let (dx, dy) = transform.to_device(Point::new(x, y));
        canvas.set(
            dx.round() as i32,
            dy.round() as i32,
            glyph,
            LIGHT_COLORS[i % LIGHT_COLORS.len()],
        );
    }
}
