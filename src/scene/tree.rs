//! The tree backdrop: drawn first, sized to a fixed share of the design
//! width with its art's aspect ratio preserved, resting just above the
//! bottom of the design space.

use crate::assets::{self, SpriteRegistry};
use crate::geometry::{BASE_HEIGHT, BASE_WIDTH, Point, ViewTransform};
use crate::render::Canvas;

const TREE_WIDTH: f32 = 380.0;
const BOTTOM_MARGIN: f32 = 20.0;

pub fn draw_tree(canvas: &mut Canvas, transform: &ViewTransform, sprites: &SpriteRegistry) {
    let Some(sprite) = sprites.get(assets::TREE) else {
        return;
    };

    let tree_height = TREE_WIDTH * sprite.aspect();
    let left = BASE_WIDTH / 2.0 - TREE_WIDTH / 2.0;
    let top = BASE_HEIGHT - tree_height - BOTTOM_MARGIN;

    let (dx, dy) = transform.to_device(Point::new(left, top));
    let w = transform.to_device_len(TREE_WIDTH).round().max(1.0) as u16;
    let h = transform.to_device_len(tree_height).round().max(1.0) as u16;

    sprite.draw_scaled(canvas, dx.round() as i32, dy.round() as i32, w, h);
}
