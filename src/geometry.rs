//! Design-space geometry: the fixed 400x500 coordinate system every
//! decoration lives in, the triangular tree silhouette used to constrain
//! ornament placement, and the design-to-terminal transform.

pub const BASE_WIDTH: f32 = 400.0;
pub const BASE_HEIGHT: f32 = 500.0;

/// Triangular approximation of the tree silhouette, in design coordinates.
pub const TREE_TOP: Point = Point { x: 200.0, y: 70.0 };
pub const TREE_BOTTOM_LEFT: Point = Point { x: 50.0, y: 400.0 };
pub const TREE_BOTTOM_RIGHT: Point = Point { x: 350.0, y: 400.0 };

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

fn edge_sign(p: Point, a: Point, b: Point) -> f32 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

/// Whether a design-space point lies within the tree silhouette.
///
/// Sign-of-cross-product test: the point is inside iff it lies on the same
/// side of all three edges. Zero signs count as inside, so points exactly
/// on an edge are accepted.
pub fn is_inside_tree(p: Point) -> bool {
    let d1 = edge_sign(p, TREE_TOP, TREE_BOTTOM_LEFT);
    let d2 = edge_sign(p, TREE_BOTTOM_LEFT, TREE_BOTTOM_RIGHT);
    let d3 = edge_sign(p, TREE_BOTTOM_RIGHT, TREE_TOP);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

/// Quadratic Bezier evaluation for `t` in [0, 1].
pub fn bezier_point(p0: Point, p1: Point, p2: Point, t: f32) -> Point {
    let u = 1.0 - t;
    Point {
        x: u * u * p0.x + 2.0 * u * t * p1.x + t * t * p2.x,
        y: u * u * p0.y + 2.0 * u * t * p1.y + t * t * p2.y,
    }
}

/// Uniform design-to-device mapping: scaled to fit, centered horizontally,
/// aligned to the bottom of the surface.
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl ViewTransform {
    pub fn new(device_width: u16, device_height: u16) -> Self {
        let w = device_width as f32;
        let h = device_height as f32;
        let scale = (w / BASE_WIDTH).min(h / BASE_HEIGHT);
        Self {
            scale,
            offset_x: (w - BASE_WIDTH * scale) / 2.0,
            offset_y: h - BASE_HEIGHT * scale,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_device(&self, p: Point) -> (f32, f32) {
        (
            p.x * self.scale + self.offset_x,
            p.y * self.scale + self.offset_y,
        )
    }

    /// Exact inverse of `to_device`, used for pointer hit testing.
    pub fn to_design(&self, device_x: f32, device_y: f32) -> Point {
        Point {
            x: (device_x - self.offset_x) / self.scale,
            y: (device_y - self.offset_y) / self.scale,
        }
    }

    /// Design-space length scaled to device cells.
    pub fn to_device_len(&self, len: f32) -> f32 {
        len * self.scale
    }
}
