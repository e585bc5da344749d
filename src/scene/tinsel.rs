//! Tinsel strands: a sagging quadratic curve stroked with a dim-bright-dim
//! gradient, plus glint points sampled along it that flare on and off with
//! a travelling sine wave.

use crate::geometry::{Point, ViewTransform, bezier_point};
use crate::render::Canvas;
use crate::scene::store::TinselStrand;

/// Fixed parametric samples per strand for glint placement.
const GLINT_SAMPLES: u32 = 12;
const GLINT_THRESHOLD: f32 = 0.3;

fn control_points(strand: &TinselStrand) -> (Point, Point, Point) {
    let p0 = Point::new(strand.left_x, strand.y);
    let p2 = Point::new(strand.right_x, strand.y);
    // Control point below the midpoint produces the sag.
    let p1 = Point::new((strand.left_x + strand.right_x) / 2.0, strand.y + strand.sag);
    (p0, p1, p2)
}

pub fn draw_tinsel(
    strands: &[TinselStrand],
    canvas: &mut Canvas,
    transform: &ViewTransform,
    frame: u64,
) {
    for strand in strands {
        let (p0, p1, p2) = control_points(strand);

        // Stroke the curve with enough steps to land on every covered cell.
        let span = transform.to_device_len(strand.right_x - strand.left_x);
        let steps = (span.ceil() as u32 * 2).max(8);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = bezier_point(p0, p1, p2, t);
            let (dx, dy) = transform.to_device(p);
            // Three-stop gradient: dim at the ends, bright at the center.
            let color = if (t - 0.5).abs() < 0.2 {
                strand.color.shine
            } else {
                strand.color.main
            };
            canvas.set(dx.round() as i32, dy.round() as i32, '~', color);
        }

        // Glints travel along the strand with the frame counter.
        for i in 0..=GLINT_SAMPLES {
            let t = i as f32 / GLINT_SAMPLES as f32;
            let p = bezier_point(p0, p1, p2, t);

            let intensity =
                (frame as f32 * 0.15 + strand.phase + i as f32 * 0.8).sin() * 0.5 + 0.5;
            if intensity > GLINT_THRESHOLD {
                let glint_size = 2.0 + intensity * 3.0;
                let glyph = if glint_size > 3.5 { '*' } else { '+' };
                let (dx, dy) = transform.to_device(p);
                canvas.set(dx.round() as i32, dy.round() as i32, glyph, strand.color.shine);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::generate::generate_tinsel;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn strands_stroke_their_full_span() {
        let mut rng = StdRng::seed_from_u64(1);
        let strands = generate_tinsel(&mut rng);
        let mut canvas = Canvas::new(120, 40);
        let transform = ViewTransform::new(120, 40);

        draw_tinsel(&strands, &mut canvas, &transform, 0);

        // Both endpoints of the widest strand must be plotted.
        let widest = &strands[3];
        let (lx, ly) = transform.to_device(Point::new(widest.left_x, widest.y));
        let (rx, ry) = transform.to_device(Point::new(widest.right_x, widest.y));
        assert!(!canvas.get(lx.round() as u16, ly.round() as u16).is_empty());
        assert!(!canvas.get(rx.round() as u16, ry.round() as u16).is_empty());
    }

    #[test]
    fn glints_come_and_go_with_the_frame_counter() {
        let strand = TinselStrand {
            y: 260.0,
            left_x: 100.0,
            right_x: 300.0,
            sag: 25.0,
            color: crate::scene::store::TINSEL_SILVER,
            phase: 0.0,
        };
        let transform = ViewTransform::new(160, 50);

        let glints_at = |frame: u64| {
            let mut canvas = Canvas::new(160, 50);
            draw_tinsel(std::slice::from_ref(&strand), &mut canvas, &transform, frame);
            let mut glints = 0;
            for y in 0..50 {
                for x in 0..160 {
                    let ch = canvas.get(x, y).ch;
                    if ch == '*' || ch == '+' {
                        glints += 1;
                    }
                }
            }
            glints
        };

        // The sine gate means different frames light different glint sets.
        let first: usize = glints_at(0);
        assert!((1..40).any(|frame| glints_at(frame) != first));
    }
}
