//! Click-triggered sparkle bursts: short-lived particles thrown outward
//! from a point, pulled down by gravity, fading as their tick counter
//! runs out.

use crate::geometry::{Point, ViewTransform};
use crate::render::Canvas;
use crate::scene::store::Spark;
use crossterm::style::Color;
use rand::Rng;
use rand::RngExt;
use std::f32::consts::TAU;

pub const SPARK_LIFETIME: u16 = 30;
const GRAVITY: f32 = 0.1;

/// Throw `count` sparks outward from `pos` (design coordinates) with a
/// slight upward bias.
pub fn spawn_burst(sparks: &mut Vec<Spark>, pos: Point, count: usize, rng: &mut impl Rng) {
    for _ in 0..count {
        let angle = rng.random::<f32>() * TAU;
        let speed = 2.0 + rng.random::<f32>() * 3.0;
        sparks.push(Spark {
            pos,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed - 2.0,
            size: 3.0 + rng.random::<f32>() * 4.0,
            life: SPARK_LIFETIME,
            max_life: SPARK_LIFETIME,
        });
    }
}

fn glyph_for(size: f32, fade: f32) -> char {
    if size * fade > 4.0 {
        '*'
    } else if size * fade > 2.0 {
        '+'
    } else {
        '.'
    }
}

/// Draw surviving sparks, then advance them one tick: ballistic motion,
/// gravity on the vertical velocity, lifetime decrement. A spark spawned
/// with lifetime N is drawn exactly N times and gone afterwards.
pub fn draw_and_age(sparks: &mut Vec<Spark>, canvas: &mut Canvas, transform: &ViewTransform) {
    for spark in sparks.iter_mut() {
        let fade = spark.life as f32 / spark.max_life as f32;
        let (dx, dy) = transform.to_device(spark.pos);
        let color = if fade > 0.6 {
            Color::White
        } else if fade > 0.3 {
            Color::Yellow
        } else {
            Color::DarkYellow
        };
        canvas.set(
            dx.round() as i32,
            dy.round() as i32,
            glyph_for(spark.size, fade),
            color,
        );

        spark.pos.x += spark.vx;
        spark.pos.y += spark.vy;
        spark.vy += GRAVITY;
        spark.life -= 1;
    }

    sparks.retain(|s| s.life > 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tick(sparks: &mut Vec<Spark>) {
        let mut canvas = Canvas::new(80, 24);
        let transform = ViewTransform::new(80, 24);
        draw_and_age(sparks, &mut canvas, &transform);
    }

    #[test]
    fn burst_adds_exactly_count_sparks() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sparks = Vec::new();
        spawn_burst(&mut sparks, Point::new(200.0, 180.0), 20, &mut rng);
        assert_eq!(sparks.len(), 20);
        for spark in &sparks {
            assert_eq!(spark.life, SPARK_LIFETIME);
            assert_eq!(spark.max_life, SPARK_LIFETIME);
            assert!((3.0..7.0).contains(&spark.size));
        }
    }

    #[test]
    fn spark_survives_exactly_its_lifetime() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut sparks = Vec::new();
        spawn_burst(&mut sparks, Point::new(200.0, 200.0), 1, &mut rng);

        for elapsed in 1..SPARK_LIFETIME {
            tick(&mut sparks);
            assert_eq!(sparks.len(), 1, "gone early after {elapsed} ticks");
        }
        tick(&mut sparks);
        assert!(sparks.is_empty(), "spark persisted past its lifetime");
    }

    #[test]
    fn gravity_bends_sparks_downward() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sparks = Vec::new();
        spawn_burst(&mut sparks, Point::new(200.0, 200.0), 5, &mut rng);

        let initial: Vec<f32> = sparks.iter().map(|s| s.vy).collect();
        tick(&mut sparks);
        for (spark, before) in sparks.iter().zip(initial) {
            assert!((spark.vy - before - GRAVITY).abs() < 1e-6);
        }
    }

    #[test]
    fn aging_an_empty_collection_is_a_noop() {
        let mut sparks: Vec<Spark> = Vec::new();
        tick(&mut sparks);
        assert!(sparks.is_empty());
    }
}
