//! Procedural scene population: tinsel strands, ornaments, gifts, and the
//! snowfield. Decoration positions come from fixed slot pools in design
//! coordinates with per-entity jitter; the snowfield is seeded across the
//! device surface and regenerated on resize.

use crate::geometry::Point;
use crate::scene::store::{
    Gift, GiftKind, Ornament, OrnamentKind, Snowflake, TinselColor, TinselStrand, TINSEL_GOLD,
    TINSEL_SILVER,
};
use rand::Rng;
use rand::RngExt;
use rand::seq::SliceRandom;
use std::f32::consts::TAU;

/// Fixed strand spans across the tree, top to bottom, widening with depth.
const TINSEL_PATHS: [(f32, f32, f32, f32); 4] = [
    (130.0, 165.0, 235.0, 15.0),
    (190.0, 130.0, 270.0, 20.0),
    (260.0, 100.0, 300.0, 25.0),
    (340.0, 70.0, 330.0, 30.0),
];

const TINSEL_COLORS: [TinselColor; 2] = [TINSEL_SILVER, TINSEL_GOLD];

/// Candidate ornament slots: six tiers narrowing toward the top.
const ORNAMENT_SLOTS: [(f32, f32, f32); 20] = [
    // Top tier (narrow)
    (200.0, 95.0, 28.0),
    // Second tier
    (170.0, 140.0, 32.0),
    (230.0, 145.0, 30.0),
    // Third tier
    (140.0, 185.0, 34.0),
    (200.0, 180.0, 32.0),
    (260.0, 190.0, 34.0),
    // Fourth tier
    (115.0, 235.0, 36.0),
    (175.0, 230.0, 34.0),
    (235.0, 228.0, 34.0),
    (290.0, 240.0, 36.0),
    // Fifth tier
    (90.0, 290.0, 38.0),
    (150.0, 285.0, 36.0),
    (210.0, 280.0, 36.0),
    (270.0, 288.0, 36.0),
    (325.0, 295.0, 38.0),
    // Bottom tier (widest)
    (70.0, 350.0, 40.0),
    (135.0, 345.0, 38.0),
    (200.0, 340.0, 38.0),
    (265.0, 348.0, 38.0),
    (330.0, 355.0, 40.0),
];

const GIFT_SLOTS: [(f32, f32, f32); 4] = [
    (95.0, 420.0, 55.0),
    (165.0, 425.0, 60.0),
    (245.0, 422.0, 58.0),
    (315.0, 428.0, 52.0),
];

/// Symmetric jitter in [-half, +half].
fn jitter(rng: &mut impl Rng, half: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * 2.0 * half
}

pub fn generate_tinsel(rng: &mut impl Rng) -> Vec<TinselStrand> {
    TINSEL_PATHS
        .iter()
        .enumerate()
        .map(|(i, &(y, left_x, right_x, sag))| TinselStrand {
            y,
            left_x,
            right_x,
            sag,
            color: TINSEL_COLORS[i % TINSEL_COLORS.len()],
            phase: rng.random::<f32>() * TAU,
        })
        .collect()
}

pub fn generate_ornaments(rng: &mut impl Rng) -> Vec<Ornament> {
    let mut slots = ORNAMENT_SLOTS;
    slots.shuffle(rng);

    let count = rng.random_range(12..=16);

    slots
        .iter()
        .take(count)
        .map(|&(x, y, size)| {
            let kind = OrnamentKind::ALL[rng.random_range(0..OrnamentKind::ALL.len())];
            Ornament {
                pos: Point::new(x + jitter(rng, 7.5), y + jitter(rng, 5.0)),
                size: size + jitter(rng, 5.0),
                kind,
                rotation: jitter(rng, 0.15),
                swing_phase: rng.random::<f32>() * TAU,
            }
        })
        .collect()
}

pub fn generate_gifts(rng: &mut impl Rng) -> Vec<Gift> {
    let mut slots = GIFT_SLOTS;
    slots.shuffle(rng);

    let count = rng.random_range(3..=4);

    slots
        .iter()
        .take(count)
        .map(|&(x, y, size)| Gift {
            pos: Point::new(x + jitter(rng, 10.0), y),
            size: size + rng.random::<f32>() * 15.0,
            kind: GiftKind::ALL[rng.random_range(0..GiftKind::ALL.len())],
        })
        .collect()
}

pub fn generate_snowflakes(
    rng: &mut impl Rng,
    width: u16,
    height: u16,
    count: u16,
) -> Vec<Snowflake> {
    (0..count)
        .map(|_| Snowflake {
            x: rng.random::<f32>() * width as f32,
            y: rng.random::<f32>() * height as f32,
            size: 2.0 + rng.random::<f32>() * 4.0,
            speed: 0.1 + rng.random::<f32>() * 0.25,
            wobble: rng.random::<f32>() * TAU,
            wobble_speed: 0.02 + rng.random::<f32>() * 0.02,
            opacity: 0.5 + rng.random::<f32>() * 0.5,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn tinsel_is_always_four_alternating_strands() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let strands = generate_tinsel(&mut rng);
            assert_eq!(strands.len(), 4);
            for strand in &strands {
                assert!(strand.left_x < strand.right_x);
                assert!(strand.sag > 0.0);
                assert!((0.0..TAU).contains(&strand.phase));
            }
        }
    }

    #[test]
    fn ornament_count_stays_in_bounds() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let ornaments = generate_ornaments(&mut rng);
            assert!(
                (12..=16).contains(&ornaments.len()),
                "got {} ornaments",
                ornaments.len()
            );
        }
    }

    #[test]
    fn ornaments_stay_near_their_slots() {
        let mut rng = StdRng::seed_from_u64(7);
        for ornament in generate_ornaments(&mut rng) {
            let near_slot = ORNAMENT_SLOTS.iter().any(|&(x, y, size)| {
                (ornament.pos.x - x).abs() <= 7.5
                    && (ornament.pos.y - y).abs() <= 5.0
                    && (ornament.size - size).abs() <= 5.0
            });
            assert!(near_slot, "ornament strayed from every slot");
            assert!(ornament.rotation.abs() <= 0.15);
            assert!((0.0..TAU).contains(&ornament.swing_phase));
        }
    }

    #[test]
    fn gift_count_stays_in_bounds() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let gifts = generate_gifts(&mut rng);
            assert!((3..=4).contains(&gifts.len()), "got {} gifts", gifts.len());
        }
    }

    #[test]
    fn gifts_only_grow_from_slot_size() {
        let mut rng = StdRng::seed_from_u64(3);
        for gift in generate_gifts(&mut rng) {
            let near_slot = GIFT_SLOTS.iter().any(|&(x, y, size)| {
                (gift.pos.x - x).abs() <= 10.0
                    && gift.pos.y == y
                    && gift.size >= size
                    && gift.size <= size + 15.0
            });
            assert!(near_slot, "gift strayed from every slot");
        }
    }

    #[test]
    fn snowfield_fills_the_surface() {
        let mut rng = StdRng::seed_from_u64(11);
        let flakes = generate_snowflakes(&mut rng, 120, 40, 60);
        assert_eq!(flakes.len(), 60);
        for flake in &flakes {
            assert!((0.0..120.0).contains(&flake.x));
            assert!((0.0..40.0).contains(&flake.y));
            assert!(flake.speed > 0.0);
            assert!((0.5..=1.0).contains(&flake.opacity));
        }
    }
}
