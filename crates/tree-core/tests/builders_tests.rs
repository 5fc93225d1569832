// Integration tests for the procedural scene builders.

use tree_core::builders::{build_gifts, build_snowflakes, build_tree};
use tree_core::*;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

fn scenes() -> impl Iterator<Item = SceneState> {
    (0..64u64).map(SceneState::from_seed)
}

#[test]
fn layer_count_is_within_range() {
    for s in scenes() {
        let n = s.tree.layers.len() as u32;
        assert!((TREE_LAYERS_MIN..=TREE_LAYERS_MAX).contains(&n), "layers={n}");
    }
}

#[test]
fn layer_radius_shrinks_by_fixed_fraction_of_base() {
    for s in scenes() {
        let base = s.tree.base_radius;
        for (i, layer) in s.tree.layers.iter().enumerate() {
            let expected = base * (1.0 - i as f32 * LAYER_RADIUS_STEP);
            assert!((layer.radius - expected).abs() < 1e-4);
        }
        for pair in s.tree.layers.windows(2) {
            assert!(pair[1].radius < pair[0].radius);
            assert!(pair[0].radius - pair[1].radius <= base * LAYER_RADIUS_STEP + 1e-4);
        }
    }
}

#[test]
fn consecutive_layers_overlap_by_constant() {
    for s in scenes() {
        for pair in s.tree.layers.windows(2) {
            let overlap = pair[0].top() - pair[1].bottom();
            assert!(
                (overlap - LAYER_OVERLAP).abs() < 1e-4,
                "overlap={overlap}"
            );
        }
    }
}

#[test]
fn layers_share_height_and_fill_the_tree() {
    for s in scenes() {
        let n = s.tree.layers.len() as f32;
        for layer in &s.tree.layers {
            assert!((layer.height - s.tree.base_height / n).abs() < 1e-4);
        }
        let first = s.tree.layers[0];
        assert!((first.bottom() + LAYER_OVERLAP).abs() < 1e-4);
    }
}

#[test]
fn layer_entities_match_layer_records() {
    let s = SceneState::from_seed(3);
    for layer in &s.tree.layers {
        assert_eq!(s.world.kind(layer.entity), Kind::TreeLayer);
        assert_eq!(
            s.world.shape(layer.entity),
            Shape::Cone {
                radius: layer.radius,
                height: layer.height,
                segments: CONE_SEGMENTS,
            }
        );
        assert_eq!(s.world.transform(layer.entity).translation.y, layer.center_y);
        assert_eq!(s.world.material(layer.entity).shading, Shading::Flat);
    }
}

#[test]
fn trunk_and_topper_are_proportional_and_placed() {
    for s in scenes() {
        let tree = &s.tree;
        match s.world.shape(tree.trunk) {
            Shape::Cylinder { radius, height, .. } => {
                assert!((radius - tree.base_radius * TRUNK_RADIUS_FRACTION).abs() < 1e-4);
                assert!((height - tree.base_height * TRUNK_HEIGHT_FRACTION).abs() < 1e-4);
            }
            other => panic!("trunk shape {other:?}"),
        }
        let top = tree.layers.last().map(|l| l.top()).unwrap_or_default();
        let trunk_height = tree.base_height * TRUNK_HEIGHT_FRACTION;
        let trunk_y = s.world.transform(tree.trunk).translation.y;
        assert!(
            (trunk_y - (top - trunk_height * 0.5 - LAYER_OVERLAP)).abs() < 1e-3,
            "trunk_y={trunk_y}"
        );
        let topper = s.world.transform(tree.topper);
        assert!((topper.translation.y - (top + TOPPER_LIFT)).abs() < 1e-3);
        assert!(topper.yaw >= 0.0 && topper.yaw <= std::f32::consts::TAU + 1e-4);
        assert_eq!(s.world.material(tree.topper).shading, Shading::Unlit);
    }
}

#[test]
fn ornaments_per_layer_and_within_layer_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut world = World::new();
    let mut lights = LightBank::new();
    let tree = build_tree(&mut rng, &mut world, &mut lights);

    let ornaments: Vec<_> = world.of_kind(Kind::Ornament).collect();
    let layers = tree.layers.len();
    assert!(ornaments.len() >= layers * ORNAMENTS_PER_LAYER.0 as usize);
    assert!(ornaments.len() <= layers * ORNAMENTS_PER_LAYER.1 as usize);

    let lowest = tree.layers[0].bottom();
    let highest = tree.layers[layers - 1].top();
    for e in ornaments {
        let t = world.transform(e);
        let horizontal = (t.translation.x.powi(2) + t.translation.z.powi(2)).sqrt();
        assert!(horizontal >= LAYER_MIN_RADIUS - 1e-4);
        assert!(horizontal <= tree.base_radius - ORNAMENT_INSET + 1e-4);
        assert!(t.translation.y >= lowest && t.translation.y <= highest);
        assert!(t.scale >= ORNAMENT_SCALE_RANGE.0 && t.scale < ORNAMENT_SCALE_RANGE.1);
        let m = world.material(e);
        assert_eq!(m.emissive, ORNAMENT_GLOW);
        assert!(m.color.iter().all(|c| (0.0..1.0).contains(c)));
    }
}

#[test]
fn fairy_lights_per_layer_with_fixed_saturation() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut world = World::new();
    let mut lights = LightBank::new();
    let tree = build_tree(&mut rng, &mut world, &mut lights);

    let fairy = &lights.points[1..];
    let layers = tree.layers.len();
    assert!(fairy.len() >= layers * FAIRY_LIGHTS_PER_LAYER.0 as usize);
    assert!(fairy.len() <= layers * FAIRY_LIGHTS_PER_LAYER.1 as usize);
    for light in fairy {
        assert_eq!(light.intensity, FAIRY_LIGHT_INTENSITY);
        assert_eq!(light.range, FAIRY_LIGHT_RANGE);
        // full saturation at half lightness: max channel 1, min channel 0
        let max = light.color.iter().cloned().fold(f32::MIN, f32::max);
        let min = light.color.iter().cloned().fold(f32::MAX, f32::min);
        assert!((max - 1.0).abs() < 1e-4 && min.abs() < 1e-4, "{:?}", light.color);
    }
}

#[test]
fn gifts_have_spin_components_in_range() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut world = World::new();
    let count = build_gifts(&mut rng, &mut world);
    assert!((GIFTS.0 as usize..=GIFTS.1 as usize).contains(&count));
    assert_eq!(world.spins.len(), count);
    assert_eq!(world.count(Kind::Gift), count);
    for (e, spin) in &world.spins {
        assert_eq!(world.kind(*e), Kind::Gift);
        assert_eq!(world.shape(*e), Shape::Cuboid { size: 1.0 });
        assert!(spin.speed >= GIFT_SPIN_RANGE.0 && spin.speed < GIFT_SPIN_RANGE.1);
        assert!(spin.direction == 1.0 || spin.direction == -1.0);
        let t = world.transform(*e);
        let r = (t.translation.x.powi(2) + t.translation.z.powi(2)).sqrt();
        assert!(r >= GIFT_RADIUS_RANGE.0 - 1e-3 && r <= GIFT_RADIUS_RANGE.1 + 1e-3);
        assert!(t.translation.y >= GIFT_HEIGHT_RANGE.0 && t.translation.y < GIFT_HEIGHT_RANGE.1);
        assert!(t.scale >= GIFT_SCALE_RANGE.0 && t.scale < GIFT_SCALE_RANGE.1);
    }
}

#[test]
fn snowflakes_start_high_with_bounded_velocity() {
    let mut rng = StdRng::seed_from_u64(14);
    let mut world = World::new();
    let flakes = build_snowflakes(&mut rng, &mut world);
    assert_eq!(flakes.len(), SNOWFLAKE_COUNT);
    let half = SNOW_SPREAD * 0.5;
    for f in &flakes {
        let p = world.transform(f.entity).translation;
        assert!(p.y >= SNOW_HEIGHT_RANGE.0 && p.y < SNOW_HEIGHT_RANGE.1);
        assert!(p.x.abs() <= half && p.z.abs() <= half);
        assert!(f.velocity >= SNOW_VELOCITY_RANGE.0 && f.velocity < SNOW_VELOCITY_RANGE.1);
    }
}

#[test]
fn summary_matches_world_contents() {
    let s = SceneState::from_seed(99);
    let sum = s.summary();
    assert_eq!(sum.layers, s.world.count(Kind::TreeLayer));
    assert_eq!(sum.gifts, s.world.count(Kind::Gift));
    assert_eq!(sum.snowflakes, SNOWFLAKE_COUNT);
    assert_eq!(sum.fairy_lights + 1, s.lights.len());
    assert!(s.lights.len() <= MAX_POINT_LIGHTS);
    assert_eq!(s.world.count(Kind::Trunk), 1);
    assert_eq!(s.world.count(Kind::Topper), 1);
}

#[test]
fn same_seed_builds_same_scene() {
    let a = SceneState::from_seed(5);
    let b = SceneState::from_seed(5);
    assert_eq!(a.summary(), b.summary());
    for e in a.world.entities() {
        assert_eq!(a.world.transform(e), b.world.transform(e));
    }
}

/// Always yields the largest raw value, so `gen::<f32>()` is `1 - 2^-24`.
struct TopRng;

impl RngCore for TopRng {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }

    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0xff);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[test]
fn largest_draw_stays_below_range_end() {
    let ranges = [
        SNOW_HEIGHT_RANGE,
        ORNAMENT_SCALE_RANGE,
        GIFT_SCALE_RANGE,
        GIFT_SPIN_RANGE,
        TREE_HEIGHT_RANGE,
        TREE_RADIUS_RANGE,
    ];
    for (lo, hi) in ranges {
        let v = random::rand_float(&mut TopRng, lo, hi);
        assert!(v >= lo && v < hi, "[{lo}, {hi}) gave {v}");
    }
    let p = builders::snow_position(&mut TopRng);
    assert!(p.y >= SNOW_HEIGHT_RANGE.0 && p.y < SNOW_HEIGHT_RANGE.1);
}

#[test]
fn degenerate_range_yields_low_end() {
    assert_eq!(random::rand_float(&mut TopRng, 3.0, 3.0), 3.0);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(random::rand_float(&mut rng, -2.0, -2.0), -2.0);
}
