//! Built-in layouts.
//!
//! Each layout is a fixed list of slots, emitted layer by layer from the
//! table upwards. The order is stable so a shuffled deck can be zipped
//! against it, and a deck shorter than the layout fills the lower layers
//! first.

use crate::core::LayoutVariant;
use crate::tiles::{Position, TILE_HEIGHT, TILE_WIDTH};

/// Generate the slots of a layout.
///
/// ```
/// use baraja::core::LayoutVariant;
/// use baraja::layout::generate;
///
/// let slots = generate(LayoutVariant::Turtle);
/// assert_eq!(slots.len(), 142);
/// assert_eq!(slots, generate(LayoutVariant::Turtle));
/// ```
#[must_use]
pub fn generate(variant: LayoutVariant) -> Vec<Position> {
    let mut slots = SlotList::default();
    match variant {
        LayoutVariant::Turtle => turtle(&mut slots),
        LayoutVariant::Butterfly => butterfly(&mut slots),
        LayoutVariant::Fortress => fortress(&mut slots),
    }
    slots.finish()
}

/// Collects slots and sorts them layer by layer.
#[derive(Default)]
struct SlotList(Vec<Position>);

impl SlotList {
    fn push(&mut self, x: i32, y: i32, z: i32) {
        self.0.push(Position::new(x, y, z));
    }

    /// Fill the rectangle `[x0, x1] x [y0, y1]` (inclusive, grid-stepped) on layer `z`.
    fn rect(&mut self, (x0, x1): (i32, i32), (y0, y1): (i32, i32), z: i32) {
        for y in (y0..=y1).step_by(TILE_HEIGHT as usize) {
            for x in (x0..=x1).step_by(TILE_WIDTH as usize) {
                self.push(x, y, z);
            }
        }
    }

    /// Stable sort by layer keeps each layer in insertion order.
    fn finish(mut self) -> Vec<Position> {
        self.0.sort_by_key(|pos| pos.z);
        self.0
    }
}

/// Stepped pyramid: body with head, tail and four legs, shell tiers on top.
fn turtle(slots: &mut SlotList) {
    // Layer 0: body
    slots.rect((6, 28), (2, 12), 0);
    // Head and neck on the left, tail on the right
    slots.rect((2, 4), (6, 8), 0);
    slots.rect((30, 32), (6, 8), 0);
    // Legs above and below the body
    for x in [8, 10, 24, 26] {
        slots.push(x, 0, 0);
        slots.push(x, 14, 0);
    }

    // Shell tiers
    slots.rect((10, 24), (4, 10), 1);
    slots.rect((14, 20), (4, 10), 2);
    slots.rect((16, 18), (6, 8), 3);

    // Summit
    slots.push(16, 6, 4);
    slots.push(16, 8, 4);
}

/// Central four-high column with two wings narrowing away from the middle row.
fn butterfly(slots: &mut SlotList) {
    const BODY_X: i32 = 18;
    const MIDDLE_Y: i32 = 8;

    for z in 0..4 {
        slots.rect((BODY_X, BODY_X), (2, 14), z);
    }

    // Layer 0: wings, mirrored around the body
    for y in (2..=14).step_by(2) {
        let inset = (y - MIDDLE_Y).abs();
        for x in (2 + inset..BODY_X).step_by(2) {
            slots.push(x, y, 0);
            slots.push(2 * BODY_X - x, y, 0);
        }
    }

    // Layer 1: inner wing relief
    slots.rect((10, 14), (6, 10), 1);
    slots.rect((22, 26), (6, 10), 1);

    // Layer 2: wing details next to the body
    slots.rect((14, 14), (6, 8), 2);
    slots.rect((22, 22), (6, 8), 2);
}

/// High perimeter walls around a low interior courtyard.
fn fortress(slots: &mut SlotList) {
    const LEFT: i32 = 6;
    const RIGHT: i32 = 26;
    const TOP: i32 = 2;
    const BOTTOM: i32 = 12;

    // Layer 0: solid foundation
    slots.rect((LEFT, RIGHT), (TOP, BOTTOM), 0);

    // Layers 1 and 2: outer walls, corners counted once
    for z in 1..=2 {
        slots.rect((LEFT, RIGHT), (TOP, TOP), z);
        slots.rect((LEFT, RIGHT), (BOTTOM, BOTTOM), z);
        slots.rect((LEFT, LEFT), (TOP + 2, BOTTOM - 2), z);
        slots.rect((RIGHT, RIGHT), (TOP + 2, BOTTOM - 2), z);
    }

    // Layer 3: corner towers
    for (x, y) in [(LEFT, TOP), (RIGHT, TOP), (LEFT, BOTTOM), (RIGHT, BOTTOM)] {
        slots.push(x, y, 3);
    }

    // Layer 1: courtyard cluster
    slots.rect((14, 18), (6, 8), 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_counts(slots: &[Position]) -> Vec<usize> {
        let top = slots.iter().map(|pos| pos.z).max().unwrap_or(0);
        (0..=top)
            .map(|z| slots.iter().filter(|pos| pos.z == z).count())
            .collect()
    }

    #[test]
    fn test_turtle_shape() {
        let slots = generate(LayoutVariant::Turtle);
        assert_eq!(slots.len(), 142);
        assert_eq!(layer_counts(&slots), vec![88, 32, 16, 4, 2]);
    }

    #[test]
    fn test_butterfly_shape() {
        let slots = generate(LayoutVariant::Butterfly);
        assert_eq!(slots.len(), 138);
        assert_eq!(layer_counts(&slots), vec![95, 25, 11, 7]);
    }

    #[test]
    fn test_butterfly_is_symmetric() {
        let slots = generate(LayoutVariant::Butterfly);
        for pos in &slots {
            let mirrored = Position::new(36 - pos.x, pos.y, pos.z);
            assert!(slots.contains(&mirrored), "{} has no mirror", pos);
        }
    }

    #[test]
    fn test_fortress_shape() {
        let slots = generate(LayoutVariant::Fortress);
        assert_eq!(slots.len(), 136);
        assert_eq!(layer_counts(&slots), vec![66, 36, 30, 4]);
    }

    #[test]
    fn test_slots_are_layer_ordered() {
        for variant in LayoutVariant::ALL {
            let slots = generate(variant);
            assert!(slots.windows(2).all(|w| w[0].z <= w[1].z), "{}", variant);
        }
    }

    #[test]
    fn test_slots_are_on_even_grid() {
        for variant in LayoutVariant::ALL {
            for pos in generate(variant) {
                assert_eq!(pos.x % 2, 0, "{} in {}", pos, variant);
                assert_eq!(pos.y % 2, 0, "{} in {}", pos, variant);
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        for variant in LayoutVariant::ALL {
            assert_eq!(generate(variant), generate(variant));
        }
    }
}
