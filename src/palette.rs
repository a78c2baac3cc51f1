/// Palette generation: a random primary plus four chained variants.
use rand::RngExt;

use crate::color::{WHEEL, hsv_to_hex};

/// Colors per palette: one primary followed by four variants, each
/// derived from the entry before it.
pub const PALETTE_SIZE: usize = 5;

/// Hue offsets a variant may jump by on the 18-step wheel. 9 is the
/// complement, 6 and 12 the triadics, the rest analogous neighbours.
const HUE_OFFSETS: [usize; 9] = [9, 6, 12, 3, 15, 2, 16, 1, 17];

// Mutation probabilities and the multiplicative scale applied when a
// saturation or value mutation fires.
const HUE_CHANCE: f64 = 0.66;
const SATURATION_CHANCE: f64 = 0.33;
const VALUE_CHANCE: f64 = 0.33;
const SCALE_RANGE: std::ops::Range<f64> = 0.25..1.0;

/// Mutation rounds to attempt before forcing a hue step.
const MAX_VARIANT_ATTEMPTS: usize = 8;

/// An HSV-like triple: a wheel index plus percent-like saturation and
/// value. `s` and `v` are not clamped; variants only ever scale them down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: usize,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn to_hex(self) -> String {
        hsv_to_hex(self.h, self.s, self.v)
    }
}

/// Pick a random primary: any wheel hue, saturation and value in [70, 100].
pub fn random_primary() -> Hsv {
    let mut rng = rand::rng();
    Hsv {
        h: rng.random_range(0..WHEEL.len()),
        s: (70 + rng.random_range(0..31)) as f64,
        v: (70 + rng.random_range(0..31)) as f64,
    }
}

/// Derive a triple that differs from `prev` in at least one field.
///
/// Each round rolls the hue, saturation and value mutations independently.
/// A round that leaves the triple unchanged is retried; once the attempt
/// budget runs out a hue step is forced, so the call always terminates
/// with a distinct triple. The comparison is on the triple itself rather
/// than on which mutations fired, so inputs where scaling is a no-op
/// (`s = 0`, `v = 0`) still come back changed.
pub fn make_variant(prev: Hsv) -> Hsv {
    let mut rng = rand::rng();

    for _ in 0..MAX_VARIANT_ATTEMPTS {
        let mut next = prev;
        if rng.random_bool(HUE_CHANCE) {
            let offset = HUE_OFFSETS[rng.random_range(0..HUE_OFFSETS.len())];
            next.h = (next.h + offset) % WHEEL.len();
        }
        if rng.random_bool(SATURATION_CHANCE) {
            next.s *= rng.random_range(SCALE_RANGE);
        }
        if rng.random_bool(VALUE_CHANCE) {
            next.v *= rng.random_range(SCALE_RANGE);
        }
        if next != prev {
            return next;
        }
    }

    // Every offset is nonzero mod 18, so the hue is guaranteed to move.
    let offset = HUE_OFFSETS[rng.random_range(0..HUE_OFFSETS.len())];
    Hsv {
        h: (prev.h + offset) % WHEEL.len(),
        ..prev
    }
}

/// Generate a fresh palette as hex strings: the primary first, then four
/// variants chained off one another.
pub fn generate_palette() -> Vec<String> {
    let primary = random_primary();
    let mut colors = Vec::with_capacity(PALETTE_SIZE);
    colors.push(primary.to_hex());

    let mut current = primary;
    for _ in 1..PALETTE_SIZE {
        current = make_variant(current);
        colors.push(current.to_hex());
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_valid_hex;

    #[test]
    fn variant_always_differs_from_its_input() {
        let mut current = Hsv {
            h: 4,
            s: 88.0,
            v: 91.0,
        };
        for _ in 0..500 {
            let next = make_variant(current);
            assert_ne!(next, current);
            current = next;
        }
    }

    #[test]
    fn variant_differs_even_when_scaling_is_a_no_op() {
        // With s = v = 0 the multiplicative mutations cannot change the
        // triple, so only a hue step can satisfy the guarantee.
        for _ in 0..200 {
            let input = Hsv {
                h: 11,
                s: 0.0,
                v: 0.0,
            };
            let next = make_variant(input);
            assert_ne!(next.h, input.h);
            assert!(next.h < WHEEL.len());
        }
    }

    #[test]
    fn variant_hue_stays_on_the_wheel() {
        let mut current = random_primary();
        for _ in 0..500 {
            current = make_variant(current);
            assert!(current.h < WHEEL.len());
        }
    }

    #[test]
    fn variant_never_raises_saturation_or_value() {
        let mut current = random_primary();
        for _ in 0..500 {
            let next = make_variant(current);
            assert!(next.s <= current.s);
            assert!(next.v <= current.v);
            current = next;
        }
    }

    #[test]
    fn primary_starts_in_the_vivid_window() {
        for _ in 0..200 {
            let primary = random_primary();
            assert!(primary.h < WHEEL.len());
            assert!((70.0..=100.0).contains(&primary.s));
            assert!((70.0..=100.0).contains(&primary.v));
        }
    }

    #[test]
    fn generated_palette_is_five_well_formed_colors() {
        for _ in 0..100 {
            let colors = generate_palette();
            assert_eq!(colors.len(), PALETTE_SIZE);
            for color in &colors {
                assert!(is_valid_hex(color));
                assert_eq!(color.to_lowercase(), *color);
            }
        }
    }
}
