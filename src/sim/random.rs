//! Bounded random integers and random colors
//!
//! Both take the RNG explicitly so the world's seeded generator is the only
//! source of randomness.

use rand::Rng;

use super::color::Rgb;

/// Uniform integer in `[min, max)`
///
/// # Panics
///
/// Panics if `max <= min` (empty range).
#[inline]
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.random_range(min..max)
}

/// Random color with each channel drawn from `[0, 255)`
///
/// The upper bound is exclusive, so no channel ever reaches 255.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    let r = random_int(rng, 0, 255) as u8;
    let g = random_int(rng, 0, 255) as u8;
    let b = random_int(rng, 0, 255) as u8;
    Rgb::new(r, g, b)
}
