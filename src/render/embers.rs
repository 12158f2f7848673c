//! Ember particles.
//!
//! Embers are small translucent dots scattered over the middle and upper
//! part of an image. Placement uses a fixed seed so every run produces the
//! same particles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::render::Canvas;
use crate::types::palette::{ORANGE, WARM_YELLOW};
use crate::types::Colour;

/// Seed for ember placement.
pub const EMBER_SEED: u64 = 42;

/// Default particle count.
pub const DEFAULT_EMBER_COUNT: usize = 30;

/// A single ember particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ember {
    pub x: i64,
    pub y: i64,
    pub radius: i64,
    pub colour: Colour,
}

/// Generate `count` embers for a canvas of the given size.
///
/// Positions fall within 10-90% of the width and 10-70% of the height,
/// radii within 1..=4 and alpha within 80..=200.
pub fn scatter_embers(width: u32, height: u32, count: usize) -> Vec<Ember> {
    let mut rng = StdRng::seed_from_u64(EMBER_SEED);
    let (width, height) = (width as f64, height as f64);
    let x_range = (width * 0.1) as i64..=(width * 0.9) as i64;
    let y_range = (height * 0.1) as i64..=(height * 0.7) as i64;

    (0..count)
        .map(|_| {
            let x = rng.random_range(x_range.clone());
            let y = rng.random_range(y_range.clone());
            let radius = rng.random_range(1..=4);
            let alpha = rng.random_range(80..=200u8);
            let t: f64 = rng.random();
            Ember {
                x,
                y,
                radius,
                colour: ORANGE.lerp(WARM_YELLOW, t).with_alpha(alpha),
            }
        })
        .collect()
}

/// Scatter `count` embers over the whole canvas.
pub fn draw_embers(canvas: &mut Canvas, count: usize) {
    for ember in scatter_embers(canvas.width(), canvas.height(), count) {
        canvas.fill_circle(ember.x as f64, ember.y as f64, ember.radius as f64, ember.colour);
    }
}
