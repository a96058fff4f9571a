pub mod color;
mod vec;

pub use color::{rgb_to_u32, to_rgb8, Color, BLACK, WHITE};
pub use std::f64::consts::{FRAC_PI_2, TAU};
pub const INFINITY: f64 = f64::INFINITY;
pub use vec::Vec3;

/// Threshold below which a quantity is treated as zero. Used for root
/// positivity, shadow ray offsets and albedo significance alike.
pub const EPSILON: f64 = 1e-4;
