//! Physical wheel layout.
//!
//! The slot order only matters for rendering a spin; outcomes are drawn
//! independently of position.

use crate::constants::POCKET_COUNT;
use crate::pocket::Pocket;

/// Pocket order of the European wheel, clockwise from the zero.
pub const WHEEL_ORDER: [u8; POCKET_COUNT] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1, 20,
    14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

/// Index of a pocket's slot on the physical wheel.
pub fn wheel_slot(pocket: Pocket) -> usize {
    WHEEL_ORDER
        .iter()
        .position(|&n| n == pocket.value())
        .unwrap_or(0)
}

/// Rotation angle of a pocket's slot, in degrees clockwise from the zero mark.
pub fn slot_angle_degrees(pocket: Pocket) -> f64 {
    wheel_slot(pocket) as f64 * (360.0 / POCKET_COUNT as f64)
}
