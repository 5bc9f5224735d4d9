//! Diffusion weights.

/// Neighbor offsets and weights for spreading quantization error.
///
/// Only pixels the raster scan has not reached yet may appear: entries on
/// the current row must have `dx > 0`.
///
/// # Integer Policy
///
/// Each neighbor receives `error * weight / divisor` computed in `i32`,
/// which truncates toward zero. Output is bit-exact only under this rule,
/// so it must not be changed to rounding.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// `(dx, dy, weight)`, with `dy >= 0` and `dx` positive to the right.
    pub entries: &'static [(i32, i32, u8)],

    /// Sum of all weights.
    pub divisor: u8,

    /// Furthest row reached; the error window holds `max_dy + 1` rows.
    pub max_dy: usize,
}

impl Kernel {
    /// Share of `error` that goes to a neighbor with `weight`, truncated
    /// toward zero.
    #[inline]
    pub fn scale(&self, error: i32, weight: u8) -> i32 {
        error * weight as i32 / self.divisor as i32
    }
}

/// The classic Floyd-Steinberg weights, 16ths summing to 16.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),
        (-1, 1, 3),
        (0, 1, 5),
        (1, 1, 1),
    ],
    divisor: 16,
    max_dy: 1,
};
