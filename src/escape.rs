//! Escape-time evaluation of `z <- z^2 + c`.

use num_complex::Complex64;

/// Grid value for a point that never left the radius-2 disk within the iteration budget.
pub const IN_SET: i32 = -1;

/// Iteration at which `c` escapes, or `None` if it stays bounded for `max_iterations - 1` steps.
///
/// Iterations are counted from 1, so a point with `|c| > 2` escapes on iteration 1.
/// A budget of 0 or 1 leaves nothing to iterate and always yields `None`.
pub fn escape_time(c: Complex64, max_iterations: u32) -> Option<u32> {
    let mut z = Complex64::new(0.0, 0.0);
    for i in 1..max_iterations {
        z = z * z + c;
        if z.norm() > 2.0 {
            return Some(i);
        }
    }
    None
}

/// Largest budget whose escape iterations all fit in a grid cell.
pub const MAX_ITERATIONS: u32 = i32::MAX as u32 + 1;

/// [`escape_time`] in grid form: the escape iteration, or [`IN_SET`].
///
/// Budgets above [`MAX_ITERATIONS`] are treated as [`MAX_ITERATIONS`].
pub fn escape_iteration(c: Complex64, max_iterations: u32) -> i32 {
    match escape_time(c, max_iterations.min(MAX_ITERATIONS)) {
        // i < MAX_ITERATIONS, so i <= i32::MAX
        Some(i) => i as i32,
        None => IN_SET,
    }
}
