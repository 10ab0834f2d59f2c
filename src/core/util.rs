//! General helper utilities

mod uuid;

pub use self::uuid::*;

// =============================================================================
// TRIANGLE INDEX ARITHMETIC
// =============================================================================

/// Index of the vertex following `i` counter-clockwise in a triangle.
///
/// # Examples
///
/// ```rust
/// use bolza::core::util::ccw;
///
/// assert_eq!(ccw(0), 1);
/// assert_eq!(ccw(2), 0);
/// ```
#[inline]
#[must_use]
pub const fn ccw(i: usize) -> usize {
    (i + 1) % 3
}

/// Index of the vertex following `i` clockwise in a triangle.
///
/// # Examples
///
/// ```rust
/// use bolza::core::util::cw;
///
/// assert_eq!(cw(0), 2);
/// assert_eq!(cw(1), 0);
/// ```
#[inline]
#[must_use]
pub const fn cw(i: usize) -> usize {
    (i + 2) % 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ccw_and_cw_are_inverse() {
        for i in 0..3 {
            assert_eq!(cw(ccw(i)), i);
            assert_eq!(ccw(cw(i)), i);
            assert_ne!(ccw(i), i);
            assert_ne!(cw(i), ccw(i));
        }
    }
}
