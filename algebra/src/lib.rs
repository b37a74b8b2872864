//! Square and cube of `i32` values.
//!
//! The two core functions, [`square`] and [`cube`], are pure: the output
//! depends only on the input, and there is no shared state, so they can be
//! called from any number of threads.
//!
//! # Overflow
//!
//! `i32` is fixed-width, so large inputs overflow. [`square`] and [`cube`]
//! wrap around in two's complement, in debug and release builds alike. If you
//! need something else, pick a policy explicitly:
//!
//! * `checked_*` functions return [`Error::Overflow`] instead of wrapping.
//! * `saturating_*` functions clamp to [`i32::MIN`] or [`i32::MAX`].
//! * [`Power::apply`] selects the function from a [`Power`] and an
//!   [`Overflow`] value at runtime.
//!
//! # Example
//! ```
#![doc = include_str!("../examples/print_cubes.rs")]
//! ```

// deny in CI, only warn here
#![warn(clippy::all, clippy::pedantic, missing_docs)]

mod error;
mod power;

// Documented at the definition site so cargo doc picks it up
pub use error::{Error, Result};

// Documented at the definition site so cargo doc picks it up
pub use power::Power;

/// How to handle a result that does not fit in an `i32`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Wrap around in two's complement. What [`square`] and [`cube`] do.
    #[default]
    Wrapping,

    /// Clamp to [`i32::MIN`] or [`i32::MAX`], keeping the sign of the exact
    /// result.
    Saturating,

    /// Fail with [`Error::Overflow`].
    Checked,
}

/// Returns `number * number`.
///
/// Overflow wraps around, see the [crate docs](crate#overflow).
///
/// ```
/// assert_eq!(algebra::square(-3), 9);
/// ```
#[must_use]
pub const fn square(number: i32) -> i32 {
    number.wrapping_mul(number)
}

/// Returns `number * number * number`.
///
/// Overflow wraps around, see the [crate docs](crate#overflow).
///
/// ```
/// assert_eq!(algebra::cube(-3), -27);
/// ```
#[must_use]
pub const fn cube(number: i32) -> i32 {
    number.wrapping_mul(number).wrapping_mul(number)
}

/// Like [`square`] but fails instead of wrapping.
///
/// # Errors
///
/// [`Error::Overflow`] if `number * number` does not fit in an `i32`.
pub fn checked_square(number: i32) -> Result<i32> {
    number
        .checked_mul(number)
        .ok_or(Error::Overflow {
            power: Power::Square,
            input: number,
        })
}

/// Like [`cube`] but fails instead of wrapping.
///
/// # Errors
///
/// [`Error::Overflow`] if `number * number * number` does not fit in an
/// `i32`.
pub fn checked_cube(number: i32) -> Result<i32> {
    number
        .checked_mul(number)
        .and_then(|squared| squared.checked_mul(number))
        .ok_or(Error::Overflow {
            power: Power::Cube,
            input: number,
        })
}

/// Like [`square`] but clamps to [`i32::MAX`] instead of wrapping.
#[must_use]
pub const fn saturating_square(number: i32) -> i32 {
    number.saturating_mul(number)
}

/// Like [`cube`] but clamps to [`i32::MIN`] or [`i32::MAX`] instead of
/// wrapping.
#[must_use]
pub const fn saturating_cube(number: i32) -> i32 {
    // A saturated square is i32::MAX, and multiplying that by `number` again
    // saturates towards the sign of `number`, which is the sign of the cube.
    number.saturating_mul(number).saturating_mul(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_sign() {
        assert_eq!(square(0), 0);
        assert_eq!(cube(0), 0);
        assert_eq!(square(-3), 9);
        assert_eq!(cube(-3), -27);
    }

    #[test]
    #[allow(clippy::cast_possible_truncation)]
    fn wrapping_matches_wide_arithmetic() {
        for n in [i32::MIN, -46_341, -1291, -1290, 46_340, 46_341, 1290, 1291, i32::MAX] {
            let wide = i64::from(n);
            assert_eq!(square(n), (wide * wide) as i32);
            assert_eq!(cube(n), wide.wrapping_mul(wide).wrapping_mul(wide) as i32);
        }
    }

    #[test]
    fn square_boundary() {
        // 46340² fits, 46341² does not
        assert_eq!(checked_square(46_340), Ok(2_147_395_600));
        assert_eq!(
            checked_square(-46_341),
            Err(Error::Overflow {
                power: Power::Square,
                input: -46_341
            })
        );
        assert_eq!(saturating_square(-46_341), i32::MAX);
    }

    #[test]
    fn cube_boundary() {
        // 1290³ fits, 1291³ does not
        assert_eq!(checked_cube(1290), Ok(2_146_689_000));
        assert_eq!(checked_cube(-1290), Ok(-2_146_689_000));
        assert!(checked_cube(1291).is_err());
        assert!(checked_cube(-1291).is_err());
        assert_eq!(saturating_cube(1291), i32::MAX);
        assert_eq!(saturating_cube(-1291), i32::MIN);
        assert_eq!(saturating_cube(i32::MIN), i32::MIN);
    }

    #[test]
    fn default_policy_is_wrapping() {
        assert_eq!(Overflow::default(), Overflow::Wrapping);
    }
}
