use crate::{Overflow, Result};

/// An integer power this crate knows how to compute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Power {
    /// `n ↦ n²`
    Square,

    /// `n ↦ n³`
    Cube,
}

impl Power {
    /// The exponent, `2` for [`Power::Square`] and `3` for [`Power::Cube`].
    #[must_use]
    pub const fn exponent(self) -> u32 {
        match self {
            Self::Square => 2,
            Self::Cube => 3,
        }
    }

    /// Lowercase name, as used in messages: `"square"` or `"cube"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Cube => "cube",
        }
    }

    /// Raises `n` to this power, handling overflow according to `overflow`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Overflow`] if `overflow` is
    /// [`Overflow::Checked`] and the result does not fit in an `i32`. The
    /// other policies never fail.
    pub fn apply(self, n: i32, overflow: Overflow) -> Result<i32> {
        Ok(match (self, overflow) {
            (Self::Square, Overflow::Wrapping) => crate::square(n),
            (Self::Square, Overflow::Saturating) => crate::saturating_square(n),
            (Self::Square, Overflow::Checked) => crate::checked_square(n)?,
            (Self::Cube, Overflow::Wrapping) => crate::cube(n),
            (Self::Cube, Overflow::Saturating) => crate::saturating_cube(n),
            (Self::Cube, Overflow::Checked) => crate::checked_cube(n)?,
        })
    }
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
