use thiserror::Error;

use crate::Power;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
/// Enumerates all errors that can currently occur within this crate.
pub enum Error {
    /// The exact result of raising `input` to `power` does not fit in an
    /// `i32`. Only returned by the checked functions, or by
    /// [`Power::apply`] with [`crate::Overflow::Checked`].
    #[error("the {power} of {input} overflows i32")]
    Overflow {
        /// The operation that overflowed.
        power: Power,
        /// The input that made it overflow.
        input: i32,
    },
}

/// Shorthand for [`std::result::Result<T, algebra::Error>`].
pub type Result<T> = std::result::Result<T, Error>;
