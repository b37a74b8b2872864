use std::io::IsTerminal;

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
#[value(rename_all = "lower")]
pub enum Operation {
    /// n * n
    Square,

    /// n * n * n
    Cube,
}

impl From<Operation> for algebra::Power {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::Square => Self::Square,
            Operation::Cube => Self::Cube,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
#[value(rename_all = "lower")]
pub enum OverflowPolicy {
    /// Wrap around in two's complement.
    Wrapping,

    /// Clamp to the smallest or largest i32.
    Saturating,

    /// Exit with an error.
    Checked,
}

impl From<OverflowPolicy> for algebra::Overflow {
    fn from(policy: OverflowPolicy) -> Self {
        match policy {
            OverflowPolicy::Wrapping => Self::Wrapping,
            OverflowPolicy::Saturating => Self::Saturating,
            OverflowPolicy::Checked => Self::Checked,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
#[value(rename_all = "lower")]
pub enum Color {
    /// Colors will be used if stdout is a terminal. If you pipe the output to a
    /// file, colors will be disabled by default.
    Auto,

    /// Colors will never be used.
    Never,

    /// Colors will always be used.
    Always,
}

impl Color {
    pub fn active(self) -> bool {
        match self {
            Self::Auto => std::io::stdout().is_terminal(), // Results only ever go to stdout
            Self::Never => false,
            Self::Always => true,
        }
    }
}
