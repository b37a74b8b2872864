use std::io::{Result, Write};

use algebra::Power;
use nu_ansi_term::Color;

/// One line of output: `power` applied to `input` gave `result`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub power: Power,
    pub input: i32,
    pub result: i32,
}

pub struct Plain;

impl Plain {
    pub fn print_evaluation(w: &mut dyn Write, use_color: bool, evaluation: &Evaluation) -> Result<()> {
        let Evaluation {
            power,
            input,
            result,
        } = evaluation;

        if use_color {
            writeln!(
                w,
                "The {power} of {input} is {}",
                Color::Green.bold().paint(result.to_string())
            )
        } else {
            writeln!(w, "The {power} of {input} is {result}")
        }
    }
}
