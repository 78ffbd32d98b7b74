// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The diagnostic record written for every scaled load.

use std::io::Write;

/// The active power of a load before and after scaling.
///
/// `to` is read back from the terminal after the write, so it reflects any
/// rounding or clamping the terminal applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledLoad<'a> {
    /// The identifier of the load.
    pub id: &'a str,
    /// The active power before scaling.
    pub from: f64,
    /// The active power after scaling.
    pub to: f64,
}

impl std::fmt::Display for ScaledLoad<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Load id: {} Increase load active power, from {} to {}",
            self.id, self.from, self.to
        )
    }
}

impl ScaledLoad<'_> {
    /// Writes the record as a single line to `output`.
    pub(crate) fn write_to(&self, output: &mut impl Write) -> std::io::Result<()> {
        writeln!(output, "{self}")
    }
}
