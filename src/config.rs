// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for the `LoadPowerScaler`.

/// The multiplier applied to every load's active power when no other value
/// is configured.
pub const DEFAULT_PERCENT: f64 = 1.01;

/// Configuration options for the `LoadPowerScaler`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalerConfig {
    /// The multiplier applied to the active power of every load.
    ///
    /// No range checks are performed, so values below `1.0` reduce the
    /// consumption, `1.0` keeps it and values above `1.0` increase it.
    pub percent: f64,

    /// Whether to write one diagnostic line for every load that gets scaled.
    pub debug: bool,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            percent: DEFAULT_PERCENT,
            debug: true,
        }
    }
}

impl ScalerConfig {
    /// Returns a copy of the config with the given `percent`.
    pub fn with_percent(self, percent: f64) -> Self {
        Self { percent, ..self }
    }

    /// Returns a copy of the config with diagnostics turned on or off.
    pub fn with_debug(self, debug: bool) -> Self {
        Self { debug, ..self }
    }
}
