// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A post-processor that scales the active power of all the loads of a
//! network.

mod diagnostics;
mod scaling;

pub use diagnostics::ScaledLoad;

use crate::ScalerConfig;

/// Multiplies the active power of every load of a [`Network`][crate::Network]
/// by a configured factor.
#[derive(Clone, Debug, Default)]
pub struct LoadPowerScaler {
    config: ScalerConfig,
}

impl LoadPowerScaler {
    /// Creates a new [`LoadPowerScaler`] with the given config.
    pub fn new(config: ScalerConfig) -> Self {
        Self { config }
    }

    /// Returns the config of the scaler.
    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }
}
