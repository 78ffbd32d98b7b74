// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for scaling the active power of the loads of a [`Network`].

use std::io::Write;

use crate::{Error, Load, Network, Terminal};

use super::{LoadPowerScaler, ScaledLoad};

/// Load scaling.
impl LoadPowerScaler {
    /// Multiplies the active power of every load in the `network` by the
    /// configured `percent`, writing diagnostics to standard output if
    /// enabled.
    ///
    /// Returns a `MissingNetwork` error without doing anything if `network`
    /// is `None`.  Empty slots in the load collection are skipped.  The first
    /// error from a terminal stops the pass and is returned as is, leaving the
    /// loads visited before it already scaled.
    pub fn scale<N: Network>(&self, network: Option<&mut N>) -> Result<(), Error> {
        if self.config.debug {
            self.scale_with_output(network, &mut std::io::stdout())
        } else {
            self.scale_with_output(network, &mut std::io::sink())
        }
    }

    /// Same as [`scale`][LoadPowerScaler::scale], but writes the diagnostic
    /// lines to `output`.
    ///
    /// Failing to write a diagnostic line is logged and doesn't stop the pass.
    pub fn scale_with_output<N: Network>(
        &self,
        network: Option<&mut N>,
        output: &mut impl Write,
    ) -> Result<(), Error> {
        let network =
            network.ok_or_else(|| Error::missing_network("No network to scale the loads of."))?;
        let percent = self.config.percent;

        for load in network.loads() {
            let Some(load) = load else {
                tracing::trace!("Skipping empty load slot.");
                continue;
            };
            self.scale_load(load, percent, output)?;
        }

        Ok(())
    }

    fn scale_load<L: Load>(
        &self,
        load: &mut L,
        percent: f64,
        output: &mut impl Write,
    ) -> Result<(), Error> {
        let terminal = load.terminal();
        let from = terminal.active_power()?;
        let target = from * percent;
        terminal.set_active_power(target)?;

        tracing::debug!(
            load_id = load.id(),
            from,
            to = target,
            "Scaled load active power."
        );

        if self.config.debug {
            // Read back, the terminal may not store the value as written.
            let to = load.terminal().active_power()?;
            let scaled = ScaledLoad {
                id: load.id(),
                from,
                to,
            };
            if let Err(e) = scaled.write_to(output) {
                tracing::warn!("Unable to write diagnostics for load {}: {e}", scaled.id);
            }
        }

        Ok(())
    }
}
