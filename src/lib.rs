// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Load Power Scaler

This is a library for post-processing power-grid network models after they
have been imported.  Its main post-processor, the [`LoadPowerScaler`],
multiplies the active power of every load in a network by a configured factor,
`1.01` by default, and optionally writes one diagnostic line per load.

## The `Network`, `Load` and `Terminal` traits

The network is owned by the importer that loaded it, and `load_power_scaler`
doesn't know about the types the importer uses for it.  It instead interacts
with them through traits.

Therefore, to be usable with this library, the network, load and terminal
types must implement the [`Network`], [`Load`] and [`Terminal`] traits,
respectively.  Check out the documentation for these traits for sample
implementations.

## Scaling

[`scale`][LoadPowerScaler::scale] walks the loads of the network once, in the
order the network returns them, and for each load:

- reads the active power `p` of its terminal,
- writes `p * percent` back to the same terminal,
- if [`debug`][ScalerConfig::debug] is enabled, writes a line like
  `Load id: L1 Increase load active power, from 100 to 101`, with the new
  value read back from the terminal.

Empty slots in the load collection are skipped.  If no network is given, an
[`Error`] of kind [`ErrorKind::MissingNetwork`] is returned before anything is
touched.  Errors from a terminal stop the pass and are returned unchanged.
Failing to write a diagnostic line is only logged.

## Post-processor chains

A [`PostProcessorChain`] runs several [`PostProcessor`]s on a network in
order, stopping at the first failure.
*/

mod config;
pub use config::{ScalerConfig, DEFAULT_PERCENT};

mod scaler;
pub use scaler::{LoadPowerScaler, ScaledLoad};

mod post_processor;
pub use post_processor::{PostProcessor, PostProcessorChain};

mod network_traits;
pub use network_traits::{Load, Network, Terminal};

mod error;
pub use error::{Error, ErrorKind};

#[cfg(test)]
mod test_utils;
