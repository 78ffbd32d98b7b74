// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Post-processors that an importer runs on a network after loading it, and
//! a chain for running several of them in order.

use crate::{Error, LoadPowerScaler, Network};

/// A step that modifies a freshly imported network in place.
pub trait PostProcessor<N: Network> {
    /// Returns the name the post-processor is registered under.
    fn name(&self) -> &str;
    /// Applies the post-processor to `network`.
    fn process(&self, network: Option<&mut N>) -> Result<(), Error>;
}

impl<N: Network> PostProcessor<N> for LoadPowerScaler {
    fn name(&self) -> &str {
        "increase-load-active-power"
    }

    fn process(&self, network: Option<&mut N>) -> Result<(), Error> {
        self.scale(network)
    }
}

/// An ordered list of post-processors.
pub struct PostProcessorChain<N: Network> {
    processors: Vec<Box<dyn PostProcessor<N>>>,
}

impl<N: Network> Default for PostProcessorChain<N> {
    fn default() -> Self {
        Self {
            processors: Vec::new(),
        }
    }
}

impl<N: Network> PostProcessorChain<N> {
    /// Creates an empty [`PostProcessorChain`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a post-processor to the end of the chain.
    pub fn push(&mut self, processor: impl PostProcessor<N> + 'static) -> &mut Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Returns the names of the post-processors, in the order they run.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.processors.iter().map(|p| p.name())
    }

    /// Returns the number of post-processors in the chain.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Returns true if the chain has no post-processors.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Runs all post-processors on `network`, in order.
    ///
    /// Returns a `MissingNetwork` error before running anything if `network`
    /// is `None`, and stops at the first post-processor that fails.
    pub fn run(&self, network: Option<&mut N>) -> Result<(), Error> {
        let network =
            network.ok_or_else(|| Error::missing_network("No network to post-process."))?;

        for processor in &self.processors {
            tracing::debug!("Running post-processor {}.", processor.name());
            processor.process(Some(&mut *network)).map_err(|e| {
                tracing::error!("Post-processor {} failed: {e}", processor.name());
                e
            })?;
        }

        Ok(())
    }
}
