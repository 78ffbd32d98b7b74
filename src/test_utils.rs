// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests in the crate.
//!
//! - the `TestNetwork`, `TestLoad` and `TestTerminal` types, which implement
//!   the `Network`, `Load` and `Terminal` traits respectively.
//! - the `TestNetworkBuilder`, which can declaratively build networks with
//!   misbehaving terminals and empty slots for use in tests.

use crate::{Error, Load, Network, Terminal};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestTerminal {
    p: f64,
    max_p: Option<f64>,
    fail_reads: bool,
    fail_writes: bool,
}

impl TestTerminal {
    pub(crate) fn new(p: f64) -> Self {
        TestTerminal {
            p,
            max_p: None,
            fail_reads: false,
            fail_writes: false,
        }
    }

    pub(crate) fn p(&self) -> f64 {
        self.p
    }
}

impl Terminal for TestTerminal {
    fn active_power(&self) -> Result<f64, Error> {
        if self.fail_reads {
            return Err(Error::terminal_access("Can't read active power."));
        }
        Ok(self.p)
    }

    fn set_active_power(&mut self, value: f64) -> Result<(), Error> {
        if self.fail_writes {
            return Err(Error::terminal_access("Can't write active power."));
        }
        self.p = match self.max_p {
            Some(max_p) => value.min(max_p),
            None => value,
        };
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestLoad(String, TestTerminal);

impl Load for TestLoad {
    type Terminal = TestTerminal;

    fn id(&self) -> &str {
        &self.0
    }

    fn terminal(&mut self) -> &mut TestTerminal {
        &mut self.1
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct TestNetwork {
    loads: Vec<Option<TestLoad>>,
}

impl TestNetwork {
    /// Returns the active power of the load with the given `id`.
    pub(crate) fn active_power(&self, id: &str) -> Option<f64> {
        self.loads
            .iter()
            .flatten()
            .find(|load| load.0 == id)
            .map(|load| load.1.p())
    }
}

impl Network for TestNetwork {
    type Load = TestLoad;

    fn loads(&mut self) -> impl Iterator<Item = Option<&mut TestLoad>> {
        self.loads.iter_mut().map(|slot| slot.as_mut())
    }
}

/// A builder for creating test networks easily.
pub(crate) struct TestNetworkBuilder {
    loads: Vec<Option<TestLoad>>,
}

impl TestNetworkBuilder {
    /// Creates a new `TestNetworkBuilder`.
    pub(crate) fn new() -> Self {
        TestNetworkBuilder { loads: Vec::new() }
    }

    fn add_load(mut self, id: &str, terminal: TestTerminal) -> Self {
        self.loads.push(Some(TestLoad(id.to_string(), terminal)));
        self
    }

    /// Adds a load with a well-behaved terminal.
    pub(crate) fn load(self, id: &str, p: f64) -> Self {
        self.add_load(id, TestTerminal::new(p))
    }

    /// Adds a load whose terminal clamps written values to `max_p`.
    pub(crate) fn clamped_load(self, id: &str, p: f64, max_p: f64) -> Self {
        self.add_load(
            id,
            TestTerminal {
                max_p: Some(max_p),
                ..TestTerminal::new(p)
            },
        )
    }

    /// Adds a load whose terminal can't be read from.
    pub(crate) fn unreadable_load(self, id: &str, p: f64) -> Self {
        self.add_load(
            id,
            TestTerminal {
                fail_reads: true,
                ..TestTerminal::new(p)
            },
        )
    }

    /// Adds a load whose terminal can't be written to.
    pub(crate) fn unwritable_load(self, id: &str, p: f64) -> Self {
        self.add_load(
            id,
            TestTerminal {
                fail_writes: true,
                ..TestTerminal::new(p)
            },
        )
    }

    /// Adds an empty slot to the load collection.
    pub(crate) fn empty_slot(mut self) -> Self {
        self.loads.push(None);
        self
    }

    /// Builds the network.
    pub(crate) fn build(self) -> TestNetwork {
        TestNetwork { loads: self.loads }
    }
}

/// A diagnostic output sink that rejects every write.
pub(crate) struct BrokenOutput;

impl std::io::Write for BrokenOutput {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "output closed",
        ))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
