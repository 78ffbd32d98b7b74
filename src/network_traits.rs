// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the traits that need to be implemented by the types
//! that represent a network, its loads and their terminals.

use crate::Error;

/**
This trait needs to be implemented by the type that represents a network.

Read more about why this is necessary [here][crate#the-network-load-and-terminal-traits].

<details>
<summary>Example implementation for a host model that keeps its loads in a
sparse vector:</summary>

```ignore
impl load_power_scaler::Network for grid_model::Network {
    type Load = grid_model::Load;

    fn loads(&mut self) -> impl Iterator<Item = Option<&mut grid_model::Load>> {
        self.loads.iter_mut().map(|slot| slot.as_mut())
    }
}
```

</details>
*/
pub trait Network {
    /// The type of the loads in the network.
    type Load: Load;

    /// Returns the loads of the network, in the order the network keeps them.
    ///
    /// Entries that are `None` stand for empty slots in the host's load
    /// collection and are skipped.
    fn loads(&mut self) -> impl Iterator<Item = Option<&mut Self::Load>>;
}

/**
This trait needs to be implemented by the type that represents a load.

<details>
<summary>Example implementation:</summary>

```ignore
impl load_power_scaler::Load for grid_model::Load {
    type Terminal = grid_model::Terminal;

    fn id(&self) -> &str {
        &self.id
    }

    fn terminal(&mut self) -> &mut grid_model::Terminal {
        &mut self.terminal
    }
}
```

</details>
*/
pub trait Load {
    /// The type of the terminal the load is connected through.
    type Terminal: Terminal;

    /// Returns the identifier of the load.
    fn id(&self) -> &str;
    /// Returns the terminal of the load.
    fn terminal(&mut self) -> &mut Self::Terminal;
}

/**
This trait needs to be implemented by the type that represents the terminal
of a load.

Host models whose accessors can fail should report the failure as an
[`Error::terminal_access`] error, which is passed through to the caller
unchanged.

<details>
<summary>Example implementation:</summary>

```ignore
impl load_power_scaler::Terminal for grid_model::Terminal {
    fn active_power(&self) -> Result<f64, load_power_scaler::Error> {
        self.p.ok_or_else(|| {
            load_power_scaler::Error::terminal_access(format!(
                "Terminal {} has no active power.",
                self.id
            ))
        })
    }

    fn set_active_power(&mut self, value: f64) -> Result<(), load_power_scaler::Error> {
        self.p = Some(value);
        Ok(())
    }
}
```

</details>
*/
pub trait Terminal {
    /// Returns the active power at the terminal.
    fn active_power(&self) -> Result<f64, Error>;
    /// Sets the active power at the terminal.
    fn set_active_power(&mut self, value: f64) -> Result<(), Error>;
}
