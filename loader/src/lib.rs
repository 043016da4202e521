//! Turns scenario files into things the simulator can run.
//! The built-in scenarios are baked into the binary.

pub mod deserialize;
pub mod prefabs; // prefabs::cobalt(pos)
pub use deserialize::*;

#[macro_use]
extern crate lazy_static;

use anyhow::anyhow;
use log::debug;
use simulator::Setup;

/// Every built-in scenario as (key, JSON5 source). The first one is the default.
pub const BUILTIN: &[(&str, &str)] = &[
    ("orbital", include_str!("../scenarios/orbital.json5")),
    ("drift", include_str!("../scenarios/drift.json5")),
];

/// Load a built-in scenario by key.
pub fn builtin(key: &str) -> anyhow::Result<Setup> {
    let (_, contents) = BUILTIN
        .iter()
        .find(|(k, _)| *k == key)
        .ok_or_else(|| anyhow!("no built-in scenario called {}", key))?;
    let setup = load(contents)?;
    debug!(
        "Loaded scenario \"{}\" with {} planets",
        setup.name,
        setup.planets.len()
    );
    Ok(setup)
}

/// Load every built-in scenario, in order.
pub fn all_builtin() -> anyhow::Result<Vec<Setup>> {
    BUILTIN.iter().map(|(key, _)| builtin(key)).collect()
}
