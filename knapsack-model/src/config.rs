use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Settings of one `solve` run. Every field may be omitted from a config
/// file; command-line flags are applied on top.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Parse item values as floating point numbers.
    pub float_values: bool,
    /// Reconstruct the placement, not just the optimal value.
    pub placement: bool,
    /// Drop oversized items and unbind inexhaustible counts before solving.
    pub normalize: bool,
    /// Print the solution as JSON instead of text.
    pub json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            float_values: false,
            placement: true,
            normalize: true,
            json: false,
        }
    }
}

impl RunConfig {
    /// Starts from the defaults and applies whatever keys `overrides` sets.
    /// Keys with a non-boolean value are ignored.
    pub fn initialize(overrides: &Option<Map<String, Value>>) -> Self {
        let mut c = Self::default();
        if let Some(m) = overrides {
            if let Some(v) = m.get("float_values").and_then(|v| v.as_bool()) { c.float_values = v; }
            if let Some(v) = m.get("placement").and_then(|v| v.as_bool()) { c.placement = v; }
            if let Some(v) = m.get("normalize").and_then(|v| v.as_bool()) { c.normalize = v; }
            if let Some(v) = m.get("json").and_then(|v| v.as_bool()) { c.json = v; }
        }
        c
    }
}
