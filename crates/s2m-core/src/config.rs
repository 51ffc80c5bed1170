//! Output configuration for the MatPlanWDM emitter.
//!
//! Every value here is a constant of the target format as the planning tool
//! expects it.  `MatPlanConfig::default()` reproduces those constants; the
//! application may override individual fields from a YAML file.

use crate::{CoreError, CoreResult};

// ── MatchStrategy ─────────────────────────────────────────────────────────────

/// How a link endpoint name is matched against node names.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchStrategy {
    /// The endpoint need only occur somewhere inside the node name.
    /// `"Berlin"` matches a node named `"Berlin-Mitte"`.
    #[default]
    Contains,
    /// The endpoint must equal the node name.
    Exact,
}

impl MatchStrategy {
    /// Does `needle` (a link endpoint) identify the node called `name`?
    #[inline]
    pub fn matches(self, needle: &str, name: &str) -> bool {
        match self {
            MatchStrategy::Contains => contains_match(needle, name),
            MatchStrategy::Exact => needle == name,
        }
    }
}

/// Substring containment: `needle` occurs anywhere in `name`.
///
/// An empty needle matches every name.
#[inline]
pub fn contains_match(needle: &str, name: &str) -> bool {
    name.contains(needle)
}

// ── MatPlanConfig ─────────────────────────────────────────────────────────────

/// Fixed attribute values written into the MatPlanWDM document.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatPlanConfig {
    /// DTD referenced by the `<!DOCTYPE>` line, relative to the output file.
    pub dtd_path: String,

    /// Transmitter/receiver count for nodes in the first half of the list.
    pub low_capacity: u32,

    /// Transmitter/receiver count for the remaining nodes.
    pub high_capacity: u32,

    /// `<wc number=..>` on every node.
    pub wavelength_converters: u32,

    /// `numberWavelengths` on every fibre.
    pub wavelengths_per_fibre: u32,

    /// `<lightpathCapacity value=..>` in the trailer.
    pub lightpath_capacity: u32,

    pub node_level: u32,
    pub node_timezone: i32,

    /// Written verbatim into `nodePopulation`.  The planning tool treats
    /// `#POP#` as "unknown".
    pub node_population: String,

    /// Endpoint → node resolution policy.
    pub match_strategy: MatchStrategy,
}

impl Default for MatPlanConfig {
    fn default() -> Self {
        Self {
            dtd_path:              "../dtd/vtDesign.dtd".to_owned(),
            low_capacity:          10,
            high_capacity:         10_000,
            wavelength_converters: 0,
            wavelengths_per_fibre: 40,
            lightpath_capacity:    40,
            node_level:            1,
            node_timezone:         1,
            node_population:       "#POP#".to_owned(),
            match_strategy:        MatchStrategy::Contains,
        }
    }
}

impl MatPlanConfig {
    /// Reject combinations the planning tool cannot load.
    pub fn validate(&self) -> CoreResult<()> {
        if self.dtd_path.trim().is_empty() {
            return Err(CoreError::Config("dtd_path must not be empty".to_owned()));
        }
        if self.low_capacity > self.high_capacity {
            return Err(CoreError::Config(format!(
                "low_capacity ({}) exceeds high_capacity ({})",
                self.low_capacity, self.high_capacity
            )));
        }
        Ok(())
    }

    /// Transmitter/receiver capacity for the node at 0-based `index` in a list
    /// of `count` nodes.
    ///
    /// Purely positional: positions `0..=(count-1)/2` get `low_capacity`, the
    /// rest get `high_capacity`.  With an even count the low tier is the
    /// first half exactly (`count = 4` → positions 0, 1); with an odd count
    /// it includes the middle node.
    pub fn capacity_tier(&self, index: usize, count: usize) -> u32 {
        if index <= count.saturating_sub(1) / 2 {
            self.low_capacity
        } else {
            self.high_capacity
        }
    }
}
