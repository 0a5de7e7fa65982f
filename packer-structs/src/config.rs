use anyhow::Result;
use packer_utils::fixed_scale;
use serde::{Deserialize, Serialize};

/// What a batch does when one line is rejected.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// The first bad line aborts the whole run.
    #[default]
    Abort,
    /// Bad lines are reported and skipped.
    Isolate,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PackerConfig {
    pub min_weight_limit: i64,
    pub max_weight_limit: i64,
    /// Fractional digits accepted in item weights.
    pub weight_precision: u32,
    pub empty_marker: String,
    pub batch_policy: BatchPolicy,
    /// Largest solver table a single line may allocate, in `f64` entries.
    pub max_table_cells: u64,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            min_weight_limit: 0,
            max_weight_limit: 100,
            weight_precision: 2,
            empty_marker: "-".to_string(),
            batch_policy: BatchPolicy::Abort,
            max_table_cells: 20_000_000,
        }
    }
}

impl PackerConfig {
    pub fn weight_scale(&self) -> Result<u32> {
        fixed_scale(self.weight_precision)
    }

    pub fn accepts_weight_limit(&self, weight_limit: i64) -> bool {
        (self.min_weight_limit..=self.max_weight_limit).contains(&weight_limit)
    }
}
