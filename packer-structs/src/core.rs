use crate::serializable_struct;
use serde::{Deserialize, Serialize};

serializable_struct! {
    /// A candidate item. `weight` is in fixed-point weight units
    /// (see [`crate::config::PackerConfig::weight_precision`]).
    Item {
        index: usize,
        weight: u32,
        value: f64,
    }
}

serializable_struct! {
    /// One line of work: a weight limit as written plus its items in input order.
    LineTask {
        weight_limit: i64,
        weight_scale: u32,
        items: Vec<Item>,
    }
}

serializable_struct! {
    /// Ascending item indices of one optimal packing.
    Selection {
        indices: Vec<usize>,
        total_value: f64,
        total_weight: u32,
    }
}

impl Item {
    pub fn new(index: usize, weight: u32, value: f64) -> Self {
        Self {
            index,
            weight,
            value,
        }
    }
}

impl LineTask {
    /// Weight limit converted into weight units, `None` when negative or overflowing.
    pub fn capacity(&self) -> Option<u32> {
        u32::try_from(self.weight_limit)
            .ok()?
            .checked_mul(self.weight_scale)
    }
}

impl Selection {
    pub fn empty() -> Self {
        Self {
            indices: Vec::new(),
            total_value: 0.0,
            total_weight: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
