use crate::PackError;
use packer_solver::{solve, table_cells};
use packer_structs::{
    config::PackerConfig,
    core::{Item, LineTask, Selection},
};

/// Validates the weight limit of `task` and converts it into weight units.
pub fn checked_capacity(task: &LineTask, config: &PackerConfig) -> Result<u32, PackError> {
    let violation = || PackError::ConstraintViolation {
        weight_limit: task.weight_limit,
        min: config.min_weight_limit,
        max: config.max_weight_limit,
    };
    if !config.accepts_weight_limit(task.weight_limit) {
        return Err(violation());
    }
    task.capacity().ok_or_else(violation)
}

/// Solves `items` at an already validated `capacity`, refusing tables over `max_table_cells`.
pub fn checked_solve(
    capacity: u32,
    items: &[Item],
    config: &PackerConfig,
) -> Result<Selection, PackError> {
    let cells = table_cells(capacity, items);
    if cells > config.max_table_cells {
        return Err(PackError::TableTooLarge {
            cells,
            limit: config.max_table_cells,
        });
    }
    Ok(solve(capacity, items))
}

/// Validates the weight limit of `task` and solves it.
pub fn process_line(task: &LineTask, config: &PackerConfig) -> Result<Selection, PackError> {
    let capacity = checked_capacity(task, config)?;
    checked_solve(capacity, &task.items, config)
}

pub fn format_selection(selection: &Selection, empty_marker: &str) -> String {
    if selection.is_empty() {
        return empty_marker.to_string();
    }
    selection
        .indices
        .iter()
        .map(|index| index.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
