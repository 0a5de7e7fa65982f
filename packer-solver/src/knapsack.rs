use anyhow::{anyhow, Result};
use packer_structs::core::{Item, Selection};
use std::collections::HashSet;

/// Finds one value-maximizing subset of `items` whose total weight fits in `capacity`.
///
/// The result is the one the top-down recursion over (capacity, number of
/// items left) produces: items are decided last to first, an item is taken
/// whenever taking it is worth at least as much as leaving it (ties favour
/// the later item), and a capacity of zero ends the search even if
/// zero-weight items remain.
///
/// Weights must already be whole weight units. Capacity and weights are
/// divided by their greatest common divisor first, so runtime and memory are
/// [`table_cells`], not `capacity * items.len()`.
pub fn solve(capacity: u32, items: &[Item]) -> Selection {
    let unit = weight_unit(capacity, items);
    let reduced: Vec<Item> = items
        .iter()
        .map(|item| Item::new(item.index, item.weight / unit, item.value))
        .collect();
    let table = ValueTable::build(capacity / unit, &reduced);
    let mut selection = table.reconstruct(capacity / unit, &reduced);
    selection.total_weight *= unit;
    selection
}

/// Number of table entries [`solve`] allocates for this line.
pub fn table_cells(capacity: u32, items: &[Item]) -> u64 {
    let width = (capacity / weight_unit(capacity, items)) as u64 + 1;
    width * (items.len() as u64 + 1)
}

/// Greatest common divisor of the capacity and every weight, never zero.
fn weight_unit(capacity: u32, items: &[Item]) -> u32 {
    let unit = items
        .iter()
        .fold(capacity, |acc, item| gcd(acc, item.weight));
    unit.max(1)
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `best(n, w)`: optimal value over the first `n` items at capacity `w`, flattened row by row.
struct ValueTable {
    width: usize,
    values: Vec<f64>,
}

impl ValueTable {
    fn build(capacity: u32, items: &[Item]) -> Self {
        let width = capacity as usize + 1;
        let mut table = ValueTable {
            width,
            values: vec![0.0; width * (items.len() + 1)],
        };
        for (i, item) in items.iter().enumerate() {
            let n = i + 1;
            // column 0 stays at zero
            for w in 1..width {
                let best = table
                    .take(item, n, w)
                    .unwrap_or_else(|| table.best(n - 1, w));
                table.values[n * width + w] = best;
            }
        }
        table
    }

    fn best(&self, n: usize, w: usize) -> f64 {
        self.values[n * self.width + w]
    }

    /// Value of taking `item` (the `n`-th) at capacity `w`, if taking it wins.
    fn take(&self, item: &Item, n: usize, w: usize) -> Option<f64> {
        let weight = item.weight as usize;
        if weight > w {
            return None;
        }
        let with_item = item.value + self.best(n - 1, w - weight);
        let without_item = self.best(n - 1, w);
        (with_item >= without_item).then_some(with_item)
    }

    /// Walks back from `(capacity, n)`; an exhausted capacity ends the walk.
    fn reconstruct(&self, capacity: u32, items: &[Item]) -> Selection {
        let mut remaining = capacity as usize;
        let mut indices = Vec::new();
        let mut total_weight = 0u32;
        for n in (1..=items.len()).rev() {
            if remaining == 0 {
                break;
            }
            let item = &items[n - 1];
            if self.take(item, n, remaining).is_some() {
                indices.push(item.index);
                remaining -= item.weight as usize;
                total_weight += item.weight;
            }
        }
        indices.reverse();

        Selection {
            indices,
            total_value: self.best(items.len(), capacity as usize),
            total_weight,
        }
    }
}

/// Evaluates a proposed list of item indices against `items` and `capacity`.
pub fn verify_selection(capacity: u32, items: &[Item], indices: &[usize]) -> Result<Selection> {
    let selected: HashSet<usize> = indices.iter().cloned().collect();
    if selected.len() != indices.len() {
        return Err(anyhow!("Duplicate items selected."));
    }

    let mut picked = items
        .iter()
        .filter(|item| selected.contains(&item.index))
        .collect::<Vec<_>>();
    if picked.len() != selected.len() {
        let known: HashSet<usize> = items.iter().map(|item| item.index).collect();
        let mut unknown: Vec<usize> = selected.difference(&known).cloned().collect();
        unknown.sort();
        return Err(anyhow!("Items ({:?}) do not exist", unknown));
    }
    picked.sort_by_key(|item| item.index);

    let total_weight = picked
        .iter()
        .try_fold(0u32, |acc, item| acc.checked_add(item.weight))
        .ok_or_else(|| anyhow!("Total weight overflowed"))?;
    if total_weight > capacity {
        return Err(anyhow!(
            "Total weight ({}) exceeded max weight ({})",
            total_weight,
            capacity
        ));
    }

    Ok(Selection {
        indices: picked.iter().map(|item| item.index).collect(),
        total_value: picked.iter().map(|item| item.value).sum(),
        total_weight,
    })
}
