use packer_solver::{solve, table_cells, verify_selection};
use packer_structs::core::Item;
use proptest::prelude::*;

fn items(specs: &[(u32, f64)]) -> Vec<Item> {
    specs
        .iter()
        .enumerate()
        .map(|(i, &(weight, value))| Item::new(i + 1, weight, value))
        .collect()
}

fn brute_force_best(capacity: u32, items: &[Item]) -> f64 {
    let mut best = 0.0;
    for mask in 0u32..(1 << items.len()) {
        let (weight, value) = items
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .fold((0u32, 0.0), |(w, v), (_, item)| (w + item.weight, v + item.value));
        if weight <= capacity && value > best {
            best = value;
        }
    }
    best
}

#[test]
fn test_empty_items() {
    let selection = solve(50, &[]);
    assert!(selection.is_empty());
    assert_eq!(selection.total_value, 0.0);
}

#[test]
fn test_zero_capacity() {
    let selection = solve(0, &items(&[(1, 10.0), (2, 20.0)]));
    assert!(selection.is_empty());
}

#[test]
fn test_zero_capacity_ignores_zero_weight_items() {
    let selection = solve(0, &items(&[(0, 10.0)]));
    assert!(selection.is_empty());
}

#[test]
fn test_zero_weight_item_below_capacity() {
    let selection = solve(1, &items(&[(0, 5.0), (1, 3.0)]));
    assert_eq!(selection.indices, vec![1]);
    assert_eq!(selection.total_value, 5.0);
}

#[test]
fn test_common_weight_unit_shrinks_table() {
    let line = items(&[(1_000_000, 1.0), (2_000_000, 1.0)]);
    assert_eq!(table_cells(100_000_000, &line), 101 * 3);
    assert_eq!(table_cells(7, &items(&[(2, 1.0)])), 8 * 2);
    assert_eq!(table_cells(0, &[]), 1);

    let selection = solve(100_000_000, &line);
    assert_eq!(selection.indices, vec![1, 2]);
    assert_eq!(selection.total_weight, 3_000_000);
}

#[test]
fn test_common_weight_unit_keeps_tie_break() {
    let selection = solve(500, &items(&[(500, 10.0), (500, 10.0)]));
    assert_eq!(selection.indices, vec![2]);
    assert_eq!(selection.total_weight, 500);
}

#[test]
fn test_nothing_fits() {
    let selection = solve(8, &items(&[(15, 34.0)]));
    assert!(selection.is_empty());
    assert_eq!(selection.total_weight, 0);
}

#[test]
fn test_picks_best_pair() {
    // weights/values from the classic example line with limit 75, in hundredths
    let line = items(&[
        (8531, 29.0),
        (1455, 74.0),
        (398, 16.0),
        (2624, 55.0),
        (6369, 52.0),
        (7625, 75.0),
        (6002, 74.0),
        (9318, 35.0),
        (8995, 78.0),
    ]);
    let selection = solve(7500, &line);
    assert_eq!(selection.indices, vec![2, 7]);
    assert_eq!(selection.total_value, 148.0);
    assert_eq!(selection.total_weight, 7457);
}

#[test]
fn test_tie_favours_later_item() {
    let selection = solve(5, &items(&[(5, 10.0), (5, 10.0)]));
    assert_eq!(selection.indices, vec![2]);

    let selection = solve(10, &items(&[(4, 6.0), (6, 6.0), (10, 12.0)]));
    assert_eq!(selection.indices, vec![3]);
}

#[test]
fn test_large_line() {
    let mut specs = vec![(10, 1.0); 8];
    specs.extend(vec![(5, 10.0); 8]);
    let selection = solve(40, &items(&specs));
    assert_eq!(selection.indices, (9..=16).collect::<Vec<_>>());
    assert_eq!(selection.total_value, 80.0);
    assert_eq!(selection.total_weight, 40);
}

#[test]
fn test_fractional_values() {
    let selection = solve(3, &items(&[(2, 0.5), (1, 0.25), (1, 0.375)]));
    assert_eq!(selection.indices, vec![1, 3]);
    assert_eq!(selection.total_value, 0.875);
}

#[test]
fn test_verify_selection() {
    let line = items(&[(3, 5.0), (4, 6.0), (2, 3.0)]);
    let selection = verify_selection(7, &line, &[3, 1]).unwrap();
    assert_eq!(selection.indices, vec![1, 3]);
    assert_eq!(selection.total_value, 8.0);
    assert_eq!(selection.total_weight, 5);

    assert!(verify_selection(7, &line, &[1, 1]).is_err());
    assert!(verify_selection(7, &line, &[4]).is_err());
    assert!(verify_selection(6, &line, &[1, 2]).is_err());
    assert!(verify_selection(0, &line, &[]).unwrap().is_empty());
}

fn item_specs() -> impl Strategy<Value = Vec<(u32, f64)>> {
    prop::collection::vec((1u32..=20, (0u32..=200).prop_map(|v| v as f64 / 4.0)), 0..=10)
}

proptest! {
    #[test]
    fn selection_fits(capacity in 0u32..=60, specs in item_specs()) {
        let line = items(&specs);
        let selection = solve(capacity, &line);
        let verified = verify_selection(capacity, &line, &selection.indices);
        prop_assert!(verified.is_ok());
        let verified = verified.unwrap();
        prop_assert_eq!(verified.total_weight, selection.total_weight);
        prop_assert_eq!(verified.total_value, selection.total_value);
    }

    #[test]
    fn selection_is_optimal(capacity in 0u32..=60, specs in item_specs()) {
        let line = items(&specs);
        let selection = solve(capacity, &line);
        prop_assert_eq!(selection.total_value, brute_force_best(capacity, &line));
    }

    #[test]
    fn selection_is_deterministic(capacity in 0u32..=60, specs in item_specs()) {
        let line = items(&specs);
        prop_assert_eq!(solve(capacity, &line), solve(capacity, &line));
    }

    #[test]
    fn scaling_weights_changes_nothing(capacity in 0u32..=60, specs in item_specs(), unit in 1u32..=1000) {
        let line = items(&specs);
        let scaled: Vec<Item> = line
            .iter()
            .map(|item| Item::new(item.index, item.weight * unit, item.value))
            .collect();
        let selection = solve(capacity, &line);
        let scaled_selection = solve(capacity * unit, &scaled);
        prop_assert_eq!(&scaled_selection.indices, &selection.indices);
        prop_assert_eq!(scaled_selection.total_weight, selection.total_weight * unit);
    }

    #[test]
    fn indices_ascend(capacity in 0u32..=60, specs in item_specs()) {
        let selection = solve(capacity, &items(&specs));
        prop_assert!(selection.indices.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
