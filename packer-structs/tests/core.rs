use packer_structs::{
    config::{BatchPolicy, PackerConfig},
    core::{Item, LineTask, Selection},
};
use packer_utils::{dejsonify, jsonify};

#[test]
fn test_capacity() {
    let task = LineTask {
        weight_limit: 81,
        weight_scale: 100,
        items: vec![Item::new(1, 5338, 45.0)],
    };
    assert_eq!(task.capacity(), Some(8100));

    let negative = LineTask {
        weight_limit: -1,
        ..task.clone()
    };
    assert_eq!(negative.capacity(), None);

    let overflow = LineTask {
        weight_limit: i64::MAX,
        ..task
    };
    assert_eq!(overflow.capacity(), None);
}

#[test]
fn test_empty_selection() {
    let selection = Selection::empty();
    assert!(selection.is_empty());
    assert_eq!(selection.total_weight, 0);
}

#[test]
fn test_item_json() {
    let item = Item::new(2, 1455, 74.0);
    assert_eq!(
        jsonify(&item).unwrap(),
        r#"{"index":2,"value":74.0,"weight":1455}"#
    );
}

#[test]
fn test_config_defaults() {
    let config: PackerConfig = dejsonify("{}").unwrap();
    assert_eq!(config, PackerConfig::default());
    assert_eq!(config.weight_scale().unwrap(), 100);
    assert!(config.accepts_weight_limit(0));
    assert!(config.accepts_weight_limit(100));
    assert!(!config.accepts_weight_limit(101));
    assert!(!config.accepts_weight_limit(-1));
}

#[test]
fn test_config_overrides() {
    let config: PackerConfig =
        dejsonify(r#"{"batch_policy":"isolate","weight_precision":0,"empty_marker":"none"}"#)
            .unwrap();
    assert_eq!(config.batch_policy, BatchPolicy::Isolate);
    assert_eq!(config.weight_scale().unwrap(), 1);
    assert_eq!(config.empty_marker, "none");
    assert_eq!(config.max_weight_limit, 100);
}

#[test]
fn test_config_rejects_unknown_fields() {
    assert!(dejsonify::<PackerConfig>(r#"{"max_weight":5}"#).is_err());
}
