use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{to_string, to_value, Map, Value};
use std::{fs, path::Path};

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

/// Serializes `obj` with object keys sorted, so equal objects always render identically.
pub fn jsonify<T>(obj: &T) -> serde_json::Result<String>
where
    T: Serialize,
{
    to_string(&sort_keys(to_value(obj)?))
}

fn sort_keys(json_value: Value) -> Value {
    match json_value {
        Value::Object(obj) => {
            let mut entries: Vec<(String, Value)> = obj.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted_map = Map::new();
            for (key, value) in entries {
                sorted_map.insert(key, sort_keys(value));
            }
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Accepts either an inline json string or a path to a `.json` file.
pub fn load_json_arg<T>(arg: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let json_str = if arg.ends_with(".json") {
        fs::read_to_string(Path::new(arg))
            .map_err(|e| anyhow!("Failed to read json file {}: {}", arg, e))?
    } else {
        arg.to_string()
    };
    dejsonify::<T>(&json_str).map_err(|e| anyhow!("Failed to parse json: {}", e))
}
