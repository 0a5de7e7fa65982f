//! Decodes `LIMIT : (INDEX,WEIGHT,€VALUE) (INDEX,WEIGHT,€VALUE) ...` lines.

use crate::PackError;
use packer_structs::core::{Item, LineTask};
use packer_utils::{fixed_from_dec_str, fixed_scale, non_negative_f64_from_str};

const CURRENCY: char = '€';

/// Parses one input line. Item weights are converted into whole units of
/// `10^-weight_precision`; the weight limit is left as written so the range
/// check stays with the line processor.
pub fn parse_line(line: &str, weight_precision: u32) -> Result<LineTask, PackError> {
    let weight_scale = fixed_scale(weight_precision).map_err(|e| PackError::InvalidConfig {
        reason: e.to_string(),
    })?;
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();

    let (limit, rest) = compact
        .split_once(':')
        .ok_or_else(|| PackError::malformed("missing ':' after weight limit"))?;
    let weight_limit = limit
        .parse::<i64>()
        .map_err(|_| PackError::malformed(format!("invalid weight limit ({})", limit)))?;

    let mut items = Vec::new();
    let mut rest = rest;
    while !rest.is_empty() {
        let body = rest
            .strip_prefix('(')
            .ok_or_else(|| PackError::malformed(format!("expected '(' at ({})", rest)))?;
        let close = body
            .find(')')
            .ok_or_else(|| PackError::malformed("unterminated item"))?;
        let item = parse_item(&body[..close], weight_precision)
            .map_err(|reason| PackError::malformed(format!("item {}: {}", items.len() + 1, reason)))?;
        if let Some(prev) = items.last().map(|prev: &Item| prev.index) {
            if item.index <= prev {
                return Err(PackError::malformed(format!(
                    "item index {} does not follow {}",
                    item.index, prev
                )));
            }
        }
        items.push(item);
        rest = &body[close + 1..];
    }

    Ok(LineTask {
        weight_limit,
        weight_scale,
        items,
    })
}

fn parse_item(body: &str, weight_precision: u32) -> Result<Item, String> {
    let fields: Vec<&str> = body.split(',').collect();
    let &[index, weight, value] = fields.as_slice() else {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    };

    let index = match index.parse::<usize>() {
        Ok(i) if i > 0 => i,
        _ => return Err(format!("invalid index ({})", index)),
    };
    let weight = fixed_from_dec_str(weight, weight_precision).map_err(|e| e.to_string())?;
    let value = value.strip_prefix(CURRENCY).unwrap_or(value);
    let value = non_negative_f64_from_str(value).map_err(|e| e.to_string())?;
    Ok(Item::new(index, weight, value))
}
