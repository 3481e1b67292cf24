//! Positional mixing of a number sequence on a [`CircularList`]

use crate::error::{PathkitError, Result};
use crate::ring::{CircularList, Element};

/// Mix `values` and return the ring contents read from its `first` element.
///
/// Every value is multiplied by `key`. Then, `rounds` times, each element in
/// its original order is moved forward by its value modulo `len - 1`
/// (negative values move backward). Rings of fewer than two values come
/// back unchanged.
#[tracing::instrument(skip(values), fields(len = values.len()))]
pub fn mix(values: &[i64], key: i64, rounds: usize) -> Result<Vec<i64>> {
    let mut ring = values
        .iter()
        .map(|&value| {
            value
                .checked_mul(key)
                .ok_or_else(|| PathkitError::invalid_value("key", format!("{value} * {key} overflows")))
        })
        .collect::<Result<CircularList<i64>>>()?;

    let modulus = ring.len() as i64 - 1;
    if modulus <= 0 {
        return Ok(ring.to_vec());
    }

    let order: Vec<Element> = ring.elements().collect();
    for round in 0..rounds {
        for &element in &order {
            let shift = ring.value(element)?.rem_euclid(modulus);
            if shift == 0 {
                continue;
            }
            let target = ring.forward(element, shift)?;
            ring.move_after(target, element)?;
        }
        tracing::debug!(round = round + 1, "mixing round complete");
    }

    Ok(ring.to_vec())
}

/// Parse one integer per line. Blank lines are skipped.
pub fn parse_numbers(text: &str) -> Result<Vec<i64>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, value)| {
            value.parse().map_err(|_| PathkitError::InvalidNumber {
                line,
                value: value.to_string(),
            })
        })
        .collect()
}
