//! Generation of satisfying tuples for the puzzle's relations.
//!
//! These are pure functions of the domains they are given. They never modify their inputs.

use itertools::Itertools;

use crate::csp::{Tuple, Value};
use crate::model::Relation;

fn single(domain: &[Value]) -> Option<Value> {
    match *domain {
        [value] => Some(value),
        _ => None,
    }
}

/// All pairs `(a, b)` from the two domains with `a != b`.
///
/// A side with a single value is paired only with the differing values of the other side, so two
/// sides fixed to the same value produce no tuples at all.
pub fn not_equal(first: &[Value], second: &[Value]) -> Vec<Tuple> {
    match (single(first), single(second)) {
        (Some(a), Some(b)) => {
            if a == b {
                Vec::new()
            } else {
                vec![Tuple::from([a, b])]
            }
        }
        (Some(a), None) => second
            .iter()
            .filter(|&&b| b != a)
            .map(|&b| Tuple::from([a, b]))
            .collect(),
        (None, Some(b)) => first
            .iter()
            .filter(|&&a| a != b)
            .map(|&a| Tuple::from([a, b]))
            .collect(),
        (None, None) => first
            .iter()
            .cartesian_product(second)
            .filter(|(a, b)| a != b)
            .map(|(&a, &b)| Tuple::from([a, b]))
            .collect(),
    }
}

/// All pairs `(a, b)` from the two domains for which `a <relation> b` holds
pub fn inequality(first: &[Value], relation: Relation, second: &[Value]) -> Vec<Tuple> {
    first
        .iter()
        .cartesian_product(second)
        .filter(|&(&a, &b)| relation.holds(a, b))
        .map(|(&a, &b)| Tuple::from([a, b]))
        .collect()
}

/// Every arrangement of distinct values from `base` over `width` positions that places each
/// pinned value at its position.
///
/// The pinned values are taken out of `base`, the remaining values are permuted over the free
/// positions, and the pinned values are put back in place. Pins that share a position or a value,
/// lie outside of `0..width`, or use a value outside of `base` leave no arrangement.
pub fn all_different(base: &[Value], width: usize, pins: &[(usize, Value)]) -> Vec<Tuple> {
    let mut pinned: Vec<Option<Value>> = vec![None; width];
    for &(position, value) in pins {
        match pinned.get_mut(position) {
            Some(pin @ None) if base.contains(&value) => *pin = Some(value),
            _ => return Vec::new(),
        }
    }
    let mut remaining: Vec<Value> = base.to_vec();
    for &(_, value) in pins {
        match remaining.iter().position(|&v| v == value) {
            Some(i) => {
                remaining.remove(i);
            }
            // a second pin with the same value
            None => return Vec::new(),
        }
    }
    let free_count = width - pins.len();
    if remaining.len() < free_count {
        return Vec::new();
    }
    if free_count == 0 {
        return vec![pinned.into_iter().flatten().collect::<Vec<_>>().into()];
    }
    remaining
        .into_iter()
        .permutations(free_count)
        .map(|free| {
            let mut free = free.into_iter();
            pinned
                .iter()
                .map(|pin| match pin {
                    Some(value) => *value,
                    None => free.next().unwrap_or_default(),
                })
                .collect::<Vec<_>>()
        })
        .map(Tuple::from)
        .collect()
}
