use std::fmt;
use std::fmt::{Display, Formatter};

use crate::collections::RangeSet;
use crate::csp::Value;

/// A named finite-domain variable.
///
/// The original domain is fixed at construction. The current domain is the subset of it that has
/// not been pruned, tracked by position in the original domain. While a value is assigned, the
/// current domain is seen as the singleton of that value, or as empty if the value was pruned.
#[derive(Clone, Debug)]
pub struct Variable {
    name: String,
    original_domain: Vec<Value>,
    current: RangeSet,
    assigned: Option<Value>,
}

impl Variable {
    pub(crate) fn new(name: String, domain: Vec<Value>) -> Self {
        let current = RangeSet::with_all(domain.len());
        Self {
            name,
            original_domain: domain,
            current,
            assigned: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn original_domain(&self) -> &[Value] {
        &self.original_domain
    }

    /// The only value of the original domain, if the puzzle fixed this variable
    pub fn fixed_value(&self) -> Option<Value> {
        match *self.original_domain {
            [value] => Some(value),
            _ => None,
        }
    }

    pub fn in_original_domain(&self, value: Value) -> bool {
        self.position_of(value).is_some()
    }

    /// The current domain in original-domain order
    pub fn current_domain(&self) -> impl Iterator<Item = Value> + '_ {
        let assigned = self.assigned;
        self.current
            .iter()
            .map(move |i| self.original_domain[i])
            .filter(move |&value| assigned.map_or(true, |a| a == value))
    }

    pub fn current_domain_size(&self) -> usize {
        match self.assigned {
            Some(value) => {
                if self.is_unpruned(value) {
                    1
                } else {
                    0
                }
            }
            None => self.current.len(),
        }
    }

    pub fn in_current_domain(&self, value: Value) -> bool {
        match self.assigned {
            Some(assigned) if assigned != value => false,
            _ => self.is_unpruned(value),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned.is_some()
    }

    pub fn assigned_value(&self) -> Option<Value> {
        self.assigned
    }

    /// Removes a value from the current domain.
    ///
    /// # Panics
    ///
    /// If the value is already pruned or is not in the original domain.
    pub fn prune_value(&mut self, value: Value) {
        let removed = self
            .position_of(value)
            .map_or(false, |i| self.current.remove(i));
        assert!(removed, "{} is not in the domain of {}", value, self.name);
    }

    /// Returns a previously pruned value to the current domain.
    ///
    /// # Panics
    ///
    /// If the value is not pruned.
    pub fn restore_value(&mut self, value: Value) {
        let inserted = self
            .position_of(value)
            .map_or(false, |i| self.current.insert(i));
        assert!(inserted, "{} was not pruned from {}", value, self.name);
    }

    /// # Panics
    ///
    /// If the variable is already assigned or the value is not in the current domain.
    pub fn assign(&mut self, value: Value) {
        assert!(self.assigned.is_none(), "{} is already assigned", self.name);
        assert!(
            self.is_unpruned(value),
            "{} is not in the current domain of {}",
            value,
            self.name
        );
        self.assigned = Some(value);
    }

    pub fn unassign(&mut self) {
        self.assigned = None;
    }

    fn is_unpruned(&self, value: Value) -> bool {
        self.position_of(value)
            .map_or(false, |i| self.current.contains(i))
    }

    fn position_of(&self, value: Value) -> Option<usize> {
        self.original_domain.iter().position(|&v| v == value)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
