//! Constraint propagators.
//!
//! A propagator is called by a backtracking search before any assignment (`newly_assigned` is
//! `None`) and after each assignment. It prunes values from current domains and reports every
//! value it pruned during that call, so the search can restore them when it backtracks. A
//! propagator never restores values itself and never prunes a value that is already pruned.

pub use self::arc_consistency::ArcConsistency;
pub use self::backtrack::BacktrackCheck;
pub use self::forward_check::ForwardCheck;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use enum_dispatch::enum_dispatch;

use crate::csp::{Csp, Value, VariableId};
use crate::error::ParsePropagatorError;

mod arc_consistency;
mod backtrack;
mod forward_check;

/// A value removed from the current domain of a variable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pruning {
    pub variable: VariableId,
    pub value: Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The current partial assignment may still be extended
    Consistent,
    /// The current partial assignment cannot be extended and the search must backtrack
    DeadEnd,
}

/// The verdict of one propagator call along with every value it pruned
#[derive(Clone, Debug, PartialEq)]
pub struct Propagation {
    pub outcome: Outcome,
    pub prunings: Vec<Pruning>,
}

impl Propagation {
    pub(crate) fn consistent(prunings: Vec<Pruning>) -> Self {
        Self {
            outcome: Outcome::Consistent,
            prunings,
        }
    }

    pub(crate) fn dead_end(prunings: Vec<Pruning>) -> Self {
        Self {
            outcome: Outcome::DeadEnd,
            prunings,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.outcome == Outcome::Consistent
    }
}

#[enum_dispatch]
pub trait Propagator {
    /// Prunes current domains after `newly_assigned` was assigned, or before search begins if
    /// `None`
    fn propagate(&self, csp: &mut Csp, newly_assigned: Option<VariableId>) -> Propagation;
}

/// One of the propagation strategies, selectable by name
#[enum_dispatch(Propagator)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagatorKind {
    BacktrackCheck,
    ForwardCheck,
    ArcConsistency,
}

impl PropagatorKind {
    pub fn all() -> [PropagatorKind; 3] {
        [
            BacktrackCheck.into(),
            ForwardCheck.into(),
            ArcConsistency.into(),
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            PropagatorKind::BacktrackCheck(_) => "bt",
            PropagatorKind::ForwardCheck(_) => "fc",
            PropagatorKind::ArcConsistency(_) => "gac",
        }
    }
}

impl FromStr for PropagatorKind {
    type Err = ParsePropagatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "bt" => BacktrackCheck.into(),
            "fc" => ForwardCheck.into(),
            "gac" => ArcConsistency.into(),
            _ => return Err(ParsePropagatorError(s.to_string())),
        };
        Ok(kind)
    }
}

impl Display for PropagatorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
