use crate::csp::{Csp, VariableId};
use crate::propagate::{Propagation, Propagator};

/// Plain backtracking: no pruning, only checks constraints that have become fully assigned
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BacktrackCheck;

impl Propagator for BacktrackCheck {
    fn propagate(&self, csp: &mut Csp, newly_assigned: Option<VariableId>) -> Propagation {
        let var = match newly_assigned {
            Some(var) => var,
            None => return Propagation::consistent(Vec::new()),
        };
        for &id in csp.constraints_with(var) {
            let constraint = csp.constraint(id);
            let values = match constraint.assigned_values(csp.variables()) {
                Some(values) => values,
                None => continue,
            };
            if !constraint.check(&values) {
                trace!("{} violated by {:?}", constraint, values);
                return Propagation::dead_end(Vec::new());
            }
        }
        Propagation::consistent(Vec::new())
    }
}
