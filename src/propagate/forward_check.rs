use crate::csp::{Constraint, ConstraintId, Csp, Value, VariableId, Variables};
use crate::propagate::{Propagation, Propagator, Pruning};

/// Forward checking: prunes the last unassigned variable of each constraint that has exactly one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForwardCheck;

impl Propagator for ForwardCheck {
    fn propagate(&self, csp: &mut Csp, newly_assigned: Option<VariableId>) -> Propagation {
        let candidates: Vec<ConstraintId> = match newly_assigned {
            Some(var) => csp.constraints_with(var).to_vec(),
            None => csp.constraint_ids().collect(),
        };
        let (variables, constraints, _) = csp.split_mut();
        let mut prunings = Vec::new();
        for id in candidates {
            let constraint = &constraints[id.index()];
            if constraint.unassigned_count(variables) != 1 {
                continue;
            }
            if !forward_check(constraint, variables, &mut prunings) {
                debug!(
                    "forward checking {} wiped out a domain after {} prunings",
                    constraint,
                    prunings.len()
                );
                return Propagation::dead_end(prunings);
            }
        }
        debug!("forward checking made {} prunings", prunings.len());
        Propagation::consistent(prunings)
    }
}

/// Prunes every value of the single unassigned variable of `constraint` that does not complete a
/// satisfying tuple. Returns `false` if the variable's domain became empty.
fn forward_check(
    constraint: &Constraint,
    variables: &mut Variables,
    prunings: &mut Vec<Pruning>,
) -> bool {
    let unassigned = match constraint.unassigned_vars(variables).next() {
        Some(var) => var,
        None => return true,
    };
    let position = match constraint.position_of(unassigned) {
        Some(position) => position,
        None => return true,
    };
    let mut values: Vec<Value> = constraint
        .scope()
        .iter()
        .map(|&id| variables[id].assigned_value().unwrap_or_default())
        .collect();
    let domain: Vec<Value> = variables[unassigned].current_domain().collect();
    for value in domain {
        values[position] = value;
        if !constraint.check(&values) {
            variables.prune(unassigned, value, prunings);
        }
    }
    variables[unassigned].current_domain_size() > 0
}
