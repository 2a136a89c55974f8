use crate::collections::LinkedAHashSet;
use crate::csp::{ConstraintId, Csp, Value, VariableId};
use crate::propagate::{Propagation, Propagator};

/// Generalized arc consistency: prunes every value that has no support in some constraint,
/// repeating until no constraint can prune anything more
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArcConsistency;

impl Propagator for ArcConsistency {
    fn propagate(&self, csp: &mut Csp, newly_assigned: Option<VariableId>) -> Propagation {
        let mut queue: LinkedAHashSet<ConstraintId> = match newly_assigned {
            Some(var) => csp.constraints_with(var).iter().copied().collect(),
            None => csp.constraint_ids().collect(),
        };
        let (variables, constraints, var_constraints) = csp.split_mut();
        let mut prunings = Vec::new();
        let mut revisions = 0;
        while let Some(id) = queue.pop_front() {
            revisions += 1;
            let constraint = &constraints[id.index()];
            for &var in constraint.scope() {
                if variables[var].current_domain_size() == 0 {
                    trace!("{} has an empty domain", variables[var]);
                    return Propagation::dead_end(prunings);
                }
                let unsupported: Vec<Value> = {
                    let variables = &*variables;
                    variables[var]
                        .current_domain()
                        .filter(|&value| !constraint.has_support(variables, var, value))
                        .collect()
                };
                if unsupported.is_empty() {
                    continue;
                }
                for value in unsupported {
                    variables.prune(var, value, &mut prunings);
                }
                if variables[var].current_domain_size() == 0 {
                    debug!(
                        "{} wiped out the domain of {} after {} revisions",
                        constraint, variables[var], revisions
                    );
                    return Propagation::dead_end(prunings);
                }
                for &other in &var_constraints[var.index()] {
                    if other != id && !queue.contains(&other) {
                        queue.insert(other);
                    }
                }
            }
        }
        debug!(
            "arc consistency reached a fixpoint after {} revisions and {} prunings",
            revisions,
            prunings.len()
        );
        Propagation::consistent(prunings)
    }
}

#[cfg(test)]
mod tests {
    use crate::csp::{Constraint, Csp, VariableId};
    use crate::propagate::{ArcConsistency, Outcome, Propagator};

    /// a < b < c over 1..=3
    fn chain() -> (Csp, [VariableId; 3]) {
        let mut csp = Csp::new("test");
        let vars = [
            csp.add_variable("a", vec![1, 2, 3]).unwrap(),
            csp.add_variable("b", vec![1, 2, 3]).unwrap(),
            csp.add_variable("c", vec![1, 2, 3]).unwrap(),
        ];
        for pair in vars.windows(2) {
            let mut lt = Constraint::new("lt", pair.to_vec()).unwrap();
            lt.add_satisfying_tuples(vec![[1, 2], [1, 3], [2, 3]]).unwrap();
            csp.add_constraint(lt).unwrap();
        }
        (csp, vars)
    }

    #[test]
    fn fixpoint_over_chain() {
        let (mut csp, [a, b, c]) = chain();
        let result = ArcConsistency.propagate(&mut csp, None);
        assert!(result.is_consistent());
        assert_eq!(6, result.prunings.len());
        assert_eq!(vec![1], csp.variable(a).current_domain().collect::<Vec<_>>());
        assert_eq!(vec![2], csp.variable(b).current_domain().collect::<Vec<_>>());
        assert_eq!(vec![3], csp.variable(c).current_domain().collect::<Vec<_>>());
    }

    #[test]
    fn second_call_prunes_nothing() {
        let (mut csp, _) = chain();
        ArcConsistency.propagate(&mut csp, None);
        let again = ArcConsistency.propagate(&mut csp, None);
        assert!(again.is_consistent());
        assert!(again.prunings.is_empty());
    }

    #[test]
    fn assignment_without_support() {
        let (mut csp, [_, b, _]) = chain();
        csp.assign(b, 3);
        let result = ArcConsistency.propagate(&mut csp, Some(b));
        assert_eq!(Outcome::DeadEnd, result.outcome);
        csp.restore(&result.prunings);
        csp.unassign(b);
        assert_eq!(3, csp.variable(b).current_domain_size());
    }

    #[test]
    fn empty_relation_is_dead_end() {
        let mut csp = Csp::new("test");
        let a = csp.add_variable("a", vec![1]).unwrap();
        let b = csp.add_variable("b", vec![1]).unwrap();
        csp.add_constraint(Constraint::new("a != b", vec![a, b]).unwrap())
            .unwrap();
        let result = ArcConsistency.propagate(&mut csp, None);
        assert_eq!(Outcome::DeadEnd, result.outcome);
        assert_eq!(1, result.prunings.len());
    }
}
