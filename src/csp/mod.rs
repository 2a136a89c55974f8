//! Variables, constraints and the container that owns them

pub use self::constraint::Constraint;
pub use self::tuple::Tuple;
pub use self::variable::Variable;

use std::ops::{Index, IndexMut};

use crate::error::CspError;
use crate::propagate::Pruning;

mod constraint;
mod tuple;
mod variable;

pub type Value = i32;

/// A handle to a variable owned by a `Csp`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(usize);

impl VariableId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A handle to a constraint owned by a `Csp`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId(usize);

impl ConstraintId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The variables of a `Csp`, in insertion order
#[derive(Clone, Debug, Default)]
pub struct Variables(Vec<Variable>);

impl Variables {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &Variable)> {
        self.0.iter().enumerate().map(|(i, v)| (VariableId(i), v))
    }

    fn get(&self, id: VariableId) -> Option<&Variable> {
        self.0.get(id.0)
    }

    /// Prunes a value and records it in the same step
    pub(crate) fn prune(&mut self, id: VariableId, value: Value, prunings: &mut Vec<Pruning>) {
        self[id].prune_value(value);
        prunings.push(Pruning {
            variable: id,
            value,
        });
        trace!("pruned {} from {}", value, self[id]);
    }
}

impl Index<VariableId> for Variables {
    type Output = Variable;

    fn index(&self, id: VariableId) -> &Self::Output {
        &self.0[id.0]
    }
}

impl IndexMut<VariableId> for Variables {
    fn index_mut(&mut self, id: VariableId) -> &mut Self::Output {
        &mut self.0[id.0]
    }
}

/// A constraint satisfaction problem: owns its variables and constraints and indexes which
/// constraints mention each variable.
///
/// Constraints are only added while the model is built. The index is kept current on insertion.
#[derive(Clone, Debug)]
pub struct Csp {
    name: String,
    variables: Variables,
    constraints: Vec<Constraint>,
    var_constraints: Vec<Vec<ConstraintId>>,
}

impl Csp {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Variables::default(),
            constraints: Vec::new(),
            var_constraints: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        domain: Vec<Value>,
    ) -> Result<VariableId, CspError> {
        let name = name.into();
        if domain.is_empty() {
            return Err(CspError::EmptyDomain(name));
        }
        for (i, value) in domain.iter().enumerate() {
            if domain[..i].contains(value) {
                return Err(CspError::DuplicateDomainValue {
                    variable: name,
                    value: *value,
                });
            }
        }
        if self.variables.0.iter().any(|v| v.name() == name) {
            return Err(CspError::DuplicateVariableName(name));
        }
        let id = VariableId(self.variables.len());
        self.variables.0.push(Variable::new(name, domain));
        self.var_constraints.push(Vec::new());
        Ok(id)
    }

    /// Adds a constraint whose scope and tuples must refer to variables of this CSP and to values
    /// of their original domains
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId, CspError> {
        for &id in constraint.scope() {
            if self.variables.get(id).is_none() {
                return Err(CspError::UnknownVariable {
                    constraint: constraint.name().to_string(),
                    variable: id.0,
                });
            }
        }
        for tuple in constraint.tuples() {
            let outside = constraint
                .scope()
                .iter()
                .zip(tuple.iter())
                .find(|&(&id, &value)| !self.variables[id].in_original_domain(value));
            if let Some((&id, &value)) = outside {
                return Err(CspError::ValueOutsideDomain {
                    constraint: constraint.name().to_string(),
                    variable: self.variables[id].name().to_string(),
                    value,
                });
            }
        }
        let id = ConstraintId(self.constraints.len());
        for &var in constraint.scope() {
            self.var_constraints[var.0].push(id);
        }
        self.constraints.push(constraint);
        Ok(id)
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn variable_mut(&mut self, id: VariableId) -> &mut Variable {
        &mut self.variables[id]
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn constraint_ids(&self) -> impl Iterator<Item = ConstraintId> {
        (0..self.constraints.len()).map(ConstraintId)
    }

    pub fn constraint(&self, id: ConstraintId) -> &Constraint {
        &self.constraints[id.0]
    }

    /// The constraints whose scope contains `var`, in insertion order
    pub fn constraints_with(&self, var: VariableId) -> &[ConstraintId] {
        &self.var_constraints[var.0]
    }

    pub fn unassigned_variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.variables
            .iter()
            .filter(|(_, v)| !v.is_assigned())
            .map(|(id, _)| id)
    }

    pub fn assign(&mut self, var: VariableId, value: Value) {
        self.variables[var].assign(value);
    }

    pub fn unassign(&mut self, var: VariableId) {
        self.variables[var].unassign();
    }

    /// Undoes the prunings reported by a propagator, last pruning first
    pub fn restore(&mut self, prunings: &[Pruning]) {
        for pruning in prunings.iter().rev() {
            self.variables[pruning.variable].restore_value(pruning.value);
        }
    }

    /// Borrows the variables mutably alongside the constraints
    pub(crate) fn split_mut(&mut self) -> (&mut Variables, &[Constraint], &[Vec<ConstraintId>]) {
        (
            &mut self.variables,
            &self.constraints,
            &self.var_constraints,
        )
    }
}
