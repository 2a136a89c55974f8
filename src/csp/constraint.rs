use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use ahash::AHashMap;

use crate::csp::{Tuple, Value, VariableId, Variables};
use crate::error::CspError;

/// A relation over an ordered scope of variables, defined by the explicit set of tuples that
/// satisfy it
#[derive(Clone)]
pub struct Constraint {
    name: String,
    scope: Vec<VariableId>,
    /// sorted, without duplicates
    tuples: Vec<Tuple>,
    /// indices into `tuples` by scope position and value at that position
    supports: AHashMap<(usize, Value), Vec<usize>>,
}

impl Constraint {
    pub fn new(name: impl Into<String>, scope: Vec<VariableId>) -> Result<Self, CspError> {
        let name = name.into();
        if scope.is_empty() {
            return Err(CspError::EmptyScope(name));
        }
        for (i, id) in scope.iter().enumerate() {
            if scope[..i].contains(id) {
                return Err(CspError::DuplicateScopeVariable {
                    constraint: name,
                    variable: id.index(),
                });
            }
        }
        Ok(Self {
            name,
            scope,
            tuples: Vec::new(),
            supports: AHashMap::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    /// Adds tuples to the relation. Tuples already present are ignored. Nothing is added if any
    /// tuple has the wrong length.
    pub fn add_satisfying_tuples<I>(&mut self, tuples: I) -> Result<(), CspError>
    where
        I: IntoIterator,
        I::Item: Into<Tuple>,
    {
        let arity = self.arity();
        let tuples: Vec<Tuple> = tuples.into_iter().map(Into::into).collect();
        if let Some(tuple) = tuples.iter().find(|tuple| tuple.len() != arity) {
            return Err(CspError::TupleLength {
                constraint: self.name.clone(),
                expected: arity,
                found: tuple.len(),
            });
        }
        self.tuples.extend(tuples);
        self.tuples.sort_unstable();
        self.tuples.dedup();
        self.index_supports();
        Ok(())
    }

    fn index_supports(&mut self) {
        self.supports.clear();
        for (index, tuple) in self.tuples.iter().enumerate() {
            for (position, &value) in tuple.iter().enumerate() {
                self.supports
                    .entry((position, value))
                    .or_insert_with(Vec::new)
                    .push(index);
            }
        }
    }

    /// Returns true if the values, in scope order, satisfy the relation
    pub fn check(&self, values: &[Value]) -> bool {
        self.tuples
            .binary_search_by(|tuple| (**tuple).cmp(values))
            .is_ok()
    }

    pub fn position_of(&self, var: VariableId) -> Option<usize> {
        self.scope.iter().position(|&id| id == var)
    }

    pub fn unassigned_count(&self, vars: &Variables) -> usize {
        self.unassigned_vars(vars).count()
    }

    pub fn unassigned_vars<'a>(
        &'a self,
        vars: &'a Variables,
    ) -> impl Iterator<Item = VariableId> + 'a {
        self.scope
            .iter()
            .copied()
            .filter(move |&id| !vars[id].is_assigned())
    }

    /// The assigned values of the scope, or `None` if some variable is unassigned
    pub fn assigned_values(&self, vars: &Variables) -> Option<Vec<Value>> {
        self.scope
            .iter()
            .map(|&id| vars[id].assigned_value())
            .collect()
    }

    /// Returns true if some satisfying tuple has `value` at the position of `var` and only values
    /// from the current domains at every other position
    pub fn has_support(&self, vars: &Variables, var: VariableId, value: Value) -> bool {
        let position = match self.position_of(var) {
            Some(position) => position,
            None => return false,
        };
        let candidates = match self.supports.get(&(position, value)) {
            Some(candidates) => candidates,
            None => return false,
        };
        candidates
            .iter()
            .any(|&i| self.is_valid_tuple(vars, &self.tuples[i]))
    }

    fn is_valid_tuple(&self, vars: &Variables, tuple: &[Value]) -> bool {
        self.scope
            .iter()
            .zip(tuple)
            .all(|(&id, &value)| vars[id].in_current_domain(value))
    }
}

impl Debug for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("tuples", &self.tuples.len())
            .finish()
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use crate::csp::{Constraint, Csp, Tuple, VariableId};
    use crate::error::CspError;

    fn ordered_pair() -> (Csp, VariableId, VariableId) {
        let mut csp = Csp::new("test");
        let a = csp.add_variable("a", vec![1, 2, 3]).unwrap();
        let b = csp.add_variable("b", vec![1, 2, 3]).unwrap();
        let mut c = Constraint::new("a < b", vec![a, b]).unwrap();
        c.add_satisfying_tuples(vec![[1, 2], [1, 3], [2, 3]]).unwrap();
        csp.add_constraint(c).unwrap();
        (csp, a, b)
    }

    #[test]
    fn empty_scope() {
        assert_eq!(
            CspError::EmptyScope("c".into()),
            Constraint::new("c", vec![]).unwrap_err()
        );
    }

    #[test]
    fn duplicate_scope_variable() {
        let mut csp = Csp::new("test");
        let a = csp.add_variable("a", vec![1]).unwrap();
        assert!(Constraint::new("c", vec![a, a]).is_err());
    }

    #[test]
    fn tuple_length() {
        let mut csp = Csp::new("test");
        let a = csp.add_variable("a", vec![1]).unwrap();
        let b = csp.add_variable("b", vec![1]).unwrap();
        let mut c = Constraint::new("c", vec![a, b]).unwrap();
        let err = c.add_satisfying_tuples(vec![Tuple::from(vec![1])]).unwrap_err();
        assert_eq!(
            CspError::TupleLength {
                constraint: "c".into(),
                expected: 2,
                found: 1
            },
            err
        );
    }

    #[test]
    fn duplicate_tuples_are_ignored() {
        let mut csp = Csp::new("test");
        let a = csp.add_variable("a", vec![1, 2]).unwrap();
        let mut c = Constraint::new("c", vec![a]).unwrap();
        c.add_satisfying_tuples(vec![[1], [1], [2]]).unwrap();
        assert_eq!(2, c.tuples().len());
        c.add_satisfying_tuples(vec![[2]]).unwrap();
        assert_eq!(2, c.tuples().len());
        assert!(c.check(&[2]));
    }

    #[test]
    fn tuples_are_stored_sorted() {
        let mut csp = Csp::new("test");
        let a = csp.add_variable("a", vec![1, 2, 3]).unwrap();
        let b = csp.add_variable("b", vec![1, 2, 3]).unwrap();
        let mut c = Constraint::new("c", vec![a, b]).unwrap();
        c.add_satisfying_tuples(vec![[3, 1], [1, 2]]).unwrap();
        c.add_satisfying_tuples(vec![[2, 3], [1, 2]]).unwrap();
        let expected: Vec<Tuple> = vec![[1, 2].into(), [2, 3].into(), [3, 1].into()];
        assert_eq!(expected, c.tuples());
        assert!(c.check(&[3, 1]));
        assert!(!c.check(&[1, 3]));
        assert!(c.has_support(csp.variables(), b, 1));
        assert!(c.has_support(csp.variables(), a, 1));
    }

    #[test]
    fn wrong_length_adds_nothing() {
        let mut csp = Csp::new("test");
        let a = csp.add_variable("a", vec![1, 2]).unwrap();
        let mut c = Constraint::new("c", vec![a]).unwrap();
        let tuples = vec![Tuple::from(vec![1]), Tuple::from(vec![1, 2])];
        assert!(c.add_satisfying_tuples(tuples).is_err());
        assert!(c.tuples().is_empty());
        assert!(!c.check(&[1]));
    }

    #[test]
    fn check() {
        let (csp, _, _) = ordered_pair();
        let c = &csp.constraints()[0];
        assert!(c.check(&[1, 3]));
        assert!(!c.check(&[3, 1]));
    }

    #[test]
    fn support_follows_current_domains() {
        let (mut csp, a, b) = ordered_pair();
        let c = csp.constraints()[0].clone();
        assert!(c.has_support(csp.variables(), a, 1));
        assert!(!c.has_support(csp.variables(), a, 3));
        csp.variable_mut(b).prune_value(2);
        csp.variable_mut(b).prune_value(3);
        assert!(!c.has_support(csp.variables(), a, 1));
        assert!(!c.has_support(csp.variables(), b, 1));
    }

    #[test]
    fn unassigned_vars() {
        let (mut csp, a, b) = ordered_pair();
        csp.assign(a, 1);
        let c = &csp.constraints()[0];
        assert_eq!(1, c.unassigned_count(csp.variables()));
        assert_eq!(vec![b], c.unassigned_vars(csp.variables()).collect::<Vec<_>>());
        assert_eq!(None, c.assigned_values(csp.variables()));
    }
}
