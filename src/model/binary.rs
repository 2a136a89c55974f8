use itertools::Itertools;

use crate::collections::square::VectorId;
use crate::csp::{Constraint, Csp};
use crate::error::ModelError;
use crate::model::{add_cell_variables, add_inequality_constraints, tuples};
use crate::model::{Board, Inequality, VariableGrid};

/// Model 1: a binary not-equal constraint for every pair of cells sharing a row or column.
///
/// Boards that repeat a fixed value in a row or column still compile. The pair of repeated cells
/// gets a constraint without satisfying tuples, which propagation reports as a dead end.
pub fn build_model_1(
    board: &Board,
    inequalities: &[Inequality],
) -> Result<(Csp, VariableGrid), ModelError> {
    let mut csp = Csp::new("Futoshiki model 1");
    let grid = add_cell_variables(&mut csp, board)?;
    for vector_id in VectorId::all(grid.width()) {
        for (&a, &b) in grid.vector(vector_id).tuple_combinations() {
            let name = format!("{} != {}", csp.variable(a), csp.variable(b));
            let tuples = tuples::not_equal(
                csp.variable(a).original_domain(),
                csp.variable(b).original_domain(),
            );
            let mut constraint = Constraint::new(name, vec![a, b])?;
            constraint.add_satisfying_tuples(tuples)?;
            csp.add_constraint(constraint)?;
        }
    }
    add_inequality_constraints(&mut csp, &grid, inequalities)?;
    debug!(
        "built {} with {} variables and {} constraints",
        csp.name(),
        csp.variables().len(),
        csp.constraints().len()
    );
    Ok((csp, grid))
}
