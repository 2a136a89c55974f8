use crate::collections::square::VectorId;
use crate::csp::{Constraint, Csp, Value, VariableId};
use crate::error::ModelError;
use crate::model::{add_cell_variables, add_inequality_constraints, tuples};
use crate::model::{Board, Inequality, VariableGrid};

/// Model 2: one all-different constraint over each row and each column.
///
/// The tuples of each constraint are every permutation of the values not fixed in that row or
/// column, so this is only practical for boards with enough fixed cells.
pub fn build_model_2(
    board: &Board,
    inequalities: &[Inequality],
) -> Result<(Csp, VariableGrid), ModelError> {
    let mut csp = Csp::new("Futoshiki model 2");
    let grid = add_cell_variables(&mut csp, board)?;
    let base: Vec<Value> = (1..=grid.width() as Value).collect();
    let mut tuple_count = 0;
    for vector_id in VectorId::all(grid.width()) {
        let scope: Vec<VariableId> = grid.vector(vector_id).copied().collect();
        let pins: Vec<(usize, Value)> = scope
            .iter()
            .enumerate()
            .filter_map(|(position, &id)| {
                csp.variable(id)
                    .fixed_value()
                    .map(|value| (position, value))
            })
            .collect();
        let tuples = tuples::all_different(&base, scope.len(), &pins);
        trace!("{:?} has {} all-different tuples", vector_id, tuples.len());
        tuple_count += tuples.len();
        let mut constraint = Constraint::new(format!("{:?} all-different", vector_id), scope)?;
        constraint.add_satisfying_tuples(tuples)?;
        csp.add_constraint(constraint)?;
    }
    add_inequality_constraints(&mut csp, &grid, inequalities)?;
    debug!(
        "built {} with {} variables, {} constraints and {} all-different tuples",
        csp.name(),
        csp.variables().len(),
        csp.constraints().len(),
        tuple_count
    );
    Ok((csp, grid))
}
