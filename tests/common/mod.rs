#![allow(dead_code)]

use futoshiki::collections::square::Coord;
use futoshiki::collections::Square;
use futoshiki::csp::{Csp, Value};
use futoshiki::model::{Board, Inequality, Relation, VariableGrid};
use futoshiki::propagate::{Propagator, PropagatorKind};

pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

/// A valid 9x9 Latin square (it is also a Sudoku solution)
pub fn latin_square() -> Square<Value> {
    let rows = (0..9)
        .map(|r| (0..9).map(|c| ((r * 3 + r / 3 + c) % 9 + 1) as Value).collect())
        .collect();
    Square::from_rows(rows).unwrap()
}

/// Clears the cells of `solution` for which `keep` is false
pub fn board_from(solution: &Square<Value>, keep: impl Fn(usize, usize) -> bool) -> Board {
    let rows = solution
        .rows()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, &value)| if keep(r, c) { value } else { 0 })
                .collect()
        })
        .collect();
    Board::new(rows).unwrap()
}

/// Inequalities between horizontal and vertical neighbours that hold in `solution`
pub fn inequalities_from(solution: &Square<Value>, every: usize) -> Vec<Inequality> {
    let width = solution.width();
    let mut inequalities = Vec::new();
    for (coord, &value) in solution.iter_coord() {
        let (row, col) = (coord.row(), coord.col());
        if (row * width + col) % every != 0 {
            continue;
        }
        let neighbour = if col + 1 < width {
            Coord::new(col + 1, row)
        } else if row + 1 < width {
            Coord::new(col, row + 1)
        } else {
            continue;
        };
        let relation = if value < solution[neighbour] {
            Relation::Less
        } else {
            Relation::Greater
        };
        inequalities.push(Inequality::new(
            (row + 1, col + 1),
            relation,
            (neighbour.row() + 1, neighbour.col() + 1),
        ));
    }
    inequalities
}

/// Checks that `solution` is a Latin square that agrees with the board and the inequalities
pub fn is_valid_solution(
    solution: &Square<Value>,
    board: &Board,
    inequalities: &[Inequality],
) -> bool {
    let width = solution.width();
    let distinct = |values: Vec<Value>| {
        let mut sorted = values;
        sorted.sort_unstable();
        sorted == (1..=width as Value).collect::<Vec<_>>()
    };
    let rows_ok = (0..width).all(|r| distinct((0..width).map(|c| solution[Coord::new(c, r)]).collect()));
    let cols_ok = (0..width).all(|c| distinct((0..width).map(|r| solution[Coord::new(c, r)]).collect()));
    let givens_ok = solution
        .iter_coord()
        .all(|(coord, &value)| board.fixed(coord).map_or(true, |fixed| fixed == value));
    let inequalities_ok = inequalities.iter().all(|inequality| {
        let lhs = solution[Coord::new(inequality.lhs.col - 1, inequality.lhs.row - 1)];
        let rhs = solution[Coord::new(inequality.rhs.col - 1, inequality.rhs.row - 1)];
        inequality.relation.holds(lhs, rhs)
    });
    rows_ok && cols_ok && givens_ok && inequalities_ok
}

/// Backtracking search: choose the unassigned variable with the smallest current domain, try each
/// of its values, propagate, and undo every reported pruning when backing out.
///
/// Every assignment and pruning is undone before returning, so the CSP is left as it was given.
/// At every node the search asserts that domains stay within the original domains.
pub fn solve(
    csp: &mut Csp,
    grid: &VariableGrid,
    propagator: PropagatorKind,
) -> Option<Square<Value>> {
    let initial = propagator.propagate(csp, None);
    let solution = if initial.is_consistent() {
        search(csp, grid, propagator)
    } else {
        None
    };
    csp.restore(&initial.prunings);
    solution
}

fn search(csp: &mut Csp, grid: &VariableGrid, propagator: PropagatorKind) -> Option<Square<Value>> {
    assert!(
        domains_within_original(csp),
        "{} left a value outside its original domain",
        propagator
    );
    let var = match csp
        .unassigned_variables()
        .min_by_key(|&id| csp.variable(id).current_domain_size())
    {
        Some(var) => var,
        None => {
            return Some(grid.map(|&id| csp.variable(id).assigned_value().unwrap_or_default()));
        }
    };
    let values: Vec<Value> = csp.variable(var).current_domain().collect();
    for value in values {
        csp.assign(var, value);
        let propagation = propagator.propagate(csp, Some(var));
        let solution = if propagation.is_consistent() {
            search(csp, grid, propagator)
        } else {
            None
        };
        csp.restore(&propagation.prunings);
        csp.unassign(var);
        if solution.is_some() {
            return solution;
        }
    }
    None
}

/// True if every current domain, and every assigned value, is within the original domain
pub fn domains_within_original(csp: &Csp) -> bool {
    csp.variables().iter().all(|(_, v)| {
        v.current_domain().all(|value| v.in_original_domain(value))
            && v.assigned_value().map_or(true, |value| v.in_original_domain(value))
    })
}

/// True if no variable is assigned and every current domain equals its original domain
pub fn is_pristine(csp: &Csp) -> bool {
    csp.variables().iter().all(|(_, v)| {
        !v.is_assigned() && v.current_domain().collect::<Vec<_>>() == v.original_domain()
    })
}
