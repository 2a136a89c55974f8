//! Compile Futoshiki puzzles into constraint satisfaction problems.
//!
//! Both models have one variable per cell. A cell fixed by the board has a single value domain,
//! every other cell has the domain `1..=width`. They differ in how rows and columns are kept
//! distinct: model 1 uses a binary not-equal constraint for every pair of cells in a row or
//! column, model 2 uses one all-different constraint per row and per column. Inequalities are
//! binary constraints in both.

pub use self::all_different::build_model_2;
pub use self::binary::build_model_1;

use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::collections::square::Coord;
use crate::collections::Square;
use crate::csp::{Constraint, Csp, Value, VariableId};
use crate::error::{ModelError, ParseModelKindError, ParseRelationError};

mod all_different;
mod binary;
pub mod tuples;

/// A grid of cell handles, indexed the same way as the board
pub type VariableGrid = Square<VariableId>;

/// A square board where `0` is an empty cell and `1..=width` is a fixed cell
#[derive(Clone, Debug, PartialEq)]
pub struct Board(Square<Value>);

impl Board {
    pub fn new(rows: Vec<Vec<Value>>) -> Result<Self, ModelError> {
        let square = Square::from_rows(rows)
            .map_err(|e| ModelError::InvalidBoard(format!("{:?}", e)))?;
        Self::from_square(square)
    }

    pub fn from_square(square: Square<Value>) -> Result<Self, ModelError> {
        if square.is_empty() {
            return Err(ModelError::InvalidBoard("the board is empty".into()));
        }
        let width = square.width();
        if let Some((coord, value)) = square
            .iter_coord()
            .find(|&(_, &value)| value < 0 || value as usize > width)
        {
            return Err(ModelError::InvalidBoard(format!(
                "value {} at ({}, {}) is outside of 0..={}",
                value,
                coord.row() + 1,
                coord.col() + 1,
                width
            )));
        }
        Ok(Self(square))
    }

    pub fn width(&self) -> usize {
        self.0.width()
    }

    /// The fixed value of a cell, if any
    pub fn fixed(&self, coord: Coord) -> Option<Value> {
        match self.0[coord] {
            0 => None,
            value => Some(value),
        }
    }
}

impl TryFrom<Vec<Vec<Value>>> for Board {
    type Error = ModelError;

    fn try_from(rows: Vec<Vec<Value>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

/// A cell by one-based row and column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn coord(self, width: usize) -> Result<Coord, ModelError> {
        let in_range = |n: usize| n >= 1 && n <= width;
        if !in_range(self.row) || !in_range(self.col) {
            return Err(ModelError::CellOutOfRange {
                row: self.row,
                col: self.col,
                width,
            });
        }
        Ok(Coord::new(self.col - 1, self.row - 1))
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    Less,
    Greater,
}

impl Relation {
    pub fn holds(self, a: Value, b: Value) -> bool {
        match self {
            Relation::Less => a < b,
            Relation::Greater => a > b,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Relation::Less => '<',
            Relation::Greater => '>',
        }
    }
}

impl FromStr for Relation {
    type Err = ParseRelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Relation::Less),
            ">" => Ok(Relation::Greater),
            _ => Err(ParseRelationError(s.to_string())),
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// `lhs <relation> rhs` between two cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Inequality {
    pub lhs: Cell,
    pub relation: Relation,
    pub rhs: Cell,
}

impl Inequality {
    pub fn new(lhs: impl Into<Cell>, relation: Relation, rhs: impl Into<Cell>) -> Self {
        Self {
            lhs: lhs.into(),
            relation,
            rhs: rhs.into(),
        }
    }
}

/// Which model to compile a puzzle into
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelKind {
    /// binary not-equal constraints
    Binary,
    /// one all-different constraint per row and column
    AllDifferent,
}

impl ModelKind {
    pub fn build(
        self,
        board: &Board,
        inequalities: &[Inequality],
    ) -> Result<(Csp, VariableGrid), ModelError> {
        match self {
            ModelKind::Binary => build_model_1(board, inequalities),
            ModelKind::AllDifferent => build_model_2(board, inequalities),
        }
    }
}

impl FromStr for ModelKind {
    type Err = ParseModelKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "binary" => Ok(ModelKind::Binary),
            "2" | "all-different" => Ok(ModelKind::AllDifferent),
            _ => Err(ParseModelKindError(s.to_string())),
        }
    }
}

/// Creates one variable per cell, named by its one-based row and column
fn add_cell_variables(csp: &mut Csp, board: &Board) -> Result<VariableGrid, ModelError> {
    let width = board.width();
    let full: Vec<Value> = (1..=width as Value).collect();
    let mut ids = Vec::with_capacity(width.pow(2));
    for row in 0..width {
        for col in 0..width {
            let domain = match board.fixed(Coord::new(col, row)) {
                Some(value) => vec![value],
                None => full.clone(),
            };
            ids.push(csp.add_variable(format!("{},{}", row + 1, col + 1), domain)?);
        }
    }
    VariableGrid::try_from(ids).map_err(|e| ModelError::InvalidBoard(format!("{:?}", e)))
}

/// Adds a binary constraint for each inequality
fn add_inequality_constraints(
    csp: &mut Csp,
    grid: &VariableGrid,
    inequalities: &[Inequality],
) -> Result<(), ModelError> {
    let width = grid.width();
    for inequality in inequalities {
        let lhs = inequality.lhs.coord(width)?;
        let rhs = inequality.rhs.coord(width)?;
        if lhs == rhs {
            return Err(ModelError::SelfInequality {
                row: inequality.lhs.row,
                col: inequality.lhs.col,
            });
        }
        let (a, b) = (grid[lhs], grid[rhs]);
        let name = format!(
            "{} {} {}",
            csp.variable(a),
            inequality.relation,
            csp.variable(b)
        );
        let tuples = tuples::inequality(
            csp.variable(a).original_domain(),
            inequality.relation,
            csp.variable(b).original_domain(),
        );
        let mut constraint = Constraint::new(name, vec![a, b])?;
        constraint.add_satisfying_tuples(tuples)?;
        csp.add_constraint(constraint)?;
    }
    Ok(())
}
