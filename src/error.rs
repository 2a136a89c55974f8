use thiserror::Error;

use crate::csp::Value;

/// A violation of the construction contract of a `Csp`, its variables or its constraints
#[derive(Debug, Error, PartialEq)]
pub enum CspError {
    #[error("variable \"{0}\" has an empty domain")]
    EmptyDomain(String),
    #[error("value {value} appears more than once in the domain of \"{variable}\"")]
    DuplicateDomainValue { variable: String, value: Value },
    #[error("a variable named \"{0}\" already exists")]
    DuplicateVariableName(String),
    #[error("constraint \"{0}\" has an empty scope")]
    EmptyScope(String),
    #[error("variable #{variable} appears more than once in the scope of \"{constraint}\"")]
    DuplicateScopeVariable { constraint: String, variable: usize },
    #[error("constraint \"{constraint}\" references unknown variable #{variable}")]
    UnknownVariable { constraint: String, variable: usize },
    #[error("tuple of length {found} does not fit the scope of \"{constraint}\" (length {expected})")]
    TupleLength {
        constraint: String,
        expected: usize,
        found: usize,
    },
    #[error("value {value} is outside the domain of \"{variable}\" in constraint \"{constraint}\"")]
    ValueOutsideDomain {
        constraint: String,
        variable: String,
        value: Value,
    },
}

/// An invalid puzzle was given to a model builder
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("cell ({row}, {col}) is outside of the {width}x{width} board")]
    CellOutOfRange { row: usize, col: usize, width: usize },
    #[error("inequality compares cell ({row}, {col}) with itself")]
    SelfInequality { row: usize, col: usize },
    #[error(transparent)]
    Csp(#[from] CspError),
}

#[derive(Debug, Error, PartialEq)]
#[error("invalid relation: \"{0}\"")]
pub struct ParseRelationError(pub(crate) String);

#[derive(Debug, Error, PartialEq)]
#[error("unknown model: \"{0}\"")]
pub struct ParseModelKindError(pub(crate) String);

#[derive(Debug, Error, PartialEq)]
#[error("unknown propagator: \"{0}\"")]
pub struct ParsePropagatorError(pub(crate) String);
