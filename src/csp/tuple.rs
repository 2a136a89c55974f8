use std::fmt;
use std::fmt::{Debug, Formatter};
use std::ops::Deref;

use itertools::Itertools;

use crate::csp::Value;

/// One combination of values, positionally matching the scope of a constraint
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tuple(Box<[Value]>);

impl Tuple {
    pub fn new(values: impl Into<Box<[Value]>>) -> Self {
        Self(values.into())
    }
}

impl Deref for Tuple {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[Value; N]> for Tuple {
    fn from(values: [Value; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl Debug for Tuple {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}
