mod coord;
mod vector;

pub use self::coord::Coord;
pub use self::vector::Dimension;
pub use self::vector::VectorId;

use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::ops::{Index, IndexMut};

/// A value that can be converted to an index into the elements of a `Square` given its width
pub trait AsSquareIndex: Copy {
    fn as_square_index(self, width: usize) -> usize;
}

impl AsSquareIndex for usize {
    fn as_square_index(self, _width: usize) -> usize {
        self
    }
}

impl AsSquareIndex for Coord {
    fn as_square_index(self, width: usize) -> usize {
        self.row() * width + self.col()
    }
}

/// A container of elements represented in a square grid, stored row by row
#[derive(Clone, Debug, PartialEq)]
pub struct Square<T> {
    width: usize,
    elements: Vec<T>,
}

impl<T> Square<T> {
    /// Creates a square from a list of rows. Every row must have as many elements as there are rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, NonSquareLength> {
        let width = rows.len();
        if rows.iter().any(|row| row.len() != width) {
            return Err(NonSquareLength(rows.iter().map(Vec::len).sum()));
        }
        Ok(Self {
            width,
            elements: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the width (and height) of the grid
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn coord_at(&self, index: usize) -> Coord {
        assert!(index < self.len());
        Coord::new(index % self.width, index / self.width)
    }

    /// Returns an iterator over the rows of the square
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.elements.chunks(self.width)
    }

    /// Returns an iterator over the elements of a row or column, in order
    pub fn vector(&self, vector_id: VectorId) -> impl Iterator<Item = &T> + Clone + '_ {
        assert!(vector_id.index() < self.width);
        (0..self.width).map(move |position| &self[vector_id.coord_at(position)])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    /// Returns an iterator over every element, paired with its `Coord`
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (self.coord_at(i), e))
    }

    /// Creates a square of the same width by applying `f` to every element
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Square<U> {
        Square {
            width: self.width,
            elements: self.elements.iter().map(f).collect(),
        }
    }
}

impl<T, I: AsSquareIndex> Index<I> for Square<T> {
    type Output = T;

    fn index(&self, index: I) -> &Self::Output {
        &self.elements[index.as_square_index(self.width)]
    }
}

impl<T, I: AsSquareIndex> IndexMut<I> for Square<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.elements[index.as_square_index(self.width)]
    }
}

#[derive(PartialEq)]
pub struct NonSquareLength(pub usize);

impl Debug for NonSquareLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The length of elements ({}) is not square", self.0)
    }
}

impl<T> TryFrom<Vec<T>> for Square<T> {
    type Error = NonSquareLength;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        let width = (elements.len() as f64).sqrt() as usize;
        if elements.len() != width.pow(2) {
            return Err(NonSquareLength(elements.len()));
        }
        Ok(Self { width, elements })
    }
}
