//! Model and propagate Futoshiki puzzles as finite-domain constraint satisfaction problems

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod csp;
pub mod error;
pub mod model;
pub mod propagate;
