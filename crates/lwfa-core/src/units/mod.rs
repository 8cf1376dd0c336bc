//! Dimensioned quantities and the unit catalogue.

mod dimension;
mod quantity;
mod unit;

pub use dimension::Dimension;
pub use quantity::{DEFAULT_RELATIVE_TOLERANCE, Quantity, convert};
pub use unit::*;
