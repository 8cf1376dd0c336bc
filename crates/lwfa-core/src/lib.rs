//! Physical-parameter derivation for laser-wakefield acceleration.
//!
//! The crate derives a consistent set of laser, plasma and simulation
//! quantities from a handful of known inputs. Every quantity is carried as a
//! dimensioned [`units::Quantity`], so formulas that combine incompatible
//! dimensions fail instead of producing silently wrong numbers.
//!
//! Entities are immutable values built strictly bottom-up:
//! [`GaussianBeam`] -> [`Laser`] -> [`Plasma`] -> {[`SimulationResolution`],
//! [`MatchedConfiguration`]}. Physical constants are supplied by reference
//! through [`PhysicalConstants`].

pub mod common;
pub mod domain;
pub mod model;
pub mod numerics;
pub mod report;
pub mod scenario;
pub mod units;

pub use common::constants::PhysicalConstants;
pub use domain::{LwfaError, LwfaErrorCategory, LwfaResult};
pub use model::beam::GaussianBeam;
pub use model::laser::{Laser, PowerConstraint, PulseConstraint};
pub use model::matching::{MatchedConfiguration, matched_laser_plasma};
pub use model::plasma::{BubbleRadius, Plasma, PlasmaOptions};
pub use model::simulation::{SimulationOptions, SimulationResolution};
pub use units::{Dimension, Quantity, Unit};
