//! Recommended particle-in-cell resolution for a laser-driven plasma.
//!
//! The laser wavelength and the plasma skin depth are the smallest length
//! scales to resolve. "Longitudinal" means along the laser propagation axis.
//! Suggested particles per cell: 64 in 1D, 10 in 2D, 8 in 3D.
//!
//! Every count (cells, particles, steps) truncates the underlying continuous
//! ratio toward zero; see [`truncate_to_count`].

use super::plasma::Plasma;
use crate::common::constants::PhysicalConstants;
use crate::domain::{LwfaError, LwfaResult};
use crate::numerics::truncate_to_count;
use crate::units::{Dimension, Quantity};
use tracing::debug;

pub const DEFAULT_PARTICLES_PER_CELL: u32 = 8;
/// Default cubic box edge, in plasma wavelengths.
pub const DEFAULT_BOX_PLASMA_WAVELENGTHS: f64 = 4.0;
pub const CELLS_PER_SKIN_DEPTH: f64 = 10.0;
pub const CELLS_PER_LASER_WAVELENGTH: f64 = 20.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationOptions {
    /// Edge of the cubic box; defaults to 4 plasma wavelengths.
    pub box_length: Option<Quantity>,
    pub particles_per_cell: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResolution {
    plasma: Plasma,
    box_length: Quantity,
    particles_per_cell: u32,
    dx: Quantity,
    dy: Quantity,
    dz: Quantity,
    nx: u64,
    ny: u64,
    nz: u64,
    particle_count: u64,
    time_step: Quantity,
    interaction_time: Quantity,
    step_count: u64,
}

impl SimulationResolution {
    pub fn new(
        constants: &PhysicalConstants,
        plasma: Plasma,
        options: SimulationOptions,
    ) -> LwfaResult<Self> {
        let (wavelength, acceleration_length) = match plasma.drive() {
            Some(drive) => (drive.laser.wavelength(), drive.acceleration_length),
            None => return Err(LwfaError::MissingLaser),
        };
        let c = constants.speed_of_light();

        let box_length = match options.box_length {
            Some(length) => length.expect_positive(Dimension::LENGTH, "simulation box length")?,
            None => plasma.wavelength() * DEFAULT_BOX_PLASMA_WAVELENGTHS,
        };
        let particles_per_cell = match options.particles_per_cell {
            Some(0) => {
                return Err(LwfaError::invalid_quantity(
                    "particles per cell = 0",
                    "must be at least 1",
                ));
            }
            Some(count) => count,
            None => DEFAULT_PARTICLES_PER_CELL,
        };

        let dx = plasma.length_unit() / CELLS_PER_SKIN_DEPTH;
        let dy = dx;
        let dz = wavelength / CELLS_PER_LASER_WAVELENGTH;

        let nx = truncate_to_count(box_length.ratio(dx)?);
        let ny = nx;
        let nz = truncate_to_count(box_length.ratio(dz)?);
        let particle_count = [ny, nz, u64::from(particles_per_cell)]
            .into_iter()
            .try_fold(nx, u64::checked_mul)
            .ok_or_else(|| {
                LwfaError::invalid_quantity(
                    format!("{nx} x {ny} x {nz} cells x {particles_per_cell} particles"),
                    "total particle count overflows u64",
                )
            })?;

        let time_step = dz / c;
        let interaction_time = acceleration_length.try_add(box_length)? / c;
        let step_count = truncate_to_count(interaction_time.ratio(time_step)?);

        debug!(nx, ny, nz, particle_count, step_count, "estimated simulation resolution");

        Ok(Self {
            plasma,
            box_length,
            particles_per_cell,
            dx,
            dy,
            dz,
            nx,
            ny,
            nz,
            particle_count,
            time_step,
            interaction_time,
            step_count,
        })
    }

    pub const fn plasma(&self) -> &Plasma {
        &self.plasma
    }

    pub const fn box_length(&self) -> Quantity {
        self.box_length
    }

    pub const fn particles_per_cell(&self) -> u32 {
        self.particles_per_cell
    }

    /// Transverse (dx, dy) and longitudinal (dz) cell sizes.
    pub const fn cell_size(&self) -> (Quantity, Quantity, Quantity) {
        (self.dx, self.dy, self.dz)
    }

    pub const fn cell_counts(&self) -> (u64, u64, u64) {
        (self.nx, self.ny, self.nz)
    }

    pub const fn particle_count(&self) -> u64 {
        self.particle_count
    }

    pub const fn time_step(&self) -> Quantity {
        self.time_step
    }

    /// Time for the moving window to slide across the plasma.
    pub const fn interaction_time(&self) -> Quantity {
        self.interaction_time
    }

    pub const fn step_count(&self) -> u64 {
        self.step_count
    }
}
