//! Plasma scales and, with a laser attached, the wakefield acceleration
//! estimates of Lu et al., Phys. Rev. ST Accel. Beams 10, 061301 (2007).

use super::laser::Laser;
use crate::common::constants::PhysicalConstants;
use crate::domain::{LwfaError, LwfaResult};
use crate::units::{Dimension, GIGAWATT, Quantity};
use std::f64::consts::PI;
use tracing::debug;

/// Critical power for relativistic self-focusing is `17 * gamma_p^2` GW.
const SELF_FOCUSING_POWER_GW: f64 = 17.0;

/// How the blowout (bubble) radius is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BubbleRadius {
    Explicit(Quantity),
    /// `R = 2 sqrt(a0) / kp`.
    Estimated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlasmaOptions {
    pub bubble_radius: Option<BubbleRadius>,
    /// Length of the plasma region; defaults to the dephasing length.
    pub propagation_distance: Option<Quantity>,
}

/// Charge and efficiency estimate for a given bubble radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BunchEstimate {
    pub bubble_radius: Quantity,
    pub electron_count: f64,
    pub charge: Quantity,
    /// Total bunch energy `N * dE` over laser energy. Roughly `1 / (2 a0)`
    /// under matched conditions.
    pub efficiency: f64,
}

/// Quantities that exist only when a laser drives the plasma.
#[derive(Debug, Clone, PartialEq)]
pub struct LaserDrive {
    pub laser: Laser,
    pub gamma: f64,
    pub critical_power: Quantity,
    pub dephasing_length: Quantity,
    pub depletion_length: Quantity,
    pub average_field: Quantity,
    pub acceleration_length: Quantity,
    pub energy_gain: Quantity,
    pub bunch: Option<BunchEstimate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plasma {
    density: Quantity,
    wavelength: Quantity,
    wavenumber: Quantity,
    angular_frequency: Quantity,
    wavebreaking_field: Quantity,
    length_unit: Quantity,
    time_unit: Quantity,
    drive: Option<LaserDrive>,
}

impl Plasma {
    /// Plasma without a driver: only the density-derived scales.
    pub fn new(constants: &PhysicalConstants, density: Quantity) -> LwfaResult<Self> {
        let density = density.expect_positive(Dimension::NUMBER_DENSITY, "plasma density")?;
        let c = constants.speed_of_light();

        let wavelength = (PI / (constants.classical_electron_radius() * density)).sqrt()?;
        let wavenumber = 2.0 * PI / wavelength;
        let angular_frequency = c * wavenumber;
        let wavebreaking_field = (constants.electron_mass() * c * angular_frequency
            / constants.elementary_charge())
        .expect_dimension(Dimension::ELECTRIC_FIELD, "wave-breaking field")?;
        let length_unit = c / angular_frequency;
        let time_unit = angular_frequency.recip();

        Ok(Self {
            density,
            wavelength,
            wavenumber,
            angular_frequency,
            wavebreaking_field,
            length_unit,
            time_unit,
            drive: None,
        })
    }

    /// Plasma driven by `laser`. The laser must have a finite waist, since
    /// every acceleration estimate scales with its a0.
    pub fn with_laser(
        constants: &PhysicalConstants,
        density: Quantity,
        laser: Laser,
        options: PlasmaOptions,
    ) -> LwfaResult<Self> {
        let mut plasma = Self::new(constants, density)?;
        let a0 = laser.a0().ok_or(LwfaError::MissingBeamWaist {
            context: "plasma acceleration estimates",
        })?;
        let c = constants.speed_of_light();
        let sqrt_a0 = a0.sqrt();

        let gamma = laser.angular_frequency().ratio(plasma.angular_frequency)?;
        let critical_power = Quantity::new(SELF_FOCUSING_POWER_GW * gamma.powi(2), GIGAWATT);
        let dephasing_length = (4.0 / 3.0 * gamma.powi(2) * sqrt_a0 / plasma.wavenumber)
            .expect_dimension(Dimension::LENGTH, "dephasing length")?;
        let depletion_length = (gamma.powi(2) * c * laser.duration())
            .expect_dimension(Dimension::LENGTH, "depletion length")?;
        let average_field = plasma.wavebreaking_field * (sqrt_a0 / 2.0);

        let acceleration_length = match options.propagation_distance {
            Some(distance) => distance.expect_positive(Dimension::LENGTH, "propagation distance")?,
            None => dephasing_length,
        };
        let energy_gain = (constants.elementary_charge() * average_field * acceleration_length)
            .expect_dimension(Dimension::ENERGY, "energy gain")?;

        let bunch = match options.bubble_radius {
            Some(radius) => {
                let radius = match radius {
                    BubbleRadius::Explicit(radius) => {
                        radius.expect_positive(Dimension::LENGTH, "bubble radius")?
                    }
                    BubbleRadius::Estimated => 2.0 * sqrt_a0 / plasma.wavenumber,
                };
                Some(estimate_bunch(
                    constants,
                    plasma.wavenumber,
                    radius,
                    energy_gain,
                    laser.energy(),
                )?)
            }
            None => None,
        };

        debug!(
            gamma,
            dephasing_m = dephasing_length.si_value(),
            depletion_m = depletion_length.si_value(),
            has_bunch = bunch.is_some(),
            "derived laser-driven plasma"
        );

        plasma.drive = Some(LaserDrive {
            laser,
            gamma,
            critical_power,
            dephasing_length,
            depletion_length,
            average_field,
            acceleration_length,
            energy_gain,
            bunch,
        });
        Ok(plasma)
    }

    pub const fn density(&self) -> Quantity {
        self.density
    }

    /// Plasma wavelength `lambda_p = sqrt(pi / (r_e n_pe))`.
    pub const fn wavelength(&self) -> Quantity {
        self.wavelength
    }

    pub const fn wavenumber(&self) -> Quantity {
        self.wavenumber
    }

    pub const fn angular_frequency(&self) -> Quantity {
        self.angular_frequency
    }

    /// Cold, 1D wave-breaking field `m_e c omega_p / e`.
    pub const fn wavebreaking_field(&self) -> Quantity {
        self.wavebreaking_field
    }

    /// Skin depth `c / omega_p`, the natural length unit.
    pub const fn length_unit(&self) -> Quantity {
        self.length_unit
    }

    /// `1 / omega_p`, the natural time unit.
    pub const fn time_unit(&self) -> Quantity {
        self.time_unit
    }

    pub const fn drive(&self) -> Option<&LaserDrive> {
        self.drive.as_ref()
    }

    pub fn laser(&self) -> Option<&Laser> {
        self.drive.as_ref().map(|drive| &drive.laser)
    }

    pub fn acceleration_length(&self) -> Option<Quantity> {
        self.drive.as_ref().map(|drive| drive.acceleration_length)
    }

    pub fn dephasing_length(&self) -> Option<Quantity> {
        self.drive.as_ref().map(|drive| drive.dephasing_length)
    }

    pub fn bunch(&self) -> Option<&BunchEstimate> {
        self.drive.as_ref().and_then(|drive| drive.bunch.as_ref())
    }

    /// Absent, never zero, when no bubble radius was given.
    pub fn bubble_radius(&self) -> Option<Quantity> {
        self.bunch().map(|bunch| bunch.bubble_radius)
    }

    /// `n_pe / n_crit` for the attached laser.
    pub fn density_ratio(&self) -> Option<f64> {
        let laser = self.laser()?;
        self.density.ratio(laser.critical_density()).ok()
    }

    /// Blowout radius estimate `2 sqrt(a0) / kp` for the attached laser.
    pub fn estimated_bubble_radius(&self) -> Option<Quantity> {
        let a0 = self.laser()?.a0()?;
        Some(2.0 * a0.sqrt() / self.wavenumber)
    }
}

// N = (1/30) (kp R)^3 / (kp r_e), Q = N e, eta = N dE / energy
fn estimate_bunch(
    constants: &PhysicalConstants,
    wavenumber: Quantity,
    bubble_radius: Quantity,
    energy_gain: Quantity,
    laser_energy: Quantity,
) -> LwfaResult<BunchEstimate> {
    let electron_count = ((wavenumber * bubble_radius).powi(3)
        / (wavenumber * constants.classical_electron_radius())
        / 30.0)
        .to_dimensionless()?;
    let charge = constants.elementary_charge() * electron_count;
    let efficiency = (energy_gain * electron_count).ratio(laser_energy)?;
    Ok(BunchEstimate {
        bubble_radius,
        electron_count,
        charge,
        efficiency,
    })
}
