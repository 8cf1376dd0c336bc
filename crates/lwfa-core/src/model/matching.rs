//! Matched laser-plasma configuration in the blowout regime.
//!
//! Requiring the dephasing length to equal the pump-depletion length, and the
//! pulse to be self-guided, fixes the pulse duration and plasma density for a
//! given a0. Matching the spot to the plasma (alpha = 1) fixes the waist, and
//! the blowout radius is taken equal to the waist (beta = 1). These scaling
//! laws hold up to a critical `a0c = 2 sqrt(n_crit / n_pe)`.

use super::beam::GaussianBeam;
use super::laser::{Laser, PulseConstraint};
use super::plasma::{BubbleRadius, Plasma, PlasmaOptions};
use crate::common::constants::PhysicalConstants;
use crate::domain::LwfaResult;
use crate::units::{Dimension, Quantity};
use std::f64::consts::PI;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct MatchedConfiguration {
    a0: f64,
    plasma: Plasma,
    critical_a0: f64,
}

impl MatchedConfiguration {
    pub const fn a0(&self) -> f64 {
        self.a0
    }

    pub const fn plasma(&self) -> &Plasma {
        &self.plasma
    }

    pub fn into_plasma(self) -> Plasma {
        self.plasma
    }

    pub fn laser(&self) -> Option<&Laser> {
        self.plasma.laser()
    }

    /// Upper a0 for which the matching scaling laws remain valid.
    pub const fn critical_a0(&self) -> f64 {
        self.critical_a0
    }

    pub fn within_validity(&self) -> bool {
        self.a0 <= self.critical_a0
    }
}

/// Derives the self-consistent laser and plasma for target `a0` at
/// `wavelength`. Exceeding the validity bound is reported, never an error.
pub fn matched_laser_plasma(
    constants: &PhysicalConstants,
    a0: f64,
    wavelength: Quantity,
) -> LwfaResult<MatchedConfiguration> {
    let a0 = Quantity::dimensionless(a0)
        .expect_positive(Dimension::DIMENSIONLESS, "normalized vector potential a0")?
        .si_value();
    let wavelength = wavelength.expect_positive(Dimension::LENGTH, "laser wavelength")?;
    let r_e = constants.classical_electron_radius();

    let duration = (2.0 / (3.0 * PI) * wavelength / constants.speed_of_light() * a0.powi(3))
        .expect_dimension(Dimension::TIME, "matched pulse duration")?;
    let density = (PI / (r_e * wavelength.powi(2) * a0.powi(5)))
        .expect_dimension(Dimension::NUMBER_DENSITY, "matched plasma density")?;
    let w0 = (a0 / (PI * r_e * density)).sqrt()?;

    let beam = GaussianBeam::from_waist(w0, wavelength)?;
    let laser = Laser::from_a0(
        constants,
        a0,
        beam,
        PulseConstraint::DurationAndBeam { duration },
    )?;

    let critical_a0 = 2.0 * laser.critical_density().ratio(density)?.sqrt();
    if a0 > critical_a0 {
        warn!(a0, critical_a0, "matched scaling laws are only valid up to a0c");
    } else {
        debug!(a0, critical_a0, "matched scaling laws valid up to a0c");
    }

    let plasma = Plasma::with_laser(
        constants,
        density,
        laser,
        PlasmaOptions {
            bubble_radius: Some(BubbleRadius::Explicit(w0)),
            propagation_distance: None,
        },
    )?;

    Ok(MatchedConfiguration {
        a0,
        plasma,
        critical_a0,
    })
}

#[cfg(test)]
mod tests {
    use super::matched_laser_plasma;
    use crate::common::constants::PhysicalConstants;
    use crate::domain::LwfaError;
    use crate::model::beam::default_wavelength;
    use crate::units::{FEMTOSECOND, MICROMETER, PER_CM3, Quantity};

    fn relative_error(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn matched_configuration_reproduces_reference_values() {
        let constants = PhysicalConstants::codata_2018();
        let matched =
            matched_laser_plasma(&constants, 4.1, default_wavelength()).expect("matched");
        let plasma = matched.plasma();
        let laser = matched.laser().expect("laser attached");

        let density = plasma.density().to(PER_CM3).expect("cm^-3");
        assert!(relative_error(density, 1.503_553_282_200_464_6e18) < 1.0e-9);
        let duration = laser.duration().to(FEMTOSECOND).expect("fs");
        assert!(relative_error(duration, 39.028_307_893_674_95) < 1.0e-9);
        let w0 = laser.beam().waist().expect("waist").to(MICROMETER).expect("um");
        assert!(relative_error(w0, 17.550_588_532_538_423) < 1.0e-9);
        assert!(relative_error(laser.a0().expect("a0"), 4.1) < 1.0e-9);
    }

    #[test]
    fn critical_a0_follows_density_ratio() {
        let constants = PhysicalConstants::codata_2018();
        let matched =
            matched_laser_plasma(&constants, 4.1, default_wavelength()).expect("matched");
        let laser = matched.laser().expect("laser attached");
        let ratio = laser
            .critical_density()
            .ratio(matched.plasma().density())
            .expect("densities compare");
        assert_eq!(matched.critical_a0(), 2.0 * ratio.sqrt());
        assert!(relative_error(matched.critical_a0(), 68.075_311_530_686_35) < 1.0e-9);
        assert!(matched.within_validity());
    }

    #[test]
    fn matched_plasma_uses_waist_as_bubble_radius_and_dephasing_as_length() {
        let constants = PhysicalConstants::codata_2018();
        let matched =
            matched_laser_plasma(&constants, 3.1, default_wavelength()).expect("matched");
        let plasma = matched.plasma();

        assert_eq!(plasma.acceleration_length(), plasma.dephasing_length());
        let radius = plasma.bubble_radius().expect("bubble radius set");
        assert!(relative_error(radius.to(MICROMETER).expect("um"), 7.586_215_855_441_046) < 1.0e-9);
        let efficiency = plasma.bunch().expect("bunch").efficiency;
        assert!(efficiency > 0.0 && efficiency < 1.0);
    }

    #[test]
    fn invalid_inputs_fail_before_any_derivation() {
        let constants = PhysicalConstants::codata_2018();
        assert!(matches!(
            matched_laser_plasma(&constants, 0.0, default_wavelength()),
            Err(LwfaError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            matched_laser_plasma(&constants, 4.1, Quantity::new(0.8, FEMTOSECOND)),
            Err(LwfaError::DimensionMismatch { .. })
        ));
    }
}
