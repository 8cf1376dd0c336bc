//! Physical constants (CODATA 2018, SI) used by every derivation.
//!
//! The table is an ordinary immutable value. Build it once and hand it to the
//! model constructors by reference.

use crate::domain::LwfaResult;
use crate::units::{Dimension, Quantity};
use std::f64::consts::PI;

pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    speed_of_light: Quantity,
    electron_mass: Quantity,
    elementary_charge: Quantity,
    vacuum_permittivity: Quantity,
    classical_electron_radius: Quantity,
}

impl PhysicalConstants {
    pub fn codata_2018() -> Self {
        Self::derive(
            Quantity::from_si(SPEED_OF_LIGHT, Dimension::VELOCITY),
            Quantity::from_si(ELECTRON_MASS, Dimension::MASS),
            Quantity::from_si(ELEMENTARY_CHARGE, Dimension::CHARGE),
            Quantity::from_si(VACUUM_PERMITTIVITY, Dimension::PERMITTIVITY),
        )
    }

    /// Custom table; each value must carry its proper dimension.
    pub fn new(
        speed_of_light: Quantity,
        electron_mass: Quantity,
        elementary_charge: Quantity,
        vacuum_permittivity: Quantity,
    ) -> LwfaResult<Self> {
        Ok(Self::derive(
            speed_of_light.expect_positive(Dimension::VELOCITY, "speed of light")?,
            electron_mass.expect_positive(Dimension::MASS, "electron mass")?,
            elementary_charge
                .abs()
                .expect_positive(Dimension::CHARGE, "elementary charge")?,
            vacuum_permittivity.expect_positive(Dimension::PERMITTIVITY, "vacuum permittivity")?,
        ))
    }

    // r_e = q_e^2 / (4 pi eps0 m_e c^2)
    fn derive(c: Quantity, m_e: Quantity, q_e: Quantity, eps0: Quantity) -> Self {
        let classical_electron_radius = q_e.powi(2) / (4.0 * PI * eps0 * m_e * c.powi(2));
        Self {
            speed_of_light: c,
            electron_mass: m_e,
            elementary_charge: q_e,
            vacuum_permittivity: eps0,
            classical_electron_radius,
        }
    }

    pub const fn speed_of_light(&self) -> Quantity {
        self.speed_of_light
    }

    pub const fn electron_mass(&self) -> Quantity {
        self.electron_mass
    }

    /// |q_e|
    pub const fn elementary_charge(&self) -> Quantity {
        self.elementary_charge
    }

    pub const fn vacuum_permittivity(&self) -> Quantity {
        self.vacuum_permittivity
    }

    pub const fn classical_electron_radius(&self) -> Quantity {
        self.classical_electron_radius
    }

    pub fn electron_rest_energy(&self) -> Quantity {
        self.electron_mass * self.speed_of_light.powi(2)
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::codata_2018()
    }
}

#[cfg(test)]
mod tests {
    use super::PhysicalConstants;
    use crate::units::{Dimension, MEGAELECTRONVOLT, METER, Quantity};

    #[test]
    fn classical_electron_radius_is_a_length_of_expected_size() {
        let constants = PhysicalConstants::codata_2018();
        let r_e = constants.classical_electron_radius();
        assert_eq!(r_e.dimension(), Dimension::LENGTH);
        let meters = r_e.to(METER).expect("r_e is a length");
        assert!((meters - 2.817_940_326_2e-15).abs() / 2.817_940_326_2e-15 < 1.0e-9);
    }

    #[test]
    fn electron_rest_energy_is_511_kev() {
        let rest = PhysicalConstants::default()
            .electron_rest_energy()
            .to(MEGAELECTRONVOLT)
            .expect("rest energy is an energy");
        assert!((rest - 0.510_998_95).abs() < 1.0e-7);
    }

    #[test]
    fn custom_tables_reject_misdimensioned_values() {
        let reference = PhysicalConstants::codata_2018();
        let result = PhysicalConstants::new(
            Quantity::dimensionless(1.0),
            reference.electron_mass(),
            reference.elementary_charge(),
            reference.vacuum_permittivity(),
        );
        assert!(result.is_err());

        let rebuilt = PhysicalConstants::new(
            reference.speed_of_light(),
            reference.electron_mass(),
            -reference.elementary_charge(),
            reference.vacuum_permittivity(),
        )
        .expect("reference values are valid");
        assert_eq!(rebuilt, reference);
    }
}
