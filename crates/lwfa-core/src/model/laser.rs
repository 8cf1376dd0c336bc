//! Laser pulse energetics and the fields it produces at focus.

use super::beam::GaussianBeam;
use crate::common::constants::PhysicalConstants;
use crate::domain::{LwfaError, LwfaResult};
use crate::units::{Dimension, Quantity};
use std::f64::consts::{LN_2, PI};
use tracing::debug;

/// Peak intensity in the focal plane for a given a0:
/// `I0 = pi/2 * c/r_e * m_e c^2 / lambda^2 * a0^2`.
pub fn intensity_from_a0(
    constants: &PhysicalConstants,
    a0: f64,
    wavelength: Quantity,
) -> LwfaResult<Quantity> {
    let a0 = require_a0(a0)?;
    Ok(intensity_scale(constants, wavelength)? * a0.powi(2))
}

/// Inverse of [`intensity_from_a0`].
pub fn a0_from_intensity(
    constants: &PhysicalConstants,
    intensity: Quantity,
    wavelength: Quantity,
) -> LwfaResult<f64> {
    let intensity = intensity.expect_positive(Dimension::INTENSITY, "laser intensity")?;
    (intensity / intensity_scale(constants, wavelength)?)
        .sqrt()?
        .to_dimensionless()
}

// Intensity corresponding to a0 = 1.
fn intensity_scale(constants: &PhysicalConstants, wavelength: Quantity) -> LwfaResult<Quantity> {
    let wavelength = wavelength.expect_positive(Dimension::LENGTH, "laser wavelength")?;
    let c = constants.speed_of_light();
    let scale = PI / 2.0 * c / constants.classical_electron_radius()
        * constants.electron_rest_energy()
        / wavelength.powi(2);
    scale.expect_dimension(Dimension::INTENSITY, "intensity scale")
}

fn require_a0(a0: f64) -> LwfaResult<f64> {
    Quantity::dimensionless(a0)
        .expect_positive(Dimension::DIMENSIONLESS, "normalized vector potential a0")
        .map(|quantity| quantity.si_value())
}

/// `(4 ln2 / pi)^(3/2)`, relating energy, duration, FWHM and peak intensity.
fn gaussian_energy_prefactor() -> f64 {
    (4.0 * LN_2 / PI).powf(1.5)
}

/// `2 sqrt(ln2 / pi)`, relating energy and duration to peak power.
fn gaussian_power_prefactor() -> f64 {
    2.0 * (LN_2 / PI).sqrt()
}

/// Which two of {energy, duration, beam FWHM} accompany a target a0 (or
/// intensity); the third is solved for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PulseConstraint {
    /// The beam passed alongside may only carry the wavelength.
    EnergyAndDuration { energy: Quantity, duration: Quantity },
    /// The beam passed alongside must carry a FWHM.
    EnergyAndBeam { energy: Quantity },
    /// The beam passed alongside must carry a FWHM.
    DurationAndBeam { duration: Quantity },
}

impl PulseConstraint {
    /// Picks the constraint from optionally supplied inputs. Exactly one of
    /// (energy, duration), (energy, beam) or (duration, beam) must be present.
    pub fn resolve(
        energy: Option<Quantity>,
        duration: Option<Quantity>,
        beam: &GaussianBeam,
    ) -> LwfaResult<Self> {
        match (energy, duration, beam.fwhm().is_some()) {
            (Some(energy), Some(duration), false) => {
                Ok(Self::EnergyAndDuration { energy, duration })
            }
            (Some(energy), None, true) => Ok(Self::EnergyAndBeam { energy }),
            (None, Some(duration), true) => Ok(Self::DurationAndBeam { duration }),
            (energy, duration, has_fwhm) => Err(LwfaError::ambiguous(
                "Laser::from_a0",
                format!(
                    "must supply exactly one of (energy, duration), (energy, beam) or (duration, beam); got energy={}, duration={}, beam spot={}",
                    energy.is_some(),
                    duration.is_some(),
                    has_fwhm
                ),
            )),
        }
    }
}

/// Which of {energy, duration} accompanies a target peak power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PowerConstraint {
    Energy(Quantity),
    Duration(Quantity),
}

impl PowerConstraint {
    pub fn resolve(energy: Option<Quantity>, duration: Option<Quantity>) -> LwfaResult<Self> {
        match (energy, duration) {
            (Some(energy), None) => Ok(Self::Energy(energy)),
            (None, Some(duration)) => Ok(Self::Duration(duration)),
            (Some(_), Some(_)) => Err(LwfaError::ambiguous(
                "Laser::from_power",
                "both energy and duration were supplied; give exactly one",
            )),
            (None, None) => Err(LwfaError::ambiguous(
                "Laser::from_power",
                "neither energy nor duration was supplied; give exactly one",
            )),
        }
    }
}

/// Quantities that need a finite spot size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalFields {
    pub intensity: Quantity,
    pub a0: f64,
    pub peak_field: Quantity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Laser {
    beam: GaussianBeam,
    energy: Quantity,
    duration: Quantity,
    wavenumber: Quantity,
    angular_frequency: Quantity,
    critical_density: Quantity,
    power: Quantity,
    focal: Option<FocalFields>,
}

impl Laser {
    /// Pulse of energy `energy` (on target) and intensity FWHM duration
    /// `duration`. Peak intensity, a0 and peak field are derived only when
    /// the beam has a waist.
    pub fn new(
        constants: &PhysicalConstants,
        energy: Quantity,
        duration: Quantity,
        beam: GaussianBeam,
    ) -> LwfaResult<Self> {
        let energy = energy.expect_positive(Dimension::ENERGY, "laser energy")?;
        let duration = duration.expect_positive(Dimension::TIME, "laser duration")?;
        let wavelength = beam.wavelength();
        let c = constants.speed_of_light();

        let wavenumber = 2.0 * PI / wavelength;
        let angular_frequency = c * wavenumber;
        let critical_density =
            (PI / (constants.classical_electron_radius() * wavelength.powi(2)))
                .expect_dimension(Dimension::NUMBER_DENSITY, "critical density")?;
        let power = (gaussian_power_prefactor() * energy / duration)
            .expect_dimension(Dimension::POWER, "laser power")?;

        let focal = match beam.waist() {
            Some(w0) => {
                let intensity = (2.0 / PI * (4.0 * LN_2 / PI).sqrt() * energy
                    / (duration * w0.powi(2)))
                .expect_dimension(Dimension::INTENSITY, "peak intensity")?;
                let a0 = a0_from_intensity(constants, intensity, wavelength)?;
                let peak_field = (c * constants.electron_mass() * angular_frequency
                    / constants.elementary_charge()
                    * a0)
                    .expect_dimension(Dimension::ELECTRIC_FIELD, "peak electric field")?;
                Some(FocalFields {
                    intensity,
                    a0,
                    peak_field,
                })
            }
            None => None,
        };

        debug!(
            energy_j = energy.si_value(),
            duration_s = duration.si_value(),
            a0 = focal.map(|fields| fields.a0),
            "derived laser"
        );

        Ok(Self {
            beam,
            energy,
            duration,
            wavenumber,
            angular_frequency,
            critical_density,
            power,
            focal,
        })
    }

    /// Laser with the given a0; solves for whichever of energy, duration or
    /// beam FWHM `constraint` leaves open. The beam always supplies the
    /// wavelength, and the returned laser keeps it.
    pub fn from_a0(
        constants: &PhysicalConstants,
        a0: f64,
        beam: GaussianBeam,
        constraint: PulseConstraint,
    ) -> LwfaResult<Self> {
        let wavelength = beam.wavelength();
        let intensity = intensity_from_a0(constants, a0, wavelength)?;
        let prefactor = gaussian_energy_prefactor();

        let (energy, duration, fwhm) = match (constraint, beam.fwhm()) {
            (PulseConstraint::EnergyAndDuration { energy, duration }, None) => {
                let energy = energy.expect_positive(Dimension::ENERGY, "laser energy")?;
                let duration = duration.expect_positive(Dimension::TIME, "laser duration")?;
                let fwhm = (prefactor * energy / (intensity * duration)).sqrt()?;
                (energy, duration, fwhm)
            }
            (PulseConstraint::EnergyAndBeam { energy }, Some(fwhm)) => {
                let energy = energy.expect_positive(Dimension::ENERGY, "laser energy")?;
                let duration = prefactor * energy / (intensity * fwhm.powi(2));
                (energy, duration, fwhm)
            }
            (PulseConstraint::DurationAndBeam { duration }, Some(fwhm)) => {
                let duration = duration.expect_positive(Dimension::TIME, "laser duration")?;
                let energy = intensity * duration * fwhm.powi(2) / prefactor;
                (energy, duration, fwhm)
            }
            (PulseConstraint::EnergyAndDuration { .. }, Some(_)) => {
                return Err(LwfaError::ambiguous(
                    "Laser::from_a0",
                    "energy, duration and beam spot size were all supplied; drop one",
                ));
            }
            (_, None) => {
                return Err(LwfaError::ambiguous(
                    "Laser::from_a0",
                    "the beam has no spot size, so energy and duration are both required",
                ));
            }
        };

        let beam = GaussianBeam::from_fwhm(fwhm, wavelength)?;
        Self::new(constants, energy, duration, beam)
    }

    /// Like [`Laser::from_a0`], with the peak intensity as the target.
    pub fn from_intensity(
        constants: &PhysicalConstants,
        intensity: Quantity,
        beam: GaussianBeam,
        constraint: PulseConstraint,
    ) -> LwfaResult<Self> {
        let a0 = a0_from_intensity(constants, intensity, beam.wavelength())?;
        Self::from_a0(constants, a0, beam, constraint)
    }

    /// Laser with peak power `power`; the missing one of energy and duration
    /// follows from `P0 = 2 sqrt(ln2/pi) * energy / duration`.
    pub fn from_power(
        constants: &PhysicalConstants,
        power: Quantity,
        beam: GaussianBeam,
        constraint: PowerConstraint,
    ) -> LwfaResult<Self> {
        let power = power.expect_positive(Dimension::POWER, "laser power")?;
        let prefactor = gaussian_power_prefactor();
        let (energy, duration) = match constraint {
            PowerConstraint::Energy(energy) => (energy, prefactor * energy / power),
            PowerConstraint::Duration(duration) => (power * duration / prefactor, duration),
        };
        Self::new(constants, energy, duration, beam)
    }

    pub const fn beam(&self) -> &GaussianBeam {
        &self.beam
    }

    pub const fn wavelength(&self) -> Quantity {
        self.beam.wavelength()
    }

    pub const fn energy(&self) -> Quantity {
        self.energy
    }

    pub const fn duration(&self) -> Quantity {
        self.duration
    }

    pub const fn wavenumber(&self) -> Quantity {
        self.wavenumber
    }

    pub const fn angular_frequency(&self) -> Quantity {
        self.angular_frequency
    }

    pub const fn critical_density(&self) -> Quantity {
        self.critical_density
    }

    pub const fn power(&self) -> Quantity {
        self.power
    }

    pub const fn focal_fields(&self) -> Option<&FocalFields> {
        self.focal.as_ref()
    }

    pub fn intensity(&self) -> Option<Quantity> {
        self.focal.map(|fields| fields.intensity)
    }

    pub fn a0(&self) -> Option<f64> {
        self.focal.map(|fields| fields.a0)
    }

    pub fn peak_field(&self) -> Option<Quantity> {
        self.focal.map(|fields| fields.peak_field)
    }
}

#[cfg(test)]
mod tests {
    use super::{Laser, PowerConstraint, PulseConstraint, a0_from_intensity, intensity_from_a0};
    use crate::common::constants::PhysicalConstants;
    use crate::domain::LwfaError;
    use crate::model::beam::{GaussianBeam, default_wavelength};
    use crate::units::{
        FEMTOSECOND, JOULE, MEGAVOLT_PER_MM, MICROMETER, PER_CM3, Quantity, TERAWATT,
        WATT_PER_CM2,
    };

    const CETAL_A0: f64 = 4.076_967_134_813_223;

    fn cetal_beam() -> GaussianBeam {
        GaussianBeam::from_waist(Quantity::new(18.0, MICROMETER), default_wavelength())
            .expect("18 um waist")
    }

    fn energy() -> Quantity {
        Quantity::new(7.7, JOULE)
    }

    fn duration() -> Quantity {
        Quantity::new(40.0, FEMTOSECOND)
    }

    fn relative_error(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn base_constructor_derives_focal_quantities() {
        let constants = PhysicalConstants::codata_2018();
        let laser = Laser::new(&constants, energy(), duration(), cetal_beam()).expect("laser");

        let a0 = laser.a0().expect("waist present, so a0 present");
        assert!(relative_error(a0, CETAL_A0) < 1.0e-9);
        let intensity = laser.intensity().expect("intensity").to(WATT_PER_CM2).expect("W/cm^2");
        assert!(relative_error(intensity, 3.553_314_404_474_784e19) < 1.0e-9);
        let power = laser.power().to(TERAWATT).expect("TW");
        assert!(relative_error(power, 180.841_676_149_682_9) < 1.0e-9);
        let field = laser.peak_field().expect("E0").to(MEGAVOLT_PER_MM).expect("MV/mm");
        assert!(relative_error(field, 16_362.403_552_991_786) < 1.0e-6);
        let n_crit = laser.critical_density().to(PER_CM3).expect("cm^-3");
        assert!(relative_error(n_crit, 1.741_959_712_768_267e21) < 1.0e-9);
    }

    #[test]
    fn wavelength_only_beam_leaves_focal_quantities_absent() {
        let constants = PhysicalConstants::codata_2018();
        let laser =
            Laser::new(&constants, energy(), duration(), GaussianBeam::default()).expect("laser");
        assert_eq!(laser.a0(), None);
        assert_eq!(laser.intensity(), None);
        assert_eq!(laser.peak_field(), None);
        assert!(laser.power().to(TERAWATT).expect("TW") > 0.0);
    }

    #[test]
    fn intensity_and_a0_are_exact_inverses() {
        let constants = PhysicalConstants::codata_2018();
        for a0 in [0.1, 1.0, 4.1, 10.0] {
            let intensity =
                intensity_from_a0(&constants, a0, default_wavelength()).expect("intensity");
            let back =
                a0_from_intensity(&constants, intensity, default_wavelength()).expect("a0");
            assert!(relative_error(back, a0) < 1.0e-12, "a0 = {a0}, back = {back}");
        }
    }

    #[test]
    fn every_a0_path_reproduces_the_base_laser() {
        let constants = PhysicalConstants::codata_2018();
        let base = Laser::new(&constants, energy(), duration(), cetal_beam()).expect("laser");
        let a0 = base.a0().expect("a0");

        let cases = [
            (
                GaussianBeam::default(),
                PulseConstraint::EnergyAndDuration {
                    energy: energy(),
                    duration: duration(),
                },
            ),
            (cetal_beam(), PulseConstraint::EnergyAndBeam { energy: energy() }),
            (
                cetal_beam(),
                PulseConstraint::DurationAndBeam {
                    duration: duration(),
                },
            ),
        ];

        for (beam, constraint) in cases {
            let laser = Laser::from_a0(&constants, a0, beam, constraint).expect("from_a0");
            assert!(relative_error(laser.a0().expect("a0"), a0) < 1.0e-6);
            assert!(laser.energy().is_close(base.energy(), 1.0e-6).expect("energies"));
            assert!(laser.duration().is_close(base.duration(), 1.0e-6).expect("durations"));
            let w0 = laser.beam().waist().expect("waist");
            assert!(w0.is_close(Quantity::new(18.0, MICROMETER), 1.0e-6).expect("waists"));
        }
    }

    #[test]
    fn from_intensity_matches_from_a0() {
        let constants = PhysicalConstants::codata_2018();
        let intensity = Quantity::new(3.553_314_404_474_785e19, WATT_PER_CM2);
        let laser = Laser::from_intensity(
            &constants,
            intensity,
            cetal_beam(),
            PulseConstraint::DurationAndBeam {
                duration: duration(),
            },
        )
        .expect("from_intensity");
        assert!(relative_error(laser.a0().expect("a0"), CETAL_A0) < 1.0e-6);
        assert!(relative_error(laser.energy().to(JOULE).expect("J"), 7.7) < 1.0e-6);
    }

    #[test]
    fn from_a0_keeps_the_supplied_wavelength() {
        let constants = PhysicalConstants::codata_2018();
        let wavelength = Quantity::new(1.057, MICROMETER);
        let beam = GaussianBeam::wavelength_only(wavelength).expect("beam");
        let laser = Laser::from_a0(
            &constants,
            2.0,
            beam,
            PulseConstraint::EnergyAndDuration {
                energy: energy(),
                duration: duration(),
            },
        )
        .expect("laser");
        assert_eq!(laser.wavelength(), wavelength);
        assert!(relative_error(laser.a0().expect("a0"), 2.0) < 1.0e-9);
    }

    #[test]
    fn pulse_constraint_resolution_rejects_other_combinations() {
        let focused = cetal_beam();
        let bare = GaussianBeam::default();

        assert!(matches!(
            PulseConstraint::resolve(Some(energy()), Some(duration()), &bare),
            Ok(PulseConstraint::EnergyAndDuration { .. })
        ));
        assert!(matches!(
            PulseConstraint::resolve(None, Some(duration()), &focused),
            Ok(PulseConstraint::DurationAndBeam { .. })
        ));

        for (energy, duration, beam) in [
            (Some(energy()), Some(duration()), &focused),
            (Some(energy()), None, &bare),
            (None, None, &focused),
            (None, None, &bare),
        ] {
            let error = PulseConstraint::resolve(energy, duration, beam)
                .expect_err("combination must be rejected");
            assert!(matches!(error, LwfaError::AmbiguousParameterization { .. }));
        }
    }

    #[test]
    fn from_a0_rejects_constraints_that_disagree_with_the_beam() {
        let constants = PhysicalConstants::codata_2018();
        let over_specified = Laser::from_a0(
            &constants,
            4.0,
            cetal_beam(),
            PulseConstraint::EnergyAndDuration {
                energy: energy(),
                duration: duration(),
            },
        );
        assert!(matches!(
            over_specified,
            Err(LwfaError::AmbiguousParameterization { .. })
        ));

        let under_specified = Laser::from_a0(
            &constants,
            4.0,
            GaussianBeam::default(),
            PulseConstraint::EnergyAndBeam { energy: energy() },
        );
        assert!(matches!(
            under_specified,
            Err(LwfaError::AmbiguousParameterization { .. })
        ));
    }

    #[test]
    fn from_power_solves_the_missing_pulse_parameter() {
        let constants = PhysicalConstants::codata_2018();
        let power = Quantity::new(180.841_676_149_682_85, TERAWATT);

        let by_duration = Laser::from_power(
            &constants,
            power,
            cetal_beam(),
            PowerConstraint::Duration(duration()),
        )
        .expect("power + duration");
        assert!(relative_error(by_duration.energy().to(JOULE).expect("J"), 7.7) < 1.0e-9);

        let by_energy =
            Laser::from_power(&constants, power, cetal_beam(), PowerConstraint::Energy(energy()))
                .expect("power + energy");
        assert!(
            relative_error(by_energy.duration().to(FEMTOSECOND).expect("fs"), 40.0) < 1.0e-9
        );

        assert!(matches!(
            PowerConstraint::resolve(Some(energy()), Some(duration())),
            Err(LwfaError::AmbiguousParameterization { .. })
        ));
        assert!(matches!(
            PowerConstraint::resolve(None, None),
            Err(LwfaError::AmbiguousParameterization { .. })
        ));
    }

    #[test]
    fn misdimensioned_energy_is_rejected() {
        let constants = PhysicalConstants::codata_2018();
        let error = Laser::new(&constants, duration(), duration(), cetal_beam())
            .expect_err("duration is not an energy");
        assert!(matches!(error, LwfaError::DimensionMismatch { .. }));
    }
}
