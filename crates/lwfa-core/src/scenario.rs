//! JSON scenario files describing one derivation.
//!
//! Quantities are written as strings with units, e.g.
//!
//! ```json
//! {
//!   "name": "CETAL",
//!   "wavelength": "0.8 um",
//!   "beam": { "waist": "18 um" },
//!   "laser": { "energy": "7.7 J", "duration": "40 fs" },
//!   "plasma": { "density": "1.5e18 cm^-3", "estimate_bubble_radius": true },
//!   "simulation": { "particles_per_cell": 8 }
//! }
//! ```
//!
//! A `matched` section replaces `beam`, `laser` and `plasma`.

use crate::common::constants::PhysicalConstants;
use crate::domain::{LwfaError, LwfaResult};
use crate::model::beam::{GaussianBeam, default_wavelength};
use crate::model::laser::{Laser, PowerConstraint, PulseConstraint};
use crate::model::matching::{MatchedConfiguration, matched_laser_plasma};
use crate::model::plasma::{BubbleRadius, Plasma, PlasmaOptions};
use crate::model::simulation::{SimulationOptions, SimulationResolution};
use crate::units::Quantity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wavelength: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beam: Option<BeamSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laser: Option<LaserSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plasma: Option<PlasmaSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<MatchedSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BeamSection {
    #[serde(default)]
    pub waist: Option<String>,
    #[serde(default)]
    pub fwhm: Option<String>,
    #[serde(default)]
    pub f_number: Option<f64>,
    #[serde(default)]
    pub focal_length: Option<String>,
    #[serde(default)]
    pub diameter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LaserSection {
    #[serde(default)]
    pub energy: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub a0: Option<f64>,
    #[serde(default)]
    pub intensity: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlasmaSection {
    pub density: String,
    #[serde(default)]
    pub bubble_radius: Option<String>,
    #[serde(default)]
    pub estimate_bubble_radius: bool,
    #[serde(default)]
    pub propagation_distance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MatchedSection {
    pub a0: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationSection {
    #[serde(default)]
    pub box_length: Option<String>,
    #[serde(default)]
    pub particles_per_cell: Option<u32>,
}

/// Everything a scenario derived. Entities further down the chain are
/// present only when the scenario asked for them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub name: Option<String>,
    pub beam: GaussianBeam,
    pub laser: Option<Laser>,
    pub plasma: Option<Plasma>,
    pub matched: Option<MatchedConfiguration>,
    pub simulation: Option<SimulationResolution>,
}

impl Scenario {
    pub fn from_json_str(source: &str) -> LwfaResult<Self> {
        serde_json::from_str(source).map_err(|error| LwfaError::InvalidScenario(error.to_string()))
    }

    pub fn evaluate(&self, constants: &PhysicalConstants) -> LwfaResult<ScenarioOutcome> {
        let wavelength = match &self.wavelength {
            Some(text) => parse_quantity(text)?,
            None => default_wavelength(),
        };

        if let Some(matched) = &self.matched {
            return self.evaluate_matched(constants, matched, wavelength);
        }

        let beam = match &self.beam {
            Some(section) => section.build(wavelength)?,
            None => GaussianBeam::wavelength_only(wavelength)?,
        };
        let laser = match &self.laser {
            Some(section) => Some(section.build(constants, beam)?),
            None => None,
        };
        let plasma = match &self.plasma {
            Some(section) => Some(section.build(constants, laser.clone())?),
            None => None,
        };
        let simulation = match (&self.simulation, &plasma) {
            (Some(section), Some(plasma)) => Some(section.build(constants, plasma.clone())?),
            (Some(_), None) => {
                return Err(LwfaError::InvalidScenario(
                    "a 'simulation' section requires a 'plasma' section".to_string(),
                ));
            }
            (None, _) => None,
        };

        Ok(ScenarioOutcome {
            name: self.name.clone(),
            beam,
            laser,
            plasma,
            matched: None,
            simulation,
        })
    }

    fn evaluate_matched(
        &self,
        constants: &PhysicalConstants,
        section: &MatchedSection,
        wavelength: Quantity,
    ) -> LwfaResult<ScenarioOutcome> {
        if self.beam.is_some() || self.laser.is_some() || self.plasma.is_some() {
            return Err(LwfaError::InvalidScenario(
                "'matched' derives beam, laser and plasma; drop those sections".to_string(),
            ));
        }

        let matched = matched_laser_plasma(constants, section.a0, wavelength)?;
        let plasma = matched.plasma().clone();
        let laser = matched.laser().cloned();
        let beam = laser
            .as_ref()
            .map(|laser| *laser.beam())
            .unwrap_or_default();
        let simulation = match &self.simulation {
            Some(simulation) => Some(simulation.build(constants, plasma.clone())?),
            None => None,
        };

        Ok(ScenarioOutcome {
            name: self.name.clone(),
            beam,
            laser,
            plasma: Some(plasma),
            matched: Some(matched),
            simulation,
        })
    }
}

impl BeamSection {
    pub fn build(&self, wavelength: Quantity) -> LwfaResult<GaussianBeam> {
        let waist = parse_optional(&self.waist)?;
        let fwhm = parse_optional(&self.fwhm)?;
        let focal_length = parse_optional(&self.focal_length)?;
        let diameter = parse_optional(&self.diameter)?;

        let spot_given = waist.is_some() || fwhm.is_some();
        let optics_given = self.f_number.is_some() || focal_length.is_some() || diameter.is_some();
        if spot_given && optics_given {
            return Err(LwfaError::ambiguous(
                "GaussianBeam",
                "give either a spot size (waist/fwhm) or focusing optics (f-number or focal length and diameter), not both",
            ));
        }

        match (waist, fwhm, self.f_number, focal_length, diameter) {
            (Some(waist), None, _, _, _) => GaussianBeam::from_waist(waist, wavelength),
            (None, Some(fwhm), _, _, _) => GaussianBeam::from_fwhm(fwhm, wavelength),
            (Some(waist), Some(fwhm), _, _, _) => {
                GaussianBeam::from_waist_and_fwhm(waist, fwhm, wavelength)
            }
            (None, None, Some(f_number), None, None) => {
                GaussianBeam::from_f_number(f_number, wavelength)
            }
            (None, None, None, Some(focal_length), Some(diameter)) => {
                GaussianBeam::from_focal_geometry(focal_length, diameter, wavelength)
            }
            (None, None, None, None, None) => GaussianBeam::wavelength_only(wavelength),
            _ => Err(LwfaError::ambiguous(
                "GaussianBeam",
                "use an f-number alone, or a focal length together with a beam diameter",
            )),
        }
    }
}

impl LaserSection {
    /// Dispatches to the constructor matching the supplied fields. At most one
    /// of `a0`, `intensity` and `power` may be given; with none of them the
    /// pulse is built from energy and duration.
    pub fn build(&self, constants: &PhysicalConstants, beam: GaussianBeam) -> LwfaResult<Laser> {
        let energy = parse_optional(&self.energy)?;
        let duration = parse_optional(&self.duration)?;
        let intensity = parse_optional(&self.intensity)?;
        let power = parse_optional(&self.power)?;

        match (self.a0, intensity, power) {
            (None, None, None) => match (energy, duration) {
                (Some(energy), Some(duration)) => Laser::new(constants, energy, duration, beam),
                _ => Err(LwfaError::ambiguous(
                    "Laser",
                    "energy and duration are both required unless a0, intensity or power is given",
                )),
            },
            (Some(a0), None, None) => {
                let constraint = PulseConstraint::resolve(energy, duration, &beam)?;
                Laser::from_a0(constants, a0, beam, constraint)
            }
            (None, Some(intensity), None) => {
                let constraint = PulseConstraint::resolve(energy, duration, &beam)?;
                Laser::from_intensity(constants, intensity, beam, constraint)
            }
            (None, None, Some(power)) => {
                let constraint = PowerConstraint::resolve(energy, duration)?;
                Laser::from_power(constants, power, beam, constraint)
            }
            _ => Err(LwfaError::ambiguous(
                "Laser",
                "give at most one of a0, intensity and power",
            )),
        }
    }
}

impl PlasmaSection {
    pub fn build(&self, constants: &PhysicalConstants, laser: Option<Laser>) -> LwfaResult<Plasma> {
        let density = parse_quantity(&self.density)?;
        let propagation_distance = parse_optional(&self.propagation_distance)?;
        let bubble_radius = match (parse_optional(&self.bubble_radius)?, self.estimate_bubble_radius)
        {
            (Some(_), true) => {
                return Err(LwfaError::ambiguous(
                    "Plasma",
                    "give either an explicit bubble radius or request the estimate, not both",
                ));
            }
            (Some(radius), false) => Some(BubbleRadius::Explicit(radius)),
            (None, true) => Some(BubbleRadius::Estimated),
            (None, false) => None,
        };

        match laser {
            Some(laser) => Plasma::with_laser(
                constants,
                density,
                laser,
                PlasmaOptions {
                    bubble_radius,
                    propagation_distance,
                },
            ),
            None if bubble_radius.is_some() || propagation_distance.is_some() => {
                Err(LwfaError::InvalidScenario(
                    "bubble radius and propagation distance need a 'laser' section".to_string(),
                ))
            }
            None => Plasma::new(constants, density),
        }
    }
}

impl SimulationSection {
    pub fn build(
        &self,
        constants: &PhysicalConstants,
        plasma: Plasma,
    ) -> LwfaResult<SimulationResolution> {
        let options = SimulationOptions {
            box_length: parse_optional(&self.box_length)?,
            particles_per_cell: self.particles_per_cell,
        };
        SimulationResolution::new(constants, plasma, options)
    }
}

fn parse_quantity(text: &str) -> LwfaResult<Quantity> {
    text.parse()
}

fn parse_optional(text: &Option<String>) -> LwfaResult<Option<Quantity>> {
    text.as_deref().map(parse_quantity).transpose()
}
