//! Presentation of derived entities in laboratory display units.
//!
//! Nothing here derives physics; every value is read from the public
//! accessors of the model types and converted to the unit named in the field.

use crate::domain::LwfaResult;
use crate::model::beam::GaussianBeam;
use crate::model::laser::Laser;
use crate::model::matching::MatchedConfiguration;
use crate::model::plasma::{BunchEstimate, LaserDrive, Plasma};
use crate::model::simulation::SimulationResolution;
use crate::scenario::ScenarioOutcome;
use crate::units::{
    FEMTOSECOND, JOULE, MEGAELECTRONVOLT, MEGAVOLT_PER_MM, MICROMETER, MILLIMETER, PER_CM3,
    PER_FEMTOSECOND, PER_MICROMETER, PICOCOULOMB, Quantity, TERAWATT, Unit, WATT_PER_CM2,
};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeamSummary {
    pub wavelength_um: f64,
    pub waist_um: Option<f64>,
    pub fwhm_um: Option<f64>,
    pub rayleigh_length_mm: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaserSummary {
    pub beam: BeamSummary,
    pub energy_j: f64,
    pub duration_fs: f64,
    pub wavenumber_per_um: f64,
    pub angular_frequency_per_fs: f64,
    pub power_tw: f64,
    pub critical_density_cm3: f64,
    pub intensity_w_cm2: Option<f64>,
    pub a0: Option<f64>,
    pub peak_field_mv_mm: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BunchSummary {
    pub bubble_radius_um: f64,
    pub electron_count: f64,
    pub charge_pc: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriveSummary {
    pub gamma: f64,
    pub density_ratio: f64,
    pub critical_power_tw: f64,
    pub dephasing_length_mm: f64,
    pub depletion_length_mm: f64,
    pub acceleration_length_mm: f64,
    pub average_field_mv_mm: f64,
    pub energy_gain_mev: f64,
    pub bunch: Option<BunchSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlasmaSummary {
    pub density_cm3: f64,
    pub wavelength_um: f64,
    pub wavenumber_per_um: f64,
    pub angular_frequency_per_fs: f64,
    pub skin_depth_um: f64,
    pub time_unit_fs: f64,
    pub wavebreaking_field_mv_mm: f64,
    pub drive: Option<DriveSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedSummary {
    pub a0: f64,
    pub critical_a0: f64,
    pub within_validity: bool,
}

/// Includes the step size, interaction time and step count that a batch
/// job needs as its state point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub box_length_um: f64,
    pub particles_per_cell: u32,
    pub cell_size_um: [f64; 3],
    pub cell_counts: [u64; 3],
    pub particle_count: u64,
    pub time_step_fs: f64,
    pub interaction_time_fs: f64,
    pub step_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub beam: BeamSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub laser: Option<LaserSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plasma: Option<PlasmaSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<MatchedSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationSummary>,
}

impl BeamSummary {
    pub fn from_beam(beam: &GaussianBeam) -> LwfaResult<Self> {
        Ok(Self {
            wavelength_um: beam.wavelength().to(MICROMETER)?,
            waist_um: optional_in(beam.waist(), MICROMETER)?,
            fwhm_um: optional_in(beam.fwhm(), MICROMETER)?,
            rayleigh_length_mm: optional_in(beam.rayleigh_length(), MILLIMETER)?,
        })
    }
}

impl LaserSummary {
    pub fn from_laser(laser: &Laser) -> LwfaResult<Self> {
        Ok(Self {
            beam: BeamSummary::from_beam(laser.beam())?,
            energy_j: laser.energy().to(JOULE)?,
            duration_fs: laser.duration().to(FEMTOSECOND)?,
            wavenumber_per_um: laser.wavenumber().to(PER_MICROMETER)?,
            angular_frequency_per_fs: laser.angular_frequency().to(PER_FEMTOSECOND)?,
            power_tw: laser.power().to(TERAWATT)?,
            critical_density_cm3: laser.critical_density().to(PER_CM3)?,
            intensity_w_cm2: optional_in(laser.intensity(), WATT_PER_CM2)?,
            a0: laser.a0(),
            peak_field_mv_mm: optional_in(laser.peak_field(), MEGAVOLT_PER_MM)?,
        })
    }
}

impl BunchSummary {
    pub fn from_bunch(bunch: &BunchEstimate) -> LwfaResult<Self> {
        Ok(Self {
            bubble_radius_um: bunch.bubble_radius.to(MICROMETER)?,
            electron_count: bunch.electron_count,
            charge_pc: bunch.charge.to(PICOCOULOMB)?,
            efficiency: bunch.efficiency,
        })
    }
}

impl DriveSummary {
    fn from_drive(plasma: &Plasma, drive: &LaserDrive) -> LwfaResult<Self> {
        Ok(Self {
            gamma: drive.gamma,
            density_ratio: plasma.density().ratio(drive.laser.critical_density())?,
            critical_power_tw: drive.critical_power.to(TERAWATT)?,
            dephasing_length_mm: drive.dephasing_length.to(MILLIMETER)?,
            depletion_length_mm: drive.depletion_length.to(MILLIMETER)?,
            acceleration_length_mm: drive.acceleration_length.to(MILLIMETER)?,
            average_field_mv_mm: drive.average_field.to(MEGAVOLT_PER_MM)?,
            energy_gain_mev: drive.energy_gain.to(MEGAELECTRONVOLT)?,
            bunch: drive.bunch.as_ref().map(BunchSummary::from_bunch).transpose()?,
        })
    }
}

impl PlasmaSummary {
    pub fn from_plasma(plasma: &Plasma) -> LwfaResult<Self> {
        Ok(Self {
            density_cm3: plasma.density().to(PER_CM3)?,
            wavelength_um: plasma.wavelength().to(MICROMETER)?,
            wavenumber_per_um: plasma.wavenumber().to(PER_MICROMETER)?,
            angular_frequency_per_fs: plasma.angular_frequency().to(PER_FEMTOSECOND)?,
            skin_depth_um: plasma.length_unit().to(MICROMETER)?,
            time_unit_fs: plasma.time_unit().to(FEMTOSECOND)?,
            wavebreaking_field_mv_mm: plasma.wavebreaking_field().to(MEGAVOLT_PER_MM)?,
            drive: plasma
                .drive()
                .map(|drive| DriveSummary::from_drive(plasma, drive))
                .transpose()?,
        })
    }
}

impl MatchedSummary {
    pub fn from_matched(matched: &MatchedConfiguration) -> Self {
        Self {
            a0: matched.a0(),
            critical_a0: matched.critical_a0(),
            within_validity: matched.within_validity(),
        }
    }
}

impl SimulationSummary {
    pub fn from_simulation(simulation: &SimulationResolution) -> LwfaResult<Self> {
        let (dx, dy, dz) = simulation.cell_size();
        let (nx, ny, nz) = simulation.cell_counts();
        Ok(Self {
            box_length_um: simulation.box_length().to(MICROMETER)?,
            particles_per_cell: simulation.particles_per_cell(),
            cell_size_um: [dx.to(MICROMETER)?, dy.to(MICROMETER)?, dz.to(MICROMETER)?],
            cell_counts: [nx, ny, nz],
            particle_count: simulation.particle_count(),
            time_step_fs: simulation.time_step().to(FEMTOSECOND)?,
            interaction_time_fs: simulation.interaction_time().to(FEMTOSECOND)?,
            step_count: simulation.step_count(),
        })
    }
}

impl ScenarioSummary {
    pub fn from_outcome(outcome: &ScenarioOutcome) -> LwfaResult<Self> {
        Ok(Self {
            name: outcome.name.clone(),
            beam: BeamSummary::from_beam(&outcome.beam)?,
            laser: outcome.laser.as_ref().map(LaserSummary::from_laser).transpose()?,
            plasma: outcome.plasma.as_ref().map(PlasmaSummary::from_plasma).transpose()?,
            matched: outcome.matched.as_ref().map(MatchedSummary::from_matched),
            simulation: outcome
                .simulation
                .as_ref()
                .map(SimulationSummary::from_simulation)
                .transpose()?,
        })
    }

    /// Multi-line rendering, one line per populated entity.
    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();
        if let Some(name) = &self.name {
            lines.push(format!("Scenario: {name}"));
        }
        // A laser line already embeds its beam.
        match &self.laser {
            Some(laser) => lines.push(render_laser(laser)),
            None => lines.push(render_beam(&self.beam)),
        }
        if let Some(plasma) = &self.plasma {
            lines.push(render_plasma(plasma));
        }
        if let Some(matched) = &self.matched {
            lines.push(render_matched(matched));
        }
        if let Some(simulation) = &self.simulation {
            lines.push(render_simulation(simulation));
        }
        lines.join("\n")
    }
}

pub fn describe_beam(beam: &GaussianBeam) -> LwfaResult<String> {
    BeamSummary::from_beam(beam).map(|summary| render_beam(&summary))
}

pub fn describe_laser(laser: &Laser) -> LwfaResult<String> {
    LaserSummary::from_laser(laser).map(|summary| render_laser(&summary))
}

pub fn describe_plasma(plasma: &Plasma) -> LwfaResult<String> {
    PlasmaSummary::from_plasma(plasma).map(|summary| render_plasma(&summary))
}

pub fn describe_matched(matched: &MatchedConfiguration) -> String {
    render_matched(&MatchedSummary::from_matched(matched))
}

pub fn describe_simulation(simulation: &SimulationResolution) -> LwfaResult<String> {
    SimulationSummary::from_simulation(simulation).map(|summary| render_simulation(&summary))
}

fn render_beam(beam: &BeamSummary) -> String {
    let mut line = format!("GaussianBeam: lambda = {} um", number(beam.wavelength_um));
    push_optional(&mut line, "w0", beam.waist_um, "um");
    push_optional(&mut line, "FWHM", beam.fwhm_um, "um");
    push_optional(&mut line, "zR", beam.rayleigh_length_mm, "mm");
    line
}

fn render_laser(laser: &LaserSummary) -> String {
    let mut line = format!(
        "Laser: energy = {} J, duration = {} fs, kL = {} 1/um, omegaL = {} 1/fs, P0 = {} TW, ncrit = {} cm^-3",
        number(laser.energy_j),
        number(laser.duration_fs),
        number(laser.wavenumber_per_um),
        number(laser.angular_frequency_per_fs),
        number(laser.power_tw),
        number(laser.critical_density_cm3),
    );
    push_optional(&mut line, "I0", laser.intensity_w_cm2, "W/cm^2");
    push_optional(&mut line, "a0", laser.a0, "");
    push_optional(&mut line, "E0", laser.peak_field_mv_mm, "MV/mm");
    format!("{}\n{line}", render_beam(&laser.beam))
}

fn render_plasma(plasma: &PlasmaSummary) -> String {
    let mut text = format!(
        "Plasma: npe = {} cm^-3, lambda_p = {} um, kp = {} 1/um, omega_p = {} 1/fs, skin depth = {} um, 1/omega_p = {} fs, Ewb = {} MV/mm",
        number(plasma.density_cm3),
        number(plasma.wavelength_um),
        number(plasma.wavenumber_per_um),
        number(plasma.angular_frequency_per_fs),
        number(plasma.skin_depth_um),
        number(plasma.time_unit_fs),
        number(plasma.wavebreaking_field_mv_mm),
    );
    if let Some(drive) = &plasma.drive {
        let _ = write!(
            text,
            "\nDrive: gamma = {}, npe/ncrit = {}, Pc = {} TW, Ldeph = {} mm, Ldepl = {} mm, Lacc = {} mm, <Ez> = {} MV/mm, dE = {} MeV",
            number(drive.gamma),
            number(drive.density_ratio),
            number(drive.critical_power_tw),
            number(drive.dephasing_length_mm),
            number(drive.depletion_length_mm),
            number(drive.acceleration_length_mm),
            number(drive.average_field_mv_mm),
            number(drive.energy_gain_mev),
        );
        if let Some(bunch) = &drive.bunch {
            let _ = write!(
                text,
                "\nBunch: R = {} um, N = {}, Q = {} pC, efficiency = {}",
                number(bunch.bubble_radius_um),
                number(bunch.electron_count),
                number(bunch.charge_pc),
                number(bunch.efficiency),
            );
        }
    }
    text
}

fn render_matched(matched: &MatchedSummary) -> String {
    let verdict = if matched.within_validity {
        "within validity"
    } else {
        "BEYOND validity"
    };
    format!(
        "Matched: a0 = {}, a0c = {} ({verdict})",
        number(matched.a0),
        number(matched.critical_a0),
    )
}

fn render_simulation(simulation: &SimulationSummary) -> String {
    let [dx, dy, dz] = simulation.cell_size_um;
    let [nx, ny, nz] = simulation.cell_counts;
    format!(
        "Simulation: box = {} um, dx = {} um, dy = {} um, dz = {} um, cells = {nx} x {ny} x {nz}, ppc = {}, particles = {}, dt = {} fs, t_interact = {} fs, steps = {}",
        number(simulation.box_length_um),
        number(dx),
        number(dy),
        number(dz),
        simulation.particles_per_cell,
        simulation.particle_count,
        number(simulation.time_step_fs),
        number(simulation.interaction_time_fs),
        simulation.step_count,
    )
}

fn push_optional(line: &mut String, label: &str, value: Option<f64>, unit: &str) {
    if let Some(value) = value {
        let _ = write!(line, ", {label} = {}", number(value));
        if !unit.is_empty() {
            let _ = write!(line, " {unit}");
        }
    }
}

fn optional_in(quantity: Option<Quantity>, unit: Unit) -> LwfaResult<Option<f64>> {
    quantity.map(|quantity| quantity.to(unit)).transpose()
}

fn number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1.0e-3..1.0e5).contains(&magnitude) {
        format!("{value:.4e}")
    } else {
        format!("{value:.4}")
    }
}
