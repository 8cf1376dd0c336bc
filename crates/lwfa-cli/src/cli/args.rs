use lwfa_core::scenario::{
    BeamSection, LaserSection, MatchedSection, PlasmaSection, Scenario, SimulationSection,
};
use std::path::PathBuf;

#[derive(clap::Args, Debug, Default)]
pub(super) struct BeamArgs {
    /// Laser wavelength [default: 0.8 um]
    #[arg(long, value_name = "QUANTITY")]
    wavelength: Option<String>,

    /// 1/e^2 intensity waist radius, e.g. "18 um"
    #[arg(long, value_name = "QUANTITY")]
    waist: Option<String>,

    /// Intensity FWHM of the focal spot
    #[arg(long, value_name = "QUANTITY")]
    fwhm: Option<String>,

    /// Focusing f-number (focal length / beam diameter)
    #[arg(long, value_name = "F")]
    f_number: Option<f64>,

    /// Focal length of the focusing optic
    #[arg(long, value_name = "QUANTITY", requires = "diameter")]
    focal_length: Option<String>,

    /// Beam diameter on the focusing optic
    #[arg(long, value_name = "QUANTITY", requires = "focal_length")]
    diameter: Option<String>,
}

#[derive(clap::Args, Debug, Default)]
pub(super) struct LaserArgs {
    #[command(flatten)]
    beam: BeamArgs,

    /// Pulse energy on target, e.g. "7.7 J"
    #[arg(long, value_name = "QUANTITY")]
    energy: Option<String>,

    /// Intensity FWHM pulse duration, e.g. "40 fs"
    #[arg(long, value_name = "QUANTITY")]
    duration: Option<String>,

    /// Target normalized vector potential
    #[arg(long, value_name = "A0", conflicts_with_all = ["intensity", "power"])]
    a0: Option<f64>,

    /// Target peak intensity, e.g. "3.5e19 W/cm^2"
    #[arg(long, value_name = "QUANTITY", conflicts_with = "power")]
    intensity: Option<String>,

    /// Target peak power, e.g. "180 TW"
    #[arg(long, value_name = "QUANTITY")]
    power: Option<String>,
}

#[derive(clap::Args, Debug)]
pub(super) struct PlasmaArgs {
    #[command(flatten)]
    laser: LaserArgs,

    /// Electron density, e.g. "1.5e18 cm^-3"
    #[arg(long, value_name = "QUANTITY")]
    density: String,

    /// Explicit blowout (bubble) radius
    #[arg(long, value_name = "QUANTITY", conflicts_with = "estimate_bubble_radius")]
    bubble_radius: Option<String>,

    /// Use the blowout radius estimate 2 sqrt(a0) / kp
    #[arg(long)]
    estimate_bubble_radius: bool,

    /// Plasma length traversed; defaults to the dephasing length
    #[arg(long, value_name = "QUANTITY")]
    propagation_distance: Option<String>,
}

#[derive(clap::Args, Debug, Default)]
pub(super) struct ResolutionArgs {
    /// Edge of the cubic simulation box [default: 4 plasma wavelengths]
    #[arg(long, value_name = "QUANTITY")]
    box_length: Option<String>,

    /// Macro-particles per cell [default: 8]
    #[arg(long, value_name = "N")]
    ppc: Option<u32>,
}

#[derive(clap::Args, Debug)]
pub(super) struct SimulationArgs {
    #[command(flatten)]
    plasma: PlasmaArgs,

    #[command(flatten)]
    resolution: ResolutionArgs,
}

#[derive(clap::Args, Debug)]
pub(super) struct MatchedArgs {
    /// Target normalized vector potential
    #[arg(long, value_name = "A0")]
    a0: f64,

    /// Laser wavelength [default: 0.8 um]
    #[arg(long, value_name = "QUANTITY")]
    wavelength: Option<String>,

    /// Also estimate the simulation resolution
    #[arg(long)]
    simulation: bool,

    #[command(flatten)]
    resolution: ResolutionArgs,
}

#[derive(clap::Args, Debug)]
pub(super) struct ScenarioArgs {
    /// JSON scenario file
    #[arg(value_name = "FILE")]
    pub(super) path: PathBuf,
}

impl BeamArgs {
    fn is_empty(&self) -> bool {
        self.waist.is_none()
            && self.fwhm.is_none()
            && self.f_number.is_none()
            && self.focal_length.is_none()
            && self.diameter.is_none()
    }

    pub(super) fn into_scenario(self) -> Scenario {
        let beam = (!self.is_empty()).then(|| BeamSection {
            waist: self.waist,
            fwhm: self.fwhm,
            f_number: self.f_number,
            focal_length: self.focal_length,
            diameter: self.diameter,
        });
        Scenario {
            wavelength: self.wavelength,
            beam,
            ..Scenario::default()
        }
    }
}

impl LaserArgs {
    fn is_empty(&self) -> bool {
        self.energy.is_none()
            && self.duration.is_none()
            && self.a0.is_none()
            && self.intensity.is_none()
            && self.power.is_none()
    }

    pub(super) fn into_scenario(self) -> Scenario {
        let laser = (!self.is_empty()).then(|| LaserSection {
            energy: self.energy,
            duration: self.duration,
            a0: self.a0,
            intensity: self.intensity,
            power: self.power,
        });
        Scenario {
            laser,
            ..self.beam.into_scenario()
        }
    }
}

impl PlasmaArgs {
    pub(super) fn into_scenario(self) -> Scenario {
        let plasma = PlasmaSection {
            density: self.density,
            bubble_radius: self.bubble_radius,
            estimate_bubble_radius: self.estimate_bubble_radius,
            propagation_distance: self.propagation_distance,
        };
        Scenario {
            plasma: Some(plasma),
            ..self.laser.into_scenario()
        }
    }
}

impl ResolutionArgs {
    fn into_section(self) -> SimulationSection {
        SimulationSection {
            box_length: self.box_length,
            particles_per_cell: self.ppc,
        }
    }
}

impl SimulationArgs {
    pub(super) fn into_scenario(self) -> Scenario {
        Scenario {
            simulation: Some(self.resolution.into_section()),
            ..self.plasma.into_scenario()
        }
    }
}

impl MatchedArgs {
    pub(super) fn into_scenario(self) -> Scenario {
        // Resolution flags alone also request the estimate.
        let wants_simulation = self.simulation
            || self.resolution.box_length.is_some()
            || self.resolution.ppc.is_some();
        Scenario {
            wavelength: self.wavelength,
            matched: Some(MatchedSection { a0: self.a0 }),
            simulation: wants_simulation.then(|| self.resolution.into_section()),
            ..Scenario::default()
        }
    }
}
