//! Geometry of a focused Gaussian laser beam.

use crate::domain::{LwfaError, LwfaResult};
use crate::units::{DEFAULT_RELATIVE_TOLERANCE, Dimension, MICROMETER, Quantity};
use std::f64::consts::{LN_2, PI, SQRT_2};
use tracing::debug;

/// Ti:sapphire central wavelength, used when no wavelength is supplied.
pub const DEFAULT_WAVELENGTH_UM: f64 = 0.8;

pub fn default_wavelength() -> Quantity {
    Quantity::new(DEFAULT_WAVELENGTH_UM, MICROMETER)
}

/// Intensity FWHM of a Gaussian spot with 1/e^2 waist `w0`.
pub fn w0_to_fwhm(w0: Quantity) -> Quantity {
    w0 * (2.0 * LN_2).sqrt()
}

/// Inverse of [`w0_to_fwhm`]: `w0 = 1/2 * sqrt(2 / ln 2) * fwhm`.
pub fn fwhm_to_w0(fwhm: Quantity) -> Quantity {
    fwhm * (0.5 * (2.0 / LN_2).sqrt())
}

/// Waist, FWHM and Rayleigh length are known together or not at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamFocus {
    pub waist: Quantity,
    pub fwhm: Quantity,
    pub rayleigh_length: Quantity,
}

/// A Gaussian beam, or a bare wavelength carrier when no spot size is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianBeam {
    wavelength: Quantity,
    focus: Option<BeamFocus>,
}

impl GaussianBeam {
    /// Wavelength-only beam. It can feed intensity formulas but carries no
    /// waist, so lasers built on it have no peak intensity or a0.
    pub fn wavelength_only(wavelength: Quantity) -> LwfaResult<Self> {
        let wavelength = wavelength.expect_positive(Dimension::LENGTH, "laser wavelength")?;
        Ok(Self {
            wavelength,
            focus: None,
        })
    }

    pub fn from_waist(w0: Quantity, wavelength: Quantity) -> LwfaResult<Self> {
        let w0 = w0.expect_positive(Dimension::LENGTH, "beam waist")?;
        Self::focused(w0, w0_to_fwhm(w0), wavelength)
    }

    pub fn from_fwhm(fwhm: Quantity, wavelength: Quantity) -> LwfaResult<Self> {
        let fwhm = fwhm.expect_positive(Dimension::LENGTH, "beam FWHM")?;
        Self::focused(fwhm_to_w0(fwhm), fwhm, wavelength)
    }

    /// Both spot sizes given; they must agree to within a relative 1e-6.
    pub fn from_waist_and_fwhm(
        w0: Quantity,
        fwhm: Quantity,
        wavelength: Quantity,
    ) -> LwfaResult<Self> {
        let w0 = w0.expect_positive(Dimension::LENGTH, "beam waist")?;
        let fwhm = fwhm.expect_positive(Dimension::LENGTH, "beam FWHM")?;
        let implied_w0 = fwhm_to_w0(fwhm);
        if !w0.is_close(implied_w0, DEFAULT_RELATIVE_TOLERANCE)? {
            return Err(LwfaError::InconsistentParameters {
                context: "Gaussian beam",
                detail: format!(
                    "w0 = {:.6} um but fwhm = {:.6} um implies w0 = {:.6} um",
                    w0.to(MICROMETER)?,
                    fwhm.to(MICROMETER)?,
                    implied_w0.to(MICROMETER)?
                ),
            });
        }
        Self::focused(w0, fwhm, wavelength)
    }

    /// Spot produced by an off-axis parabola of the given f-number:
    /// `w0 = 2 sqrt(2) / pi * lambda * f#`.
    pub fn from_f_number(f_number: f64, wavelength: Quantity) -> LwfaResult<Self> {
        let f_number = Quantity::dimensionless(f_number)
            .expect_positive(Dimension::DIMENSIONLESS, "f-number")?
            .si_value();
        let wavelength = wavelength.expect_positive(Dimension::LENGTH, "laser wavelength")?;
        let w0 = 2.0 * SQRT_2 / PI * wavelength * f_number;
        Self::from_waist(w0, wavelength)
    }

    /// Spot produced by focusing a beam of diameter `diameter` with focal
    /// length `focal_length`.
    pub fn from_focal_geometry(
        focal_length: Quantity,
        diameter: Quantity,
        wavelength: Quantity,
    ) -> LwfaResult<Self> {
        let focal_length = focal_length.expect_positive(Dimension::LENGTH, "focal length")?;
        let diameter = diameter.expect_positive(Dimension::LENGTH, "beam diameter")?;
        Self::from_f_number(focal_length.ratio(diameter)?, wavelength)
    }

    fn focused(w0: Quantity, fwhm: Quantity, wavelength: Quantity) -> LwfaResult<Self> {
        let wavelength = wavelength.expect_positive(Dimension::LENGTH, "laser wavelength")?;
        let rayleigh_length = PI * w0.powi(2) / wavelength;
        debug!(
            w0_m = w0.si_value(),
            z_r_m = rayleigh_length.si_value(),
            "derived Gaussian beam focus"
        );
        Ok(Self {
            wavelength,
            focus: Some(BeamFocus {
                waist: w0,
                fwhm,
                rayleigh_length,
            }),
        })
    }

    pub const fn wavelength(&self) -> Quantity {
        self.wavelength
    }

    pub const fn focus(&self) -> Option<&BeamFocus> {
        self.focus.as_ref()
    }

    pub fn waist(&self) -> Option<Quantity> {
        self.focus.map(|focus| focus.waist)
    }

    pub fn fwhm(&self) -> Option<Quantity> {
        self.focus.map(|focus| focus.fwhm)
    }

    pub fn rayleigh_length(&self) -> Option<Quantity> {
        self.focus.map(|focus| focus.rayleigh_length)
    }
}

impl Default for GaussianBeam {
    fn default() -> Self {
        Self {
            wavelength: default_wavelength(),
            focus: None,
        }
    }
}
