use crate::units::Dimension;

pub type LwfaResult<T> = Result<T, LwfaError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LwfaErrorCategory {
    InputValidationError,
    ConfigurationError,
}

impl LwfaErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::ConfigurationError => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::ConfigurationError => "ConfigurationError",
        }
    }
}

/// Every failure the derivation core can report.
///
/// All of them are raised synchronously while an entity is being
/// constructed; there is no partially built state to recover.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LwfaError {
    #[error("dimension mismatch for {context}: expected [{expected}], found [{found}]")]
    DimensionMismatch {
        context: &'static str,
        expected: Dimension,
        found: Dimension,
    },

    #[error("inconsistent {context}: {detail}")]
    InconsistentParameters {
        context: &'static str,
        detail: String,
    },

    #[error("ambiguous parameterization for {constructor}: {detail}")]
    AmbiguousParameterization {
        constructor: &'static str,
        detail: String,
    },

    #[error("{context} requires a laser beam with a finite waist")]
    MissingBeamWaist { context: &'static str },

    #[error("plasma has no laser attached; simulation resolution needs one")]
    MissingLaser,

    #[error("invalid quantity '{input}': {reason}")]
    InvalidQuantity { input: String, reason: String },

    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}

impl LwfaError {
    pub fn ambiguous(constructor: &'static str, detail: impl Into<String>) -> Self {
        Self::AmbiguousParameterization {
            constructor,
            detail: detail.into(),
        }
    }

    pub fn invalid_quantity(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub const fn category(&self) -> LwfaErrorCategory {
        match self {
            Self::DimensionMismatch { .. }
            | Self::InvalidQuantity { .. }
            | Self::InvalidScenario(_) => LwfaErrorCategory::InputValidationError,
            Self::InconsistentParameters { .. }
            | Self::AmbiguousParameterization { .. }
            | Self::MissingBeamWaist { .. }
            | Self::MissingLaser => LwfaErrorCategory::ConfigurationError,
        }
    }

    /// Stable token identifying the failure kind in diagnostics.
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } => "INPUT.DIMENSION_MISMATCH",
            Self::InvalidQuantity { .. } => "INPUT.INVALID_QUANTITY",
            Self::InvalidScenario(_) => "INPUT.INVALID_SCENARIO",
            Self::InconsistentParameters { .. } => "CONFIG.INCONSISTENT_PARAMETERS",
            Self::AmbiguousParameterization { .. } => "CONFIG.AMBIGUOUS_PARAMETERIZATION",
            Self::MissingBeamWaist { .. } => "CONFIG.MISSING_BEAM_WAIST",
            Self::MissingLaser => "CONFIG.MISSING_LASER",
        }
    }

    pub const fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder(), self)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}
