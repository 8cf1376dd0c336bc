use super::{Dimension, Unit};
use crate::domain::{LwfaError, LwfaResult};
use crate::numerics::relative_difference;
use std::fmt::{Display, Formatter};
use std::ops::{Div, Mul, Neg};
use std::str::FromStr;

/// Relative tolerance used when two quantities are expected to agree.
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1.0e-6;

/// A magnitude in SI base units together with its physical dimension.
///
/// Multiplication and division compose dimensions and never panic; an
/// exponent overflow yields [`Dimension::OVERFLOW`]. Addition, subtraction,
/// comparison and unit conversion check commensurability and return
/// [`LwfaError::DimensionMismatch`] when the dimensions differ or overflowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    value: f64,
    dimension: Dimension,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            value: value * unit.scale(),
            dimension: unit.dimension(),
        }
    }

    pub const fn from_si(value: f64, dimension: Dimension) -> Self {
        Self { value, dimension }
    }

    pub const fn dimensionless(value: f64) -> Self {
        Self::from_si(value, Dimension::DIMENSIONLESS)
    }

    pub const fn si_value(&self) -> f64 {
        self.value
    }

    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Magnitude expressed in `unit`.
    pub fn to(&self, unit: Unit) -> LwfaResult<f64> {
        if self.dimension != unit.dimension() {
            return Err(LwfaError::DimensionMismatch {
                context: "unit conversion",
                expected: unit.dimension(),
                found: self.dimension,
            });
        }
        Ok(self.value / unit.scale())
    }

    /// Plain number for a quantity whose dimensions cancelled out.
    pub fn to_dimensionless(&self) -> LwfaResult<f64> {
        self.expect_dimension(Dimension::DIMENSIONLESS, "dimensionless ratio")
            .map(|quantity| quantity.value)
    }

    pub fn expect_dimension(self, expected: Dimension, context: &'static str) -> LwfaResult<Self> {
        if self.dimension == expected && !expected.is_overflow() {
            Ok(self)
        } else {
            Err(LwfaError::DimensionMismatch {
                context,
                expected,
                found: self.dimension,
            })
        }
    }

    /// Like [`Quantity::expect_dimension`], additionally requiring a finite,
    /// strictly positive magnitude.
    pub fn expect_positive(self, expected: Dimension, context: &'static str) -> LwfaResult<Self> {
        let quantity = self.expect_dimension(expected, context)?;
        if quantity.value.is_finite() && quantity.value > 0.0 {
            Ok(quantity)
        } else {
            Err(LwfaError::invalid_quantity(
                format!("{context} = {quantity}"),
                "must be finite and positive",
            ))
        }
    }

    pub fn try_add(self, other: Self) -> LwfaResult<Self> {
        let other = other.expect_dimension(self.dimension, "addition")?;
        Ok(Self::from_si(self.value + other.value, self.dimension))
    }

    pub fn try_sub(self, other: Self) -> LwfaResult<Self> {
        let other = other.expect_dimension(self.dimension, "subtraction")?;
        Ok(Self::from_si(self.value - other.value, self.dimension))
    }

    /// `self / other` as a plain number; both must share a dimension.
    pub fn ratio(self, other: Self) -> LwfaResult<f64> {
        let other = other.expect_dimension(self.dimension, "ratio")?;
        Ok(self.value / other.value)
    }

    pub fn is_close(self, other: Self, relative_tolerance: f64) -> LwfaResult<bool> {
        let other = other.expect_dimension(self.dimension, "comparison")?;
        Ok(relative_difference(self.value, other.value, f64::MIN_POSITIVE) <= relative_tolerance)
    }

    pub fn powi(self, exponent: i8) -> Self {
        Self::from_si(self.value.powi(i32::from(exponent)), self.dimension.powi(exponent))
    }

    pub fn sqrt(self) -> LwfaResult<Self> {
        self.root(2)
    }

    pub fn root(self, degree: i8) -> LwfaResult<Self> {
        let dimension = self
            .dimension
            .root(degree)
            .ok_or(LwfaError::DimensionMismatch {
                context: "fractional power",
                expected: self.dimension.powi(degree),
                found: self.dimension,
            })?;
        let value = match degree {
            2 => self.value.sqrt(),
            3 => self.value.cbrt(),
            _ => self.value.powf(1.0 / f64::from(degree)),
        };
        Ok(Self::from_si(value, dimension))
    }

    pub fn abs(self) -> Self {
        Self::from_si(self.value.abs(), self.dimension)
    }

    pub fn recip(self) -> Self {
        Self::from_si(1.0 / self.value, Dimension::DIMENSIONLESS / self.dimension)
    }
}

/// Free-function form of [`Quantity::to`].
pub fn convert(quantity: Quantity, unit: Unit) -> LwfaResult<f64> {
    quantity.to(unit)
}

impl Mul for Quantity {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_si(self.value * rhs.value, self.dimension * rhs.dimension)
    }
}

impl Div for Quantity {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::from_si(self.value / rhs.value, self.dimension / rhs.dimension)
    }
}

impl Mul<f64> for Quantity {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_si(self.value * rhs, self.dimension)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_si(self.value / rhs, self.dimension)
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        rhs.recip() * self
    }
}

impl Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_si(-self.value, self.dimension)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.dimension.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.dimension)
        }
    }
}

impl FromStr for Quantity {
    type Err = LwfaError;

    /// Parses `"<number> <unit>"`, e.g. `"18 um"`, `"1.5e18 cm^-3"` or `"40fs"`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (number, symbol) = split_number_and_unit(trimmed);
        if number.is_empty() {
            return Err(LwfaError::invalid_quantity(input, "missing numeric magnitude"));
        }
        let value: f64 = number
            .parse()
            .map_err(|_| LwfaError::invalid_quantity(input, "malformed numeric magnitude"))?;
        if !value.is_finite() {
            return Err(LwfaError::invalid_quantity(input, "magnitude must be finite"));
        }
        let unit = Unit::parse(symbol).map_err(|_| {
            LwfaError::invalid_quantity(input, format!("unknown unit '{}'", symbol.trim()))
        })?;
        Ok(Self::new(value, unit))
    }
}

fn split_number_and_unit(input: &str) -> (&str, &str) {
    if let Some((number, unit)) = input.split_once(char::is_whitespace) {
        return (number, unit.trim());
    }

    let bytes = input.as_bytes();
    let mut end = 0;
    while end < bytes.len() {
        let byte = bytes[end];
        let is_exponent = matches!(byte, b'e' | b'E')
            && bytes
                .get(end + 1)
                .is_some_and(|next| next.is_ascii_digit() || matches!(next, b'+' | b'-'));
        if byte.is_ascii_digit() || matches!(byte, b'.' | b'+' | b'-') || is_exponent {
            end += 1;
        } else {
            break;
        }
    }
    (&input[..end], &input[end..])
}
