use std::fmt::{Display, Formatter};
use std::ops::{Div, Mul};

/// SI exponent vector over the base dimensions the derivations touch:
/// length (m), mass (kg), time (s) and electric current (A).
///
/// Exponent arithmetic is checked. A result that leaves the `i8` range
/// becomes [`Dimension::OVERFLOW`], which propagates through further
/// arithmetic and matches no dimension, so every later conversion or
/// comparison fails with a dimension mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    length: i8,
    mass: i8,
    time: i8,
    current: i8,
    overflowed: bool,
}

impl Dimension {
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0);
    pub const LENGTH: Self = Self::new(1, 0, 0, 0);
    pub const MASS: Self = Self::new(0, 1, 0, 0);
    pub const TIME: Self = Self::new(0, 0, 1, 0);
    pub const CURRENT: Self = Self::new(0, 0, 0, 1);

    pub const WAVENUMBER: Self = Self::new(-1, 0, 0, 0);
    pub const FREQUENCY: Self = Self::new(0, 0, -1, 0);
    pub const VELOCITY: Self = Self::new(1, 0, -1, 0);
    pub const NUMBER_DENSITY: Self = Self::new(-3, 0, 0, 0);
    pub const ENERGY: Self = Self::new(2, 1, -2, 0);
    pub const POWER: Self = Self::new(2, 1, -3, 0);
    pub const INTENSITY: Self = Self::new(0, 1, -3, 0);
    pub const CHARGE: Self = Self::new(0, 0, 1, 1);
    pub const ELECTRIC_FIELD: Self = Self::new(1, 1, -3, -1);
    pub const PERMITTIVITY: Self = Self::new(-3, -1, 4, 2);

    pub const OVERFLOW: Self = Self {
        length: 0,
        mass: 0,
        time: 0,
        current: 0,
        overflowed: true,
    };

    pub const fn new(length: i8, mass: i8, time: i8, current: i8) -> Self {
        Self {
            length,
            mass,
            time,
            current,
            overflowed: false,
        }
    }

    const fn exponents(self) -> [i8; 4] {
        [self.length, self.mass, self.time, self.current]
    }

    pub const fn is_dimensionless(self) -> bool {
        !self.overflowed
            && self.length == 0
            && self.mass == 0
            && self.time == 0
            && self.current == 0
    }

    pub const fn is_overflow(self) -> bool {
        self.overflowed
    }

    pub const fn multiply(self, other: Self) -> Self {
        if self.overflowed || other.overflowed {
            return Self::OVERFLOW;
        }
        match (
            self.length.checked_add(other.length),
            self.mass.checked_add(other.mass),
            self.time.checked_add(other.time),
            self.current.checked_add(other.current),
        ) {
            (Some(length), Some(mass), Some(time), Some(current)) => {
                Self::new(length, mass, time, current)
            }
            _ => Self::OVERFLOW,
        }
    }

    pub const fn divide(self, other: Self) -> Self {
        if self.overflowed || other.overflowed {
            return Self::OVERFLOW;
        }
        match (
            self.length.checked_sub(other.length),
            self.mass.checked_sub(other.mass),
            self.time.checked_sub(other.time),
            self.current.checked_sub(other.current),
        ) {
            (Some(length), Some(mass), Some(time), Some(current)) => {
                Self::new(length, mass, time, current)
            }
            _ => Self::OVERFLOW,
        }
    }

    pub const fn powi(self, exponent: i8) -> Self {
        if self.overflowed {
            return Self::OVERFLOW;
        }
        match (
            self.length.checked_mul(exponent),
            self.mass.checked_mul(exponent),
            self.time.checked_mul(exponent),
            self.current.checked_mul(exponent),
        ) {
            (Some(length), Some(mass), Some(time), Some(current)) => {
                Self::new(length, mass, time, current)
            }
            _ => Self::OVERFLOW,
        }
    }

    /// Dimension of the `degree`-th root, or `None` when some exponent is not
    /// divisible by `degree`.
    pub fn root(self, degree: i8) -> Option<Self> {
        if degree == 0 || self.overflowed {
            return None;
        }
        let mut roots = [0_i8; 4];
        for (root, exponent) in roots.iter_mut().zip(self.exponents()) {
            if exponent.checked_rem(degree)? != 0 {
                return None;
            }
            *root = exponent.checked_div(degree)?;
        }
        Some(Self::new(roots[0], roots[1], roots[2], roots[3]))
    }
}

impl Mul for Dimension {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div for Dimension {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.overflowed {
            return f.write_str("<exponent overflow>");
        }
        if self.is_dimensionless() {
            return f.write_str("1");
        }

        let mut first = true;
        for (symbol, exponent) in ["m", "kg", "s", "A"].into_iter().zip(self.exponents()) {
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if exponent == 1 {
                f.write_str(symbol)?;
            } else {
                write!(f, "{symbol}^{exponent}")?;
            }
        }
        Ok(())
    }
}
