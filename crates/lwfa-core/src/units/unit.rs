use super::Dimension;
use crate::domain::{LwfaError, LwfaResult};
use std::fmt::{Display, Formatter};

/// A named unit: the SI magnitude of one unit and its dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    symbol: &'static str,
    scale: f64,
    dimension: Dimension,
}

impl Unit {
    pub const fn new(symbol: &'static str, scale: f64, dimension: Dimension) -> Self {
        Self {
            symbol,
            scale,
            dimension,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub const fn scale(&self) -> f64 {
        self.scale
    }

    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Looks a unit up by symbol. Accepts the common ASCII spellings
    /// (`um`, `cm^-3`, `W/cm^2`) as well as `µm`/`μm`.
    pub fn parse(symbol: &str) -> LwfaResult<Self> {
        let normalized = symbol.trim();
        UNIT_CATALOGUE
            .iter()
            .find(|(aliases, _)| aliases.iter().any(|alias| *alias == normalized))
            .map(|(_, unit)| *unit)
            .ok_or_else(|| LwfaError::invalid_quantity(symbol, "unknown unit"))
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol)
    }
}

const ELECTRONVOLT_IN_JOULE: f64 = 1.602_176_634e-19;

pub const DIMENSIONLESS: Unit = Unit::new("", 1.0, Dimension::DIMENSIONLESS);

pub const METER: Unit = Unit::new("m", 1.0, Dimension::LENGTH);
pub const CENTIMETER: Unit = Unit::new("cm", 1.0e-2, Dimension::LENGTH);
pub const MILLIMETER: Unit = Unit::new("mm", 1.0e-3, Dimension::LENGTH);
pub const MICROMETER: Unit = Unit::new("um", 1.0e-6, Dimension::LENGTH);
pub const NANOMETER: Unit = Unit::new("nm", 1.0e-9, Dimension::LENGTH);

pub const SECOND: Unit = Unit::new("s", 1.0, Dimension::TIME);
pub const PICOSECOND: Unit = Unit::new("ps", 1.0e-12, Dimension::TIME);
pub const FEMTOSECOND: Unit = Unit::new("fs", 1.0e-15, Dimension::TIME);

pub const KILOGRAM: Unit = Unit::new("kg", 1.0, Dimension::MASS);

pub const JOULE: Unit = Unit::new("J", 1.0, Dimension::ENERGY);
pub const MILLIJOULE: Unit = Unit::new("mJ", 1.0e-3, Dimension::ENERGY);
pub const ELECTRONVOLT: Unit = Unit::new("eV", ELECTRONVOLT_IN_JOULE, Dimension::ENERGY);
pub const MEGAELECTRONVOLT: Unit = Unit::new("MeV", 1.0e6 * ELECTRONVOLT_IN_JOULE, Dimension::ENERGY);
pub const GIGAELECTRONVOLT: Unit = Unit::new("GeV", 1.0e9 * ELECTRONVOLT_IN_JOULE, Dimension::ENERGY);

pub const WATT: Unit = Unit::new("W", 1.0, Dimension::POWER);
pub const GIGAWATT: Unit = Unit::new("GW", 1.0e9, Dimension::POWER);
pub const TERAWATT: Unit = Unit::new("TW", 1.0e12, Dimension::POWER);
pub const PETAWATT: Unit = Unit::new("PW", 1.0e15, Dimension::POWER);

pub const WATT_PER_CM2: Unit = Unit::new("W/cm^2", 1.0e4, Dimension::INTENSITY);
pub const WATT_PER_M2: Unit = Unit::new("W/m^2", 1.0, Dimension::INTENSITY);

pub const PER_CM3: Unit = Unit::new("cm^-3", 1.0e6, Dimension::NUMBER_DENSITY);
pub const PER_M3: Unit = Unit::new("m^-3", 1.0, Dimension::NUMBER_DENSITY);

pub const PER_MICROMETER: Unit = Unit::new("1/um", 1.0e6, Dimension::WAVENUMBER);
pub const PER_FEMTOSECOND: Unit = Unit::new("1/fs", 1.0e15, Dimension::FREQUENCY);

pub const VOLT_PER_METER: Unit = Unit::new("V/m", 1.0, Dimension::ELECTRIC_FIELD);
pub const MEGAVOLT_PER_MM: Unit = Unit::new("MV/mm", 1.0e9, Dimension::ELECTRIC_FIELD);
pub const GIGAVOLT_PER_METER: Unit = Unit::new("GV/m", 1.0e9, Dimension::ELECTRIC_FIELD);

pub const COULOMB: Unit = Unit::new("C", 1.0, Dimension::CHARGE);
pub const NANOCOULOMB: Unit = Unit::new("nC", 1.0e-9, Dimension::CHARGE);
pub const PICOCOULOMB: Unit = Unit::new("pC", 1.0e-12, Dimension::CHARGE);

const UNIT_CATALOGUE: &[(&[&str], Unit)] = &[
    (&["", "1", "dimensionless"], DIMENSIONLESS),
    (&["m", "meter"], METER),
    (&["cm", "centimeter"], CENTIMETER),
    (&["mm", "millimeter"], MILLIMETER),
    (&["um", "µm", "μm", "micrometer", "micron"], MICROMETER),
    (&["nm", "nanometer"], NANOMETER),
    (&["s", "second"], SECOND),
    (&["ps", "picosecond"], PICOSECOND),
    (&["fs", "femtosecond"], FEMTOSECOND),
    (&["kg", "kilogram"], KILOGRAM),
    (&["J", "joule"], JOULE),
    (&["mJ", "millijoule"], MILLIJOULE),
    (&["eV"], ELECTRONVOLT),
    (&["MeV"], MEGAELECTRONVOLT),
    (&["GeV"], GIGAELECTRONVOLT),
    (&["W", "watt"], WATT),
    (&["GW", "gigawatt"], GIGAWATT),
    (&["TW", "terawatt"], TERAWATT),
    (&["PW", "petawatt"], PETAWATT),
    (&["W/cm^2", "W/cm2", "W/cm**2"], WATT_PER_CM2),
    (&["W/m^2", "W/m2", "W/m**2"], WATT_PER_M2),
    (
        &["cm^-3", "cm-3", "cm**-3", "1/cm^3", "/cm^3", "1/cm3"],
        PER_CM3,
    ),
    (&["m^-3", "m-3", "m**-3", "1/m^3", "/m^3", "1/m3"], PER_M3),
    (&["1/um", "um^-1"], PER_MICROMETER),
    (&["1/fs", "fs^-1"], PER_FEMTOSECOND),
    (&["V/m"], VOLT_PER_METER),
    (&["MV/mm"], MEGAVOLT_PER_MM),
    (&["GV/m"], GIGAVOLT_PER_METER),
    (&["C", "coulomb"], COULOMB),
    (&["nC"], NANOCOULOMB),
    (&["pC"], PICOCOULOMB),
];

#[cfg(test)]
mod tests {
    use super::{MEGAVOLT_PER_MM, MICROMETER, PER_CM3, Unit, WATT_PER_CM2};
    use crate::domain::LwfaError;

    #[test]
    fn aliases_resolve_to_the_same_unit() {
        for alias in ["um", "µm", "μm", "micrometer"] {
            assert_eq!(Unit::parse(alias).expect("alias should parse"), MICROMETER);
        }
        assert_eq!(Unit::parse("cm-3").expect("density unit"), PER_CM3);
        assert_eq!(Unit::parse(" W/cm2 ").expect("intensity unit"), WATT_PER_CM2);
    }

    #[test]
    fn display_units_share_a_dimension_with_their_si_counterparts() {
        assert_eq!(
            MEGAVOLT_PER_MM.dimension(),
            Unit::parse("V/m").expect("field unit").dimension()
        );
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        let error = Unit::parse("furlong").expect_err("unknown unit should fail");
        assert!(matches!(error, LwfaError::InvalidQuantity { .. }));
    }
}
