use libpngmeta::{PhysicalResolution, Unit};
use std::{num::ParseIntError, str::FromStr};

/// A `X,Y[,UNIT]` physical resolution given on the command line.
///
/// `UNIT` is one of `undefined`, `meters`, `inches` or a raw unit byte, and
/// defaults to `meters`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct PhysArg(pub(crate) PhysicalResolution);

impl FromStr for PhysArg {
    type Err = PhysParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let x = parts.next().ok_or(PhysParseError::Format)?.trim().parse()?;
        let y = parts.next().ok_or(PhysParseError::Format)?.trim().parse()?;
        let unit = match parts.next().map(str::trim) {
            None => Unit::Meters,
            Some(unit) => parse_unit(unit)?,
        };
        if parts.next().is_some() {
            return Err(PhysParseError::Format);
        }
        Ok(Self(PhysicalResolution::new(x, y, unit)))
    }
}

fn parse_unit(s: &str) -> Result<Unit, PhysParseError> {
    match s.to_ascii_lowercase().as_str() {
        "undefined" => Ok(Unit::Undefined),
        "meters" | "m" => Ok(Unit::Meters),
        "inches" | "in" => Ok(Unit::Inches),
        other => other
            .parse::<u8>()
            .map(Unit::from)
            .map_err(|_| PhysParseError::Unit(s.into())),
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub(crate) enum PhysParseError {
    #[error("physical resolution must be in the form X,Y[,UNIT]")]
    Format,
    #[error("invalid pixels per unit: {0}")]
    InvalidNumber(#[from] ParseIntError),
    #[error("unknown unit: {0}")]
    Unit(String),
}
