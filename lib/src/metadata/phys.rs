use crate::error::Error;
use std::fmt::{self, Display, Formatter};

const INCHES_PER_METER: f64 = 1.0 / 0.0254;

/// Unit specifier of a `pHYs` chunk.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum Unit {
    /// Only the aspect ratio is known.
    #[default]
    Undefined,
    /// Pixels per meter.
    Meters,
    /// Pixels per inch.
    Inches,
    /// A unit byte this library does not know, kept so that it can be
    /// written back unchanged.
    Unknown(u8),
}

impl From<u8> for Unit {
    #[inline]
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Undefined,
            1 => Self::Meters,
            2 => Self::Inches,
            v => Self::Unknown(v),
        }
    }
}

impl From<Unit> for u8 {
    #[inline]
    fn from(value: Unit) -> Self {
        match value {
            Unit::Undefined => 0,
            Unit::Meters => 1,
            Unit::Inches => 2,
            Unit::Unknown(v) => v,
        }
    }
}

impl Display for Unit {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Meters => f.write_str("meters"),
            Self::Inches => f.write_str("inches"),
            Self::Unknown(v) => write!(f, "unknown({v})"),
        }
    }
}

/// Pixels per unit along each axis, as stored in a `pHYs` chunk.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct PhysicalResolution {
    pub x: u32,
    pub y: u32,
    pub unit: Unit,
}

impl PhysicalResolution {
    /// Size of a `pHYs` payload in bytes.
    pub const BYTES_LEN: usize = 9;

    #[inline]
    pub const fn new(x: u32, y: u32, unit: Unit) -> Self {
        Self { x, y, unit }
    }

    /// Creates a resolution of `dpi` dots per inch on both axes, stored in
    /// pixels per meter.
    ///
    /// Returns `None` when the pixels per meter do not fit in a `u32`.
    ///
    /// # Examples
    /// ```
    /// use libpngmeta::{PhysicalResolution, Unit};
    ///
    /// let phys = PhysicalResolution::from_dpi(72);
    /// assert_eq!(phys, Some(PhysicalResolution::new(2835, 2835, Unit::Meters)));
    /// assert_eq!(PhysicalResolution::from_dpi(u32::MAX), None);
    /// ```
    #[inline]
    pub fn from_dpi(dpi: u32) -> Option<Self> {
        let ppm = (f64::from(dpi) * INCHES_PER_METER).round();
        if ppm > f64::from(u32::MAX) {
            return None;
        }
        let ppm = ppm as u32;
        Some(Self::new(ppm, ppm, Unit::Meters))
    }

    /// Returns the resolution in dots per inch, or `None` when the unit is
    /// not a length.
    #[inline]
    pub fn dpi(&self) -> Option<(f64, f64)> {
        let factor = match self.unit {
            Unit::Meters => 1.0 / INCHES_PER_METER,
            Unit::Inches => 1.0,
            Unit::Undefined | Unit::Unknown(_) => return None,
        };
        Some((f64::from(self.x) * factor, f64::from(self.y) * factor))
    }

    pub(crate) fn to_bytes(self) -> [u8; Self::BYTES_LEN] {
        let mut data = [0; Self::BYTES_LEN];
        data[0..4].copy_from_slice(&self.x.to_be_bytes());
        data[4..8].copy_from_slice(&self.y.to_be_bytes());
        data[8] = self.unit.into();
        data
    }

    /// Reads the first 9 bytes of a `pHYs` payload; any extra bytes are ignored.
    pub(crate) fn try_from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let invalid = || Error::InvalidPhysicalResolution(bytes.len());
        let (x, r) = bytes.split_first_chunk::<4>().ok_or_else(invalid)?;
        let (y, r) = r.split_first_chunk::<4>().ok_or_else(invalid)?;
        let unit = r.first().ok_or_else(invalid)?;
        Ok(Self::new(
            u32::from_be_bytes(*x),
            u32::from_be_bytes(*y),
            Unit::from(*unit),
        ))
    }
}
