//! Cross-section families and their area properties.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::{check_dimension, BeamError};

/// Shape of a beam's cross-section. The outer dimension of every family is the
/// beam width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CrossSectionKind {
    /// Solid square with side equal to the width.
    #[serde(rename = "square")]
    Square,
    /// Solid circle with diameter equal to the width.
    #[serde(rename = "circle")]
    Circle,
    /// Symmetric I-beam whose flanges and web are a fifth of the width thick.
    #[serde(rename = "I-beam")]
    IBeam,
}

impl CrossSectionKind {
    /// Every supported family.
    pub const ALL: [CrossSectionKind; 3] = [
        CrossSectionKind::Square,
        CrossSectionKind::Circle,
        CrossSectionKind::IBeam,
    ];

    /// Canonical display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CrossSectionKind::Square => "square",
            CrossSectionKind::Circle => "circle",
            CrossSectionKind::IBeam => "I-beam",
        }
    }
}

impl fmt::Display for CrossSectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CrossSectionKind {
    type Err = BeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(CrossSectionKind::Square),
            "circle" => Ok(CrossSectionKind::Circle),
            "i-beam" | "ibeam" | "i_beam" => Ok(CrossSectionKind::IBeam),
            _ => Err(BeamError::UnsupportedCrossSection(s.trim().to_owned())),
        }
    }
}

/// Thickness of the I-beam flanges and web for a given outer width.
#[must_use]
pub fn flange_thickness(width: f64) -> f64 {
    width / 5.0
}

/// Area properties of a cross-section about its bending axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SectionGeometry {
    /// Second moment of area in m⁴.
    pub second_moment_of_area: f64,
    /// Cross-sectional area in m².
    pub area: f64,
}

/// Compute the second moment of area and area of a cross-section.
///
/// The circle uses `π·w⁴/4` and the I-beam a thin-wall sum of its flanges and
/// web; both are the fixed formulas this tool reports, not textbook values.
///
/// # Errors
///
/// Returns [`BeamError::InvalidDimension`] when `width` is not strictly positive.
///
/// # Examples
/// ```
/// use beamgen::{compute_section_geometry, CrossSectionKind};
///
/// let square = compute_section_geometry(0.3, CrossSectionKind::Square).unwrap();
/// assert!((square.area - 0.09).abs() < 1e-12);
/// assert!((square.second_moment_of_area - 0.000675).abs() < 1e-12);
/// ```
pub fn compute_section_geometry(
    width: f64,
    cross_section: CrossSectionKind,
) -> Result<SectionGeometry, BeamError> {
    let width = check_dimension("width", width)?;
    let geometry = match cross_section {
        CrossSectionKind::Square => SectionGeometry {
            second_moment_of_area: width.powi(4) / 12.0,
            area: width.powi(2),
        },
        CrossSectionKind::Circle => SectionGeometry {
            second_moment_of_area: PI * width.powi(4) / 4.0,
            area: PI * (width / 2.0).powi(2),
        },
        CrossSectionKind::IBeam => {
            let d = flange_thickness(width);
            let height = width;
            let inner_width = width - 2.0 * d;
            SectionGeometry {
                second_moment_of_area: (2.0 * d * height.powi(3) + inner_width * d.powi(3)) / 12.0,
                area: 2.0 * d * height + inner_width * d,
            }
        }
    };
    Ok(geometry)
}
