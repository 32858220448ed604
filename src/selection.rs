//! Filtering generated beams and pulling plot series out of them.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::beam::BeamRecord;
use crate::errors::BeamError;
use crate::section::CrossSectionKind;

/// Which materials and cross-sections are currently shown.
///
/// A beam passes when both its material and its cross-section are selected.
/// The default selection shows everything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeamFilter {
    /// Selected material names.
    pub materials: Vec<String>,
    /// Selected cross-section families.
    pub cross_sections: Vec<CrossSectionKind>,
}

impl Default for BeamFilter {
    fn default() -> Self {
        Self {
            materials: crate::materials::materials()
                .iter()
                .map(|material| material.name.to_owned())
                .collect(),
            cross_sections: CrossSectionKind::ALL.to_vec(),
        }
    }
}

impl BeamFilter {
    /// Return whether `record` is selected.
    #[must_use]
    pub fn accepts(&self, record: &BeamRecord) -> bool {
        let material = record.spec.material().name;
        self.materials
            .iter()
            .any(|name| name.eq_ignore_ascii_case(material))
            && self.cross_sections.contains(&record.spec.cross_section())
    }
}

/// Return the records `filter` accepts, keeping their order.
///
/// # Examples
/// ```
/// use beamgen::{filter_beams, BeamFilter, BeamGenerator, CrossSectionKind};
///
/// let records = BeamGenerator::seeded(2).generate(30).unwrap();
/// let filter = BeamFilter {
///     cross_sections: vec![CrossSectionKind::Circle],
///     ..BeamFilter::default()
/// };
/// assert!(filter_beams(&records, &filter)
///     .iter()
///     .all(|record| record.spec.cross_section() == CrossSectionKind::Circle));
/// ```
#[must_use]
pub fn filter_beams<'a>(records: &'a [BeamRecord], filter: &BeamFilter) -> Vec<&'a BeamRecord> {
    records.iter().filter(|record| filter.accepts(record)).collect()
}

/// Numeric quantity of a beam that can be plotted on an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BeamQuantity {
    /// One-based generation index.
    Index,
    /// Width in metres.
    Width,
    /// Length in metres.
    Length,
    /// Volume in m³.
    Volume,
    /// Mass in kilograms.
    Mass,
    /// Material cost.
    Cost,
    /// Maximum tip force in newtons.
    MaxForce,
    /// Tip deflection at the maximum force in metres.
    MaxDeflection,
}

impl BeamQuantity {
    /// Every quantity in display order.
    pub const ALL: [BeamQuantity; 8] = [
        BeamQuantity::Index,
        BeamQuantity::Width,
        BeamQuantity::Length,
        BeamQuantity::Volume,
        BeamQuantity::Mass,
        BeamQuantity::Cost,
        BeamQuantity::MaxForce,
        BeamQuantity::MaxDeflection,
    ];

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            BeamQuantity::Index => "index",
            BeamQuantity::Width => "width",
            BeamQuantity::Length => "length",
            BeamQuantity::Volume => "volume",
            BeamQuantity::Mass => "mass",
            BeamQuantity::Cost => "cost",
            BeamQuantity::MaxForce => "maximum force",
            BeamQuantity::MaxDeflection => "maximum deflection",
        }
    }

    /// Read this quantity off a record.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(self, record: &BeamRecord) -> f64 {
        match self {
            BeamQuantity::Index => record.index as f64,
            BeamQuantity::Width => record.spec.width(),
            BeamQuantity::Length => record.spec.length(),
            BeamQuantity::Volume => record.properties.volume,
            BeamQuantity::Mass => record.properties.mass,
            BeamQuantity::Cost => record.properties.cost,
            BeamQuantity::MaxForce => record.properties.max_force,
            BeamQuantity::MaxDeflection => record.properties.max_deflection,
        }
    }
}

impl fmt::Display for BeamQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BeamQuantity {
    type Err = BeamError;

    /// Accepts the label with spaces, hyphens or underscores between words,
    /// plus the short forms `max-force` and `max-deflection`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '_' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        let normalised = normalised.replace("max ", "maximum ");
        BeamQuantity::ALL
            .into_iter()
            .find(|quantity| quantity.label() == normalised)
            .ok_or_else(|| BeamError::UnknownQuantity(s.trim().to_owned()))
    }
}

/// Collect `(x, y)` pairs of two quantities for a scatter plot.
#[must_use]
pub fn scatter_series<'a, I>(records: I, x: BeamQuantity, y: BeamQuantity) -> Vec<(f64, f64)>
where
    I: IntoIterator<Item = &'a BeamRecord>,
{
    records
        .into_iter()
        .map(|record| (x.value(record), y.value(record)))
        .collect()
}
