//! Random generation of beams to compare.

use std::ops::Range;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::beam::{BeamRecord, BeamSpec};
use crate::errors::BeamError;
use crate::materials::materials;
use crate::section::CrossSectionKind;

/// Number of beams the command line tool generates by default.
pub const DEFAULT_BEAM_COUNT: usize = 21;

/// Produces beams with random dimensions, materials and cross-sections.
///
/// Records are numbered from one in the order they are generated and own
/// their computed properties.
#[derive(Debug)]
pub struct BeamGenerator {
    rng: StdRng,
    widths: Range<f64>,
    lengths: Range<f64>,
    next_index: usize,
}

impl BeamGenerator {
    /// Create a reproducible generator.
    ///
    /// # Examples
    /// ```
    /// use beamgen::BeamGenerator;
    ///
    /// let first = BeamGenerator::seeded(7).generate(5).unwrap();
    /// let second = BeamGenerator::seeded(7).generate(5).unwrap();
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Wrap `rng` with the default dimension ranges.
    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            widths: 0.2..0.4,
            lengths: 1.0..5.0,
            next_index: 1,
        }
    }

    /// Restrict the width range in metres.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::InvalidDimension`] when the range is empty or not
    /// strictly positive.
    pub fn with_widths(mut self, widths: Range<f64>) -> Result<Self, BeamError> {
        self.widths = check_range("width", widths)?;
        Ok(self)
    }

    /// Restrict the length range in metres.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::InvalidDimension`] when the range is empty or not
    /// strictly positive.
    pub fn with_lengths(mut self, lengths: Range<f64>) -> Result<Self, BeamError> {
        self.lengths = check_range("length", lengths)?;
        Ok(self)
    }

    /// Draw a single beam and compute its properties.
    ///
    /// # Errors
    ///
    /// Propagates [`BeamSpec::new`] and [`BeamRecord::new`] errors.
    pub fn next_record(&mut self) -> Result<BeamRecord, BeamError> {
        let width = self.rng.gen_range(self.widths.clone());
        let length = self.rng.gen_range(self.lengths.clone());
        let registry = materials();
        let material = registry[self.rng.gen_range(0..registry.len())];
        let cross_section =
            CrossSectionKind::ALL[self.rng.gen_range(0..CrossSectionKind::ALL.len())];

        let spec = BeamSpec::new(width, length, material, cross_section)?;
        let record = BeamRecord::new(self.next_index, spec)?;
        self.next_index += 1;
        debug!(
            "generated beam {}: {material} {cross_section}, {width:.3} x {length:.3} m",
            record.index
        );
        Ok(record)
    }

    /// Draw `count` beams.
    ///
    /// # Errors
    ///
    /// Propagates [`BeamGenerator::next_record`] errors.
    pub fn generate(&mut self, count: usize) -> Result<Vec<BeamRecord>, BeamError> {
        (0..count).map(|_| self.next_record()).collect()
    }
}

/// Validate a sampling range for a beam dimension.
fn check_range(name: &'static str, range: Range<f64>) -> Result<Range<f64>, BeamError> {
    if !(range.start.is_finite() && range.start > 0.0) {
        return Err(BeamError::InvalidDimension {
            name,
            value: range.start,
        });
    }
    if !(range.end.is_finite() && range.end > range.start) {
        return Err(BeamError::InvalidDimension {
            name,
            value: range.end,
        });
    }
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_numbered_from_one() {
        let records = BeamGenerator::seeded(1).generate(4).expect("generation succeeds");
        let indices: Vec<_> = records.iter().map(|record| record.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn dimensions_stay_within_default_ranges() {
        let records = BeamGenerator::seeded(99)
            .generate(200)
            .expect("generation succeeds");
        for record in &records {
            assert!((0.2..0.4).contains(&record.spec.width()));
            assert!((1.0..5.0).contains(&record.spec.length()));
        }
    }

    #[test]
    fn every_material_and_section_appears_eventually() {
        let records = BeamGenerator::seeded(3)
            .generate(200)
            .expect("generation succeeds");
        for material in materials() {
            assert!(records.iter().any(|r| r.spec.material().name == material.name));
        }
        for kind in CrossSectionKind::ALL {
            assert!(records.iter().any(|r| r.spec.cross_section() == kind));
        }
    }

    #[test]
    fn properties_match_the_generated_spec() {
        let mut generator = BeamGenerator::seeded(11);
        let record = generator.next_record().expect("generation succeeds");
        assert_eq!(Ok(record.properties), record.spec.properties());
    }

    #[test]
    fn custom_ranges_are_respected_and_checked() {
        let records = BeamGenerator::seeded(5)
            .with_widths(0.5..0.6)
            .and_then(|generator| generator.with_lengths(10.0..11.0))
            .expect("valid ranges")
            .generate(20)
            .expect("generation succeeds");
        assert!(records.iter().all(|r| r.spec.width() >= 0.5 && r.spec.length() >= 10.0));

        assert!(BeamGenerator::seeded(5).with_widths(0.0..0.1).is_err());
        assert!(BeamGenerator::seeded(5).with_lengths(2.0..1.0).is_err());
    }
}
