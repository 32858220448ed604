//! Cantilever beam descriptions and their bending response.

use serde::{Serialize, Serializer};

use crate::errors::{check_dimension, BeamError};
use crate::materials::MaterialSpec;
use crate::section::{compute_section_geometry, CrossSectionKind, SectionGeometry};

/// Immutable description of a generated cantilever beam.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BeamSpec {
    /// Outer cross-section dimension in metres.
    width: f64,
    /// Distance from the clamped end to the loaded tip in metres.
    length: f64,
    /// Material the beam is made from.
    #[serde(serialize_with = "material_name")]
    material: MaterialSpec,
    /// Cross-section family.
    cross_section: CrossSectionKind,
}

/// Serialize a material by its registry name.
fn material_name<S: Serializer>(material: &MaterialSpec, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(material.name)
}

impl BeamSpec {
    /// Describe a beam.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::InvalidDimension`] when `width` or `length` is not
    /// strictly positive.
    ///
    /// # Examples
    /// ```
    /// use beamgen::{BeamSpec, CrossSectionKind, STEEL};
    ///
    /// let beam = BeamSpec::new(0.3, 2.0, STEEL, CrossSectionKind::Square).unwrap();
    /// assert_eq!(beam.length(), 2.0);
    /// assert!(BeamSpec::new(0.3, 0.0, STEEL, CrossSectionKind::Square).is_err());
    /// ```
    pub fn new(
        width: f64,
        length: f64,
        material: MaterialSpec,
        cross_section: CrossSectionKind,
    ) -> Result<Self, BeamError> {
        Ok(Self {
            width: check_dimension("width", width)?,
            length: check_dimension("length", length)?,
            material,
            cross_section,
        })
    }

    /// Outer cross-section dimension in metres.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Cantilever length in metres.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Material the beam is made from.
    #[must_use]
    pub fn material(&self) -> &MaterialSpec {
        &self.material
    }

    /// Cross-section family.
    #[must_use]
    pub fn cross_section(&self) -> CrossSectionKind {
        self.cross_section
    }

    /// Area properties of this beam's cross-section.
    ///
    /// # Errors
    ///
    /// Propagates [`compute_section_geometry`] errors; a constructed spec
    /// always has a valid width.
    pub fn section_geometry(&self) -> Result<SectionGeometry, BeamError> {
        compute_section_geometry(self.width, self.cross_section)
    }

    /// Compute the section geometry and then the bending response.
    ///
    /// # Errors
    ///
    /// Propagates [`BeamSpec::section_geometry`] errors.
    pub fn properties(&self) -> Result<BeamProperties, BeamError> {
        let geometry = self.section_geometry()?;
        Ok(compute_beam_properties(self, &geometry))
    }
}

/// Derived quantities for a beam under a tip load.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BeamProperties {
    /// Material volume in m³.
    pub volume: f64,
    /// Mass in kilograms.
    pub mass: f64,
    /// Material cost.
    pub cost: f64,
    /// Largest tip force in newtons before the extreme fibre yields.
    pub max_force: f64,
    /// Tip deflection in metres under [`BeamProperties::max_force`].
    pub max_deflection: f64,
}

/// Compute the volume, mass, cost and failure response of a cantilever.
///
/// The extreme fibre sits at half the width for every cross-section family.
///
/// # Examples
/// ```
/// use beamgen::{compute_beam_properties, BeamSpec, CrossSectionKind, STEEL};
///
/// let beam = BeamSpec::new(0.3, 2.0, STEEL, CrossSectionKind::Square).unwrap();
/// let geometry = beam.section_geometry().unwrap();
/// let properties = compute_beam_properties(&beam, &geometry);
/// assert!((properties.max_force - 1.125e6).abs() < 1e-3);
/// ```
#[must_use]
pub fn compute_beam_properties(spec: &BeamSpec, geometry: &SectionGeometry) -> BeamProperties {
    let material = spec.material();
    let length = spec.length();
    let inertia = geometry.second_moment_of_area;

    let volume = geometry.area * length;
    let extreme_fibre = spec.width() / 2.0;
    let max_force = (material.yield_strength * inertia) / (length * extreme_fibre);
    let max_deflection =
        (max_force * length.powi(3)) / (3.0 * material.elastic_modulus * inertia);

    BeamProperties {
        volume,
        mass: material.density * volume,
        cost: volume * material.cost_per_volume,
        max_force,
        max_deflection,
    }
}

/// A generated beam bundled with the properties computed for it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BeamRecord {
    /// One-based position in generation order.
    pub index: usize,
    /// The beam itself.
    #[serde(flatten)]
    pub spec: BeamSpec,
    /// Properties derived from [`BeamRecord::spec`].
    #[serde(flatten)]
    pub properties: BeamProperties,
}

impl BeamRecord {
    /// Compute the properties of `spec` and bundle them with it.
    ///
    /// # Errors
    ///
    /// Propagates [`BeamSpec::properties`] errors.
    pub fn new(index: usize, spec: BeamSpec) -> Result<Self, BeamError> {
        Ok(Self {
            index,
            spec,
            properties: spec.properties()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::materials::{ALUMINIUM, IRON, STEEL};

    fn steel_square() -> BeamSpec {
        BeamSpec::new(0.3, 2.0, STEEL, CrossSectionKind::Square).expect("valid beam")
    }

    #[test]
    fn steel_square_matches_hand_calculation() {
        let properties = steel_square().properties().expect("valid geometry");
        assert_relative_eq!(properties.volume, 0.18, max_relative = 1e-12);
        assert_relative_eq!(properties.mass, 1_413.0, max_relative = 1e-12);
        assert_relative_eq!(properties.cost, 0.18 * 2_420.0, max_relative = 1e-12);
        assert_relative_eq!(properties.max_force, 1_125_000.0, max_relative = 1e-12);
        assert_relative_eq!(properties.max_deflection, 0.022_222_222_222, max_relative = 1e-9);
    }

    #[test]
    fn volume_scales_linearly_with_length() {
        for kind in CrossSectionKind::ALL {
            let short = BeamSpec::new(0.25, 1.5, ALUMINIUM, kind).expect("valid beam");
            let long = BeamSpec::new(0.25, 3.0, ALUMINIUM, kind).expect("valid beam");
            let short = short.properties().expect("valid geometry");
            let long = long.properties().expect("valid geometry");
            assert_relative_eq!(long.volume, 2.0 * short.volume, max_relative = 1e-12);
            // F ∝ 1/L and δ ∝ F·L³, so δ grows with the square of the length.
            assert_relative_eq!(long.max_force, short.max_force / 2.0, max_relative = 1e-12);
            assert_relative_eq!(
                long.max_deflection,
                4.0 * short.max_deflection,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn weaker_material_carries_less_force() {
        let steel = steel_square().properties().expect("valid geometry");
        let iron = BeamSpec::new(0.3, 2.0, IRON, CrossSectionKind::Square)
            .and_then(|beam| beam.properties())
            .expect("valid beam");
        assert!(iron.max_force < steel.max_force);
        assert!(iron.cost < steel.cost);
    }

    #[test]
    fn repeated_computation_is_bit_identical() {
        let beam = BeamSpec::new(0.27, 3.3, ALUMINIUM, CrossSectionKind::IBeam).expect("valid beam");
        assert_eq!(beam.properties(), beam.properties());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            BeamSpec::new(0.0, 2.0, STEEL, CrossSectionKind::Circle),
            Err(BeamError::InvalidDimension { name: "width", .. })
        ));
        assert!(matches!(
            BeamSpec::new(0.3, -2.0, STEEL, CrossSectionKind::Circle),
            Err(BeamError::InvalidDimension { name: "length", .. })
        ));
    }

    #[test]
    fn record_serializes_flat() {
        let record = BeamRecord::new(4, steel_square()).expect("valid beam");
        let json = serde_json::to_value(record).expect("serializable");
        assert_eq!(json["index"], 4);
        assert_eq!(json["material"], "steel");
        assert_eq!(json["cross_section"], "square");
        assert!(json["max_force"].as_f64().is_some());
    }
}
