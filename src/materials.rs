//! Registry of the structural materials a beam can be made from.

use std::fmt;

use serde::Serialize;

use crate::errors::BeamError;

/// Colour used when drawing a beam, as RGB components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Colour {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

/// Mechanical and economic properties of a beam material.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MaterialSpec {
    /// Lower-case registry name.
    pub name: &'static str,
    /// Density in kilograms per cubic metre.
    pub density: f64,
    /// Yield strength in pascals.
    pub yield_strength: f64,
    /// Elastic modulus in pascals.
    pub elastic_modulus: f64,
    /// Cost of one cubic metre of material.
    pub cost_per_volume: f64,
    /// Colour the presentation layer draws the beam in.
    pub colour: Colour,
}

impl fmt::Display for MaterialSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Aluminium.
pub const ALUMINIUM: MaterialSpec = MaterialSpec {
    name: "aluminium",
    density: 2_710.0,
    yield_strength: 300.0e6,
    elastic_modulus: 70.0e9,
    cost_per_volume: 5_100.0,
    colour: Colour {
        r: 0.3,
        g: 0.3,
        b: 0.3,
    },
};

/// Structural steel.
pub const STEEL: MaterialSpec = MaterialSpec {
    name: "steel",
    density: 7_850.0,
    yield_strength: 500.0e6,
    elastic_modulus: 200.0e9,
    cost_per_volume: 2_420.0,
    colour: Colour {
        r: 0.1,
        g: 0.3,
        b: 0.5,
    },
};

/// Cast iron.
pub const IRON: MaterialSpec = MaterialSpec {
    name: "iron",
    density: 7_800.0,
    yield_strength: 50.0e6,
    elastic_modulus: 210.0e9,
    cost_per_volume: 450.0,
    colour: Colour {
        r: 0.8,
        g: 0.2,
        b: 0.2,
    },
};

static REGISTRY: [MaterialSpec; 3] = [ALUMINIUM, STEEL, IRON];

/// Return every registered material in registry order.
#[must_use]
pub fn materials() -> &'static [MaterialSpec] {
    &REGISTRY
}

/// Look up a material by name, ignoring case.
///
/// # Errors
///
/// Returns [`BeamError::UnknownMaterial`] when no registered material has that name.
///
/// # Examples
/// ```
/// use beamgen::material;
///
/// let steel = material("Steel").expect("steel is registered");
/// assert_eq!(steel.elastic_modulus, 200.0e9);
/// assert!(material("titanium").is_err());
/// ```
pub fn material(name: &str) -> Result<&'static MaterialSpec, BeamError> {
    let name = name.trim();
    REGISTRY
        .iter()
        .find(|material| material.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| BeamError::UnknownMaterial(name.to_owned()))
}
