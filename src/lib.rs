#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod beam;
pub mod errors;
pub mod generator;
pub mod geometry;
pub mod materials;
pub mod mesh;
pub mod report;
pub mod section;
pub mod selection;

pub use beam::{compute_beam_properties, BeamProperties, BeamRecord, BeamSpec};
pub use errors::{BeamError, MeshError};
pub use generator::{BeamGenerator, DEFAULT_BEAM_COUNT};
pub use geometry::{point, Mesh, Point};
pub use materials::{material, materials, Colour, MaterialSpec, ALUMINIUM, IRON, STEEL};
pub use mesh::{build_display_mesh, build_mesh, CIRCLE_SIDES, DISPLAY_LENGTH};
pub use report::{render_fact_sheet, render_series, significant};
pub use section::{compute_section_geometry, CrossSectionKind, SectionGeometry};
pub use selection::{filter_beams, scatter_series, BeamFilter, BeamQuantity};
