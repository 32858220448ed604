//! Polygon meshes of extruded beam cross-sections.
//!
//! Every mesh is centred on the origin with the beam axis along Z. The back
//! profile sits at `z = -length / 2` and the front profile at `z = +length / 2`.

use std::f64::consts::TAU;

use log::debug;

use crate::beam::BeamSpec;
use crate::errors::{check_dimension, BeamError};
use crate::geometry::{point, Mesh, Point};
use crate::section::{flange_thickness, CrossSectionKind};

/// Number of sides of the polygon approximating a circular cross-section.
pub const CIRCLE_SIDES: usize = 40;

/// Length every beam is drawn at by [`build_display_mesh`].
pub const DISPLAY_LENGTH: f64 = 2.0;

/// Faces of the square prism: back, front, right, left, top and bottom.
const SQUARE_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [3, 2, 6, 7],
    [0, 1, 5, 4],
    [2, 1, 5, 6],
    [0, 3, 7, 4],
];

/// Faces of the I-beam prism. The profile is split into the web and the two
/// flanges at each end, then come the flange end caps, the six faces lining
/// the recesses either side of the web and finally the two flat outer sides.
const I_BEAM_FACES: [[usize; 4]; 18] = [
    // back profile
    [3, 4, 9, 10],
    [5, 6, 7, 8],
    [0, 1, 2, 11],
    // front profile
    [15, 16, 21, 22],
    [17, 18, 19, 20],
    [12, 13, 14, 23],
    // caps
    [5, 6, 18, 17],
    [1, 2, 14, 13],
    [7, 8, 20, 19],
    [0, 11, 23, 12],
    // recesses
    [4, 5, 17, 16],
    [2, 3, 15, 14],
    [3, 4, 16, 15],
    [9, 8, 20, 21],
    [11, 10, 22, 23],
    [10, 9, 21, 22],
    // flat sides
    [7, 6, 18, 19],
    [0, 1, 13, 12],
];

/// Build the polygon mesh of a beam of the given cross-section.
///
/// # Errors
///
/// Returns [`BeamError::InvalidDimension`] when `width` or `length` is not
/// strictly positive.
///
/// # Examples
/// ```
/// use beamgen::{build_mesh, CrossSectionKind};
///
/// let mesh = build_mesh(0.3, 2.0, CrossSectionKind::Square).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn build_mesh(
    width: f64,
    length: f64,
    cross_section: CrossSectionKind,
) -> Result<Mesh, BeamError> {
    let width = check_dimension("width", width)?;
    let length = check_dimension("length", length)?;
    let half_width = width / 2.0;
    let half_length = length / 2.0;

    let mesh = match cross_section {
        CrossSectionKind::Square => square_mesh(half_width, half_length),
        CrossSectionKind::Circle => circle_mesh(half_width, half_length, CIRCLE_SIDES),
        CrossSectionKind::IBeam => {
            i_beam_mesh(half_width, half_length, flange_thickness(width))
        }
    };
    debug!(
        "built {cross_section} mesh ({} vertices, {} faces) for {width} x {length} m",
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}

/// Build the mesh of `beam` scaled so that its length is [`DISPLAY_LENGTH`].
///
/// The width is scaled by the same factor, so slender beams stay slender on
/// screen while every beam fills the same viewport.
///
/// # Errors
///
/// Propagates [`build_mesh`] errors.
pub fn build_display_mesh(beam: &BeamSpec) -> Result<Mesh, BeamError> {
    let mesh = build_mesh(beam.width(), beam.length(), beam.cross_section())?;
    Ok(mesh.scaled(DISPLAY_LENGTH / beam.length()))
}

/// Copy a list of quad templates into owned faces.
fn faces_from(template: &[[usize; 4]]) -> Vec<Vec<usize>> {
    template.iter().map(|face| face.to_vec()).collect()
}

/// Box with half-side `hw` and half-length `hl`.
fn square_mesh(hw: f64, hl: f64) -> Mesh {
    let profile = [(-hw, -hw), (hw, -hw), (hw, hw), (-hw, hw)];
    Mesh::from_parts(extrude(&profile, hl), faces_from(&SQUARE_FACES))
}

/// I-beam with half-width `hw`, half-length `hl` and flange thickness `d`.
fn i_beam_mesh(hw: f64, hl: f64, d: f64) -> Mesh {
    let web = d / 2.0;
    let profile = [
        (-hw, -hw),
        (hw, -hw),
        (hw, d - hw),
        (web, d - hw),
        (web, hw - d),
        (hw, hw - d),
        (hw, hw),
        (-hw, hw),
        (-hw, hw - d),
        (-web, hw - d),
        (-web, d - hw),
        (-hw, d - hw),
    ];
    Mesh::from_parts(extrude(&profile, hl), faces_from(&I_BEAM_FACES))
}

/// Place `profile` at the back (`-hl`) and then again at the front (`+hl`).
fn extrude(profile: &[(f64, f64)], hl: f64) -> Vec<Point> {
    [-hl, hl]
        .iter()
        .flat_map(|&z| profile.iter().map(move |&(x, y)| point(x, y, z)))
        .collect()
}

/// Approximate a circular prism with `sides` quads around its axis.
///
/// Vertices `0..sides` form the front ring and `sides..2 * sides` the back
/// ring, both swept once counter-clockwise from the +X axis.
fn circle_mesh(radius: f64, hl: f64, sides: usize) -> Mesh {
    let ring: Vec<(f64, f64)> = (0..sides)
        .map(|i| {
            let angle = TAU * i as f64 / sides as f64;
            (angle.cos() * radius, angle.sin() * radius)
        })
        .collect();
    let mut vertices: Vec<Point> = ring.iter().map(|&(x, y)| point(x, y, hl)).collect();
    vertices.extend(ring.iter().map(|&(x, y)| point(x, y, -hl)));

    let mut faces: Vec<Vec<usize>> = (0..sides)
        .map(|i| {
            let next = (i + 1) % sides;
            vec![i, next, sides + next, sides + i]
        })
        .collect();
    faces.push((0..sides).collect());
    faces.push((sides..2 * sides).collect());
    Mesh::from_parts(vertices, faces)
}
