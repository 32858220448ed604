#![warn(clippy::pedantic)]

use std::collections::HashSet;

use beamgen::{
    build_display_mesh, build_mesh, compute_beam_properties, compute_section_geometry,
    filter_beams, material, scatter_series, BeamError, BeamFilter, BeamGenerator, BeamQuantity,
    BeamRecord, BeamSpec, CrossSectionKind, CIRCLE_SIDES,
};

#[derive(Debug, Clone, Copy)]
struct HandCalculation {
    area: f64,
    second_moment_of_area: f64,
    volume: f64,
    mass: f64,
    max_force: f64,
    max_deflection: f64,
}

/// Steel square beam, 0.3 m wide and 2 m long, worked by hand.
fn steel_square_by_hand() -> HandCalculation {
    let width: f64 = 0.3;
    let length: f64 = 2.0;
    let area = width * width;
    let second_moment_of_area = width.powi(4) / 12.0;
    let max_force = 500.0e6 * second_moment_of_area / (length * width / 2.0);
    HandCalculation {
        area,
        second_moment_of_area,
        volume: area * length,
        mass: 7_850.0 * area * length,
        max_force,
        max_deflection: max_force * length.powi(3) / (3.0 * 200.0e9 * second_moment_of_area),
    }
}

#[test]
fn steel_cantilever_matches_closed_form_solution() {
    let expected = steel_square_by_hand();
    let steel = material("steel").expect("steel is registered");
    let beam = BeamSpec::new(0.3, 2.0, *steel, CrossSectionKind::Square).expect("valid beam");

    let geometry = compute_section_geometry(beam.width(), beam.cross_section())
        .expect("square geometry computed");
    assert!((geometry.area - expected.area).abs() < 1.0e-12);
    assert!((geometry.second_moment_of_area - expected.second_moment_of_area).abs() < 1.0e-15);

    let properties = compute_beam_properties(&beam, &geometry);
    assert!((properties.volume - expected.volume).abs() < 1.0e-12);
    assert!((properties.mass - expected.mass).abs() < 1.0e-9);
    assert!((properties.max_force - expected.max_force).abs() < 1.0e-6);
    assert!((properties.max_deflection - expected.max_deflection).abs() < 1.0e-12);
    assert!((properties.max_force - 1_125_000.0).abs() < 1.0e-6);
    assert!((properties.max_deflection - 0.0222).abs() < 1.0e-4);
}

#[test]
fn every_family_meshes_into_a_valid_polyhedron() {
    let expected = [
        (CrossSectionKind::Square, 8, 6),
        (CrossSectionKind::IBeam, 24, 18),
        (CrossSectionKind::Circle, 2 * CIRCLE_SIDES, CIRCLE_SIDES + 2),
    ];
    for (kind, vertices, faces) in expected {
        let mesh = build_mesh(0.35, 3.0, kind).expect("valid dimensions");
        assert_eq!(mesh.vertex_count(), vertices, "{kind}");
        assert_eq!(mesh.face_count(), faces, "{kind}");
        mesh.validate().expect("mesh invariants hold");
        for face in &mesh.faces {
            let distinct: HashSet<_> = face.iter().collect();
            assert_eq!(distinct.len(), face.len(), "{kind} face repeats a vertex");
        }
    }
}

#[test]
fn degenerate_dimensions_are_rejected_everywhere() {
    let steel = material("steel").expect("steel is registered");
    assert!(matches!(
        BeamSpec::new(0.3, 0.0, *steel, CrossSectionKind::IBeam),
        Err(BeamError::InvalidDimension { name: "length", .. })
    ));
    assert!(matches!(
        compute_section_geometry(-0.3, CrossSectionKind::Circle),
        Err(BeamError::InvalidDimension { name: "width", .. })
    ));
    assert!(matches!(
        build_mesh(0.3, 0.0, CrossSectionKind::Square),
        Err(BeamError::InvalidDimension { name: "length", .. })
    ));
    assert!(matches!(
        "triangle".parse::<CrossSectionKind>(),
        Err(BeamError::UnsupportedCrossSection(_))
    ));
}

#[test]
fn generated_beams_can_be_filtered_plotted_and_drawn() {
    let records = BeamGenerator::seeded(2024)
        .generate(60)
        .expect("generation succeeds");

    let filter = BeamFilter {
        materials: vec!["aluminium".to_owned(), "iron".to_owned()],
        cross_sections: vec![CrossSectionKind::IBeam, CrossSectionKind::Circle],
    };
    let selected = filter_beams(&records, &filter);
    assert!(!selected.is_empty());
    for record in &selected {
        assert_ne!(record.spec.material().name, "steel");
        assert_ne!(record.spec.cross_section(), CrossSectionKind::Square);
        assert_eq!(
            **record,
            BeamRecord::new(record.index, record.spec).expect("valid record")
        );
        let mesh = build_display_mesh(&record.spec).expect("valid dimensions");
        mesh.validate().expect("mesh invariants hold");
    }

    let series = scatter_series(
        selected.iter().copied(),
        BeamQuantity::Mass,
        BeamQuantity::Cost,
    );
    assert_eq!(series.len(), selected.len());
    assert!(series.iter().all(|&(mass, cost)| mass > 0.0 && cost > 0.0));
}
