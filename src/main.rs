use std::error::Error;

use beamgen::{
    filter_beams, render_fact_sheet, render_series, scatter_series, BeamFilter, BeamGenerator,
    BeamQuantity, CrossSectionKind, DEFAULT_BEAM_COUNT,
};
use clap::Parser;
use log::info;

/// Generate random cantilever beams and compare their properties.
#[derive(Debug, Parser)]
#[command(name = "beamgen", version, about)]
struct Args {
    /// Number of beams to generate.
    #[arg(short, long, default_value_t = DEFAULT_BEAM_COUNT)]
    count: usize,
    /// Seed for reproducible beams; drawn from the OS when omitted.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Only show beams of this material (repeatable).
    #[arg(short, long = "material")]
    materials: Vec<String>,
    /// Only show beams with this cross-section (repeatable).
    #[arg(short = 'x', long = "cross-section")]
    cross_sections: Vec<CrossSectionKind>,
    /// Print a scatter series of two quantities, e.g. `mass,max-force`.
    #[arg(short, long, value_parser = parse_axes)]
    plot: Option<(BeamQuantity, BeamQuantity)>,
    /// Print the selected beams as JSON.
    #[arg(long, conflicts_with = "plot")]
    json: bool,
}

fn parse_axes(value: &str) -> Result<(BeamQuantity, BeamQuantity), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected two comma separated quantities, got {value:?}"))?;
    let x = x.parse().map_err(|e: beamgen::BeamError| e.to_string())?;
    let y = y.parse().map_err(|e: beamgen::BeamError| e.to_string())?;
    Ok((x, y))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut generator = match args.seed {
        Some(seed) => BeamGenerator::seeded(seed),
        None => BeamGenerator::from_entropy(),
    };
    let records = generator.generate(args.count)?;

    // Reject typos up front instead of silently showing nothing.
    for name in &args.materials {
        beamgen::material(name)?;
    }
    let mut filter = BeamFilter::default();
    if !args.materials.is_empty() {
        filter.materials = args.materials.clone();
    }
    if !args.cross_sections.is_empty() {
        filter.cross_sections = args.cross_sections.clone();
    }
    let selected = filter_beams(&records, &filter);
    info!("{} of {} beams selected", selected.len(), records.len());

    if let Some((x, y)) = args.plot {
        let series = scatter_series(selected.iter().copied(), x, y);
        print!("{}", render_series(x, y, &series));
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
    } else {
        for record in selected {
            println!("{}", render_fact_sheet(record));
        }
    }

    Ok(())
}
