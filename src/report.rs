//! Plain-text fact sheets for generated beams.

use std::fmt::Write;

use crate::beam::BeamRecord;
use crate::selection::BeamQuantity;

/// Format `value` with two significant figures.
///
/// Small and large magnitudes switch to exponent notation and trailing zeros
/// are dropped, so `1413.0` becomes `1.4e+03` and `0.18` stays `0.18`.
///
/// # Examples
/// ```
/// use beamgen::significant;
///
/// assert_eq!(significant(0.0222), "0.022");
/// assert_eq!(significant(1_125_000.0), "1.1e+06");
/// assert_eq!(significant(3.0), "3");
/// ```
#[must_use]
pub fn significant(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    // Rounding to two figures first gives the exponent after carry, e.g. 9.96 -> 1.0e1.
    let scientific = format!("{value:.1e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if !(-4..2).contains(&exponent) {
        let mantissa = trim_zeros(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }
    let decimals = usize::try_from(1 - exponent).unwrap_or(0);
    trim_zeros(&format!("{value:.decimals$}")).to_owned()
}

/// Drop trailing zeros after a decimal point, and the point itself if bare.
fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Render the fact sheet shown next to a beam: its description followed by
/// every computed property.
#[must_use]
pub fn render_fact_sheet(record: &BeamRecord) -> String {
    let mut output = String::new();
    let spec = &record.spec;

    writeln!(&mut output, "Index: {}", record.index).expect("writing to string cannot fail");
    writeln!(&mut output, "Width: {}", significant(spec.width()))
        .expect("writing to string cannot fail");
    writeln!(&mut output, "Length: {}", significant(spec.length()))
        .expect("writing to string cannot fail");
    writeln!(&mut output, "Material: {}", spec.material())
        .expect("writing to string cannot fail");
    writeln!(&mut output, "Cross section: {}", spec.cross_section())
        .expect("writing to string cannot fail");

    for quantity in &BeamQuantity::ALL[3..] {
        writeln!(
            &mut output,
            "{}: {}",
            capitalise(quantity.label()),
            significant(quantity.value(record))
        )
        .expect("writing to string cannot fail");
    }

    output
}

/// Render a two-column, tab separated scatter series with a header row.
#[must_use]
pub fn render_series(x: BeamQuantity, y: BeamQuantity, series: &[(f64, f64)]) -> String {
    let mut output = String::new();
    writeln!(&mut output, "{x}\t{y}").expect("writing to string cannot fail");
    for (a, b) in series {
        writeln!(&mut output, "{a:e}\t{b:e}").expect("writing to string cannot fail");
    }
    output
}

/// Upper-case the first letter of `label`.
fn capitalise(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
