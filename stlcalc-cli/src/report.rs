//! Output formatting for measured STL files
use serde::Serialize;
use std::io::{self, Write};
use stlcalc_core::StlCalculator;

/// Unit suffix for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Units {
    /// Bare numbers.
    #[default]
    #[value(name = "none")]
    Plain,
    /// Append mm² / mm³.
    Mm,
}

/// One file's totals in machine-readable form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub path: String,
    pub facet_count: usize,
    pub total_area: f64,
    pub total_volume: f64,
}

impl From<&StlCalculator> for FileReport {
    fn from(calc: &StlCalculator) -> Self {
        Self {
            path: calc.path().display().to_string(),
            facet_count: calc.facets().len(),
            total_area: calc.total_area(),
            total_volume: calc.total_volume(),
        }
    }
}

/// Write the text summary for one file, followed by a newline.
pub fn write_text<W: Write>(out: &mut W, calc: &StlCalculator, units: Units) -> io::Result<()> {
    match units {
        Units::Plain => writeln!(out, "{calc}"),
        Units::Mm => writeln!(
            out,
            "STL File: {}\nTotal Surface Area: {:.6} mm²\nTotal Volume: {:.6} mm³",
            calc.path().display(),
            calc.total_area(),
            calc.total_volume()
        ),
    }
}

/// Write all reports as one pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, reports: &[FileReport]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stlcalc_core::Mesh;

    fn measured_cube() -> StlCalculator {
        let mut calc = StlCalculator::from_mesh("cube.stl", Mesh::cube(1.0));
        calc.compute();
        calc
    }

    #[test]
    fn test_text_without_units_matches_display() {
        let calc = measured_cube();
        let mut out = Vec::new();
        write_text(&mut out, &calc, Units::Plain).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{calc}\n"));
    }

    #[test]
    fn test_text_with_mm_units() {
        let calc = measured_cube();
        let mut out = Vec::new();
        write_text(&mut out, &calc, Units::Mm).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "STL File: cube.stl\nTotal Surface Area: 6.000000 mm²\nTotal Volume: 1.000000 mm³\n"
        );
    }

    #[test]
    fn test_json_report() {
        let report = FileReport::from(&measured_cube());
        assert_eq!(report.facet_count, 12);

        let mut out = Vec::new();
        write_json(&mut out, &[report]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["path"], "cube.stl");
        assert_eq!(value[0]["facet_count"], 12);
        assert_relative_eq!(value[0]["total_area"].as_f64().unwrap(), 6.0, epsilon = 1e-12);
    }
}
