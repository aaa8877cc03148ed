//! Per-file area and volume calculation.

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::StlResult;
use crate::geometry::{Facet, Mesh};
use crate::metrics::MeshMetrics;
use crate::stl::load_stl;

/// Options for [`StlCalculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorOptions {
    /// Run the area/volume pass right after parsing.
    pub compute_on_init: bool,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            compute_on_init: true,
        }
    }
}

impl CalculatorOptions {
    /// Set whether totals are computed on construction.
    #[must_use]
    pub const fn with_compute_on_init(mut self, compute_on_init: bool) -> Self {
        self.compute_on_init = compute_on_init;
        self
    }
}

/// Surface area and volume of one ASCII STL file.
///
/// The file is parsed when the calculator is built. The metrics pass runs
/// then as well, unless deferred through [`CalculatorOptions`], in which
/// case the totals read as zero until [`StlCalculator::compute`] is called.
///
/// ```no_run
/// use stlcalc_core::StlCalculator;
///
/// let calc = StlCalculator::new("model.stl")?;
/// println!("{calc}");
/// # Ok::<(), stlcalc_core::StlError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StlCalculator {
    path: PathBuf,
    mesh: Mesh,
    metrics: Option<MeshMetrics>,
}

impl StlCalculator {
    /// Parse `path` and compute its totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn new<P: AsRef<Path>>(path: P) -> StlResult<Self> {
        Self::with_options(path, CalculatorOptions::default())
    }

    /// Parse `path`, computing totals only if `options` asks for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn with_options<P: AsRef<Path>>(path: P, options: CalculatorOptions) -> StlResult<Self> {
        let path = path.as_ref();
        let mesh = load_stl(path)?;
        let mut calc = Self::from_mesh(path, mesh);
        if options.compute_on_init {
            calc.compute();
        }
        Ok(calc)
    }

    /// Wrap an already parsed mesh. Totals are not computed yet.
    pub fn from_mesh(path: impl Into<PathBuf>, mesh: Mesh) -> Self {
        Self {
            path: path.into(),
            mesh,
            metrics: None,
        }
    }

    /// Run the metrics pass over the parsed facets.
    ///
    /// Always starts from zero, so calling this again gives the same totals.
    pub fn compute(&mut self) -> MeshMetrics {
        let metrics = MeshMetrics::accumulate(&self.mesh);
        info!(
            path = %self.path.display(),
            facets = metrics.facet_count,
            area = metrics.total_area,
            volume = metrics.total_volume,
            "measured STL"
        );
        self.metrics = Some(metrics);
        metrics
    }

    /// Path the mesh was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Parsed facets in file order.
    pub fn facets(&self) -> &[Facet] {
        &self.mesh.facets
    }

    /// Whether the metrics pass has run.
    pub fn is_computed(&self) -> bool {
        self.metrics.is_some()
    }

    /// Totals, if [`compute`](Self::compute) has run.
    pub fn metrics(&self) -> Option<MeshMetrics> {
        self.metrics
    }

    /// Total surface area, `0.0` before computing.
    pub fn total_area(&self) -> f64 {
        self.metrics.map_or(0.0, |m| m.total_area)
    }

    /// Total enclosed volume, `0.0` before computing.
    pub fn total_volume(&self) -> f64 {
        self.metrics.map_or(0.0, |m| m.total_volume)
    }
}

impl fmt::Display for StlCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "STL File: {}\nTotal Surface Area: {:.6}\nTotal Volume: {:.6}",
            self.path.display(),
            self.total_area(),
            self.total_volume()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_format() {
        let mut calc = StlCalculator::from_mesh("parts/cube.stl", Mesh::cube(1.0));
        calc.compute();
        assert_eq!(
            calc.to_string(),
            "STL File: parts/cube.stl\nTotal Surface Area: 6.000000\nTotal Volume: 1.000000"
        );
    }

    #[test]
    fn test_totals_zero_until_computed() {
        let mut calc = StlCalculator::from_mesh("cube.stl", Mesh::cube(2.0));
        assert!(!calc.is_computed());
        assert_eq!(calc.total_area(), 0.0);
        assert_eq!(calc.total_volume(), 0.0);
        assert_eq!(calc.facets().len(), 12);

        let metrics = calc.compute();
        assert!(calc.is_computed());
        assert_eq!(calc.metrics(), Some(metrics));
        assert_relative_eq!(calc.total_volume(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_compute_twice_does_not_double_count() {
        let mut calc = StlCalculator::from_mesh("cube.stl", Mesh::cube(1.0));
        let first = calc.compute();
        let second = calc.compute();
        assert_eq!(first, second);
        assert_relative_eq!(calc.total_area(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_options_builder() {
        assert!(CalculatorOptions::default().compute_on_init);
        assert!(!CalculatorOptions::default().with_compute_on_init(false).compute_on_init);
    }
}
