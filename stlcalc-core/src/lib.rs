//! stlcalc core library - surface area and volume of ASCII STL meshes
//!
//! Parses the facets of an ASCII STL file and accumulates the total surface
//! area (Heron's formula per facet) and enclosed volume (divergence theorem
//! flux per facet) of the mesh.
//!
//! ```
//! use stlcalc_core::{parse_ascii_stl, MeshMetrics};
//!
//! let mesh = parse_ascii_stl(
//!     "solid t
//!        facet normal 0 0 1
//!          outer loop
//!            vertex 0 0 0
//!            vertex 1 0 0
//!            vertex 0 1 0
//!          endloop
//!        endfacet
//!      endsolid t",
//! );
//! let totals = MeshMetrics::accumulate(&mesh);
//! assert_eq!(totals.facet_count, 1);
//! assert!((totals.total_area - 0.5).abs() < 1e-12);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod calculator;
pub mod error;
pub mod geometry;
pub mod metrics;
pub mod stl;

// Re-export commonly used types
pub use calculator::{CalculatorOptions, StlCalculator};
pub use error::{StlError, StlResult};
pub use geometry::{Facet, Mesh};
pub use metrics::{facet_metrics, FacetMetrics, MeshMetrics};
pub use stl::{load_stl, parse_ascii_stl, parse_ascii_stl_with_stats, read_ascii_stl, ParseStats};
