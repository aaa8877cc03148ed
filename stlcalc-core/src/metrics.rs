//! Surface area and enclosed volume of a facet mesh.
//!
//! Area per facet comes from Heron's formula on the three edge lengths.
//! Volume uses the divergence theorem: for a closed surface with outward
//! normals, `V = 1/3 ∮ x·n dA`, and on a flat triangle the integrand's mean
//! is its value at the centroid. Each facet therefore contributes
//! `dot(centroid, normal) * area / 3`.
//!
//! The volume total only means something for a closed, consistently
//! oriented mesh. Open or inverted meshes still produce a number.

use crate::geometry::{Facet, Mesh};

/// Heron's formula area of a facet. Never negative.
///
/// Degenerate triangles can push the radicand slightly below zero through
/// rounding; it is clamped so the result is `0.0` rather than `NaN`.
pub fn heron_area(facet: &Facet) -> f64 {
    let [v1, v2, v3] = facet.vertices;
    let s1 = (v2 - v1).norm();
    let s2 = (v3 - v2).norm();
    let s3 = (v1 - v3).norm();
    let s = (s1 + s2 + s3) / 2.0;
    let radicand = s * (s - s1) * (s - s2) * (s - s3);
    radicand.max(0.0).sqrt()
}

/// Signed volume contribution of a facet whose area is already known.
pub fn flux_volume(facet: &Facet, area: f64) -> f64 {
    facet.centroid().coords.dot(&facet.normal) * area / 3.0
}

/// Area and volume contribution of a single facet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FacetMetrics {
    pub area: f64,
    pub volume: f64,
}

/// Area and volume contribution of `facet`.
pub fn facet_metrics(facet: &Facet) -> FacetMetrics {
    let area = heron_area(facet);
    FacetMetrics {
        area,
        volume: flux_volume(facet, area),
    }
}

/// Totals over a whole mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeshMetrics {
    /// Sum of facet areas (mm² by convention).
    pub total_area: f64,
    /// Sum of signed facet volume contributions (mm³ by convention).
    pub total_volume: f64,
    /// Number of facets accumulated.
    pub facet_count: usize,
}

impl MeshMetrics {
    /// Accumulate every facet of `mesh`, in order, starting from zero.
    pub fn accumulate(mesh: &Mesh) -> Self {
        mesh.iter().map(facet_metrics).fold(Self::default(), |mut totals, m| {
            totals.add(m);
            totals
        })
    }

    /// Fold one facet's contribution into the totals.
    pub fn add(&mut self, facet: FacetMetrics) {
        self.total_area += facet.area;
        self.total_volume += facet.volume;
        self.facet_count += 1;
    }
}
