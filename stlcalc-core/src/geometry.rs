//! Facet and mesh primitives for surface measurement.

use nalgebra::{Point3, Vector3};

/// A triangular surface element: the declared normal plus three vertices.
///
/// The normal is kept exactly as read; it is not recomputed or normalised.
/// Vertex winding is expected to agree with the normal for the volume sign
/// to come out right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub normal: Vector3<f64>,
    pub vertices: [Point3<f64>; 3],
}

impl Facet {
    /// Facet from a normal and three vertices in winding order.
    pub fn new(normal: Vector3<f64>, v1: Point3<f64>, v2: Point3<f64>, v3: Point3<f64>) -> Self {
        Self {
            normal,
            vertices: [v1, v2, v3],
        }
    }

    /// Build a facet from four coordinate triples in file order:
    /// normal, vertex 1, vertex 2, vertex 3.
    pub fn from_triples(triples: [[f64; 3]; 4]) -> Self {
        let [n, a, b, c] = triples;
        Self::new(
            Vector3::from(n),
            Point3::from(a),
            Point3::from(b),
            Point3::from(c),
        )
    }

    /// The facet as `[normal, v1, v2, v3]`.
    pub fn as_triples(&self) -> [[f64; 3]; 4] {
        let [a, b, c] = self.vertices;
        [
            self.normal.into(),
            a.coords.into(),
            b.coords.into(),
            c.coords.into(),
        ]
    }

    /// Mean of the three vertices.
    pub fn centroid(&self) -> Point3<f64> {
        let [a, b, c] = self.vertices;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// Same triangle seen from the other side: winding reversed, normal negated.
    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(-self.normal, a, c, b)
    }
}

/// An ordered sequence of independent facets.
///
/// No connectivity is stored; vertices shared between neighbours are
/// duplicated, as in the STL format itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub facets: Vec<Facet>,
}

impl Mesh {
    /// Empty mesh.
    pub fn new() -> Self {
        Self { facets: Vec::new() }
    }

    /// Empty mesh with room for `capacity` facets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            facets: Vec::with_capacity(capacity),
        }
    }

    /// Append a facet after the existing ones.
    pub fn add_facet(&mut self, facet: Facet) {
        self.facets.push(facet);
    }

    /// Number of facets.
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// True if the mesh has no facets.
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Facets in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Facet> {
        self.facets.iter()
    }

    /// Every facet reversed, turning an outward-oriented solid inside out.
    pub fn reversed(&self) -> Self {
        Self {
            facets: self.facets.iter().map(Facet::reversed).collect(),
        }
    }

    /// Closed cube of edge `size` centred on the origin, 12 facets with
    /// outward normals and matching counter-clockwise winding.
    pub fn cube(size: f64) -> Self {
        let h = size / 2.0;
        let mut mesh = Self::with_capacity(12);

        let mut face = |normal: [f64; 3], corners: [[f64; 3]; 4]| {
            let n = Vector3::from(normal);
            let [a, b, c, d] = corners.map(Point3::from);
            mesh.add_facet(Facet::new(n, a, b, c));
            mesh.add_facet(Facet::new(n, a, c, d));
        };

        // Front
        face([0.0, 0.0, 1.0], [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]]);
        // Back
        face([0.0, 0.0, -1.0], [[-h, -h, -h], [-h, h, -h], [h, h, -h], [h, -h, -h]]);
        // Top
        face([0.0, 1.0, 0.0], [[-h, h, -h], [-h, h, h], [h, h, h], [h, h, -h]]);
        // Bottom
        face([0.0, -1.0, 0.0], [[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]]);
        // Right
        face([1.0, 0.0, 0.0], [[h, -h, -h], [h, h, -h], [h, h, h], [h, -h, h]]);
        // Left
        face([-1.0, 0.0, 0.0], [[-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h]]);

        mesh
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Facet;
    type IntoIter = std::slice::Iter<'a, Facet>;

    fn into_iter(self) -> Self::IntoIter {
        self.facets.iter()
    }
}
