mod banded_relief;

pub use banded_relief::{ease, BandedRelief, ReliefProfile};

use crate::math::{lift, Point2, Point3, Vector3, TOLERANCE};

/// A triangle mesh approximation of a surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals, one per vertex once [`TriangleMesh::compute_normals`] ran.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a counter-clockwise triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the mesh holds no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends a closed ring of 2D points on the plane `z` and returns the
    /// indices of the new vertices, in ring order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn push_ring(&mut self, ring: &[Point2], z: f64) -> Vec<u32> {
        let start = self.vertices.len() as u32;
        self.vertices.extend(ring.iter().map(|p| lift(p, z)));
        (start..start + ring.len() as u32).collect()
    }

    /// Connects two rings of equal length with a band of quads, two
    /// triangles per edge.
    ///
    /// With `flip == false` a counter-clockwise `lower` ring and an inset
    /// `upper` ring above it produce outward-and-up facing triangles.
    pub fn stitch_rings(&mut self, lower: &[u32], upper: &[u32], flip: bool) {
        let n = lower.len().min(upper.len());
        for i in 0..n {
            let j = (i + 1) % n;
            let (p1, p2, q1, q2) = (lower[i], lower[j], upper[i], upper[j]);
            if flip {
                self.indices.push([p1, q2, p2]);
                self.indices.push([p1, q1, q2]);
            } else {
                self.indices.push([p1, p2, q2]);
                self.indices.push([p1, q2, q1]);
            }
        }
    }

    /// Closes a convex ring with a triangle fan. Faces +Z for a
    /// counter-clockwise ring unless `flip` is set.
    pub fn fan(&mut self, ring: &[u32], flip: bool) {
        for i in 1..ring.len().saturating_sub(1) {
            if flip {
                self.indices.push([ring[0], ring[i + 1], ring[i]]);
            } else {
                self.indices.push([ring[0], ring[i], ring[i + 1]]);
            }
        }
    }

    /// Recomputes area-weighted vertex normals.
    ///
    /// Vertices touched only by zero-area triangles get `+Z`.
    pub fn compute_normals(&mut self) {
        let mut acc = vec![Vector3::zeros(); self.vertices.len()];
        for tri in &self.indices {
            let [a, b, c] = tri.map(|i| i as usize);
            let origin = self.vertices[a];
            let n = (self.vertices[b] - origin).cross(&(self.vertices[c] - origin));
            acc[a] += n;
            acc[b] += n;
            acc[c] += n;
        }
        self.normals = acc
            .into_iter()
            .map(|n| n.try_normalize(TOLERANCE).unwrap_or_else(Vector3::z))
            .collect();
    }

    /// Returns `true` if every vertex coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.vertices
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite())
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point3, Point3)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), p| {
            (lo.inf(p), hi.sup(p))
        }))
    }

    /// Returns a copy moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        Self {
            vertices: self.vertices.iter().map(|p| p + offset).collect(),
            normals: self.normals.clone(),
            indices: self.indices.clone(),
        }
    }

    /// Signed volume enclosed by the mesh (divergence theorem). Only
    /// meaningful for closed meshes.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.indices
            .iter()
            .map(|tri| {
                let [a, b, c] = tri.map(|i| self.vertices[i as usize].coords);
                a.dot(&b.cross(&c)) / 6.0
            })
            .sum()
    }
}
