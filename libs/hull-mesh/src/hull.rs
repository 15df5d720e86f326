//! # Convex Hull Construction
//!
//! Computes the 3D convex hull of a point cloud and rebuilds it as a
//! closed triangle mesh.
//!
//! The hull computation itself is delegated to the `chull` crate
//! (QuickHull); this module only converts between point representations
//! and maps library failures into [`MeshError`].

use std::collections::HashMap;

use chull::ConvexHull;
use config::constants::{HULL_PLANE_TOLERANCE, MIN_HULL_POINTS};
use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Computes the convex hull of a set of 3D points.
///
/// # Arguments
///
/// * `points` - Deduplicated points (at least 4, not all coplanar)
///
/// # Returns
///
/// A closed triangle mesh whose vertex set is a subset of `points`.
///
/// # Errors
///
/// * [`MeshError::InsufficientGeometry`] when fewer than 4 points are given
/// * [`MeshError::HullComputationFailed`] when the library rejects the
///   point set (coplanar input, round-off failure)
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use hull_mesh::hull::convex_hull;
///
/// let points = vec![
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(0.0, 0.0, 1.0),
/// ];
/// let mesh = convex_hull(&points).unwrap();
/// assert_eq!(mesh.triangle_count(), 4);
/// ```
pub fn convex_hull(points: &[DVec3]) -> Result<Mesh, MeshError> {
    if points.len() < MIN_HULL_POINTS {
        return Err(MeshError::InsufficientGeometry {
            count: points.len(),
        });
    }

    let coords: Vec<Vec<f64>> = points.iter().map(|p| vec![p.x, p.y, p.z]).collect();
    let hull = ConvexHull::try_new(&coords, HULL_PLANE_TOLERANCE, None)
        .map_err(|e| MeshError::hull_failed(format!("{e:?}")))?;

    // The library copies input coordinates verbatim but emits its facets in
    // hash-map iteration order, which varies from run to run. Map every hull
    // vertex back to its index in `points` and impose a canonical facet
    // order so a fixed point set always yields an identical mesh.
    let cloud: HashMap<[u64; 3], usize> = points
        .iter()
        .enumerate()
        .map(|(i, p)| ([p.x.to_bits(), p.y.to_bits(), p.z.to_bits()], i))
        .collect();

    let (vertices, indices) = hull.vertices_indices();
    let mut facets: Vec<[usize; 3]> = Vec::with_capacity(indices.len() / 3);
    for facet in indices.chunks_exact(3) {
        let mut corners = [0usize; 3];
        for (corner, &index) in corners.iter_mut().zip(facet) {
            let v = &vertices[index];
            *corner = *cloud
                .get(&[v[0].to_bits(), v[1].to_bits(), v[2].to_bits()])
                .ok_or_else(|| MeshError::hull_failed("hull vertex missing from input"))?;
        }
        // Rotation keeps the winding; starting at the smallest corner index
        // makes the triple unique per facet.
        if let Some(start) = corners.iter().enumerate().min_by_key(|&(_, &c)| c).map(|(i, _)| i) {
            corners.rotate_left(start);
        }
        facets.push(corners);
    }
    facets.sort_unstable();

    // Rebuild the mesh, numbering vertices in first-use order over the
    // sorted facets so only facet-referenced vertices are kept.
    let mut mesh = Mesh::with_capacity(vertices.len(), facets.len());
    let mut remap: HashMap<usize, u32> = HashMap::with_capacity(vertices.len());
    for corners in &facets {
        let mut triangle = [0u32; 3];
        for (slot, &corner) in triangle.iter_mut().zip(corners) {
            *slot = *remap
                .entry(corner)
                .or_insert_with(|| mesh.add_vertex(points[corner]));
        }
        mesh.add_triangle(triangle[0], triangle[1], triangle[2]);
    }

    Ok(mesh)
}
