//! # Vertex Cloud Reduction
//!
//! Flattens a mesh's triangle corners into a deduplicated point cloud.
//!
//! Deduplication uses exact floating-point equality on the loaded
//! coordinates (bit-pattern comparison). First-occurrence order is
//! preserved so the reduction is deterministic for a given mesh.

use std::collections::HashSet;

use glam::DVec3;

use crate::mesh::Mesh;

/// Collects the unique triangle-corner positions of a mesh.
///
/// Every returned point is a corner of at least one triangle; vertices not
/// referenced by any triangle are ignored.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use hull_mesh::{cloud, Mesh};
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.add_vertex(DVec3::X);
/// mesh.add_vertex(DVec3::Y);
/// mesh.add_triangle(0, 1, 2);
/// mesh.add_triangle(2, 1, 0); // same corners, reversed winding
///
/// assert_eq!(cloud::unique_vertices(&mesh).len(), 3);
/// ```
pub fn unique_vertices(mesh: &Mesh) -> Vec<DVec3> {
    let mut seen: HashSet<[u64; 3]> = HashSet::with_capacity(mesh.vertex_count());
    let mut unique = Vec::new();

    for triangle in mesh.triangles() {
        for &index in triangle {
            let v = mesh.vertex(index);
            let key = [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()];
            if seen.insert(key) {
                unique.push(v);
            }
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_vertices_deduplicates_soup() {
        // Two triangles sharing an edge, stored as triangle soup
        // (each corner its own vertex entry).
        let mut mesh = Mesh::new();
        let corners = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        for c in corners {
            mesh.add_vertex(c);
        }
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(3, 4, 5);

        let unique = unique_vertices(&mesh);
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_unique_vertices_preserves_first_seen_order() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(2.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_triangle(0, 1, 2);

        let unique = unique_vertices(&mesh);
        assert_eq!(unique[0], DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(unique[2], DVec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_unique_vertices_ignores_unreferenced() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_vertex(DVec3::Z); // never referenced
        mesh.add_triangle(0, 1, 2);

        assert_eq!(unique_vertices(&mesh).len(), 3);
    }

    #[test]
    fn test_unique_vertices_exact_equality() {
        // Nearly-equal points are kept separate; only bit-exact duplicates
        // are merged.
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1e-12, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(0, 1, 2);

        assert_eq!(unique_vertices(&mesh).len(), 3);
    }

    #[test]
    fn test_unique_vertices_empty_mesh() {
        assert!(unique_vertices(&Mesh::new()).is_empty());
    }
}
