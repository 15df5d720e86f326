//! # STL I/O
//!
//! Loading and saving triangle-soup STL files, binary and ASCII.
//!
//! ## Format Detection
//!
//! Binary STL is an 80-byte header, a little-endian `u32` facet count, and
//! one 50-byte record per facet (normal, three vertices, attribute word).
//! ASCII STL starts with `solid` and spells facets out as
//! `facet`/`outer loop`/`vertex` blocks. Some binary files also begin with
//! the word `solid`, so detection additionally checks the header for NUL
//! bytes before committing to the ASCII parser.
//!
//! Loading produces a triangle soup: one vertex entry per triangle corner,
//! no shared topology. Stored normals are ignored on load and recomputed
//! from the winding on save.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Length of the binary STL header.
const BINARY_HEADER_LEN: usize = 80;

/// Length of one binary facet record: normal + 3 vertices + attribute word.
const FACET_RECORD_LEN: usize = 50;

/// On-disk representation used when saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StlFormat {
    /// Compact binary layout (the default, matching common slicers)
    #[default]
    Binary,
    /// Human-readable `solid`/`facet` text
    Ascii,
}

/// Loads a triangle mesh from an STL file, auto-detecting the format.
///
/// # Errors
///
/// * [`MeshError::FileNotFound`] when `path` does not exist
/// * [`MeshError::InvalidStl`] when the content cannot be parsed
/// * [`MeshError::Io`] for other filesystem failures
pub fn load_stl(path: impl AsRef<Path>) -> Result<Mesh, MeshError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MeshError::not_found(path)
        } else {
            MeshError::Io(e)
        }
    })?;

    if looks_like_ascii(&bytes) {
        parse_ascii(&String::from_utf8_lossy(&bytes))
    } else {
        parse_binary(&bytes)
    }
}

/// Saves a mesh to an STL file in the requested format.
///
/// Facet normals are recomputed from each triangle's winding; degenerate
/// triangles get a zero normal.
pub fn save_stl(mesh: &Mesh, path: impl AsRef<Path>, format: StlFormat) -> Result<(), MeshError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    match format {
        StlFormat::Binary => write_binary(mesh, &mut writer)?,
        StlFormat::Ascii => write_ascii(mesh, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Returns true when the content should go through the ASCII parser.
fn looks_like_ascii(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(BINARY_HEADER_LEN)];
    let text = String::from_utf8_lossy(head);
    text.trim_start().starts_with("solid") && !head.contains(&0)
}

fn parse_binary(bytes: &[u8]) -> Result<Mesh, MeshError> {
    if bytes.len() < BINARY_HEADER_LEN + 4 {
        return Err(MeshError::invalid_stl("file too small for a binary STL"));
    }

    let facet_count = u32::from_le_bytes([
        bytes[BINARY_HEADER_LEN],
        bytes[BINARY_HEADER_LEN + 1],
        bytes[BINARY_HEADER_LEN + 2],
        bytes[BINARY_HEADER_LEN + 3],
    ]) as usize;

    let records = &bytes[BINARY_HEADER_LEN + 4..];
    if records.len() < facet_count * FACET_RECORD_LEN {
        return Err(MeshError::invalid_stl(format!(
            "binary STL declares {facet_count} facets but holds {}",
            records.len() / FACET_RECORD_LEN
        )));
    }

    let mut mesh = Mesh::with_capacity(facet_count * 3, facet_count);
    for record in records.chunks_exact(FACET_RECORD_LEN).take(facet_count) {
        // Skip the 12-byte normal; corners start at offset 12.
        let base = mesh.add_vertex(read_point(&record[12..24]));
        mesh.add_vertex(read_point(&record[24..36]));
        mesh.add_vertex(read_point(&record[36..48]));
        mesh.add_triangle(base, base + 1, base + 2);
    }

    Ok(mesh)
}

/// Reads one point from 12 bytes (3 little-endian f32 values), widening
/// to f64.
fn read_point(bytes: &[u8]) -> DVec3 {
    let x = f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let y = f32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    let z = f32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
    DVec3::new(f64::from(x), f64::from(y), f64::from(z))
}

fn parse_ascii(text: &str) -> Result<Mesh, MeshError> {
    let mut mesh = Mesh::new();
    let mut corners: Vec<DVec3> = Vec::with_capacity(3);

    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        match keyword {
            "facet" => corners.clear(),
            "vertex" => {
                let mut coords = [0.0f64; 3];
                for coord in &mut coords {
                    let token = tokens
                        .next()
                        .ok_or_else(|| MeshError::invalid_stl("vertex line with missing coordinate"))?;
                    *coord = token
                        .parse()
                        .map_err(|_| MeshError::invalid_stl(format!("bad coordinate: {token}")))?;
                }
                corners.push(DVec3::from_array(coords));
            }
            "endfacet" => {
                if corners.len() != 3 {
                    return Err(MeshError::invalid_stl(format!(
                        "facet with {} vertices",
                        corners.len()
                    )));
                }
                let base = mesh.add_vertex(corners[0]);
                mesh.add_vertex(corners[1]);
                mesh.add_vertex(corners[2]);
                mesh.add_triangle(base, base + 1, base + 2);
                corners.clear();
            }
            "endsolid" => break,
            _ => {} // solid name, outer loop, endloop, unknown lines
        }
    }

    Ok(mesh)
}

/// Outward normal of a triangle, or zero when the triangle is degenerate.
fn facet_normal(corners: &[DVec3; 3]) -> DVec3 {
    (corners[1] - corners[0])
        .cross(corners[2] - corners[0])
        .normalize_or_zero()
}

fn write_binary<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<(), MeshError> {
    let mut header = [b' '; BINARY_HEADER_LEN];
    let tag = b"binary STL written by hull-mesh";
    header[..tag.len()].copy_from_slice(tag);
    writer.write_all(&header)?;
    writer.write_all(&(mesh.triangle_count() as u32).to_le_bytes())?;

    for index in 0..mesh.triangle_count() {
        let corners = mesh.triangle_vertices(index);
        let normal = facet_normal(&corners);
        write_point_binary(writer, normal)?;
        for corner in corners {
            write_point_binary(writer, corner)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Writes a point as 3 little-endian f32 values (STL stores f32).
fn write_point_binary<W: Write>(writer: &mut W, point: DVec3) -> Result<(), MeshError> {
    for coord in point.to_array() {
        writer.write_all(&(coord as f32).to_le_bytes())?;
    }
    Ok(())
}

fn write_ascii<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<(), MeshError> {
    writeln!(writer, "solid hull")?;
    for index in 0..mesh.triangle_count() {
        let corners = mesh.triangle_vertices(index);
        let n = facet_normal(&corners);
        writeln!(writer, "  facet normal {} {} {}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for c in corners {
            writeln!(writer, "      vertex {} {} {}", c.x, c.y, c.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid hull")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn single_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_binary_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri.stl");

        let original = single_triangle();
        save_stl(&original, &path, StlFormat::Binary).unwrap();
        let loaded = load_stl(&path).unwrap();

        assert_eq!(loaded.triangle_count(), 1);
        assert_eq!(loaded.vertex_count(), 3);
        assert_eq!(loaded.vertex(1), DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ascii_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri_ascii.stl");

        save_stl(&single_triangle(), &path, StlFormat::Ascii).unwrap();
        let loaded = load_stl(&path).unwrap();

        assert_eq!(loaded.triangle_count(), 1);
        let v2 = loaded.vertex(2);
        assert_relative_eq!(v2.y, 1.0);
    }

    #[test]
    fn test_load_missing_file() {
        match load_stl("no_such_mesh.stl") {
            Err(MeshError::FileNotFound { path }) => {
                assert!(path.to_string_lossy().contains("no_such_mesh"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_ascii_text() {
        let text = "solid test\n  facet normal 0 0 1\n    outer loop\n      vertex 0 0 0\n      vertex 1 0 0\n      vertex 0 1 0\n    endloop\n  endfacet\nendsolid test\n";
        let mesh = parse_ascii(text).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::ZERO);
    }

    #[test]
    fn test_parse_ascii_incomplete_facet() {
        let text = "solid bad\n  facet normal 0 0 1\n    outer loop\n      vertex 0 0 0\n    endloop\n  endfacet\nendsolid bad\n";
        assert!(matches!(
            parse_ascii(text),
            Err(MeshError::InvalidStl { .. })
        ));
    }

    #[test]
    fn test_binary_starting_with_solid_is_detected() {
        // A binary header that happens to start with "solid" but contains
        // NUL padding must not be routed to the ASCII parser.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sneaky.stl");

        let mut bytes = Vec::new();
        let mut header = [0u8; BINARY_HEADER_LEN];
        header[..5].copy_from_slice(b"solid");
        bytes.extend_from_slice(&header);
        bytes.extend_from_slice(&1u32.to_le_bytes());
        let mut record = Vec::new();
        for coord in [
            0.0f32, 0.0, 1.0, // normal
            0.0, 0.0, 0.0, // v0
            1.0, 0.0, 0.0, // v1
            0.0, 1.0, 0.0, // v2
        ] {
            record.extend_from_slice(&coord.to_le_bytes());
        }
        record.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&record);
        fs::write(&path, &bytes).unwrap();

        let mesh = load_stl(&path).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_truncated_binary_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated.stl");

        let mut bytes = vec![0u8; BINARY_HEADER_LEN];
        bytes.extend_from_slice(&5u32.to_le_bytes()); // declares 5 facets, holds none
        fs::write(&path, &bytes).unwrap();

        assert!(matches!(
            load_stl(&path),
            Err(MeshError::InvalidStl { .. })
        ));
    }
}
