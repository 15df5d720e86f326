//! # Hull Mesh
//!
//! Triangle mesh representation, STL I/O, and convex hull construction
//! for the batch hull pipeline.
//!
//! ## Architecture
//!
//! ```text
//! STL file → Mesh → vertex cloud (deduplicated) → convex hull → Mesh → STL file
//! ```
//!
//! The hull computation itself is delegated to the `chull` crate; this crate
//! only prepares the point cloud and rebuilds a triangle mesh from the
//! resulting facets.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hull_mesh::{cloud, hull, stl};
//!
//! let mesh = stl::load_stl("part.stl")?;
//! let points = cloud::unique_vertices(&mesh);
//! let hull = hull::convex_hull(&points)?;
//! stl::save_stl(&hull, "part_convex.stl", stl::StlFormat::Binary)?;
//! ```

pub mod cloud;
pub mod error;
pub mod hull;
pub mod mesh;
pub mod stl;

pub use error::MeshError;
pub use mesh::Mesh;
pub use stl::StlFormat;
