//! Centralized configuration values shared across the hull pipeline.
//!
//! Each public item in this module documents its purpose and provides a
//! minimal usage example so that downstream crates can remain declarative
//! and avoid scattering literals.

/// Suffix appended to an input file's stem when deriving the output file
/// name, so hull meshes never overwrite the originals.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_HULL_SUFFIX;
/// assert_eq!(format!("part{DEFAULT_HULL_SUFFIX}.stl"), "part.stl.convex.stl");
/// ```
pub const DEFAULT_HULL_SUFFIX: &str = ".stl.convex";

/// File extension (without dot) matched by the directory scanner and used
/// for output files. Matching is case-insensitive.
///
/// # Examples
/// ```
/// use config::constants::STL_EXTENSION;
/// assert!("CUBE.STL".to_lowercase().ends_with(STL_EXTENSION));
/// ```
pub const STL_EXTENSION: &str = "stl";

/// Directory scanned when the batch binary runs with no arguments.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_INPUT_DIR;
/// assert!(!DEFAULT_INPUT_DIR.is_empty());
/// ```
pub const DEFAULT_INPUT_DIR: &str = "assets/meshes";

/// Minimum number of unique points required for a non-degenerate 3D
/// convex hull.
///
/// # Examples
/// ```
/// use config::constants::MIN_HULL_POINTS;
/// assert_eq!(MIN_HULL_POINTS, 4);
/// ```
pub const MIN_HULL_POINTS: usize = 4;

/// Plane-distance tolerance handed to the convex hull library. Points
/// closer than this to a facet plane are treated as lying on it.
///
/// # Examples
/// ```
/// use config::constants::HULL_PLANE_TOLERANCE;
/// assert!(HULL_PLANE_TOLERANCE > 0.0);
/// assert!(HULL_PLANE_TOLERANCE < 1.0e-3);
/// ```
pub const HULL_PLANE_TOLERANCE: f64 = 1.0e-6;
