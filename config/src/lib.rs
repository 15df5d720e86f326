//! # Config Crate
//!
//! Centralized configuration constants for the convex-hull batch pipeline.
//! All magic numbers and tunable literals are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_HULL_SUFFIX, MIN_HULL_POINTS};
//!
//! // Derive an output file name from an input stem
//! let output_name = format!("cube{DEFAULT_HULL_SUFFIX}.stl");
//! assert_eq!(output_name, "cube.stl.convex.stl");
//!
//! // A 3D convex hull needs at least 4 points
//! assert!(MIN_HULL_POINTS >= 4);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
