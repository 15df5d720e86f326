//! # Hull Batch
//!
//! Batch orchestration for the convex-hull generator: scan a directory for
//! STL files, run the per-file hull transform, and collect the outcomes.
//!
//! ## Pipeline
//!
//! ```text
//! scan (sorted file list) → per file: load → reduce → hull → save
//! ```
//!
//! Files are processed sequentially and independently. The three per-file
//! failure conditions (missing file, too few unique vertices, degenerate
//! hull input) are recorded as skips and logged; they never abort the
//! batch. Only directory-level I/O failures propagate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hull_batch::{batch_generate, BatchOptions};
//!
//! let report = batch_generate(&BatchOptions::default())?;
//! println!("{} written, {} skipped", report.written_count(), report.skipped_count());
//! ```

pub mod pipeline;
pub mod scan;

pub use pipeline::{
    batch_generate, generate_hull, output_path_for, BatchOptions, BatchReport, FileOutcome,
    SkipReason,
};
pub use scan::scan_mesh_files;
