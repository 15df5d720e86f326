//! # Batch Pipeline
//!
//! Per-file hull generation and directory-level batch orchestration.
//!
//! Skip-and-continue semantics are modeled with values rather than caught
//! errors: each file produces a [`FileOutcome`] (written, or skipped with a
//! [`SkipReason`]), and the batch collects them into a [`BatchReport`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use config::constants::{DEFAULT_HULL_SUFFIX, DEFAULT_INPUT_DIR, STL_EXTENSION};
use hull_mesh::{cloud, hull, stl, MeshError, StlFormat};
use log::{error, info, warn};

use crate::scan::scan_mesh_files;

/// Settings for one batch run.
///
/// Defaults mirror the no-argument CLI invocation: scan
/// [`DEFAULT_INPUT_DIR`], write next to the inputs with the default suffix,
/// in binary STL.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory scanned for input STL files.
    pub input_dir: PathBuf,
    /// Output directory; `None` means the input directory.
    pub output_dir: Option<PathBuf>,
    /// Appended to each input stem when deriving the output name.
    pub suffix: String,
    /// On-disk format of the written hull meshes.
    pub format: StlFormat,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: None,
            suffix: DEFAULT_HULL_SUFFIX.to_string(),
            format: StlFormat::default(),
        }
    }
}

/// Why a file was skipped. All three conditions are non-fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Input path missing on disk
    FileNotFound,
    /// Fewer than 4 unique vertices after deduplication
    InsufficientGeometry { unique_points: usize },
    /// The hull library rejected the point set
    HullComputationFailed { reason: String },
}

/// Result of processing a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// A hull mesh was written to `output`.
    Written { output: PathBuf, triangles: usize },
    /// The file was skipped; nothing was written.
    Skipped(SkipReason),
}

/// Per-file outcomes of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<(PathBuf, FileOutcome)>,
}

impl BatchReport {
    /// Records the outcome for one input file.
    pub fn record(&mut self, input: PathBuf, outcome: FileOutcome) {
        self.outcomes.push((input, outcome));
    }

    /// All outcomes, in processing order.
    pub fn outcomes(&self) -> &[(PathBuf, FileOutcome)] {
        &self.outcomes
    }

    /// Number of hull files written.
    pub fn written_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, FileOutcome::Written { .. }))
            .count()
    }

    /// Number of skipped inputs.
    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.written_count()
    }

    /// True when no files were processed at all.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Derives the output path for an input file: `<stem><suffix>.stl` inside
/// `output_dir`.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use hull_batch::output_path_for;
///
/// let out = output_path_for(Path::new("in/part_007.stl"), Path::new("out"), "_convex");
/// assert_eq!(out, Path::new("out/part_007_convex.stl"));
/// ```
pub fn output_path_for(input: &Path, output_dir: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{stem}{suffix}.{STL_EXTENSION}"))
}

/// Best-effort check that two paths name the same file. Compares file names
/// and canonicalized parent directories, so spellings like `./cube.stl` and
/// `cube.stl` are caught; paths whose parents cannot be resolved fall back
/// to lexical equality.
fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    if a.file_name() != b.file_name() {
        return false;
    }
    let canonical_parent = |p: &Path| {
        let parent = p.parent().filter(|d| !d.as_os_str().is_empty());
        fs::canonicalize(parent.unwrap_or(Path::new(".")))
    };
    match (canonical_parent(a), canonical_parent(b)) {
        (Ok(da), Ok(db)) => da == db,
        _ => false,
    }
}

/// Transforms a single mesh file into its convex hull.
///
/// The side effect is either a new mesh file at `output` or a logged skip.
/// The three per-file skip conditions (missing input, insufficient geometry,
/// degenerate hull input) come back as [`FileOutcome::Skipped`]; everything
/// else (unreadable content, write failures) propagates as an error.
///
/// Parent directories of `output` are created before writing. The output
/// path must differ from the input path.
pub fn generate_hull(
    input: &Path,
    output: &Path,
    format: StlFormat,
) -> Result<FileOutcome, MeshError> {
    if is_same_file(input, output) {
        return Err(MeshError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "output path equals input path",
        )));
    }

    let mesh = match stl::load_stl(input) {
        Ok(mesh) => mesh,
        Err(MeshError::FileNotFound { .. }) => {
            warn!("File not found, skip: {}", input.display());
            return Ok(FileOutcome::Skipped(SkipReason::FileNotFound));
        }
        Err(e) => return Err(e),
    };
    info!(
        "Loaded {} with {} triangles",
        input.display(),
        mesh.triangle_count()
    );

    let points = cloud::unique_vertices(&mesh);
    let hull_mesh = match hull::convex_hull(&points) {
        Ok(mesh) => mesh,
        Err(MeshError::InsufficientGeometry { count }) => {
            warn!(
                "Not enough unique vertices for a 3D convex hull ({count}): {}",
                input.display()
            );
            return Ok(FileOutcome::Skipped(SkipReason::InsufficientGeometry {
                unique_points: count,
            }));
        }
        Err(MeshError::HullComputationFailed { reason }) => {
            error!(
                "Failed to compute convex hull for {}: {reason}",
                input.display()
            );
            return Ok(FileOutcome::Skipped(SkipReason::HullComputationFailed {
                reason,
            }));
        }
        Err(e) => return Err(e),
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    stl::save_stl(&hull_mesh, output, format)?;
    info!("Convex hull saved to {}", output.display());

    Ok(FileOutcome::Written {
        output: output.to_path_buf(),
        triangles: hull_mesh.triangle_count(),
    })
}

/// Generates convex hulls for every STL file in a directory.
///
/// Files are processed sequentially in sorted order; per-file skips are
/// logged and recorded but never halt the batch. Directory-level failures
/// (missing input directory, uncreatable output directory) propagate.
pub fn batch_generate(options: &BatchOptions) -> Result<BatchReport, MeshError> {
    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| options.input_dir.clone());
    fs::create_dir_all(&output_dir)?;

    let files = scan_mesh_files(&options.input_dir, STL_EXTENSION)?;
    if files.is_empty() {
        warn!("No STL files found in {}", options.input_dir.display());
        return Ok(BatchReport::default());
    }
    info!(
        "Found {} STL files in {}",
        files.len(),
        options.input_dir.display()
    );

    let mut report = BatchReport::default();
    for input in files {
        let output = output_path_for(&input, &output_dir, &options.suffix);
        let outcome = generate_hull(&input, &output, options.format)?;
        report.record(input, outcome);
    }

    Ok(report)
}
