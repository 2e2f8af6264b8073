// Submission contract
// The external entity whose files the report paths describe

use std::path::Path;

/// One participant's set of source files, as seen by the report generator.
///
/// The report pipeline owns the concrete submission type; this crate only
/// needs its root directory. Identifier mapping stays a caller-supplied
/// function because the same submission can appear under different display
/// ids (e.g. anonymized vs. plain names).
pub trait Submission {
    /// Root directory of this submission's files.
    fn root(&self) -> &Path;
}
