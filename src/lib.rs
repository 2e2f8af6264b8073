// Report Paths Library
// Path and file name utilities for plagiarism report generation

// Submission contract - the external entity paths are computed against
pub mod submission;

// Paths - submission-relative display paths and zip entry joining
pub mod paths;

// Sanitization - character-class cleanup for report and archive names
pub mod sanitize;

// Error types
pub mod error;

// Re-export commonly used items for convenience
pub use error::PathError;
pub use paths::{get_relative_submission_path, join_zip_path_segments};
pub use sanitize::{
    escape_special_characters, generate_safe_file_name, handle_special_characters,
    sanitize_file_path,
};
pub use submission::Submission;
