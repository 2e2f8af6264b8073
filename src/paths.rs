// Report path computation
// Submission-relative display paths and zip entry joining

use std::path::{Component, Path, PathBuf};

use crate::error::PathError;
use crate::submission::Submission;

// Zip entries are slash-delimited regardless of host platform
const ZIP_PATH_SEPARATOR: char = '/';
const WINDOWS_PATH_SEPARATOR: char = '\\';

/// Returns `file`'s path relative to the submission root, prefixed with the
/// submission's display id.
///
/// The root itself maps to `id/id`, duplicating the identifier as folder and
/// leaf name. Callers are expected to pass files under the submission root;
/// a file outside it produces a path with `..` segments rather than an error.
pub fn get_relative_submission_path<S: Submission>(
    file: &Path,
    submission: &S,
    submission_to_id: impl Fn(&S) -> String,
) -> Result<String, PathError> {
    let id = submission_to_id(submission);
    if file == submission.root() {
        return Ok(Path::new(&id).join(&id).to_string_lossy().into_owned());
    }
    let relative = relativize(submission.root(), file)?;
    Ok(Path::new(&id).join(relative).to_string_lossy().into_owned())
}

/// Joins logical zip paths with a single slash, stripping any separators
/// already present at the boundary.
pub fn join_zip_path_segments(left: &str, right: &str) -> String {
    let right = right.trim_start_matches([ZIP_PATH_SEPARATOR, WINDOWS_PATH_SEPARATOR]);
    let left = left.trim_end_matches([ZIP_PATH_SEPARATOR, WINDOWS_PATH_SEPARATOR]);
    format!("{left}{ZIP_PATH_SEPARATOR}{right}")
}

/// Lexical relative path from `base` to `target`.
///
/// Fails only when exactly one of the two paths is absolute; unshared base
/// components become `..` segments.
fn relativize(base: &Path, target: &Path) -> Result<PathBuf, PathError> {
    if base.is_absolute() != target.is_absolute() {
        return Err(PathError::Unrelatable {
            base: base.to_path_buf(),
            target: target.to_path_buf(),
        });
    }

    let base = normalize_path(base);
    let target = normalize_path(target);

    let mut base_iter = base.components().peekable();
    let mut target_iter = target.components().peekable();

    while base_iter.peek() == target_iter.peek() && base_iter.peek().is_some() {
        base_iter.next();
        target_iter.next();
    }

    let mut result = PathBuf::new();
    for _ in base_iter {
        result.push("..");
    }
    for component in target_iter {
        result.push(component);
    }

    Ok(result)
}

/// Normalize a path by resolving . and .. components
fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                components.pop();
            }
            Component::CurDir => {}
            c => components.push(c),
        }
    }

    components.iter().collect()
}
