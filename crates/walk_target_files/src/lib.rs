// crates/walk_target_files/src/lib.rs

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks the directory tree rooted at `root` and returns every file whose
/// extension is in `extensions`, pruning any subtree whose directory name is
/// in `skip_dirs`. The skip check is an exact name match, not a path match,
/// so a directory named e.g. "node_modules" is skipped wherever it appears
/// in the tree. The root itself is exempt from the skip list: only child
/// directories are checked against it.
///
/// Symbolic links are not followed and are not yielded as files.
/// Entries that cannot be read during traversal are skipped.
///
/// # Errors
///
/// Returns an error if `root` is not a readable directory.
pub fn walk_target_files(
    root: &Path,
    extensions: &[&str],
    skip_dirs: &[&str],
) -> Result<Vec<PathBuf>> {
    // Traversal errors below the root are skipped, so probe the root itself
    // up front: an existing but unreadable directory must fail the walk, not
    // return an empty listing.
    fs::read_dir(root)
        .with_context(|| format!("not a readable directory: {}", root.display()))?;
    let files = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| {
            // Prune skipped subtrees at the directory level so their
            // contents are never visited. The root entry (depth 0) is
            // always kept, whatever it happens to be named.
            if e.depth() > 0 && e.file_type().is_dir() {
                let name = e.file_name().to_string_lossy();
                !skip_dirs.iter().any(|skip| name == *skip)
            } else {
                true
            }
        })
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|s| s.to_str())
                .map(|ext| extensions.contains(&ext))
                .unwrap_or(false)
        })
        .collect();
    Ok(files)
}
