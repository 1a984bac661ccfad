use glob::{MatchOptions, Pattern};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use walkdir::{DirEntry, WalkDir};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Recursively collects files under `root` whose file name matches
/// `name_pattern` (e.g. `*.approved.*`). Directories matching an ignore
/// pattern are not descended into. Traversal order is sorted by file name,
/// so repeated runs list files identically.
pub fn find_approved_files(
    root: &Path,
    name_pattern: &str,
    ignore_globs: &[String],
) -> Result<Vec<PathBuf>, crate::Error> {
    let name_pattern = Pattern::new(name_pattern)?;
    let ignore_patterns: Vec<Pattern> = ignore_globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                error!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect();

    let mut found = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored(entry, &ignore_patterns));

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                if err.io_error().map(io::Error::kind) == Some(io::ErrorKind::PermissionDenied) {
                    error!(
                        "Access denied reading {}: {}",
                        err.path().map(|p| p.display().to_string()).unwrap_or_default(),
                        err
                    );
                    continue;
                }
                return Err(err.into());
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name_pattern.matches_with(&name, MATCH_OPTIONS) {
            debug!("found approved file {}", entry.path().display());
            found.push(entry.into_path());
        }
    }

    debug!("{} approved files under {}", found.len(), root.display());
    Ok(found)
}

fn is_ignored(entry: &DirEntry, ignore_patterns: &[Pattern]) -> bool {
    // The root itself is always walked.
    entry.depth() > 0
        && ignore_patterns
            .iter()
            .any(|pattern| pattern.matches_path_with(entry.path(), MATCH_OPTIONS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(paths: &[PathBuf], root: &Path) -> Vec<String> {
        paths
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_finds_marker_files_recursively_in_order() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("b_dir/nested")).unwrap();
        fs::create_dir_all(root.join("a_dir")).unwrap();
        fs::write(root.join("b_dir/nested/deep.approved.txt"), "x").unwrap();
        fs::write(root.join("a_dir/z.approved.json"), "x").unwrap();
        fs::write(root.join("a_dir/z.received.json"), "x").unwrap();
        fs::write(root.join("top.approved.md"), "x").unwrap();
        fs::write(root.join("approved.txt"), "x").unwrap();

        let found = find_approved_files(root, "*.approved.*", &[]).unwrap();
        assert_eq!(
            names(&found, root),
            vec![
                "a_dir/z.approved.json",
                "b_dir/nested/deep.approved.txt",
                "top.approved.md",
            ]
        );
    }

    #[test]
    fn test_ignored_directories_are_pruned() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("node_modules/pkg/dep.approved.txt"), "x").unwrap();
        fs::write(root.join("src/mine.approved.txt"), "x").unwrap();

        let found =
            find_approved_files(root, "*.approved.*", &["**/node_modules".to_string()]).unwrap();
        assert_eq!(names(&found, root), vec!["src/mine.approved.txt"]);
    }

    #[test]
    fn test_invalid_name_pattern_is_an_error() {
        let tmp = tempdir().unwrap();
        let result = find_approved_files(tmp.path(), "[", &[]);
        assert!(matches!(result, Err(crate::Error::Pattern(_))));
    }
}
