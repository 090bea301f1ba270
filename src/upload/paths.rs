//! Local path enumeration and object key derivation.
//!
//! Keys always use `/` as separator, whatever the host OS uses for paths.

use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::constants::KEY_SEPARATOR;

/// Make `path` absolute without touching the filesystem.
///
/// Relative paths are joined onto the current directory; symlinks and `..`
/// are left as they are. If the current directory cannot be determined the
/// path is returned unchanged.
pub fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    match env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(e) => {
            debug!("Cannot resolve current directory for {}: {}", path.display(), e);
            path.to_path_buf()
        }
    }
}

/// List every regular file below `root`.
///
/// A `root` that is not a directory yields itself. Directories are descended
/// without a depth limit, following symlinks and without loop detection.
/// Directories that cannot be listed contribute nothing; use
/// [`find_files_with`] to observe those failures.
pub fn find_files(root: &Path) -> Vec<PathBuf> {
    find_files_with(root, |dir, err| {
        debug!("Skipping unreadable directory {}: {}", dir.display(), err);
    })
}

/// Same as [`find_files`], but reports each swallowed listing error.
pub fn find_files_with<F>(root: &Path, mut on_error: F) -> Vec<PathBuf>
where
    F: FnMut(&Path, &io::Error),
{
    let root = absolute_path(root);
    let mut files = Vec::new();

    if root.is_dir() {
        collect_files(&root, &mut on_error, &mut files);
    } else {
        files.push(root);
    }

    files
}

fn collect_files<F>(dir: &Path, on_error: &mut F, files: &mut Vec<PathBuf>)
where
    F: FnMut(&Path, &io::Error),
{
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            on_error(dir, &e);
            return;
        }
    };

    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                on_error(dir, &e);
                continue;
            }
        };

        if path.is_dir() {
            collect_files(&path, on_error, files);
        } else if path.is_file() {
            files.push(path);
        } else {
            debug!("Skipping {}: not a regular file", path.display());
        }
    }
}

/// Derive the object key for `file` found under `root`.
///
/// The suffix is the part of `file` below `root`, rendered with a leading `/`.
/// With a `key` the result is `key`, a `/` if the suffix lacks one, then the
/// suffix; separators are never collapsed, so `"prefix/"` gives
/// `"prefix//a/b.txt"`. Without a key the suffix loses its first `/`.
///
/// A `file` outside `root` keeps its whole path as suffix.
///
/// ```
/// use s3_upload::upload::paths::derive_key;
/// use std::path::Path;
///
/// let file = Path::new("/data/a/b.txt");
/// assert_eq!(derive_key(file, Path::new("/data"), None), "a/b.txt");
/// assert_eq!(derive_key(file, Path::new("/data"), Some("prefix")), "prefix/a/b.txt");
/// ```
pub fn derive_key(file: &Path, root: &Path, key: Option<&str>) -> String {
    let root = absolute_path(root);
    let file = absolute_path(file);

    let suffix = match file.strip_prefix(&root) {
        Ok(relative) => render_components(relative),
        Err(_) => render_components(&file),
    };

    match key {
        Some(key) => {
            let mut result = String::with_capacity(key.len() + suffix.len() + 1);
            result.push_str(key);
            if !suffix.starts_with(KEY_SEPARATOR) {
                result.push(KEY_SEPARATOR);
            }
            result.push_str(&suffix);
            result
        }
        None => suffix
            .strip_prefix(KEY_SEPARATOR)
            .unwrap_or(&suffix)
            .to_string(),
    }
}

/// Key for a single-file upload: `key` if given, else the file name.
pub fn key_if_null(path: &Path, key: Option<&str>) -> String {
    match key {
        Some(key) => key.to_string(),
        None => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// `/a/b.txt` for `a/b.txt`, `/`-separated on every platform.
fn render_components(path: &Path) -> String {
    let mut rendered = String::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => rendered.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::RootDir => {}
            other => {
                rendered.push(KEY_SEPARATOR);
                rendered.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_file_structure;
    use std::fs::File;
    use tempfile::TempDir;

    fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.sort();
        paths
    }

    #[test]
    fn test_find_files_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.csv");
        File::create(&file_path).unwrap();

        assert_eq!(find_files(&file_path), vec![file_path]);
    }

    #[test]
    fn test_find_files_recurses_into_subdirectories() {
        let temp_dir = create_test_file_structure().unwrap();
        let base = temp_dir.path();

        let files = sorted(find_files(base));
        let expected = sorted(vec![
            base.join("file1.txt"),
            base.join("file2.log"),
            base.join("dir1/file3.txt"),
            base.join("dir1/subdir1/file4.txt"),
            base.join("dir2/file5.log"),
        ]);

        assert_eq!(files, expected);
        assert!(files.iter().all(|path| path.is_file()));
    }

    #[test]
    fn test_find_files_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("empty/nested")).unwrap();

        assert!(find_files(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_find_files_missing_root_yields_itself() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");

        assert_eq!(find_files(&missing), vec![missing]);
    }

    #[test]
    fn test_collect_files_reports_unlistable_directory() {
        let temp_dir = TempDir::new().unwrap();
        let gone = temp_dir.path().join("gone");

        let mut failures = Vec::new();
        let mut files = Vec::new();
        collect_files(
            &gone,
            &mut |dir: &Path, err: &io::Error| failures.push((dir.to_path_buf(), err.kind())),
            &mut files,
        );

        assert_eq!(failures, vec![(gone, io::ErrorKind::NotFound)]);
        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_files_keeps_going_after_failure() {
        let temp_dir = create_test_file_structure().unwrap();
        let base = temp_dir.path();

        let mut failures = Vec::new();
        let mut files = Vec::new();
        let mut on_error = |dir: &Path, _: &io::Error| failures.push(dir.to_path_buf());
        collect_files(&base.join("gone"), &mut on_error, &mut files);
        collect_files(&base.join("dir1"), &mut on_error, &mut files);

        assert_eq!(failures, vec![base.join("gone")]);
        assert_eq!(
            sorted(files),
            vec![base.join("dir1/file3.txt"), base.join("dir1/subdir1/file4.txt")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_find_files_with_reports_unreadable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.txt"), b"hidden").unwrap();
        fs::write(temp_dir.path().join("visible.txt"), b"visible").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // privileged users can still list it
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut failures = Vec::new();
        let files = find_files_with(temp_dir.path(), |dir, _| failures.push(dir.to_path_buf()));

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(files, vec![temp_dir.path().join("visible.txt")]);
        assert_eq!(failures, vec![locked]);
    }

    #[test]
    fn test_derive_key_without_key() {
        let key = derive_key(Path::new("/data/a/b.txt"), Path::new("/data"), None);
        assert_eq!(key, "a/b.txt");
    }

    #[test]
    fn test_derive_key_with_prefix() {
        let key = derive_key(Path::new("/data/a/b.txt"), Path::new("/data"), Some("prefix"));
        assert_eq!(key, "prefix/a/b.txt");
    }

    #[test]
    fn test_derive_key_prefix_with_trailing_separator_is_not_collapsed() {
        let key = derive_key(Path::new("/data/a/b.txt"), Path::new("/data"), Some("prefix/"));
        assert_eq!(key, "prefix//a/b.txt");
    }

    #[test]
    fn test_derive_key_empty_key_is_still_a_key() {
        let key = derive_key(Path::new("/data/a/b.txt"), Path::new("/data"), Some(""));
        assert_eq!(key, "/a/b.txt");
    }

    #[test]
    fn test_derive_key_root_with_trailing_separator() {
        let key = derive_key(Path::new("/data/a.txt"), Path::new("/data/"), None);
        assert_eq!(key, "a.txt");
    }

    #[test]
    fn test_derive_key_root_name_repeated_deeper() {
        let key = derive_key(Path::new("/data/x/data/y.txt"), Path::new("/data"), None);
        assert_eq!(key, "x/data/y.txt");
    }

    #[cfg(unix)]
    #[test]
    fn test_derive_key_file_outside_root() {
        let key = derive_key(Path::new("/elsewhere/a.txt"), Path::new("/data"), None);
        assert_eq!(key, "elsewhere/a.txt");

        let key = derive_key(Path::new("/elsewhere/a.txt"), Path::new("/data"), Some("p"));
        assert_eq!(key, "p/elsewhere/a.txt");
    }

    #[test]
    fn test_derive_key_file_equal_to_root() {
        assert_eq!(derive_key(Path::new("/data"), Path::new("/data"), None), "");
        assert_eq!(derive_key(Path::new("/data"), Path::new("/data"), Some("k")), "k/");
    }

    #[test]
    fn test_derive_key_relative_root() {
        let cwd = env::current_dir().unwrap();
        let file = cwd.join("a").join("b.txt");

        assert_eq!(derive_key(&file, Path::new("."), None), "a/b.txt");
        assert_eq!(derive_key(&file, Path::new("a"), Some("docs")), "docs/b.txt");
    }

    #[test]
    fn test_derive_key_from_found_files() {
        let temp_dir = create_test_file_structure().unwrap();
        let base = temp_dir.path();

        let mut keys: Vec<String> = find_files(base)
            .iter()
            .map(|file| derive_key(file, base, Some("build")))
            .collect();
        keys.sort();

        assert_eq!(
            keys,
            vec![
                "build/dir1/file3.txt",
                "build/dir1/subdir1/file4.txt",
                "build/dir2/file5.log",
                "build/file1.txt",
                "build/file2.log",
            ]
        );
    }

    #[test]
    fn test_key_if_null() {
        let path = Path::new("/tmp/x/report.csv");
        assert_eq!(key_if_null(path, None), "report.csv");
        assert_eq!(key_if_null(path, Some("custom")), "custom");
        assert_eq!(key_if_null(path, Some("")), "");
    }

    #[test]
    fn test_key_if_null_without_file_name() {
        assert_eq!(key_if_null(Path::new("/"), None), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_path() {
        assert_eq!(absolute_path(Path::new("/already/absolute")), PathBuf::from("/already/absolute"));

        let cwd = env::current_dir().unwrap();
        assert_eq!(absolute_path(Path::new("relative/file.txt")), cwd.join("relative/file.txt"));
    }
}
