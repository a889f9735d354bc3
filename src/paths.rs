//! Local path adjustments: blank removal and collision-safe naming.

use std::path::{Component, Path, PathBuf};

/// Remove spaces from every normal component of `path`. Prefix and
/// separator components pass through unchanged.
pub fn strip_blank(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => out.push(part.to_string_lossy().replace(' ', "")),
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Pick a filename under `dir` that does not collide with an existing
/// file: `<stem>.<extension>`, then `<stem>(1).<extension>`,
/// `<stem>(2).<extension>`, … The check runs against the filesystem at
/// call time, so with N existing files sharing the stem the result
/// carries the ordinal `(N)`.
pub fn resolve_collision(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    let candidate = dir.join(format!("{stem}.{extension}"));
    if !candidate.exists() {
        return candidate;
    }
    let mut ordinal: u32 = 1;
    loop {
        let candidate = dir.join(format!("{stem}({ordinal}).{extension}"));
        if !candidate.exists() {
            return candidate;
        }
        ordinal += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_strip_blank_every_segment() {
        let stripped = strip_blank(Path::new("download/A B/My Doc"));
        assert_eq!(stripped, PathBuf::from("download/AB/MyDoc"));
    }

    #[test]
    fn test_strip_blank_keeps_relative_prefix() {
        let stripped = strip_blank(Path::new("./down load/x"));
        assert_eq!(stripped, PathBuf::from("./download/x"));
    }

    #[test]
    fn test_strip_blank_no_spaces_is_identity() {
        let stripped = strip_blank(Path::new("download/plain"));
        assert_eq!(stripped, PathBuf::from("download/plain"));
    }

    #[test]
    fn test_resolve_no_collision() {
        let dir = tempfile::tempdir().unwrap();
        let path = resolve_collision(dir.path(), "doc", "md");
        assert_eq!(path, dir.path().join("doc.md"));
    }

    #[test]
    fn test_resolve_skips_existing_ordinals() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("doc.md"), b"one").unwrap();
        fs::write(dir.path().join("doc(1).md"), b"two").unwrap();

        let path = resolve_collision(dir.path(), "doc", "md");
        assert_eq!(path, dir.path().join("doc(2).md"));
        assert!(!path.exists());
    }

    #[test]
    fn test_resolve_distinct_extension_is_no_collision() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("doc.pdf"), b"one").unwrap();

        let path = resolve_collision(dir.path(), "doc", "md");
        assert_eq!(path, dir.path().join("doc.md"));
    }
}
