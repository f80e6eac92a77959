//! Loads line-item images from an asset directory.
//!
//! References are resolved relative to the base directory and must stay
//! inside it: absolute paths and `..` escapes are rejected.

use quire_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonicalized base path for containment checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        // May fail if the directory doesn't exist yet
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Returns `None` if the reference would escape the base directory.
    fn resolve_path_safe(&self, reference: &str) -> Option<PathBuf> {
        let relative = reference.strip_prefix("file://").unwrap_or(reference);
        if Path::new(relative).is_absolute() {
            return None;
        }
        if Path::new(relative)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        let full_path = self.base_path.join(relative);

        // Symlinks can still point outside the base.
        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            return canonical.starts_with(base).then_some(canonical);
        }

        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self
            .resolve_path_safe(path)
            .ok_or_else(|| ResourceError::NotFound(format!("{} (outside asset directory)", path)))?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_path_safe(path)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    /// Plain paths and `file://` references.
    fn handles(&self, path: &str) -> bool {
        path.starts_with("file://") || !crate::has_scheme(path)
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loads_file_relative_to_base() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("widget.png"), b"PNG").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert_eq!(&*provider.load("widget.png").unwrap(), b"PNG");
        assert_eq!(&*provider.load("file://widget.png").unwrap(), b"PNG");
        assert!(provider.exists("widget.png"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(matches!(provider.load("nope.png"), Err(ResourceError::NotFound(_))));
        assert!(!provider.exists("nope.png"));
    }

    #[test]
    fn test_blocks_escapes() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(provider.load("../../../etc/passwd").is_err());
        assert!(provider.load("/etc/passwd").is_err());
        assert!(!provider.exists(".."));
        assert!(!provider.exists("thumbs/../../secret.png"));
    }

    #[test]
    fn test_allows_nested_paths() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("thumbs")).unwrap();
        fs::write(dir.path().join("thumbs").join("a.jpg"), b"JPEG").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert_eq!(&*provider.load("thumbs/a.jpg").unwrap(), b"JPEG");
    }

    #[test]
    fn test_handles_only_paths() {
        let provider = FilesystemResourceProvider::new(".");
        assert!(provider.handles("thumbs/a.jpg"));
        assert!(provider.handles("file://thumbs/a.jpg"));
        assert!(!provider.handles("https://example.com/a.jpg"));
        assert!(!provider.handles("data:image/png;base64,AAAA"));
    }
}
