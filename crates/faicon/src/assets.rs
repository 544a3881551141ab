//! Locating and reading icon files.

use std::io;
use std::path::{Path, PathBuf};

use crate::spec::IconSpec;

/// A read-only source of icon SVG files, keyed by style and icon id.
///
/// The renderer never touches the file system directly. Everything goes
/// through this trait, so hosts can serve icons from wherever they live.
pub trait IconStore: Send + Sync {
    /// Returns the path at which the given icon is expected.
    ///
    /// This must be deterministic: the renderer caches definitions by path.
    fn resolve(&self, spec: &IconSpec) -> PathBuf;

    /// Whether a readable icon file exists at the path.
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    /// Reads the raw contents of the icon file at the path.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Serves icons from a Font Awesome distribution on disk.
///
/// The directory should be structured as follows:
/// - `svgs/` at the top level
/// - one directory per style below it (`solid`, `regular`, `brands`)
/// - one `<id>.svg` file per icon in each style directory
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FsIcons(PathBuf);

impl FsIcons {
    /// Where Font Awesome is installed relative to a project, when pulled in
    /// as a vendored dependency.
    pub const VENDOR_DIR: &'static str = "vendor/fortawesome/font-awesome";

    /// Creates a new handle that serves icons from the given asset root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(root.into())
    }

    /// Creates a handle serving the vendored Font Awesome distribution of the
    /// project at `project`.
    pub fn vendored(project: impl AsRef<Path>) -> Self {
        Self::new(project.as_ref().join(Self::VENDOR_DIR))
    }

    /// Returns the asset root from which this serves icons.
    pub fn root(&self) -> &Path {
        &self.0
    }
}

impl IconStore for FsIcons {
    fn resolve(&self, spec: &IconSpec) -> PathBuf {
        let mut path = self.0.join("svgs");
        path.push(spec.style.dir());
        path.push(format!("{}.svg", spec.id));
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Style;

    #[test]
    fn test_resolve() {
        let icons = FsIcons::new("/opt/fa");
        let path = icons.resolve(&IconSpec::new(Style::Regular, "smile-beam"));
        assert_eq!(path, Path::new("/opt/fa/svgs/regular/smile-beam.svg"));
    }

    #[test]
    fn test_resolve_same_path_for_prefixed_id() {
        let icons = FsIcons::new("assets");
        let plain = icons.resolve(&"smile-beam".parse().unwrap());
        let prefixed = icons.resolve(&"fas fa-smile-beam".parse().unwrap());
        assert_eq!(plain, prefixed);
        assert_eq!(plain, Path::new("assets/svgs/solid/smile-beam.svg"));
    }

    #[test]
    fn test_vendored_root() {
        let icons = FsIcons::vendored("/srv/app");
        assert_eq!(icons.root(), Path::new("/srv/app/vendor/fortawesome/font-awesome"));
    }

    #[test]
    fn test_missing_file_does_not_exist() {
        let icons = FsIcons::new("/definitely/not/here");
        let path = icons.resolve(&IconSpec::new(Style::Solid, "file"));
        assert!(!icons.exists(&path));
    }
}
