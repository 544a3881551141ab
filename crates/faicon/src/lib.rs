//! Inline SVG rendering of Font Awesome icons for template engines.
//!
//! An [`IconRenderer`] turns short icon names like `"smile-beam"` or
//! `"far smile-beam"` into markup that can be embedded into HTML unescaped.
//! The first use of an icon emits an invisible `<symbol>` holding its geometry
//! followed by a `<use>` reference to it; later uses of the same icon only emit
//! the reference.
//!
//! ```no_run
//! use faicon::{IconRenderer, RenderOptions};
//!
//! let renderer = IconRenderer::from_root("vendor/fortawesome/font-awesome");
//! let options = RenderOptions::new().with_size(32).with_class("text-muted");
//! let first = renderer.render("far smile-beam", &options)?;
//! let again = renderer.render("far fa-smile-beam", &options)?;
//! assert!(first.as_str().contains("<symbol"));
//! assert!(!again.as_str().contains("<symbol"));
//! # Ok::<_, faicon::diag::IconError>(())
//! ```
//!
//! # Features flags
//! - `minijinja`: Enables registering the renderer as a template function via
//!   [`minijinja::register`].

pub mod assets;
pub mod cache;
pub mod diag;
pub mod markup;
#[cfg(feature = "minijinja")]
pub mod minijinja;
pub mod options;
pub mod spec;
pub mod symbol;

pub use crate::assets::{FsIcons, IconStore};
pub use crate::markup::Markup;
pub use crate::options::RenderOptions;
pub use crate::spec::{IconSpec, Style};

use std::path::{Path, PathBuf};

use crate::cache::{Entry, SymbolCache};
use crate::diag::{IconError, IconResult};

/// Renders icon references, remembering which icons were already defined.
///
/// A renderer is meant to be created once and shared by everything that
/// contributes to the same output, so that every icon is defined at most once.
/// It is `Send + Sync`.
pub struct IconRenderer {
    store: Box<dyn IconStore>,
    cache: SymbolCache,
}

impl IconRenderer {
    /// Creates a renderer serving icons from the given store.
    pub fn new(store: impl IconStore + 'static) -> Self {
        Self { store: Box::new(store), cache: SymbolCache::new() }
    }

    /// Creates a renderer serving icons from a Font Awesome distribution at
    /// `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self::new(FsIcons::new(root))
    }

    /// The store icons are loaded from.
    pub fn store(&self) -> &dyn IconStore {
        self.store.as_ref()
    }

    /// The symbols defined so far.
    pub fn cache(&self) -> &SymbolCache {
        &self.cache
    }

    /// Renders a reference to the icon named by `spec`.
    ///
    /// If this is the first time the icon is rendered, its symbol definition
    /// is emitted in front of the reference.
    #[tracing::instrument(skip(self, options))]
    pub fn render(&self, spec: &str, options: &RenderOptions) -> IconResult<Markup> {
        let icon = IconSpec::parse(spec)?;
        let path = self.locate(spec, &icon)?;
        let entry = self.define(spec, &icon, &path)?;
        let reference = symbol::reference(entry.id(), options);

        Ok(match entry {
            Entry::Cached(_) => reference,
            Entry::Inserted(_, mut definition) => {
                definition.push(&reference);
                definition
            }
        })
    }

    /// Renders only the symbol definition of the icon named by `spec`.
    ///
    /// Returns `None` if the icon was already defined. Either way, the icon is
    /// registered afterwards and [`render`](Self::render) will only emit
    /// references to it.
    #[tracing::instrument(skip(self))]
    pub fn symbol(&self, spec: &str) -> IconResult<Option<Markup>> {
        let icon = IconSpec::parse(spec)?;
        let path = self.locate(spec, &icon)?;
        Ok(match self.define(spec, &icon, &path)? {
            Entry::Cached(_) => None,
            Entry::Inserted(_, definition) => Some(definition),
        })
    }

    /// Resolves the icon's path and ensures that it exists.
    fn locate(&self, spec: &str, icon: &IconSpec) -> IconResult<PathBuf> {
        let path = self.store.resolve(icon);
        if !self.store.exists(&path) {
            return Err(IconError::IconNotFound { icon: spec.into(), path, reason: None });
        }
        Ok(path)
    }

    /// Looks the icon up in the cache, defining it on a miss.
    fn define(
        &self,
        spec: &str,
        icon: &IconSpec,
        path: &Path,
    ) -> IconResult<Entry<Markup>> {
        let entry = self.cache.get_or_try_insert_with(path, || -> IconResult<_> {
            let id = icon.symbol_id();
            let source = self.load(spec, path)?;
            let definition = symbol::define(&id, &source).map_err(|error| {
                IconError::MalformedSvg { path: path.into(), error }
            })?;
            Ok((id, definition))
        })?;

        match &entry {
            Entry::Cached(id) => tracing::debug!(%id, "reusing symbol"),
            Entry::Inserted(id, _) => {
                tracing::debug!(%id, path = %path.display(), "defined symbol")
            }
        }

        Ok(entry)
    }

    /// Reads the icon file as text.
    fn load(&self, spec: &str, path: &Path) -> IconResult<String> {
        let data = self
            .store
            .read(path)
            .map_err(|err| IconError::from_io(err, spec, path))?;
        String::from_utf8(data).map_err(|_| IconError::MalformedSvg {
            path: path.into(),
            error: "file is not valid utf-8".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rustc_hash::FxHashMap;

    use super::*;
    use crate::diag::SpecError;

    /// Serves icons from memory and counts reads.
    #[derive(Default)]
    struct MemoryIcons {
        files: FxHashMap<PathBuf, Vec<u8>>,
        reads: Arc<AtomicUsize>,
    }

    impl MemoryIcons {
        fn with(mut self, path: &str, source: impl Into<Vec<u8>>) -> Self {
            self.files.insert(path.into(), source.into());
            self
        }
    }

    impl IconStore for MemoryIcons {
        fn resolve(&self, spec: &IconSpec) -> PathBuf {
            format!("{}/{}.svg", spec.style.dir(), spec.id).into()
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.contains_key(path)
        }

        fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
            self.reads.fetch_add(1, Ordering::Relaxed);
            self.files.get(path).cloned().ok_or_else(|| io::ErrorKind::NotFound.into())
        }
    }

    const BEAM: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 496 512"><path d="M1 1"/></svg>"#;

    fn renderer() -> IconRenderer {
        IconRenderer::new(
            MemoryIcons::default()
                .with("solid/smile-beam.svg", BEAM)
                .with("regular/smile-beam.svg", BEAM)
                .with("solid/broken.svg", "<svg><path></svg>")
                .with("solid/binary.svg", vec![0xff, 0xfe, 0x00]),
        )
    }

    #[test]
    fn test_second_render_only_references() {
        let renderer = renderer();
        let first = renderer.render("smile-beam", &RenderOptions::default()).unwrap();
        let second = renderer.render("fas fa-smile-beam", &RenderOptions::default()).unwrap();

        assert!(first.as_str().starts_with(r#"<svg class="d-none"><symbol id="fa-solid-smile-beam""#));
        assert!(first.as_str().ends_with(second.as_str()));
        assert_eq!(
            second.as_str(),
            r##"<svg class="fa-svg-icon"><use xlink:href="#fa-solid-smile-beam"></use></svg>"##
        );
        assert_eq!(renderer.cache().len(), 1);
    }

    #[test]
    fn test_store_resolves_paths() {
        let renderer = renderer();
        let spec = IconSpec::parse("far fa-smile-beam").unwrap();
        let path = renderer.store().resolve(&spec);
        assert_eq!(path, Path::new("regular/smile-beam.svg"));
        assert!(renderer.store().exists(&path));

        renderer.render("far smile-beam", &RenderOptions::default()).unwrap();
        assert_eq!(renderer.cache().get(&path).as_deref(), Some("fa-regular-smile-beam"));
    }

    #[test]
    fn test_cache_hit_skips_reading() {
        let store = MemoryIcons::default().with("solid/smile-beam.svg", BEAM);
        let reads = store.reads.clone();
        let renderer = IconRenderer::new(store);
        for size in [16, 32, 64] {
            let options = RenderOptions::new().with_size(size);
            renderer.render("smile-beam", &options).unwrap();
        }
        assert_eq!(reads.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_styles_are_distinct_symbols() {
        let renderer = renderer();
        let solid = renderer.render("smile-beam", &RenderOptions::default()).unwrap();
        let regular = renderer.render("far smile-beam", &RenderOptions::default()).unwrap();
        assert!(solid.as_str().contains(r#"id="fa-solid-smile-beam""#));
        assert!(regular.as_str().contains(r#"id="fa-regular-smile-beam""#));
        assert_eq!(renderer.cache().len(), 2);
    }

    #[test]
    fn test_symbol_then_render() {
        let renderer = renderer();
        let definition = renderer.symbol("far smile-beam").unwrap();
        assert!(definition.is_some_and(|d| d.as_str().contains("<symbol")));
        assert_eq!(renderer.symbol("far smile-beam").unwrap(), None);

        let reference = renderer.render("far smile-beam", &RenderOptions::default()).unwrap();
        assert!(!reference.as_str().contains("<symbol"));
    }

    #[test]
    fn test_errors() {
        let renderer = renderer();
        let options = RenderOptions::default();

        assert_eq!(
            renderer.render("xx missing", &options),
            Err(IconError::InvalidSpec(SpecError::UnknownPrefix("xx".into())))
        );
        assert!(matches!(
            renderer.render("fab smile-beam", &options),
            Err(IconError::IconNotFound { reason: None, .. })
        ));
        assert!(matches!(
            renderer.render("broken", &options),
            Err(IconError::MalformedSvg { .. })
        ));
        assert!(matches!(
            renderer.render("binary", &options),
            Err(IconError::MalformedSvg { .. })
        ));
        assert!(renderer.cache().is_empty());
    }

    #[test]
    fn test_renderer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IconRenderer>();
    }
}
