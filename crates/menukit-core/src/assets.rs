//! Image reference resolution.
//!
//! The same logical image shows up three ways across payloads: an absolute
//! delivery-style path, a bundled filename, or a bare relative path. The
//! resolver tries an ordered list of strategies and falls back to the
//! placeholder, so the presentation layer never receives a broken locator.

use std::collections::BTreeMap;
use tracing::debug;

/// Locator used when no strategy resolves a reference.
pub const DEFAULT_PLACEHOLDER: &str = "/img/placeholder.png";

/// Which view the image is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageTier {
    /// Detail view: large variants first, then small.
    #[default]
    Detail,
    /// List, grid, and tab views: small variants only.
    Thumbnail,
}

/// Write-once registry of bundled image files.
///
/// Built once at process start through [`AssetRegistryBuilder`] and then
/// shared by reference; lookups are exact, case-sensitive matches.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    large: BTreeMap<String, String>,
    small: BTreeMap<String, String>,
    tree: BTreeMap<String, String>,
    large_dir: String,
    small_dir: String,
    placeholder: String,
}

impl Default for AssetRegistry {
    fn default() -> Self {
        AssetRegistryBuilder::default().build()
    }
}

/// Collects registry entries before the registry is frozen.
#[derive(Debug, Clone)]
pub struct AssetRegistryBuilder {
    registry: AssetRegistry,
}

impl Default for AssetRegistryBuilder {
    fn default() -> Self {
        Self {
            registry: AssetRegistry {
                large: BTreeMap::new(),
                small: BTreeMap::new(),
                tree: BTreeMap::new(),
                large_dir: "menu/lg".to_string(),
                small_dir: "menu/sm".to_string(),
                placeholder: DEFAULT_PLACEHOLDER.to_string(),
            },
        }
    }
}

impl AssetRegistryBuilder {
    /// Sets the placeholder locator; blank values keep the default.
    pub fn placeholder(mut self, locator: impl Into<String>) -> Self {
        let locator = locator.into();
        if !locator.trim().is_empty() {
            self.registry.placeholder = locator;
        }
        self
    }

    /// Sets the large- and small-variant directories, relative to the asset root.
    pub fn variant_dirs(mut self, large_dir: &str, small_dir: &str) -> Self {
        self.registry.large_dir = large_dir.trim_matches('/').to_string();
        self.registry.small_dir = small_dir.trim_matches('/').to_string();
        self
    }

    /// Registers a large-variant file.
    pub fn large(mut self, filename: impl Into<String>, locator: impl Into<String>) -> Self {
        self.registry.large.insert(filename.into(), locator.into());
        self
    }

    /// Registers a small-variant file.
    pub fn small(mut self, filename: impl Into<String>, locator: impl Into<String>) -> Self {
        self.registry.small.insert(filename.into(), locator.into());
        self
    }

    /// Registers a file by its path relative to the asset root.
    ///
    /// Files directly inside the large or small directory are also entered
    /// into that tier's filename registry unless an explicit entry exists.
    pub fn file(mut self, relative_path: &str, locator: impl Into<String>) -> Self {
        let relative_path = relative_path.trim_start_matches('/');
        let locator = locator.into();
        if let Some((dir, filename)) = relative_path.rsplit_once('/') {
            if dir == self.registry.large_dir {
                self.registry
                    .large
                    .entry(filename.to_string())
                    .or_insert_with(|| locator.clone());
            } else if dir == self.registry.small_dir {
                self.registry
                    .small
                    .entry(filename.to_string())
                    .or_insert_with(|| locator.clone());
            }
        }
        self.registry.tree.insert(relative_path.to_string(), locator);
        self
    }

    /// Freezes the registry.
    pub fn build(self) -> AssetRegistry {
        self.registry
    }
}

/// Reference under resolution, pre-split once for every strategy.
struct ImageRequest<'a> {
    reference: &'a str,
    relative: &'a str,
    filename: &'a str,
}

type Strategy = fn(&AssetRegistry, &ImageRequest<'_>) -> Option<String>;

const DETAIL_STRATEGIES: &[Strategy] = &[
    passthrough,
    large_registry,
    small_registry,
    tree_relative,
    tree_large_dir,
    tree_small_dir,
];

const THUMBNAIL_STRATEGIES: &[Strategy] =
    &[passthrough, small_registry, tree_relative, tree_small_dir];

impl AssetRegistry {
    /// Starts a new registry.
    pub fn builder() -> AssetRegistryBuilder {
        AssetRegistryBuilder::default()
    }

    /// The fallback locator.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Number of registered `(large, small, tree)` entries.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.large.len(), self.small.len(), self.tree.len())
    }

    /// True when nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.large.is_empty() && self.small.is_empty() && self.tree.is_empty()
    }

    /// Resolves a reference for the detail view. Never returns an empty string.
    pub fn resolve_image(&self, reference: &str) -> String {
        self.resolve_image_for(reference, ImageTier::Detail)
    }

    /// Resolves a reference for the given view tier. Never returns an empty string.
    pub fn resolve_image_for(&self, reference: &str, tier: ImageTier) -> String {
        let reference = reference.trim();
        if reference.is_empty() {
            return self.placeholder.clone();
        }
        let relative = reference.trim_start_matches('/');
        let request = ImageRequest {
            reference,
            relative,
            filename: image_filename(relative),
        };
        let strategies = match tier {
            ImageTier::Detail => DETAIL_STRATEGIES,
            ImageTier::Thumbnail => THUMBNAIL_STRATEGIES,
        };
        strategies
            .iter()
            .find_map(|strategy| strategy(self, &request).filter(|l| !l.is_empty()))
            .unwrap_or_else(|| {
                debug!(reference, "image unresolved; using placeholder");
                self.placeholder.clone()
            })
    }
}

/// Last path segment of an image reference (`"menu/sm/a.png"` -> `"a.png"`).
pub fn image_filename(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

/// Schemes that address a resource without an authority part.
const OPAQUE_SCHEMES: &[&str] = &["data", "blob"];

/// True for `scheme://` URLs, `data:`/`blob:` URIs, and protocol-relative `//`.
///
/// A bare `word:` prefix is not enough; bundled filenames may contain colons.
fn is_absolute_url(reference: &str) -> bool {
    if reference.starts_with("//") {
        return true;
    }
    let Some((scheme, rest)) = reference.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let well_formed = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    well_formed
        && (rest.starts_with("//")
            || OPAQUE_SCHEMES
                .iter()
                .any(|opaque| scheme.eq_ignore_ascii_case(opaque)))
}

fn passthrough(_: &AssetRegistry, request: &ImageRequest<'_>) -> Option<String> {
    (is_absolute_url(request.reference) || request.reference.starts_with('/'))
        .then(|| request.reference.to_string())
}

fn large_registry(registry: &AssetRegistry, request: &ImageRequest<'_>) -> Option<String> {
    registry.large.get(request.filename).cloned()
}

fn small_registry(registry: &AssetRegistry, request: &ImageRequest<'_>) -> Option<String> {
    registry.small.get(request.filename).cloned()
}

fn tree_relative(registry: &AssetRegistry, request: &ImageRequest<'_>) -> Option<String> {
    registry.tree.get(request.relative).cloned()
}

fn tree_large_dir(registry: &AssetRegistry, request: &ImageRequest<'_>) -> Option<String> {
    in_dir(registry, &registry.large_dir, request.filename)
}

fn tree_small_dir(registry: &AssetRegistry, request: &ImageRequest<'_>) -> Option<String> {
    in_dir(registry, &registry.small_dir, request.filename)
}

fn in_dir(registry: &AssetRegistry, dir: &str, filename: &str) -> Option<String> {
    if filename.is_empty() {
        return None;
    }
    registry.tree.get(&format!("{dir}/{filename}")).cloned()
}
