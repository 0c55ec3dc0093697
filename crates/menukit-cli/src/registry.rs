//! Asset registry population from the configured asset tree.

use std::path::Path;

use menukit_core::AssetRegistry;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::{load_config, AssetsConfig};
use crate::error::CliError;

/// Loads the configuration and builds the process-wide asset registry.
pub fn load_registry(config_path: &Path) -> Result<AssetRegistry, CliError> {
    let config = load_config(config_path)?;
    Ok(build_registry(&config.assets))
}

/// Builds the registry: explicit entries first, then every matching file
/// under the asset root, addressed as `public_prefix/relative/path`.
pub fn build_registry(assets: &AssetsConfig) -> AssetRegistry {
    let mut builder = AssetRegistry::builder()
        .placeholder(assets.placeholder.as_str())
        .variant_dirs(&assets.large_dir, &assets.small_dir);
    for (filename, locator) in &assets.large {
        builder = builder.large(filename.as_str(), locator.as_str());
    }
    for (filename, locator) in &assets.small {
        builder = builder.small(filename.as_str(), locator.as_str());
    }

    if !assets.root.is_dir() {
        debug!(root = %assets.root.display(), "asset root not found; skipping scan");
        return builder.build();
    }

    let prefix = assets.public_prefix.trim_end_matches('/');
    let mut scanned = 0usize;
    for entry in WalkDir::new(&assets.root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let Ok(relative) = entry.path().strip_prefix(&assets.root) else {
            continue;
        };
        if !has_extension(relative, &assets.extensions) {
            continue;
        }
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        builder = builder.file(&relative, format!("{prefix}/{relative}"));
        scanned += 1;
    }

    let registry = builder.build();
    let (large, small, tree) = registry.counts();
    info!(
        root = %assets.root.display(),
        scanned,
        large,
        small,
        tree,
        "asset registry ready"
    );
    registry
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use menukit_core::ImageTier;
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> (TempDir, AssetsConfig) {
        let dir = TempDir::new().unwrap();
        for rel in [
            "menu/lg/greek.png",
            "menu/sm/greek.png",
            "menu/sm/caesar.JPG",
            "banners/summer.webp",
            "notes.txt",
        ] {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"img").unwrap();
        }
        let assets = AssetsConfig {
            root: dir.path().to_path_buf(),
            ..AssetsConfig::default()
        };
        (dir, assets)
    }

    #[test]
    fn scan_fills_both_tiers_and_tree() {
        let (_dir, assets) = tree();
        let registry = build_registry(&assets);
        assert_eq!(registry.counts(), (1, 2, 4));
        assert_eq!(registry.resolve_image("greek.png"), "/img/menu/lg/greek.png");
        assert_eq!(
            registry.resolve_image_for("greek.png", ImageTier::Thumbnail),
            "/img/menu/sm/greek.png"
        );
        assert_eq!(
            registry.resolve_image("banners/summer.webp"),
            "/img/banners/summer.webp"
        );
        assert_eq!(registry.resolve_image("notes.txt"), "/img/placeholder.png");
    }

    #[test]
    fn explicit_entries_win_over_scanned_files() {
        let (_dir, mut assets) = tree();
        assets
            .large
            .insert("greek.png".to_string(), "/cdn/greek.png".to_string());
        let registry = build_registry(&assets);
        assert_eq!(registry.resolve_image("greek.png"), "/cdn/greek.png");
    }

    #[test]
    fn missing_root_yields_empty_registry() {
        let assets = AssetsConfig {
            root: "/nonexistent/assets".into(),
            placeholder: "/img/none.svg".to_string(),
            ..AssetsConfig::default()
        };
        let registry = build_registry(&assets);
        assert!(registry.is_empty());
        assert_eq!(registry.resolve_image("greek.png"), "/img/none.svg");
    }
}
