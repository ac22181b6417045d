//! FILENAME: app/src/assets.rs
//! Asset Store boundary: resolves flag/logo identifiers from the data
//! file to image files under a fixed directory. A missing or
//! unreadable asset degrades to the raw identifier text; it never
//! fails the comparison.

use std::path::{Path, PathBuf};

pub struct AssetStore {
    root: PathBuf,
}

/// Outcome of one identifier lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAsset {
    /// A readable image file with its pixel dimensions.
    Image {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// No usable file; the identifier itself is displayed instead.
    Unavailable { identifier: String },
}

impl AssetStore {
    pub fn new(root: PathBuf) -> Self {
        AssetStore { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Looks up one asset identifier under the store's directory.
    pub fn resolve(&self, identifier: &str) -> ResolvedAsset {
        let path = self.root.join(identifier);
        match image::image_dimensions(&path) {
            Ok((width, height)) => ResolvedAsset::Image {
                path,
                width,
                height,
            },
            Err(_) => ResolvedAsset::Unavailable {
                identifier: identifier.to_string(),
            },
        }
    }

    /// Display text for an asset cell: the file name with its
    /// dimensions, or the raw identifier when unavailable.
    pub fn describe(&self, identifier: &str) -> String {
        match self.resolve(identifier) {
            ResolvedAsset::Image { width, height, .. } => {
                format!("{} [{}x{}]", identifier, width, height)
            }
            ResolvedAsset::Unavailable { identifier } => identifier,
        }
    }
}
