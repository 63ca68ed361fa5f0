//! Client-only wishlist.
//!
//! Deliberately local state: product IDs persisted as a JSON file on this
//! device, never synced to the backend. There is no server reconciliation
//! to design around; losing the file simply loses the wishlist.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use maison_core::ProductId;

/// Errors raised by wishlist persistence.
#[derive(Debug, Error)]
pub enum WishlistError {
    /// Reading or writing the wishlist file failed.
    #[error("wishlist file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The wishlist file exists but is not valid JSON.
    #[error("wishlist file is corrupt: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Default)]
struct StoredWishlist {
    product_ids: Vec<ProductId>,
}

/// The wishlist: an ordered set of product IDs on local storage.
#[derive(Debug)]
pub struct Wishlist {
    path: PathBuf,
    ids: Vec<ProductId>,
}

impl Wishlist {
    /// Load the wishlist from `path`. A missing file yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, WishlistError> {
        let path = path.into();
        let ids = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let stored: StoredWishlist = serde_json::from_str(&raw)?;
            stored.product_ids
        } else {
            Vec::new()
        };
        Ok(Self { path, ids })
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Wishlisted product IDs, in add order.
    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Whether a product is wishlisted.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Add or remove a product. Returns `true` if the product is now on
    /// the wishlist. Call [`save`](Self::save) to persist.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if let Some(position) = self.ids.iter().position(|existing| existing == &id) {
            self.ids.remove(position);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Write the wishlist back to its file, creating parent directories as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<(), WishlistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let stored = StoredWishlist {
            product_ids: self.ids.clone(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_empty_wishlist() {
        let dir = tempfile::tempdir().unwrap();
        let wishlist = Wishlist::load(dir.path().join("wishlist.json")).unwrap();
        assert!(wishlist.ids().is_empty());
    }

    #[test]
    fn test_toggle_save_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wishlist.json");

        let mut wishlist = Wishlist::load(&path).unwrap();
        assert!(wishlist.toggle(ProductId::new("p1")));
        assert!(wishlist.toggle(ProductId::new("p2")));
        assert!(!wishlist.toggle(ProductId::new("p1")));
        wishlist.save().unwrap();

        let reloaded = Wishlist::load(&path).unwrap();
        assert_eq!(reloaded.ids(), &[ProductId::new("p2")]);
        assert!(reloaded.contains(&ProductId::new("p2")));
    }

    #[test]
    fn test_corrupt_file_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wishlist.json");
        fs::write(&path, "[]").unwrap(); // wrong shape: array, not object
        assert!(matches!(
            Wishlist::load(&path),
            Err(WishlistError::Parse(_))
        ));
    }
}
