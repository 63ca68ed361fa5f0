//! Local wishlist commands.
//!
//! The wishlist never touches the network: it is a JSON file on this
//! device, resolved through `MAISON_WISHLIST_FILE`.

use thiserror::Error;

use maison_storefront::config::{ConfigError, StorefrontConfig};
use maison_storefront::wishlist::{Wishlist, WishlistError};

use maison_core::ProductId;

/// Errors that can occur during wishlist commands.
#[derive(Debug, Error)]
pub enum WishlistCommandError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The wishlist file could not be read or written.
    #[error(transparent)]
    Wishlist(#[from] WishlistError),
}

/// Print the wishlisted product IDs.
pub fn show() -> Result<(), WishlistCommandError> {
    let config = StorefrontConfig::from_env()?;
    let wishlist = Wishlist::load(config.wishlist_file)?;

    if wishlist.ids().is_empty() {
        tracing::info!("Wishlist is empty");
        return Ok(());
    }
    tracing::info!("{} product(s) wishlisted:", wishlist.ids().len());
    for id in wishlist.ids() {
        tracing::info!("  {id}");
    }
    Ok(())
}

/// Add or remove one product, then persist.
pub fn toggle(id: &str) -> Result<(), WishlistCommandError> {
    let config = StorefrontConfig::from_env()?;
    let mut wishlist = Wishlist::load(config.wishlist_file)?;

    let id = ProductId::new(id);
    if wishlist.toggle(id.clone()) {
        tracing::info!("Added {id} to the wishlist");
    } else {
        tracing::info!("Removed {id} from the wishlist");
    }
    wishlist.save()?;
    Ok(())
}
