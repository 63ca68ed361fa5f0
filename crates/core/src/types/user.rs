//! User record.

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::email::Email;
use super::id::UserId;

/// A customer account.
///
/// Admin and customer sessions are disjoint identity spaces; an admin is
/// never represented by this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email, unique per account.
    pub email: Email,
    /// Default shipping address, once the user has saved one.
    #[serde(default)]
    pub address: Option<Address>,
    /// Profile picture URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}
