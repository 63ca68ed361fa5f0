//! Product category enumeration.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a known category.
///
/// Callers that take category input from a filter control should degrade to
/// "no match" on this error rather than failing the whole screen.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown product category: {0}")]
pub struct CategoryParseError(pub String);

/// The fixed set of product categories carried by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Furniture,
    Lighting,
    Decor,
    Textiles,
    Other,
}

impl ProductCategory {
    /// Every category, in display order. Used to populate filter dropdowns.
    pub const ALL: [Self; 5] = [
        Self::Furniture,
        Self::Lighting,
        Self::Decor,
        Self::Textiles,
        Self::Other,
    ];

    /// Canonical name as used on the wire and in URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Furniture => "Furniture",
            Self::Lighting => "Lighting",
            Self::Decor => "Decor",
            Self::Textiles => "Textiles",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = CategoryParseError;

    /// Case-insensitive parse. Unknown values are an error, never a panic.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "furniture" => Ok(Self::Furniture),
            "lighting" => Ok(Self::Lighting),
            "decor" => Ok(Self::Decor),
            "textiles" => Ok(Self::Textiles),
            "other" => Ok(Self::Other),
            _ => Err(CategoryParseError(s.to_owned())),
        }
    }
}
