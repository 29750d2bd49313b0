//! Activity module enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse subsystem an activity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityModule {
    /// Login, logout, and failed authentication attempts.
    Authentication,
    /// Browsing and viewing the book catalog.
    Catalog,
    /// Borrowing and returning books.
    Circulation,
}

impl ActivityModule {
    /// Return the module as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::Catalog => "catalog",
            Self::Circulation => "circulation",
        }
    }
}

impl fmt::Display for ActivityModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityModule {
    type Err = libris_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "authentication" => Ok(Self::Authentication),
            "catalog" => Ok(Self::Catalog),
            "circulation" => Ok(Self::Circulation),
            _ => Err(libris_core::AppError::validation(format!(
                "Invalid activity module: '{s}'. Expected one of: authentication, catalog, circulation"
            ))),
        }
    }
}

impl TryFrom<String> for ActivityModule {
    type Error = libris_core::AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
