//! User-agent classification into a compact "OS, Browser" label.
//!
//! Browsers embed each other's tokens for compatibility (Edge carries
//! `Chrome`, Chrome carries `Safari`, Android carries `Linux`), so every
//! check below runs in a fixed order and the first hit wins.

use serde::Serialize;
use std::fmt;

/// Operating system family detected from a user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingSystem {
    Windows,
    MacOs,
    Linux,
    Android,
    Ios,
    Unknown,
}

impl OperatingSystem {
    /// Detect the operating system family.
    pub fn detect(user_agent: &str) -> Self {
        let has = |token: &str| user_agent.contains(token);

        if has("Windows") {
            Self::Windows
        } else if has("Macintosh") {
            Self::MacOs
        } else if has("Linux") && !has("Android") {
            Self::Linux
        } else if has("Android") {
            Self::Android
        } else if has("iPhone") || has("iPad") {
            Self::Ios
        } else {
            Self::Unknown
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
            Self::Android => "Android",
            Self::Ios => "iOS",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Browser family detected from a user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Chrome,
    Firefox,
    Safari,
    Edge,
    InternetExplorer,
}

impl Browser {
    /// Detect the browser family, if any known token is present.
    pub fn detect(user_agent: &str) -> Option<Self> {
        let has = |token: &str| user_agent.contains(token);

        if has("Chrome") && !has("Edg") {
            Some(Self::Chrome)
        } else if has("Firefox") {
            Some(Self::Firefox)
        } else if has("Safari") && !has("Chrome") {
            Some(Self::Safari)
        } else if has("Edg") {
            Some(Self::Edge)
        } else if has("MSIE") || has("Trident") {
            Some(Self::InternetExplorer)
        } else {
            None
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chrome => "Chrome",
            Self::Firefox => "Firefox",
            Self::Safari => "Safari",
            Self::Edge => "Edge",
            Self::InternetExplorer => "Internet Explorer",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a raw user-agent string as `"<OS>"` or `"<OS>, <Browser>"`.
///
/// Total and deterministic: unrecognised input yields `"Unknown"`.
pub fn classify(user_agent: &str) -> String {
    let os = OperatingSystem::detect(user_agent);
    match Browser::detect(user_agent) {
        Some(browser) => format!("{os}, {browser}"),
        None => os.label().to_string(),
    }
}

/// A device label that can only be produced by [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DeviceInfo(String);

impl DeviceInfo {
    /// Derive the device label from a user agent.
    pub fn from_user_agent(user_agent: &str) -> Self {
        Self(classify(user_agent))
    }

    /// Borrow the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
