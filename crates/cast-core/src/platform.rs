//! Target platforms identified by their target triple.

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

/// A target triple such as `x86_64-unknown-linux-gnu` or `aarch64-apple-darwin`.
///
/// Serialized as the plain triple string. An empty string deserializes to
/// [`TargetPlatform::unknown`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TargetPlatform {
    triple: String,
}

const UNKNOWN: &str = "unknown";

impl TargetPlatform {
    #[must_use]
    pub fn new(triple: impl Into<String>) -> Self {
        let triple = triple.into();
        let triple = triple.trim();
        if triple.is_empty() {
            return Self::unknown();
        }
        Self {
            triple: triple.to_string(),
        }
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self {
            triple: UNKNOWN.to_string(),
        }
    }

    /// The triple of the machine running this process.
    #[must_use]
    pub fn host() -> Self {
        let arch = std::env::consts::ARCH;
        let triple = match std::env::consts::OS {
            "linux" => format!("{arch}-unknown-linux-gnu"),
            "macos" => format!("{arch}-apple-darwin"),
            "windows" => format!("{arch}-pc-windows-msvc"),
            os => format!("{arch}-unknown-{os}"),
        };
        Self::new(triple)
    }

    #[must_use]
    pub fn triple(&self) -> &str {
        &self.triple
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.triple == UNKNOWN
            || (self.architecture() == Architecture::Unknown
                && self.operating_system() == OperatingSystem::Unknown)
    }

    #[must_use]
    pub fn architecture(&self) -> Architecture {
        let arch = self.triple.split('-').next().unwrap_or_default();
        match arch {
            "x86_64" | "amd64" => Architecture::X64,
            "i386" | "i486" | "i586" | "i686" | "x86" => Architecture::X86,
            "aarch64" | "arm64" | "arm64e" => Architecture::Arm64,
            other if other.starts_with("arm") || other.starts_with("thumb") => {
                Architecture::Arm32
            }
            _ => Architecture::Unknown,
        }
    }

    #[must_use]
    pub fn operating_system(&self) -> OperatingSystem {
        let parts: Vec<&str> = self.triple.split('-').skip(1).collect();
        if parts.iter().any(|p| p.starts_with("android")) {
            return OperatingSystem::Android;
        }
        for part in parts {
            if part == "linux" {
                return OperatingSystem::Linux;
            }
            if part.starts_with("darwin") || part.starts_with("macos") {
                return OperatingSystem::MacOs;
            }
            if part.starts_with("ios") {
                return OperatingSystem::Ios;
            }
            if part == "windows" || part == "win32" {
                return OperatingSystem::Windows;
            }
        }
        OperatingSystem::Unknown
    }
}

impl Default for TargetPlatform {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<String> for TargetPlatform {
    fn from(triple: String) -> Self {
        Self::new(triple)
    }
}

impl From<&str> for TargetPlatform {
    fn from(triple: &str) -> Self {
        Self::new(triple)
    }
}

impl From<TargetPlatform> for String {
    fn from(platform: TargetPlatform) -> Self {
        platform.triple
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.triple)
    }
}

impl JsonSchema for TargetPlatform {
    fn schema_name() -> Cow<'static, str> {
        "TargetPlatform".into()
    }

    fn inline_schema() -> bool {
        true
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}

// ---------------------------------------------------------------------------
// Architecture / OperatingSystem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    Unknown,
    X86,
    X64,
    Arm32,
    Arm64,
}

impl Architecture {
    /// Architecture component used in Debian multiarch directory names.
    #[must_use]
    pub const fn multiarch_name(self) -> Option<&'static str> {
        match self {
            Self::X86 => Some("i386"),
            Self::X64 => Some("x86_64"),
            Self::Arm32 => Some("arm"),
            Self::Arm64 => Some("aarch64"),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub fn host() -> Self {
        TargetPlatform::host().architecture()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingSystem {
    Unknown,
    Linux,
    MacOs,
    Ios,
    Windows,
    Android,
}

impl OperatingSystem {
    /// Key used for this operating system in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Ios => "ios",
            Self::Windows => "windows",
            Self::Android => "android",
        }
    }

    #[must_use]
    pub const fn is_apple(self) -> bool {
        matches!(self, Self::MacOs | Self::Ios)
    }

    #[must_use]
    pub fn host() -> Self {
        match std::env::consts::OS {
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            "ios" => Self::Ios,
            "windows" => Self::Windows,
            "android" => Self::Android,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
