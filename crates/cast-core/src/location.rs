//! Source locations.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::is_zero_u32;

/// A position in a header file.
///
/// `file_name` is the display name (usually relative to an include directory);
/// `file_path` may differ when the file was reached through a linked include path.
/// Ordering is by `(file_name, line, column)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub file_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub file_path: String,
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub line: u32,
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub column: u32,
}

impl Location {
    #[must_use]
    pub fn new(file_name: impl Into<String>, file_path: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file_name: file_name.into(),
            file_path: file_path.into(),
            line,
            column,
        }
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file_name
            .cmp(&other.file_name)
            .then(self.line.cmp(&other.line))
            .then(self.column.cmp(&other.column))
            .then_with(|| self.file_path.cmp(&other.file_path))
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `file:line:col`, followed by ` (path)` when the path differs from the name.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_name, self.line, self.column)?;
        if !self.file_path.is_empty() && self.file_path != self.file_name {
            write!(f, " ({})", self.file_path)?;
        }
        Ok(())
    }
}

/// Error returned when text is not in the `file:line:col` display format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocationError(pub String);

impl fmt::Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a source location: '{}'", self.0)
    }
}

impl std::error::Error for ParseLocationError {}

impl FromStr for Location {
    type Err = ParseLocationError;

    /// The path suffix starts at the first ` (` that follows a complete
    /// `file:line:col`, so either part may itself contain ` (`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();

        if let Some(inner) = text.strip_suffix(')') {
            for (index, _) in inner.match_indices(" (") {
                if let Some((file_name, line, column)) = parse_position(&inner[..index]) {
                    return Ok(Self::new(file_name, &inner[index + 2..], line, column));
                }
            }
        }

        let (file_name, line, column) = parse_position(text).ok_or_else(|| ParseLocationError(text.to_string()))?;
        Ok(Self::new(file_name, file_name, line, column))
    }
}

fn parse_position(text: &str) -> Option<(&str, u32, u32)> {
    let mut parts = text.rsplitn(3, ':');
    let column = parts.next()?.parse().ok()?;
    let line = parts.next()?.parse().ok()?;
    let file_name = parts.next().filter(|f| !f.is_empty())?;
    Some((file_name, line, column))
}
