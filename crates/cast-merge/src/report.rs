//! What a merge kept and why it dropped the rest.

use std::fmt;
use std::path::PathBuf;

use cast_core::{NodeKind, TargetPlatform};

/// Why a name was left out of the cross-platform AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeIssue {
    /// Absent from `platforms`.
    Missing {
        name: String,
        platforms: Vec<TargetPlatform>,
    },
    /// `platform` declares the name with a kind other than the first one seen.
    KindMismatch {
        name: String,
        platform: TargetPlatform,
        expected: NodeKind,
        actual: NodeKind,
    },
    /// Declarations on `platforms` differ from the first platform's.
    Mismatch {
        name: String,
        platforms: Vec<TargetPlatform>,
    },
    /// A macro whose value, and nothing else, differs on `platforms`.
    MacroValueMismatch {
        name: String,
        platforms: Vec<TargetPlatform>,
    },
}

impl MergeIssue {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Missing { name, .. }
            | Self::KindMismatch { name, .. }
            | Self::Mismatch { name, .. }
            | Self::MacroValueMismatch { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Platforms that contributed, in input order.
    pub platforms: Vec<TargetPlatform>,
    /// Input files that could not be read or carried no platform.
    pub skipped_inputs: Vec<PathBuf>,
    /// Number of nodes in the cross-platform AST.
    pub kept: usize,
    pub issues: Vec<MergeIssue>,
}

impl MergeReport {
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, MergeIssue::Missing { .. }))
            .map(MergeIssue::name)
    }

    pub fn kind_mismatches(&self) -> impl Iterator<Item = &str> {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, MergeIssue::KindMismatch { .. }))
            .map(MergeIssue::name)
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &str> {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, MergeIssue::Mismatch { .. } | MergeIssue::MacroValueMismatch { .. }))
            .map(MergeIssue::name)
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} node(s) kept across {} platform(s), {} dropped",
            self.kept,
            self.platforms.len(),
            self.issues.len()
        )?;
        if !self.skipped_inputs.is_empty() {
            write!(f, ", {} input(s) skipped", self.skipped_inputs.len())?;
        }
        Ok(())
    }
}

/// `a, b, c` for log fields.
pub(crate) fn join_platforms(platforms: &[TargetPlatform]) -> String {
    platforms
        .iter()
        .map(TargetPlatform::triple)
        .collect::<Vec<_>>()
        .join(", ")
}
