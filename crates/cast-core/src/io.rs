//! Reading and writing AST documents as pretty-printed JSON.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ast::{AbstractSyntaxTreeCrossPlatform, AbstractSyntaxTreeTargetPlatform};
use crate::error::AstIoError;

/// Read a per-platform AST document.
///
/// # Errors
///
/// Returns [`AstIoError`] if the file cannot be read or is not a valid document.
pub fn read_target_platform_ast(
    path: &Path,
) -> Result<AbstractSyntaxTreeTargetPlatform, AstIoError> {
    read_json(path)
}

/// Read a cross-platform AST document.
///
/// # Errors
///
/// Returns [`AstIoError`] if the file cannot be read or is not a valid document.
pub fn read_cross_platform_ast(
    path: &Path,
) -> Result<AbstractSyntaxTreeCrossPlatform, AstIoError> {
    read_json(path)
}

/// Serialize a document to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`AstIoError`] if serialization or any filesystem operation fails.
pub fn write_ast<T: Serialize>(path: &Path, ast: &T) -> Result<(), AstIoError> {
    let io_error = |source| AstIoError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut json = serde_json::to_string_pretty(ast).map_err(|source| AstIoError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    json.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, json).map_err(io_error)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AstIoError> {
    let contents = fs::read_to_string(path).map_err(|source| AstIoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| AstIoError::Json {
        path: path.to_path_buf(),
        source,
    })
}
