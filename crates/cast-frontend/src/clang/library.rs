//! Runtime loading of the libclang shared library.

use std::path::Path;

use crate::error::FrontEndError;

/// Load libclang for the current thread.
///
/// `library_path` may name the shared library itself or the directory
/// containing it. Without it, `clang-sys` searches `LIBCLANG_PATH`, `llvm-config`,
/// and the platform's default library directories.
pub fn load(library_path: Option<&Path>) -> Result<(), FrontEndError> {
    if let Some(path) = library_path {
        if !path.exists() {
            return Err(FrontEndError::LibraryNotLoaded(format!(
                "'{}' does not exist",
                path.display()
            )));
        }
        // clang-sys reads the override from the environment when loading.
        unsafe { std::env::set_var("LIBCLANG_PATH", path) };
    } else if clang_sys::is_loaded() {
        return Ok(());
    }

    clang_sys::load().map_err(FrontEndError::LibraryNotLoaded)?;
    if let Some(library) = clang_sys::get_library() {
        tracing::debug!(path = %library.path().display(), "libclang: loaded");
    }
    Ok(())
}
