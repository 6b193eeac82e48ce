//! The synthesized C++ program that evaluates macro candidates.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use super::MacroCandidate;

/// Prefix of the local variable declared for each macro.
pub(crate) const VARIABLE_PREFIX: &str = "variable_";

/// Source text of the macro program.
///
/// Each declaration is preceded by a comment holding the macro's location,
/// which is read back after evaluation.
pub(crate) fn program_source(candidates: &[&MacroCandidate]) -> String {
    let mut headers: Vec<&PathBuf> = Vec::new();
    for candidate in candidates {
        if !headers.contains(&&candidate.header) {
            headers.push(&candidate.header);
        }
    }

    let mut source = String::new();
    for header in headers {
        source.push_str(&format!("#include \"{}\"\n", header.display()));
    }
    source.push('\n');
    source.push_str("int main(void)\n{\n");
    for candidate in candidates {
        source.push_str(&format!("\t// {}\n", candidate.location));
        source.push_str(&format!(
            "\tauto {VARIABLE_PREFIX}{} = {};\n",
            candidate.name,
            candidate.tokens.join(" ")
        ));
    }
    source.push_str("}\n");
    source
}

/// Write the macro program to a temporary `.cpp` file, removed on drop.
pub(crate) fn write_program(candidates: &[&MacroCandidate]) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("cast-macros-")
        .suffix(".cpp")
        .tempfile()?;
    file.write_all(program_source(candidates).as_bytes())?;
    file.flush()?;
    Ok(file)
}
