//! Type name normalization and names for anonymous declarations.

use cast_core::NodeKind;

/// Words dropped from type spellings.
const QUALIFIERS: &[&str] = &[
    "const",
    "volatile",
    "restrict",
    "__restrict",
    "struct",
    "union",
    "enum",
];

/// Normalize a type spelling into the name used for nodes and type infos.
///
/// Drops qualifiers and elaboration keywords and joins pointer stars onto the
/// preceding type: `const struct Point *const` becomes `Point*`.
pub(crate) fn normalize_type_name(spelling: &str) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    let mut start = None;
    for (index, ch) in spelling.char_indices() {
        if is_word(ch) {
            start.get_or_insert(index);
            continue;
        }
        if let Some(begin) = start.take() {
            tokens.push(&spelling[begin..index]);
        }
        if !ch.is_whitespace() {
            tokens.push(&spelling[index..index + ch.len_utf8()]);
        }
    }
    if let Some(begin) = start {
        tokens.push(&spelling[begin..]);
    }

    let mut name = String::with_capacity(spelling.len());
    let mut previous: Option<&str> = None;
    for token in tokens.into_iter().filter(|token| !QUALIFIERS.contains(token)) {
        if let Some(previous) = previous {
            let word_after_word = starts_word(previous) && starts_word(token);
            let call_after_word = starts_word(previous) && token == "(";
            if word_after_word || call_after_word || previous == "," {
                name.push(' ');
            }
        }
        name.push_str(token);
        previous = Some(token);
    }
    name
}

fn is_word(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn starts_word(token: &str) -> bool {
    token.chars().next().is_some_and(is_word)
}

/// Where an anonymous record or enum was found.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct AnonymousSite<'s> {
    pub parent: Option<&'s str>,
    pub field_name: Option<&'s str>,
    pub field_index: Option<usize>,
}

/// Name an anonymous declaration after its parent and field when known,
/// otherwise after its kind and position.
pub(crate) fn anonymous_name(site: AnonymousSite<'_>, kind: NodeKind, line: u32, column: u32) -> String {
    match (site.parent, site.field_name.filter(|name| !name.is_empty()), site.field_index) {
        (Some(parent), Some(field), _) => format!("{parent}_{field}"),
        (Some(parent), None, Some(index)) => format!("{parent}_{index}"),
        (Some(parent), None, None) => format!("{parent}_anonymous_{}", kind_word(kind)),
        (None, _, _) => format!("anonymous_{}_{line}_{column}", kind_word(kind)),
    }
}

const fn kind_word(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Union => "union",
        NodeKind::Enum => "enum",
        _ => "struct",
    }
}
