//! Declaration exploration engine.
//!
//! Exploring a header for one target platform:
//!
//! 1. Parse the header; error diagnostics abort the platform.
//! 2. Collect macro candidates and seed the frontier with the externally
//!    visible top-level declarations of the main file.
//! 3. Parse each followed `#include` as its own unit and seed from it too.
//! 4. Drain the frontier (variables, then functions, then types). Handlers
//!    resolve type uses, which enqueues every named type they reach.
//! 5. Evaluate the macro candidates and key every node by name.
//!
//! ## Module Structure
//!
//! ```text
//! explore/
//! ├── mod.rs        # Explorer entry point and the per-platform run
//! ├── context.rs    # ExploreContext: type resolution, enqueueing, locations
//! ├── frontier.rs   # Work queues and the visited set
//! ├── info.rs       # ExploreInfo work items
//! ├── names.rs      # Type name normalization, anonymous names
//! └── handlers/     # One KindHandler per node kind
//! ```

pub(crate) mod context;
mod frontier;
mod handlers;
pub(crate) mod info;
pub(crate) mod names;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use cast_config::{ExploreOptions, ParseOptions};
use cast_core::{
    AbstractSyntaxTreeTargetPlatform, AstNodes, Enum, EnumConstant, Function, FunctionPointer,
    MacroObject, Node, NodeKind, OpaqueType, Record, TargetPlatform, TypeAlias, Variable, node_map,
};
use cast_frontend::{CursorKind, FrontEnd, LayoutError, TranslationUnit};
use tracing::{debug, error, info, info_span, warn};

use crate::error::ExtractError;
use crate::macros::{self, MacroCandidate, MacroFilter};
use crate::parse::Parser;
use context::{ExploreContext, TypeSite, is_ignored_path};
use frontier::{Frontier, Queue};
use info::{ParentInfo, UnitId};

type CursorOf<F> = <<F as FrontEnd>::Unit as TranslationUnit>::Cursor;
type TypeOf<F> = <<F as FrontEnd>::Unit as TranslationUnit>::Type;

/// Produces per-platform ASTs with one front end.
pub struct Explorer<'f, F: FrontEnd> {
    front_end: &'f F,
}

impl<'f, F: FrontEnd> Explorer<'f, F> {
    pub const fn new(front_end: &'f F) -> Self {
        Self { front_end }
    }

    /// Explore `header` for `target_platform`.
    ///
    /// Every translation unit parsed along the way is disposed before this
    /// returns, on success and on failure.
    pub fn abstract_syntax_tree(
        &self,
        header: &Path,
        target_platform: &TargetPlatform,
        explore: &ExploreOptions,
        parse: &ParseOptions,
    ) -> Result<AbstractSyntaxTreeTargetPlatform, ExtractError> {
        let span = info_span!("platform", platform = %target_platform);
        let _guard = span.enter();

        let run = ExploreRun::new(Parser::new(self.front_end, target_platform, parse), explore)?;
        let result = run.run(header);
        match &result {
            Ok(ast) => info!(nodes = ast.nodes.len(), "explore: success"),
            Err(error) => error!(%error, "explore: failed"),
        }
        result
    }
}

// ---------------------------------------------------------------------------
// ExploreRun
// ---------------------------------------------------------------------------

/// State of one platform's exploration. Owns every parsed unit.
struct ExploreRun<'a, F: FrontEnd> {
    parser: Parser<'a, F>,
    options: &'a ExploreOptions,
    macro_filter: MacroFilter,
    units: Vec<F::Unit>,
    frontier: Frontier<CursorOf<F>, TypeOf<F>>,
    collected: Collected,
    macro_candidates: Vec<MacroCandidate>,
    visited_include_paths: HashSet<PathBuf>,
}

impl<'a, F: FrontEnd> ExploreRun<'a, F> {
    fn new(parser: Parser<'a, F>, options: &'a ExploreOptions) -> Result<Self, ExtractError> {
        Ok(Self {
            parser,
            options,
            macro_filter: MacroFilter::new(&options.ignored_macro_patterns)?,
            units: Vec::new(),
            frontier: Frontier::default(),
            collected: Collected::default(),
            macro_candidates: Vec::new(),
            visited_include_paths: HashSet::new(),
        })
    }

    fn run(mut self, header: &Path) -> Result<AbstractSyntaxTreeTargetPlatform, ExtractError> {
        let header = normalize_path(header);
        self.visited_include_paths.insert(header.clone());
        let main = self.visit_translation_unit(&header, true)?;

        self.explore_frontier()?;

        let macro_objects = macros::macro_objects(&self.parser, &self.macro_candidates);
        let platform_actual = self.units[main]
            .target_triple()
            .map_or_else(TargetPlatform::unknown, TargetPlatform::new);
        let file_name = header
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned());

        Ok(AbstractSyntaxTreeTargetPlatform {
            file_name,
            platform_requested: self.parser.target_platform().clone(),
            platform_actual,
            nodes: self.collected.into_nodes(macro_objects),
        })
    }

    fn visit_translation_unit(&mut self, path: &Path, is_main: bool) -> Result<UnitId, ExtractError> {
        let unit = if is_main {
            self.parser.parse_header(path)?
        } else {
            self.parser.parse_include(path)?
        };
        self.units.push(unit);
        let id = self.units.len() - 1;

        let unit = &self.units[id];
        self.macro_candidates
            .extend(macros::candidates(unit, self.options, &self.macro_filter));
        self.visit_top_level_cursors(id);

        for include in self.include_paths(id) {
            if !self.visited_include_paths.insert(include.clone()) {
                continue;
            }
            debug!(path = %include.display(), "explore: following include");
            if let Err(error) = self.visit_translation_unit(&include, false) {
                warn!(path = %include.display(), %error, "explore: include could not be parsed");
            }
        }

        Ok(id)
    }

    fn context(&mut self) -> ExploreContext<'_, F::Unit> {
        ExploreContext::new(&self.units, self.options, &mut self.frontier)
    }

    // ── Top-level seeding ────────────────────────────────────────────

    fn visit_top_level_cursors(&mut self, id: UnitId) {
        let options = self.options;
        let mut context = ExploreContext::new(&self.units, options, &mut self.frontier);
        let unit = context.unit(id);

        for cursor in unit.children(unit.root()) {
            let cursor_kind = unit.cursor_kind(cursor);
            if matches!(
                cursor_kind,
                CursorKind::MacroDefinition | CursorKind::MacroExpansion | CursorKind::InclusionDirective
            ) {
                continue;
            }
            let Some(source) = unit.cursor_location(cursor) else {
                continue;
            };
            if !source.is_main_file || is_ignored_path(options, &source.file_path) {
                continue;
            }
            if options.is_enabled_only_external_top_level_cursors
                && cursor_kind != CursorKind::EnumDecl
                && !unit.is_externally_visible(cursor)
            {
                continue;
            }

            visit_top_level_cursor(&mut context, id, cursor, cursor_kind);
        }
    }

    /// Headers named by the main file's inclusion directives, normalized and
    /// filtered.
    fn include_paths(&self, id: UnitId) -> Vec<PathBuf> {
        let unit = &self.units[id];
        unit.children(unit.root())
            .into_iter()
            .filter(|&cursor| unit.cursor_kind(cursor) == CursorKind::InclusionDirective)
            .filter(|&cursor| unit.cursor_location(cursor).is_some_and(|source| source.is_main_file))
            .filter_map(|cursor| {
                let is_angled = unit.tokens(cursor).iter().any(|token| token == "<");
                if is_angled && !self.options.is_enabled_system_declarations {
                    return None;
                }
                let path = normalize_path(&unit.included_file(cursor)?);
                if is_ignored_path(self.options, &path) {
                    debug!(path = %path.display(), "explore: include is in an ignored directory");
                    return None;
                }
                Some(path)
            })
            .collect()
    }

    // ── Frontier ─────────────────────────────────────────────────────

    fn explore_frontier(&mut self) -> Result<(), ExtractError> {
        for queue in Queue::ORDER {
            while let Some(item) = self.frontier.pop(queue) {
                let mut context = self.context();
                if let Some(node) = handlers::explore_node(&mut context, &item)? {
                    self.collected.push(node);
                }
            }
        }
        Ok(())
    }
}

fn visit_top_level_cursor<U: TranslationUnit>(
    context: &mut ExploreContext<'_, U>,
    id: UnitId,
    cursor: U::Cursor,
    cursor_kind: CursorKind,
) {
    let unit = context.unit(id);
    let name = unit.cursor_name(cursor);
    if name.starts_with('_') && !context.options().is_enabled_allow_names_with_prefixed_underscore {
        debug!(%name, "explore: skipped name with leading underscore");
        return;
    }

    let kind = match cursor_kind {
        CursorKind::FunctionDecl => NodeKind::Function,
        CursorKind::VarDecl => NodeKind::Variable,
        CursorKind::EnumDecl => NodeKind::Enum,
        CursorKind::TypedefDecl => NodeKind::TypeAlias,
        CursorKind::StructDecl => NodeKind::Struct,
        CursorKind::UnionDecl => NodeKind::Union,
        other => {
            error!(cursor_kind = ?other, %name, "explore: unexpected top-level cursor kind");
            return;
        }
    };
    let ty = unit.cursor_type(cursor);

    match kind {
        NodeKind::TypeAlias => {
            context.visit_type(id, ty, TypeSite::default());
        }
        NodeKind::Enum if unit.is_anonymous(cursor) => {
            let enum_info = context.create_info(kind, name, id, cursor, ty, None);
            let parent = ParentInfo {
                kind,
                name: String::new(),
                location: enum_info.location,
            };
            let integer_type = unit.enum_integer_type(cursor);
            for constant in unit.children(cursor) {
                if unit.cursor_kind(constant) != CursorKind::EnumConstantDecl {
                    continue;
                }
                let info = context.create_info(
                    NodeKind::EnumConstant,
                    unit.cursor_name(constant),
                    id,
                    constant,
                    integer_type,
                    Some(parent.clone()),
                );
                context.try_enqueue(info);
            }
        }
        NodeKind::Struct | NodeKind::Union if unit.is_anonymous(cursor) => {
            debug!("explore: skipped anonymous top-level record");
        }
        _ => {
            let opaque = context.options().opaque_type_names.contains(&name);
            let incomplete = matches!(unit.size_of(ty), Err(LayoutError::Incomplete));
            if matches!(kind, NodeKind::Struct | NodeKind::Union) && incomplete && !opaque {
                debug!(%name, "explore: skipped incomplete top-level record");
                return;
            }
            let kind = if opaque && matches!(kind, NodeKind::Struct | NodeKind::Union | NodeKind::Enum) {
                NodeKind::OpaqueType
            } else {
                kind
            };
            let info = context.create_info(kind, name, id, cursor, ty, None);
            context.try_enqueue(info);
        }
    }
}

/// Lexically normalize a path: drop `.` components and fold `..`.
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

// ---------------------------------------------------------------------------
// Collected
// ---------------------------------------------------------------------------

/// Nodes produced by handlers, per category, in discovery order.
#[derive(Debug, Default)]
struct Collected {
    variables: Vec<Variable>,
    functions: Vec<Function>,
    records: Vec<Record>,
    enums: Vec<Enum>,
    type_aliases: Vec<TypeAlias>,
    opaque_types: Vec<OpaqueType>,
    function_pointers: Vec<FunctionPointer>,
    enum_constants: Vec<EnumConstant>,
}

impl Collected {
    /// Structural nodes (pointers, arrays, primitives) are not kept.
    fn push(&mut self, node: Node) {
        match node {
            Node::Variable(n) => self.variables.push(n),
            Node::Function(n) => self.functions.push(n),
            Node::Record(n) => self.records.push(n),
            Node::Enum(n) => self.enums.push(n),
            Node::TypeAlias(n) => self.type_aliases.push(n),
            Node::OpaqueType(n) => self.opaque_types.push(n),
            Node::FunctionPointer(n) => self.function_pointers.push(n),
            Node::EnumConstant(n) => self.enum_constants.push(n),
            Node::MacroObject(_) | Node::Pointer(_) | Node::Array(_) | Node::Primitive(_) => {}
        }
    }

    fn into_nodes(self, macro_objects: Vec<MacroObject>) -> AstNodes {
        AstNodes {
            macro_objects: node_map(macro_objects),
            variables: node_map(self.variables),
            functions: node_map(self.functions),
            records: node_map(self.records),
            enums: node_map(self.enums),
            type_aliases: node_map(self.type_aliases),
            opaque_types: node_map(self.opaque_types),
            function_pointers: node_map(self.function_pointers),
            enum_constants: node_map(self.enum_constants),
        }
    }
}
