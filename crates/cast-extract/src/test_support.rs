//! In-memory front end for engine tests.
//!
//! A [`FakeUnit`] is an arena of cursors and types built with small helpers
//! that compute C layouts the way a 64-bit target would. [`FakeFrontEnd`]
//! serves registered units by path and answers macro-program parses by
//! reading the synthesized file and attaching configured evaluations to the
//! declarations it finds.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use cast_core::CallingConvention;
use cast_frontend::{
    CursorKind, Diagnostic, DiagnosticSeverity, Evaluation, FrontEnd, FrontEndError, LayoutError,
    ParseFlags, ParseRequest, SourceLocation, TranslationUnit, TypeKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct FakeCursor(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct FakeType(usize);

pub(crate) const NULL_CURSOR: FakeCursor = FakeCursor(0);
const ROOT: FakeCursor = FakeCursor(1);
pub(crate) const INVALID_TYPE: FakeType = FakeType(0);

#[derive(Debug, Clone)]
pub(crate) struct CursorData {
    pub kind: CursorKind,
    pub name: String,
    pub ty: FakeType,
    pub location: Option<SourceLocation>,
    pub comment: Option<String>,
    pub children: Vec<FakeCursor>,
    pub externally_visible: bool,
    pub anonymous: bool,
    pub macro_builtin: bool,
    pub macro_function_like: bool,
    pub included_file: Option<PathBuf>,
    pub tokens: Vec<String>,
    pub evaluation: Evaluation,
    pub enum_integer_type: FakeType,
    pub enum_value: i64,
    pub underlying_type: FakeType,
    pub offset_bits: Option<i64>,
    pub arguments: Vec<FakeCursor>,
}

impl CursorData {
    pub(crate) fn new(kind: CursorKind) -> Self {
        Self {
            kind,
            name: String::new(),
            ty: INVALID_TYPE,
            location: None,
            comment: None,
            children: Vec::new(),
            externally_visible: false,
            anonymous: false,
            macro_builtin: false,
            macro_function_like: false,
            included_file: None,
            tokens: Vec::new(),
            evaluation: Evaluation::Other,
            enum_integer_type: INVALID_TYPE,
            enum_value: 0,
            underlying_type: INVALID_TYPE,
            offset_bits: None,
            arguments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TypeData {
    pub kind: TypeKind,
    pub name: String,
    pub canonical: Option<FakeType>,
    pub pointee: FakeType,
    pub element: FakeType,
    pub array_size: Option<i64>,
    pub size: Result<i64, LayoutError>,
    pub align: Result<i64, LayoutError>,
    pub is_const: bool,
    pub declaration: FakeCursor,
    pub result: FakeType,
    pub arguments: Vec<FakeType>,
    pub calling_convention: CallingConvention,
    /// Modified type of an attributed type, named type of an elaborated one.
    pub sugar_of: FakeType,
}

impl TypeData {
    pub(crate) fn new(kind: TypeKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            canonical: None,
            pointee: INVALID_TYPE,
            element: INVALID_TYPE,
            array_size: None,
            size: Err(LayoutError::Invalid),
            align: Err(LayoutError::Invalid),
            is_const: false,
            declaration: NULL_CURSOR,
            result: INVALID_TYPE,
            arguments: Vec::new(),
            calling_convention: CallingConvention::Cdecl,
            sugar_of: INVALID_TYPE,
        }
    }

    fn sized(mut self, size: i64, align: i64) -> Self {
        self.size = Ok(size);
        self.align = Ok(align);
        self
    }
}

fn align_up(value: i64, align: i64) -> i64 {
    (value + align - 1) / align * align
}

// ---------------------------------------------------------------------------
// FakeUnit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub(crate) struct FakeUnit {
    path: PathBuf,
    cursors: Vec<CursorData>,
    types: Vec<TypeData>,
    pub diagnostics: Vec<Diagnostic>,
    pub target_triple: Option<String>,
}

impl FakeUnit {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cursors: vec![
                CursorData::new(CursorKind::Other(0)),
                CursorData::new(CursorKind::TranslationUnit),
            ],
            types: vec![TypeData::new(TypeKind::Invalid, "")],
            diagnostics: Vec::new(),
            target_triple: Some("x86_64-unknown-linux-gnu".to_string()),
        }
    }

    pub(crate) fn add_cursor(&mut self, data: CursorData) -> FakeCursor {
        self.cursors.push(data);
        FakeCursor(self.cursors.len() - 1)
    }

    pub(crate) fn add_type(&mut self, data: TypeData) -> FakeType {
        self.types.push(data);
        FakeType(self.types.len() - 1)
    }

    pub(crate) fn cursor_mut(&mut self, cursor: FakeCursor) -> &mut CursorData {
        &mut self.cursors[cursor.0]
    }

    /// Append `cursor` to the translation unit's top-level children.
    pub(crate) fn top_level(&mut self, cursor: FakeCursor) {
        self.cursors[ROOT.0].children.push(cursor);
    }

    /// A location in this unit's own file.
    pub(crate) fn at(&self, line: u32, column: u32) -> SourceLocation {
        SourceLocation {
            file_path: self.path.clone(),
            line,
            column,
            is_system: false,
            is_main_file: true,
        }
    }

    /// Mark a declaration as coming from a system header.
    pub(crate) fn set_system(&mut self, cursor: FakeCursor) {
        if let Some(location) = self.cursors[cursor.0].location.as_mut() {
            location.is_system = true;
        }
    }

    pub(crate) fn error(&mut self, message: &str) {
        self.diagnostics.push(Diagnostic {
            severity: DiagnosticSeverity::Error,
            message: message.to_string(),
        });
    }

    pub(crate) fn declaration_of(&self, ty: FakeType) -> FakeCursor {
        self.types[ty.0].declaration
    }

    // ── Types ────────────────────────────────────────────────────────

    /// A builtin or otherwise self-canonical type with a size.
    pub(crate) fn scalar(&mut self, kind: TypeKind, name: &str, size: i64) -> FakeType {
        self.add_type(TypeData::new(kind, name).sized(size, size.max(1)))
    }

    pub(crate) fn int(&mut self) -> FakeType {
        self.scalar(TypeKind::Int, "int", 4)
    }

    pub(crate) fn pointer_to(&mut self, pointee: FakeType) -> FakeType {
        let pointee_name = self.types[pointee.0].name.clone();
        let mut data = TypeData::new(TypeKind::Pointer, &format!("{pointee_name} *")).sized(8, 8);
        data.pointee = pointee;
        self.add_type(data)
    }

    pub(crate) fn const_of(&mut self, ty: FakeType) -> FakeType {
        let mut data = self.types[ty.0].clone();
        data.name = format!("const {}", data.name);
        data.is_const = true;
        data.canonical = Some(ty);
        self.add_type(data)
    }

    pub(crate) fn array_of(&mut self, element: FakeType, count: i64) -> FakeType {
        let element_data = &self.types[element.0];
        let size = element_data.size.unwrap_or(0) * count;
        let align = element_data.align.unwrap_or(1);
        let mut data = TypeData::new(TypeKind::ConstantArray, &format!("{}[{count}]", element_data.name)).sized(size, align);
        data.element = element;
        data.array_size = Some(count);
        self.add_type(data)
    }

    pub(crate) fn function_type(&mut self, result: FakeType, arguments: &[FakeType]) -> FakeType {
        let mut data = TypeData::new(TypeKind::FunctionProto, &self.signature(result, arguments, " "));
        data.result = result;
        data.arguments = arguments.to_vec();
        self.add_type(data)
    }

    pub(crate) fn function_pointer(&mut self, result: FakeType, arguments: &[FakeType]) -> FakeType {
        let function = self.function_type(result, arguments);
        let mut data = TypeData::new(TypeKind::Pointer, &self.signature(result, arguments, " (*)")).sized(8, 8);
        data.pointee = function;
        self.add_type(data)
    }

    fn signature(&self, result: FakeType, arguments: &[FakeType], middle: &str) -> String {
        let arguments: Vec<&str> = arguments.iter().map(|a| self.types[a.0].name.as_str()).collect();
        format!("{}{middle}({})", self.types[result.0].name, arguments.join(", "))
    }

    /// A complete struct or union with laid-out fields. The declaration is
    /// not added to the top level.
    pub(crate) fn record(
        &mut self,
        kind: CursorKind,
        name: Option<&str>,
        line: u32,
        fields: &[(&str, FakeType)],
    ) -> FakeType {
        let keyword = if kind == CursorKind::UnionDecl { "union" } else { "struct" };
        let spelling = name.map_or_else(
            || format!("{keyword} (unnamed at {}:{line}:1)", self.path.display()),
            |name| format!("{keyword} {name}"),
        );

        let mut offset = 0_i64;
        let mut size = 0_i64;
        let mut max_align = 1_i64;
        let mut field_cursors = Vec::new();
        for (index, (field_name, field_type)) in fields.iter().enumerate() {
            let field_size = self.types[field_type.0].size.unwrap_or(0);
            let field_align = self.types[field_type.0].align.unwrap_or(1);
            max_align = max_align.max(field_align);
            let field_offset = if kind == CursorKind::UnionDecl {
                0
            } else {
                align_up(offset, field_align)
            };
            offset = field_offset + field_size;
            size = size.max(offset);

            let mut field = CursorData::new(CursorKind::FieldDecl);
            field.name = (*field_name).to_string();
            field.ty = *field_type;
            field.offset_bits = Some(field_offset * 8);
            field.location = Some(self.at(line + 1 + u32::try_from(index).unwrap(), 5));
            field_cursors.push(self.add_cursor(field));
        }
        let size = align_up(size, max_align);

        let ty = self.add_type(TypeData::new(TypeKind::Record, &spelling).sized(size, max_align));
        let mut declaration = CursorData::new(kind);
        declaration.name = name.unwrap_or_default().to_string();
        declaration.ty = ty;
        declaration.anonymous = name.is_none();
        declaration.externally_visible = true;
        declaration.location = Some(self.at(line, 1));
        declaration.children = field_cursors;
        let declaration = self.add_cursor(declaration);
        self.types[ty.0].declaration = declaration;
        ty
    }

    /// `struct name;` without a definition.
    pub(crate) fn forward_record(&mut self, name: &str, line: u32) -> FakeType {
        let mut data = TypeData::new(TypeKind::Record, &format!("struct {name}"));
        data.size = Err(LayoutError::Incomplete);
        data.align = Err(LayoutError::Incomplete);
        let ty = self.add_type(data);
        let mut declaration = CursorData::new(CursorKind::StructDecl);
        declaration.name = name.to_string();
        declaration.ty = ty;
        declaration.externally_visible = true;
        declaration.location = Some(self.at(line, 1));
        let declaration = self.add_cursor(declaration);
        self.types[ty.0].declaration = declaration;
        ty
    }

    pub(crate) fn enumeration(&mut self, name: Option<&str>, line: u32, values: &[(&str, i64)]) -> FakeType {
        let integer = self.scalar(TypeKind::UInt, "unsigned int", 4);
        let spelling = name.map_or_else(
            || format!("enum (unnamed at {}:{line}:1)", self.path.display()),
            |name| format!("enum {name}"),
        );
        let ty = self.add_type(TypeData::new(TypeKind::Enum, &spelling).sized(4, 4));

        let mut constants = Vec::new();
        for (index, (constant_name, value)) in values.iter().enumerate() {
            let mut constant = CursorData::new(CursorKind::EnumConstantDecl);
            constant.name = (*constant_name).to_string();
            constant.ty = integer;
            constant.enum_value = *value;
            constant.location = Some(self.at(line + 1 + u32::try_from(index).unwrap(), 5));
            constants.push(self.add_cursor(constant));
        }

        let mut declaration = CursorData::new(CursorKind::EnumDecl);
        declaration.name = name.unwrap_or_default().to_string();
        declaration.ty = ty;
        declaration.anonymous = name.is_none();
        declaration.enum_integer_type = integer;
        declaration.location = Some(self.at(line, 1));
        declaration.children = constants;
        let declaration = self.add_cursor(declaration);
        self.types[ty.0].declaration = declaration;
        ty
    }

    /// `typedef <underlying> name;`. The declaration is not added to the top level.
    pub(crate) fn typedef(&mut self, name: &str, underlying: FakeType, line: u32) -> FakeType {
        let underlying_data = &self.types[underlying.0];
        let mut data = TypeData::new(TypeKind::Typedef, name);
        data.size = underlying_data.size;
        data.align = underlying_data.align;
        data.canonical = Some(underlying_data.canonical.unwrap_or(underlying));
        let ty = self.add_type(data);

        let mut declaration = CursorData::new(CursorKind::TypedefDecl);
        declaration.name = name.to_string();
        declaration.ty = ty;
        declaration.underlying_type = underlying;
        declaration.externally_visible = true;
        declaration.location = Some(self.at(line, 1));
        let declaration = self.add_cursor(declaration);
        self.types[ty.0].declaration = declaration;
        ty
    }

    /// An elaborated use such as `struct Point` naming `named`.
    pub(crate) fn elaborated(&mut self, named: FakeType) -> FakeType {
        let mut data = self.types[named.0].clone();
        data.kind = TypeKind::Elaborated;
        data.canonical = Some(named);
        data.sugar_of = named;
        data.declaration = NULL_CURSOR;
        self.add_type(data)
    }

    // ── Top-level declarations ──────────────────────────────────────

    /// Add the declaration of a record, enum, or typedef type to the top level.
    pub(crate) fn declare(&mut self, ty: FakeType) -> FakeCursor {
        let declaration = self.declaration_of(ty);
        self.top_level(declaration);
        declaration
    }

    pub(crate) fn function(&mut self, name: &str, line: u32, result: FakeType, parameters: &[(&str, FakeType)]) -> FakeCursor {
        let argument_types: Vec<FakeType> = parameters.iter().map(|(_, ty)| *ty).collect();
        let ty = self.function_type(result, &argument_types);

        let mut arguments = Vec::new();
        for (index, (parameter_name, parameter_type)) in parameters.iter().enumerate() {
            let mut parameter = CursorData::new(CursorKind::ParmDecl);
            parameter.name = (*parameter_name).to_string();
            parameter.ty = *parameter_type;
            parameter.location = Some(self.at(line, 20 + 10 * u32::try_from(index).unwrap()));
            arguments.push(self.add_cursor(parameter));
        }

        let mut function = CursorData::new(CursorKind::FunctionDecl);
        function.name = name.to_string();
        function.ty = ty;
        function.externally_visible = true;
        function.location = Some(self.at(line, 1));
        function.children.clone_from(&arguments);
        function.arguments = arguments;
        let function = self.add_cursor(function);
        self.top_level(function);
        function
    }

    pub(crate) fn variable(&mut self, name: &str, ty: FakeType, line: u32) -> FakeCursor {
        let mut variable = CursorData::new(CursorKind::VarDecl);
        variable.name = name.to_string();
        variable.ty = ty;
        variable.externally_visible = true;
        variable.location = Some(self.at(line, 1));
        let variable = self.add_cursor(variable);
        self.top_level(variable);
        variable
    }

    /// `#define name <replacement>`; `replacement` excludes the name.
    pub(crate) fn macro_definition(&mut self, name: &str, replacement: &[&str], line: u32) -> FakeCursor {
        let mut definition = CursorData::new(CursorKind::MacroDefinition);
        definition.name = name.to_string();
        definition.location = Some(self.at(line, 9));
        definition.tokens = std::iter::once(name)
            .chain(replacement.iter().copied())
            .map(ToString::to_string)
            .collect();
        let definition = self.add_cursor(definition);
        self.top_level(definition);
        definition
    }

    pub(crate) fn include(&mut self, path: &str, angled: bool, line: u32) -> FakeCursor {
        let mut directive = CursorData::new(CursorKind::InclusionDirective);
        let file_name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        directive.name = file_name.clone();
        directive.location = Some(self.at(line, 1));
        directive.included_file = Some(PathBuf::from(path));
        directive.tokens = if angled {
            vec!["#".into(), "include".into(), "<".into(), file_name, ">".into()]
        } else {
            vec!["#".into(), "include".into(), format!("\"{file_name}\"")]
        };
        let directive = self.add_cursor(directive);
        self.top_level(directive);
        directive
    }
}

impl TranslationUnit for FakeUnit {
    type Cursor = FakeCursor;
    type Type = FakeType;

    fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.clone()
    }

    fn target_triple(&self) -> Option<String> {
        self.target_triple.clone()
    }

    fn root(&self) -> FakeCursor {
        ROOT
    }

    fn children(&self, cursor: FakeCursor) -> Vec<FakeCursor> {
        self.cursors[cursor.0].children.clone()
    }

    fn is_null_cursor(&self, cursor: FakeCursor) -> bool {
        cursor == NULL_CURSOR
    }

    fn cursor_kind(&self, cursor: FakeCursor) -> CursorKind {
        self.cursors[cursor.0].kind
    }

    fn cursor_name(&self, cursor: FakeCursor) -> String {
        self.cursors[cursor.0].name.clone()
    }

    fn cursor_type(&self, cursor: FakeCursor) -> FakeType {
        self.cursors[cursor.0].ty
    }

    fn cursor_location(&self, cursor: FakeCursor) -> Option<SourceLocation> {
        self.cursors[cursor.0].location.clone()
    }

    fn cursor_comment(&self, cursor: FakeCursor) -> Option<String> {
        self.cursors[cursor.0].comment.clone()
    }

    fn is_externally_visible(&self, cursor: FakeCursor) -> bool {
        self.cursors[cursor.0].externally_visible
    }

    fn is_anonymous(&self, cursor: FakeCursor) -> bool {
        self.cursors[cursor.0].anonymous
    }

    fn is_macro_builtin(&self, cursor: FakeCursor) -> bool {
        self.cursors[cursor.0].macro_builtin
    }

    fn is_macro_function_like(&self, cursor: FakeCursor) -> bool {
        self.cursors[cursor.0].macro_function_like
    }

    fn included_file(&self, cursor: FakeCursor) -> Option<PathBuf> {
        self.cursors[cursor.0].included_file.clone()
    }

    fn tokens(&self, cursor: FakeCursor) -> Vec<String> {
        self.cursors[cursor.0].tokens.clone()
    }

    fn evaluate(&self, cursor: FakeCursor) -> Evaluation {
        self.cursors[cursor.0].evaluation.clone()
    }

    fn enum_integer_type(&self, cursor: FakeCursor) -> FakeType {
        self.cursors[cursor.0].enum_integer_type
    }

    fn enum_constant_value(&self, cursor: FakeCursor) -> i64 {
        self.cursors[cursor.0].enum_value
    }

    fn typedef_underlying_type(&self, cursor: FakeCursor) -> FakeType {
        self.cursors[cursor.0].underlying_type
    }

    fn field_offset_bits(&self, cursor: FakeCursor) -> Option<i64> {
        self.cursors[cursor.0].offset_bits
    }

    fn arguments(&self, cursor: FakeCursor) -> Vec<FakeCursor> {
        self.cursors[cursor.0].arguments.clone()
    }

    fn type_kind(&self, ty: FakeType) -> TypeKind {
        self.types[ty.0].kind
    }

    fn type_name(&self, ty: FakeType) -> String {
        self.types[ty.0].name.clone()
    }

    fn canonical_type(&self, ty: FakeType) -> FakeType {
        self.types[ty.0].canonical.unwrap_or(ty)
    }

    fn pointee_type(&self, ty: FakeType) -> FakeType {
        self.types[ty.0].pointee
    }

    fn element_type(&self, ty: FakeType) -> FakeType {
        self.types[ty.0].element
    }

    fn array_size(&self, ty: FakeType) -> Option<i64> {
        self.types[ty.0].array_size
    }

    fn modified_type(&self, ty: FakeType) -> FakeType {
        self.types[ty.0].sugar_of
    }

    fn named_type(&self, ty: FakeType) -> FakeType {
        self.types[ty.0].sugar_of
    }

    fn size_of(&self, ty: FakeType) -> Result<i64, LayoutError> {
        self.types[ty.0].size
    }

    fn align_of(&self, ty: FakeType) -> Result<i64, LayoutError> {
        self.types[ty.0].align
    }

    fn is_const(&self, ty: FakeType) -> bool {
        self.types[ty.0].is_const
    }

    fn type_declaration(&self, ty: FakeType) -> FakeCursor {
        self.types[ty.0].declaration
    }

    fn result_type(&self, ty: FakeType) -> FakeType {
        self.types[ty.0].result
    }

    fn argument_types(&self, ty: FakeType) -> Vec<FakeType> {
        self.types[ty.0].arguments.clone()
    }

    fn calling_convention(&self, ty: FakeType) -> CallingConvention {
        self.types[ty.0].calling_convention
    }
}

// ---------------------------------------------------------------------------
// FakeFrontEnd
// ---------------------------------------------------------------------------

/// libclang's `CXCursor_UnexposedExpr`.
const UNEXPOSED_EXPR: i32 = 100;

/// How a macro evaluates in the macro program.
#[derive(Debug, Clone)]
pub(crate) struct MacroValue {
    pub evaluation: Evaluation,
    pub type_kind: TypeKind,
    pub type_name: String,
    pub size: i64,
}

/// A parse the front end was asked for.
#[derive(Debug, Clone)]
pub(crate) struct Request {
    pub file_path: PathBuf,
    pub arguments: Vec<String>,
    pub flags: ParseFlags,
}

#[derive(Debug, Default)]
pub(crate) struct FakeFrontEnd {
    units: HashMap<PathBuf, FakeUnit>,
    macro_values: HashMap<String, MacroValue>,
    pub requests: RefCell<Vec<Request>>,
    /// Source text of every macro program parsed.
    pub macro_programs: RefCell<Vec<String>>,
}

impl FakeFrontEnd {
    pub(crate) fn with_unit(mut self, unit: FakeUnit) -> Self {
        self.units.insert(unit.path.clone(), unit);
        self
    }

    pub(crate) fn with_macro(mut self, name: &str, evaluation: Evaluation, type_kind: TypeKind, type_name: &str, size: i64) -> Self {
        self.macro_values.insert(
            name.to_string(),
            MacroValue {
                evaluation,
                type_kind,
                type_name: type_name.to_string(),
                size,
            },
        );
        self
    }

    pub(crate) fn parsed_paths(&self) -> Vec<PathBuf> {
        self.requests
            .borrow()
            .iter()
            .map(|request| request.file_path.clone())
            .collect()
    }

    fn macro_program(&self, path: &Path) -> Result<FakeUnit, FrontEndError> {
        let source = std::fs::read_to_string(path).map_err(|_| FrontEndError::ParseFailed {
            path: path.to_path_buf(),
            code: 1,
            reason: "failure",
        })?;
        self.macro_programs.borrow_mut().push(source.clone());

        let mut unit = FakeUnit::new(path);
        let int = unit.int();
        let main_type = unit.function_type(int, &[]);
        let body = unit.add_cursor(CursorData::new(CursorKind::CompoundStmt));
        let mut main_line = 1;

        for (index, line) in source.lines().enumerate() {
            let number = u32::try_from(index + 1).unwrap();
            if line.starts_with("int main") {
                main_line = number;
            }
            let Some(rest) = line.trim_start().strip_prefix("auto variable_") else {
                continue;
            };
            let name = rest.split(" = ").next().unwrap_or_default();
            let value = self.macro_values.get(name).cloned().unwrap_or(MacroValue {
                evaluation: Evaluation::Unexposed,
                type_kind: TypeKind::Int,
                type_name: "int".to_string(),
                size: 4,
            });

            // `auto` hides the initializer's type behind a deduced one.
            let ty = unit.scalar(value.type_kind, &value.type_name, value.size);
            let mut deduced = TypeData::new(TypeKind::Auto, "auto").sized(value.size, value.size.max(1));
            deduced.canonical = Some(ty);
            let deduced = unit.add_type(deduced);

            let mut initializer = CursorData::new(CursorKind::Other(UNEXPOSED_EXPR));
            initializer.ty = ty;
            initializer.location = Some(unit.at(number, 26));
            initializer.evaluation = value.evaluation;
            let initializer = unit.add_cursor(initializer);

            let mut variable = CursorData::new(CursorKind::VarDecl);
            variable.name = format!("variable_{name}");
            variable.ty = deduced;
            variable.location = Some(unit.at(number, 7));
            variable.children = vec![initializer];
            let variable = unit.add_cursor(variable);

            let mut statement = CursorData::new(CursorKind::DeclStmt);
            statement.children = vec![variable];
            let statement = unit.add_cursor(statement);
            unit.cursor_mut(body).children.push(statement);
        }

        let mut main = CursorData::new(CursorKind::FunctionDecl);
        main.name = "main".to_string();
        main.ty = main_type;
        main.location = Some(unit.at(main_line, 5));
        main.children = vec![body];
        let main = unit.add_cursor(main);
        unit.top_level(main);
        Ok(unit)
    }
}

impl FrontEnd for FakeFrontEnd {
    type Unit = FakeUnit;

    fn parse(&self, request: &ParseRequest<'_>) -> Result<FakeUnit, FrontEndError> {
        self.requests.borrow_mut().push(Request {
            file_path: request.file_path.to_path_buf(),
            arguments: request.arguments.to_vec(),
            flags: request.flags,
        });

        if let Some(unit) = self.units.get(request.file_path) {
            return Ok(unit.clone());
        }
        if request.arguments.iter().any(|argument| argument == "--language=c++") {
            return self.macro_program(request.file_path);
        }
        Err(FrontEndError::ParseFailed {
            path: request.file_path.to_path_buf(),
            code: 1,
            reason: "failure",
        })
    }
}
