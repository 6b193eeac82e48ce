//! libclang implementation of the front-end traits.

mod convert;
pub mod library;

use std::ffi::{CStr, CString, c_int, c_uint};
use std::path::{Path, PathBuf};
use std::ptr;
use std::rc::Rc;

use cast_core::CallingConvention;
use clang_sys::*;

use crate::error::FrontEndError;
use crate::kinds::{CursorKind, Evaluation, LayoutError, TypeKind};
use crate::unit::{Diagnostic, FrontEnd, ParseRequest, SourceLocation, TranslationUnit};
use convert::cx_string_to_string;

/// Owns a libclang index; translation units keep it alive.
struct Index(CXIndex);

impl Drop for Index {
    fn drop(&mut self) {
        unsafe { clang_disposeIndex(self.0) };
    }
}

/// Front end backed by libclang.
///
/// libclang is loaded per thread by `clang-sys`, so a front end is used on the
/// thread that created it.
pub struct ClangFrontEnd {
    index: Rc<Index>,
}

impl ClangFrontEnd {
    /// Load libclang (optionally from `library_path`) and create an index.
    pub fn new(library_path: Option<&Path>) -> Result<Self, FrontEndError> {
        library::load(library_path)?;
        let index = unsafe { clang_createIndex(0, 0) };
        if index.is_null() {
            return Err(FrontEndError::IndexCreation);
        }
        Ok(Self {
            index: Rc::new(Index(index)),
        })
    }
}

impl FrontEnd for ClangFrontEnd {
    type Unit = ClangTranslationUnit;

    fn parse(&self, request: &ParseRequest<'_>) -> Result<ClangTranslationUnit, FrontEndError> {
        let path_text = request.file_path.to_string_lossy();
        let c_path = CString::new(path_text.as_bytes())
            .map_err(|_| FrontEndError::InvalidArgument(path_text.to_string()))?;
        let c_arguments = request
            .arguments
            .iter()
            .map(|argument| {
                CString::new(argument.as_bytes())
                    .map_err(|_| FrontEndError::InvalidArgument(argument.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let argument_pointers: Vec<*const std::ffi::c_char> =
            c_arguments.iter().map(|a| a.as_ptr()).collect();

        let mut flags = CXTranslationUnit_DetailedPreprocessingRecord
            | CXTranslationUnit_IncludeAttributedTypes
            | CXTranslationUnit_VisitImplicitAttributes
            | CXTranslationUnit_IgnoreNonErrorsFromIncludedFiles;
        if request.flags.skip_function_bodies {
            flags |= CXTranslationUnit_SkipFunctionBodies;
        }
        if request.flags.keep_going {
            flags |= CXTranslationUnit_KeepGoing;
        }

        let argument_count = c_int::try_from(argument_pointers.len())
            .map_err(|_| FrontEndError::InvalidArgument("too many arguments".to_string()))?;

        let mut raw: CXTranslationUnit = ptr::null_mut();
        let code = unsafe {
            clang_parseTranslationUnit2(
                self.index.0,
                c_path.as_ptr(),
                argument_pointers.as_ptr(),
                argument_count,
                ptr::null_mut(),
                0,
                flags,
                &mut raw,
            )
        };

        if code != CXError_Success || raw.is_null() {
            return Err(FrontEndError::ParseFailed {
                path: request.file_path.to_path_buf(),
                code,
                reason: convert::parse_error_reason(code),
            });
        }

        Ok(ClangTranslationUnit {
            raw,
            _index: Rc::clone(&self.index),
        })
    }
}

/// A libclang translation unit, disposed on drop.
pub struct ClangTranslationUnit {
    raw: CXTranslationUnit,
    _index: Rc<Index>,
}

impl Drop for ClangTranslationUnit {
    fn drop(&mut self) {
        unsafe { clang_disposeTranslationUnit(self.raw) };
    }
}

extern "C" fn collect_children(
    child: CXCursor,
    _parent: CXCursor,
    data: CXClientData,
) -> CXChildVisitResult {
    unsafe {
        let children = &mut *data.cast::<Vec<CXCursor>>();
        if clang_Cursor_isNull(child) == 0 {
            children.push(child);
        }
    }
    CXChildVisit_Continue
}

fn layout(value: i64) -> Result<i64, LayoutError> {
    if value < 0 {
        Err(LayoutError::from_code(value))
    } else {
        Ok(value)
    }
}

fn file_name(file: CXFile) -> Option<PathBuf> {
    if file.is_null() {
        return None;
    }
    let name = cx_string_to_string(unsafe { clang_getFileName(file) });
    (!name.is_empty()).then(|| PathBuf::from(name))
}

impl TranslationUnit for ClangTranslationUnit {
    type Cursor = CXCursor;
    type Type = CXType;

    fn diagnostics(&self) -> Vec<Diagnostic> {
        unsafe {
            let count = clang_getNumDiagnostics(self.raw);
            let options = clang_defaultDiagnosticDisplayOptions();
            (0..count)
                .map(|i| {
                    let diagnostic = clang_getDiagnostic(self.raw, i);
                    let severity = convert::diagnostic_severity(clang_getDiagnosticSeverity(diagnostic));
                    let message = cx_string_to_string(clang_formatDiagnostic(diagnostic, options));
                    clang_disposeDiagnostic(diagnostic);
                    Diagnostic { severity, message }
                })
                .collect()
        }
    }

    fn target_triple(&self) -> Option<String> {
        unsafe {
            let info = clang_getTranslationUnitTargetInfo(self.raw);
            if info.is_null() {
                return None;
            }
            let triple = cx_string_to_string(clang_TargetInfo_getTriple(info));
            clang_TargetInfo_dispose(info);
            (!triple.is_empty()).then_some(triple)
        }
    }

    // ── Cursors ──────────────────────────────────────────────────────────

    fn root(&self) -> CXCursor {
        unsafe { clang_getTranslationUnitCursor(self.raw) }
    }

    fn children(&self, cursor: CXCursor) -> Vec<CXCursor> {
        let mut children: Vec<CXCursor> = Vec::new();
        unsafe {
            clang_visitChildren(
                cursor,
                collect_children,
                ptr::from_mut(&mut children).cast(),
            );
        }
        children
    }

    fn is_null_cursor(&self, cursor: CXCursor) -> bool {
        unsafe { clang_Cursor_isNull(cursor) != 0 }
    }

    fn cursor_kind(&self, cursor: CXCursor) -> CursorKind {
        convert::cursor_kind(unsafe { clang_getCursorKind(cursor) })
    }

    fn cursor_name(&self, cursor: CXCursor) -> String {
        cx_string_to_string(unsafe { clang_getCursorSpelling(cursor) })
    }

    fn cursor_type(&self, cursor: CXCursor) -> CXType {
        unsafe { clang_getCursorType(cursor) }
    }

    fn cursor_location(&self, cursor: CXCursor) -> Option<SourceLocation> {
        unsafe {
            let location = clang_getCursorLocation(cursor);
            let mut file: CXFile = ptr::null_mut();
            let mut line: c_uint = 0;
            let mut column: c_uint = 0;
            clang_getFileLocation(location, &mut file, &mut line, &mut column, ptr::null_mut());
            let file_path = file_name(file)?;
            Some(SourceLocation {
                file_path,
                line,
                column,
                is_system: clang_Location_isInSystemHeader(location) != 0,
                is_main_file: clang_Location_isFromMainFile(location) != 0,
            })
        }
    }

    fn cursor_comment(&self, cursor: CXCursor) -> Option<String> {
        let comment = cx_string_to_string(unsafe { clang_Cursor_getRawCommentText(cursor) });
        (!comment.is_empty()).then_some(comment)
    }

    fn is_externally_visible(&self, cursor: CXCursor) -> bool {
        unsafe {
            clang_getCursorLinkage(cursor) == CXLinkage_External
                && clang_getCursorVisibility(cursor) == CXVisibility_Default
        }
    }

    fn is_anonymous(&self, cursor: CXCursor) -> bool {
        if unsafe { clang_Cursor_isAnonymous(cursor) } != 0 {
            return true;
        }
        let name = self.cursor_name(cursor);
        name.is_empty() || name.contains("(anonymous") || name.contains("(unnamed")
    }

    fn is_macro_builtin(&self, cursor: CXCursor) -> bool {
        unsafe { clang_Cursor_isMacroBuiltin(cursor) != 0 }
    }

    fn is_macro_function_like(&self, cursor: CXCursor) -> bool {
        unsafe { clang_Cursor_isMacroFunctionLike(cursor) != 0 }
    }

    fn included_file(&self, cursor: CXCursor) -> Option<PathBuf> {
        file_name(unsafe { clang_getIncludedFile(cursor) })
    }

    fn tokens(&self, cursor: CXCursor) -> Vec<String> {
        unsafe {
            let extent = clang_getCursorExtent(cursor);
            let mut tokens: *mut CXToken = ptr::null_mut();
            let mut count: c_uint = 0;
            clang_tokenize(self.raw, extent, &mut tokens, &mut count);
            if tokens.is_null() {
                return Vec::new();
            }
            let spellings = (0..count as usize)
                .map(|i| cx_string_to_string(clang_getTokenSpelling(self.raw, *tokens.add(i))))
                .collect();
            clang_disposeTokens(self.raw, tokens, count);
            spellings
        }
    }

    #[allow(non_upper_case_globals)]
    fn evaluate(&self, cursor: CXCursor) -> Evaluation {
        unsafe {
            let result = clang_Cursor_Evaluate(cursor);
            if result.is_null() {
                return Evaluation::Unexposed;
            }
            let evaluation = match clang_EvalResult_getKind(result) {
                CXEval_Int => Evaluation::Integer {
                    signed: clang_EvalResult_getAsLongLong(result),
                    unsigned: clang_EvalResult_getAsUnsigned(result),
                },
                CXEval_Float => Evaluation::Float(clang_EvalResult_getAsDouble(result)),
                CXEval_StrLiteral | CXEval_CFStr | CXEval_ObjCStrLiteral => {
                    let text = clang_EvalResult_getAsStr(result);
                    if text.is_null() {
                        Evaluation::Other
                    } else {
                        Evaluation::String(CStr::from_ptr(text).to_string_lossy().into_owned())
                    }
                }
                CXEval_UnExposed => Evaluation::Unexposed,
                _ => Evaluation::Other,
            };
            clang_EvalResult_dispose(result);
            evaluation
        }
    }

    fn enum_integer_type(&self, cursor: CXCursor) -> CXType {
        unsafe { clang_getEnumDeclIntegerType(cursor) }
    }

    fn enum_constant_value(&self, cursor: CXCursor) -> i64 {
        unsafe { clang_getEnumConstantDeclValue(cursor) }
    }

    fn typedef_underlying_type(&self, cursor: CXCursor) -> CXType {
        unsafe { clang_getTypedefDeclUnderlyingType(cursor) }
    }

    fn field_offset_bits(&self, cursor: CXCursor) -> Option<i64> {
        let offset = unsafe { clang_Cursor_getOffsetOfField(cursor) };
        (offset >= 0).then_some(offset)
    }

    fn arguments(&self, cursor: CXCursor) -> Vec<CXCursor> {
        unsafe {
            let count = u32::try_from(clang_Cursor_getNumArguments(cursor)).unwrap_or(0);
            (0..count).map(|i| clang_Cursor_getArgument(cursor, i)).collect()
        }
    }

    // ── Types ────────────────────────────────────────────────────────────

    fn type_kind(&self, ty: CXType) -> TypeKind {
        convert::type_kind(ty.kind)
    }

    fn type_name(&self, ty: CXType) -> String {
        cx_string_to_string(unsafe { clang_getTypeSpelling(ty) })
    }

    fn canonical_type(&self, ty: CXType) -> CXType {
        unsafe { clang_getCanonicalType(ty) }
    }

    fn pointee_type(&self, ty: CXType) -> CXType {
        unsafe { clang_getPointeeType(ty) }
    }

    fn element_type(&self, ty: CXType) -> CXType {
        unsafe { clang_getArrayElementType(ty) }
    }

    fn array_size(&self, ty: CXType) -> Option<i64> {
        let size = unsafe { clang_getArraySize(ty) };
        (size >= 0).then_some(size)
    }

    fn modified_type(&self, ty: CXType) -> CXType {
        unsafe { clang_Type_getModifiedType(ty) }
    }

    fn named_type(&self, ty: CXType) -> CXType {
        unsafe { clang_Type_getNamedType(ty) }
    }

    fn size_of(&self, ty: CXType) -> Result<i64, LayoutError> {
        layout(unsafe { clang_Type_getSizeOf(ty) })
    }

    fn align_of(&self, ty: CXType) -> Result<i64, LayoutError> {
        layout(unsafe { clang_Type_getAlignOf(ty) })
    }

    fn is_const(&self, ty: CXType) -> bool {
        unsafe { clang_isConstQualifiedType(ty) != 0 }
    }

    fn type_declaration(&self, ty: CXType) -> CXCursor {
        unsafe { clang_getTypeDeclaration(ty) }
    }

    fn result_type(&self, ty: CXType) -> CXType {
        unsafe { clang_getResultType(ty) }
    }

    fn argument_types(&self, ty: CXType) -> Vec<CXType> {
        unsafe {
            let count = u32::try_from(clang_getNumArgTypes(ty)).unwrap_or(0);
            (0..count).map(|i| clang_getArgType(ty, i)).collect()
        }
    }

    fn calling_convention(&self, ty: CXType) -> CallingConvention {
        convert::calling_convention(unsafe { clang_getFunctionTypeCallingConv(ty) })
    }
}
