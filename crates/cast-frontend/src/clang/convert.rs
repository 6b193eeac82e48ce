//! Conversions between libclang's raw values and the adapter's closed kinds.

use std::ffi::CStr;

use cast_core::CallingConvention;
use clang_sys::*;

use crate::kinds::{CursorKind, DiagnosticSeverity, TypeKind};

/// Copy a libclang string and dispose of it.
pub(crate) fn cx_string_to_string(cx_string: CXString) -> String {
    unsafe {
        let c_str = clang_getCString(cx_string);
        let result = if c_str.is_null() {
            String::new()
        } else {
            CStr::from_ptr(c_str).to_string_lossy().into_owned()
        };
        clang_disposeString(cx_string);
        result
    }
}

#[allow(non_upper_case_globals)]
pub(crate) const fn cursor_kind(raw: CXCursorKind) -> CursorKind {
    match raw {
        CXCursor_TranslationUnit => CursorKind::TranslationUnit,
        CXCursor_StructDecl => CursorKind::StructDecl,
        CXCursor_UnionDecl => CursorKind::UnionDecl,
        CXCursor_EnumDecl => CursorKind::EnumDecl,
        CXCursor_FieldDecl => CursorKind::FieldDecl,
        CXCursor_EnumConstantDecl => CursorKind::EnumConstantDecl,
        CXCursor_FunctionDecl => CursorKind::FunctionDecl,
        CXCursor_VarDecl => CursorKind::VarDecl,
        CXCursor_ParmDecl => CursorKind::ParmDecl,
        CXCursor_TypedefDecl => CursorKind::TypedefDecl,
        CXCursor_CompoundStmt => CursorKind::CompoundStmt,
        CXCursor_DeclStmt => CursorKind::DeclStmt,
        CXCursor_MacroDefinition => CursorKind::MacroDefinition,
        CXCursor_MacroExpansion => CursorKind::MacroExpansion,
        CXCursor_InclusionDirective => CursorKind::InclusionDirective,
        other => CursorKind::Other(other),
    }
}

#[allow(non_upper_case_globals)]
pub(crate) const fn type_kind(raw: CXTypeKind) -> TypeKind {
    match raw {
        CXType_Invalid => TypeKind::Invalid,
        CXType_Unexposed => TypeKind::Unexposed,
        CXType_Void => TypeKind::Void,
        CXType_Bool => TypeKind::Bool,
        CXType_Char_U => TypeKind::CharU,
        CXType_UChar => TypeKind::UChar,
        CXType_Char16 => TypeKind::Char16,
        CXType_Char32 => TypeKind::Char32,
        CXType_UShort => TypeKind::UShort,
        CXType_UInt => TypeKind::UInt,
        CXType_ULong => TypeKind::ULong,
        CXType_ULongLong => TypeKind::ULongLong,
        CXType_UInt128 => TypeKind::UInt128,
        CXType_Char_S => TypeKind::CharS,
        CXType_SChar => TypeKind::SChar,
        CXType_WChar => TypeKind::WChar,
        CXType_Short => TypeKind::Short,
        CXType_Int => TypeKind::Int,
        CXType_Long => TypeKind::Long,
        CXType_LongLong => TypeKind::LongLong,
        CXType_Int128 => TypeKind::Int128,
        CXType_Half => TypeKind::Half,
        CXType_Float16 => TypeKind::Float16,
        CXType_Float => TypeKind::Float,
        CXType_Double => TypeKind::Double,
        CXType_LongDouble => TypeKind::LongDouble,
        CXType_Float128 => TypeKind::Float128,
        CXType_Complex => TypeKind::Complex,
        CXType_Pointer => TypeKind::Pointer,
        CXType_BlockPointer => TypeKind::BlockPointer,
        CXType_Record => TypeKind::Record,
        CXType_Enum => TypeKind::Enum,
        CXType_Typedef => TypeKind::Typedef,
        CXType_FunctionNoProto => TypeKind::FunctionNoProto,
        CXType_FunctionProto => TypeKind::FunctionProto,
        CXType_ConstantArray => TypeKind::ConstantArray,
        CXType_IncompleteArray => TypeKind::IncompleteArray,
        CXType_VariableArray => TypeKind::VariableArray,
        CXType_Vector => TypeKind::Vector,
        CXType_Elaborated => TypeKind::Elaborated,
        CXType_Attributed => TypeKind::Attributed,
        CXType_Auto => TypeKind::Auto,
        other => TypeKind::Other(other),
    }
}

#[allow(non_upper_case_globals)]
pub(crate) const fn diagnostic_severity(raw: CXDiagnosticSeverity) -> DiagnosticSeverity {
    match raw {
        CXDiagnostic_Note => DiagnosticSeverity::Note,
        CXDiagnostic_Warning => DiagnosticSeverity::Warning,
        CXDiagnostic_Error => DiagnosticSeverity::Error,
        CXDiagnostic_Fatal => DiagnosticSeverity::Fatal,
        _ => DiagnosticSeverity::Ignored,
    }
}

/// Explicit x86 conventions map through; every platform default is cdecl.
#[allow(non_upper_case_globals)]
pub(crate) const fn calling_convention(raw: CXCallingConv) -> CallingConvention {
    match raw {
        CXCallingConv_X86StdCall => CallingConvention::StdCall,
        CXCallingConv_X86FastCall => CallingConvention::FastCall,
        CXCallingConv_Invalid => CallingConvention::Unknown,
        _ => CallingConvention::Cdecl,
    }
}

#[allow(non_upper_case_globals)]
pub(crate) const fn parse_error_reason(code: CXErrorCode) -> &'static str {
    match code {
        CXError_Failure => "failure",
        CXError_Crashed => "crashed",
        CXError_InvalidArguments => "invalid arguments",
        CXError_ASTReadError => "AST read error",
        _ => "unknown",
    }
}
