//! Result shapes of the host language service.
//!
//! These mirror the TypeScript language service records the host expects.
//! Field names serialize in camelCase so a bridge can hand them over as JSON.

use serde::Serialize;

/// Source name attached to every diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "styled-css";

/// Error code used when the engine supplies no numeric code.
pub const DEFAULT_ERROR_CODE: i32 = 9999;

/// Kind modifier attached to every completion entry.
pub const DECLARE_MODIFIER: &str = "declare";

/// Host element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScriptElementKind {
    #[serde(rename = "method")]
    MemberFunction,
    #[serde(rename = "function")]
    Function,
    #[serde(rename = "constructor")]
    Constructor,
    #[serde(rename = "var")]
    Variable,
    #[serde(rename = "class")]
    Class,
    #[serde(rename = "interface")]
    Interface,
    #[serde(rename = "module")]
    Module,
    #[serde(rename = "property")]
    MemberVariable,
    #[serde(rename = "const")]
    Const,
    #[serde(rename = "enum")]
    Enum,
    #[serde(rename = "keyword")]
    Keyword,
    #[serde(rename = "alias")]
    Alias,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "")]
    Unknown,
}

impl ScriptElementKind {
    /// The host's string for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptElementKind::MemberFunction => "method",
            ScriptElementKind::Function => "function",
            ScriptElementKind::Constructor => "constructor",
            ScriptElementKind::Variable => "var",
            ScriptElementKind::Class => "class",
            ScriptElementKind::Interface => "interface",
            ScriptElementKind::Module => "module",
            ScriptElementKind::MemberVariable => "property",
            ScriptElementKind::Const => "const",
            ScriptElementKind::Enum => "enum",
            ScriptElementKind::Keyword => "keyword",
            ScriptElementKind::Alias => "alias",
            ScriptElementKind::String => "string",
            ScriptElementKind::Unknown => "",
        }
    }
}

/// Host diagnostic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

/// A span of text in the template's offset space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

impl TextSpan {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }
}

/// One piece of rendered documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolDisplayPart {
    pub text: String,
    pub kind: String,
}

impl SymbolDisplayPart {
    /// A part of kind `"text"`.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntry {
    pub name: String,
    pub kind: ScriptElementKind,
    pub kind_modifiers: String,
    pub sort_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionInfo {
    pub is_global_completion: bool,
    pub is_member_completion: bool,
    pub is_new_identifier_location: bool,
    pub entries: Vec<CompletionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntryDetails {
    pub name: String,
    pub kind: ScriptElementKind,
    pub kind_modifiers: String,
    pub display_parts: Vec<SymbolDisplayPart>,
    pub documentation: Vec<SymbolDisplayPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickInfo {
    pub kind: ScriptElementKind,
    pub kind_modifiers: String,
    pub text_span: TextSpan,
    pub display_parts: Vec<SymbolDisplayPart>,
    pub documentation: Vec<SymbolDisplayPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Name of the file the template lives in.
    pub file: String,
    pub start: usize,
    pub length: usize,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: i32,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutliningSpanKind {
    Comment,
    Region,
    Code,
    Imports,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutliningSpan {
    pub text_span: TextSpan,
    pub hint_span: TextSpan,
    pub banner_text: String,
    pub auto_collapse: bool,
    pub kind: OutliningSpanKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextChange {
    pub span: TextSpan,
    pub new_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTextChanges {
    pub file_name: String,
    pub text_changes: Vec<TextChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFixAction {
    pub fix_name: String,
    pub description: String,
    pub changes: Vec<FileTextChanges>,
}
