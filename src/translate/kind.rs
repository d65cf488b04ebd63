//! Closed mappings from engine enumerations to host enumerations.

use tower_lsp::lsp_types::{CompletionItemKind, DiagnosticSeverity};

use crate::host::{DiagnosticCategory, ScriptElementKind};

/// Map an engine completion kind to a host element kind.
///
/// Kinds without a host counterpart, including ones added to the protocol
/// later, map to [`ScriptElementKind::Unknown`].
pub fn translate_completion_item_kind(kind: CompletionItemKind) -> ScriptElementKind {
    match kind {
        CompletionItemKind::METHOD => ScriptElementKind::MemberFunction,
        CompletionItemKind::FUNCTION => ScriptElementKind::Function,
        CompletionItemKind::CONSTRUCTOR => ScriptElementKind::Constructor,
        CompletionItemKind::FIELD | CompletionItemKind::VARIABLE => ScriptElementKind::Variable,
        CompletionItemKind::CLASS => ScriptElementKind::Class,
        CompletionItemKind::INTERFACE => ScriptElementKind::Interface,
        CompletionItemKind::MODULE => ScriptElementKind::Module,
        CompletionItemKind::PROPERTY => ScriptElementKind::MemberVariable,
        CompletionItemKind::UNIT | CompletionItemKind::VALUE => ScriptElementKind::Const,
        CompletionItemKind::ENUM => ScriptElementKind::Enum,
        CompletionItemKind::KEYWORD => ScriptElementKind::Keyword,
        CompletionItemKind::COLOR => ScriptElementKind::Const,
        CompletionItemKind::REFERENCE => ScriptElementKind::Alias,
        CompletionItemKind::FILE => ScriptElementKind::Module,
        _ => ScriptElementKind::Unknown,
    }
}

/// Same as [`translate_completion_item_kind`], with a missing kind as unknown.
pub fn translate_optional_kind(kind: Option<CompletionItemKind>) -> ScriptElementKind {
    kind.map(translate_completion_item_kind)
        .unwrap_or(ScriptElementKind::Unknown)
}

/// Map an engine severity to a host category. Unspecified or unrecognized
/// severities are errors.
pub fn translate_severity(severity: Option<DiagnosticSeverity>) -> DiagnosticCategory {
    match severity {
        Some(DiagnosticSeverity::INFORMATION) | Some(DiagnosticSeverity::HINT) => {
            DiagnosticCategory::Message
        }
        Some(DiagnosticSeverity::WARNING) => DiagnosticCategory::Warning,
        _ => DiagnosticCategory::Error,
    }
}
