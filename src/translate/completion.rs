//! Completion item translation.

use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind, Documentation};

use crate::host::{
    CompletionEntry, CompletionEntryDetails, CompletionInfo, ScriptElementKind,
    SymbolDisplayPart, DECLARE_MODIFIER,
};

use super::kind::translate_optional_kind;

/// Whether an SCSS-flavor item is kept next to the CSS-flavor items.
///
/// Only pseudo selectors, which the engine reports as functions labelled
/// `:name`, are kept; everything else the SCSS flavor offers would flood the
/// list with entries the CSS flavor already covers.
pub fn is_scss_selector_function(item: &CompletionItem) -> bool {
    item.kind == Some(CompletionItemKind::FUNCTION) && item.label.starts_with(':')
}

pub fn translate_completion_entry(item: &CompletionItem) -> CompletionEntry {
    CompletionEntry {
        name: item.label.clone(),
        kind: translate_optional_kind(item.kind),
        kind_modifiers: DECLARE_MODIFIER.to_string(),
        sort_text: item.sort_text.clone().unwrap_or_else(|| item.label.clone()),
    }
}

pub fn translate_completion_info(items: &[CompletionItem]) -> CompletionInfo {
    CompletionInfo {
        is_global_completion: false,
        is_member_completion: false,
        is_new_identifier_location: false,
        entries: items.iter().map(translate_completion_entry).collect(),
    }
}

pub fn translate_completion_details(item: &CompletionItem) -> CompletionEntryDetails {
    CompletionEntryDetails {
        name: item.label.clone(),
        kind: translate_optional_kind(item.kind),
        kind_modifiers: DECLARE_MODIFIER.to_string(),
        display_parts: to_display_parts(item.detail.as_deref()),
        documentation: to_display_parts(item.documentation.as_ref().map(documentation_text)),
    }
}

/// Details for a name that is not among the current completions.
pub fn unknown_completion_details(name: &str) -> CompletionEntryDetails {
    CompletionEntryDetails {
        name: name.to_string(),
        kind: ScriptElementKind::Unknown,
        kind_modifiers: String::new(),
        display_parts: vec![SymbolDisplayPart::text(name)],
        documentation: Vec::new(),
    }
}

fn documentation_text(documentation: &Documentation) -> &str {
    match documentation {
        Documentation::String(text) => text,
        Documentation::MarkupContent(markup) => &markup.value,
    }
}

fn to_display_parts(text: Option<&str>) -> Vec<SymbolDisplayPart> {
    text.map(|t| vec![SymbolDisplayPart::text(t)])
        .unwrap_or_default()
}
