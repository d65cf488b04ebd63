//! Hover translation.

use tower_lsp::lsp_types::{Hover, HoverContents, MarkedString, Position};

use crate::document::TemplateContext;
use crate::host::{QuickInfo, ScriptElementKind, SymbolDisplayPart, TextSpan};

use super::range_to_span;

/// Hover content as the engine may shape it.
#[derive(Debug)]
enum HoverContent<'a> {
    /// A bare string.
    Text(&'a str),
    /// A record whose text lives in a `value` field.
    Node(&'a str),
    List(Vec<HoverContent<'a>>),
}

impl<'a> HoverContent<'a> {
    fn from_contents(contents: &'a HoverContents) -> Self {
        match contents {
            HoverContents::Scalar(marked) => Self::from_marked(marked),
            HoverContents::Array(items) => {
                Self::List(items.iter().map(Self::from_marked).collect())
            }
            HoverContents::Markup(markup) => Self::Node(&markup.value),
        }
    }

    fn from_marked(marked: &'a MarkedString) -> Self {
        match marked {
            MarkedString::String(text) => Self::Text(text),
            MarkedString::LanguageString(code) => Self::Node(&code.value),
        }
    }

    fn flatten_into(&self, parts: &mut Vec<SymbolDisplayPart>) {
        match self {
            Self::Text(text) | Self::Node(text) => parts.push(SymbolDisplayPart::text(*text)),
            Self::List(items) => {
                for item in items {
                    item.flatten_into(parts);
                }
            }
        }
    }
}

/// Flatten hover contents into text parts in traversal order.
pub fn flatten_hover_contents(contents: &HoverContents) -> Vec<SymbolDisplayPart> {
    let mut parts = Vec::new();
    HoverContent::from_contents(contents).flatten_into(&mut parts);
    parts
}

/// Translate an engine hover into host quick info.
///
/// `position` is the template position the query was made at; it anchors a
/// one-character span when the engine reports no range.
pub fn translate_hover(
    context: &dyn TemplateContext,
    position: Position,
    hover: &Hover,
) -> QuickInfo {
    let text_span = match hover.range {
        Some(range) => range_to_span(context, range),
        None => TextSpan::new(context.to_offset(position), 1),
    };

    QuickInfo {
        kind: ScriptElementKind::String,
        kind_modifiers: String::new(),
        text_span,
        display_parts: Vec::new(),
        documentation: flatten_hover_contents(&hover.contents),
    }
}
