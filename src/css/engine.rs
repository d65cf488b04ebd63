//! The stylesheet engine seam.
//!
//! The adapter talks to stylesheet engines only through these traits, so a
//! host can plug in a richer engine than the built-in [`CssLanguageService`].
//!
//! [`CssLanguageService`]: super::CssLanguageService

use tower_lsp::lsp_types::{
    CodeAction, CompletionList, Diagnostic, FoldingRange, Hover, Position, Range,
};

use crate::settings::Settings;

use super::parser::Stylesheet;

/// Dialect an engine instance is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Css,
    Scss,
}

impl Flavor {
    /// Name used as the diagnostic source.
    pub fn as_str(self) -> &'static str {
        match self {
            Flavor::Css => "css",
            Flavor::Scss => "scss",
        }
    }
}

/// Read-only view of a document handed to an engine.
///
/// Offsets are byte offsets into [`text`](TextDocument::text); positions use
/// UTF-16 columns.
pub trait TextDocument {
    fn uri(&self) -> &str;
    fn language_id(&self) -> &str;
    fn text(&self) -> &str;
    fn position_at(&self, offset: usize) -> Position;
    fn offset_at(&self, position: Position) -> usize;
    fn line_count(&self) -> usize;
}

/// An embedded stylesheet language engine.
pub trait StylesheetEngine {
    /// Create an engine for `flavor`, configured from `settings`.
    fn new(flavor: Flavor, settings: &Settings) -> Self
    where
        Self: Sized;

    fn parse_stylesheet(&self, document: &dyn TextDocument) -> Stylesheet;

    fn do_complete(
        &self,
        document: &dyn TextDocument,
        position: Position,
        stylesheet: &Stylesheet,
    ) -> CompletionList;

    fn do_hover(
        &self,
        document: &dyn TextDocument,
        position: Position,
        stylesheet: &Stylesheet,
    ) -> Option<Hover>;

    fn do_validation(&self, document: &dyn TextDocument, stylesheet: &Stylesheet)
        -> Vec<Diagnostic>;

    fn get_folding_ranges(&self, document: &dyn TextDocument) -> Vec<FoldingRange>;

    /// Quick fixes for `diagnostics`, all of which overlap `range`.
    fn do_code_actions(
        &self,
        document: &dyn TextDocument,
        range: Range,
        diagnostics: &[Diagnostic],
        stylesheet: &Stylesheet,
    ) -> Vec<CodeAction>;
}
