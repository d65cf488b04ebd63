//! Template contexts: the host's handle to one styled template literal.
//!
//! The host locates tagged templates in its source files and hands each query
//! a [`TemplateContext`]. Offsets and positions exchanged through the context
//! live in the template's own coordinate space; the host relates that space to
//! the enclosing file.

use tower_lsp::lsp_types::Position;

use super::text::LineIndex;

/// A single embedded template occurrence, owned by the host.
pub trait TemplateContext {
    /// Name of the file that contains the template.
    fn file_name(&self) -> &str;

    /// Current literal text of the template.
    fn text(&self) -> &str;

    /// Convert a template position to a template offset.
    ///
    /// Callers only pass positions inside the template; the wrapper's closing
    /// line is resolved before this is reached.
    fn to_offset(&self, position: Position) -> usize;

    /// Convert a template offset to a template position.
    fn to_position(&self, offset: usize) -> Position;
}

/// A [`TemplateContext`] over an owned copy of the literal text.
///
/// Suitable for hosts that already extracted the template body, and for tests.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    file_name: String,
    line_index: LineIndex,
}

impl TemplateSource {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            line_index: LineIndex::new(text.into()),
        }
    }
}

impl TemplateContext for TemplateSource {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn text(&self) -> &str {
        self.line_index.source()
    }

    fn to_offset(&self, position: Position) -> usize {
        self.line_index
            .position_to_offset(position)
            .unwrap_or_else(|| self.line_index.source().len())
    }

    fn to_position(&self, offset: usize) -> Position {
        self.line_index.offset_to_position(offset)
    }
}
