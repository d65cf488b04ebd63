//! Virtual stylesheet documents for template literals.
//!
//! A styled template holds bare declarations (`color: red;`), which are not a
//! valid stylesheet on their own. The virtual document wraps the literal in a
//! synthetic `:root{ ... }` block so the stylesheet engine can parse it. The
//! wrapper adds exactly one line before the literal, so mapping between the
//! two coordinate spaces is a fixed shift.

use tower_lsp::lsp_types::Position;

use crate::css::TextDocument;

use super::template::TemplateContext;

/// Text placed before the literal in the virtual document.
pub const WRAPPER_PREFIX: &str = ":root{\n";

/// Text placed after the literal in the virtual document.
pub const WRAPPER_SUFFIX: &str = "\n}";

/// URI reported for every virtual document.
pub const VIRTUAL_URI: &str = "untitled:embedded.scss";

/// Language id reported for every virtual document.
pub const LANGUAGE_ID: &str = "scss";

/// Shift a template position into the virtual document.
pub fn to_virtual_position(position: Position) -> Position {
    Position::new(position.line + 1, position.character)
}

/// Shift a virtual document position back into the template.
///
/// Positions on the wrapper line clamp to line 0.
pub fn from_virtual_position(position: Position) -> Position {
    Position::new(position.line.saturating_sub(1), position.character)
}

/// Shift a template offset into the virtual document.
pub fn to_virtual_offset(offset: usize) -> usize {
    offset + WRAPPER_PREFIX.len()
}

/// Shift a virtual document offset back into the template.
///
/// Offsets inside the wrapper prefix clamp to 0.
pub fn from_virtual_offset(offset: usize) -> usize {
    offset.saturating_sub(WRAPPER_PREFIX.len())
}

/// A synthetic stylesheet document built for a single query.
pub struct VirtualDocument<'a> {
    context: &'a dyn TemplateContext,
    text: String,
    line_count: usize,
}

impl<'a> VirtualDocument<'a> {
    /// Wrap the context's current literal text.
    pub fn new(context: &'a dyn TemplateContext) -> Self {
        let text = format!("{}{}{}", WRAPPER_PREFIX, context.text(), WRAPPER_SUFFIX);
        let line_count = text.matches('\n').count() + 1;
        Self {
            context,
            text,
            line_count,
        }
    }

    /// The template this document was built from.
    pub fn context(&self) -> &'a dyn TemplateContext {
        self.context
    }

    /// Line of the wrapper's closing brace.
    fn last_line(&self) -> u32 {
        (self.line_count - 1) as u32
    }
}

impl TextDocument for VirtualDocument<'_> {
    fn uri(&self) -> &str {
        VIRTUAL_URI
    }

    fn language_id(&self) -> &str {
        LANGUAGE_ID
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn position_at(&self, offset: usize) -> Position {
        if offset < WRAPPER_PREFIX.len() {
            return Position::new(0, offset as u32);
        }
        let inner = from_virtual_offset(offset);
        let literal_len = self.context.text().len();
        if inner > literal_len {
            // inside the suffix, after its newline
            let character = (inner - literal_len - 1).min(WRAPPER_SUFFIX.len() - 1);
            return Position::new(self.last_line(), character as u32);
        }
        to_virtual_position(self.context.to_position(inner))
    }

    fn offset_at(&self, position: Position) -> usize {
        if position.line == 0 {
            return (position.character as usize).min(WRAPPER_PREFIX.len() - 1);
        }
        if position.line >= self.last_line() {
            let character = (position.character as usize).min(WRAPPER_SUFFIX.len() - 1);
            return self.text.len() - (WRAPPER_SUFFIX.len() - 1) + character;
        }
        to_virtual_offset(self.context.to_offset(from_virtual_position(position)))
    }

    fn line_count(&self) -> usize {
        self.line_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TemplateSource;

    #[test]
    fn position_round_trip() {
        for line in 0..5 {
            for character in [0, 1, 17, 200] {
                let p = Position::new(line, character);
                assert_eq!(from_virtual_position(to_virtual_position(p)), p);
                let q = Position::new(line + 1, character);
                assert_eq!(to_virtual_position(from_virtual_position(q)), q);
            }
        }
    }

    #[test]
    fn offset_round_trip() {
        for offset in [0, 1, 6, 7, 8, 1024] {
            assert_eq!(from_virtual_offset(to_virtual_offset(offset)), offset);
        }
    }

    #[test]
    fn wrapper_region_clamps() {
        assert_eq!(from_virtual_offset(3), 0);
        assert_eq!(
            from_virtual_position(Position::new(0, 4)),
            Position::new(0, 4)
        );
    }

    #[test]
    fn wraps_literal_text() {
        let template = TemplateSource::new("a.ts", "color: red;");
        let doc = VirtualDocument::new(&template);
        assert_eq!(doc.text(), ":root{\ncolor: red;\n}");
        assert_eq!(doc.uri(), VIRTUAL_URI);
        assert_eq!(doc.language_id(), "scss");
        assert_eq!(doc.line_count(), 3);
    }

    #[test]
    fn line_count_follows_embedded_newlines() {
        let template = TemplateSource::new("a.ts", "\n  color: red;\n  margin: 0;\n");
        let doc = VirtualDocument::new(&template);
        assert_eq!(doc.line_count(), 6);
    }

    #[test]
    fn document_positions_go_through_the_template() {
        let template = TemplateSource::new("a.ts", "color: red;\nmargin: 0;");
        let doc = VirtualDocument::new(&template);

        // `margin` starts at byte 19 of the wrapped text
        assert_eq!(doc.position_at(19), Position::new(2, 0));
        assert_eq!(doc.offset_at(Position::new(2, 0)), 19);
        assert_eq!(&doc.text()[19..25], "margin");
    }

    #[test]
    fn wrapper_offsets_stay_on_wrapper_lines() {
        let template = TemplateSource::new("a.ts", "color: red;");
        let doc = VirtualDocument::new(&template);

        assert_eq!(doc.position_at(5), Position::new(0, 5));
        assert_eq!(doc.offset_at(Position::new(0, 5)), 5);
        // the closing brace of ":root{\ncolor: red;\n}"
        assert_eq!(doc.position_at(19), Position::new(2, 0));
        assert_eq!(doc.offset_at(Position::new(2, 0)), 19);
        assert_eq!(doc.position_at(20), Position::new(2, 1));
        assert_eq!(doc.position_at(18), Position::new(1, 11));
    }
}
