//! Diagnostic translation.

use tower_lsp::lsp_types::{Diagnostic, NumberOrString, Position};
use tracing::trace;

use crate::css::TextDocument;
use crate::document::{from_virtual_position, VirtualDocument};
use crate::host::{self, DEFAULT_ERROR_CODE, DIAGNOSTIC_SOURCE};

use super::kind::translate_severity;

/// Translate an engine diagnostic into a host diagnostic.
///
/// Returns `None` for diagnostics that cannot be placed in the template: on
/// the wrapper line, past the last line, or past the end of the literal.
pub fn translate_diagnostic(
    document: &VirtualDocument<'_>,
    diagnostic: &Diagnostic,
) -> Option<host::Diagnostic> {
    let context = document.context();
    let start = diagnostic.range.start;

    if start.line == 0
        || start.line as usize > document.line_count()
        || start.character as usize >= context.text().len()
    {
        trace!(
            line = start.line,
            character = start.character,
            message = %diagnostic.message,
            "dropping diagnostic outside the template"
        );
        return None;
    }

    let start_offset = template_offset(document, start);
    let end_offset = template_offset(document, diagnostic.range.end);

    let code = match diagnostic.code {
        Some(NumberOrString::Number(code)) => code,
        _ => DEFAULT_ERROR_CODE,
    };

    Some(host::Diagnostic {
        file: context.file_name().to_string(),
        start: start_offset,
        length: end_offset.saturating_sub(start_offset),
        message_text: diagnostic.message.clone(),
        category: translate_severity(diagnostic.severity),
        code,
        source: DIAGNOSTIC_SOURCE.to_string(),
    })
}

/// Template offset of a virtual position. Positions on or past the wrapper's
/// closing line map to the end of the literal.
fn template_offset(document: &VirtualDocument<'_>, position: Position) -> usize {
    let context = document.context();
    if position.line as usize >= document.line_count().saturating_sub(1) {
        return context.text().len();
    }
    context.to_offset(from_virtual_position(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{TemplateContext, TemplateSource};
    use crate::host::DiagnosticCategory;
    use tower_lsp::lsp_types::{DiagnosticSeverity, Position, Range};

    fn diagnostic(start: (u32, u32), end: (u32, u32)) -> Diagnostic {
        Diagnostic {
            range: Range::new(
                Position::new(start.0, start.1),
                Position::new(end.0, end.1),
            ),
            severity: Some(DiagnosticSeverity::WARNING),
            message: "Unknown property: 'colr'".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn shifts_into_template_offsets() {
        let template = TemplateSource::new("button.ts", "margin: 0;\ncolr: red;");
        let doc = VirtualDocument::new(&template);

        let translated = translate_diagnostic(&doc, &diagnostic((2, 0), (2, 4))).unwrap();
        assert_eq!(translated.file, "button.ts");
        assert_eq!(translated.start, 11);
        assert_eq!(translated.length, 4);
        assert_eq!(translated.category, DiagnosticCategory::Warning);
        assert_eq!(translated.code, 9999);
        assert_eq!(translated.source, "styled-css");
    }

    #[test]
    fn numeric_codes_pass_through() {
        let template = TemplateSource::new("a.ts", "colr: red;");
        let doc = VirtualDocument::new(&template);
        let mut d = diagnostic((1, 0), (1, 4));
        d.code = Some(NumberOrString::Number(42));

        assert_eq!(translate_diagnostic(&doc, &d).unwrap().code, 42);
    }

    #[test]
    fn drops_wrapper_line() {
        let template = TemplateSource::new("a.ts", "colr: red;");
        let doc = VirtualDocument::new(&template);
        assert!(translate_diagnostic(&doc, &diagnostic((0, 0), (0, 6))).is_none());
    }

    #[test]
    fn drops_lines_past_the_document() {
        let template = TemplateSource::new("a.ts", "colr: red;");
        let doc = VirtualDocument::new(&template);
        // three lines: wrapper, literal, closing brace
        assert!(translate_diagnostic(&doc, &diagnostic((3, 0), (3, 1))).is_some());
        assert!(translate_diagnostic(&doc, &diagnostic((4, 0), (4, 1))).is_none());
    }

    /// Context that maps positions past its text to offset 0.
    struct UnclampedSource(TemplateSource);

    impl TemplateContext for UnclampedSource {
        fn file_name(&self) -> &str {
            self.0.file_name()
        }

        fn text(&self) -> &str {
            self.0.text()
        }

        fn to_offset(&self, position: Position) -> usize {
            if position.line as usize >= self.text().lines().count() {
                return 0;
            }
            self.0.to_offset(position)
        }

        fn to_position(&self, offset: usize) -> Position {
            self.0.to_position(offset)
        }
    }

    #[test]
    fn closing_line_maps_to_end_of_literal() {
        let template = UnclampedSource(TemplateSource::new("a.ts", "&:hover {\n  color: red;"));
        let doc = VirtualDocument::new(&template);

        let translated = translate_diagnostic(&doc, &diagnostic((3, 0), (3, 0))).unwrap();
        assert_eq!(translated.start, 23);
        assert_eq!(translated.length, 0);

        let spanning = translate_diagnostic(&doc, &diagnostic((2, 2), (3, 1))).unwrap();
        assert_eq!(spanning.start, 12);
        assert_eq!(spanning.length, 11);
    }

    #[test]
    fn drops_characters_past_the_literal() {
        let template = TemplateSource::new("a.ts", "colr: red;");
        let doc = VirtualDocument::new(&template);
        assert!(translate_diagnostic(&doc, &diagnostic((1, 10), (1, 11))).is_none());
        assert!(translate_diagnostic(&doc, &diagnostic((1, 9), (1, 10))).is_some());
    }
}
