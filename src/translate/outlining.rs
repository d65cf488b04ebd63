//! Folding range translation.

use tower_lsp::lsp_types::{FoldingRange, Position};

use crate::css::TextDocument;
use crate::document::{from_virtual_position, VirtualDocument};
use crate::host::{OutliningSpan, OutliningSpanKind, TextSpan};

/// Translate an engine folding range into a host outlining span.
///
/// Ranges touching the wrapper's first or last line are dropped, as are ranges
/// that do not span at least two lines.
pub fn translate_folding_range(
    document: &VirtualDocument<'_>,
    range: &FoldingRange,
) -> Option<OutliningSpan> {
    let last_line = document.line_count().saturating_sub(1) as u32;
    if range.start_line == 0 || range.end_line >= last_line || range.end_line <= range.start_line
    {
        return None;
    }

    let context = document.context();
    let start_position = from_virtual_position(Position::new(
        range.start_line,
        range.start_character.unwrap_or(0),
    ));
    let end_line = from_virtual_position(Position::new(range.end_line, 0)).line;
    let end_character = range
        .end_character
        .unwrap_or_else(|| line_width(context.text(), end_line));

    let start = context.to_offset(start_position);
    let end = context.to_offset(Position::new(end_line, end_character));
    let text_span = TextSpan::new(start, end.saturating_sub(start));

    Some(OutliningSpan {
        text_span,
        hint_span: text_span,
        banner_text: "...".to_string(),
        auto_collapse: false,
        kind: OutliningSpanKind::Code,
    })
}

/// Width of a line of `text` in UTF-16 code units.
fn line_width(text: &str, line: u32) -> u32 {
    text.split('\n')
        .nth(line as usize)
        .map(|l| l.trim_end_matches('\r').encode_utf16().count() as u32)
        .unwrap_or(0)
}
