//! Translation of engine results into host results.
//!
//! Everything the engine reports is in virtual document coordinates; these
//! functions shift it back into the template before building host records.

mod code_fix;
mod completion;
mod diagnostics;
mod hover;
mod kind;
mod outlining;

pub use code_fix::{translate_code_actions, FIX_NAME};
pub use completion::{
    is_scss_selector_function, translate_completion_details, translate_completion_entry,
    translate_completion_info, unknown_completion_details,
};
pub use diagnostics::translate_diagnostic;
pub use hover::{flatten_hover_contents, translate_hover};
pub use kind::{translate_completion_item_kind, translate_optional_kind, translate_severity};
pub use outlining::translate_folding_range;

use tower_lsp::lsp_types::Range;

use crate::document::{from_virtual_position, TemplateContext};
use crate::host::TextSpan;

/// Map a virtual document range to a span of template offsets.
pub(crate) fn range_to_span(context: &dyn TemplateContext, range: Range) -> TextSpan {
    let start = context.to_offset(from_virtual_position(range.start));
    let end = context.to_offset(from_virtual_position(range.end));
    TextSpan::new(start, end.saturating_sub(start))
}
